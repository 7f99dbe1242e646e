use crate::CastError;
use crate::Number;
use crate::Primitive;

impl<T: Primitive> Number<T> {
	/// Borrows the wrapper's underlying bytes in native order.
	#[inline(always)]
	#[must_use]
	pub fn to_bytes(&self) -> &[u8] {
		bytemuck::bytes_of(self)
	}

	/// Reinterprets a byte slice as `&Number<T>` (zero-copy). Returns an
	/// error if the slice has incorrect length or alignment.
	#[inline(always)]
	pub fn try_from_bytes(data: &[u8]) -> Result<&Self, CastError> {
		bytemuck::try_from_bytes(data).map_err(CastError::from)
	}

	/// Mutable variant of [`Number::try_from_bytes`].
	#[inline(always)]
	pub fn try_from_bytes_mut(data: &mut [u8]) -> Result<&mut Self, CastError> {
		bytemuck::try_from_bytes_mut(data).map_err(CastError::from)
	}
}
