use bytemuck::PodCastError;
use thiserror::Error;

/// Failure modes of reinterpreting raw bytes as a wrapped number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CastError {
	/// The byte slice length does not match the width of the target type.
	#[error("byte slice length does not match the target width")]
	SizeMismatch,
	/// The byte slice is not sufficiently aligned for the target type.
	#[error("byte slice is not aligned for the target type")]
	Misaligned,
}

impl From<PodCastError> for CastError {
	fn from(error: PodCastError) -> Self {
		match error {
			PodCastError::TargetAlignmentGreaterAndInputNotAligned
			| PodCastError::AlignmentMismatch => Self::Misaligned,
			_ => Self::SizeMismatch,
		}
	}
}
