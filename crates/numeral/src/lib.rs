#![no_std]
#![allow(clippy::inline_always)]

//! Numeric values as first-class objects.
//!
//! [`Number<T>`] wraps any built-in integer or floating-point type in a
//! `#[repr(transparent)]` value object with a uniform capability surface
//! (range, signedness, NaN and infinity support), comparison against raw
//! values, and hashing identical to the raw value so that wrapped and raw
//! numbers are interchangeable as map keys.
//!
//! Byte-order inversion and bit rotation come from the companion
//! [`numeral_bit_primitives`] crate and are re-exported at the root.

mod aliases;
mod bytes;
mod error;
mod hash;
mod number;
mod predicates;
mod primitive;

pub use bytemuck;
pub use bytemuck::Pod;
pub use bytemuck::Zeroable;
pub use numeral_bit_primitives as bit_primitives;
pub use numeral_bit_primitives::BitPrimitive;
pub use numeral_bit_primitives::invert_byte_order;
pub use numeral_bit_primitives::rotate_bits_left;
pub use numeral_bit_primitives::rotate_bits_right;
pub use numeral_bit_primitives::to_big_endian;
pub use numeral_bit_primitives::to_little_endian;

pub use crate::aliases::*;
pub use crate::error::CastError;
pub use crate::number::Number;
pub use crate::predicates::is_finite;
pub use crate::predicates::is_nan;
pub use crate::primitive::Primitive;

/// Make sure all traits are available.
pub mod prelude {
	pub use crate::BitPrimitive;
	pub use crate::Number;
	pub use crate::Primitive;
}

#[cfg(test)]
extern crate std;
