use core::ffi::c_int;
use core::ffi::c_long;
use core::ffi::c_longlong;
use core::ffi::c_schar;
use core::ffi::c_short;
use core::ffi::c_uchar;
use core::ffi::c_uint;
use core::ffi::c_ulong;
use core::ffi::c_ulonglong;
use core::ffi::c_ushort;

use crate::Number;

// The C character type is three-way: `core::ffi::c_char`, `c_schar` and
// `c_uchar` are distinct types. Only the explicitly signed and unsigned
// variants are numeric wrappers here; Rust's own `char` is a Unicode
// scalar, not a number, and has no wrapper.

/// Wrapper over the C `signed char` type.
pub type SignedChar = Number<c_schar>;
/// Wrapper over the C `unsigned char` type.
pub type UnsignedChar = Number<c_uchar>;

/// Wrapper over the C `short` type.
pub type Short = Number<c_short>;
/// Wrapper over the C `unsigned short` type.
pub type UShort = Number<c_ushort>;
/// Wrapper over the C `int` type.
pub type Int = Number<c_int>;
/// Wrapper over the C `unsigned int` type.
pub type UInt = Number<c_uint>;
/// Wrapper over the C `long` type. The width follows the target's C ABI.
pub type Long = Number<c_long>;
/// Wrapper over the C `unsigned long` type. The width follows the target's
/// C ABI.
pub type ULong = Number<c_ulong>;
/// Wrapper over the C `long long` type.
pub type LongLong = Number<c_longlong>;
/// Wrapper over the C `unsigned long long` type.
pub type ULongLong = Number<c_ulonglong>;

/// Wrapper over `i8`.
pub type Int8 = Number<i8>;
/// Wrapper over `u8`.
pub type UInt8 = Number<u8>;
/// Wrapper over `i16`.
pub type Int16 = Number<i16>;
/// Wrapper over `u16`.
pub type UInt16 = Number<u16>;
/// Wrapper over `i32`.
pub type Int32 = Number<i32>;
/// Wrapper over `u32`.
pub type UInt32 = Number<u32>;
/// Wrapper over `i64`.
pub type Int64 = Number<i64>;
/// Wrapper over `u64`.
pub type UInt64 = Number<u64>;
/// Wrapper over `i128`.
pub type Int128 = Number<i128>;
/// Wrapper over `u128`.
pub type UInt128 = Number<u128>;
/// Wrapper over `isize`.
pub type Isize = Number<isize>;
/// Wrapper over `usize`.
pub type Usize = Number<usize>;

/// Single-precision floating-point wrapper.
pub type Float = Number<f32>;
/// Double-precision floating-point wrapper.
pub type Double = Number<f64>;
/// Extended-precision floating-point wrapper. Rust has no stable extended
/// float, so this is double precision, the `long double == double`
/// convention of MSVC targets.
pub type LongDouble = Number<f64>;
