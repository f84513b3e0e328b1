//! Bitwise helpers over primitive integers.
//!
//! All functions are generic over [`num_traits::PrimInt`], so they work for
//! signed and unsigned integers of any width. Arithmetic that may wrap
//! (two's complement negation, `v + 1`) uses wrapping operations.

use num_traits::{PrimInt, WrappingAdd};

/// Number of bits in `T`.
#[inline]
fn width<T>() -> u32 {
    (std::mem::size_of::<T>() * 8) as u32
}

/// A value whose only set bit is `nth_bit`.
///
/// # Panics
/// Panics if `nth_bit` is not smaller than the width of `T`.
#[inline]
pub fn mask<T: PrimInt>(nth_bit: u32) -> T {
    assert!(nth_bit < width::<T>(), "bit index {nth_bit} out of range");
    T::one() << nth_bit as usize
}

/// State of the `nth_bit` of `key`.
#[inline]
pub fn get_bit<T: PrimInt>(key: T, nth_bit: u32) -> bool {
    key & mask::<T>(nth_bit) != T::zero()
}

/// Isolates the lowest set bit of `val` (`val & -val`); `0` maps to `0`.
#[inline]
pub fn first_set_bit<T: PrimInt + WrappingAdd>(val: T) -> T {
    val & (!val).wrapping_add(&T::one())
}

/// Isolates the lowest unset bit of `val` (`!val & (val + 1)`).
#[inline]
pub fn first_unset_bit<T: PrimInt + WrappingAdd>(val: T) -> T {
    !val & val.wrapping_add(&T::one())
}

/// Number of set bits in `val`.
#[inline]
pub fn nb_set_bits<T: PrimInt>(val: T) -> u32 {
    val.count_ones()
}

/// Renders the `nb_bits` lowest bits of `value`, most significant first.
///
/// `nb_bits == 0` (or anything wider than `T`) renders the full width.
pub fn bit_string<T: PrimInt>(value: T, nb_bits: u32) -> String {
    let w = width::<T>();
    let n = if nb_bits == 0 { w } else { nb_bits.min(w) };
    (0..n)
        .rev()
        .map(|i| if get_bit(value, i) { '1' } else { '0' })
        .collect()
}

/// `x` raised to `exponent`, usable in const contexts.
pub const fn pow(x: i64, exponent: u32) -> i64 {
    let mut acc = 1;
    let mut i = 0;
    while i < exponent {
        acc *= x;
        i += 1;
    }
    acc
}

/// `floor(log2(x))`, usable in const contexts. `log2(0)` is `0`.
pub const fn log2(x: u64) -> u32 {
    if x == 0 { 0 } else { 63 - x.leading_zeros() }
}
