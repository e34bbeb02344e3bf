//! Bit-level helpers for the seed derivation and the PRNG.
//!
//! Provides the parity word of a draw, bit-length queries used by the
//! rejection sampler, and the 32-bit word split used to seed the
//! Mersenne Twister from an arbitrary integer.

use crate::error::RingSeedError;

/// Widest parity word that can be represented.
pub const MAX_PARITY_BITS: usize = 128;

/// Builds the parity word of a sequence of numbers.
///
/// Each number contributes one bit (`1` if odd, `0` if even), concatenated
/// in sequence order with the first number as the most significant bit. The
/// bit width of the word equals the length of the sequence.
///
/// # Parameters
/// - `numbers`: The numbers, in draw order.
///
/// # Returns
/// The parity word as an unsigned integer.
///
/// # Errors
/// Returns [`RingSeedError::InvalidInput`] if the sequence is longer than
/// [`MAX_PARITY_BITS`].
///
/// # Examples
///
/// ```
/// use ringseed::utils::bits::parity_word;
///
/// // odd, odd, even, even, even, odd, even -> 0b1100010
/// assert_eq!(parity_word(&[3, 9, 16, 26, 34, 41, 46]).unwrap(), 98);
/// ```
pub fn parity_word(numbers: &[u32]) -> Result<u128, RingSeedError> {
    if numbers.len() > MAX_PARITY_BITS {
        return Err(RingSeedError::InvalidInput(format!(
            "parity word needs {} bits, at most {} supported",
            numbers.len(),
            MAX_PARITY_BITS
        )));
    }
    Ok(numbers
        .iter()
        .fold(0u128, |word, &n| (word << 1) | u128::from(n & 1)))
}

/// Returns the number of bits required to represent the given number.
///
/// # Parameters
/// - `num`: The number to analyze.
///
/// # Returns
/// The number of significant bits (`0` for `0`).
pub fn bits_required(num: u64) -> u32 {
    u64::BITS - num.leading_zeros()
}

/// Splits a 64-bit integer into little-endian 32-bit words, dropping
/// high zero words.
///
/// Zero is represented by a single zero word, so the result is never empty.
///
/// # Parameters
/// - `value`: The integer to split.
///
/// # Returns
/// One or two 32-bit words, least significant first.
pub fn to_u32_words(value: u64) -> Vec<u32> {
    let low = value as u32;
    let high = (value >> 32) as u32;
    if high == 0 {
        vec![low]
    } else {
        vec![low, high]
    }
}
