//! DrawRng trait: the sampling interface of the number generator.
//!
//! Any generator that can produce `k` uniformly random bits can drive the
//! selection. Bounded integers are built by rejection sampling on top of
//! [`get_rand_bits`](DrawRng::get_rand_bits), and sampling without
//! replacement switches between a shrinking pool and a rejection set
//! depending on how large the population is relative to the request.

use std::collections::HashSet;
use std::ops::RangeInclusive;

use crate::error::RingSeedError;
use crate::utils::bits;

/// Base size of the selection set below which the pool strategy wins.
const POOL_SETSIZE_BASE: usize = 21;

/// Trait for deterministic generators used to select draw numbers.
///
/// Implementations must return the same sequence of bits for the same
/// initial state. Everything else (bounded values, sampling) is derived
/// from that stream by the provided methods, so two implementations with
/// identical bit streams select identical numbers.
pub trait DrawRng {
    /// Returns a value holding `k` random bits (`k <= 64`).
    fn get_rand_bits(&mut self, k: u32) -> u64;

    /// Returns a uniformly distributed value in `[0, n)`.
    ///
    /// Draws `bit_length(n)` bits and rejects values `>= n`. Returns `0`
    /// when `n == 0`.
    fn below(&mut self, n: u64) -> u64 {
        if n == 0 {
            return 0;
        }
        let k = bits::bits_required(n);
        let mut r = self.get_rand_bits(k);
        while r >= n {
            r = self.get_rand_bits(k);
        }
        r
    }

    /// Selects `k` distinct indices from `0..n` in selection order.
    ///
    /// For small populations a pool of candidates is kept and each pick is
    /// swapped with the last live slot. For large populations picks are drawn
    /// from the whole range and repeats are rejected against the set of
    /// already selected indices.
    ///
    /// # Errors
    /// Returns [`RingSeedError::InvalidInput`] if `k > n`.
    fn sample_indices(&mut self, n: usize, k: usize) -> Result<Vec<usize>, RingSeedError> {
        if k > n {
            return Err(RingSeedError::InvalidInput(format!(
                "cannot sample {} values from a population of {}",
                k, n
            )));
        }

        let mut result = Vec::with_capacity(k);
        if n <= pool_threshold(k) {
            let mut pool: Vec<usize> = (0..n).collect();
            for i in 0..k {
                let j = self.below((n - i) as u64) as usize;
                result.push(pool[j]);
                pool[j] = pool[n - i - 1];
            }
        } else {
            let mut selected = HashSet::with_capacity(k);
            for _ in 0..k {
                let mut j = self.below(n as u64) as usize;
                while selected.contains(&j) {
                    j = self.below(n as u64) as usize;
                }
                selected.insert(j);
                result.push(j);
            }
        }
        Ok(result)
    }

    /// Selects `k` distinct values from an inclusive range, in selection
    /// order.
    ///
    /// # Errors
    /// Returns [`RingSeedError::InvalidInput`] if the range holds fewer than
    /// `k` values.
    fn sample_range(
        &mut self,
        range: RangeInclusive<u32>,
        k: usize,
    ) -> Result<Vec<u32>, RingSeedError> {
        let start = *range.start();
        let n = if range.is_empty() {
            0
        } else {
            (range.end() - start) as usize + 1
        };
        Ok(self
            .sample_indices(n, k)?
            .into_iter()
            .map(|j| start + j as u32)
            .collect())
    }
}

/// Largest population for which the pool strategy is used when selecting
/// `k` values.
fn pool_threshold(k: usize) -> usize {
    let mut setsize = POOL_SETSIZE_BASE;
    if k > 5 {
        let exp = ((k * 3) as f64).ln() / 4f64.ln();
        setsize += 4usize.pow(exp.ceil() as u32);
    }
    setsize
}
