//! PCG32 pseudorandom number generator (PCG-XSH-RR) and the uniform
//! helpers the layout engine draws from.
//!
//! Same (seed, seq) pair, same stream: layouts are reproducible.

const MULTIPLIER: u64 = 6_364_136_223_846_793_005;

/// Source of uniform randomness for placement and item resolution.
///
/// Only `next_float` must be provided; the uniform helpers are derived
/// from it so a test double can count or script draws.
pub trait RandomSource {
    /// Uniform value in [0, 1).
    fn next_float(&mut self) -> f64;

    /// Uniform integer in [0, n). `n` must be positive.
    fn uniform_int(&mut self, n: usize) -> usize {
        debug_assert!(n > 0, "uniform_int requires n > 0");
        let v = (self.next_float() * n as f64).floor() as usize;
        // Guards the rounding edge where next_float() * n lands on n.
        v.min(n.saturating_sub(1))
    }

    /// Uniform real in [lo, hi). Requires lo < hi.
    fn uniform_in_range(&mut self, lo: f64, hi: f64) -> f64 {
        debug_assert!(lo < hi, "uniform_in_range requires lo < hi");
        let v = lo + self.next_float() * (hi - lo);
        if v < hi {
            v
        } else {
            lo
        }
    }

    /// Fisher–Yates shuffle into a new vector; the input is untouched.
    fn shuffle<T: Clone>(&mut self, items: &[T]) -> Vec<T>
    where
        Self: Sized,
    {
        let mut result = items.to_vec();
        for i in (1..result.len()).rev() {
            let j = self.uniform_int(i + 1);
            result.swap(i, j);
        }
        result
    }
}

pub struct Pcg32 {
    state: u64,
    inc: u64,
}

impl Pcg32 {
    pub fn new(seed: u64, seq: u64) -> Self {
        let inc = (seq << 1) | 1;
        let mut rng = Pcg32 { state: 0, inc };
        rng.advance();
        rng.state = rng.state.wrapping_add(seed);
        rng.advance();
        rng
    }

    fn advance(&mut self) {
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(self.inc);
    }

    pub fn next_u32(&mut self) -> u32 {
        let old = self.state;
        self.advance();
        let xorshifted = (((old >> 18) ^ old) >> 27) as u32;
        let rot = (old >> 59) as u32;
        (xorshifted >> rot) | (xorshifted << (rot.wrapping_neg() & 31))
    }
}

impl RandomSource for Pcg32 {
    fn next_float(&mut self) -> f64 {
        self.next_u32() as f64 / (u32::MAX as f64 + 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_values() {
        let mut rng = Pcg32::new(42, 54);
        let expected: [u32; 5] = [
            0xa15c02b7, 0x7b47f409, 0xba1d3330, 0x83d2f293,
            0xbfa4784b,
        ];
        for exp in expected {
            assert_eq!(rng.next_u32(), exp);
        }
    }

    #[test]
    fn float_range() {
        let mut rng = Pcg32::new(1, 0);
        for _ in 0..1000 {
            let f = rng.next_float();
            assert!((0.0..1.0).contains(&f));
        }
    }

    #[test]
    fn uniform_int_range() {
        let mut rng = Pcg32::new(1, 0);
        for n in [1usize, 2, 5, 13, 800] {
            for _ in 0..500 {
                assert!(rng.uniform_int(n) < n);
            }
        }
    }

    #[test]
    fn uniform_int_of_one_is_zero() {
        let mut rng = Pcg32::new(9, 0);
        for _ in 0..100 {
            assert_eq!(rng.uniform_int(1), 0);
        }
    }

    #[test]
    fn uniform_in_range_bounds() {
        let mut rng = Pcg32::new(7, 3);
        for &(lo, hi) in &[(0.0, 359.0), (-30.0, -25.0), (-0.5, 0.5)] {
            for _ in 0..500 {
                let v = rng.uniform_in_range(lo, hi);
                assert!(v >= lo && v < hi, "{v} outside [{lo}, {hi})");
            }
        }
    }

    #[test]
    fn shuffle_is_permutation() {
        let mut rng = Pcg32::new(11, 0);
        let input: Vec<u32> = (0..50).collect();
        let shuffled = rng.shuffle(&input);
        assert_eq!(shuffled.len(), input.len());
        let mut sorted = shuffled.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, input);
        // Input is untouched.
        assert_eq!(input, (0..50).collect::<Vec<u32>>());
    }

    #[test]
    fn shuffle_keeps_duplicates() {
        let mut rng = Pcg32::new(5, 0);
        let input = vec!["a", "b", "a", "c", "a"];
        let mut out = rng.shuffle(&input);
        out.sort_unstable();
        assert_eq!(out, vec!["a", "a", "a", "b", "c"]);
    }

    #[test]
    fn shuffle_trivial_sequences() {
        let mut rng = Pcg32::new(3, 0);
        let empty: Vec<i32> = Vec::new();
        assert!(rng.shuffle(&empty).is_empty());
        assert_eq!(rng.shuffle(&[42]), vec![42]);
    }

    #[test]
    fn shuffle_reaches_every_permutation() {
        let mut rng = Pcg32::new(2024, 0);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..600 {
            seen.insert(rng.shuffle(&[1, 2, 3]));
        }
        assert_eq!(seen.len(), 6);
    }
}
