//! Base input sequences for the sorting benchmark.
//!
//! Three sequences of `max_size` elements are generated once; every
//! benchmark case sorts a prefix of one of them, so at a given size all
//! algorithms see identical input.

use std::fmt;

use rand::Rng;
use rand::distr::{Distribution, Uniform};
use serde::{Deserialize, Serialize};

use crate::error::{ExperimentError, Result};
use crate::rng::seeded_rng;

/// Distribution of the benchmark input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    Random,
    Reversed,
    #[serde(rename = "almost")]
    AlmostSorted,
}

impl InputKind {
    pub const ALL: [InputKind; 3] = [
        InputKind::Random,
        InputKind::Reversed,
        InputKind::AlmostSorted,
    ];

    /// Label written to the `type` column
    pub fn label(&self) -> &'static str {
        match self {
            InputKind::Random => "random",
            InputKind::Reversed => "reversed",
            InputKind::AlmostSorted => "almost",
        }
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone)]
pub struct ArrayGenerator {
    max_value: i32,
    random: Vec<i32>,
    reversed: Vec<i32>,
    almost_sorted: Vec<i32>,
}

impl ArrayGenerator {
    /// Build the three base sequences from a single generator seeded with
    /// `seed`.
    ///
    /// Draw order is fixed: `max_size` values in index order, then
    /// `max_size / 100` swaps of two indices each (i before j). Both the
    /// random values and the perturbation therefore depend on the seed.
    pub fn new(max_size: usize, max_value: i32, seed: u64) -> Result<Self> {
        if max_value < 0 {
            return Err(ExperimentError::invalid(
                "max value",
                format!("{max_value} is negative"),
            ));
        }

        let mut rng = seeded_rng(seed);
        let values = Uniform::<i32>::new_inclusive(0, max_value)
            .map_err(|e| ExperimentError::invalid("max value", e.to_string()))?;

        let random: Vec<i32> = (0..max_size).map(|_| values.sample(&mut rng)).collect();

        let mut reversed = random.clone();
        reversed.sort_unstable_by(|a, b| b.cmp(a));

        let mut almost_sorted = random.clone();
        almost_sorted.sort_unstable();
        for _ in 0..max_size / 100 {
            let i = rng.random_range(0..max_size);
            let j = rng.random_range(0..max_size);
            almost_sorted.swap(i, j);
        }

        Ok(Self {
            max_value,
            random,
            reversed,
            almost_sorted,
        })
    }

    pub fn max_size(&self) -> usize {
        self.random.len()
    }

    pub fn max_value(&self) -> i32 {
        self.max_value
    }

    pub fn random(&self, n: usize) -> Result<Vec<i32>> {
        self.prefix(InputKind::Random, n)
    }

    /// First `n` elements of the descending base sequence. This is the `n`
    /// largest generated values, not a sorted copy of `random(n)`.
    pub fn reversed(&self, n: usize) -> Result<Vec<i32>> {
        self.prefix(InputKind::Reversed, n)
    }

    pub fn almost_sorted(&self, n: usize) -> Result<Vec<i32>> {
        self.prefix(InputKind::AlmostSorted, n)
    }

    /// First `n` elements of the base sequence for `kind`
    pub fn prefix(&self, kind: InputKind, n: usize) -> Result<Vec<i32>> {
        self.prefix_slice(kind, n).map(<[i32]>::to_vec)
    }

    /// Borrowed form of [`ArrayGenerator::prefix`]
    pub fn prefix_slice(&self, kind: InputKind, n: usize) -> Result<&[i32]> {
        self.base(kind)
            .get(..n)
            .ok_or(ExperimentError::PrefixOutOfRange {
                requested: n,
                available: self.max_size(),
            })
    }

    /// Full base sequence for `kind`
    pub fn base(&self, kind: InputKind) -> &[i32] {
        match kind {
            InputKind::Random => &self.random,
            InputKind::Reversed => &self.reversed,
            InputKind::AlmostSorted => &self.almost_sorted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequences() {
        let a = ArrayGenerator::new(1000, 100, 42).unwrap();
        let b = ArrayGenerator::new(1000, 100, 42).unwrap();
        assert_eq!(a.random(10).unwrap(), a.random(10).unwrap());
        for kind in InputKind::ALL {
            assert_eq!(a.base(kind), b.base(kind), "{kind}");
        }
    }

    #[test]
    fn test_prefix_slice_borrows_base() {
        let arrays = ArrayGenerator::new(200, 50, 7).unwrap();
        for kind in InputKind::ALL {
            let slice = arrays.prefix_slice(kind, 120).unwrap();
            assert!(std::ptr::eq(slice.as_ptr(), arrays.base(kind).as_ptr()));
            assert_eq!(slice, arrays.prefix(kind, 120).unwrap().as_slice());
        }
        assert!(matches!(
            arrays.prefix_slice(InputKind::Reversed, 201),
            Err(ExperimentError::PrefixOutOfRange {
                requested: 201,
                available: 200
            })
        ));
    }

    #[test]
    fn test_serde_names_match_labels() {
        use serde::Deserialize;
        use serde::de::IntoDeserializer;
        use serde::de::value::{Error, StrDeserializer};

        for kind in InputKind::ALL {
            let de: StrDeserializer<'_, Error> = kind.label().into_deserializer();
            assert_eq!(InputKind::deserialize(de).unwrap(), kind);
        }
    }

    #[test]
    fn test_different_seed_different_random() {
        let a = ArrayGenerator::new(1000, 100, 1).unwrap();
        let b = ArrayGenerator::new(1000, 100, 2).unwrap();
        assert_ne!(a.base(InputKind::Random), b.base(InputKind::Random));
    }

    #[test]
    fn test_values_within_range() {
        let generator = ArrayGenerator::new(5000, 37, 42).unwrap();
        assert!(generator.base(InputKind::Random).iter().all(|v| (0..=37).contains(v)));
    }

    #[test]
    fn test_reversed_is_descending_permutation() {
        let generator = ArrayGenerator::new(2000, 6000, 42).unwrap();
        let reversed = generator.base(InputKind::Reversed);
        assert!(reversed.windows(2).all(|w| w[0] >= w[1]));

        let mut from_random = generator.base(InputKind::Random).to_vec();
        from_random.sort();
        let mut from_reversed = reversed.to_vec();
        from_reversed.reverse();
        assert_eq!(from_random, from_reversed);
    }

    #[test]
    fn test_almost_sorted_is_lightly_perturbed_permutation() {
        let generator = ArrayGenerator::new(10_000, 6000, 42).unwrap();
        let almost = generator.base(InputKind::AlmostSorted);

        let mut sorted = generator.base(InputKind::Random).to_vec();
        sorted.sort();
        let mut check = almost.to_vec();
        check.sort();
        assert_eq!(check, sorted);

        // 100 swaps can displace at most 200 positions
        let displaced = almost.iter().zip(&sorted).filter(|(a, b)| a != b).count();
        assert!(displaced <= 200, "{displaced} positions out of place");
    }

    #[test]
    fn test_prefixes_come_from_base_sequences() {
        let generator = ArrayGenerator::new(1000, 100, 42).unwrap();
        let full = generator.random(1000).unwrap();
        assert_eq!(generator.random(10).unwrap(), full[..10]);
        assert_eq!(
            generator.reversed(25).unwrap(),
            generator.base(InputKind::Reversed)[..25]
        );
        assert_eq!(generator.almost_sorted(0).unwrap(), Vec::<i32>::new());

        // full-size reversed prefix is exactly the descending sort of random
        let mut descending = full;
        descending.sort_by(|a, b| b.cmp(a));
        assert_eq!(generator.reversed(1000).unwrap(), descending);
    }

    #[test]
    fn test_prefix_out_of_range() {
        let generator = ArrayGenerator::new(100, 10, 42).unwrap();
        assert!(matches!(
            generator.almost_sorted(101),
            Err(ExperimentError::PrefixOutOfRange {
                requested: 101,
                available: 100
            })
        ));
    }

    #[test]
    fn test_negative_max_value_rejected() {
        assert!(ArrayGenerator::new(10, -1, 42).is_err());
    }

    #[test]
    fn test_empty_generator() {
        let generator = ArrayGenerator::new(0, 10, 42).unwrap();
        assert_eq!(generator.max_size(), 0);
        assert!(generator.random(0).unwrap().is_empty());
        assert!(generator.random(1).is_err());
    }
}
