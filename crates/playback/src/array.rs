//! Random input arrays.

use rand::Rng;
use thiserror::Error;

/// Shape of a generated input array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrayConfig {
    size: usize,
    min_value: u32,
    max_value: u32,
}

/// Errors that can occur when validating an array config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ArrayConfigError {
    #[error("min_value ({min}) must not exceed max_value ({max})")]
    EmptyRange { min: u32, max: u32 },
}

impl Default for ArrayConfig {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(50, 5, 100).unwrap()
    }
}

impl ArrayConfig {
    /// Creates a config for `size` values drawn from `min_value..=max_value`.
    ///
    /// # Errors
    ///
    /// Returns an error if `min_value > max_value`.
    pub fn new(size: usize, min_value: u32, max_value: u32) -> Result<Self, ArrayConfigError> {
        if min_value > max_value {
            return Err(ArrayConfigError::EmptyRange {
                min: min_value,
                max: max_value,
            });
        }

        Ok(Self {
            size,
            min_value,
            max_value,
        })
    }

    /// Returns the number of values to generate.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the smallest value that may be generated.
    #[must_use]
    pub fn min_value(&self) -> u32 {
        self.min_value
    }

    /// Returns the largest value that may be generated.
    #[must_use]
    pub fn max_value(&self) -> u32 {
        self.max_value
    }
}

/// Draws `config.size()` values independently and uniformly from the
/// inclusive range `min_value..=max_value`.
pub fn generate_values<R>(config: &ArrayConfig, rng: &mut R) -> Vec<u32>
where
    R: Rng,
{
    (0..config.size)
        .map(|_| rng.gen_range(config.min_value..=config.max_value))
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    use super::*;

    #[test]
    fn rejects_inverted_range() {
        assert_eq!(
            ArrayConfig::new(10, 9, 3),
            Err(ArrayConfigError::EmptyRange { min: 9, max: 3 })
        );
    }

    #[test]
    fn values_stay_in_range() {
        let config = ArrayConfig::new(500, 5, 9).unwrap();
        let mut rng = Pcg64::seed_from_u64(7);

        let values = generate_values(&config, &mut rng);

        assert_eq!(values.len(), 500);
        assert!(values.iter().all(|v| (5..=9).contains(v)));
        // 500 draws from five values should hit both ends.
        assert!(values.contains(&5));
        assert!(values.contains(&9));
    }

    #[test]
    fn single_value_range() {
        let config = ArrayConfig::new(4, 42, 42).unwrap();
        let mut rng = Pcg64::seed_from_u64(0);

        assert_eq!(generate_values(&config, &mut rng), [42, 42, 42, 42]);
    }

    #[test]
    fn same_seed_same_values() {
        let config = ArrayConfig::default();

        let a = generate_values(&config, &mut Pcg64::seed_from_u64(99));
        let b = generate_values(&config, &mut Pcg64::seed_from_u64(99));

        assert_eq!(a, b);
    }

    #[test]
    fn zero_size_is_empty() {
        let config = ArrayConfig::new(0, 1, 2).unwrap();
        let mut rng = Pcg64::seed_from_u64(1);

        assert!(generate_values(&config, &mut rng).is_empty());
    }
}
