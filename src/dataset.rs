use anyhow::{Result, bail};

/// The 40-value sample set analyzed when no values are given on the command line.
pub const SAMPLE_SET: [u8; 40] = [
    34, 201, 190, 154, 8, 194, 2, 6, 114, 88, 45, 76, 123, 87, 25, 23, 200, 122, 150, 90, 92, 87,
    177, 244, 201, 6, 12, 60, 8, 2, 5, 67, 7, 87, 250, 230, 99, 3, 100, 90,
];

/// An ordered, non-empty sequence of byte values under analysis.
///
/// Construction rejects the empty sequence, so every analysis function can
/// assume at least one element is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    vals: Vec<u8>,
}

impl Dataset {
    /// Create a new [`Dataset`] from a vector of byte values.
    ///
    /// # Errors
    /// Returns an error if the vector is empty.
    pub fn new(vals: Vec<u8>) -> Result<Self> {
        if vals.is_empty() {
            bail!("dataset must contain at least one value");
        }
        Ok(Self { vals })
    }

    /// Create a [`Dataset`] holding the built-in sample set.
    pub fn sample_set() -> Self {
        Self {
            vals: SAMPLE_SET.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.vals.len()
    }

    pub fn values(&self) -> &[u8] {
        &self.vals
    }

    /// Mutable view of the values, for the in-place sort.
    pub(crate) fn values_mut(&mut self) -> &mut [u8] {
        &mut self.vals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_dataset_is_rejected() {
        assert!(Dataset::new(Vec::new()).is_err());
    }

    #[test]
    fn single_value_is_accepted() {
        let data = Dataset::new(vec![7]).unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data.values(), &[7]);
    }

    #[test]
    fn sample_set_has_forty_values() {
        let data = Dataset::sample_set();
        assert_eq!(data.len(), 40);
        assert_eq!(data.values(), &SAMPLE_SET);
    }
}
