use crate::dataset::Dataset;
use serde::Serialize;

/// Aggregate report of the four analyses.
///
/// Computed in a fixed order: minimum, maximum, mean, median. Since the
/// median sorts the dataset in place, the caller's ordering is destroyed
/// once a summary has been computed.
#[derive(Debug, Serialize)]
pub struct Summary {
    pub minimum: u8,
    pub maximum: u8,
    pub mean: u8,
    pub median: u8,
}

impl Summary {
    pub fn compute(data: &mut Dataset) -> Self {
        Self {
            minimum: minimum(data),
            maximum: maximum(data),
            mean: mean(data),
            median: median(data),
        }
    }
}

/// Find the smallest value in the dataset.
pub fn minimum(data: &Dataset) -> u8 {
    let vals = data.values();
    let mut min = vals[0];
    for &val in &vals[1..] {
        if val < min {
            min = val;
        }
    }
    min
}

/// Find the largest value in the dataset.
pub fn maximum(data: &Dataset) -> u8 {
    let vals = data.values();
    let mut max = vals[0];
    for &val in &vals[1..] {
        if val > max {
            max = val;
        }
    }
    max
}

/// Find the mean of the dataset, truncated toward zero.
///
/// The sum is accumulated in a wide integer; the mean of byte values is
/// itself a byte value, so the narrowing conversion cannot lose information.
pub fn mean(data: &Dataset) -> u8 {
    let vals = data.values();
    let sum: u64 = vals.iter().map(|&val| u64::from(val)).sum();
    (sum / vals.len() as u64) as u8
}

/// Find the median of the dataset.
///
/// Sorts the dataset descending in place first, then returns the middle
/// element, or for even lengths the truncated average of the two central
/// elements.
pub fn median(data: &mut Dataset) -> u8 {
    sort_descending(data);
    let vals = data.values();
    let mid = vals.len() / 2;
    if vals.len() % 2 == 0 {
        ((u16::from(vals[mid - 1]) + u16::from(vals[mid])) / 2) as u8
    } else {
        vals[mid]
    }
}

/// Sort the dataset in place from largest to smallest.
///
/// Quadratic comparison-exchange sort; datasets are at most a few dozen
/// elements, so the O(n²) cost is irrelevant.
pub fn sort_descending(data: &mut Dataset) {
    let vals = data.values_mut();
    for i in 0..vals.len() - 1 {
        for j in (i + 1)..vals.len() {
            if vals[i] < vals[j] {
                vals.swap(i, j);
            }
        }
    }
}
