use std::{collections::HashMap, fmt::Debug, hash::Hash};

/// Anything usable as a page identifier.
pub trait Page: Clone + Eq + Hash + Ord + Debug {}
impl<T: Clone + Eq + Hash + Ord + Debug> Page for T {}

/// Probability mass per page.
pub type Distribution<P> = HashMap<P, f64, ahash::RandomState>;

pub fn total_mass<P>(d: &Distribution<P>) -> f64 {
    d.values().sum()
}

/// Largest per-entry absolute difference of two equally long vectors.
pub fn max_delta(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f64::max)
}

#[derive(Debug, Clone, Copy)]
pub struct FullOrdFloat(pub f64);
impl PartialOrd for FullOrdFloat {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for FullOrdFloat {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}
impl PartialEq for FullOrdFloat {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}
impl Eq for FullOrdFloat {}
