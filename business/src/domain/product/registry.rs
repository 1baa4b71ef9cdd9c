use std::sync::Arc;

use super::aggregator::ProductAggregator;
use super::value_objects::Retailer;

/// The set of aggregators a process fans searches out to.
///
/// Built once by the composition root and read-only afterwards. Only
/// aggregators whose `is_available()` holds at construction are retained,
/// so callers never have to re-check credentials per call. Registration
/// order is preserved; lookups without an explicit retailer walk it in
/// that order.
pub struct AggregatorRegistry {
    aggregators: Vec<Arc<dyn ProductAggregator>>,
}

impl AggregatorRegistry {
    pub fn new(candidates: Vec<Arc<dyn ProductAggregator>>) -> Self {
        let aggregators = candidates
            .into_iter()
            .filter(|aggregator| aggregator.is_available())
            .collect();
        Self { aggregators }
    }

    pub fn retailers(&self) -> Vec<Retailer> {
        self.aggregators
            .iter()
            .map(|aggregator| aggregator.retailer())
            .collect()
    }

    pub fn contains(&self, retailer: Retailer) -> bool {
        self.aggregators
            .iter()
            .any(|aggregator| aggregator.retailer() == retailer)
    }

    pub fn get(&self, retailer: Retailer) -> Option<&Arc<dyn ProductAggregator>> {
        self.aggregators
            .iter()
            .find(|aggregator| aggregator.retailer() == retailer)
    }

    /// Fan-out target set: the requested subset when given (unregistered
    /// names are ignored), every registered aggregator otherwise.
    pub fn select(&self, retailers: Option<&[Retailer]>) -> Vec<&Arc<dyn ProductAggregator>> {
        match retailers {
            Some(requested) => self
                .aggregators
                .iter()
                .filter(|aggregator| requested.contains(&aggregator.retailer()))
                .collect(),
            None => self.aggregators.iter().collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn ProductAggregator>> {
        self.aggregators.iter()
    }

    pub fn len(&self) -> usize {
        self.aggregators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aggregators.is_empty()
    }
}
