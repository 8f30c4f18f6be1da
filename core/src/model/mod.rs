pub mod metrics;
pub mod roc_pr;

pub use metrics::{MetricPoint, MetricsQuery, MetricsResponse};
pub use roc_pr::{Curve, RocPrResponse, XYPoint};

use uuid::Uuid;

/// A decoded point tagged with a rendering identifier.
///
/// Identifiers are minted fresh on every fetch and never travel over the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct Keyed<T> {
    pub id: Uuid,
    pub value: T,
}

impl<T> Keyed<T> {
    pub fn new(value: T) -> Self {
        Self {
            id: Uuid::new_v4(),
            value,
        }
    }
}

/// Tags every point of a freshly decoded sequence, preserving order.
pub fn key_all<T>(values: Vec<T>) -> Vec<Keyed<T>> {
    values.into_iter().map(Keyed::new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_all_preserves_order_and_mints_distinct_ids() {
        let keyed = key_all(vec![3, 1, 2]);
        let values: Vec<_> = keyed.iter().map(|k| k.value).collect();
        assert_eq!(values, vec![3, 1, 2]);
        assert_ne!(keyed[0].id, keyed[1].id);
        assert_ne!(keyed[1].id, keyed[2].id);
    }
}
