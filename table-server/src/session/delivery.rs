//! Delivery status aggregation
//!
//! Stateless fold over a seat's ledger. There are no incremental counters to
//! keep in sync, so the result is always consistent with the ledger's
//! current content.

use shared::models::{DeliveryStatus, OrderRecord};

/// Fold a ledger into delivered/pending quantity totals
pub fn summarize(records: &[OrderRecord]) -> DeliveryStatus {
    records.iter().fold(DeliveryStatus::default(), |mut acc, r| {
        if r.delivered {
            acc.delivered_quantity += r.quantity;
        } else {
            acc.pending_quantity += r.quantity;
        }
        acc
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_ledger() {
        let status = summarize(&[]);
        assert_eq!(status.delivered_quantity, 0);
        assert_eq!(status.pending_quantity, 0);
    }

    #[test]
    fn test_partitions_by_delivered_flag() {
        let mut a = OrderRecord::new("m01", "冷奴", 380, 2, 1000);
        let b = OrderRecord::new("m02", "つくね", 450, 3, 1000);
        a.delivered = true;

        let status = summarize(&[a, b]);
        assert_eq!(status.delivered_quantity, 2);
        assert_eq!(status.pending_quantity, 3);
        assert_eq!(status.total(), 5);
    }

    #[test]
    fn test_totals_match_ledger_quantities() {
        let records: Vec<OrderRecord> = (1..=6)
            .map(|i| {
                let mut r = OrderRecord::new(format!("m{:02}", i), "品", 100, i, 1000);
                r.delivered = i % 2 == 0;
                r
            })
            .collect();

        let status = summarize(&records);
        let total: u32 = records.iter().map(|r| r.quantity).sum();
        assert_eq!(status.total(), total);
        assert_eq!(status.delivered_quantity, 2 + 4 + 6);
        assert_eq!(status.pending_quantity, 1 + 3 + 5);
    }
}
