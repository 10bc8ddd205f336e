//! Order Ledger Models
//!
//! Confirmed order records and the derived delivery status. A seat's ledger
//! is append-only: records are created only at confirmation and destroyed
//! only by explicit deletion or a full history clear, never silently.

use crate::types::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One confirmed order line
///
/// `record_id` is the record's own identity. Two records may legitimately
/// share an `item_id` (and even a timestamp, within one confirmation), so
/// delivery toggling and deletion address records by `record_id` alone.
/// Immutable after creation except for the `delivered` flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub record_id: String,
    /// Originating menu item id
    pub item_id: String,
    /// Name snapshot at confirmation time
    pub name: String,
    /// Unit price snapshot at confirmation time (yen)
    pub unit_price: i64,
    pub quantity: u32,
    pub delivered: bool,
    /// Shared per confirmation: every record of one confirm call carries the
    /// same timestamp
    pub confirmed_at: Timestamp,
}

impl OrderRecord {
    /// Create a fresh undelivered record with a new unique identity
    pub fn new(
        item_id: impl Into<String>,
        name: impl Into<String>,
        unit_price: i64,
        quantity: u32,
        confirmed_at: Timestamp,
    ) -> Self {
        Self {
            record_id: Uuid::new_v4().to_string(),
            item_id: item_id.into(),
            name: name.into(),
            unit_price,
            quantity,
            delivered: false,
            confirmed_at,
        }
    }

    pub fn line_total(&self) -> i64 {
        self.unit_price * i64::from(self.quantity)
    }
}

/// Ledger listing filter (注文履歴フィルタ)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderFilter {
    #[default]
    All,
    Pending,
    Delivered,
}

impl OrderFilter {
    pub fn matches(&self, record: &OrderRecord) -> bool {
        match self {
            Self::All => true,
            Self::Pending => !record.delivered,
            Self::Delivered => record.delivered,
        }
    }
}

/// Derived delivery totals for one seat
///
/// Never stored: recomputed from the ledger at query time, so it cannot
/// drift. `delivered_quantity + pending_quantity` equals the sum of all
/// record quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DeliveryStatus {
    pub delivered_quantity: u32,
    pub pending_quantity: u32,
}

impl DeliveryStatus {
    pub fn total(&self) -> u32 {
        self.delivered_quantity + self.pending_quantity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_is_undelivered_with_unique_id() {
        let a = OrderRecord::new("m01", "冷奴", 380, 2, 1_700_000_000_000);
        let b = OrderRecord::new("m01", "冷奴", 380, 2, 1_700_000_000_000);

        assert!(!a.delivered);
        assert_eq!(a.line_total(), 760);
        // Same item, same timestamp, still distinct identities
        assert_ne!(a.record_id, b.record_id);
    }

    #[test]
    fn test_filter_matches() {
        let mut record = OrderRecord::new("m01", "冷奴", 380, 1, 0);
        assert!(OrderFilter::All.matches(&record));
        assert!(OrderFilter::Pending.matches(&record));
        assert!(!OrderFilter::Delivered.matches(&record));

        record.delivered = true;
        assert!(OrderFilter::All.matches(&record));
        assert!(!OrderFilter::Pending.matches(&record));
        assert!(OrderFilter::Delivered.matches(&record));
    }

    #[test]
    fn test_filter_deserialize() {
        let filter: OrderFilter = serde_json::from_str("\"pending\"").unwrap();
        assert_eq!(filter, OrderFilter::Pending);
        let filter: OrderFilter = serde_json::from_str("\"all\"").unwrap();
        assert_eq!(filter, OrderFilter::All);
    }

    #[test]
    fn test_delivery_status_total() {
        let status = DeliveryStatus {
            delivered_quantity: 3,
            pending_quantity: 4,
        };
        assert_eq!(status.total(), 7);
    }
}
