//! Cart Model
//!
//! A cart is the seat's ephemeral, pre-confirmation selection: a mapping of
//! item id → quantity. Persisted quantities are always >= 1 — setting a
//! quantity to zero or below removes the line.

use super::menu_item::ResolvedItem;
use crate::seat::SeatId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Cart contents: item id → quantity (key order is irrelevant)
pub type Cart = BTreeMap<String, u32>;

/// Sum of all quantities in the cart
pub fn total_items(cart: &Cart) -> u32 {
    cart.values().sum()
}

/// Total price of the cart under the given price lookup
///
/// Items the lookup cannot price contribute 0 — a missing catalog entry is
/// never an error here.
pub fn total_price(cart: &Cart, lookup: impl Fn(&str) -> Option<i64>) -> i64 {
    cart.iter()
        .map(|(item_id, qty)| lookup(item_id).unwrap_or(0) * i64::from(*qty))
        .sum()
}

/// One display line of a cart snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub item_id: String,
    /// Name snapshot (raw id for unknown items)
    pub name: String,
    pub unit_price: i64,
    pub quantity: u32,
    pub line_total: i64,
}

/// Cart snapshot returned by every cart operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartSnapshot {
    pub seat_id: SeatId,
    pub lines: Vec<CartLine>,
    pub total_items: u32,
    pub total_price: i64,
}

impl CartSnapshot {
    /// Build a snapshot of a cart, resolving names and prices via the catalog
    pub fn build(seat_id: SeatId, cart: &Cart, resolve: impl Fn(&str) -> ResolvedItem) -> Self {
        let lines: Vec<CartLine> = cart
            .iter()
            .map(|(item_id, qty)| {
                let item = resolve(item_id);
                let unit_price = item.price();
                CartLine {
                    item_id: item_id.clone(),
                    name: item.name().to_string(),
                    unit_price,
                    quantity: *qty,
                    line_total: unit_price * i64::from(*qty),
                }
            })
            .collect();
        let total_items = total_items(cart);
        let total_price = lines.iter().map(|l| l.line_total).sum();
        Self {
            seat_id,
            lines,
            total_items,
            total_price,
        }
    }
}
