//! SessionManager - per-seat order lifecycle engine
//!
//! This module owns every mutation of seat state:
//! - Cart mutation (add / remove / set quantity / clear)
//! - Atomic cart → ledger confirmation
//! - Delivery toggling and record deletion
//! - Staff-call throttling
//!
//! # Operation Flow
//!
//! ```text
//! operation(seat, ...)
//!     ├─ 1. Begin write transaction
//!     ├─ 2. Load the seat's state (stable snapshot)
//!     ├─ 3. Validate and mutate
//!     ├─ 4. Persist
//!     ├─ 5. Commit (or drop the transaction on rejection — no change)
//!     └─ 6. Return the resulting snapshot
//! ```
//!
//! redb serializes write transactions, so a confirm can never interleave
//! with a cart mutation on the same seat: either all records are appended
//! and the cart is cleared, or nothing happened.

use super::delivery;
use super::storage::{SeatStorage, StorageError};
use crate::services::MenuCatalog;
use crate::utils::time::now_millis;
use shared::error::{AppError, ErrorCode};
use shared::models::{CallOutcome, Cart, CartSnapshot, DeliveryStatus, OrderFilter, OrderRecord};
use shared::seat::SeatId;
use std::sync::Arc;
use thiserror::Error;

/// Engine errors
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Cart is empty")]
    CartEmpty,

    #[error("Order record not found: {0}")]
    RecordNotFound(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

pub type SessionResult<T> = Result<T, SessionError>;

/// 将存储错误转换为错误码（前端负责本地化）
fn classify_storage_error(e: &StorageError) -> ErrorCode {
    if let StorageError::Serialization(_) = e {
        return ErrorCode::InternalError;
    }

    // redb 错误通过字符串匹配分类
    let err_str = e.to_string().to_lowercase();

    // 磁盘空间不足
    if err_str.contains("no space") || err_str.contains("disk full") || err_str.contains("enospc")
    {
        return ErrorCode::StorageFull;
    }

    // 数据损坏
    if err_str.contains("corrupt") || err_str.contains("invalid database") {
        return ErrorCode::StorageCorrupted;
    }

    // 默认：系统繁忙（redb 的 Database/Transaction/Table/Storage/Commit 错误）
    ErrorCode::SystemBusy
}

impl From<SessionError> for AppError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::CartEmpty => AppError::cart_empty(),
            SessionError::RecordNotFound(id) => AppError::record_not_found(id),
            SessionError::Storage(e) => {
                let code = classify_storage_error(&e);
                tracing::error!(error = %e, error_code = ?code, "Storage error occurred");
                AppError::with_message(code, e.to_string())
            }
        }
    }
}

/// Per-seat order lifecycle engine
///
/// All state lives in [`SeatStorage`] keyed by seat id; the manager itself
/// is a cheap clone (shared storage handle + catalog).
#[derive(Clone)]
pub struct SessionManager {
    storage: SeatStorage,
    /// Catalog collaborator for name/price snapshots
    catalog: Arc<dyn MenuCatalog>,
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("storage", &self.storage)
            .finish_non_exhaustive()
    }
}

impl SessionManager {
    pub fn new(storage: SeatStorage, catalog: Arc<dyn MenuCatalog>) -> Self {
        Self { storage, catalog }
    }

    fn snapshot(&self, seat: &SeatId, cart: &Cart) -> CartSnapshot {
        CartSnapshot::build(seat.clone(), cart, |id| self.catalog.find(id))
    }

    // ========== Cart Operations ==========

    /// Add one unit of an item (creates the line at quantity 1)
    pub fn add_to_cart(&self, seat: &SeatId, item_id: &str) -> SessionResult<CartSnapshot> {
        let txn = self.storage.begin_write()?;
        let mut cart = self.storage.cart_in_txn(&txn, seat)?;
        *cart.entry(item_id.to_string()).or_insert(0) += 1;
        self.storage.store_cart(&txn, seat, &cart)?;
        txn.commit().map_err(StorageError::from)?;
        Ok(self.snapshot(seat, &cart))
    }

    /// Remove a line unconditionally (no-op if absent)
    pub fn remove_from_cart(&self, seat: &SeatId, item_id: &str) -> SessionResult<CartSnapshot> {
        let txn = self.storage.begin_write()?;
        let mut cart = self.storage.cart_in_txn(&txn, seat)?;
        cart.remove(item_id);
        self.storage.store_cart(&txn, seat, &cart)?;
        txn.commit().map_err(StorageError::from)?;
        Ok(self.snapshot(seat, &cart))
    }

    /// Set a line's quantity; zero or below removes the line
    ///
    /// Unknown catalog items are tolerated — they price as 0 downstream.
    pub fn set_quantity(
        &self,
        seat: &SeatId,
        item_id: &str,
        quantity: i64,
    ) -> SessionResult<CartSnapshot> {
        let txn = self.storage.begin_write()?;
        let mut cart = self.storage.cart_in_txn(&txn, seat)?;
        match u32::try_from(quantity) {
            Ok(qty) if qty > 0 => {
                cart.insert(item_id.to_string(), qty);
            }
            _ => {
                cart.remove(item_id);
            }
        }
        self.storage.store_cart(&txn, seat, &cart)?;
        txn.commit().map_err(StorageError::from)?;
        Ok(self.snapshot(seat, &cart))
    }

    /// Empty the seat's cart
    pub fn clear_cart(&self, seat: &SeatId) -> SessionResult<CartSnapshot> {
        let cart = Cart::new();
        let txn = self.storage.begin_write()?;
        self.storage.store_cart(&txn, seat, &cart)?;
        txn.commit().map_err(StorageError::from)?;
        Ok(self.snapshot(seat, &cart))
    }

    /// Current cart snapshot (names and prices resolved via the catalog)
    pub fn cart_snapshot(&self, seat: &SeatId) -> SessionResult<CartSnapshot> {
        let cart = self.storage.read_cart(seat)?;
        Ok(self.snapshot(seat, &cart))
    }

    /// Sum of all quantities in the seat's cart
    pub fn total_items(&self, seat: &SeatId) -> SessionResult<u32> {
        let cart = self.storage.read_cart(seat)?;
        Ok(shared::models::total_items(&cart))
    }

    /// Total cart price; items missing from the catalog contribute 0
    pub fn total_price(&self, seat: &SeatId) -> SessionResult<i64> {
        let cart = self.storage.read_cart(seat)?;
        Ok(shared::models::total_price(&cart, |id| {
            self.catalog.find(id).price_opt()
        }))
    }

    // ========== Confirmation ==========

    /// Confirm the seat's cart into order records
    ///
    /// One record per cart line, all sharing a single confirmation
    /// timestamp; the cart is cleared in the same transaction. An empty
    /// cart is rejected with no side effects.
    pub fn confirm(&self, seat: &SeatId) -> SessionResult<Vec<OrderRecord>> {
        let txn = self.storage.begin_write()?;
        let cart = self.storage.cart_in_txn(&txn, seat)?;
        if cart.is_empty() {
            return Err(SessionError::CartEmpty);
        }

        // One timestamp for the whole confirmation, not per line
        let confirmed_at = now_millis();

        let mut ledger = self.storage.ledger_in_txn(&txn, seat)?;
        let mut new_records = Vec::with_capacity(cart.len());
        for (item_id, quantity) in &cart {
            let item = self.catalog.find(item_id);
            let record =
                OrderRecord::new(item_id.clone(), item.name(), item.price(), *quantity, confirmed_at);
            ledger.push(record.clone());
            new_records.push(record);
        }

        self.storage.store_ledger(&txn, seat, &ledger)?;
        self.storage.store_cart(&txn, seat, &Cart::new())?;
        txn.commit().map_err(StorageError::from)?;

        tracing::info!(seat = %seat, lines = new_records.len(), "Order confirmed");
        Ok(new_records)
    }

    // ========== Ledger Operations ==========

    /// Flip the delivered flag on one record, addressed by record identity
    pub fn toggle_delivered(&self, seat: &SeatId, record_id: &str) -> SessionResult<OrderRecord> {
        let txn = self.storage.begin_write()?;
        let mut ledger = self.storage.ledger_in_txn(&txn, seat)?;

        let Some(record) = ledger.iter_mut().find(|r| r.record_id == record_id) else {
            return Err(SessionError::RecordNotFound(record_id.to_string()));
        };
        record.delivered = !record.delivered;
        let updated = record.clone();

        self.storage.store_ledger(&txn, seat, &ledger)?;
        txn.commit().map_err(StorageError::from)?;
        Ok(updated)
    }

    /// Delete one record; false if absent (no-op)
    pub fn remove_record(&self, seat: &SeatId, record_id: &str) -> SessionResult<bool> {
        let txn = self.storage.begin_write()?;
        let mut ledger = self.storage.ledger_in_txn(&txn, seat)?;

        let Some(index) = ledger.iter().position(|r| r.record_id == record_id) else {
            return Ok(false);
        };
        ledger.remove(index);

        self.storage.store_ledger(&txn, seat, &ledger)?;
        txn.commit().map_err(StorageError::from)?;
        Ok(true)
    }

    /// Empty the seat's entire order history
    pub fn clear_history(&self, seat: &SeatId) -> SessionResult<()> {
        let txn = self.storage.begin_write()?;
        self.storage.store_ledger(&txn, seat, &[])?;
        txn.commit().map_err(StorageError::from)?;
        Ok(())
    }

    /// List the seat's records, most-recently-confirmed first
    pub fn list(&self, seat: &SeatId, filter: OrderFilter) -> SessionResult<Vec<OrderRecord>> {
        let ledger = self.storage.read_ledger(seat)?;
        Ok(ledger
            .into_iter()
            .rev()
            .filter(|r| filter.matches(r))
            .collect())
    }

    /// Delivered/pending totals, recomputed from the ledger
    pub fn summarize(&self, seat: &SeatId) -> SessionResult<DeliveryStatus> {
        let ledger = self.storage.read_ledger(seat)?;
        Ok(delivery::summarize(&ledger))
    }

    // ========== Staff Call ==========

    /// Attempt a staff call under the cooldown window
    ///
    /// A rejected attempt leaves `last_call_at` untouched — repeated button
    /// presses cannot extend the wait.
    pub fn try_call(
        &self,
        seat: &SeatId,
        now: i64,
        cooldown_ms: i64,
    ) -> SessionResult<CallOutcome> {
        let txn = self.storage.begin_write()?;
        let state = self.storage.call_state_in_txn(&txn, seat)?;

        if let Some(last_call_at) = state.last_call_at {
            let elapsed = now - last_call_at;
            if elapsed < cooldown_ms {
                let remaining_seconds = ((cooldown_ms - elapsed + 999) / 1000) as u32;
                tracing::debug!(seat = %seat, remaining_seconds, "Staff call throttled");
                return Ok(CallOutcome::Throttled { remaining_seconds });
            }
        }

        self.storage.store_call_state(&txn, seat, now)?;
        txn.commit().map_err(StorageError::from)?;
        tracing::info!(seat = %seat, "Staff call accepted");
        Ok(CallOutcome::Allowed)
    }
}
