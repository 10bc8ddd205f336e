//! redb-based storage layer for per-seat session state
//!
//! # Tables
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `carts` | seat id | `Cart` | Pre-confirmation selections |
//! | `ledgers` | seat id | `Vec<OrderRecord>` | Confirmed order ledger (append-only) |
//! | `calls` | seat id | `i64` | Last allowed staff-call timestamp |
//!
//! The seat id is the only key anywhere in the store — cross-seat access is
//! impossible by construction. This store is the single authority for cart,
//! ledger and call state; terminal-side caches are disposable copies.
//!
//! # Durability
//!
//! redb commits are persistent as soon as `commit()` returns (copy-on-write
//! with atomic pointer swap), which matters for a terminal box that gets
//! powered off with the store at closing time.

use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition, WriteTransaction};
use shared::models::{Cart, CallState, OrderRecord};
use shared::seat::SeatId;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Table for carts: key = seat id, value = JSON-serialized Cart
const CARTS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("carts");

/// Table for order ledgers: key = seat id, value = JSON-serialized Vec<OrderRecord>
const LEDGERS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("ledgers");

/// Table for staff-call state: key = seat id, value = last allowed call (Unix millis)
const CALLS_TABLE: TableDefinition<&str, i64> = TableDefinition::new("calls");

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Seat session storage backed by redb
#[derive(Clone)]
pub struct SeatStorage {
    db: Arc<Database>,
}

impl SeatStorage {
    /// Open or create the database at the given path
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let db = Database::create(path)?;

        // Create all tables if they don't exist
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(CARTS_TABLE)?;
            let _ = write_txn.open_table(LEDGERS_TABLE)?;
            let _ = write_txn.open_table(CALLS_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Open an in-memory database (for testing)
    #[cfg(test)]
    pub fn open_in_memory() -> StorageResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(CARTS_TABLE)?;
            let _ = write_txn.open_table(LEDGERS_TABLE)?;
            let _ = write_txn.open_table(CALLS_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Begin a write transaction
    ///
    /// redb serializes writers, so every mutation that runs inside one
    /// transaction observes a stable snapshot of the seat's state.
    pub fn begin_write(&self) -> StorageResult<WriteTransaction> {
        Ok(self.db.begin_write()?)
    }

    // ========== Cart Operations ==========

    /// Load a seat's cart within a write transaction (empty if absent)
    pub fn cart_in_txn(&self, txn: &WriteTransaction, seat: &SeatId) -> StorageResult<Cart> {
        let table = txn.open_table(CARTS_TABLE)?;
        match table.get(seat.as_str())? {
            Some(guard) => Ok(serde_json::from_slice(guard.value())?),
            None => Ok(Cart::new()),
        }
    }

    /// Store a seat's cart within a write transaction
    pub fn store_cart(&self, txn: &WriteTransaction, seat: &SeatId, cart: &Cart) -> StorageResult<()> {
        let bytes = serde_json::to_vec(cart)?;
        let mut table = txn.open_table(CARTS_TABLE)?;
        table.insert(seat.as_str(), bytes.as_slice())?;
        Ok(())
    }

    /// Read a seat's cart (empty if absent)
    pub fn read_cart(&self, seat: &SeatId) -> StorageResult<Cart> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(CARTS_TABLE)?;
        match table.get(seat.as_str())? {
            Some(guard) => Ok(serde_json::from_slice(guard.value())?),
            None => Ok(Cart::new()),
        }
    }

    // ========== Ledger Operations ==========

    /// Load a seat's order ledger within a write transaction (empty if absent)
    pub fn ledger_in_txn(
        &self,
        txn: &WriteTransaction,
        seat: &SeatId,
    ) -> StorageResult<Vec<OrderRecord>> {
        let table = txn.open_table(LEDGERS_TABLE)?;
        match table.get(seat.as_str())? {
            Some(guard) => Ok(serde_json::from_slice(guard.value())?),
            None => Ok(Vec::new()),
        }
    }

    /// Store a seat's order ledger within a write transaction
    pub fn store_ledger(
        &self,
        txn: &WriteTransaction,
        seat: &SeatId,
        ledger: &[OrderRecord],
    ) -> StorageResult<()> {
        let bytes = serde_json::to_vec(ledger)?;
        let mut table = txn.open_table(LEDGERS_TABLE)?;
        table.insert(seat.as_str(), bytes.as_slice())?;
        Ok(())
    }

    /// Read a seat's order ledger in confirmation order (empty if absent)
    pub fn read_ledger(&self, seat: &SeatId) -> StorageResult<Vec<OrderRecord>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(LEDGERS_TABLE)?;
        match table.get(seat.as_str())? {
            Some(guard) => Ok(serde_json::from_slice(guard.value())?),
            None => Ok(Vec::new()),
        }
    }

    // ========== Staff Call Operations ==========

    /// Load a seat's call state within a write transaction
    pub fn call_state_in_txn(
        &self,
        txn: &WriteTransaction,
        seat: &SeatId,
    ) -> StorageResult<CallState> {
        let table = txn.open_table(CALLS_TABLE)?;
        Ok(CallState {
            last_call_at: table.get(seat.as_str())?.map(|guard| guard.value()),
        })
    }

    /// Record the last allowed call within a write transaction
    pub fn store_call_state(
        &self,
        txn: &WriteTransaction,
        seat: &SeatId,
        last_call_at: i64,
    ) -> StorageResult<()> {
        let mut table = txn.open_table(CALLS_TABLE)?;
        table.insert(seat.as_str(), last_call_at)?;
        Ok(())
    }

    /// Read a seat's call state
    pub fn read_call_state(&self, seat: &SeatId) -> StorageResult<CallState> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(CALLS_TABLE)?;
        Ok(CallState {
            last_call_at: table.get(seat.as_str())?.map(|guard| guard.value()),
        })
    }
}

impl std::fmt::Debug for SeatStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeatStorage").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seat(raw: &str) -> SeatId {
        SeatId::normalize(raw).unwrap()
    }

    #[test]
    fn test_cart_roundtrip() {
        let storage = SeatStorage::open_in_memory().unwrap();
        let seat = seat("C-01");

        let mut cart = Cart::new();
        cart.insert("m01".to_string(), 2);

        let txn = storage.begin_write().unwrap();
        storage.store_cart(&txn, &seat, &cart).unwrap();
        txn.commit().unwrap();

        assert_eq!(storage.read_cart(&seat).unwrap(), cart);
    }

    #[test]
    fn test_missing_seat_reads_empty() {
        let storage = SeatStorage::open_in_memory().unwrap();
        let seat = seat("Z-99");

        assert!(storage.read_cart(&seat).unwrap().is_empty());
        assert!(storage.read_ledger(&seat).unwrap().is_empty());
        assert_eq!(storage.read_call_state(&seat).unwrap().last_call_at, None);
    }

    #[test]
    fn test_ledger_roundtrip() {
        let storage = SeatStorage::open_in_memory().unwrap();
        let seat = seat("A-03");

        let records = vec![
            OrderRecord::new("m01", "冷奴", 380, 2, 1000),
            OrderRecord::new("m02", "つくね", 450, 1, 1000),
        ];

        let txn = storage.begin_write().unwrap();
        storage.store_ledger(&txn, &seat, &records).unwrap();
        txn.commit().unwrap();

        assert_eq!(storage.read_ledger(&seat).unwrap(), records);
    }

    #[test]
    fn test_call_state_roundtrip() {
        let storage = SeatStorage::open_in_memory().unwrap();
        let seat = seat("B-07");

        let txn = storage.begin_write().unwrap();
        storage.store_call_state(&txn, &seat, 123_456).unwrap();
        txn.commit().unwrap();

        assert_eq!(
            storage.read_call_state(&seat).unwrap().last_call_at,
            Some(123_456)
        );
    }

    #[test]
    fn test_seats_are_isolated() {
        let storage = SeatStorage::open_in_memory().unwrap();
        let seat_a = seat("C-01");
        let seat_b = seat("C-02");

        let mut cart = Cart::new();
        cart.insert("m01".to_string(), 5);

        let txn = storage.begin_write().unwrap();
        storage.store_cart(&txn, &seat_a, &cart).unwrap();
        txn.commit().unwrap();

        assert_eq!(storage.read_cart(&seat_a).unwrap().len(), 1);
        assert!(storage.read_cart(&seat_b).unwrap().is_empty());
    }
}
