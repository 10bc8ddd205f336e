//! Domain models
//!
//! Menu, cart, order ledger, delivery and staff-call types shared between
//! the server and the terminal frontend.

mod call;
mod cart;
mod menu_item;
mod order;
mod seat_option;

pub use call::{CallOutcome, CallState};
pub use cart::{Cart, CartLine, CartSnapshot, total_items, total_price};
pub use menu_item::{MenuItem, ResolvedItem};
pub use order::{DeliveryStatus, OrderFilter, OrderRecord};
pub use seat_option::SeatOption;
