//! Seat Option Model

use crate::seat::SeatId;
use serde::{Deserialize, Serialize};

/// One selectable seat in the floor plan picker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeatOption {
    /// Canonical seat id (e.g. `C-05`)
    pub value: SeatId,
    /// Display label (e.g. `カウンター席：C-05`)
    pub label: String,
    /// Picker group (e.g. `カウンター席`)
    pub group: String,
}
