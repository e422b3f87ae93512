//! # Unit Types
//!
//! Type-safe wrappers for the units the calculators convert between. Simple
//! newtype wrappers over `f64`: the shop works in millimeters end to end, and
//! only the paint calculator crosses a unit boundary (mm² to m² for the
//! pricing system, which bills paint by the square meter).
//!
//! Calculation structs keep plain `f64` fields with `_mm` / `_m2` suffixes so
//! JSON stays clean; the wrappers guard the conversion seam itself.
//!
//! ## Example
//!
//! ```rust
//! use yield_core::units::{SquareMeters, SquareMillimeters};
//!
//! let area: SquareMeters = SquareMillimeters(1_000_000.0).into();
//! assert_eq!(area.0, 1.0);
//! ```

use serde::{Deserialize, Serialize};

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

/// Area in square millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareMillimeters(pub f64);

/// Area in square meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareMeters(pub f64);

impl From<SquareMillimeters> for SquareMeters {
    fn from(mm2: SquareMillimeters) -> Self {
        SquareMeters(mm2.0 * 1e-6)
    }
}

impl From<SquareMeters> for SquareMillimeters {
    fn from(m2: SquareMeters) -> Self {
        SquareMillimeters(m2.0 * 1e6)
    }
}
