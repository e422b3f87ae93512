//! # Paint Surface Area (m²)
//!
//! Paint-coverage area of a rectangular prism part, with direct and inverse
//! pricing factors for the order-management system, which bills paint as an
//! m² line item.
//!
//! ## Face modes
//!
//! Painted area starts from the full box surface `2*(w*l + w*h + l*h)` and is
//! divided by a nominal face-count denominator:
//!
//! - `AllFaces`: divisor 1
//! - `TwoOppositeFaces`: divisor 3 (approximation: one third of the total,
//!   not the exact area of a specific face pair)
//! - `OneFace`: divisor 6 (approximation: one sixth of the total)
//!
//! The 3 and 6 divisors are intentional shop-floor approximations carried
//! over from the original tool, not exact per-face geometry. They must not
//! be "corrected" to `2*(w*l)` etc. without changing the prices the shop
//! already quotes.
//!
//! ## Example
//!
//! ```rust
//! use yield_core::calculations::paint::{calculate, FaceMode, PaintAreaInput};
//!
//! let input = PaintAreaInput {
//!     width_mm: 100.0,
//!     length_mm: 200.0,
//!     height_mm: 50.0,
//!     face_mode: FaceMode::AllFaces,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert!((result.area_m2 - 0.07).abs() < 1e-9);
//! assert_eq!(result.direct_factor, result.area_m2);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::{SquareMeters, SquareMillimeters};

/// Which faces of the part get painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FaceMode {
    /// Every face of the box
    AllFaces,
    /// Two opposite faces (approximated as total surface / 3)
    TwoOppositeFaces,
    /// A single face (approximated as total surface / 6)
    OneFace,
}

impl FaceMode {
    /// Denominator applied to the total box surface area.
    pub fn divisor(&self) -> f64 {
        match self {
            FaceMode::AllFaces => 1.0,
            FaceMode::TwoOppositeFaces => 3.0,
            FaceMode::OneFace => 6.0,
        }
    }
}

impl fmt::Display for FaceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FaceMode::AllFaces => "all faces",
            FaceMode::TwoOppositeFaces => "2 opposite faces",
            FaceMode::OneFace => "1 face",
        };
        write!(f, "{label}")
    }
}

impl FromStr for FaceMode {
    type Err = CalcError;

    /// Parse user text into a face mode. Unrecognized text is rejected,
    /// never silently defaulted.
    fn from_str(s: &str) -> CalcResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" | "all-faces" | "all_faces" => Ok(FaceMode::AllFaces),
            "two-opposite" | "two_opposite" | "2-opposite" | "two" => {
                Ok(FaceMode::TwoOppositeFaces)
            }
            "one" | "one-face" | "one_face" | "1" => Ok(FaceMode::OneFace),
            other => Err(CalcError::invalid_input(
                "face_mode",
                other,
                "expected one of: all, two-opposite, one",
            )),
        }
    }
}

/// Input parameters for a paint area calculation.
///
/// All dimensions in millimeters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaintAreaInput {
    /// Part width (mm), must be positive
    pub width_mm: f64,

    /// Part length (mm), must be positive
    pub length_mm: f64,

    /// Part height (mm), must be positive
    pub height_mm: f64,

    /// Which faces get painted
    pub face_mode: FaceMode,
}

/// Results of a paint area calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaintAreaResult {
    /// Painted area per piece in square meters
    pub area_m2: f64,

    /// m² per piece, the value entered directly into the pricing system
    /// (equal to `area_m2`)
    pub direct_factor: f64,

    /// Pieces per m²: 1 / area_m2, or 0 when the area is not positive
    pub inverse_factor: f64,
}

/// Calculate the painted area of a box-shaped part.
pub fn calculate(input: &PaintAreaInput) -> CalcResult<PaintAreaResult> {
    for (field, value) in [
        ("width_mm", input.width_mm),
        ("length_mm", input.length_mm),
        ("height_mm", input.height_mm),
    ] {
        if value <= 0.0 {
            return Err(CalcError::invalid_input(
                field,
                value.to_string(),
                "dimension must be positive",
            ));
        }
    }

    let total_surface_mm2 = 2.0
        * (input.width_mm * input.length_mm
            + input.width_mm * input.height_mm
            + input.length_mm * input.height_mm);
    let painted_mm2 = SquareMillimeters(total_surface_mm2 / input.face_mode.divisor());
    let SquareMeters(area_m2) = painted_mm2.into();

    // Unreachable with positive dimensions, guarded anyway
    let inverse_factor = if area_m2 > 0.0 { 1.0 / area_m2 } else { 0.0 };

    Ok(PaintAreaResult {
        area_m2,
        direct_factor: area_m2,
        inverse_factor,
    })
}
