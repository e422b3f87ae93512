//! # Bar / Tube Cutting Yield
//!
//! How many pieces of a given length can be cut from one stock bar or tube,
//! accounting for uniform saw/kerf loss between adjacent pieces.
//!
//! ## Assumptions
//!
//! - Linear cutting along one dimension only
//! - Uniform cut loss between every pair of adjacent pieces (n pieces cost
//!   n−1 internal cuts)
//! - No end trim or clamping allowance
//!
//! ## Example
//!
//! ```rust
//! use yield_core::calculations::bar::{calculate, BarYieldInput};
//!
//! let input = BarYieldInput {
//!     bar_length_mm: 1000.0,
//!     piece_length_mm: 300.0,
//!     cut_loss_mm: 10.0,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.pieces_per_bar, 3);
//! assert_eq!(result.leftover_mm, 80.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Input parameters for a bar/tube cutting yield calculation.
///
/// All lengths in millimeters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BarYieldInput {
    /// Stock bar length (mm), must be positive
    pub bar_length_mm: f64,

    /// Finished piece length (mm), must be positive
    pub piece_length_mm: f64,

    /// Saw/kerf loss per cut (mm), 0 when not specified
    #[serde(default)]
    pub cut_loss_mm: f64,
}

/// Results of a bar/tube cutting yield calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BarYieldResult {
    /// Whole pieces obtainable from one bar
    pub pieces_per_bar: u32,

    /// Material consumed by pieces and internal cuts (mm)
    pub used_length_mm: f64,

    /// Unusable remainder of the bar (mm), never negative
    pub leftover_mm: f64,

    /// Bars consumed per piece: 1 / pieces_per_bar, or 0 when yield is zero.
    /// Entered into the pricing system as a unit-conversion multiplier.
    pub factor: f64,
}

/// Calculate cutting yield for one stock bar.
///
/// Piece count is `floor((bar + loss) / (piece + loss))`: n pieces need n−1
/// internal cuts, which algebraically is n full pitches minus one trailing
/// loss. Truncation never rounds up, so yield is never overstated.
pub fn calculate(input: &BarYieldInput) -> CalcResult<BarYieldResult> {
    if input.bar_length_mm <= 0.0 {
        return Err(CalcError::invalid_input(
            "bar_length_mm",
            input.bar_length_mm.to_string(),
            "bar length must be positive",
        ));
    }
    if input.piece_length_mm <= 0.0 {
        return Err(CalcError::invalid_input(
            "piece_length_mm",
            input.piece_length_mm.to_string(),
            "piece length must be positive",
        ));
    }

    let pitch = input.piece_length_mm + input.cut_loss_mm;
    let pieces_per_bar = if pitch > 0.0 {
        let ratio = (input.bar_length_mm + input.cut_loss_mm) / pitch;
        ratio.max(0.0).floor() as u32
    } else {
        0
    };

    let used_length_mm = pieces_per_bar as f64 * input.piece_length_mm
        + pieces_per_bar.saturating_sub(1) as f64 * input.cut_loss_mm;
    let leftover_mm = (input.bar_length_mm - used_length_mm).max(0.0);
    let factor = if pieces_per_bar > 0 {
        1.0 / pieces_per_bar as f64
    } else {
        0.0
    };

    Ok(BarYieldResult {
        pieces_per_bar,
        used_length_mm,
        leftover_mm,
        factor,
    })
}
