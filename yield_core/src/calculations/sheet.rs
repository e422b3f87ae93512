//! # Sheet Cutting Yield (by Area)
//!
//! How many identical rectangular pieces one rectangular sheet yields, using
//! an area ratio derated by an estimated nesting-loss percentage.
//!
//! This is deliberately a coarse estimate, not a nesting solver: piece
//! orientation, sheet margins, and actual part geometry are ignored, and the
//! loss percentage is the operator's judgment of how imperfectly the parts
//! will pack.
//!
//! ## Example
//!
//! ```rust
//! use yield_core::calculations::sheet::{calculate, SheetAreaInput};
//!
//! let input = SheetAreaInput {
//!     sheet_width_mm: 1000.0,
//!     sheet_height_mm: 1000.0,
//!     piece_width_mm: 100.0,
//!     piece_height_mm: 100.0,
//!     nesting_loss_percent: 10.0,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.pieces_per_sheet, 90);
//! assert_eq!(result.efficiency, 0.9);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Input parameters for a sheet area yield calculation.
///
/// All dimensions in millimeters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetAreaInput {
    /// Stock sheet width (mm), must be positive
    pub sheet_width_mm: f64,

    /// Stock sheet height (mm), must be positive
    pub sheet_height_mm: f64,

    /// Piece width (mm), must be positive
    pub piece_width_mm: f64,

    /// Piece height (mm), must be positive
    pub piece_height_mm: f64,

    /// Estimated nesting loss (%), e.g. 10 for 10%. 0 when not specified.
    /// Values above 100 clamp the efficiency to zero rather than erroring.
    #[serde(default)]
    pub nesting_loss_percent: f64,
}

/// Results of a sheet area yield calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetAreaResult {
    /// Whole pieces obtainable from one sheet
    pub pieces_per_sheet: u32,

    /// Usable fraction of the sheet area after nesting loss, in [0, 1]
    pub efficiency: f64,

    /// Sheets consumed per piece: 1 / pieces_per_sheet, or 0 when yield is
    /// zero. Entered into the pricing system as a unit-conversion multiplier.
    pub factor: f64,
}

/// Calculate area-based yield for one stock sheet.
///
/// `pieces = floor((sheet_area / piece_area) * efficiency)` where
/// `efficiency = max(0, 1 - loss/100)`. Truncation toward zero: the count
/// never rounds up, so the estimate never overstates yield.
pub fn calculate(input: &SheetAreaInput) -> CalcResult<SheetAreaResult> {
    for (field, value) in [
        ("sheet_width_mm", input.sheet_width_mm),
        ("sheet_height_mm", input.sheet_height_mm),
        ("piece_width_mm", input.piece_width_mm),
        ("piece_height_mm", input.piece_height_mm),
    ] {
        if value <= 0.0 {
            return Err(CalcError::invalid_input(
                field,
                value.to_string(),
                "dimension must be positive",
            ));
        }
    }

    let sheet_area = input.sheet_width_mm * input.sheet_height_mm;
    let piece_area = input.piece_width_mm * input.piece_height_mm;
    let efficiency = (1.0 - input.nesting_loss_percent / 100.0).max(0.0);
    let pieces_per_sheet = ((sheet_area / piece_area) * efficiency).floor() as u32;
    let factor = if pieces_per_sheet > 0 {
        1.0 / pieces_per_sheet as f64
    } else {
        0.0
    };

    Ok(SheetAreaResult {
        pieces_per_sheet,
        efficiency,
        factor,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn test_input() -> SheetAreaInput {
        SheetAreaInput {
            sheet_width_mm: 1000.0,
            sheet_height_mm: 1000.0,
            piece_width_mm: 100.0,
            piece_height_mm: 100.0,
            nesting_loss_percent: 0.0,
        }
    }

    #[test]
    fn test_perfect_nesting() {
        let result = calculate(&test_input()).unwrap();
        assert_eq!(result.pieces_per_sheet, 100);
        assert_eq!(result.efficiency, 1.0);
        assert_eq!(result.factor, 0.01);
    }

    #[test]
    fn test_nesting_loss_derates_yield() {
        let mut input = test_input();
        input.nesting_loss_percent = 10.0;
        let result = calculate(&input).unwrap();
        assert_eq!(result.efficiency, 0.9);
        assert_eq!(result.pieces_per_sheet, 90);
        assert!((result.factor - 1.0 / 90.0).abs() < 1e-12);
    }

    #[test]
    fn test_loss_over_100_percent_clamps_to_zero() {
        let mut input = test_input();
        input.nesting_loss_percent = 150.0;
        let result = calculate(&input).unwrap();
        assert_eq!(result.efficiency, 0.0);
        assert_eq!(result.pieces_per_sheet, 0);
        assert_eq!(result.factor, 0.0);
    }

    #[test]
    fn test_fractional_yield_truncates_down() {
        let input = SheetAreaInput {
            sheet_width_mm: 1000.0,
            sheet_height_mm: 500.0,
            piece_width_mm: 300.0,
            piece_height_mm: 200.0,
            nesting_loss_percent: 0.0,
        };
        // 500000 / 60000 = 8.33, never rounds up
        let result = calculate(&input).unwrap();
        assert_eq!(result.pieces_per_sheet, 8);
    }

    #[test]
    fn test_invalid_dimensions() {
        let mut input = test_input();
        input.piece_width_mm = -5.0;
        assert!(calculate(&input).is_err());

        let mut input = test_input();
        input.sheet_height_mm = 0.0;
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_negative_loss_is_not_rejected() {
        // Negative loss acts as a bonus efficiency above 1.0
        let mut input = test_input();
        input.nesting_loss_percent = -10.0;
        let result = calculate(&input).unwrap();
        assert!((result.efficiency - 1.1).abs() < 1e-12);
        assert_eq!(result.pieces_per_sheet, 110);
    }

    #[test]
    fn test_serialization() {
        let input = test_input();
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: SheetAreaInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input.sheet_width_mm, roundtrip.sheet_width_mm);
        assert_eq!(input.nesting_loss_percent, roundtrip.nesting_loss_percent);
    }
}
