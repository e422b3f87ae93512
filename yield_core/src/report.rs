//! # Report Rendering
//!
//! Turns a calculation input/result pair into the block of text lines the
//! operator pastes into the order-management system: an echo of the inputs,
//! the computed yield or area, and the pricing factor(s).
//!
//! Formatting conventions: lengths and piece counts with 0 decimals,
//! percentages with 2, factors and areas with 6. Exact wording is a
//! presentation concern; the shells just print (or copy) these lines as-is.

use crate::calculations::bar::{BarYieldInput, BarYieldResult};
use crate::calculations::paint::{PaintAreaInput, PaintAreaResult};
use crate::calculations::sheet::{SheetAreaInput, SheetAreaResult};
use crate::numeric::fmt_fixed;

/// Report lines for a bar/tube yield calculation.
pub fn bar_report(input: &BarYieldInput, result: &BarYieldResult) -> Vec<String> {
    let mut lines = vec![
        format!(
            "Input: bar = {} mm | piece = {} mm | cut loss = {} mm",
            fmt_fixed(input.bar_length_mm, 0),
            fmt_fixed(input.piece_length_mm, 0),
            fmt_fixed(input.cut_loss_mm, 0),
        ),
        format!(
            "Result: 1 bar yields {} piece(s) | leftover = {} mm",
            result.pieces_per_bar,
            fmt_fixed(result.leftover_mm, 0),
        ),
    ];
    if result.pieces_per_bar > 0 {
        lines.push(format!(
            "Pricing factor (bar/piece): 1/{} = {}",
            result.pieces_per_bar,
            fmt_fixed(result.factor, 6),
        ));
    } else {
        lines.push("Pricing factor: not applicable (0).".to_string());
    }
    lines.push("Note: assumes uniform loss between cuts (saw/kerf).".to_string());
    lines
}

/// Report lines for a sheet area yield calculation.
pub fn sheet_report(input: &SheetAreaInput, result: &SheetAreaResult) -> Vec<String> {
    let mut lines = vec![
        format!(
            "Sheet: {} x {} mm  |  Piece: {} x {} mm",
            fmt_fixed(input.sheet_width_mm, 0),
            fmt_fixed(input.sheet_height_mm, 0),
            fmt_fixed(input.piece_width_mm, 0),
            fmt_fixed(input.piece_height_mm, 0),
        ),
        format!(
            "Estimated loss: {}%  ->  Efficiency: {}%",
            fmt_fixed(input.nesting_loss_percent, 2),
            fmt_fixed(result.efficiency * 100.0, 2),
        ),
        format!("Result: 1 sheet yields {} piece(s)", result.pieces_per_sheet),
    ];
    if result.pieces_per_sheet > 0 {
        lines.push(format!(
            "Pricing factor (sheet/piece): 1/{} = {}",
            result.pieces_per_sheet,
            fmt_fixed(result.factor, 6),
        ));
    } else {
        lines.push("Pricing factor: not applicable (0).".to_string());
    }
    lines
}

/// Report lines for a paint area calculation.
pub fn paint_report(input: &PaintAreaInput, result: &PaintAreaResult) -> Vec<String> {
    vec![
        format!(
            "Dimensions: {} x {} x {} mm  |  Faces: {}",
            fmt_fixed(input.width_mm, 0),
            fmt_fixed(input.length_mm, 0),
            fmt_fixed(input.height_mm, 0),
            input.face_mode,
        ),
        format!(
            "Paint area (m2/piece): {} m2",
            fmt_fixed(result.area_m2, 6)
        ),
        format!(
            "Factor DIRECT (m2/piece): {}  <- enter this in the pricing system",
            fmt_fixed(result.direct_factor, 6)
        ),
        format!(
            "Factor INVERSE (1/area): 1/{} = {}  (optional)",
            fmt_fixed(result.area_m2, 6),
            fmt_fixed(result.inverse_factor, 6),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::calculations::paint::FaceMode;
    use crate::calculations::{bar, paint, sheet};

    #[test]
    fn test_bar_report_lines() {
        let input = BarYieldInput {
            bar_length_mm: 1000.0,
            piece_length_mm: 300.0,
            cut_loss_mm: 10.0,
        };
        let result = bar::calculate(&input).unwrap();
        let lines = bar_report(&input, &result);
        assert_eq!(
            lines[0],
            "Input: bar = 1000 mm | piece = 300 mm | cut loss = 10 mm"
        );
        assert_eq!(lines[1], "Result: 1 bar yields 3 piece(s) | leftover = 80 mm");
        assert_eq!(lines[2], "Pricing factor (bar/piece): 1/3 = 0.333333");
    }

    #[test]
    fn test_bar_report_zero_yield() {
        let input = BarYieldInput {
            bar_length_mm: 100.0,
            piece_length_mm: 500.0,
            cut_loss_mm: 0.0,
        };
        let result = bar::calculate(&input).unwrap();
        let lines = bar_report(&input, &result);
        assert_eq!(lines[2], "Pricing factor: not applicable (0).");
    }

    #[test]
    fn test_sheet_report_lines() {
        let input = SheetAreaInput {
            sheet_width_mm: 1000.0,
            sheet_height_mm: 1000.0,
            piece_width_mm: 100.0,
            piece_height_mm: 100.0,
            nesting_loss_percent: 10.0,
        };
        let result = sheet::calculate(&input).unwrap();
        let lines = sheet_report(&input, &result);
        assert_eq!(lines[1], "Estimated loss: 10.00%  ->  Efficiency: 90.00%");
        assert_eq!(lines[2], "Result: 1 sheet yields 90 piece(s)");
        assert_eq!(lines[3], "Pricing factor (sheet/piece): 1/90 = 0.011111");
    }

    #[test]
    fn test_paint_report_lines() {
        let input = PaintAreaInput {
            width_mm: 100.0,
            length_mm: 200.0,
            height_mm: 50.0,
            face_mode: FaceMode::AllFaces,
        };
        let result = paint::calculate(&input).unwrap();
        let lines = paint_report(&input, &result);
        assert_eq!(
            lines[0],
            "Dimensions: 100 x 200 x 50 mm  |  Faces: all faces"
        );
        assert_eq!(lines[1], "Paint area (m2/piece): 0.070000 m2");
        assert!(lines[3].contains("14.285714"));
    }
}
