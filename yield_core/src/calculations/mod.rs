//! # Yield Calculations
//!
//! This module contains the three yield calculators. Each calculation
//! follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(&input) -> CalcResult<*Result>` - Pure calculation function
//!
//! The calculators are independent leaves: none depends on another, none
//! holds state, and repeated calls with identical inputs produce identical
//! results.
//!
//! ## Available Calculations
//!
//! - [`bar`] - Bar/tube cutting yield with kerf loss
//! - [`sheet`] - Sheet yield by area ratio with nesting-loss derating
//! - [`paint`] - Paint surface area (m²) with face-selection modes

pub mod bar;
pub mod paint;
pub mod sheet;

// Re-export commonly used types
pub use bar::{BarYieldInput, BarYieldResult};
pub use paint::{FaceMode, PaintAreaInput, PaintAreaResult};
pub use sheet::{SheetAreaInput, SheetAreaResult};
