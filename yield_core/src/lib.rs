//! # yield_core - Material-Yield Calculation Engine
//!
//! `yield_core` is the computational heart of the MI Laser measurement
//! calculator: how many finished pieces a stock bar or sheet yields, and how
//! much paint-coverage area a part needs, together with the direct/inverse
//! "factor" values entered into the external order-management (pricing)
//! system.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Recoverable by construction**: bad input never panics; it returns a
//!   [`CalcError`] for the shell to show the user
//!
//! ## Quick Start
//!
//! ```rust
//! use yield_core::calculations::bar::{calculate, BarYieldInput};
//!
//! let input = BarYieldInput {
//!     bar_length_mm: 1000.0,
//!     piece_length_mm: 100.0,
//!     cut_loss_mm: 0.0,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.pieces_per_bar, 10);
//! assert_eq!(result.factor, 0.1);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The three yield calculators (bar, sheet, paint)
//! - [`numeric`] - Decimal-separator-tolerant parsing and fixed-point formatting
//! - [`report`] - Report-line rendering for the pricing workflow
//! - [`units`] - Type-safe unit wrappers for the mm²/m² seam
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod numeric;
pub mod report;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{
    BarYieldInput, BarYieldResult, FaceMode, PaintAreaInput, PaintAreaResult, SheetAreaInput,
    SheetAreaResult,
};
pub use errors::{CalcError, CalcResult};
