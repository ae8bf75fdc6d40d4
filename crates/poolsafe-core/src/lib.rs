//! # poolsafe-core: Foundational Types for Pool Chemistry
//!
//! Defines the type-system primitives every other poolsafe crate builds on.
//! It depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Single `ChemicalParameter` enum.** Seven variants, exhaustive `match`
//!    everywhere. Adding a parameter forces every consumer to handle it.
//!
//! 2. **Injected, immutable standards.** `StandardsTable` is an owned value
//!    built once and passed to the evaluator. There is no global table.
//!
//! 3. **Validated constructors.** `ChemicalStandard` enforces
//!    `min <= ideal.min <= ideal.max <= max`; `PoolId` rejects blank ids.
//!
//! 4. **Readings are data.** Out-of-range or non-finite values are accepted
//!    here and classified downstream. Only unknown parameter names are errors.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod parameter;
pub mod reading;
pub mod standard;
pub mod table;

// Re-export primary types for ergonomic imports.
pub use error::PoolsafeError;
pub use parameter::{ChemicalParameter, PARAMETER_COUNT};
pub use reading::{latest_per_parameter, ChemicalReading, PoolId, ReadingSet};
pub use standard::{ChemicalStandard, ClosureSide, IdealRange};
pub use table::StandardsTable;
