//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and pure math from
//! component logic to improve reuse and testability.

pub mod csv_export;
pub mod resize;
