//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`chat`, `ui`, `dashboard`) so components
//! depend on small focused models.

pub mod chat;
pub mod dashboard;
pub mod ui;
