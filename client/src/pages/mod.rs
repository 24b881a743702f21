//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped layout and delegates rendering details to
//! `components`.

pub mod dashboard;
