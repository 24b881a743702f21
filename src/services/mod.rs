//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own upstream and business concerns so route handlers can
//! stay focused on protocol translation.

pub mod bot;
