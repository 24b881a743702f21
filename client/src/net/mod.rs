//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the REST call to the answering-service proxy.

pub mod api;
