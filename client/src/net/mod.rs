//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `client` owns the configured HTTP client and its interceptors, `api`
//! exposes the namespaced call-sites, `error` the shared failure type and
//! `types` the wire schema.

pub mod api;
pub mod client;
pub mod error;
pub mod types;
