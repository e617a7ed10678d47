//! OnceHuman tools server: Leptos SSR host and `/api/v1` proxy.

pub mod config;
pub mod routes;
pub mod state;
