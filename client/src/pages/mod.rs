//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetching, validation, busy
//! state) and delegates rendering details to `components`.

pub mod about;
pub mod affix_probability;
pub mod home;
pub mod not_found;
pub mod strengthen_probability;
pub mod tools;
