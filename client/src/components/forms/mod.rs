//! Domain-aware form controls.

pub mod affix_selector;
