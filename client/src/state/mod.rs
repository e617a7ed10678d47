//! Client application state shared through Leptos context.

pub mod toast;
