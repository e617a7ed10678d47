//! Layout containers.

pub mod hologram_card;
