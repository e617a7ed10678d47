//! Hologram-styled input and display primitives.

pub mod hologram_button;
pub mod hologram_checkbox;
pub mod hologram_input_number;
pub mod hologram_radio_group;
pub mod hologram_slider;
pub mod hologram_tag;
