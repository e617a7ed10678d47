//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Views import widgets from this barrel rather than from the submodules, so
//! a widget can move or be swapped without touching its call sites.

pub mod forms;
pub mod layout;
pub mod toast_host;
pub mod ui;

pub use forms::affix_selector::AffixSelector;
pub use layout::hologram_card::HologramCard;
pub use toast_host::ToastHost;
pub use ui::hologram_button::HologramButton;
pub use ui::hologram_checkbox::HologramCheckbox;
pub use ui::hologram_input_number::HologramInputNumber;
pub use ui::hologram_radio_group::{HologramRadioGroup, RadioOption};
pub use ui::hologram_slider::HologramSlider;
pub use ui::hologram_tag::{HologramTag, TagTone};
// HologramModal is reserved and not exported yet.
