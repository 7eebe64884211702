//! Configuration management.
//!
//! Settings ([`settings::Config`]), character key bindings
//! ([`keymap::Keymap`]) and colours ([`theme::Theme`]) each live in their own
//! TOML file and fall back to built-in defaults.

pub mod keymap;
pub mod settings;
pub mod theme;
