//! Keyboard input handling.
//!
//! All input goes through the same two steps:
//!
//! 1. Translated to a [`Command`] by the [`CommandRegistry`]
//! 2. Executed by a handler in the [`handlers`] module
//!
//! ```text
//! KeyEvent -> CommandRegistry::dispatch() -> Command -> handler -> FilterSetters / App
//! ```
//!
//! The filter handlers only receive the current criteria values and a
//! `&mut dyn FilterSetters`, never the whole application.

pub mod command;
pub mod context;
pub mod handlers;
pub mod keybindings;
pub mod registry;

pub use command::Command;
pub use context::InputContext;
pub use keybindings::{KeyCombo, KeybindingConfig};
pub use registry::CommandRegistry;
