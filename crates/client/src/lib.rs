//! Text frontend for the gauntlet.
//!
//! The binary wires configuration, logging, and a save file around [`App`],
//! which reads answers line by line and narrates every battle event. All I/O
//! goes through [`Console`], so a whole session can be driven from a buffer.

pub mod app;
pub mod config;
pub mod console;
pub mod logging;
pub mod menu;
pub mod narration;
pub mod provider;

pub use app::App;
pub use config::ClientConfig;
pub use console::Console;
pub use provider::ConsoleProvider;
