//! Terminal host for the reel carousel: a full-screen strip driven by the
//! keyboard and mouse, plus headless script replay for automation.

pub mod cli;
pub mod host;
pub mod render;
pub mod script;
pub mod tui;

pub use host::{HostEvent, HostSnapshot, TerminalHost};
