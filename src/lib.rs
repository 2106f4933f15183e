//! TUI Overworld (workspace facade crate).
//!
//! Re-exports the member crates under `tui_overworld::{core,engine,input,term,types}`
//! and adds the binary-side pieces: environment configuration and log setup.

pub mod config;
pub mod logging;

pub use tui_overworld_core as core;
pub use tui_overworld_engine as engine;
pub use tui_overworld_input as input;
pub use tui_overworld_term as term;
pub use tui_overworld_types as types;
