//! Core pipeline modules
//!
//! Everything between the trigger and the rendered panes:
//! - `capture`: reads and clears the OS clipboard
//! - `language`: classifies captured text into the supported language set
//! - `prompt`: maps (language, style) to a system instruction
//! - `improver`: sends (text, instruction) to the rewrite provider
//! - `session`: the state machine that owns the panes

pub mod capture;
pub mod language;
pub mod prompt;
pub mod improver;
pub mod session;
