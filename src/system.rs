//! OS integration: the improver window and the global hotkey trigger.

pub mod shortcut;
pub mod window;
