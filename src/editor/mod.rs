//! Editing session, tool modes, configuration and notifications

pub mod config;
pub mod events;
pub mod tools;
pub mod session;

pub use config::EditorConfig;
pub use events::{EditorEvent, EventBus, ModeKind};
pub use tools::{ToolMode, ToolModeController};
pub use session::{EditorSession, Modifiers};
