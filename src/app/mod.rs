//! Application-Layer: Controller, State, Events, Handler und Werkzeug.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod history;
mod intent_mapping;
pub mod state;
pub mod tool;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use state::{AppState, SessionState};
pub use tool::{DrawMode, LineTool, ToolPreview};
