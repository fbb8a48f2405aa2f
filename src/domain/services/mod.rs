mod app_state;
mod config_editor;
pub mod connection;
mod console;
pub mod events;
mod history;
pub mod markup;
mod roster;
mod scroll;
mod themes;

pub use app_state::*;
pub use config_editor::*;
pub use console::*;
pub use history::*;
pub use roster::*;
pub use scroll::*;
pub use themes::*;
