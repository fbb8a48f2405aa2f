mod action;
mod connection;
mod delimiter;
mod event;
mod health;
mod loading;
mod page;
mod palette;
mod protocol;
mod specialization;
mod textarea;

pub use action::*;
pub use connection::*;
pub use delimiter::*;
pub use event::*;
pub use health::*;
pub use loading::*;
pub use page::*;
pub use palette::*;
pub use protocol::*;
pub use specialization::*;
pub use textarea::*;
