//! Panels drawn in the main screen

mod messages;
mod room;
mod status;

pub use messages::MessagesWidget;
pub use room::RoomWidget;
pub use status::StatusWidget;
