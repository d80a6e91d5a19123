mod app;
mod dialogs;
mod message;
mod widgets;

pub use app::{FilterApp, run};
pub use message::Message;
