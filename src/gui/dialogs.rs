use iced::Task;
use rfd::{AsyncFileDialog, AsyncMessageDialog, MessageButtons, MessageLevel};

use crate::config::{DEFAULT_SAVE_EXTENSION, OPEN_EXTENSIONS};
use crate::dispatch::{Notice, NoticeLevel};
use crate::gui::Message;

pub fn pick_image() -> Task<Message> {
    Task::perform(
        AsyncFileDialog::new()
            .set_title("Open Image")
            .add_filter("Image files", OPEN_EXTENSIONS)
            .pick_file(),
        |handle| Message::OpenPicked(handle.map(|data| data.path().to_path_buf())),
    )
}

pub fn pick_save_target() -> Task<Message> {
    Task::perform(
        AsyncFileDialog::new()
            .set_title("Save Image")
            .set_file_name(format!("filtered.{}", DEFAULT_SAVE_EXTENSION))
            .add_filter("PNG files", &["png"])
            .add_filter("JPEG files", &["jpg", "jpeg"])
            .add_filter("All files", &["*"])
            .save_file(),
        |handle| Message::SavePicked(handle.map(|data| data.path().to_path_buf())),
    )
}

/// Blocking-style message box; the app resumes on dismissal
pub fn show_notice(notice: Notice) -> Task<Message> {
    let level = match notice.level {
        NoticeLevel::Info => MessageLevel::Info,
        NoticeLevel::Error => MessageLevel::Error,
    };
    Task::perform(
        AsyncMessageDialog::new()
            .set_level(level)
            .set_title(notice.title)
            .set_description(notice.message)
            .set_buttons(MessageButtons::Ok)
            .show(),
        |_| Message::NoticeDismissed,
    )
}
