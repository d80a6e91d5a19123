use std::path::PathBuf;

use iced::widget::image::Handle;
use iced::{Element, Task, Theme};
use image::DynamicImage;

use crate::config::{Settings, WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::dispatch::{Command, Dispatcher, Notice};
use crate::gui::Message;
use crate::gui::dialogs;
use crate::gui::widgets::{PreviewHandles, control_panel, layout, preview_canvas};

pub struct FilterApp {
    dispatcher: Dispatcher,
    previews: Option<PreviewHandles>,
    status: String,
}

impl FilterApp {
    pub fn new(settings: Settings, image: Option<PathBuf>) -> (Self, Task<Message>) {
        let app = Self {
            dispatcher: Dispatcher::new(&settings),
            previews: None,
            status: "No image loaded".to_string(),
        };
        let startup = match image {
            Some(path) => Task::done(Message::OpenPicked(Some(path))),
            None => Task::none(),
        };
        (app, startup)
    }

    pub fn title(&self) -> String {
        "Image Filter App - Original vs Edited".to_string()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::OpenRequested => dialogs::pick_image(),
            Message::OpenPicked(Some(path)) => self.run(Command::Open(path)),
            Message::SaveRequested => {
                // Nothing to save: tell the user before asking for a path
                if self.dispatcher.state().filtered().is_none() {
                    self.notify(Notice::nothing_to_save())
                } else {
                    dialogs::pick_save_target()
                }
            }
            Message::SavePicked(Some(path)) => self.run(Command::Save(path)),
            Message::ApplyFilter(filter) => self.run(Command::ApplyFilter(filter)),
            Message::OpenPicked(None) | Message::SavePicked(None) | Message::NoticeDismissed => {
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        layout(
            control_panel(self.dispatcher.bank(), &self.status),
            preview_canvas(self.dispatcher.layout(), self.previews.as_ref()),
        )
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn run(&mut self, command: Command) -> Task<Message> {
        let outcome = self.dispatcher.dispatch(command);
        if outcome.redraw {
            self.redraw();
        }
        match outcome.notice {
            Some(notice) => self.notify(notice),
            None => Task::none(),
        }
    }

    fn notify(&mut self, notice: Notice) -> Task<Message> {
        self.status = notice.message.clone();
        dialogs::show_notice(notice)
    }

    fn redraw(&mut self) {
        let state = self.dispatcher.state();
        self.previews = state.previews().map(|pair| PreviewHandles {
            original: to_handle(pair.original()),
            filtered: to_handle(pair.filtered()),
        });
        if let Some(original) = state.original() {
            self.status = format!("{} x {}", original.width(), original.height());
        }
    }
}

fn to_handle(img: &DynamicImage) -> Handle {
    Handle::from_rgba(img.width(), img.height(), img.to_rgba8().into_raw())
}

pub fn run(settings: Settings, image: Option<PathBuf>) -> iced::Result {
    iced::application(
        move || FilterApp::new(settings.clone(), image.clone()),
        FilterApp::update,
        FilterApp::view,
    )
    .title(FilterApp::title)
    .theme(FilterApp::theme)
    .window_size((WINDOW_WIDTH, WINDOW_HEIGHT))
    .run()
}
