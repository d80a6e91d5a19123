use iced::widget::image as preview_image;
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{button, column, container, row, scrollable, text};
use iced::{Color, Element, Font, Length, Theme, font};

use crate::filters::FilterBank;
use crate::gui::Message;
use crate::preview::PreviewLayout;

const BUTTON_WIDTH: f32 = 160.0;
const PANEL_WIDTH: f32 = 200.0;

/// Preview pixels uploaded for display
#[derive(Debug, Clone)]
pub struct PreviewHandles {
    pub original: preview_image::Handle,
    pub filtered: preview_image::Handle,
}

fn action<'a>(label: String, message: Message) -> Element<'a, Message> {
    button(text(label))
        .width(Length::Fixed(BUTTON_WIDTH))
        .on_press(message)
        .into()
}

/// Open/Save, the "Filters" heading, one button per filter, then the status line
pub fn control_panel<'a>(bank: &FilterBank, status: &'a str) -> Element<'a, Message> {
    let heading = text("Filters").size(16).font(Font {
        weight: font::Weight::Bold,
        ..Font::DEFAULT
    });

    let mut panel = column![
        action("Open Image".to_string(), Message::OpenRequested),
        action("Save Image".to_string(), Message::SaveRequested),
        container(heading).padding([10, 0]),
    ]
    .spacing(10);

    for filter in bank.iter() {
        panel = panel.push(action(filter.label(), Message::ApplyFilter(*filter)));
    }

    panel.push(container(text(status).size(12)).padding([10, 0])).into()
}

fn canvas_style(_theme: &Theme) -> container::Style {
    container::Style::default().background(Color::from_rgb8(128, 128, 128))
}

/// Both previews on a gray canvas: original at the origin, filtered one bound plus margin to the right
pub fn preview_canvas<'a>(
    layout: PreviewLayout,
    previews: Option<&PreviewHandles>,
) -> Element<'a, Message> {
    let (canvas_width, canvas_height) = layout.canvas_size();
    let (filtered_x, _) = layout.filtered_origin();

    let content: Element<'a, Message> = match previews {
        Some(handles) => row![
            container(preview_image(handles.original.clone()))
                .width(Length::Fixed(filtered_x as f32)),
            preview_image(handles.filtered.clone()),
        ]
        .into(),
        None => text("Open an image to start").into(),
    };

    let canvas = container(content)
        .width(Length::Fixed(canvas_width as f32))
        .height(Length::Fixed(canvas_height as f32))
        .style(canvas_style);

    scrollable(canvas)
        .direction(Direction::Both {
            vertical: Scrollbar::default(),
            horizontal: Scrollbar::default(),
        })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

pub fn layout<'a>(
    sidebar: impl Into<Element<'a, Message>>,
    main_content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    row![
        container(sidebar.into())
            .width(Length::Fixed(PANEL_WIDTH))
            .height(Length::Fill)
            .padding(10),
        container(main_content.into())
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(10),
    ]
    .into()
}
