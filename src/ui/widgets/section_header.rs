//! Section header widget
//!
//! Displays a centered handwritten section title over a short accent
//! underline, the scrapbook stand-in for a marker stroke.

use iced::widget::{Space, column, container, text};
use iced::{Alignment, Background, Element};

use crate::ui::theme::{self, BOLD_WEIGHT};

/// Create a section header element
pub fn view<'a, Message: 'a>(title: &'a str) -> Element<'a, Message> {
    let title_text = text(title)
        .size(36)
        .font(iced::Font {
            weight: BOLD_WEIGHT,
            ..theme::HANDWRITING
        })
        .style(|theme| text::Style {
            color: Some(theme::accent_strong(theme)),
        });

    let underline = container(Space::new().width(120).height(5)).style(|theme| {
        container::Style {
            background: Some(Background::Color(theme::highlight(theme))),
            border: iced::Border {
                radius: 3.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    });

    column![title_text, Space::new().height(6), underline]
        .align_x(Alignment::Center)
        .into()
}
