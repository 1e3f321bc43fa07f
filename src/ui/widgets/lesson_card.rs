//! Lesson card widget
//!
//! One "What I Learned" card: a round icon badge over a centered
//! title and body.

use iced::widget::{column, container, svg, text};
use iced::{Alignment, Element};

use crate::ui::theme::{self, BOLD_WEIGHT};

/// Create a lesson card element
pub fn view<'a, Message: 'a>(
    icon: &'static str,
    title: &'a str,
    body: &'a str,
) -> Element<'a, Message> {
    let badge = container(
        svg(svg::Handle::from_memory(icon.as_bytes()))
            .width(28)
            .height(28)
            .style(|theme, _status| svg::Style {
                color: Some(theme::accent(theme)),
            }),
    )
    .width(64)
    .height(64)
    .center_x(64)
    .center_y(64)
    .style(theme::sticker);

    container(
        column![
            badge,
            text(title)
                .size(26)
                .font(iced::Font {
                    weight: BOLD_WEIGHT,
                    ..theme::HANDWRITING
                })
                .style(|theme| text::Style {
                    color: Some(theme::text_primary(theme)),
                }),
            text(body)
                .size(18)
                .font(theme::HANDWRITING)
                .align_x(Alignment::Center)
                .style(|theme| text::Style {
                    color: Some(theme::text_secondary(theme)),
                }),
        ]
        .spacing(14)
        .align_x(Alignment::Center),
    )
    .padding(28)
    .width(300)
    .style(theme::card)
    .into()
}
