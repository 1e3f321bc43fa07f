//! Scrapbook decoration widgets
//!
//! Small decorative pieces shared by the journal sections: round
//! sticker badges and a polaroid frame.

use iced::widget::{Space, column, container, svg, text};
use iced::{Alignment, Background, Color, Element, Theme};

use crate::ui::theme;

/// Round sticker badge holding one glyph
///
/// `tint` picks the glyph color from the active theme so stickers can
/// vary without widget-level styling knowledge.
pub fn sticker<'a, Message: 'a>(
    icon: &'static str,
    tint: fn(&Theme) -> Color,
) -> Element<'a, Message> {
    container(
        svg(svg::Handle::from_memory(icon.as_bytes()))
            .width(22)
            .height(22)
            .style(move |theme, _status| svg::Style {
                color: Some(tint(theme)),
            }),
    )
    .width(48)
    .height(48)
    .center_x(48)
    .center_y(48)
    .style(theme::sticker)
    .into()
}

/// Polaroid frame: a square glyph well over a handwritten caption
pub fn polaroid<'a, Message: 'a>(
    icon: &'static str,
    title: &'a str,
    date: &'a str,
) -> Element<'a, Message> {
    let photo_well = container(
        svg(svg::Handle::from_memory(icon.as_bytes()))
            .width(72)
            .height(72)
            .style(|theme, _status| svg::Style {
                color: Some(theme::text_muted(theme)),
            }),
    )
    .width(240)
    .height(240)
    .center_x(240)
    .center_y(240)
    .style(|theme: &Theme| container::Style {
        background: Some(Background::Color(theme::surface_tint(theme))),
        ..Default::default()
    });

    container(
        column![
            photo_well,
            Space::new().height(10),
            text(title)
                .size(24)
                .font(theme::SCRIPT)
                .style(|theme| text::Style {
                    color: Some(theme::text_primary(theme)),
                }),
            text(date)
                .size(15)
                .font(theme::SCRIPT)
                .style(|theme| text::Style {
                    color: Some(theme::text_muted(theme)),
                }),
        ]
        .align_x(Alignment::Center),
    )
    .padding(iced::Padding::new(12.0).bottom(26.0))
    .style(theme::card)
    .into()
}
