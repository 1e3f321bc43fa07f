//! Timeline entry widget
//!
//! One dated card on the "How It Started" rail. Entries alternate
//! sides and marker colors, mirroring a scrapbook timeline.

use iced::widget::{Space, column, container, row, text};
use iced::{Alignment, Background, Border, Element, Fill};

use crate::ui::theme::{self, BOLD_WEIGHT};

/// Create a timeline entry element
///
/// `flip` alternates the accent color and pushes the card to the
/// opposite side of the rail.
pub fn view<'a, Message: 'a>(
    period: &'a str,
    title: &'a str,
    body: &'a str,
    flip: bool,
) -> Element<'a, Message> {
    let marker = container(Space::new().width(0).height(0))
        .width(16)
        .height(16)
        .style(move |theme| container::Style {
            background: Some(Background::Color(if flip {
                theme::highlight(theme)
            } else {
                theme::accent(theme)
            })),
            border: Border {
                color: theme::surface(theme),
                width: 3.0,
                radius: 999.0.into(),
            },
            ..Default::default()
        });

    let period_label = text(period)
        .size(14)
        .font(iced::Font {
            weight: BOLD_WEIGHT,
            ..theme::HANDWRITING
        })
        .style(move |theme| text::Style {
            color: Some(if flip {
                theme::highlight(theme)
            } else {
                theme::accent(theme)
            }),
        });

    let card = container(
        column![
            period_label,
            text(title)
                .size(24)
                .font(iced::Font {
                    weight: BOLD_WEIGHT,
                    ..theme::HANDWRITING
                })
                .style(|theme| text::Style {
                    color: Some(theme::text_primary(theme)),
                }),
            text(body)
                .size(19)
                .font(theme::HANDWRITING)
                .style(|theme| text::Style {
                    color: Some(theme::text_secondary(theme)),
                }),
        ]
        .spacing(8),
    )
    .padding(24)
    .max_width(460)
    .style(theme::card);

    let content = if flip {
        row![
            Space::new().width(Fill),
            card,
            Space::new().width(24),
            marker,
        ]
    } else {
        row![
            marker,
            Space::new().width(24),
            card,
            Space::new().width(Fill),
        ]
    };

    content.align_y(Alignment::Start).width(Fill).into()
}
