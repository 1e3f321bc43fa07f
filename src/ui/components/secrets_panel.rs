//! "Things I Never Said" panel component
//!
//! One button row per note. Clicking a collapsed note opens it and
//! implicitly closes any other; clicking the open note collapses it.
//! The chevron on every row reflects whether that row is the expanded
//! one. An empty catalog renders an empty, valid panel.

use iced::widget::{Space, button, column, container, row, svg, text};
use iced::{Alignment, Element, Fill};

use crate::app::Message;
use crate::content::{Note, NoteId};
use crate::ui::icons;
use crate::ui::theme::{self, BOLD_WEIGHT};

/// Build the notes panel
pub fn view(notes: &'static [Note], expanded: Option<NoteId>) -> Element<'static, Message> {
    let rows = notes
        .iter()
        .map(|note| note_row(note, expanded == Some(note.id)));

    column(rows)
        .spacing(16)
        .width(Fill)
        .align_x(Alignment::Center)
        .into()
}

/// One expandable note row
fn note_row(note: &'static Note, is_expanded: bool) -> Element<'static, Message> {
    let chevron = svg(svg::Handle::from_memory(
        if is_expanded {
            icons::CHEVRON_UP
        } else {
            icons::CHEVRON_DOWN
        }
        .as_bytes(),
    ))
    .width(20)
    .height(20)
    .style(move |theme, _status| svg::Style {
        color: Some(if is_expanded {
            theme::accent(theme)
        } else {
            theme::text_muted(theme)
        }),
    });

    let header = row![
        text(note.title)
            .size(22)
            .font(iced::Font {
                weight: BOLD_WEIGHT,
                ..theme::HANDWRITING
            })
            .style(|theme| text::Style {
                color: Some(theme::text_primary(theme)),
            }),
        Space::new().width(Fill),
        chevron,
    ]
    .align_y(Alignment::Center);

    // A thin rule separates the title from the body when open
    let content: Element<'static, Message> = if is_expanded {
        let divider = container(Space::new().width(Fill).height(1)).style(|theme| {
            container::Style {
                background: Some(iced::Background::Color(theme::border_color(theme))),
                ..Default::default()
            }
        });

        column![
            header,
            Space::new().height(14),
            divider,
            Space::new().height(14),
            text(note.body)
                .size(19)
                .font(theme::HANDWRITING)
                .style(|theme| text::Style {
                    color: Some(theme::text_secondary(theme)),
                }),
        ]
        .into()
    } else {
        header.into()
    };

    button(content)
        .padding(22)
        .width(Fill)
        .style(move |theme, status| theme::note_row(theme, status, is_expanded))
        .on_press(Message::SelectNote(note.id))
        .into()
}
