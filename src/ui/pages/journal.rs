//! Journal page - the main subtree, reachable only once unlocked
//!
//! One scrollable column of sections. All copy comes from the content
//! catalog; the only state read here is the notes panel selection and
//! the window width for the scrapbook breakpoint.

use iced::widget::{Space, column, container, row, scrollable, svg, text};
use iced::{Alignment, Background, Border, Color, Element, Fill};

use crate::app::{Message, NotesPanel};
use crate::content;
use crate::ui::components::secrets_panel;
use crate::ui::icons;
use crate::ui::theme::{self, BOLD_WEIGHT};
use crate::ui::widgets::{lesson_card, polaroid, section_header, sticker, timeline_item};

/// Below this window width the scrapbook stacks into one column
const SCRAPBOOK_BREAKPOINT: f32 = 960.0;

/// Promise bullet color
const PROMISE_GREEN: Color = iced::color!(0x4ade80);

/// Icons cycled over the lesson cards
const LESSON_ICONS: [&str; 3] = [icons::CLOUD, icons::MOON, icons::HEART];

/// Build the journal page view
pub fn view(notes: &NotesPanel, window_width: f32) -> Element<'static, Message> {
    let two_column = window_width >= SCRAPBOOK_BREAKPOINT;

    let content = column![
        Space::new().height(96),
        intro(),
        Space::new().height(120),
        section("How It Started", timeline()),
        Space::new().height(120),
        section("Pieces of Me", scrapbook(two_column)),
        Space::new().height(120),
        section("Things I Never Said", secrets(notes.expanded())),
        Space::new().height(120),
        section("What I Learned", lessons(two_column)),
        Space::new().height(120),
        section("If We Ever Talk Again", promises()),
        Space::new().height(120),
        letter(),
        Space::new().height(80),
    ]
    .width(Fill);

    container(
        scrollable(content)
            .width(Fill)
            .height(Fill)
            .style(theme::soft_scrollable),
    )
    .width(Fill)
    .height(Fill)
    .style(theme::main_content)
    .into()
}

/// Section header + centered body
fn section(title: &'static str, body: Element<'static, Message>) -> Element<'static, Message> {
    column![
        container(section_header::view(title)).center_x(Fill),
        Space::new().height(40),
        container(body).center_x(Fill),
    ]
    .width(Fill)
    .into()
}

fn intro() -> Element<'static, Message> {
    let title = text(content::INTRO_TITLE)
        .size(68)
        .font(iced::Font {
            weight: BOLD_WEIGHT,
            ..theme::HANDWRITING
        })
        .style(|theme| text::Style {
            color: Some(theme::accent_strong(theme)),
        });

    let subtitle = text(content::INTRO_SUBTITLE)
        .size(26)
        .font(theme::HANDWRITING)
        .align_x(Alignment::Center)
        .style(|theme| text::Style {
            color: Some(theme::text_secondary(theme)),
        });

    let hint = text(content::INTRO_HINT)
        .size(17)
        .font(theme::HANDWRITING)
        .style(|theme| text::Style {
            color: Some(theme::text_muted(theme)),
        });

    let heading = column![title, Space::new().height(18), subtitle, Space::new().height(14), hint]
        .align_x(Alignment::Center)
        .max_width(680);

    container(
        row![
            sticker(icons::MOON, theme::accent),
            Space::new().width(36),
            heading,
            Space::new().width(36),
            sticker(icons::STAR, theme::highlight),
        ]
        .align_y(Alignment::Center),
    )
    .center_x(Fill)
    .into()
}

fn timeline() -> Element<'static, Message> {
    container(
        column(
            content::TIMELINE
                .iter()
                .enumerate()
                .map(|(i, entry)| {
                    timeline_item::view(entry.period, entry.title, entry.body, i % 2 == 1)
                }),
        )
        .spacing(32),
    )
    .max_width(980)
    .into()
}

fn scrapbook(two_column: bool) -> Element<'static, Message> {
    let left = paper_note();
    let right = polaroid_stack();

    if two_column {
        row![left, Space::new().width(48), right]
            .align_y(Alignment::Center)
            .into()
    } else {
        column![left, Space::new().height(48), right]
            .align_x(Alignment::Center)
            .into()
    }
}

/// The recreated handwritten note sheet
fn paper_note() -> Element<'static, Message> {
    let header = row![
        svg(svg::Handle::from_memory(icons::HEART.as_bytes()))
            .width(22)
            .height(22)
            .style(|theme, _status| svg::Style {
                color: Some(theme::highlight(theme)),
            }),
        Space::new().width(Fill),
        text("Me")
            .size(44)
            .font(iced::Font {
                weight: BOLD_WEIGHT,
                ..theme::SCRIPT
            })
            .style(|theme| text::Style {
                color: Some(theme::accent(theme)),
            }),
        Space::new().width(Fill),
        Space::new().width(22),
    ]
    .align_y(Alignment::Center);

    let likes = column(content::LIKES.iter().map(|item| {
        row![
            text("•").size(20).style(|theme| text::Style {
                color: Some(theme::accent(theme)),
            }),
            Space::new().width(10),
            text(*item)
                .size(20)
                .font(theme::SCRIPT)
                .style(|theme| text::Style {
                    color: Some(theme::text_primary(theme)),
                }),
        ]
        .align_y(Alignment::Center)
        .into()
    }))
    .spacing(8);

    let side_list = column(content::SIDE_LIST.iter().map(|item| {
        text(*item)
            .size(17)
            .font(theme::SCRIPT)
            .style(|theme| text::Style {
                color: Some(theme::text_secondary(theme)),
            })
            .into()
    }))
    .spacing(6)
    .align_x(Alignment::End);

    let divider = container(Space::new().width(Fill).height(1)).style(|theme| container::Style {
        background: Some(Background::Color(theme::border_color(theme))),
        ..Default::default()
    });

    let believed_badge = container(
        text("She Believed\nShe Could\nSo She Did...")
            .size(13)
            .font(iced::Font {
                weight: BOLD_WEIGHT,
                ..theme::HANDWRITING
            })
            .align_x(Alignment::Center)
            .style(|theme| text::Style {
                color: Some(theme::accent(theme)),
            }),
    )
    .padding(10)
    .style(|theme: &iced::Theme| container::Style {
        background: Some(Background::Color(theme::surface(theme))),
        border: Border {
            color: theme::border_color(theme),
            width: 1.0,
            radius: 8.0.into(),
        },
        ..Default::default()
    });

    let books = column(
        content::BOOKS
            .iter()
            .map(|book| {
                text(format!("- {}", book))
                    .size(18)
                    .font(theme::SCRIPT)
                    .style(|theme| text::Style {
                        color: Some(theme::text_primary(theme)),
                    })
                    .into()
            })
            .chain(std::iter::once(
                text(content::BOOKS_FOOTER)
                    .size(18)
                    .font(theme::SCRIPT)
                    .style(|theme| text::Style {
                        color: Some(theme::highlight(theme)),
                    })
                    .into(),
            )),
    )
    .spacing(6);

    container(
        column![
            header,
            Space::new().height(22),
            row![likes, Space::new().width(Fill), side_list],
            Space::new().height(24),
            divider,
            Space::new().height(18),
            row![books, Space::new().width(Fill), believed_badge],
        ],
    )
    .padding(30)
    .width(420)
    .style(theme::paper)
    .into()
}

/// Polaroid, sticker strip, and the little motto card
fn polaroid_stack() -> Element<'static, Message> {
    let stickers = row![
        sticker(icons::CAMERA, theme::accent),
        Space::new().width(18),
        sticker(icons::BOOK_OPEN, theme::highlight),
        Space::new().width(18),
        sticker(icons::PALETTE, theme::accent_strong),
    ]
    .align_y(Alignment::Center);

    let motto = container(
        text("MAKE IT\nHAPPEN")
            .size(18)
            .font(iced::Font {
                weight: BOLD_WEIGHT,
                ..theme::HANDWRITING
            })
            .align_x(Alignment::Center)
            .style(|theme| text::Style {
                color: Some(theme::accent(theme)),
            }),
    )
    .padding(16)
    .style(theme::card);

    column![
        polaroid(icons::CAT, content::POLAROID_TITLE, content::POLAROID_DATE),
        Space::new().height(28),
        row![stickers, Space::new().width(30), motto].align_y(Alignment::Center),
    ]
    .align_x(Alignment::Center)
    .into()
}

fn secrets(expanded: Option<content::NoteId>) -> Element<'static, Message> {
    let hint = text(content::SECRETS_HINT)
        .size(20)
        .font(theme::HANDWRITING)
        .style(|theme| text::Style {
            color: Some(theme::text_muted(theme)),
        });

    container(
        column![
            hint,
            Space::new().height(24),
            secrets_panel::view(content::HIDDEN_NOTES, expanded),
        ]
        .align_x(Alignment::Center),
    )
    .max_width(660)
    .into()
}

fn lessons(two_column: bool) -> Element<'static, Message> {
    let cards = content::LESSONS
        .iter()
        .zip(LESSON_ICONS.iter().copied().cycle())
        .map(|(lesson, icon)| lesson_card::view(icon, lesson.title, lesson.body));

    if two_column {
        row(cards).spacing(28).into()
    } else {
        column(cards)
            .spacing(28)
            .align_x(Alignment::Center)
            .into()
    }
}

fn promises() -> Element<'static, Message> {
    let dot = || {
        container(Space::new().width(0).height(0))
            .width(9)
            .height(9)
            .style(|_theme| container::Style {
                background: Some(Background::Color(PROMISE_GREEN)),
                border: Border {
                    radius: 999.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            })
    };

    let rows = column(content::PROMISES.iter().map(|promise| {
        row![
            dot(),
            Space::new().width(14),
            text(*promise)
                .size(21)
                .font(theme::HANDWRITING)
                .style(|theme| text::Style {
                    color: Some(theme::text_primary(theme)),
                }),
        ]
        .align_y(Alignment::Center)
        .into()
    }))
    .spacing(14);

    let footer = text(content::PROMISES_FOOTER)
        .size(18)
        .font(theme::HANDWRITING)
        .style(|theme| text::Style {
            color: Some(theme::text_muted(theme)),
        });

    container(
        column![rows, Space::new().height(26), footer].align_x(Alignment::Center),
    )
    .padding(40)
    .max_width(720)
    .style(theme::card)
    .into()
}

fn letter() -> Element<'static, Message> {
    let paragraphs = column(content::LETTER_PARAGRAPHS.iter().map(|paragraph| {
        text(*paragraph)
            .size(27)
            .font(theme::SCRIPT)
            .style(|theme| text::Style {
                color: Some(theme::text_primary(theme)),
            })
            .into()
    }))
    .spacing(26);

    let signoff = row![
        Space::new().width(Fill),
        text(content::LETTER_SIGNOFF)
            .size(27)
            .font(theme::SCRIPT)
            .style(|theme| text::Style {
                color: Some(theme::text_primary(theme)),
            }),
    ];

    let sheet = container(column![paragraphs, Space::new().height(36), signoff])
        .padding(56)
        .max_width(640)
        .style(theme::letter_paper);

    let footer = column![
        svg(svg::Handle::from_memory(icons::SEND.as_bytes()))
            .width(22)
            .height(22)
            .style(|theme, _status| svg::Style {
                color: Some(theme::text_muted(theme)),
            }),
        Space::new().height(8),
        text(content::LETTER_FOOTER)
            .size(14)
            .font(theme::HANDWRITING)
            .style(|theme| text::Style {
                color: Some(theme::text_muted(theme)),
            }),
    ]
    .align_x(Alignment::Center);

    column![
        container(sheet).center_x(Fill),
        Space::new().height(64),
        container(footer).center_x(Fill),
    ]
    .width(Fill)
    .into()
}
