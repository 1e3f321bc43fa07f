//! Lock page - the only subtree reachable before the gate opens

use iced::widget::{Space, button, column, container, svg, text};
use iced::{Alignment, Element, Fill};

use crate::app::Message;
use crate::content;
use crate::ui::icons;
use crate::ui::theme::{self, BOLD_WEIGHT};

/// Build the lock page view
pub fn view() -> Element<'static, Message> {
    let lock_glyph = svg(svg::Handle::from_memory(icons::LOCK.as_bytes()))
        .width(40)
        .height(40)
        .style(|theme, _status| svg::Style {
            color: Some(theme::accent(theme)),
        });

    let title = text(content::LOCK_TITLE)
        .size(40)
        .font(iced::Font {
            weight: BOLD_WEIGHT,
            ..theme::HANDWRITING
        })
        .style(|theme| text::Style {
            color: Some(theme::accent_strong(theme)),
        });

    let subtitle = text(content::LOCK_SUBTITLE)
        .size(22)
        .font(theme::HANDWRITING)
        .style(|theme| text::Style {
            color: Some(theme::text_secondary(theme)),
        });

    let enter_btn = button(
        text(content::LOCK_BUTTON)
            .size(22)
            .font(theme::HANDWRITING),
    )
    .padding(iced::Padding::new(12.0).left(36.0).right(36.0))
    .style(theme::enter_button)
    .on_press(Message::Enter);

    let card = container(
        column![
            lock_glyph,
            Space::new().height(14),
            title,
            subtitle,
            Space::new().height(28),
            enter_btn,
        ]
        .align_x(Alignment::Center),
    )
    .max_width(440)
    .padding(48)
    .style(theme::card);

    container(card)
        .width(Fill)
        .height(Fill)
        .center_x(Fill)
        .center_y(Fill)
        .style(theme::main_content)
        .into()
}
