//! Fixed navigation bar component
//!
//! Floats above the scrolled journal: the title pill on the left, the
//! dark-mode and music toggles on the right. The music button only
//! flips the display flag; the icon is its whole observable effect.

use iced::widget::{Space, button, container, row, svg, text};
use iced::{Alignment, Element, Fill};

use crate::app::Message;
use crate::content;
use crate::ui::icons;
use crate::ui::theme::{self, BOLD_WEIGHT};

/// Build the nav bar
pub fn view(is_playing: bool, dark_mode: bool) -> Element<'static, Message> {
    let title_pill = container(
        text(content::APP_TITLE)
            .size(18)
            .font(iced::Font {
                weight: BOLD_WEIGHT,
                ..theme::HANDWRITING
            }),
    )
    .padding(iced::Padding::new(8.0).left(18.0).right(18.0))
    .style(theme::nav_pill);

    let theme_btn = icon_button(
        if dark_mode { icons::SUN } else { icons::MOON },
        Message::ToggleDarkMode,
    );

    let music_btn = icon_button(
        if is_playing {
            icons::VOLUME_ON
        } else {
            icons::VOLUME_OFF
        },
        Message::ToggleMusic,
    );

    row![
        title_pill,
        Space::new().width(Fill),
        theme_btn,
        Space::new().width(10),
        music_btn,
    ]
    .align_y(Alignment::Center)
    .width(Fill)
    .into()
}

/// Round icon button used by both toggles
fn icon_button(icon: &'static str, on_press: Message) -> Element<'static, Message> {
    button(
        container(
            svg(svg::Handle::from_memory(icon.as_bytes()))
                .width(20)
                .height(20)
                .style(|theme, _status| svg::Style {
                    color: Some(theme::accent_strong(theme)),
                }),
        )
        .center_x(24)
        .center_y(24),
    )
    .padding(10)
    .style(theme::nav_icon_button)
    .on_press(on_press)
    .into()
}
