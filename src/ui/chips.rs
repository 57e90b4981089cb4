/// Category filter chips
///
/// One toggle per category, derived from the catalog at startup.
/// Exactly one chip is marked active at a time; the active label
/// lives in the view state, the chips just render it.

use iced::widget::{button, text, Row};
use iced::{Background, Border, Theme};

use crate::ui::{fade, ACCENT, SURFACE, TEXT_MUTED, TEXT_PRIMARY};
use crate::Message;

/// Build the chip row. Categories are moved in so the buttons can own
/// their labels; `active` marks which one renders highlighted.
pub fn chip_row<'a>(categories: Vec<String>, active: &str) -> Row<'a, Message> {
    let mut row = Row::new().spacing(8.0);

    for category in categories {
        let is_active = category == active;
        row = row.push(
            button(text(category.clone()).size(14))
                .padding([6.0, 14.0])
                .style(chip_style(is_active))
                .on_press(Message::CategorySelected(category)),
        );
    }

    row
}

/// Pill styling: filled when active, outlined otherwise
fn chip_style(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let hovered = matches!(status, button::Status::Hovered | button::Status::Pressed);

        if active {
            button::Style {
                background: Some(Background::Color(ACCENT)),
                text_color: SURFACE,
                border: Border {
                    radius: 16.0.into(),
                    ..Border::default()
                },
                ..button::Style::default()
            }
        } else {
            button::Style {
                background: Some(Background::Color(fade(
                    SURFACE,
                    if hovered { 1.0 } else { 0.6 },
                ))),
                text_color: if hovered { TEXT_PRIMARY } else { TEXT_MUTED },
                border: Border {
                    color: fade(TEXT_MUTED, 0.4),
                    width: 1.0,
                    radius: 16.0.into(),
                },
                ..button::Style::default()
            }
        }
    }
}
