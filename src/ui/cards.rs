/// Card widgets for the storefront grids
///
/// Products and services render as fixed-size cards inside fixed-size
/// slots; the slot leaves room for the entrance animation to slide the
/// card up without reflowing its neighbors. `reveal` is the eased
/// progress of that animation (0 = invisible, 1 = settled) and `rise`
/// is the current downward offset in pixels.

use std::path::Path;

use iced::widget::image::Handle;
use iced::widget::{button, column, container, row, text, vertical_space, Image};
use iced::{Alignment, Background, Border, ContentFit, Element, Length, Padding, Theme};

use crate::contact::ServiceAction;
use crate::money;
use crate::state::data::Product;
use crate::state::reveal::RISE_OFFSET;
use crate::ui::layout::{
    EMPTY_PLACEHOLDER_HEIGHT, PRODUCT_CARD_HEIGHT, PRODUCT_CARD_WIDTH, SERVICE_CARD_HEIGHT,
    SERVICE_CARD_WIDTH, SERVICE_COUNT,
};
use crate::ui::{fade, ACCENT, SURFACE, TEXT_MUTED, TEXT_PRIMARY};
use crate::Message;

/// Height of the product image strip at the top of a card
const IMAGE_HEIGHT: f32 = 160.0;

/// What a service card's button does when pressed
#[derive(Debug, Clone, Copy)]
pub enum ServiceKind {
    /// Opens an outbound contact link
    Dispatch(ServiceAction),
    /// Reveals the premium-app picker section
    PremiumBox,
}

/// A fixed service offered on the services section
pub struct ServiceDef {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub kind: ServiceKind,
}

/// The services grid, in display order
pub static SERVICES: [ServiceDef; SERVICE_COUNT] = [
    ServiceDef {
        icon: "🧾",
        title: "Cek Turnitin",
        description: "Cek plagiasi dengan akun resmi, hasil 5-15 menit",
        kind: ServiceKind::Dispatch(ServiceAction::Turnitin),
    },
    ServiceDef {
        icon: "🤖",
        title: "Cek Turnitin AI",
        description: "Deteksi tulisan AI sekaligus skor plagiasinya",
        kind: ServiceKind::Dispatch(ServiceAction::TurnitinAi),
    },
    ServiceDef {
        icon: "✍️",
        title: "Parafrase",
        description: "Turunkan skor plagiasi, cek biayanya dulu",
        kind: ServiceKind::Dispatch(ServiceAction::Parafrase),
    },
    ServiceDef {
        icon: "📑",
        title: "Perbaikan Naskah",
        description: "Daftar isi, daftar pustaka, Mendeley, dan lainnya",
        kind: ServiceKind::Dispatch(ServiceAction::Naskah),
    },
    ServiceDef {
        icon: "📚",
        title: "Publish Jurnal",
        description: "Konsultasi publikasi jurnal nasional dan internasional",
        kind: ServiceKind::Dispatch(ServiceAction::Jurnal),
    },
    ServiceDef {
        icon: "📱",
        title: "Aplikasi Premium",
        description: "CapCut, Netflix, Spotify, dan aplikasi lainnya",
        kind: ServiceKind::PremiumBox,
    },
];

/// Preset choices in the premium-app picker; "Lainnya" is appended
/// separately and routes through the custom-app prompt
pub const PREMIUM_APPS: [&str; 5] = ["CapCut", "Netflix", "Spotify", "YouTube", "Canva"];

/// Build one product card inside its animation slot
pub fn product_card(product: &Product, reveal: f32, rise: f32) -> Element<'_, Message> {
    let picture: Element<'_, Message> = if Path::new(&product.image).exists() {
        Image::new(Handle::from_path(product.image.as_str()))
            .width(Length::Fill)
            .height(Length::Fixed(IMAGE_HEIGHT))
            .content_fit(ContentFit::Cover)
            .opacity(reveal)
            .into()
    } else {
        // No asset on disk: show the title's initial instead
        let initial = product.title.chars().next().unwrap_or('?');
        container(
            text(initial.to_string())
                .size(48)
                .style(move |_theme: &Theme| text::Style {
                    color: Some(fade(TEXT_MUTED, reveal)),
                }),
        )
        .width(Length::Fill)
        .height(Length::Fixed(IMAGE_HEIGHT))
        .center_x(Length::Fill)
        .center_y(Length::Fixed(IMAGE_HEIGHT))
        .into()
    };

    let body = column![
        text(&product.title)
            .size(17)
            .style(move |_theme: &Theme| text::Style {
                color: Some(fade(TEXT_PRIMARY, reveal)),
            }),
        text(&product.description)
            .size(13)
            .style(move |_theme: &Theme| text::Style {
                color: Some(fade(TEXT_MUTED, reveal)),
            }),
        vertical_space(),
        row![
            text(money::format_rupiah(product.price))
                .size(16)
                .style(move |_theme: &Theme| text::Style {
                    color: Some(fade(ACCENT, reveal)),
                }),
            iced::widget::horizontal_space(),
            button(text("Beli").size(14))
                .padding([6.0, 16.0])
                .style(outline_button(reveal))
                .on_press(Message::OrderProduct(product.id)),
        ]
        .align_y(Alignment::Center),
    ]
    .spacing(8.0)
    .padding(16.0)
    .height(Length::Fill);

    let card = container(column![picture, body])
        .width(Length::Fill)
        .height(Length::Fixed(PRODUCT_CARD_HEIGHT - RISE_OFFSET))
        .style(card_surface(reveal))
        .clip(true);

    animation_slot(card, PRODUCT_CARD_WIDTH, PRODUCT_CARD_HEIGHT, rise)
}

/// Build one service card inside its animation slot
pub fn service_card(service: &'static ServiceDef, reveal: f32, rise: f32) -> Element<'static, Message> {
    let press = match service.kind {
        ServiceKind::Dispatch(action) => Message::ServicePressed(action),
        ServiceKind::PremiumBox => Message::ShowPremiumBox,
    };

    let label = match service.kind {
        ServiceKind::Dispatch(_) => "Pesan Sekarang",
        ServiceKind::PremiumBox => "Lihat Pilihan",
    };

    let body = column![
        row![
            text(service.icon).size(26),
            text(service.title)
                .size(17)
                .style(move |_theme: &Theme| text::Style {
                    color: Some(fade(TEXT_PRIMARY, reveal)),
                }),
        ]
        .spacing(10.0)
        .align_y(Alignment::Center),
        text(service.description)
            .size(13)
            .style(move |_theme: &Theme| text::Style {
                color: Some(fade(TEXT_MUTED, reveal)),
            }),
        vertical_space(),
        button(text(label).size(14))
            .padding([6.0, 16.0])
            .style(outline_button(reveal))
            .on_press(press),
    ]
    .spacing(8.0)
    .padding(16.0)
    .height(Length::Fill);

    let card = container(body)
        .width(Length::Fill)
        .height(Length::Fixed(SERVICE_CARD_HEIGHT - RISE_OFFSET))
        .style(card_surface(reveal))
        .clip(true);

    animation_slot(card, SERVICE_CARD_WIDTH, SERVICE_CARD_HEIGHT, rise)
}

/// The single "no results" placeholder shown instead of an empty grid
pub fn empty_placeholder<'a>() -> Element<'a, Message> {
    container(
        text("Tidak ada produk ditemukan")
            .size(16)
            .style(|_theme: &Theme| text::Style {
                color: Some(TEXT_MUTED),
            }),
    )
    .width(Length::Fill)
    .height(Length::Fixed(EMPTY_PLACEHOLDER_HEIGHT))
    .center_x(Length::Fill)
    .center_y(Length::Fixed(EMPTY_PLACEHOLDER_HEIGHT))
    .into()
}

/// One preset app choice in the premium-app picker
pub fn premium_app_button<'a>(name: &'static str) -> Element<'a, Message> {
    button(text(name).size(14))
        .padding([8.0, 18.0])
        .style(outline_button(1.0))
        .on_press(Message::PremiumAppChosen(name.to_string()))
        .into()
}

/// The "other app" choice; routes through the custom-app prompt
pub fn other_app_button<'a>() -> Element<'a, Message> {
    button(text("Lainnya...").size(14))
        .padding([8.0, 18.0])
        .style(outline_button(1.0))
        .on_press(Message::PremiumAppOther)
        .into()
}

/// Wrap a card in its fixed-size slot, pushed down by the current rise
fn animation_slot<'a>(
    card: impl Into<Element<'a, Message>>,
    width: f32,
    slot_height: f32,
    rise: f32,
) -> Element<'a, Message> {
    container(card)
        .width(Length::Fixed(width))
        .height(Length::Fixed(slot_height))
        .padding(Padding {
            top: rise.clamp(0.0, RISE_OFFSET),
            ..Padding::ZERO
        })
        .clip(true)
        .into()
}

/// Card surface styling, faded by reveal progress
fn card_surface(reveal: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(fade(SURFACE, reveal))),
        border: Border {
            color: fade(TEXT_MUTED, 0.15 * reveal),
            width: 1.0,
            radius: 12.0.into(),
        },
        ..container::Style::default()
    }
}

/// Accent-outlined action button, faded by reveal progress
fn outline_button(reveal: f32) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let hovered = matches!(status, button::Status::Hovered | button::Status::Pressed);
        button::Style {
            background: if hovered {
                Some(Background::Color(fade(ACCENT, reveal)))
            } else {
                None
            },
            text_color: if hovered {
                fade(SURFACE, reveal)
            } else {
                fade(ACCENT, reveal)
            },
            border: Border {
                color: fade(ACCENT, reveal),
                width: 1.0,
                radius: 8.0.into(),
            },
            ..button::Style::default()
        }
    }
}
