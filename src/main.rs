use chrono::{Datelike, Local};
use iced::widget::{
    button, center, column, container, mouse_area, opaque, row, scrollable, stack, text,
    text_input, Column, Row,
};
use iced::{
    event, time, window, Alignment, Background, Border, Color, Element, Event, Length, Padding,
    Size, Subscription, Task, Theme,
};

// Declare the application modules
mod contact;
mod money;
mod state;
mod ui;

use contact::ServiceAction;
use state::catalog::Catalog;
use state::reveal::{ease_out_cubic, RevealTracker, Slot};
use state::view::ViewState;
use ui::layout::{self, PageMetrics, Section};
use ui::{cards, chips, fade, TEXT_MUTED, TEXT_PRIMARY};

/// Initial window dimensions
const WINDOW_WIDTH: f32 = 1100.0;
const WINDOW_HEIGHT: f32 = 780.0;

/// Duration of a smooth scroll between sections, in seconds
const SCROLL_DURATION: f32 = 0.5;

/// Main application state
struct TokoStore {
    /// The immutable product catalog
    catalog: Catalog,
    /// Active chip, search text, and the subset currently shown
    view: ViewState,
    /// One-shot entrance animations for service and product cards
    reveal: RevealTracker,
    /// Current scroll offset and viewport size of the content area
    scroll: ScrollState,
    /// In-flight smooth scroll, if any
    scroll_animation: Option<ScrollAnimation>,
    /// Whether the premium-app picker section has been revealed
    premium_visible: bool,
    /// Input buffer of the custom-app prompt while it is open
    prompt: Option<String>,
    /// Instant of the previous animation tick
    last_tick: Option<time::Instant>,
}

/// Where the content is scrolled to and how big its viewport is
#[derive(Debug, Clone, Copy)]
struct ScrollState {
    offset_y: f32,
    viewport_width: f32,
    viewport_height: f32,
}

/// An in-flight smooth scroll between two offsets
#[derive(Debug, Clone, Copy)]
struct ScrollAnimation {
    from: f32,
    to: f32,
    elapsed: f32,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// The search box content changed
    SearchChanged(String),
    /// A category chip was activated
    CategorySelected(String),
    /// The "Beli" button on a product card was pressed
    OrderProduct(u32),
    /// A service card's action button was pressed
    ServicePressed(ServiceAction),
    /// The premium-app picker was requested
    ShowPremiumBox,
    /// A preset premium app was picked
    PremiumAppChosen(String),
    /// The "Lainnya" choice was picked; opens the custom-app prompt
    PremiumAppOther,
    /// The custom-app prompt input changed
    PromptInput(String),
    /// The custom-app prompt was confirmed
    PromptSubmit,
    /// The custom-app prompt was dismissed
    PromptCancel,
    /// A navigation link or the hero button was pressed
    NavigateTo(Section),
    /// The content area scrolled (user wheel or our own animation)
    Scrolled(scrollable::Viewport),
    /// The window was resized
    WindowResized(Size),
    /// Animation frame
    Tick(time::Instant),
    /// An outbound link finished opening (or failed to)
    LinkOpened(Result<(), String>),
}

impl TokoStore {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        // If this fails, we panic because the storefront cannot
        // function without its product list
        let catalog = Catalog::load().expect("Failed to load the embedded product catalog.");

        println!(
            "🛍️  Toko Store initialized with {} products in {} categories",
            catalog.len(),
            catalog.categories().len() - 1,
        );

        let view = ViewState::new(&catalog);
        let reveal = RevealTracker::new(cards::SERVICES.len(), catalog.len());

        let mut store = TokoStore {
            catalog,
            view,
            reveal,
            scroll: ScrollState {
                offset_y: 0.0,
                viewport_width: WINDOW_WIDTH,
                viewport_height: WINDOW_HEIGHT - layout::NAV_HEIGHT,
            },
            scroll_animation: None,
            premium_visible: false,
            prompt: None,
            last_tick: None,
        };

        // Cards above the fold start revealing immediately
        store.check_reveals();

        (store, Task::none())
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SearchChanged(query) => {
                self.view.set_query(&self.catalog, query);
                self.reveal.retire_products();
                Task::none()
            }
            Message::CategorySelected(category) => {
                self.view.select_category(&self.catalog, &category);
                self.reveal.retire_products();
                Task::none()
            }
            Message::OrderProduct(id) => match self.catalog.product(id) {
                Some(product) => open_in_browser(contact::order_product_link(&product.title)),
                None => Task::none(),
            },
            Message::ServicePressed(action) => open_in_browser(action.link()),
            Message::ShowPremiumBox => {
                self.premium_visible = true;
                self.start_scroll_to(Section::Aplikasi);
                Task::none()
            }
            Message::PremiumAppChosen(name) => open_in_browser(contact::preset_app_link(&name)),
            Message::PremiumAppOther => {
                self.prompt = Some(String::new());
                Task::none()
            }
            Message::PromptInput(input) => {
                if let Some(buffer) = &mut self.prompt {
                    *buffer = input;
                }
                Task::none()
            }
            Message::PromptSubmit => {
                let input = self.prompt.take().unwrap_or_default();
                match contact::custom_app_link(&input) {
                    Some(url) => open_in_browser(url),
                    // Declined or empty: open nothing
                    None => Task::none(),
                }
            }
            Message::PromptCancel => {
                self.prompt = None;
                Task::none()
            }
            Message::NavigateTo(section) => {
                self.start_scroll_to(section);
                Task::none()
            }
            Message::Scrolled(viewport) => {
                let bounds = viewport.bounds();
                self.scroll.offset_y = viewport.absolute_offset().y;
                self.scroll.viewport_width = bounds.width;
                self.scroll.viewport_height = bounds.height;
                self.check_reveals();
                Task::none()
            }
            Message::WindowResized(size) => {
                self.scroll.viewport_width = size.width;
                self.scroll.viewport_height = (size.height - layout::NAV_HEIGHT).max(0.0);
                self.check_reveals();
                Task::none()
            }
            Message::Tick(now) => {
                let dt = self
                    .last_tick
                    .map(|last| (now - last).as_secs_f32())
                    .unwrap_or(0.0);
                self.last_tick = Some(now);

                self.reveal.tick(dt);

                let task = if let Some(animation) = &mut self.scroll_animation {
                    animation.elapsed += dt;
                    let t = (animation.elapsed / SCROLL_DURATION).min(1.0);
                    let y = animation.from + (animation.to - animation.from) * ease_out_cubic(t);
                    self.scroll.offset_y = y;
                    if t >= 1.0 {
                        self.scroll_animation = None;
                    }
                    scrollable::scroll_to(
                        content_scroll_id(),
                        scrollable::AbsoluteOffset { x: 0.0, y },
                    )
                } else {
                    Task::none()
                };

                self.check_reveals();
                task
            }
            Message::LinkOpened(result) => {
                if let Err(error) = result {
                    eprintln!("⚠️  Failed to open link: {error}");
                }
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let content = column![self.hero(), self.services_section(), self.products_section()]
            .push_maybe(self.premium_visible.then(|| self.premium_section()))
            .push(self.contact_section());

        let page = column![
            self.nav_bar(),
            scrollable(content)
                .id(content_scroll_id())
                .on_scroll(Message::Scrolled)
                .width(Length::Fill)
                .height(Length::Fill),
        ];

        match &self.prompt {
            Some(input) => modal(page.into(), self.prompt_card(input)),
            None => page.into(),
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Animation frames only run while something is actually moving
    fn subscription(&self) -> Subscription<Message> {
        let resizes = event::listen_with(|event, _status, _window| match event {
            Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
            _ => None,
        });

        if self.is_ticking() {
            Subscription::batch([
                resizes,
                time::every(time::Duration::from_millis(16)).map(Message::Tick),
            ])
        } else {
            resizes
        }
    }

    /// Geometry snapshot for the current width and view state
    fn metrics(&self) -> PageMetrics {
        PageMetrics::new(
            self.scroll.viewport_width,
            self.view.shown.len(),
            self.premium_visible,
        )
    }

    fn is_ticking(&self) -> bool {
        self.reveal.is_animating() || self.scroll_animation.is_some()
    }

    /// Start entrance reveals for every hidden card that has crossed
    /// into the (bottom-shrunk) viewport
    fn check_reveals(&mut self) {
        let metrics = self.metrics();
        let was_ticking = self.is_ticking();
        let mut began = false;

        for index in 0..cards::SERVICES.len() {
            let slot = Slot::Service(index);
            if self.reveal.is_hidden(slot)
                && layout::reveal_visible(
                    &metrics.service_card_rect(index),
                    self.scroll.offset_y,
                    self.scroll.viewport_height,
                )
            {
                self.reveal.begin(slot);
                began = true;
            }
        }

        for index in 0..self.view.shown.len() {
            let slot = Slot::Product(index);
            if self.reveal.is_hidden(slot)
                && layout::reveal_visible(
                    &metrics.product_card_rect(index),
                    self.scroll.offset_y,
                    self.scroll.viewport_height,
                )
            {
                self.reveal.begin(slot);
                began = true;
            }
        }

        // Waking from idle: drop the stale tick instant so the first
        // frame of the new animation gets dt = 0
        if began && !was_ticking {
            self.last_tick = None;
        }
    }

    /// Begin a smooth scroll to a section's top edge. Sections that are
    /// not part of the current layout are dead anchors and do nothing.
    fn start_scroll_to(&mut self, section: Section) {
        let metrics = self.metrics();
        let Some(target) = metrics.section_offset(section) else {
            return;
        };
        let to = target.min(metrics.max_scroll(self.scroll.viewport_height));

        let was_ticking = self.is_ticking();
        self.scroll_animation = Some(ScrollAnimation {
            from: self.scroll.offset_y,
            to,
            elapsed: 0.0,
        });
        if !was_ticking {
            self.last_tick = None;
        }
    }

    // ========== Page sections ==========

    fn nav_bar(&self) -> Element<'_, Message> {
        let links = row![
            nav_link("Beranda", Section::Beranda),
            nav_link("Layanan", Section::Layanan),
            nav_link("Produk", Section::Produk),
            nav_link("Kontak", Section::Kontak),
        ]
        .spacing(4.0);

        container(
            row![
                text("🛒 Toko Store")
                    .size(20)
                    .style(|_theme: &Theme| text::Style {
                        color: Some(TEXT_PRIMARY),
                    }),
                iced::widget::horizontal_space(),
                links,
            ]
            .align_y(Alignment::Center),
        )
        .padding(Padding {
            left: layout::PAGE_PADDING,
            right: layout::PAGE_PADDING,
            ..Padding::ZERO
        })
        .center_y(Length::Fixed(layout::NAV_HEIGHT))
        .width(Length::Fill)
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(Color::from_rgb(0.08, 0.09, 0.12))),
            ..container::Style::default()
        })
        .into()
    }

    fn hero(&self) -> Element<'_, Message> {
        container(
            column![
                text("Toko Store")
                    .size(40)
                    .style(|_theme: &Theme| text::Style {
                        color: Some(TEXT_PRIMARY),
                    }),
                text("Jasa akademik dan aplikasi premium, langsung dari WhatsApp")
                    .size(16)
                    .style(|_theme: &Theme| text::Style {
                        color: Some(TEXT_MUTED),
                    }),
                button(text("Lihat Produk").size(15))
                    .padding([10.0, 24.0])
                    .style(button::primary)
                    .on_press(Message::NavigateTo(Section::Produk)),
            ]
            .spacing(18.0)
            .align_x(Alignment::Center),
        )
        .width(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fixed(layout::HERO_HEIGHT))
        .into()
    }

    fn services_section(&self) -> Element<'_, Message> {
        let columns = self.metrics().service_columns();

        let mut grid = Column::new()
            .spacing(layout::GRID_GAP)
            .align_x(Alignment::Center);
        for (row_index, chunk) in cards::SERVICES.chunks(columns).enumerate() {
            let mut cards_row = Row::new().spacing(layout::GRID_GAP);
            for (column_index, service) in chunk.iter().enumerate() {
                let slot = Slot::Service(row_index * columns + column_index);
                cards_row = cards_row.push(cards::service_card(
                    service,
                    self.reveal.progress(slot),
                    self.reveal.rise(slot),
                ));
            }
            grid = grid.push(cards_row);
        }

        section(
            column![
                section_title("Layanan", "Semua layanan dikerjakan cepat dan bergaransi"),
                grid,
            ]
            .align_x(Alignment::Center),
        )
    }

    fn products_section(&self) -> Element<'_, Message> {
        let metrics = self.metrics();
        let columns = metrics.product_columns();

        let controls = container(
            row![
                text_input("Cari produk...", &self.view.query)
                    .on_input(Message::SearchChanged)
                    .padding(10.0)
                    .size(14)
                    .width(Length::Fixed(300.0)),
                chips::chip_row(self.catalog.categories(), &self.view.active_category),
            ]
            .spacing(16.0)
            .align_y(Alignment::Center),
        )
        .width(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fixed(layout::CONTROLS_HEIGHT));

        let grid: Element<'_, Message> = if self.view.shown.is_empty() {
            cards::empty_placeholder()
        } else {
            let mut grid = Column::new()
                .spacing(layout::GRID_GAP)
                .align_x(Alignment::Center);
            for (row_index, chunk) in self.view.shown.chunks(columns).enumerate() {
                let mut cards_row = Row::new().spacing(layout::GRID_GAP);
                for (column_index, product) in chunk.iter().enumerate() {
                    let slot = Slot::Product(row_index * columns + column_index);
                    cards_row = cards_row.push(cards::product_card(
                        product,
                        self.reveal.progress(slot),
                        self.reveal.rise(slot),
                    ));
                }
                grid = grid.push(cards_row);
            }
            grid.into()
        };

        section(
            column![
                section_title("Produk", "Pilih produknya, pesan lewat WhatsApp"),
                controls,
                grid,
            ]
            .align_x(Alignment::Center),
        )
    }

    fn premium_section(&self) -> Element<'_, Message> {
        let mut apps = Row::new().spacing(12.0);
        for name in cards::PREMIUM_APPS {
            apps = apps.push(cards::premium_app_button(name));
        }
        apps = apps.push(cards::other_app_button());

        let body = container(
            column![
                text("Pilih aplikasinya, kami proses lewat WhatsApp")
                    .size(14)
                    .style(|_theme: &Theme| text::Style {
                        color: Some(TEXT_MUTED),
                    }),
                apps,
            ]
            .spacing(16.0)
            .align_x(Alignment::Center),
        )
        .width(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fixed(layout::PREMIUM_BOX_HEIGHT));

        section(
            column![
                section_title("Aplikasi Premium", "Akun resmi dengan garansi"),
                body,
            ]
            .align_x(Alignment::Center),
        )
    }

    fn contact_section(&self) -> Element<'_, Message> {
        let year = Local::now().year();

        container(
            column![
                text("Kontak").size(26).style(|_theme: &Theme| text::Style {
                    color: Some(TEXT_PRIMARY),
                }),
                text("WhatsApp: +62 895-3746-51500 · Senin-Sabtu 08.00-21.00 WIB")
                    .size(14)
                    .style(|_theme: &Theme| text::Style {
                        color: Some(TEXT_MUTED),
                    }),
                text(format!("© {year} Toko Store — Semua harga dalam Rupiah"))
                    .size(13)
                    .style(|_theme: &Theme| text::Style {
                        color: Some(fade(TEXT_MUTED, 0.8)),
                    }),
            ]
            .spacing(10.0)
            .align_x(Alignment::Center),
        )
        .width(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fixed(layout::CONTACT_HEIGHT))
        .into()
    }

    /// The custom-app prompt, shown as a modal overlay
    fn prompt_card<'a>(&self, input: &'a str) -> Element<'a, Message> {
        container(
            column![
                text("Aplikasi Lainnya")
                    .size(18)
                    .style(|_theme: &Theme| text::Style {
                        color: Some(TEXT_PRIMARY),
                    }),
                text("Sebutkan nama aplikasi yang Anda inginkan:")
                    .size(14)
                    .style(|_theme: &Theme| text::Style {
                        color: Some(TEXT_MUTED),
                    }),
                text_input("Nama aplikasi", input)
                    .on_input(Message::PromptInput)
                    .on_submit(Message::PromptSubmit)
                    .padding(10.0)
                    .size(14),
                row![
                    iced::widget::horizontal_space(),
                    button(text("Batal").size(14))
                        .style(button::text)
                        .on_press(Message::PromptCancel),
                    button(text("Kirim").size(14))
                        .style(button::primary)
                        .on_press(Message::PromptSubmit),
                ]
                .spacing(8.0)
                .align_y(Alignment::Center),
            ]
            .spacing(14.0),
        )
        .width(Length::Fixed(380.0))
        .padding(20.0)
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(ui::SURFACE)),
            border: Border {
                color: fade(TEXT_MUTED, 0.3),
                width: 1.0,
                radius: 12.0.into(),
            },
            ..container::Style::default()
        })
        .into()
    }
}

/// Section wrapper: page padding around a full-width block
fn section<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(content)
        .width(Length::Fill)
        .padding(Padding {
            top: layout::SECTION_PADDING,
            bottom: layout::SECTION_PADDING,
            left: layout::PAGE_PADDING,
            right: layout::PAGE_PADDING,
        })
        .into()
}

/// Centered title + subtitle block of fixed height
fn section_title<'a>(title: &'static str, subtitle: &'static str) -> Element<'a, Message> {
    container(
        column![
            text(title).size(26).style(|_theme: &Theme| text::Style {
                color: Some(TEXT_PRIMARY),
            }),
            text(subtitle).size(14).style(|_theme: &Theme| text::Style {
                color: Some(TEXT_MUTED),
            }),
        ]
        .spacing(6.0)
        .align_x(Alignment::Center),
    )
    .width(Length::Fill)
    .center_x(Length::Fill)
    .height(Length::Fixed(layout::TITLE_BLOCK_HEIGHT))
    .into()
}

/// One link in the top navigation bar
fn nav_link(label: &'static str, section: Section) -> Element<'static, Message> {
    button(text(label).size(14))
        .style(button::text)
        .padding([8.0, 12.0])
        .on_press(Message::NavigateTo(section))
        .into()
}

/// Overlay a prompt card on top of the page, dimming everything else.
/// Clicking the dimmed area dismisses the prompt.
fn modal<'a>(base: Element<'a, Message>, overlay: Element<'a, Message>) -> Element<'a, Message> {
    let backdrop = container(center(opaque(overlay)))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(Color {
                a: 0.6,
                ..Color::BLACK
            })),
            ..container::Style::default()
        });

    stack![base, opaque(mouse_area(backdrop).on_press(Message::PromptCancel))].into()
}

/// Fire-and-forget: open an outbound link on the blocking task pool
fn open_in_browser(url: String) -> Task<Message> {
    Task::perform(contact::open_link(url), Message::LinkOpened)
}

/// Id of the main content scrollable, shared by view and scroll tasks
fn content_scroll_id() -> scrollable::Id {
    scrollable::Id::new("page-content")
}

fn main() -> iced::Result {
    iced::application("Toko Store", TokoStore::update, TokoStore::view)
        .theme(TokoStore::theme)
        .subscription(TokoStore::subscription)
        .window_size(Size::new(WINDOW_WIDTH, WINDOW_HEIGHT))
        .centered()
        .run_with(TokoStore::new)
}
