/// Deterministic page geometry
///
/// The page is one scrollable column of fixed-size sections and cards,
/// so every offset can be computed from the window width, the number of
/// products currently shown, and whether the premium-app box has been
/// revealed. Smooth scrolling targets and entrance-reveal intersection
/// checks both run against this math instead of asking widgets where
/// they ended up, which keeps all of it testable without a window.
///
/// The section and card constants here are the single source of truth:
/// the view builders size their widgets from these same values.

/// Height of the fixed navigation bar above the scrollable content
pub const NAV_HEIGHT: f32 = 64.0;

/// Horizontal padding around every section's content
pub const PAGE_PADDING: f32 = 32.0;

/// Vertical padding above and below each section body
pub const SECTION_PADDING: f32 = 48.0;

/// Height reserved for a section's title and subtitle block
pub const TITLE_BLOCK_HEIGHT: f32 = 72.0;

/// Gap between grid cards, both axes
pub const GRID_GAP: f32 = 20.0;

/// Height of the hero banner
pub const HERO_HEIGHT: f32 = 320.0;

/// Service card dimensions
pub const SERVICE_CARD_WIDTH: f32 = 320.0;
pub const SERVICE_CARD_HEIGHT: f32 = 180.0;

/// Number of service cards on the page
pub const SERVICE_COUNT: usize = 6;

/// Product card slot dimensions (the slot includes the rise allowance)
pub const PRODUCT_CARD_WIDTH: f32 = 280.0;
pub const PRODUCT_CARD_HEIGHT: f32 = 380.0;

/// Height of the search box + filter chips block
pub const CONTROLS_HEIGHT: f32 = 96.0;

/// Height of the "no results" placeholder
pub const EMPTY_PLACEHOLDER_HEIGHT: f32 = 120.0;

/// Height of the premium-app picker body when revealed
pub const PREMIUM_BOX_HEIGHT: f32 = 200.0;

/// Height of the contact/footer section
pub const CONTACT_HEIGHT: f32 = 180.0;

/// Fraction of a card that must be inside the (shrunk) viewport
/// before its entrance reveal fires
pub const REVEAL_THRESHOLD: f32 = 0.1;

/// The viewport is shrunk by this much at the bottom when testing
/// reveals, so cards animate slightly after entering the window
pub const REVEAL_BOTTOM_MARGIN: f32 = 50.0;

/// The page sections, in content order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Beranda,
    Layanan,
    Produk,
    Aplikasi,
    Kontak,
}

/// A card's vertical extent in content coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardRect {
    pub y: f32,
    pub height: f32,
}

/// Snapshot of everything the geometry depends on
#[derive(Debug, Clone, Copy)]
pub struct PageMetrics {
    width: f32,
    product_count: usize,
    premium_visible: bool,
}

impl PageMetrics {
    pub fn new(width: f32, product_count: usize, premium_visible: bool) -> Self {
        PageMetrics {
            width,
            product_count,
            premium_visible,
        }
    }

    /// Width available to a grid after page padding
    fn grid_width(&self) -> f32 {
        (self.width - 2.0 * PAGE_PADDING).max(PRODUCT_CARD_WIDTH)
    }

    /// Columns in the product grid at the current width
    pub fn product_columns(&self) -> usize {
        columns_for(self.grid_width(), PRODUCT_CARD_WIDTH)
    }

    /// Columns in the services grid at the current width
    pub fn service_columns(&self) -> usize {
        columns_for(self.grid_width(), SERVICE_CARD_WIDTH)
    }

    fn services_height(&self) -> f32 {
        2.0 * SECTION_PADDING
            + TITLE_BLOCK_HEIGHT
            + grid_height(SERVICE_COUNT, self.service_columns(), SERVICE_CARD_HEIGHT)
    }

    fn products_height(&self) -> f32 {
        let grid = if self.product_count == 0 {
            EMPTY_PLACEHOLDER_HEIGHT
        } else {
            grid_height(
                self.product_count,
                self.product_columns(),
                PRODUCT_CARD_HEIGHT,
            )
        };
        2.0 * SECTION_PADDING + TITLE_BLOCK_HEIGHT + CONTROLS_HEIGHT + grid
    }

    fn premium_height(&self) -> f32 {
        if self.premium_visible {
            2.0 * SECTION_PADDING + TITLE_BLOCK_HEIGHT + PREMIUM_BOX_HEIGHT
        } else {
            0.0
        }
    }

    /// Scroll offset of a section's top edge.
    ///
    /// Returns `None` for a section that is not part of the current
    /// layout (the premium box before it is revealed); callers treat
    /// that as a dead anchor and do nothing.
    pub fn section_offset(&self, section: Section) -> Option<f32> {
        let services_y = HERO_HEIGHT;
        let products_y = services_y + self.services_height();
        let premium_y = products_y + self.products_height();
        let contact_y = premium_y + self.premium_height();

        match section {
            Section::Beranda => Some(0.0),
            Section::Layanan => Some(services_y),
            Section::Produk => Some(products_y),
            Section::Aplikasi => self.premium_visible.then_some(premium_y),
            Section::Kontak => Some(contact_y),
        }
    }

    /// Total height of the scrollable content
    pub fn content_height(&self) -> f32 {
        self.section_offset(Section::Kontak).unwrap_or(0.0) + CONTACT_HEIGHT
    }

    /// Largest reachable scroll offset for the given viewport height
    pub fn max_scroll(&self, viewport_height: f32) -> f32 {
        (self.content_height() - viewport_height).max(0.0)
    }

    /// Vertical extent of a service card slot
    pub fn service_card_rect(&self, index: usize) -> CardRect {
        let grid_y = HERO_HEIGHT + SECTION_PADDING + TITLE_BLOCK_HEIGHT;
        let row = index / self.service_columns();
        CardRect {
            y: grid_y + row as f32 * (SERVICE_CARD_HEIGHT + GRID_GAP),
            height: SERVICE_CARD_HEIGHT,
        }
    }

    /// Vertical extent of a product card slot
    pub fn product_card_rect(&self, index: usize) -> CardRect {
        let section_y = HERO_HEIGHT + self.services_height();
        let grid_y = section_y + SECTION_PADDING + TITLE_BLOCK_HEIGHT + CONTROLS_HEIGHT;
        let row = index / self.product_columns();
        CardRect {
            y: grid_y + row as f32 * (PRODUCT_CARD_HEIGHT + GRID_GAP),
            height: PRODUCT_CARD_HEIGHT,
        }
    }
}

/// Cards that fit in one row of the given width, at least one
fn columns_for(available: f32, card_width: f32) -> usize {
    (((available + GRID_GAP) / (card_width + GRID_GAP)).floor() as usize).max(1)
}

/// Height of a grid of `count` cards laid out in `columns` columns
fn grid_height(count: usize, columns: usize, card_height: f32) -> f32 {
    if count == 0 {
        return 0.0;
    }
    let rows = count.div_ceil(columns);
    rows as f32 * card_height + (rows - 1) as f32 * GRID_GAP
}

/// Whether a card's entrance reveal should fire at the given scroll
/// position: at least `REVEAL_THRESHOLD` of the card must sit inside
/// the viewport shrunk by `REVEAL_BOTTOM_MARGIN` at the bottom.
pub fn reveal_visible(rect: &CardRect, scroll_y: f32, viewport_height: f32) -> bool {
    let view_top = scroll_y;
    let view_bottom = scroll_y + (viewport_height - REVEAL_BOTTOM_MARGIN).max(0.0);

    let top = rect.y.max(view_top);
    let bottom = (rect.y + rect.height).min(view_bottom);

    (bottom - top) >= REVEAL_THRESHOLD * rect.height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_math() {
        // 1100px window: (1100 - 64 + 20) / (280 + 20) = 3.52 -> 3 columns
        let metrics = PageMetrics::new(1100.0, 9, false);
        assert_eq!(metrics.product_columns(), 3);

        // Narrow windows never drop below one column
        let narrow = PageMetrics::new(200.0, 9, false);
        assert_eq!(narrow.product_columns(), 1);
    }

    #[test]
    fn test_grid_height() {
        assert_eq!(grid_height(0, 3, 100.0), 0.0);
        assert_eq!(grid_height(3, 3, 100.0), 100.0);
        // 4 cards over 3 columns -> 2 rows + 1 gap
        assert_eq!(grid_height(4, 3, 100.0), 220.0);
    }

    #[test]
    fn test_section_offsets_are_prefix_sums() {
        let metrics = PageMetrics::new(1100.0, 9, false);

        assert_eq!(metrics.section_offset(Section::Beranda), Some(0.0));
        assert_eq!(metrics.section_offset(Section::Layanan), Some(HERO_HEIGHT));

        let products = metrics.section_offset(Section::Produk).unwrap();
        let contact = metrics.section_offset(Section::Kontak).unwrap();
        assert!(products > HERO_HEIGHT);
        assert!(contact > products);
        assert_eq!(metrics.content_height(), contact + CONTACT_HEIGHT);
    }

    #[test]
    fn test_hidden_premium_box_is_a_dead_anchor() {
        let metrics = PageMetrics::new(1100.0, 9, false);
        assert_eq!(metrics.section_offset(Section::Aplikasi), None);

        // Revealing the box inserts it and pushes the footer down
        let revealed = PageMetrics::new(1100.0, 9, true);
        let premium = revealed.section_offset(Section::Aplikasi).unwrap();
        assert_eq!(premium, metrics.section_offset(Section::Kontak).unwrap());
        assert!(
            revealed.section_offset(Section::Kontak).unwrap()
                > metrics.section_offset(Section::Kontak).unwrap()
        );
    }

    #[test]
    fn test_empty_grid_uses_placeholder_height() {
        let empty = PageMetrics::new(1100.0, 0, false);
        let full = PageMetrics::new(1100.0, 9, false);
        assert!(empty.content_height() < full.content_height());
        assert_eq!(
            empty.section_offset(Section::Kontak).unwrap()
                - empty.section_offset(Section::Produk).unwrap(),
            2.0 * SECTION_PADDING + TITLE_BLOCK_HEIGHT + CONTROLS_HEIGHT
                + EMPTY_PLACEHOLDER_HEIGHT
        );
    }

    #[test]
    fn test_card_rects_advance_by_rows() {
        let metrics = PageMetrics::new(1100.0, 9, false);
        let columns = metrics.product_columns();

        let first = metrics.product_card_rect(0);
        let same_row = metrics.product_card_rect(columns - 1);
        let next_row = metrics.product_card_rect(columns);

        assert_eq!(first.y, same_row.y);
        assert_eq!(next_row.y, first.y + PRODUCT_CARD_HEIGHT + GRID_GAP);
    }

    #[test]
    fn test_reveal_needs_ten_percent_inside_shrunk_viewport() {
        let rect = CardRect {
            y: 1000.0,
            height: 380.0,
        };
        let viewport = 700.0;

        // Card entirely below the fold
        assert!(!reveal_visible(&rect, 0.0, viewport));

        // Just past 10% visible above the 50px bottom margin:
        // visible span = (389 + 700 - 50) - 1000 = 39 > 0.1 * 380
        assert!(reveal_visible(&rect, 389.0, viewport));
        // 30px visible is still short of the 38px threshold
        assert!(!reveal_visible(&rect, 380.0, viewport));
    }

    #[test]
    fn test_reveal_ignores_cards_scrolled_past() {
        let rect = CardRect {
            y: 0.0,
            height: 380.0,
        };
        // Scrolled far beyond the card: nothing of it is visible
        assert!(!reveal_visible(&rect, 2000.0, 700.0));
        // Sitting at the top of the viewport: fully visible
        assert!(reveal_visible(&rect, 0.0, 700.0));
    }

    #[test]
    fn test_max_scroll_clamps_to_zero() {
        let metrics = PageMetrics::new(1100.0, 0, false);
        assert_eq!(metrics.max_scroll(1_000_000.0), 0.0);
        assert!(metrics.max_scroll(700.0) > 0.0);
    }
}
