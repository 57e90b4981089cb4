/// One-shot entrance animations for cards
///
/// Every service card and every product card from the initial render
/// starts invisible with a 20px downward offset, then slides up into
/// place the first time it scrolls into view. The reveal is one-shot:
/// cards never hide again on scroll-out and never re-trigger. Product
/// cards re-rendered by a later filter or search pass are not tracked
/// and appear at full opacity immediately, matching the page this
/// replaces (its observer only ever saw the initial element set).

/// Duration of the reveal transition in seconds
pub const REVEAL_DURATION: f32 = 0.6;

/// Downward offset of a hidden card in logical pixels
pub const RISE_OFFSET: f32 = 20.0;

/// Identifies one animated card slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Service card by index within the services grid
    Service(usize),
    /// Product card by index within the initial product grid
    Product(usize),
}

/// Animation phase of a single card
#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    /// Not yet scrolled into view
    Hidden,
    /// Revealing; elapsed seconds since the reveal started
    Rising(f32),
    /// Fully revealed, never animates again
    Shown,
}

/// Tracks the reveal phase of every animated card
#[derive(Debug, Clone)]
pub struct RevealTracker {
    services: Vec<Phase>,
    products: Vec<Phase>,
}

impl RevealTracker {
    /// Track the given number of service and product cards, all hidden
    pub fn new(service_count: usize, product_count: usize) -> Self {
        RevealTracker {
            services: vec![Phase::Hidden; service_count],
            products: vec![Phase::Hidden; product_count],
        }
    }

    fn phase(&self, slot: Slot) -> Phase {
        match slot {
            Slot::Service(i) => self.services.get(i).copied().unwrap_or(Phase::Shown),
            Slot::Product(i) => self.products.get(i).copied().unwrap_or(Phase::Shown),
        }
    }

    fn phase_mut(&mut self, slot: Slot) -> Option<&mut Phase> {
        match slot {
            Slot::Service(i) => self.services.get_mut(i),
            Slot::Product(i) => self.products.get_mut(i),
        }
    }

    /// Whether this slot is still waiting to be revealed
    pub fn is_hidden(&self, slot: Slot) -> bool {
        self.phase(slot) == Phase::Hidden
    }

    /// Start revealing a hidden slot. Slots that are already rising or
    /// shown are left alone, which is what makes the reveal one-shot.
    pub fn begin(&mut self, slot: Slot) {
        if let Some(phase) = self.phase_mut(slot) {
            if *phase == Phase::Hidden {
                *phase = Phase::Rising(0.0);
            }
        }
    }

    /// Advance every rising slot by `dt` seconds
    pub fn tick(&mut self, dt: f32) {
        for phase in self.services.iter_mut().chain(self.products.iter_mut()) {
            if let Phase::Rising(elapsed) = phase {
                *elapsed += dt;
                if *elapsed >= REVEAL_DURATION {
                    *phase = Phase::Shown;
                }
            }
        }
    }

    /// Whether any slot is mid-transition (drives the tick subscription)
    pub fn is_animating(&self) -> bool {
        self.services
            .iter()
            .chain(self.products.iter())
            .any(|p| matches!(p, Phase::Rising(_)))
    }

    /// Mark every product slot as shown.
    ///
    /// Called when a filter or search replaces the product grid: the
    /// replacement cards were never registered for animation, so they
    /// render at full opacity from their first frame.
    pub fn retire_products(&mut self) {
        for phase in self.products.iter_mut() {
            *phase = Phase::Shown;
        }
    }

    /// Eased reveal progress for a slot, in [0, 1]
    pub fn progress(&self, slot: Slot) -> f32 {
        match self.phase(slot) {
            Phase::Hidden => 0.0,
            Phase::Rising(elapsed) => ease_out_cubic((elapsed / REVEAL_DURATION).min(1.0)),
            Phase::Shown => 1.0,
        }
    }

    /// Current downward offset for a slot in logical pixels
    pub fn rise(&self, slot: Slot) -> f32 {
        (1.0 - self.progress(slot)) * RISE_OFFSET
    }
}

/// Ease-out cubic: fast start, gentle landing
pub fn ease_out_cubic(t: f32) -> f32 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slots_start_hidden() {
        let tracker = RevealTracker::new(2, 3);
        assert!(tracker.is_hidden(Slot::Service(0)));
        assert!(tracker.is_hidden(Slot::Product(2)));
        assert_eq!(tracker.progress(Slot::Product(0)), 0.0);
        assert!(!tracker.is_animating());
    }

    #[test]
    fn test_reveal_runs_to_completion() {
        let mut tracker = RevealTracker::new(1, 1);
        tracker.begin(Slot::Service(0));
        assert!(tracker.is_animating());

        tracker.tick(REVEAL_DURATION / 2.0);
        let midway = tracker.progress(Slot::Service(0));
        assert!(midway > 0.0 && midway < 1.0);

        tracker.tick(REVEAL_DURATION);
        assert_eq!(tracker.progress(Slot::Service(0)), 1.0);
        assert!(!tracker.is_animating());
    }

    #[test]
    fn test_reveal_is_one_shot() {
        let mut tracker = RevealTracker::new(0, 1);
        tracker.begin(Slot::Product(0));
        tracker.tick(REVEAL_DURATION * 2.0);

        // A second begin on a shown slot must not restart the animation
        tracker.begin(Slot::Product(0));
        assert!(!tracker.is_animating());
        assert_eq!(tracker.progress(Slot::Product(0)), 1.0);
    }

    #[test]
    fn test_progress_is_monotonic() {
        let mut tracker = RevealTracker::new(0, 1);
        tracker.begin(Slot::Product(0));

        let mut last = 0.0;
        for _ in 0..10 {
            tracker.tick(REVEAL_DURATION / 10.0);
            let progress = tracker.progress(Slot::Product(0));
            assert!(progress >= last);
            last = progress;
        }

        tracker.tick(REVEAL_DURATION);
        assert_eq!(tracker.progress(Slot::Product(0)), 1.0);
    }

    #[test]
    fn test_retired_products_render_at_full_opacity() {
        let mut tracker = RevealTracker::new(1, 2);
        tracker.retire_products();

        assert_eq!(tracker.progress(Slot::Product(0)), 1.0);
        assert_eq!(tracker.progress(Slot::Product(1)), 1.0);
        assert_eq!(tracker.rise(Slot::Product(1)), 0.0);
        // Service cards keep their own schedule
        assert!(tracker.is_hidden(Slot::Service(0)));

        // Retired slots cannot be re-armed
        tracker.begin(Slot::Product(0));
        assert!(!tracker.is_animating());
    }

    #[test]
    fn test_rise_tracks_progress() {
        let mut tracker = RevealTracker::new(0, 1);
        assert_eq!(tracker.rise(Slot::Product(0)), RISE_OFFSET);

        tracker.begin(Slot::Product(0));
        tracker.tick(REVEAL_DURATION);
        assert_eq!(tracker.rise(Slot::Product(0)), 0.0);
    }

    #[test]
    fn test_ease_out_cubic_bounds() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert!(ease_out_cubic(0.5) > 0.5); // ease-out front-loads motion
        assert_eq!(ease_out_cubic(2.0), 1.0); // clamped
    }
}
