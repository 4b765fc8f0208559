//! Carousel view-state controller
//!
//! One parameterized [`Carousel<T>`] composes the three pieces every
//! home-page carousel needs:
//! - [`ViewportWidthObserver`] - width -> items per view
//! - [`CarouselIndex`] - bounded, wrapping `current_index`
//! - [`AutoAdvanceTimer`] - periodic `next()` while playing
//!
//! [`CarouselControl`] is the item-type-erased surface the handlers use, so
//! carousels of categories, testimonials, steps and listeners can be driven
//! uniformly.

pub mod index;
pub mod timer;
pub mod viewport;

use std::time::Instant;

use lissnify_core::{CarouselId, StepPolicy};

use crate::config::CarouselSettings;

pub use index::CarouselIndex;
pub use timer::{AutoAdvanceTimer, IntervalScheduler, TimerHost, TimerToken};
pub use viewport::{FixedViewport, ViewportProvider, ViewportWidthObserver};

/// Screen region occupied by a carousel, recorded at render time for hover hit-testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HitArea {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl HitArea {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.x
            && row >= self.y
            && (column as u32) < self.x as u32 + self.width as u32
            && (row as u32) < self.y as u32 + self.height as u32
    }
}

/// A user navigation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    Next,
    Prev,
    GoTo(usize),
    First,
    Last,
}

/// Snapshot of a carousel's view state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselStatus {
    pub id: CarouselId,
    pub current_index: usize,
    pub max_index: usize,
    /// Reachable positions, one dot each
    pub stop_count: usize,
    pub items_per_view: usize,
    pub item_count: usize,
    pub policy: StepPolicy,
    pub is_auto_playing: bool,
    pub timer_armed: bool,
    pub hovered: bool,
    pub mounted: bool,
}

impl CarouselStatus {
    /// Prev/next buttons are enabled only when there is somewhere to go
    pub fn can_navigate(&self) -> bool {
        self.max_index > 0
    }
}

/// Item-type-erased carousel operations
pub trait CarouselControl {
    fn id(&self) -> CarouselId;

    fn status(&self) -> CarouselStatus;

    /// Attach the viewport observer and start the auto-advance timer
    fn mount(&mut self, viewport: &dyn ViewportProvider, host: &mut dyn TimerHost, now: Instant);

    /// Detach the observer and cancel the timer
    fn unmount(&mut self, host: &mut dyn TimerHost);

    /// React to a viewport resize. Returns `true` if items per view changed.
    fn on_resize(&mut self, width: u16, host: &mut dyn TimerHost, now: Instant) -> bool;

    /// Apply a user navigation and return the new index
    fn navigate(&mut self, nav: Nav, host: &mut dyn TimerHost, now: Instant) -> usize;

    /// Advance if `token` is this carousel's timer. Returns `true` if it was.
    fn on_timer(&mut self, token: TimerToken) -> bool;

    fn hover_enter(&mut self, host: &mut dyn TimerHost, now: Instant);

    fn hover_leave(&mut self, host: &mut dyn TimerHost, now: Instant);

    /// Set `is_auto_playing`. Returns `true` if it changed.
    fn set_auto_playing(&mut self, playing: bool, host: &mut dyn TimerHost, now: Instant) -> bool;

    fn toggle_auto_play(&mut self, host: &mut dyn TimerHost, now: Instant) -> bool {
        let playing = !self.status().is_auto_playing;
        self.set_auto_playing(playing, host, now);
        playing
    }

    fn hit_area(&self) -> Option<HitArea>;

    fn set_hit_area(&mut self, area: Option<HitArea>);
}

// ─────────────────────────────────────────────────────────────────────────────
// Carousel<T>
// ─────────────────────────────────────────────────────────────────────────────

/// Responsive, auto-advancing carousel over an ordered sequence of `T`
#[derive(Debug, Clone)]
pub struct Carousel<T> {
    id: CarouselId,
    items: Vec<T>,
    index: CarouselIndex,
    observer: ViewportWidthObserver,
    timer: AutoAdvanceTimer,
    autoplay_enabled: bool,
    pause_on_interaction: bool,
    mounted: bool,
    hovered: bool,
    hit_area: Option<HitArea>,
}

impl<T> Carousel<T> {
    pub fn new(id: CarouselId, settings: &CarouselSettings) -> Self {
        let observer = ViewportWidthObserver::new(settings.breakpoints.clone());
        let mut index = CarouselIndex::new(settings.stepping);
        index.set_items_per_view(observer.items_per_view());

        Self {
            id,
            items: Vec::new(),
            index,
            observer,
            timer: AutoAdvanceTimer::new(settings.period, settings.autoplay),
            autoplay_enabled: settings.autoplay,
            pause_on_interaction: settings.pause_on_interaction,
            mounted: false,
            hovered: false,
            hit_area: None,
        }
    }

    /// Builder-style item assignment
    pub fn with_items(mut self, items: Vec<T>) -> Self {
        self.set_items(items);
        self
    }

    /// Replace the item sequence, clamping the current index
    pub fn set_items(&mut self, items: Vec<T>) {
        self.index.set_item_count(items.len());
        self.items = items;
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// The slice of items currently on screen
    pub fn visible_items(&self) -> &[T] {
        &self.items[self.index.visible_range()]
    }

    pub fn index(&self) -> &CarouselIndex {
        &self.index
    }

    pub fn timer(&self) -> &AutoAdvanceTimer {
        &self.timer
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }
}

impl<T> CarouselControl for Carousel<T> {
    fn id(&self) -> CarouselId {
        self.id
    }

    fn status(&self) -> CarouselStatus {
        CarouselStatus {
            id: self.id,
            current_index: self.index.current(),
            max_index: self.index.max_index(),
            stop_count: self.index.stop_count(),
            items_per_view: self.index.items_per_view(),
            item_count: self.index.item_count(),
            policy: self.index.policy(),
            is_auto_playing: self.timer.is_playing(),
            timer_armed: self.timer.is_armed(),
            hovered: self.hovered,
            mounted: self.mounted,
        }
    }

    fn mount(&mut self, viewport: &dyn ViewportProvider, host: &mut dyn TimerHost, now: Instant) {
        if self.mounted {
            self.unmount(host);
        }
        let items_per_view = self.observer.attach(viewport);
        self.index.set_items_per_view(items_per_view);
        self.timer.start(host, now);
        self.mounted = true;
        tracing::debug!(
            "Mounted {} carousel: {} items, {} per view",
            self.id,
            self.items.len(),
            items_per_view
        );
    }

    fn unmount(&mut self, host: &mut dyn TimerHost) {
        self.observer.detach();
        self.timer.stop(host);
        self.mounted = false;
        self.hovered = false;
        self.hit_area = None;
        tracing::debug!("Unmounted {} carousel", self.id);
    }

    fn on_resize(&mut self, width: u16, host: &mut dyn TimerHost, now: Instant) -> bool {
        let Some(items_per_view) = self.observer.on_resize(width) else {
            return false;
        };
        self.index.set_items_per_view(items_per_view);
        self.timer.restart(host, now);
        true
    }

    fn navigate(&mut self, nav: Nav, host: &mut dyn TimerHost, now: Instant) -> usize {
        let current = match nav {
            Nav::Next => self.index.next(),
            Nav::Prev => self.index.prev(),
            Nav::GoTo(i) => self.index.go_to(i),
            Nav::First => self.index.go_to(0),
            Nav::Last => self.index.go_to(usize::MAX),
        };
        if self.pause_on_interaction {
            self.set_auto_playing(false, host, now);
        }
        current
    }

    fn on_timer(&mut self, token: TimerToken) -> bool {
        if !self.timer.owns(token) {
            return false;
        }
        self.index.next();
        true
    }

    fn hover_enter(&mut self, host: &mut dyn TimerHost, now: Instant) {
        self.hovered = true;
        self.set_auto_playing(false, host, now);
    }

    fn hover_leave(&mut self, host: &mut dyn TimerHost, now: Instant) {
        self.hovered = false;
        if self.autoplay_enabled {
            self.set_auto_playing(true, host, now);
        }
    }

    fn set_auto_playing(&mut self, playing: bool, host: &mut dyn TimerHost, now: Instant) -> bool {
        let changed = self.timer.set_playing(playing, host, now);
        if changed {
            tracing::debug!(
                "{} carousel auto-play {}",
                self.id,
                if playing { "resumed" } else { "paused" }
            );
        }
        changed
    }

    fn hit_area(&self) -> Option<HitArea> {
        self.hit_area
    }

    fn set_hit_area(&mut self, area: Option<HitArea>) {
        self.hit_area = area;
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use lissnify_core::{Breakpoint, BreakpointTable};

    use super::timer::MockTimerHost;
    use super::*;

    const PERIOD: Duration = Duration::from_secs(4);

    fn settings(stepping: StepPolicy) -> CarouselSettings {
        CarouselSettings {
            period: PERIOD,
            stepping,
            autoplay: true,
            pause_on_interaction: false,
            breakpoints: BreakpointTable::new(
                vec![
                    Breakpoint::new(60, 1),
                    Breakpoint::new(90, 2),
                    Breakpoint::new(120, 3),
                ],
                4,
            ),
        }
    }

    fn mounted(items: usize, width: u16, sched: &mut IntervalScheduler, now: Instant) -> Carousel<usize> {
        let mut c = Carousel::new(CarouselId::Categories, &settings(StepPolicy::Page))
            .with_items((0..items).collect());
        c.mount(&FixedViewport(width), sched, now);
        c
    }

    fn secs(n: u64) -> Duration {
        Duration::from_secs(n)
    }

    /// Drive the scheduler like the TEA loop does
    fn run_ticks(c: &mut Carousel<usize>, sched: &mut IntervalScheduler, at: Instant) -> usize {
        sched
            .poll(at)
            .into_iter()
            .filter(|token| c.on_timer(*token))
            .count()
    }

    #[test]
    fn test_hit_area_contains() {
        let area = HitArea::new(10, 5, 20, 4);
        assert!(area.contains(10, 5));
        assert!(area.contains(29, 8));
        assert!(!area.contains(30, 8));
        assert!(!area.contains(15, 9));
        assert!(!area.contains(9, 6));
    }

    #[test]
    fn test_mount_reads_viewport_and_arms_timer() {
        let t0 = Instant::now();
        let mut sched = IntervalScheduler::new();
        let c = mounted(9, 130, &mut sched, t0);

        let status = c.status();
        assert!(status.mounted);
        assert_eq!(status.items_per_view, 4);
        assert_eq!(status.max_index, 2);
        assert!(status.timer_armed);
        assert_eq!(sched.active_count(), 1);
    }

    #[test]
    fn test_visible_items_follow_index() {
        let t0 = Instant::now();
        let mut sched = IntervalScheduler::new();
        let mut c = mounted(9, 130, &mut sched, t0);

        assert_eq!(c.visible_items(), &[0, 1, 2, 3]);
        c.navigate(Nav::Next, &mut sched, t0);
        assert_eq!(c.visible_items(), &[4, 5, 6, 7]);
        c.navigate(Nav::Next, &mut sched, t0);
        assert_eq!(c.visible_items(), &[8]);
    }

    #[test]
    fn test_auto_advance_three_ticks_in_twelve_seconds() {
        let t0 = Instant::now();
        let mut sched = IntervalScheduler::new();
        let mut c = mounted(9, 130, &mut sched, t0);

        let mut seen = Vec::new();
        for ms in (50..=12_000).step_by(50) {
            if run_ticks(&mut c, &mut sched, t0 + Duration::from_millis(ms)) > 0 {
                seen.push(c.index().current());
            }
        }
        assert_eq!(seen, vec![1, 2, 0]);
    }

    #[test]
    fn test_hover_pause_blocks_ticks_and_owes_nothing() {
        let t0 = Instant::now();
        let mut sched = IntervalScheduler::new();
        let mut c = mounted(9, 130, &mut sched, t0);

        assert_eq!(run_ticks(&mut c, &mut sched, t0 + secs(4)), 1);

        c.hover_enter(&mut sched, t0 + secs(5));
        assert!(!c.status().is_auto_playing);
        assert_eq!(sched.active_count(), 0);
        for s in 6..=11 {
            assert_eq!(run_ticks(&mut c, &mut sched, t0 + secs(s)), 0);
        }

        // Resume at 11s: the next tick is a full period later, not immediate
        c.hover_leave(&mut sched, t0 + secs(11));
        assert_eq!(run_ticks(&mut c, &mut sched, t0 + secs(11)), 0);
        assert_eq!(run_ticks(&mut c, &mut sched, t0 + secs(14)), 0);
        assert_eq!(run_ticks(&mut c, &mut sched, t0 + secs(15)), 1);
        assert_eq!(c.index().current(), 2);
    }

    #[test]
    fn test_resize_clamps_index_and_rearms() {
        let t0 = Instant::now();
        let mut sched = IntervalScheduler::new();
        let mut c = mounted(9, 40, &mut sched, t0);
        assert_eq!(c.status().items_per_view, 1);

        c.navigate(Nav::GoTo(8), &mut sched, t0);
        assert_eq!(c.index().current(), 8);
        let before = c.timer().token();

        assert!(c.on_resize(130, &mut sched, t0 + secs(1)));
        let status = c.status();
        assert_eq!(status.items_per_view, 4);
        assert_eq!(status.current_index, 2);
        assert_ne!(c.timer().token(), before);
        assert_eq!(sched.active_count(), 1);
    }

    #[test]
    fn test_resize_without_change_keeps_timer() {
        let t0 = Instant::now();
        let mut sched = IntervalScheduler::new();
        let mut c = mounted(9, 130, &mut sched, t0);
        let before = c.timer().token();

        assert!(!c.on_resize(140, &mut sched, t0));
        assert_eq!(c.timer().token(), before);
    }

    #[test]
    fn test_empty_carousel() {
        let t0 = Instant::now();
        let mut sched = IntervalScheduler::new();
        let mut c = mounted(0, 130, &mut sched, t0);

        assert!(!c.status().can_navigate());
        assert_eq!(c.navigate(Nav::Next, &mut sched, t0), 0);
        assert_eq!(c.navigate(Nav::Prev, &mut sched, t0), 0);
        assert!(c.visible_items().is_empty());
        // Ticks still fire harmlessly
        assert_eq!(run_ticks(&mut c, &mut sched, t0 + secs(4)), 1);
        assert_eq!(c.index().current(), 0);
    }

    #[test]
    fn test_set_items_clamps() {
        let t0 = Instant::now();
        let mut sched = IntervalScheduler::new();
        let mut c = mounted(9, 130, &mut sched, t0);
        c.navigate(Nav::Last, &mut sched, t0);
        assert_eq!(c.index().current(), 2);

        c.set_items(vec![1, 2, 3]);
        assert_eq!(c.index().current(), 0);
        assert_eq!(c.visible_items(), &[1, 2, 3]);
    }

    #[test]
    fn test_pause_on_interaction() {
        let t0 = Instant::now();
        let mut sched = IntervalScheduler::new();
        let mut s = settings(StepPolicy::Page);
        s.pause_on_interaction = true;
        let mut c = Carousel::new(CarouselId::Steps, &s).with_items((0..6).collect::<Vec<u8>>());
        c.mount(&FixedViewport(100), &mut sched, t0);
        assert!(c.status().is_auto_playing);

        c.navigate(Nav::Next, &mut sched, t0);
        assert!(!c.status().is_auto_playing);
        assert_eq!(sched.active_count(), 0);
    }

    #[test]
    fn test_manual_navigation_keeps_playing_by_default() {
        let t0 = Instant::now();
        let mut sched = IntervalScheduler::new();
        let mut c = mounted(9, 130, &mut sched, t0);
        c.navigate(Nav::Prev, &mut sched, t0);
        assert!(c.status().is_auto_playing);
    }

    #[test]
    fn test_hover_leave_respects_disabled_autoplay() {
        let t0 = Instant::now();
        let mut sched = IntervalScheduler::new();
        let mut s = settings(StepPolicy::Item);
        s.autoplay = false;
        let mut c = Carousel::new(CarouselId::Listeners, &s).with_items(vec!['a', 'b', 'c']);
        c.mount(&FixedViewport(30), &mut sched, t0);

        c.hover_enter(&mut sched, t0);
        c.hover_leave(&mut sched, t0);
        assert!(!c.status().is_auto_playing);
        assert_eq!(sched.active_count(), 0);
    }

    #[test]
    fn test_toggle_auto_play() {
        let t0 = Instant::now();
        let mut sched = IntervalScheduler::new();
        let mut c = mounted(9, 130, &mut sched, t0);

        assert!(!c.toggle_auto_play(&mut sched, t0));
        assert_eq!(sched.active_count(), 0);
        assert!(c.toggle_auto_play(&mut sched, t0));
        assert_eq!(sched.active_count(), 1);
    }

    #[test]
    fn test_foreign_token_is_ignored() {
        let t0 = Instant::now();
        let mut sched = IntervalScheduler::new();
        let mut a = mounted(9, 130, &mut sched, t0);
        let mut b = mounted(9, 130, &mut sched, t0);
        let b_token = b.timer().token().unwrap();

        assert!(!a.on_timer(b_token));
        assert!(b.on_timer(b_token));
        assert_eq!(a.index().current(), 0);
        assert_eq!(b.index().current(), 1);
    }

    #[test]
    fn test_unmounted_carousel_ignores_resize() {
        let t0 = Instant::now();
        let mut sched = IntervalScheduler::new();
        let mut c = mounted(9, 130, &mut sched, t0);
        c.unmount(&mut sched);

        assert!(!c.on_resize(40, &mut sched, t0));
        assert_eq!(c.status().items_per_view, 4);
        assert_eq!(sched.active_count(), 0);
    }

    #[test]
    fn test_unmount_mid_timer_cancels_every_created_timer() {
        use std::sync::atomic::{AtomicU64, Ordering};
        use std::sync::Arc;

        let created = Arc::new(AtomicU64::new(0));
        let cleared = Arc::new(AtomicU64::new(0));

        let mut host = MockTimerHost::new();
        let c1 = created.clone();
        host.expect_set_interval()
            .returning(move |_, _| TimerToken(c1.fetch_add(1, Ordering::SeqCst) + 1));
        let c2 = cleared.clone();
        host.expect_clear_interval().returning(move |_| {
            c2.fetch_add(1, Ordering::SeqCst);
        });

        let t0 = Instant::now();
        let mut c = Carousel::new(CarouselId::Testimonials, &settings(StepPolicy::Item))
            .with_items((0..6).collect::<Vec<u32>>());
        c.mount(&FixedViewport(40), &mut host, t0);
        c.on_resize(100, &mut host, t0 + secs(1));
        c.hover_enter(&mut host, t0 + secs(2));
        c.hover_leave(&mut host, t0 + secs(3));
        c.on_resize(130, &mut host, t0 + secs(4));
        c.unmount(&mut host);

        assert_eq!(created.load(Ordering::SeqCst), 4);
        assert_eq!(
            created.load(Ordering::SeqCst),
            cleared.load(Ordering::SeqCst)
        );
        assert!(!c.status().timer_armed);
    }

    #[test]
    fn test_remount_does_not_leak_timer() {
        let t0 = Instant::now();
        let mut sched = IntervalScheduler::new();
        let mut c = mounted(9, 130, &mut sched, t0);
        c.mount(&FixedViewport(70), &mut sched, t0);
        assert_eq!(sched.active_count(), 1);
        assert_eq!(c.status().items_per_view, 2);
    }
}
