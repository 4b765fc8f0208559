//! Application state (Model in TEA pattern)

use std::time::{Duration, Instant};

use lissnify_core::{CarouselId, Category, Listener, Step, Testimonial};

use crate::carousel::{Carousel, CarouselControl, IntervalScheduler, ViewportProvider};
use crate::clock::{Clock, SystemClock};
use crate::config::Settings;
use crate::services::DeckContent;

/// Lifecycle of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    /// Carousels exist but are not mounted yet
    #[default]
    Initializing,
    /// Mounted and running
    Running,
    Quitting,
}

/// Where content loading stands
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ContentStatus {
    #[default]
    Idle,
    Loading,
    Loaded { items: usize },
    Failed { error: String },
}

impl ContentStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, ContentStatus::Loading)
    }
}

/// The four home-page carousels
#[derive(Debug)]
pub struct Deck {
    pub categories: Carousel<Category>,
    pub testimonials: Carousel<Testimonial>,
    pub steps: Carousel<Step>,
    pub listeners: Carousel<Listener>,
}

impl Deck {
    pub fn new(settings: &Settings) -> Self {
        Self {
            categories: Carousel::new(
                CarouselId::Categories,
                &settings.carousel(CarouselId::Categories),
            ),
            testimonials: Carousel::new(
                CarouselId::Testimonials,
                &settings.carousel(CarouselId::Testimonials),
            ),
            steps: Carousel::new(CarouselId::Steps, &settings.carousel(CarouselId::Steps)),
            listeners: Carousel::new(
                CarouselId::Listeners,
                &settings.carousel(CarouselId::Listeners),
            ),
        }
    }

    pub fn get(&self, id: CarouselId) -> &dyn CarouselControl {
        match id {
            CarouselId::Categories => &self.categories,
            CarouselId::Testimonials => &self.testimonials,
            CarouselId::Steps => &self.steps,
            CarouselId::Listeners => &self.listeners,
        }
    }

    pub fn get_mut(&mut self, id: CarouselId) -> &mut dyn CarouselControl {
        match id {
            CarouselId::Categories => &mut self.categories,
            CarouselId::Testimonials => &mut self.testimonials,
            CarouselId::Steps => &mut self.steps,
            CarouselId::Listeners => &mut self.listeners,
        }
    }

    /// All carousels in display order
    pub fn all_mut(&mut self) -> [&mut dyn CarouselControl; 4] {
        [
            &mut self.categories,
            &mut self.testimonials,
            &mut self.steps,
            &mut self.listeners,
        ]
    }

    /// Replace every carousel's items
    pub fn apply_content(&mut self, content: DeckContent) {
        self.categories.set_items(content.categories);
        self.testimonials.set_items(content.testimonials);
        self.steps.set_items(content.steps);
        self.listeners.set_items(content.listeners);
    }

    /// Carousel under a screen cell, using the hit areas recorded at render time
    pub fn hit_test(&self, column: u16, row: u16) -> Option<CarouselId> {
        CarouselId::ALL.into_iter().find(|id| {
            self.get(*id)
                .hit_area()
                .is_some_and(|area| area.contains(column, row))
        })
    }
}

/// Complete application state
pub struct AppState {
    pub phase: AppPhase,

    pub settings: Settings,

    pub deck: Deck,

    /// Host for every carousel's auto-advance interval
    pub scheduler: IntervalScheduler,

    /// Carousel receiving keyboard navigation
    pub focus: CarouselId,

    /// Carousel under the mouse pointer
    pub hovered: Option<CarouselId>,

    pub content: ContentStatus,

    /// Label of the content source ("localhost:8000", "offline")
    pub source_label: String,

    /// Last known terminal width in columns
    pub viewport_width: u16,

    clock: Box<dyn Clock>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("phase", &self.phase)
            .field("focus", &self.focus)
            .field("hovered", &self.hovered)
            .field("content", &self.content)
            .field("viewport_width", &self.viewport_width)
            .finish_non_exhaustive()
    }
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self::with_clock(settings, Box::new(SystemClock))
    }

    pub fn with_clock(settings: Settings, clock: Box<dyn Clock>) -> Self {
        Self {
            phase: AppPhase::Initializing,
            deck: Deck::new(&settings),
            settings,
            scheduler: IntervalScheduler::new(),
            focus: CarouselId::Categories,
            hovered: None,
            content: ContentStatus::Idle,
            source_label: String::new(),
            viewport_width: 0,
            clock,
        }
    }

    pub fn now(&self) -> Instant {
        self.clock.now()
    }

    /// How long the event loop may block on input.
    ///
    /// Never longer than `tick_rate`, and shorter when an auto-advance
    /// deadline falls inside it.
    pub fn poll_timeout(&self, tick_rate: Duration) -> Duration {
        match self.scheduler.next_deadline() {
            Some(due) => due.saturating_duration_since(self.clock.now()).min(tick_rate),
            None => tick_rate,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Mount every carousel against the viewport
    pub fn mount(&mut self, viewport: &dyn ViewportProvider) {
        let now = self.clock.now();
        self.viewport_width = viewport.width();
        for carousel in self.deck.all_mut() {
            carousel.mount(viewport, &mut self.scheduler, now);
        }
        self.phase = AppPhase::Running;
        tracing::info!(
            "Mounted deck at {} columns, {} timers armed",
            self.viewport_width,
            self.scheduler.active_count()
        );
    }

    /// Unmount every carousel, cancelling all timers
    pub fn unmount(&mut self) {
        for carousel in self.deck.all_mut() {
            carousel.unmount(&mut self.scheduler);
        }
        self.hovered = None;
        tracing::info!(
            "Unmounted deck, {} timers left",
            self.scheduler.active_count()
        );
    }

    /// Run `f` against one carousel with the timer host and current time
    pub fn with_carousel<R>(
        &mut self,
        id: CarouselId,
        f: impl FnOnce(&mut dyn CarouselControl, &mut IntervalScheduler, Instant) -> R,
    ) -> R {
        let now = self.clock.now();
        f(self.deck.get_mut(id), &mut self.scheduler, now)
    }
}
