//! Integration tests for the carousel controller
//!
//! Drives `Carousel<T>` and the TEA update loop through the public API only.

use std::time::{Duration, Instant};

use lissnify_app::config::{CarouselSettings, Settings};
use lissnify_app::handler::update;
use lissnify_app::services::fixtures;
use lissnify_app::{
    AppState, Carousel, CarouselControl, CarouselIndex, DeckContent, FixedViewport,
    IntervalScheduler, ManualClock, Message, Nav,
};
use lissnify_core::{Breakpoint, BreakpointTable, CarouselId, StepPolicy};

/// Breakpoints mirroring the categories carousel: <60 -> 1, <90 -> 2, <120 -> 3, else 4
fn page_settings() -> CarouselSettings {
    CarouselSettings {
        period: Duration::from_secs(4),
        stepping: StepPolicy::Page,
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

fn assert_in_bounds(index: &CarouselIndex) {
    assert!(
        index.current() <= index.max_index(),
        "current {} exceeds max {}",
        index.current(),
        index.max_index()
    );
}

#[test]
fn test_index_stays_in_bounds_for_every_operation() {
    for policy in [StepPolicy::Page, StepPolicy::Item] {
        for n in 0..=13 {
            for ipv in 0..=5 {
                let mut index = CarouselIndex::new(policy);
                index.set_item_count(n);
                index.set_items_per_view(ipv);

                for _ in 0..20 {
                    index.next();
                    assert_in_bounds(&index);
                }
                for _ in 0..20 {
                    index.prev();
                    assert_in_bounds(&index);
                }
                for target in [0, 1, 3, 12, 99, usize::MAX] {
                    index.go_to(target);
                    assert_in_bounds(&index);
                }
                for resized in [1, 4, 2, 7, 0] {
                    index.set_items_per_view(resized);
                    assert_in_bounds(&index);
                }
            }
        }
    }
}

#[test]
fn test_full_cycle_of_next_returns_to_start() {
    for policy in [StepPolicy::Page, StepPolicy::Item] {
        for n in 0..=12 {
            for ipv in 1..=4 {
                for start in 0..4 {
                    let mut index = CarouselIndex::new(policy);
                    index.set_item_count(n);
                    index.set_items_per_view(ipv);
                    let from = index.go_to(start);

                    for _ in 0..=index.max_index() {
                        index.next();
                    }
                    assert_eq!(index.current(), from, "n={} ipv={} {:?}", n, ipv, policy);
                }
            }
        }
    }
}

#[test]
fn test_go_to_out_of_range_clamps() {
    let mut index = CarouselIndex::new(StepPolicy::Page);
    index.set_item_count(9);
    index.set_items_per_view(4);

    assert_eq!(index.go_to(7), 2);
    assert_eq!(index.go_to(usize::MAX), 2);
    assert_eq!(index.go_to(0), 0);
}

#[test]
fn test_resize_growing_items_per_view_clamps_index() {
    let t0 = Instant::now();
    let mut sched = IntervalScheduler::new();
    let mut carousel = Carousel::new(CarouselId::Categories, &page_settings())
        .with_items((0..9).collect::<Vec<u32>>());
    carousel.mount(&FixedViewport(50), &mut sched, t0);
    carousel.navigate(Nav::GoTo(6), &mut sched, t0);
    assert_eq!(carousel.status().current_index, 6);

    carousel.on_resize(130, &mut sched, t0);
    let status = carousel.status();
    assert_eq!(status.max_index, 2);
    assert_eq!(status.current_index, 2);
}

#[test]
fn test_nine_items_four_per_view_sequence() {
    let t0 = Instant::now();
    let mut sched = IntervalScheduler::new();
    let mut carousel = Carousel::new(CarouselId::Categories, &page_settings())
        .with_items((0..9).collect::<Vec<u32>>());
    carousel.mount(&FixedViewport(130), &mut sched, t0);
    assert_eq!(carousel.status().max_index, 2);

    let seen: Vec<usize> = (0..3)
        .map(|_| carousel.navigate(Nav::Next, &mut sched, t0))
        .collect();
    assert_eq!(seen, vec![1, 2, 0]);
}

#[test]
fn test_empty_items_disable_navigation() {
    let t0 = Instant::now();
    let mut sched = IntervalScheduler::new();
    let mut carousel: Carousel<u32> = Carousel::new(CarouselId::Listeners, &page_settings());
    carousel.mount(&FixedViewport(130), &mut sched, t0);

    let status = carousel.status();
    assert_eq!(status.max_index, 0);
    assert!(!status.can_navigate());
    assert_eq!(carousel.navigate(Nav::Next, &mut sched, t0), 0);
    assert_eq!(carousel.navigate(Nav::Prev, &mut sched, t0), 0);
}

/// Advance the clock by `ms` and tick. Returns the new categories index if it moved.
fn tick_after(state: &mut AppState, clock: &ManualClock, ms: u64) -> Option<usize> {
    clock.advance(Duration::from_millis(ms));
    let before = state.deck.get(CarouselId::Categories).status().current_index;
    update(state, Message::Tick);
    let after = state.deck.get(CarouselId::Categories).status().current_index;
    (before != after).then_some(after)
}

#[test]
fn test_hover_pause_through_the_update_loop() {
    let clock = ManualClock::new();
    let mut state = AppState::with_clock(Settings::default(), Box::new(clock.clone()));
    state.deck.apply_content(DeckContent {
        categories: fixtures::categories().into_iter().take(9).collect(),
        ..Default::default()
    });
    state.mount(&FixedViewport(130));

    // 0s..5s: one tick at 4s
    let seen: Vec<usize> = (0..100)
        .filter_map(|_| tick_after(&mut state, &clock, 50))
        .collect();
    assert_eq!(seen, vec![1]);

    // 5s..11s paused: nothing fires
    update(&mut state, Message::HoverEnter(CarouselId::Categories));
    assert!((0..120).all(|_| tick_after(&mut state, &clock, 50).is_none()));

    // Resume at 11s: the next tick is a full period later, at 15s
    update(&mut state, Message::HoverLeave(CarouselId::Categories));
    assert!((0..79).all(|_| tick_after(&mut state, &clock, 50).is_none()));
    assert_eq!(tick_after(&mut state, &clock, 50), Some(2));
}

#[test]
fn test_unmount_leaves_no_pending_timers() {
    let mut state = AppState::new(Settings::default());
    state.mount(&FixedViewport(100));
    assert_eq!(state.scheduler.active_count(), 4);

    update(&mut state, Message::Resize { width: 40, height: 30 });
    update(&mut state, Message::HoverEnter(CarouselId::Steps));
    update(&mut state, Message::HoverLeave(CarouselId::Steps));
    state.unmount();

    assert_eq!(state.scheduler.active_count(), 0);
    for id in CarouselId::ALL {
        assert!(!state.deck.get(id).status().timer_armed);
    }
}

#[test]
fn test_visible_items_match_track_offset() {
    let t0 = Instant::now();
    let mut sched = IntervalScheduler::new();
    let mut carousel = Carousel::new(CarouselId::Categories, &page_settings())
        .with_items((0..9).collect::<Vec<u32>>());
    carousel.mount(&FixedViewport(130), &mut sched, t0);
    carousel.navigate(Nav::Next, &mut sched, t0);

    assert_eq!(carousel.visible_items(), &[4, 5, 6, 7]);
    assert_eq!(carousel.index().track_offset_percent(), -100.0);
}
