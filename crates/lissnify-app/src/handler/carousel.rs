//! Carousel message handlers

use lissnify_core::CarouselId;

use crate::carousel::Nav;
use crate::state::{AppPhase, AppState};

use super::UpdateResult;

/// Poll the scheduler and advance every carousel whose timer fired
pub fn handle_tick(state: &mut AppState) -> UpdateResult {
    if state.phase != AppPhase::Running {
        return UpdateResult::none();
    }

    let now = state.now();
    for token in state.scheduler.poll(now) {
        let advanced = state
            .deck
            .all_mut()
            .into_iter()
            .find_map(|carousel| carousel.on_timer(token).then_some(carousel.id()));

        match advanced {
            Some(id) => tracing::trace!("Auto-advanced {} carousel", id),
            // A token fired after its carousel re-armed; nothing owns it
            None => tracing::debug!("Timer {} fired with no owner", token.id()),
        }
    }
    UpdateResult::none()
}

pub fn handle_navigate(state: &mut AppState, id: CarouselId, nav: Nav) -> UpdateResult {
    let index = state.with_carousel(id, |carousel, host, now| carousel.navigate(nav, host, now));
    tracing::debug!("{} carousel {:?} -> {}", id, nav, index);
    UpdateResult::none()
}

pub fn handle_toggle_auto_play(state: &mut AppState, id: CarouselId) -> UpdateResult {
    let playing = state.with_carousel(id, |carousel, host, now| carousel.toggle_auto_play(host, now));
    tracing::info!(
        "{} carousel auto-play {}",
        id,
        if playing { "on" } else { "off" }
    );
    UpdateResult::none()
}

pub fn handle_hover_enter(state: &mut AppState, id: CarouselId) -> UpdateResult {
    state.with_carousel(id, |carousel, host, now| carousel.hover_enter(host, now));
    UpdateResult::none()
}

pub fn handle_hover_leave(state: &mut AppState, id: CarouselId) -> UpdateResult {
    state.with_carousel(id, |carousel, host, now| carousel.hover_leave(host, now));
    UpdateResult::none()
}

/// Translate pointer motion into hover enter/leave transitions
pub fn handle_mouse_move(state: &mut AppState, column: u16, row: u16) -> UpdateResult {
    let target = state.deck.hit_test(column, row);
    if target == state.hovered {
        return UpdateResult::none();
    }

    if let Some(previous) = state.hovered.take() {
        handle_hover_leave(state, previous);
    }
    if let Some(id) = target {
        handle_hover_enter(state, id);
    }
    state.hovered = target;
    UpdateResult::none()
}

/// Re-run every mounted width observer
pub fn handle_resize(state: &mut AppState, width: u16) -> UpdateResult {
    state.viewport_width = width;
    let now = state.now();
    let mut changed = Vec::new();
    for carousel in state.deck.all_mut() {
        if carousel.on_resize(width, &mut state.scheduler, now) {
            changed.push(carousel.id());
        }
    }
    if !changed.is_empty() {
        tracing::debug!("Resize to {} columns changed {:?}", width, changed);
    }
    UpdateResult::none()
}

pub fn handle_focus(state: &mut AppState, id: CarouselId) -> UpdateResult {
    state.focus = id;
    UpdateResult::none()
}
