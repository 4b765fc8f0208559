//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppPhase, AppState, ContentStatus};

use super::{carousel, keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Shutdown(signal) => {
            tracing::info!(
                "{} received with {} auto-advance timers armed, shutting down",
                signal,
                state.scheduler.active_count()
            );
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => carousel::handle_tick(state),

        Message::Resize { width, .. } => carousel::handle_resize(state, width),

        Message::MouseMove { column, row } => carousel::handle_mouse_move(state, column, row),

        // ─────────────────────────────────────────────────────────
        // Carousel Messages
        // ─────────────────────────────────────────────────────────
        Message::FocusNext => {
            let id = state.focus.next();
            carousel::handle_focus(state, id)
        }
        Message::FocusPrev => {
            let id = state.focus.prev();
            carousel::handle_focus(state, id)
        }
        Message::Focus(id) => carousel::handle_focus(state, id),

        Message::Navigate { id, nav } => carousel::handle_navigate(state, id, nav),

        Message::ToggleAutoPlay(id) => carousel::handle_toggle_auto_play(state, id),

        Message::HoverEnter(id) => carousel::handle_hover_enter(state, id),
        Message::HoverLeave(id) => carousel::handle_hover_leave(state, id),

        // ─────────────────────────────────────────────────────────
        // Content Messages
        // ─────────────────────────────────────────────────────────
        Message::ReloadContent => {
            if state.content.is_loading() {
                tracing::debug!("Reload ignored, load already in flight");
                return UpdateResult::none();
            }
            state.content = ContentStatus::Loading;
            UpdateResult::action(UpdateAction::LoadContent)
        }

        Message::ContentLoaded(content) => {
            let items = content.total();
            state.deck.apply_content(*content);
            state.content = ContentStatus::Loaded { items };
            UpdateResult::none()
        }

        Message::ContentLoadFailed { error } => {
            tracing::warn!("Content load failed: {}", error);
            state.content = ContentStatus::Failed { error };
            UpdateResult::none()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::{CarouselControl, FixedViewport, Nav};
    use crate::config::Settings;
    use crate::input_key::InputKey;
    use crate::services::{fixtures, DeckContent};
    use crate::signals::ShutdownSignal;
    use lissnify_core::CarouselId;

    fn running() -> AppState {
        let mut state = AppState::new(Settings::default());
        state.mount(&FixedViewport(130));
        state
    }

    /// Drive follow-up messages like the event loop does
    fn dispatch(state: &mut AppState, message: Message) -> Vec<UpdateAction> {
        let mut actions = Vec::new();
        let mut msg = Some(message);
        while let Some(m) = msg {
            let result = update(state, m);
            actions.extend(result.action);
            msg = result.message;
        }
        actions
    }

    #[test]
    fn test_quit() {
        let mut state = running();
        dispatch(&mut state, Message::Key(InputKey::Char('q')));
        assert!(state.should_quit());
    }

    #[test]
    fn test_shutdown_signal_quits_and_unmount_clears_timers() {
        let mut state = running();
        assert_eq!(state.scheduler.active_count(), 4);

        dispatch(&mut state, Message::Shutdown(ShutdownSignal::Terminate));
        assert!(state.should_quit());

        state.unmount();
        assert_eq!(state.scheduler.active_count(), 0);
    }

    #[test]
    fn test_focus_cycles() {
        let mut state = running();
        dispatch(&mut state, Message::FocusPrev);
        assert_eq!(state.focus, CarouselId::Listeners);
        dispatch(&mut state, Message::FocusNext);
        assert_eq!(state.focus, CarouselId::Categories);
        dispatch(&mut state, Message::Focus(CarouselId::Steps));
        assert_eq!(state.focus, CarouselId::Steps);
    }

    #[test]
    fn test_reload_requests_load_once() {
        let mut state = running();
        let actions = dispatch(&mut state, Message::Key(InputKey::Char('r')));
        assert_eq!(actions, vec![UpdateAction::LoadContent]);
        assert!(state.content.is_loading());

        // A second request while loading is ignored
        assert!(dispatch(&mut state, Message::ReloadContent).is_empty());
    }

    #[test]
    fn test_content_loaded_replaces_items_and_clamps() {
        let mut state = running();
        state.deck.apply_content(DeckContent {
            categories: fixtures::categories(),
            ..Default::default()
        });
        dispatch(
            &mut state,
            Message::Navigate {
                id: CarouselId::Categories,
                nav: Nav::Last,
            },
        );
        assert_eq!(state.deck.get(CarouselId::Categories).status().current_index, 8);

        let mut fewer = fixtures::categories();
        fewer.truncate(3);
        dispatch(
            &mut state,
            Message::ContentLoaded(Box::new(DeckContent {
                categories: fewer,
                ..Default::default()
            })),
        );
        let status = state.deck.get(CarouselId::Categories).status();
        assert_eq!(status.item_count, 3);
        assert_eq!(status.current_index, 0);
        assert_eq!(state.content, ContentStatus::Loaded { items: 3 });
    }

    #[test]
    fn test_content_failure_keeps_items() {
        let mut state = running();
        state.deck.apply_content(DeckContent {
            steps: fixtures::steps(),
            ..Default::default()
        });
        dispatch(
            &mut state,
            Message::ContentLoadFailed {
                error: "Request to http://x/api/ failed with status 500".to_string(),
            },
        );
        assert!(matches!(state.content, ContentStatus::Failed { .. }));
        assert_eq!(state.deck.get(CarouselId::Steps).status().item_count, 6);
    }

    #[test]
    fn test_key_navigation_end_to_end() {
        let mut state = running();
        state.deck.apply_content(DeckContent {
            testimonials: fixtures::testimonials(),
            ..Default::default()
        });
        dispatch(&mut state, Message::Key(InputKey::Tab));
        dispatch(&mut state, Message::Key(InputKey::Right));
        dispatch(&mut state, Message::Key(InputKey::Right));
        assert_eq!(state.deck.get(CarouselId::Testimonials).status().current_index, 2);

        dispatch(&mut state, Message::Key(InputKey::Char(' ')));
        assert!(!state.deck.get(CarouselId::Testimonials).status().is_auto_playing);
    }
}
