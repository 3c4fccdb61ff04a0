//! Pure reducer: (state, event) -> (state, effects)

use super::effect::Effect;
use super::event::UiEvent;
use super::presenter;
use super::router;
use super::state::UiState;
use crate::domain::Catalog;

pub fn update(state: UiState, event: &UiEvent, catalog: &Catalog) -> (UiState, Vec<Effect>) {
    match event {
        UiEvent::SelectView(key) => router::select_view(state, key, catalog),
        UiEvent::ShowDetail(id) => presenter::show_detail(state, *id, catalog),
        UiEvent::CloseDetail | UiEvent::BackdropClick => presenter::close_detail(state),
        UiEvent::ContentClick => (state, Vec::new()),
        UiEvent::ActivateActivity(index) => match catalog.activity_meeting(*index) {
            Some(id) => presenter::show_detail(state, id, catalog),
            None => (state, Vec::new()),
        },
    }
}
