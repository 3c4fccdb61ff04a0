//! View selection through the reducer and surface

mod common;

use delegate_dash::core::{update, Effect, Surface, UiEvent, UiState};
use delegate_dash::domain::{Catalog, Heading, ViewKey};

fn select(catalog: &Catalog, state: UiState, surface: &mut Surface, key: &str) -> UiState {
    let (state, effects) = update(state, &UiEvent::SelectView(ViewKey::from(key)), catalog);
    surface.apply_all(&effects);
    state
}

#[test]
fn test_every_valid_key_leaves_exactly_one_panel() {
    let catalog = common::fixture_catalog();
    let mut surface = Surface::new(&catalog);
    let mut state = UiState::default();

    for key in ["overview", "reports", "overview"] {
        state = select(&catalog, state, &mut surface, key);
        assert_eq!(surface.active_panels.len(), 1, "{key}");
        assert!(surface.active_panels.contains(&ViewKey::from(key)));
        assert_eq!(surface.active_nav.len(), 1);

        let heading = catalog.heading(&ViewKey::from(key)).unwrap();
        assert_eq!(surface.title, heading.title);
        assert_eq!(surface.subtitle, heading.subtitle);
        assert_eq!(state.active_panel, Some(ViewKey::from(key)));
    }
}

#[test]
fn test_builtin_views_set_heading() {
    let catalog = Catalog::builtin();
    let mut surface = Surface::new(&catalog);
    let mut state = UiState::default();

    for entry in catalog.nav.clone() {
        state = select(&catalog, state, &mut surface, entry.key.as_str());
        assert_eq!(surface.active_panels.len(), 1);
        assert_eq!(&surface.title, &catalog.heading(&entry.key).unwrap().title);
    }
    assert_eq!(state.heading.title, "Insights");
}

#[test]
fn test_nav_entry_without_panel_clears_panels() {
    let catalog = common::fixture_catalog();
    let mut surface = Surface::new(&catalog);
    let state = select(&catalog, UiState::default(), &mut surface, "overview");
    let state = select(&catalog, state, &mut surface, "archive");

    assert!(surface.active_panels.is_empty());
    assert!(surface.active_nav.contains(&ViewKey::from("archive")));
    assert_eq!(state.heading, Heading::default());
    assert_eq!(surface.title, "");
}

#[test]
fn test_unknown_key_effects() {
    let catalog = common::fixture_catalog();
    let (state, effects) = update(
        UiState::default(),
        &UiEvent::SelectView(ViewKey::from("nowhere")),
        &catalog,
    );
    assert_eq!(
        effects,
        vec![Effect::ClearActive, Effect::SetHeading(Heading::default())]
    );
    assert_eq!(state.active_nav, None);
    assert_eq!(state.active_panel, None);
}

#[test]
fn test_select_view_keeps_modal_open() {
    let catalog = common::fixture_catalog();
    let mut surface = Surface::new(&catalog);
    let (state, effects) = update(UiState::default(), &UiEvent::ShowDetail(10), &catalog);
    surface.apply_all(&effects);

    let state = select(&catalog, state, &mut surface, "reports");
    assert!(surface.modal_visible);
    assert!(state.modal.is_open());
}
