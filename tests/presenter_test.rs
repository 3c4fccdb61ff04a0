//! Meeting detail modal behaviour

mod common;

use delegate_dash::core::{update, BodyLine, Effect, ModalState, Surface, UiEvent, UiState};
use delegate_dash::domain::Catalog;

fn run(catalog: &Catalog, state: UiState, surface: &mut Surface, event: UiEvent) -> (UiState, Vec<Effect>) {
    let (state, effects) = update(state, &event, catalog);
    surface.apply_all(&effects);
    (state, effects)
}

#[test]
fn test_show_detail_fills_title_and_meta() {
    let catalog = Catalog::builtin();
    for meeting in &catalog.meetings {
        let mut surface = Surface::new(&catalog);
        let (state, _) = run(&catalog, UiState::default(), &mut surface, UiEvent::ShowDetail(meeting.id));

        assert!(surface.modal_visible);
        assert_eq!(surface.modal_title, meeting.title);
        assert_eq!(surface.modal_body.first(), Some(&BodyLine::Meta(meeting.meta.clone())));
        assert_eq!(state.modal.record().map(|r| r.id), Some(meeting.id));
    }
}

#[test]
fn test_unknown_meeting_leaves_state_unchanged() {
    let catalog = Catalog::builtin();
    let mut surface = Surface::new(&catalog);

    let (closed, effects) = run(&catalog, UiState::default(), &mut surface, UiEvent::ShowDetail(999));
    assert!(effects.is_empty());
    assert_eq!(closed.modal, ModalState::Closed);
    assert!(!surface.modal_visible);

    let (open, _) = run(&catalog, closed, &mut surface, UiEvent::ShowDetail(2));
    let before = surface.clone();
    let (after, effects) = run(&catalog, open.clone(), &mut surface, UiEvent::ShowDetail(999));
    assert!(effects.is_empty());
    assert_eq!(after, open);
    assert_eq!(surface, before);
}

#[test]
fn test_close_detail_is_idempotent() {
    let catalog = Catalog::builtin();
    let mut surface = Surface::new(&catalog);
    let (state, _) = run(&catalog, UiState::default(), &mut surface, UiEvent::ShowDetail(1));

    let (state, _) = run(&catalog, state, &mut surface, UiEvent::CloseDetail);
    assert!(!surface.modal_visible);
    let snapshot = surface.clone();

    let (state, effects) = run(&catalog, state, &mut surface, UiEvent::CloseDetail);
    assert_eq!(effects, vec![Effect::CloseModal]);
    assert_eq!(state.modal, ModalState::Closed);
    assert_eq!(surface, snapshot);
}

#[test]
fn test_backdrop_closes_and_content_does_not() {
    let catalog = Catalog::builtin();
    let mut surface = Surface::new(&catalog);
    let (state, _) = run(&catalog, UiState::default(), &mut surface, UiEvent::ShowDetail(3));

    let (state, effects) = run(&catalog, state, &mut surface, UiEvent::ContentClick);
    assert!(effects.is_empty());
    assert!(surface.modal_visible);

    let (state, _) = run(&catalog, state, &mut surface, UiEvent::BackdropClick);
    assert!(!surface.modal_visible);
    assert!(!state.modal.is_open());
}

#[test]
fn test_show_detail_replaces_open_record() {
    let catalog = common::fixture_catalog();
    let mut surface = Surface::new(&catalog);
    let (state, _) = run(&catalog, UiState::default(), &mut surface, UiEvent::ShowDetail(10));
    let (state, effects) = run(&catalog, state, &mut surface, UiEvent::ShowDetail(20));

    assert!(!effects.contains(&Effect::CloseModal));
    assert_eq!(surface.modal_title, "Housing Forum");
    assert_eq!(state.modal.record().map(|r| r.id), Some(20));
}

#[test]
fn test_activity_rows_map_positionally() {
    let catalog = common::fixture_catalog();
    let mut surface = Surface::new(&catalog);

    let (state, effects) = run(&catalog, UiState::default(), &mut surface, UiEvent::ActivateActivity(1));
    assert!(effects.is_empty());
    assert!(!surface.modal_visible);

    let (state, _) = run(&catalog, state, &mut surface, UiEvent::ActivateActivity(0));
    assert_eq!(surface.modal_title, "Budget Committee");

    let (state, _) = run(&catalog, state, &mut surface, UiEvent::ActivateActivity(2));
    assert_eq!(surface.modal_title, "Housing Forum");

    let (_, effects) = run(&catalog, state, &mut surface, UiEvent::ActivateActivity(7));
    assert!(effects.is_empty());
}

#[test]
fn test_body_sections_follow_record_content() {
    let catalog = common::fixture_catalog();
    let mut surface = Surface::new(&catalog);
    run(&catalog, UiState::default(), &mut surface, UiEvent::ShowDetail(10));

    let headings: Vec<&str> = surface
        .modal_body
        .iter()
        .filter_map(|line| match line {
            BodyLine::Heading(text) => Some(text.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(
        headings,
        vec!["Executive Summary", "Key Topics Discussed", "Action Items", "Sentiment Analysis"]
    );
}
