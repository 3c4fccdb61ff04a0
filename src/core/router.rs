//! View router - maps a selected view key to the active panel and heading

use tracing::debug;

use super::effect::Effect;
use super::state::UiState;
use crate::domain::{Catalog, ViewKey};

/// Select a view by key.
///
/// All active markings are cleared first. The nav entry and panel for `key`
/// are then marked when they exist; a key without a panel leaves no panel
/// active. The heading always updates, to an empty pair for unmapped keys.
pub fn select_view(mut state: UiState, key: &ViewKey, catalog: &Catalog) -> (UiState, Vec<Effect>) {
    let mut effects = vec![Effect::ClearActive];
    state.active_nav = None;
    state.active_panel = None;

    if catalog.has_nav(key) {
        state.active_nav = Some(key.clone());
        effects.push(Effect::ActivateNav(key.clone()));
    }

    if catalog.has_panel(key) {
        state.active_panel = Some(key.clone());
        effects.push(Effect::ActivatePanel(key.clone()));
    } else {
        debug!(view = %key, "no panel for view");
    }

    let heading = catalog.heading(key).cloned().unwrap_or_default();
    state.heading = heading.clone();
    effects.push(Effect::SetHeading(heading));

    (state, effects)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Heading;

    #[test]
    fn test_select_known_view() {
        let catalog = Catalog::builtin();
        let (state, effects) = select_view(UiState::default(), &"feedback".into(), &catalog);
        assert_eq!(state.active_panel, Some(ViewKey::from("feedback")));
        assert_eq!(state.active_nav, Some(ViewKey::from("feedback")));
        assert_eq!(state.heading.title, "Constituent Feedback");
        assert_eq!(effects.first(), Some(&Effect::ClearActive));
        assert_eq!(effects.len(), 4);
    }

    #[test]
    fn test_select_unknown_view_clears_panels() {
        let catalog = Catalog::builtin();
        let (state, _) = select_view(UiState::default(), &"dashboard".into(), &catalog);
        let (state, effects) = select_view(state, &"archive".into(), &catalog);
        assert_eq!(state.active_panel, None);
        assert_eq!(state.active_nav, None);
        assert_eq!(state.heading, Heading::default());
        assert_eq!(
            effects,
            vec![Effect::ClearActive, Effect::SetHeading(Heading::default())]
        );
    }
}
