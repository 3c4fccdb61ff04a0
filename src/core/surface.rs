//! Presentation surface the render effects are applied to

use std::collections::{BTreeMap, BTreeSet};

use super::effect::{BodyLine, Effect};
use crate::domain::{Catalog, ViewKey};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Surface {
    pub active_nav: BTreeSet<ViewKey>,
    pub active_panels: BTreeSet<ViewKey>,
    pub title: String,
    pub subtitle: String,
    pub modal_visible: bool,
    pub modal_title: String,
    pub modal_body: Vec<BodyLine>,
    counters: BTreeMap<String, i64>,
}

impl Surface {
    /// Surface with one counter element per catalog stat, showing its start value
    pub fn new(catalog: &Catalog) -> Self {
        let counters = catalog
            .stats
            .iter()
            .map(|stat| (stat.target.clone(), stat.start))
            .collect();
        Self {
            counters,
            ..Self::default()
        }
    }

    pub fn apply(&mut self, effect: &Effect) {
        match effect {
            Effect::ClearActive => {
                self.active_nav.clear();
                self.active_panels.clear();
            }
            Effect::ActivateNav(key) => {
                self.active_nav.insert(key.clone());
            }
            Effect::ActivatePanel(key) => {
                self.active_panels.insert(key.clone());
            }
            Effect::SetHeading(heading) => {
                self.title = heading.title.clone();
                self.subtitle = heading.subtitle.clone();
            }
            Effect::OpenModal { title, body } => {
                self.modal_title = title.clone();
                self.modal_body = body.clone();
                self.modal_visible = true;
            }
            Effect::CloseModal => self.modal_visible = false,
        }
    }

    pub fn apply_all(&mut self, effects: &[Effect]) {
        for effect in effects {
            self.apply(effect);
        }
    }

    pub fn has_counter(&self, target: &str) -> bool {
        self.counters.contains_key(target)
    }

    pub fn counter(&self, target: &str) -> Option<i64> {
        self.counters.get(target).copied()
    }

    /// Returns false when no element exists for `target`
    pub fn set_counter(&mut self, target: &str, value: i64) -> bool {
        match self.counters.get_mut(target) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }
}
