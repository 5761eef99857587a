use crate::shapes::player::PlayerId;
use serde::{Deserialize, Serialize};

/// Player ids marked as favorite, in the order they were added.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct FavoritesSet(Vec<PlayerId>);

impl FavoritesSet {
    pub fn new(ids: Vec<PlayerId>) -> Self {
        let mut set = Self::default();
        for id in ids {
            if !set.contains(id) {
                set.0.push(id);
            }
        }
        set
    }

    pub fn contains(&self, id: PlayerId) -> bool {
        self.0.contains(&id)
    }

    /// Adds `id` if missing, removes it otherwise. Returns whether `id` is a favorite afterwards.
    pub fn toggle(&mut self, id: PlayerId) -> bool {
        if self.contains(id) {
            self.0.retain(|x| *x != id);
            false
        } else {
            self.0.push(id);
            true
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn ids(&self) -> &[PlayerId] {
        &self.0
    }
}
