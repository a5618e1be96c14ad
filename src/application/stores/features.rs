//! Feature toggles

use std::collections::BTreeSet;

use tokio::sync::watch;
use tracing::info;

use super::store::Store;
use crate::domain::feature::Feature;

#[derive(Debug, Clone)]
pub struct FeatureStore {
    store: Store<BTreeSet<Feature>>,
}

impl FeatureStore {
    pub fn new(enabled: impl IntoIterator<Item = Feature>) -> Self {
        Self {
            store: Store::new(enabled.into_iter().collect()),
        }
    }

    /// Store seeded with each feature's default.
    pub fn with_defaults() -> Self {
        Self::new(Feature::ALL.into_iter().filter(Feature::enabled_by_default))
    }

    pub fn is_enabled(&self, feature: Feature) -> bool {
        self.store.select(|enabled| enabled.contains(&feature))
    }

    /// Enabled features in declaration order.
    pub fn enabled(&self) -> Vec<Feature> {
        self.store.select(|enabled| enabled.iter().copied().collect())
    }

    pub fn set(&self, feature: Feature, on: bool) {
        self.store.update(|enabled| {
            let changed = if on {
                enabled.insert(feature)
            } else {
                enabled.remove(&feature)
            };
            if changed {
                info!(%feature, enabled = on, "feature toggled");
            }
            changed
        });
    }

    pub fn enable(&self, feature: Feature) {
        self.set(feature, true);
    }

    pub fn disable(&self, feature: Feature) {
        self.set(feature, false);
    }

    /// Flip a feature and return its new state.
    pub fn toggle(&self, feature: Feature) -> bool {
        let on = !self.is_enabled(feature);
        self.set(feature, on);
        on
    }

    pub fn subscribe(&self) -> watch::Receiver<BTreeSet<Feature>> {
        self.store.subscribe()
    }
}

impl Default for FeatureStore {
    fn default() -> Self {
        Self::with_defaults()
    }
}
