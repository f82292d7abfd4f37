use api::prefs::UserPrefs;
use std::ops::Deref;
use std::sync::Arc;

#[derive(Debug, PartialEq, Eq)]
pub struct AppStateData {
    pub prefs: UserPrefs,
}

/// Stable, non-reactive app configuration shared through context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppState(Arc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppState {
    pub fn new(prefs: UserPrefs) -> Self {
        Self(Arc::new(AppStateData { prefs }))
    }
}
