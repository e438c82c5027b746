use log::{error, info, warn};

use crate::store::KeyValueStore;

/// Running maximum of scores across sessions, backed by a store.
///
/// Storage problems never reach the game: a value that can't be read counts
/// as 0 and a failed write is only logged.
#[derive(Debug)]
pub struct BestScore<S> {
    store: S,
    key: String,
    value: u32,
}

impl<S: KeyValueStore> BestScore<S> {
    pub fn load(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let value = match store.get(&key) {
            Ok(Some(raw)) => raw.trim().parse().unwrap_or_else(|_| {
                warn!("Ignoring unparsable best score {:?}", raw);
                0
            }),
            Ok(None) => 0,
            Err(e) => {
                error!("Error loading best score: {}", e);
                0
            }
        };
        info!("Best score loaded: {}", value);
        BestScore { store, key, value }
    }

    pub fn get(&self) -> u32 {
        self.value
    }

    /// Raise the best to `score` if it beats it, persisting the new value
    pub fn record(&mut self, score: u32) -> bool {
        if score <= self.value {
            return false;
        }
        self.value = score;
        if let Err(e) = self.store.set(&self.key, &self.value.to_string()) {
            error!("Error saving best score: {}", e);
        }
        true
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }
}
