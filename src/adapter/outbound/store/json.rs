//! JSON file-backed trait frequency store.
//!
//! The file is a two-level object: category to value to occurrence count.
//! A missing or malformed file loads as an empty table so the monitor can
//! still run (every listing then scores zero).

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{error, info, warn};

use crate::domain::traits::TraitFrequencyCache;
use crate::error::Result;
use crate::port::TraitStore;

#[derive(Debug, Clone)]
pub struct JsonTraitStore {
    path: PathBuf,
}

impl JsonTraitStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TraitStore for JsonTraitStore {
    fn load(&self) -> TraitFrequencyCache {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "No trait cache found, starting empty");
                return TraitFrequencyCache::new();
            }
            Err(e) => {
                error!(path = %self.path.display(), error = %e, "Failed to read trait cache");
                return TraitFrequencyCache::new();
            }
        };

        match serde_json::from_str::<TraitFrequencyCache>(&content) {
            Ok(cache) => {
                if cache.is_empty() {
                    warn!(path = %self.path.display(), "Trait cache is empty, all scores will be zero");
                } else {
                    info!(
                        path = %self.path.display(),
                        categories = cache.category_count(),
                        values = cache.value_count(),
                        "Trait cache loaded"
                    );
                }
                cache
            }
            Err(e) => {
                error!(path = %self.path.display(), error = %e, "Trait cache is malformed, starting empty");
                TraitFrequencyCache::new()
            }
        }
    }

    fn save(&self, cache: &TraitFrequencyCache) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(cache)?;
        fs::write(&self.path, json)?;
        info!(path = %self.path.display(), "Trait cache saved");
        Ok(())
    }
}
