//! Per-project pane width persistence
//!
//! Each pane side owns one storage key holding a JSON object that maps a
//! project key to a pixel width. A third key records the active project.

use super::storage::{KeyValueStore, StorageResult};
use crate::model::pane::PaneSide;
use serde_json::{Map, Value};
use std::fmt;
use tracing::{debug, warn};

pub const LEFT_WIDTHS_KEY: &str = "layout.left_widths";
pub const RIGHT_WIDTHS_KEY: &str = "layout.right_widths";
pub const CURRENT_PROJECT_KEY: &str = "layout.current_project";

/// Identifier of a user project
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectId(String);

impl ProjectId {
    /// Returns `None` for an empty or blank identifier
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            None
        } else {
            Some(Self(id))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Key under which widths are stored for a project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectKey(String);

impl ProjectKey {
    /// Used when no project is active
    pub const DEFAULT: &'static str = "default";

    pub fn resolve(project: Option<&ProjectId>) -> Self {
        match project {
            Some(id) => Self(id.as_str().to_string()),
            None => Self(Self::DEFAULT.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Widths read back from storage; `None` means "use the default"
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoredWidths {
    pub left: Option<u32>,
    pub right: Option<u32>,
}

impl StoredWidths {
    pub fn get(&self, side: PaneSide) -> Option<u32> {
        match side {
            PaneSide::Left => self.left,
            PaneSide::Right => self.right,
        }
    }
}

fn widths_key(side: PaneSide) -> &'static str {
    match side {
        PaneSide::Left => LEFT_WIDTHS_KEY,
        PaneSide::Right => RIGHT_WIDTHS_KEY,
    }
}

/// Reads and writes pane widths through a key-value store
pub struct WidthStore {
    store: Box<dyn KeyValueStore>,
}

impl WidthStore {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Load both pane widths for a project.
    ///
    /// Never fails: missing or malformed entries come back as `None`.
    pub fn load(&self, key: &ProjectKey) -> StoredWidths {
        StoredWidths {
            left: self.load_side(PaneSide::Left, key),
            right: self.load_side(PaneSide::Right, key),
        }
    }

    fn load_side(&self, side: PaneSide, key: &ProjectKey) -> Option<u32> {
        let storage_key = widths_key(side);
        let raw = match self.store.get(storage_key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!(key = storage_key, error = %e, "could not read stored widths");
                return None;
            }
        };

        let mapping = match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(map)) => map,
            Ok(other) => {
                warn!(key = storage_key, value = %other, "stored widths are not an object");
                return None;
            }
            Err(e) => {
                warn!(key = storage_key, error = %e, "stored widths are not valid JSON");
                return None;
            }
        };

        let value = mapping.get(key.as_str())?;
        match value.as_f64() {
            Some(width) if width.is_finite() && width > 0.0 => {
                Some(width.round().min(f64::from(u32::MAX)) as u32)
            }
            _ => {
                warn!(
                    key = storage_key,
                    project = key.as_str(),
                    value = %value,
                    "ignoring invalid stored width"
                );
                None
            }
        }
    }

    /// Upsert one pane's width for a project.
    ///
    /// Only `side`'s mapping is rewritten, and every other project's entry
    /// in it is preserved.
    pub fn save(&self, side: PaneSide, key: &ProjectKey, width: u32) -> StorageResult<()> {
        let storage_key = widths_key(side);
        let mut mapping = match self.store.get(storage_key) {
            Ok(Some(raw)) => match serde_json::from_str::<Value>(&raw) {
                Ok(Value::Object(map)) => map,
                _ => {
                    warn!(key = storage_key, "replacing malformed stored widths");
                    Map::new()
                }
            },
            Ok(None) => Map::new(),
            Err(e) => {
                warn!(key = storage_key, error = %e, "replacing unreadable stored widths");
                Map::new()
            }
        };

        mapping.insert(key.as_str().to_string(), Value::from(width));
        let encoded = serde_json::to_string(&Value::Object(mapping))?;
        self.store.set(storage_key, &encoded)?;
        debug!(side = %side, project = key.as_str(), width, "saved pane width");
        Ok(())
    }

    /// The project recorded as active, if any
    pub fn active_project(&self) -> Option<ProjectId> {
        match self.store.get(CURRENT_PROJECT_KEY) {
            Ok(Some(raw)) => ProjectId::new(raw),
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, "could not read active project");
                None
            }
        }
    }

    pub fn set_active_project(&self, project: Option<&ProjectId>) -> StorageResult<()> {
        match project {
            Some(id) => self.store.set(CURRENT_PROJECT_KEY, id.as_str()),
            None => self.store.remove(CURRENT_PROJECT_KEY),
        }
    }
}
