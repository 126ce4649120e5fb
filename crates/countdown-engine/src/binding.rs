//! Binding Store: which event each surface shows.
//!
//! Bindings are never validated against the event list. A stale binding is
//! handled by the resolver's fallback.

use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{CountdownError, Result};
use crate::event::{coerce_int, EventId, SurfaceId};

/// Keyed persistence of surface → event bindings.
pub trait BindingStore {
    /// The bound event, or `None` if the surface was never configured.
    fn get_binding(&self, surface_id: SurfaceId) -> Result<Option<EventId>>;

    /// Bind a surface, replacing any previous binding.
    fn set_binding(&mut self, surface_id: SurfaceId, event_id: EventId) -> Result<()>;

    /// Forget a surface's binding. No-op when it has none.
    fn clear_binding(&mut self, surface_id: SurfaceId) -> Result<()>;
}

/// In-process binding store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryBindingStore {
    bindings: BTreeMap<SurfaceId, EventId>,
}

impl MemoryBindingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl BindingStore for MemoryBindingStore {
    fn get_binding(&self, surface_id: SurfaceId) -> Result<Option<EventId>> {
        Ok(self.bindings.get(&surface_id).copied())
    }

    fn set_binding(&mut self, surface_id: SurfaceId, event_id: EventId) -> Result<()> {
        self.bindings.insert(surface_id, event_id);
        Ok(())
    }

    fn clear_binding(&mut self, surface_id: SurfaceId) -> Result<()> {
        self.bindings.remove(&surface_id);
        Ok(())
    }
}

/// Binding store kept as a JSON object on disk.
///
/// Each binding is stored under `widget_event_{surface_id}`. Other keys in
/// the file are preserved. A negative stored value is the legacy "unset"
/// marker and reads as unbound, so negative event ids cannot be bound here.
///
/// Every write replaces the whole file through a sibling temporary file, so a
/// failed write leaves the previous contents in place.
#[derive(Debug, Clone)]
pub struct FileBindingStore {
    path: PathBuf,
}

impl FileBindingStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every well-formed binding in the file, ordered by surface id.
    pub fn entries(&self) -> Result<BTreeMap<SurfaceId, EventId>> {
        let map = self.load()?;
        Ok(map
            .iter()
            .filter_map(|(key, value)| {
                let surface_id = key.strip_prefix(KEY_PREFIX)?.parse::<SurfaceId>().ok()?;
                let event_id = bound_event(value)?;
                Some((surface_id, event_id))
            })
            .collect())
    }

    fn load(&self) -> Result<Map<String, Value>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(e.into()),
        };
        if raw.trim().is_empty() {
            return Ok(Map::new());
        }
        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(self.store_error("expected a JSON object of bindings")),
            Err(e) => Err(self.store_error(&e.to_string())),
        }
    }

    fn save(&self, map: &Map<String, Value>) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(map)?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        if let Err(e) = fs::write(&tmp, contents).and_then(|()| fs::rename(&tmp, &self.path)) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }

    fn store_error(&self, message: &str) -> CountdownError {
        CountdownError::Store {
            path: self.path.clone(),
            message: message.to_string(),
        }
    }
}

impl BindingStore for FileBindingStore {
    fn get_binding(&self, surface_id: SurfaceId) -> Result<Option<EventId>> {
        let map = self.load()?;
        Ok(map.get(&binding_key(surface_id)).and_then(bound_event))
    }

    fn set_binding(&mut self, surface_id: SurfaceId, event_id: EventId) -> Result<()> {
        if event_id < 0 {
            return Err(self.store_error(&format!(
                "event id {event_id} is negative; negative values mark an unset binding"
            )));
        }
        let mut map = self.load()?;
        map.insert(binding_key(surface_id), Value::from(event_id));
        self.save(&map)?;
        tracing::debug!(surface_id, event_id, path = %self.path.display(), "binding saved");
        Ok(())
    }

    fn clear_binding(&mut self, surface_id: SurfaceId) -> Result<()> {
        let mut map = self.load()?;
        if map.remove(&binding_key(surface_id)).is_some() {
            self.save(&map)?;
            tracing::debug!(surface_id, path = %self.path.display(), "binding cleared");
        }
        Ok(())
    }
}

const KEY_PREFIX: &str = "widget_event_";

fn binding_key(surface_id: SurfaceId) -> String {
    format!("{KEY_PREFIX}{surface_id}")
}

fn bound_event(value: &Value) -> Option<EventId> {
    coerce_int(value).filter(|id| *id >= 0)
}
