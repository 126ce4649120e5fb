//! Configuration action: list events for a surface and persist the choice.

use serde::Serialize;

use crate::binding::BindingStore;
use crate::error::Result;
use crate::event::{Event, EventId, SurfaceId};
use crate::label::Vocabulary;

/// One selectable entry in the configuration list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub event_id: EventId,
    /// `"{name} ({suffix})"`, e.g. `Exam (已过3天)`.
    pub title: String,
}

/// Build the configuration list in stored order. Empty means "no events".
pub fn choices(events: &[Event], vocab: &Vocabulary) -> Vec<Choice> {
    events
        .iter()
        .map(|event| Choice {
            event_id: event.id,
            title: format!("{} ({})", event.name, vocab.suffix(event.days)),
        })
        .collect()
}

/// Persist the user's selection for a surface.
///
/// On error the surface keeps its previous binding. The caller re-renders the
/// surface after a successful call.
pub fn configure_surface<S>(store: &mut S, surface_id: SurfaceId, event_id: EventId) -> Result<()>
where
    S: BindingStore + ?Sized,
{
    store.set_binding(surface_id, event_id).inspect_err(|e| {
        tracing::warn!(surface_id, event_id, "failed to save surface binding: {e}");
    })?;
    tracing::info!(surface_id, event_id, "surface configured");
    Ok(())
}
