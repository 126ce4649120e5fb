//! Event Resolver: pick the record a surface shows and derive its Render Model.
//!
//! Fallback tiers, first match wins:
//!
//! 1. the event whose id matches the surface's binding (earliest in list order)
//! 2. the first event in the list
//! 3. the Global Defaults, with their label passed through unchanged
//!
//! A binding that matches nothing drops to tier 2, so a dangling binding
//! renders exactly like an unbound surface.

use crate::binding::BindingStore;
use crate::event::{Event, EventId, GlobalDefaults, SurfaceId};
use crate::label::Label;
use crate::render::{RenderLabel, RenderModel};
use crate::shared::SharedData;

/// Compute the Render Model for one surface. Pure and total.
///
/// ```
/// use countdown_engine::{resolve, Event, GlobalDefaults};
///
/// let events = vec![Event::new(1, "Birthday", 5, "2025-06-01")];
/// let model = resolve(&events, None, &GlobalDefaults::default());
/// assert_eq!(model.display_name, "Birthday");
/// assert_eq!(model.label.as_str(), "remaining");
/// assert_eq!(model.target_event_id, 1);
/// ```
pub fn resolve(
    events: &[Event],
    binding: Option<EventId>,
    defaults: &GlobalDefaults,
) -> RenderModel {
    let bound = binding.and_then(|id| {
        let found = events.iter().find(|e| e.id == id);
        if found.is_none() {
            tracing::debug!(event_id = id, "binding does not match any event, falling back");
        }
        found
    });

    match bound.or_else(|| events.first()) {
        Some(event) => from_event(event),
        None => from_defaults(defaults),
    }
}

/// Look up the surface's binding, read the shared data and resolve.
///
/// A failing binding read is logged and treated as unbound; rendering always
/// produces a model.
pub fn render_surface<S, D>(surface_id: SurfaceId, store: &S, data: &D) -> RenderModel
where
    S: BindingStore + ?Sized,
    D: SharedData + ?Sized,
{
    let binding = match store.get_binding(surface_id) {
        Ok(binding) => binding,
        Err(e) => {
            tracing::warn!(surface_id, "binding lookup failed, rendering unbound: {e}");
            None
        }
    };
    resolve(&data.events(), binding, &data.defaults())
}

fn from_event(event: &Event) -> RenderModel {
    RenderModel {
        display_name: event.name.clone(),
        display_days: event.days.unsigned_abs(),
        show_unit: event.days != 0,
        label: RenderLabel::Policy(Label::for_days(event.days)),
        date: event.date.clone(),
        target_event_id: event.id,
    }
}

fn from_defaults(defaults: &GlobalDefaults) -> RenderModel {
    RenderModel {
        display_name: defaults.name.clone(),
        display_days: defaults.days.unsigned_abs(),
        show_unit: defaults.days != 0,
        label: RenderLabel::Supplied(defaults.label.clone()),
        date: defaults.date.clone(),
        target_event_id: defaults.id,
    }
}
