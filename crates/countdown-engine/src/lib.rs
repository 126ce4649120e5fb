//! # countdown-engine
//!
//! Resolution and render-state engine for countdown display surfaces.
//!
//! A host places any number of surfaces, each optionally bound to one event
//! from a list the main application publishes. Given that list, a surface's
//! binding and the application's Global Defaults, the engine computes the exact
//! text fields to draw and the event id to open on interaction. Resolution is a
//! pure function and never fails; degraded input falls back tier by tier.
//!
//! ## Quick start
//!
//! ```rust
//! use countdown_engine::{render_surface, BindingStore, MemoryBindingStore, SharedSnapshot};
//!
//! let data = SharedSnapshot::from_json(r#"{
//!     "event_name": "倒数日",
//!     "all_events": "[{\"id\":1,\"name\":\"Birthday\",\"days\":5},{\"id\":2,\"name\":\"Exam\",\"days\":-3}]"
//! }"#);
//!
//! let mut store = MemoryBindingStore::new();
//! store.set_binding(10, 2).unwrap();
//!
//! let model = render_surface(10, &store, &data);
//! assert_eq!(model.display_name, "Exam");
//! assert_eq!(model.display_days, 3);
//! assert_eq!(model.label.as_str(), "elapsed");
//! assert_eq!(model.deep_link("app"), "app://event/2");
//! ```
//!
//! ## Modules
//!
//! - [`event`] — `Event`, `GlobalDefaults` and lenient list decoding
//! - [`shared`] — `SharedData` provider over the host's key-value store
//! - [`resolver`] — `resolve` and `render_surface`
//! - [`label`] — Label Policy and localized vocabularies
//! - [`render`] — `RenderModel`, localized views, deep links
//! - [`binding`] — `BindingStore` with memory and JSON-file backends
//! - [`picker`] — configuration list and `configure_surface`
//! - [`error`] — Error types

pub mod binding;
pub mod error;
pub mod event;
pub mod label;
pub mod picker;
pub mod render;
pub mod resolver;
pub mod shared;

pub use binding::{BindingStore, FileBindingStore, MemoryBindingStore};
pub use error::CountdownError;
pub use event::{decode_events, Event, EventId, GlobalDefaults, SurfaceId};
pub use label::{Label, Vocabulary};
pub use picker::{choices, configure_surface, Choice};
pub use render::{deep_link, LocalizedView, RenderLabel, RenderModel};
pub use resolver::{render_surface, resolve};
pub use shared::{SharedData, SharedSnapshot};
