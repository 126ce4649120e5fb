//! WASM bindings for countdown-engine.
//!
//! Lets a JavaScript host render surfaces and build the configuration list.
//! All structured values cross the boundary as JSON strings, and bindings are
//! kept by the host and passed in per call.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p countdown-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir pkg/ \
//!   target/wasm32-unknown-unknown/release/countdown_engine_wasm.wasm
//! ```

use countdown_engine::event::int_from_f64;
use countdown_engine::label::Vocabulary;
use countdown_engine::render::{LocalizedView, RenderModel, DEFAULT_SCHEME};
use countdown_engine::{Choice, GlobalDefaults, SharedSnapshot};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Output DTO
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct SurfaceDto {
    model: RenderModel,
    view: LocalizedView,
    deep_link: String,
}

fn surface_dto(model: RenderModel, locale: Option<&str>, scheme: Option<&str>) -> SurfaceDto {
    let vocab = vocabulary(locale);
    SurfaceDto {
        view: model.localized(&vocab),
        deep_link: model.deep_link(scheme.unwrap_or(DEFAULT_SCHEME)),
        model,
    }
}

/// Unknown or absent locales use the default vocabulary.
fn vocabulary(locale: Option<&str>) -> Vocabulary {
    locale.and_then(Vocabulary::for_locale).unwrap_or_default()
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Resolve one surface from a dump of the host's shared store.
///
/// `store_json` is the object holding `event_name`, `event_days`, `event_date`,
/// `event_label`, `event_id` and `all_events`. `binding` is the surface's bound
/// event id, if any; fractions truncate toward zero and a value with no `i64`
/// equivalent counts as unbound. Returns `{model, view, deep_link}` as JSON.
///
/// Never throws on bad store data; it renders the fallback instead.
#[wasm_bindgen(js_name = "renderSurface")]
pub fn render_surface(
    store_json: &str,
    binding: Option<f64>,
    locale: Option<String>,
    scheme: Option<String>,
) -> Result<String, JsValue> {
    let snapshot = SharedSnapshot::from_json(store_json);
    let model = countdown_engine::resolve(
        &snapshot.events,
        binding.and_then(int_from_f64),
        &snapshot.defaults,
    );
    to_json(&surface_dto(model, locale.as_deref(), scheme.as_deref()))
}

/// Resolve from an event list and a Global Defaults object given separately.
///
/// `events_json` is decoded leniently. `defaults_json` may omit fields, which
/// take built-in values; it throws only if it is not a JSON object of the
/// expected field types.
#[wasm_bindgen(js_name = "resolve")]
pub fn resolve(
    events_json: &str,
    binding: Option<f64>,
    defaults_json: &str,
) -> Result<String, JsValue> {
    let events = countdown_engine::decode_events(events_json);
    let defaults: GlobalDefaults = serde_json::from_str(defaults_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid defaults JSON: {}", e)))?;

    let model = countdown_engine::resolve(&events, binding.and_then(int_from_f64), &defaults);
    to_json(&model)
}

/// Build the configuration list for the event list in `events_json`.
///
/// Returns a JSON array of `{event_id, title}`; empty means there is nothing
/// to choose from.
#[wasm_bindgen(js_name = "listChoices")]
pub fn list_choices(events_json: &str, locale: Option<String>) -> Result<String, JsValue> {
    let events = countdown_engine::decode_events(events_json);
    let list: Vec<Choice> = countdown_engine::choices(&events, &vocabulary(locale.as_deref()));
    to_json(&list)
}
