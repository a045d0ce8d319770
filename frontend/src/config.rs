use gloo_utils::window;
use wheel_shared::variants::{resolve_variant, VariantId};

pub const CANVAS_SIZE: u32 = 400;
pub const WHEEL_MARGIN: f64 = 30.0; // Room around the rim for the pointer
pub const VARIANT_QUERY_KEY: &str = "variant";

/// Reads `?variant=<name>` from the current location, if present.
pub fn variant_from_query() -> Option<VariantId> {
    let search = window().location().search().ok()?;
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == VARIANT_QUERY_KEY)
        .map(|(_, value)| resolve_variant(value))
}

/// Milliseconds on the same timeline as `requestAnimationFrame` timestamps.
pub fn now_ms() -> f64 {
    window().performance().map(|p| p.now()).unwrap_or(0.0)
}
