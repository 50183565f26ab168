//! Fixed 1×1 PNG images and data URL helpers

use base64::{Engine as _, engine::general_purpose};

/// Prefix every image URL returned by the service carries
pub const PNG_DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// Fully transparent pixel
pub const TRANSPARENT_PNG: &str = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAAC0lEQVR42mNgAAIAAAUAAen63NgAAAAASUVORK5CYII=";

/// Opaque red pixel
pub const RED_PNG: &str = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mP4z8DwHwAFAAH/VscvDQAAAABJRU5ErkJggg==";

/// Opaque green pixel
pub const GREEN_PNG: &str = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNg+M/wHwAEAQH/rrVV9QAAAABJRU5ErkJggg==";

/// Opaque blue pixel
pub const BLUE_PNG: &str = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNgYPj/HwADAgH/OSkZvgAAAABJRU5ErkJggg==";

/// Number of images substituted when a backend produces none
pub const PLACEHOLDER_COUNT: usize = 3;

/// PNG data URL for already base64-encoded data
pub fn png_data_url(base64_payload: &str) -> String {
    format!("{}{}", PNG_DATA_URL_PREFIX, base64_payload)
}

/// PNG data URL for raw image bytes
pub fn png_data_url_from_bytes(bytes: &[u8]) -> String {
    png_data_url(&general_purpose::STANDARD.encode(bytes))
}

/// The gallery returned when a real backend yields no images
pub fn transparent_placeholders() -> Vec<String> {
    vec![png_data_url(TRANSPARENT_PNG); PLACEHOLDER_COUNT]
}

/// Red, green and blue squares, in that order
pub fn rgb_placeholders() -> Vec<String> {
    [RED_PNG, GREEN_PNG, BLUE_PNG]
        .iter()
        .map(|payload| png_data_url(payload))
        .collect()
}
