use std::sync::OnceLock;

use rust_embed::RustEmbed;
use tracing::warn;

/// Embed the entire `assets/` directory into the binary.
#[derive(RustEmbed)]
#[folder = "assets"]
struct EmbeddedAssets;

pub const SHIPMENTS_PATH: &str = "/assets/data/shipments.json";
pub const RATES_PATH: &str = "/assets/data/rates.json";

static MAIN_CSS: OnceLock<String> = OnceLock::new();

/// Returns the contents of `assets/main.css` as a static string.
pub fn main_css() -> &'static str {
    MAIN_CSS
        .get_or_init(|| {
            load_text("/assets/main.css").unwrap_or_else(|| {
                warn!("stylesheet missing from embedded assets");
                String::new()
            })
        })
        .as_str()
}

/// Raw JSON for the shipment catalog.
pub fn shipments_json() -> Option<String> {
    load_text(SHIPMENTS_PATH)
}

/// Raw JSON for the per-tier rate table.
pub fn rates_json() -> Option<String> {
    load_text(RATES_PATH)
}

fn load_text(path: &str) -> Option<String> {
    let canonical = canonical_asset_path(path);
    let asset = EmbeddedAssets::get(&canonical)?;
    String::from_utf8(asset.data.into_owned()).ok()
}

fn canonical_asset_path(path: &str) -> String {
    let trimmed = path.trim_start_matches('/');
    if let Some(rest) = trimmed.strip_prefix("assets/") {
        rest.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_paths_drop_asset_prefix() {
        assert_eq!(canonical_asset_path("/assets/data/rates.json"), "data/rates.json");
        assert_eq!(canonical_asset_path("main.css"), "main.css");
    }

    #[test]
    fn seed_files_are_embedded() {
        assert!(shipments_json().is_some());
        assert!(rates_json().is_some());
        assert!(load_text("/assets/nope.json").is_none());
    }
}
