use std::{borrow::Cow, sync::OnceLock};

use rust_embed::RustEmbed;

/// Stylesheet and bundled catalog shipped inside the binary.
#[derive(RustEmbed)]
#[folder = "assets"]
struct EmbeddedAssets;

pub const CATALOG_ASSET: &str = "/assets/catalog.json";

static MAIN_CSS: OnceLock<String> = OnceLock::new();

/// Contents of `assets/main.css`, empty if the stylesheet was not bundled.
pub fn main_css() -> &'static str {
    MAIN_CSS
        .get_or_init(|| {
            load_text("/assets/main.css").unwrap_or_else(|| {
                tracing::warn!("Embedded stylesheet missing; rendering unstyled");
                String::new()
            })
        })
        .as_str()
}

/// Reads an embedded UTF-8 asset. `path` may carry a leading `/assets/`.
pub fn load_text(path: &str) -> Option<String> {
    let bytes = load_asset(path)?;
    String::from_utf8(bytes.into_owned()).ok()
}

fn load_asset(path: &str) -> Option<Cow<'static, [u8]>> {
    EmbeddedAssets::get(&canonical_asset_path(path)).map(|file| file.data)
}

fn canonical_asset_path(path: &str) -> String {
    let trimmed = path.trim_start_matches('/');
    if let Some(rest) = trimmed.strip_prefix("assets/") {
        rest.to_string()
    } else {
        trimmed.to_string()
    }
}
