use std::{borrow::Cow, sync::OnceLock};

use rust_embed::RustEmbed;
use thiserror::Error;
use tracing::warn;

/// Embed the entire `assets/` directory into the binary.
#[derive(RustEmbed)]
#[folder = "assets"]
struct EmbeddedAssets;

static MAIN_CSS: OnceLock<String> = OnceLock::new();
static TAILWIND_CSS: OnceLock<String> = OnceLock::new();
static FAVICON_DATA_URI: OnceLock<String> = OnceLock::new();

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssetError {
    #[error("embedded asset {0} not found")]
    Missing(String),
    #[error("embedded asset {0} is not valid UTF-8")]
    NotUtf8(String),
}

/// Returns the contents of `assets/main.css`.
pub fn main_css() -> &'static str {
    MAIN_CSS
        .get_or_init(|| text_or_empty("/assets/main.css"))
        .as_str()
}

/// Returns the compiled Tailwind stylesheet, or an empty string if it has
/// not been generated into `assets/` yet.
pub fn tailwind_css() -> &'static str {
    TAILWIND_CSS
        .get_or_init(|| text_or_empty("/assets/tailwind.css"))
        .as_str()
}

/// Returns a data URI for the favicon.
pub fn favicon_data_uri() -> &'static str {
    FAVICON_DATA_URI
        .get_or_init(|| match load_asset("/assets/favicon.svg") {
            Ok(asset) => data_uri("/assets/favicon.svg", asset.as_ref()),
            Err(err) => {
                warn!("{err}");
                String::new()
            }
        })
        .as_str()
}

fn text_or_empty(path: &str) -> String {
    load_text(path).unwrap_or_else(|err| {
        warn!("{err}");
        String::new()
    })
}

fn load_text(path: &str) -> Result<String, AssetError> {
    let asset = load_asset(path)?;
    String::from_utf8(asset.into_owned()).map_err(|_| AssetError::NotUtf8(path.to_string()))
}

fn load_asset(path: &str) -> Result<Cow<'static, [u8]>, AssetError> {
    let canonical = canonical_asset_path(path);
    EmbeddedAssets::get(&canonical)
        .map(|file| file.data)
        .ok_or_else(|| AssetError::Missing(path.to_string()))
}

fn data_uri(path: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", guess_mime(path), encode_base64(bytes))
}

fn canonical_asset_path(path: &str) -> String {
    let trimmed = path.trim_start_matches('/');
    if let Some(rest) = trimmed.strip_prefix("assets/") {
        rest.to_string()
    } else {
        trimmed.to_string()
    }
}

fn guess_mime(path: &str) -> &'static str {
    if path.ends_with(".css") {
        "text/css"
    } else if path.ends_with(".svg") {
        "image/svg+xml"
    } else if path.ends_with(".ico") {
        "image/x-icon"
    } else if path.ends_with(".png") {
        "image/png"
    } else {
        "application/octet-stream"
    }
}

fn encode_base64(input: &[u8]) -> String {
    const TABLE: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
    let mut output = String::with_capacity((input.len() + 2) / 3 * 4);

    for chunk in input.chunks(3) {
        let b0 = chunk[0];
        let b1 = *chunk.get(1).unwrap_or(&0);
        let b2 = *chunk.get(2).unwrap_or(&0);

        output.push(TABLE[(b0 >> 2) as usize] as char);
        output.push(TABLE[(((b0 & 0b11) << 4) | (b1 >> 4)) as usize] as char);

        if chunk.len() > 1 {
            output.push(TABLE[(((b1 & 0b1111) << 2) | (b2 >> 6)) as usize] as char);
        } else {
            output.push('=');
        }

        if chunk.len() > 2 {
            output.push(TABLE[(b2 & 0b0011_1111) as usize] as char);
        } else {
            output.push('=');
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base64_padding() {
        assert_eq!(encode_base64(b"M"), "TQ==");
        assert_eq!(encode_base64(b"Ma"), "TWE=");
        assert_eq!(encode_base64(b"Man"), "TWFu");
    }

    #[test]
    fn asset_paths_are_relative_to_the_folder() {
        assert_eq!(canonical_asset_path("/assets/main.css"), "main.css");
        assert_eq!(canonical_asset_path("favicon.svg"), "favicon.svg");
    }

    #[test]
    fn missing_asset_is_an_error() {
        assert_eq!(
            load_asset("/assets/nope.bin").map(|_| ()),
            Err(AssetError::Missing("/assets/nope.bin".to_string()))
        );
    }

    #[test]
    fn bundled_stylesheet_loads() {
        assert!(load_text("/assets/main.css").is_ok());
    }
}
