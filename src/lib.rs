pub mod blame;
pub mod color;
pub mod decorate;
pub mod error;
pub mod settings;

use wasm_bindgen::prelude::*;

pub use blame::{BlameMap, BlameParser, BlameRecord};
pub use color::{ColorMapper, ColoringStrategy, LineColors, Rgb};
pub use decorate::{DecorationDirective, DecorationSet, Decorator, GutterStyle};
pub use error::{Error, Result};
pub use settings::{ColorStyle, DateFormat, Settings};

// ---------------------------------------------------------------------------
// JSON wrappers for results crossing the WASM boundary.
// ---------------------------------------------------------------------------

#[derive(serde::Serialize)]
struct ErrorResult {
    error: String,
}

#[derive(serde::Serialize)]
struct ValidationResult {
    warnings: Vec<String>,
}

fn json_error(msg: &str) -> String {
    serde_json::to_string(&ErrorResult {
        error: msg.to_string(),
    })
    .unwrap_or_else(|_| format!("{{\"error\":\"{}\"}}", msg))
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| json_error(&format!("Serialization error: {}", e)))
}

// ---------------------------------------------------------------------------
// WASM-exported functions
// ---------------------------------------------------------------------------

/// Parse raw `git blame --line-porcelain` output into JSON.
///
/// Returns: JSON object keyed by 1-based line number, each value a
/// BlameRecord. Lines without complete metadata are absent.
#[wasm_bindgen]
pub fn parse_blame(raw_blame: &[u8]) -> String {
    to_json(&blame::parse_line_porcelain(raw_blame))
}

/// Compute gutter decorations for one file from its raw blame output.
///
/// `line_count` is the editor's current line count, `settings_json` the
/// extension settings object, `now_secs` the current unix time.
/// Returns: JSON DecorationSet `{ gutter, directives }`, or `{ error }` when
/// the settings cannot be read.
#[wasm_bindgen]
pub fn compute_decorations(raw_blame: &[u8], line_count: u32, settings_json: &str, now_secs: u64) -> String {
    let settings = match Settings::from_json(settings_json) {
        Ok(s) => s,
        Err(e) => return json_error(&e.to_string()),
    };

    let mut decorator = Decorator::new(settings);
    decorator.set_enabled(true);

    let records = blame::parse_line_porcelain(raw_blame);
    let now = i64::try_from(now_secs).unwrap_or(i64::MAX);

    to_json(&DecorationSet {
        gutter: decorator.gutter(),
        directives: decorator.decorate(&records, line_count, now),
    })
}

/// Check settings once at load time.
///
/// Returns: `{ warnings: [..] }` listing every color rule or anchor color
/// that will be skipped, or `{ error }` when the JSON itself is invalid.
#[wasm_bindgen]
pub fn validate_settings(settings_json: &str) -> String {
    match Settings::from_json(settings_json) {
        Ok(settings) => {
            let (_, warnings) = ColorMapper::from_settings_with_warnings(&settings);
            to_json(&ValidationResult {
                warnings: warnings.iter().map(|w| w.to_string()).collect(),
            })
        }
        Err(e) => json_error(&e.to_string()),
    }
}

/// Pick black or white text for a `#rrggbb` background.
///
/// Returns: JSON string such as `"#000000"`, or `{ error }`.
#[wasm_bindgen]
pub fn text_color(background: &str) -> String {
    match Rgb::from_hex(background) {
        Ok(bg) => to_json(&color::text_color_for(bg).to_hex()),
        Err(e) => json_error(&e.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_LINES: &[u8] = b"abcdef0123456789abcdef0123456789abcdef01 1 1 1\nauthor Alice\nauthor-mail <alice@example.com>\ncommitter-time 1000000000\nsummary fix: bug\nfilename src/main.rs\n\tfn main() {\n0123456789abcdef0123456789abcdef01234567 2 2 1\nauthor Bob\nauthor-mail <bob@example.com>\ncommitter-time 1000086400\nsummary feat: new\nfilename src/main.rs\n\t}\n";

    #[test]
    fn test_parse_blame_wasm() {
        let parsed: serde_json::Value = serde_json::from_str(&parse_blame(TWO_LINES)).unwrap();
        assert_eq!(parsed["1"]["author"], "Alice");
        assert_eq!(parsed["1"]["timestamp"], 1_000_000_000);
        assert_eq!(parsed["1"]["subject"], "fix: bug");
        assert_eq!(parsed["2"]["author"], "Bob");
        assert_eq!(parsed["2"]["subject"], "feat: new");
        assert!(parsed.get("3").is_none());
    }

    #[test]
    fn test_compute_decorations_wasm() {
        let result = compute_decorations(TWO_LINES, 2, "{}", 1_000_086_400);
        let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();
        assert_eq!(parsed["gutter"]["width"], "250px");
        let directives = parsed["directives"].as_array().unwrap();
        assert_eq!(directives.len(), 2);
        assert_eq!(directives[0]["lineNumber"], 1);
        assert_eq!(directives[0]["backgroundColor"], "#821717");
        assert_eq!(directives[0]["textColor"], "#ffffff");
        assert_eq!(directives[1]["backgroundColor"], "#d4d7f7");
        assert_eq!(directives[1]["textColor"], "#000000");
        assert!(directives[1]["text"].as_str().unwrap().ends_with(" Bob"));
    }

    #[test]
    fn test_compute_decorations_bad_settings() {
        let parsed: serde_json::Value =
            serde_json::from_str(&compute_decorations(TWO_LINES, 2, "{\"style\":\"rainbow\"}", 0)).unwrap();
        assert!(parsed.get("error").is_some());
    }

    #[test]
    fn test_validate_settings_wasm() {
        let ok: serde_json::Value = serde_json::from_str(&validate_settings("{}")).unwrap();
        assert_eq!(ok["warnings"].as_array().unwrap().len(), 0);

        let bad: serde_json::Value = serde_json::from_str(&validate_settings(
            r#"{"colorConfigs":[{"regex":"[oops","hue":10},{"regex":"^fix","hue":0}]}"#,
        ))
        .unwrap();
        let warnings = bad["warnings"].as_array().unwrap();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].as_str().unwrap().contains("[oops"));
    }

    #[test]
    fn test_text_color_wasm() {
        assert_eq!(text_color("#ffffff"), "\"#000000\"");
        assert_eq!(text_color("#1e3a5f"), "\"#ffffff\"");
        let err: serde_json::Value = serde_json::from_str(&text_color("blue")).unwrap();
        assert!(err.get("error").is_some());
    }
}
