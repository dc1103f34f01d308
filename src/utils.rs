use crate::config::{MAX_INTERVAL_SECS, MIN_INTERVAL_SECS};
use coach_colour::Colour;
use once_cell::sync::Lazy;
use regex::Regex;

// Compiled regexes for interval input parsing
static SECS_SUFFIX_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+(?:\.\d+)?)s$").unwrap());
static MS_SUFFIX_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)ms$").unwrap());

/// Parse an interval field to seconds.
///
/// Supported formats:
/// - Plain number: "1.5" (seconds)
/// - Seconds suffix: "1.5s"
/// - Milliseconds suffix: "1500ms"
pub fn parse_seconds(input: &str) -> Result<f64, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("Interval cannot be empty".to_string());
    }

    if let Some(captures) = MS_SUFFIX_REGEX.captures(trimmed) {
        let ms: f64 = captures[1]
            .parse()
            .map_err(|_| "Invalid milliseconds value".to_string())?;
        return Ok(ms / 1000.0);
    }

    if let Some(captures) = SECS_SUFFIX_REGEX.captures(trimmed) {
        return captures[1]
            .parse()
            .map_err(|_| "Invalid seconds value".to_string());
    }

    trimmed
        .parse::<f64>()
        .map_err(|_| "Use a number of seconds like 1.5, 1.5s, or 1500ms".to_string())
}

/// Validate one interval bound from its text field.
pub fn validate_interval_secs(input: &str, field_name: &str) -> Result<f64, String> {
    let secs = parse_seconds(input)?;
    if !secs.is_finite() {
        return Err(format!("{} must be a valid number", field_name));
    }
    if secs < MIN_INTERVAL_SECS {
        return Err(format!(
            "{} must be at least {}s",
            field_name, MIN_INTERVAL_SECS
        ));
    }
    if secs > MAX_INTERVAL_SECS {
        return Err(format!(
            "{} cannot exceed {}s",
            field_name, MAX_INTERVAL_SECS
        ));
    }
    Ok(secs)
}

/// Text colour that stays readable on the given background; `None` is the
/// neutral (dark) background.
pub fn contrast_text(background: Option<Colour>) -> &'static str {
    match background {
        Some(colour) => {
            let (r, g, b) = colour.rgb();
            let brightness =
                (u32::from(r) * 299 + u32::from(g) * 587 + u32::from(b) * 114) / 1000;
            if brightness > 130 {
                "#000"
            } else {
                "#fff"
            }
        }
        None => "#fff",
    }
}

/// Today as `YYYY-MM-DD`, for export filenames.
pub fn today_iso_date() -> String {
    let iso = String::from(js_sys::Date::new_0().to_iso_string());
    iso.chars().take(10).collect()
}

/// Offer `contents` as a JSON file download via a transient anchor element.
pub fn download_json(filename: &str, contents: &str) {
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

    let parts = js_sys::Array::of1(&JsValue::from_str(contents));
    let options = BlobPropertyBag::new();
    options.set_type("application/json");

    let blob = match Blob::new_with_str_sequence_and_options(&parts, &options) {
        Ok(blob) => blob,
        Err(err) => {
            log::warn!("export: failed to build blob: {:?}", err);
            return;
        }
    };
    let url = match Url::create_object_url_with_blob(&blob) {
        Ok(url) => url,
        Err(err) => {
            log::warn!("export: failed to create object url: {:?}", err);
            return;
        }
    };

    let document = gloo_utils::document();
    match document.create_element("a") {
        Ok(element) => {
            let anchor: HtmlAnchorElement = element.unchecked_into();
            anchor.set_href(&url);
            anchor.set_download(filename);
            anchor.click();
        }
        Err(err) => log::warn!("export: failed to create anchor: {:?}", err),
    }
    let _ = Url::revoke_object_url(&url);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_numbers_as_seconds() {
        assert_eq!(parse_seconds("2"), Ok(2.0));
        assert_eq!(parse_seconds(" 1.5 "), Ok(1.5));
    }

    #[test]
    fn parses_suffixed_formats() {
        assert_eq!(parse_seconds("2s"), Ok(2.0));
        assert_eq!(parse_seconds("1.5s"), Ok(1.5));
        assert_eq!(parse_seconds("1500ms"), Ok(1.5));
    }

    #[test]
    fn rejects_junk() {
        assert!(parse_seconds("").is_err());
        assert!(parse_seconds("fast").is_err());
        assert!(parse_seconds("1.5m").is_err());
    }

    #[test]
    fn validates_against_interval_bounds() {
        assert_eq!(validate_interval_secs("1.5", "Min interval"), Ok(1.5));
        assert!(validate_interval_secs("0", "Min interval").is_err());
        assert!(validate_interval_secs("0.05", "Min interval").is_err());
        assert!(validate_interval_secs("61", "Max interval").is_err());
    }

    #[test]
    fn contrast_follows_brightness() {
        assert_eq!(contrast_text(Some(Colour::Red)), "#fff");
        assert_eq!(contrast_text(Some(Colour::Blue)), "#fff");
        assert_eq!(contrast_text(Some(Colour::Green)), "#000");
        assert_eq!(contrast_text(Some(Colour::Yellow)), "#000");
        assert_eq!(contrast_text(None), "#fff");
    }
}
