//! Centers images by wrapping each `<img>` tag in a paragraph.
//!
//! Tags are found with a non-greedy regular expression, not an HTML parser:
//!
//! - the match runs from a literal `<img` to the first `>` after it, so a
//!   `>` inside a quoted attribute value cuts the tag short;
//! - matching is case-sensitive, `<IMG>` is left alone;
//! - `.` does not cross line breaks, so a tag split over several lines is
//!   left alone;
//! - applying the filter twice nests the paragraphs.

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use tera::{Value, to_value, try_get_value};

static IMG_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<img(.*?)>").unwrap());

const WRAPPED_TAG: &str = r#"<p align="middle">${0}</p>"#;

/// Wrap every `<img ...>` tag in `input` with `<p align="middle">...</p>`.
///
/// Text outside the matched tags is returned untouched. When nothing
/// matches, the input is borrowed back without allocating.
pub fn wrap_images(input: &str) -> Cow<'_, str> {
    IMG_TAG.replace_all(input, WRAPPED_TAG)
}

/// Tera adapter for [`wrap_images`]. Takes no arguments.
pub fn wrap_images_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let html = try_get_value!("wrap_images", "value", String, value);
    Ok(to_value(wrap_images(&html))?)
}
