//! Shared page-extraction helpers for the crawlers

use scraper::{Html, Selector};
use serde_json::Value;
use url::Url;

use crate::http::HttpClient;

/// Fetch a page as text; any transport failure collapses to `None`
pub(crate) async fn fetch_page(http: &dyn HttpClient, url: &Url) -> Option<String> {
    let bytes = http.get(url.as_str(), &[], None).await.ok()?;
    Some(String::from_utf8_lossy(&bytes).into_owned())
}

/// Content of the first `<meta>` tag whose `property` or `name` matches
pub(crate) fn meta_content(html: &Html, key: &str) -> Option<String> {
    let selector =
        Selector::parse(&format!(r#"meta[property="{key}"], meta[name="{key}"]"#)).ok()?;
    html.select(&selector)
        .find_map(|element| element.attr("content"))
        .map(|content| {
            html_escape::decode_html_entities(content)
                .trim()
                .to_string()
        })
        .filter(|content| !content.is_empty())
}

/// Attribute of the first element matching a CSS selector
pub(crate) fn element_attr(html: &Html, selector: &str, attr: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    html.select(&selector)
        .find_map(|element| element.attr(attr))
        .map(str::to_owned)
        .filter(|value| !value.is_empty())
}

/// First JSON-LD object on the page with the given `@type`
///
/// Handles plain objects, top-level arrays and `@graph` containers.
pub(crate) fn json_ld_of_type(html: &Html, type_name: &str) -> Option<Value> {
    let selector = Selector::parse(r#"script[type="application/ld+json"]"#).ok()?;
    html.select(&selector).find_map(|element| {
        let text: String = element.text().collect();
        let value: Value = serde_json::from_str(&text).ok()?;
        find_typed_object(&value, type_name)
    })
}

fn find_typed_object(value: &Value, type_name: &str) -> Option<Value> {
    match value {
        Value::Object(map) => {
            if map.get("@type").and_then(Value::as_str) == Some(type_name) {
                return Some(value.clone());
            }
            map.get("@graph")
                .and_then(|graph| find_typed_object(graph, type_name))
        }
        Value::Array(items) => items
            .iter()
            .find_map(|item| find_typed_object(item, type_name)),
        _ => None,
    }
}

/// Parse a duration string into seconds
///
/// Accepts plain integers, `MM:SS`, `HH:MM:SS` and ISO-8601 `PTnHnMnS`
/// forms (the latter is what JSON-LD episode blocks carry).
pub(crate) fn parse_duration_seconds(s: &str) -> Option<u32> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(seconds) = s.parse::<u64>() {
        return u32::try_from(seconds).ok();
    }
    if s.contains(':') {
        return parse_colon_format(s);
    }
    parse_iso8601(s)
}

fn parse_colon_format(s: &str) -> Option<u32> {
    let parts: Vec<&str> = s.split(':').collect();
    // values come from arbitrary third-party HTML, so overflow is invalid
    // input, not a panic
    let total = match parts.len() {
        2 => {
            let mins: u64 = parts[0].parse().ok()?;
            let secs: u64 = parts[1].parse().ok()?;
            mins.checked_mul(60)?.checked_add(secs)?
        }
        3 => {
            let hours: u64 = parts[0].parse().ok()?;
            let mins: u64 = parts[1].parse().ok()?;
            let secs: u64 = parts[2].parse().ok()?;
            hours
                .checked_mul(3600)?
                .checked_add(mins.checked_mul(60)?)?
                .checked_add(secs)?
        }
        _ => return None,
    };
    u32::try_from(total).ok()
}

fn parse_iso8601(s: &str) -> Option<u32> {
    let rest = s.strip_prefix("PT").or_else(|| s.strip_prefix("pt"))?;
    if rest.is_empty() {
        return None;
    }
    let mut total = 0.0f64;
    let mut number = String::new();
    for ch in rest.chars() {
        if ch.is_ascii_digit() || ch == '.' {
            number.push(ch);
            continue;
        }
        let value: f64 = number.parse().ok()?;
        number.clear();
        let factor = match ch.to_ascii_uppercase() {
            'H' => 3600.0,
            'M' => 60.0,
            'S' => 1.0,
            _ => return None,
        };
        total += value * factor;
    }
    // trailing digits without a unit make the whole string invalid
    if !number.is_empty() {
        return None;
    }
    u32::try_from(total as u64).ok()
}
