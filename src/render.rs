//! Renders a [`MapDocument`] as a standalone Leaflet HTML page.

use serde_json::Value as JsonValue;

use crate::parser::Marker;

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">

<head>
    <base target="_top">
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">

"#;

const PAGE_ASSETS: &str = r#"
    <link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css"
        integrity="sha256-p4NxAoJBhIIN+hmNHrzRCf9tD/miZyoHS5obTRR9BMY=" crossorigin="" />
    <script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"
        integrity="sha256-20nQCchB9co0qIjJZRGuk2/Z9VM+kNiyxNV1lvTlZBo=" crossorigin=""></script>

    <style>
        html,
        body {
            height: 100%;
            margin: 0;
        }

        .leaflet-container {
            height: 100%;
            width: 100%;
        }
    </style>
</head>

<body>

    <div id="map"></div>

    <script>
        const map = L.map('map').setView([20, 20], 2.5);

        L.tileLayer('https://tile.openstreetmap.org/{z}/{x}/{y}.png', {
            attribution: '&copy; <a href="https://www.openstreetmap.org/copyright">OpenStreetMap</a> contributors'
        }).addTo(map);

"#;

const PAGE_TAIL: &str = r#"
    </script>

</body>

</html>
"#;

/// A titled, ordered collection of markers ready to be rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct MapDocument {
    pub title: String,
    pub markers: Vec<Marker>,
}

impl MapDocument {
    pub fn new(title: impl Into<String>, markers: Vec<Marker>) -> Self {
        Self {
            title: title.into(),
            markers,
        }
    }

    /// Renders the page. The output depends only on the document contents.
    pub fn render(&self) -> String {
        render(self)
    }
}

/// Renders `document` as a complete HTML page.
pub fn render(document: &MapDocument) -> String {
    let mut page = String::with_capacity(
        PAGE_HEAD.len() + PAGE_ASSETS.len() + PAGE_TAIL.len() + document.markers.len() * 96,
    );

    page.push_str(PAGE_HEAD);
    page.push_str(&format!(
        "    <title>{}</title>\n",
        escape_html(&document.title)
    ));
    page.push_str(PAGE_ASSETS);

    for marker in &document.markers {
        page.push_str(&format!(
            "        L.marker([{}, {}], {{}}).bindPopup({}).addTo(map);\n",
            js_number(marker.latitude),
            js_number(marker.longitude),
            popup_literal(&marker.label),
        ));
    }

    page.push_str(PAGE_TAIL);
    page
}

/// Same as [`render`], as raw bytes for writing to disk.
pub fn render_bytes(document: &MapDocument) -> Vec<u8> {
    render(document).into_bytes()
}

/// Escapes text for use in HTML element content or a quoted attribute.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Encodes `text` as a double-quoted JavaScript string literal that is safe
/// to embed inside a `<script>` element.
pub fn escape_js_string(text: &str) -> String {
    let quoted = JsonValue::String(text.to_string()).to_string();
    let mut escaped = String::with_capacity(quoted.len());
    for ch in quoted.chars() {
        match ch {
            '<' => escaped.push_str("\\u003c"),
            '>' => escaped.push_str("\\u003e"),
            '\u{2028}' => escaped.push_str("\\u2028"),
            '\u{2029}' => escaped.push_str("\\u2029"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Leaflet treats popup content as HTML, so the label is HTML-escaped before
/// being turned into a script literal.
fn popup_literal(label: &str) -> String {
    escape_js_string(&escape_html(label))
}

/// Leaflet rejects non-finite coordinates and aborts the whole script, so
/// they are written as `0`.
fn js_number(value: f64) -> String {
    if value.is_finite() {
        value.to_string()
    } else {
        "0".to_string()
    }
}
