// SPDX-FileCopyrightText: 2026 Plugdex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTML escaping for text interpolated into markup.

/// Escape `& < > " '` so `text` is safe in element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 8);
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            other => out.push(other),
        }
    }
    out
}

/// Fragment identifier for a plugin's detail overlay.
///
/// Bytes outside `[A-Za-z0-9.-]`, including `_` itself, become `_XX`
/// (uppercase hex), so distinct plugin ids always give distinct anchors and
/// the result is usable unencoded in both `id="..."` and `href="#..."`.
pub fn anchor_id(plugin_id: &str) -> String {
    let mut out = String::with_capacity("plugin-".len() + plugin_id.len());
    out.push_str("plugin-");
    for byte in plugin_id.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'.' | b'-') {
            out.push(char::from(byte));
        } else {
            out.push_str(&format!("_{byte:02X}"));
        }
    }
    out
}

/// Element id for the heading inside a plugin's detail overlay.
pub fn title_id(plugin_id: &str) -> String {
    format!("title-{}", anchor_id(plugin_id))
}
