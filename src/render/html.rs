/// Escapes text for use in HTML element content and double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// A POST form holding a single submit button.
pub fn button_form(action: &str, class: &str, label_html: &str) -> String {
    format!(
        r#"<form method="post" action="{action}" class="inline-form"><button type="submit" class="{class}">{label_html}</button></form>"#,
        action = escape(action),
        class = escape(class),
    )
}

/// Formats a percentage coordinate for style and SVG attributes.
pub fn pct(value: f64) -> String {
    format!("{}%", (value * 100.0).round() / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
        assert_eq!(escape("Sea & Sage"), "Sea &amp; Sage");
    }

    #[test]
    fn test_pct_rounds_to_two_places() {
        assert_eq!(pct(25.0), "25%");
        assert_eq!(pct(37.123456), "37.12%");
    }
}
