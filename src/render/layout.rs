// Page shell: document head, navigation bar and the AnimalDex logo

use super::html::escape;

pub const NAV_ITEMS: [(&str, &str); 3] = [
    ("Animal Discovery", "/"),
    ("Ecosystem Builder", "/ecosystem-builder"),
    ("Conservation Action Center", "/conservation-action-center"),
];

/// Wraps `body` in the full document with the navigation bar. `active_path`
/// marks the current nav item; pass `None` for pages outside the nav.
pub fn page(title: &str, active_path: Option<&str>, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | AnimalDex</title>
<link rel="stylesheet" href="/static/app.css">
<script src="/static/canvas.js" defer></script>
</head>
<body>
{nav}
<main>
{body}
</main>
</body>
</html>"#,
        title = escape(title),
        nav = nav_bar(active_path),
    )
}

pub fn nav_bar(active_path: Option<&str>) -> String {
    let links = |class: &str| -> String {
        NAV_ITEMS
            .iter()
            .map(|(name, href)| {
                let active = active_path == Some(*href);
                format!(
                    r#"<a href="{href}" class="{class}{active}"{current}>{name}</a>"#,
                    href = href,
                    class = class,
                    active = if active { " active" } else { "" },
                    current = if active { r#" aria-current="page""# } else { "" },
                    name = escape(name),
                )
            })
            .collect()
    };

    format!(
        r#"<nav class="navbar">
<div class="nav-inner">
<a href="/" class="brand">{logo}<span>AnimalDex</span></a>
<div class="nav-links">{desktop}</div>
<input type="checkbox" id="nav-toggle" class="nav-toggle" aria-label="Toggle menu">
<label for="nav-toggle" class="nav-toggle-label"><span class="icon-open">☰</span><span class="icon-close">✕</span></label>
<div class="nav-mobile">{mobile}</div>
</div>
</nav>"#,
        logo = logo(32, 32),
        desktop = links("nav-link"),
        mobile = links("nav-mobile-link"),
    )
}

pub fn logo(width: u32, height: u32) -> String {
    format!(
        r##"<svg width="{width}" height="{height}" viewBox="0 0 180 180" xmlns="http://www.w3.org/2000/svg" role="img" aria-label="AnimalDex">
<defs><linearGradient id="hexGrad" x1="0%" y1="0%" x2="100%" y2="100%"><stop offset="0%" stop-color="#0d9488"/><stop offset="100%" stop-color="#10b981"/></linearGradient></defs>
<path d="M 90 10 L 160 50 L 160 130 L 90 170 L 20 130 L 20 50 Z" fill="url(#hexGrad)" stroke="#065f46" stroke-width="3"/>
<g transform="translate(90, 90)" fill="#fff" opacity="0.95">
<ellipse cx="0" cy="0" rx="25" ry="30"/>
<path d="M -18 -25 L -25 -50 L -8 -28 Z"/>
<path d="M 18 -25 L 25 -50 L 8 -28 Z"/>
<ellipse cx="0" cy="10" rx="15" ry="12"/>
<ellipse cx="0" cy="35" rx="20" ry="15"/>
<path d="M 18 30 Q 35 25 40 35 Q 35 45 25 40"/>
</g>
<g transform="translate(90, 90)" fill="#065f46">
<circle cx="-8" cy="-5" r="3"/><circle cx="8" cy="-5" r="3"/><circle cx="0" cy="8" r="2.5"/>
</g>
<line x1="90" y1="10" x2="90" y2="170" stroke="#065f46" stroke-width="1" opacity="0.3"/>
<line x1="20" y1="90" x2="160" y2="90" stroke="#065f46" stroke-width="1" opacity="0.3"/>
</svg>"##
    )
}

/// Centered single-message screen used by loading and error states.
pub fn centered_message(class: &str, message: &str) -> String {
    format!(
        r#"<div class="screen-center"><div class="{class}">{message}</div></div>"#,
        class = escape(class),
        message = escape(message),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_nav_item() {
        let nav = nav_bar(Some("/ecosystem-builder"));
        assert!(nav.contains(r#"href="/ecosystem-builder" class="nav-link active""#));
        assert!(!nav.contains(r#"href="/" class="nav-link active""#));
        assert!(nav.contains(r#"href="/conservation-action-center""#));
    }
}
