//! The document shell, navigation bar, and shared formatting helpers.

use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::endpoints;

/// Embedded stylesheet; the dashboard ships no static assets.
const STYLESHEET: &str = r#"
    body {
        margin: 0;
        font-family: system-ui, sans-serif;
        color: #1f2933;
        background: #f5f7fa;
    }
    nav {
        display: flex;
        align-items: center;
        gap: 2rem;
        padding: 0.75rem 1.5rem;
        background: #102a43;
        color: #f0f4f8;
    }
    nav .brand { font-weight: 700; font-size: 1.1rem; }
    nav ul { display: flex; gap: 1rem; list-style: none; margin: 0; padding: 0; }
    nav a { color: #9fb3c8; text-decoration: none; }
    nav a.current { color: #fff; font-weight: 600; }
    main { max-width: 56rem; margin: 0 auto; padding: 1.5rem; }
    section { margin-bottom: 2rem; }
    h1 { font-size: 1.4rem; }
    h2 { font-size: 1.15rem; }
    form { max-width: 24rem; }
    .field { margin-bottom: 0.75rem; }
    .field label { display: block; margin-bottom: 0.25rem; font-weight: 600; }
    .field input { width: 100%; padding: 0.4rem; box-sizing: border-box; }
    button {
        padding: 0.5rem 1.25rem;
        border: none;
        border-radius: 3px;
        background: #2458b3;
        color: #fff;
        cursor: pointer;
    }
    table { width: 100%; border-collapse: collapse; background: #fff; }
    th, td { padding: 0.5rem 0.75rem; border-bottom: 1px solid #d9e2ec; text-align: left; }
    th { background: #e4eaf1; font-size: 0.85rem; text-transform: uppercase; }
    td.amount, th.amount { text-align: right; }
    td.empty { text-align: center; color: #627d98; }
    .alert { padding: 0.75rem 1rem; border-radius: 3px; margin-bottom: 1rem; }
    .alert p { margin: 0.25rem 0; }
    .alert-success { background: #e3f9e5; border: 1px solid #57ae5b; }
    .alert-error { background: #ffe3e3; border: 1px solid #d64545; }
    .alert-message { font-weight: 600; }
    .error-box { text-align: center; padding: 3rem 0; }
    .error-box h1 { font-size: 2.5rem; }
"#;

/// Wrap page content in the shared HTML document shell.
pub fn base(title: &str, content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Bank Dashboard" }
                style { (PreEscaped(STYLESHEET)) }
            }

            body
            {
                (content)
            }
        }
    }
}

/// A link in the navigation bar.
struct Link {
    url: &'static str,
    title: &'static str,
    is_current: bool,
}

/// The navigation bar.
///
/// The link matching `active_endpoint` is marked as the current page.
pub fn nav_bar(active_endpoint: &str) -> Markup {
    let links = [
        Link {
            url: endpoints::TRANSFER_VIEW,
            title: "Transfer Funds",
            is_current: active_endpoint == endpoints::TRANSFER_VIEW,
        },
        Link {
            url: endpoints::AUDIT_LOG_VIEW,
            title: "Audit Log",
            is_current: active_endpoint == endpoints::AUDIT_LOG_VIEW,
        },
        Link {
            url: endpoints::SCHEMA_LOG_VIEW,
            title: "Schema Changes",
            is_current: active_endpoint == endpoints::SCHEMA_LOG_VIEW,
        },
    ];

    html! {
        nav
        {
            span class="brand" { "Bank Dashboard" }

            ul
            {
                @for link in &links {
                    li
                    {
                        a
                            href=(link.url)
                            class=[link.is_current.then_some("current")]
                            aria-current=[link.is_current.then_some("page")]
                        {
                            (link.title)
                        }
                    }
                }
            }
        }
    }
}

/// A full error page for unrecoverable failures.
pub fn error_page(status: StatusCode, message: &str) -> Markup {
    let reason = status.canonical_reason().unwrap_or("Error");

    let content = html! {
        (nav_bar(""))

        main
        {
            section class="error-box"
            {
                h1 { (status.as_str()) " " (reason) }

                p { (message) }

                p
                {
                    a href=(endpoints::TRANSFER_VIEW) { "Back to the dashboard" }
                }
            }
        }
    };

    base(reason, &content)
}

/// Format integer cents as a dollar string, e.g. 123456 -> "$1,234.56".
pub fn format_currency(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let magnitude = cents.unsigned_abs();
    let dollars = (magnitude / 100).to_string();
    let remainder = magnitude % 100;

    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, digit) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{sign}${grouped}.{remainder:02}")
}

/// Format a timestamp for table display.
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

#[cfg(test)]
mod format_currency_tests {
    use super::format_currency;

    #[test]
    fn formats_zero() {
        assert_eq!(format_currency(0), "$0.00");
    }

    #[test]
    fn formats_cents_only() {
        assert_eq!(format_currency(5), "$0.05");
        assert_eq!(format_currency(50), "$0.50");
    }

    #[test]
    fn formats_with_thousands_separators() {
        assert_eq!(format_currency(123456), "$1,234.56");
        assert_eq!(format_currency(100000000), "$1,000,000.00");
    }

    #[test]
    fn formats_negative_amounts() {
        assert_eq!(format_currency(-50), "-$0.50");
        assert_eq!(format_currency(-123456), "-$1,234.56");
    }
}

#[cfg(test)]
mod nav_bar_tests {
    use scraper::{Html, Selector};

    use crate::endpoints;

    use super::nav_bar;

    #[test]
    fn marks_active_endpoint_as_current() {
        for endpoint in [
            endpoints::TRANSFER_VIEW,
            endpoints::AUDIT_LOG_VIEW,
            endpoints::SCHEMA_LOG_VIEW,
        ] {
            let markup = nav_bar(endpoint).into_string();
            let html = Html::parse_fragment(&markup);
            let current_selector = Selector::parse("a[aria-current='page']").unwrap();

            let current_links: Vec<_> = html.select(&current_selector).collect();
            assert_eq!(
                current_links.len(),
                1,
                "want exactly one current link for {endpoint}"
            );
            assert_eq!(current_links[0].attr("href"), Some(endpoint));
        }
    }

    #[test]
    fn no_link_current_for_unknown_endpoint() {
        let markup = nav_bar("/nowhere").into_string();
        let html = Html::parse_fragment(&markup);
        let current_selector = Selector::parse("a[aria-current='page']").unwrap();

        assert_eq!(html.select(&current_selector).count(), 0);
    }
}
