//! Success and error alert banners.

use maud::{Markup, html};

/// Alert message types for styling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AlertKind {
    Success,
    Error,
}

/// An alert banner shown at the top of the page that handled a form
/// submission.
#[derive(Debug, Clone)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
    pub details: String,
}

impl Alert {
    /// Create a success alert.
    pub fn success(message: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Success,
            message: message.into(),
            details: details.into(),
        }
    }

    /// Create an error alert.
    pub fn error(message: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Error,
            message: message.into(),
            details: details.into(),
        }
    }

    pub fn to_html(&self) -> Markup {
        let class = match self.kind {
            AlertKind::Success => "alert alert-success",
            AlertKind::Error => "alert alert-error",
        };

        html! {
            div class=(class) role="alert"
            {
                p class="alert-message" { (self.message) }

                @if !self.details.is_empty() {
                    p class="alert-details" { (self.details) }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use super::Alert;

    #[test]
    fn success_alert_renders_message_and_details() {
        let alert = Alert::success("Transfer successful", "Moved $5.00 to account 2.");

        let markup = alert.to_html().into_string();
        let html = Html::parse_fragment(&markup);

        let selector = Selector::parse(".alert-success").unwrap();
        let banner = html
            .select(&selector)
            .next()
            .expect("success banner missing");
        let text: String = banner.text().collect();
        assert!(text.contains("Transfer successful"));
        assert!(text.contains("Moved $5.00 to account 2."));
    }

    #[test]
    fn error_alert_without_details_renders_single_paragraph() {
        let alert = Alert::error("Transfer failed", "");

        let markup = alert.to_html().into_string();
        let html = Html::parse_fragment(&markup);

        let selector = Selector::parse(".alert-error p").unwrap();
        assert_eq!(html.select(&selector).count(), 1);
    }
}
