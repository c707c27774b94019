//! The schema changes page: DDL events recorded by the event triggers.

use maud::{Markup, html};

use crate::{
    endpoints,
    models::schema_change::SchemaChangeEntry,
    views::layout::{base, format_timestamp, nav_bar},
};

/// Render the schema change page, newest events first.
pub fn schema_log_view(entries: &[SchemaChangeEntry]) -> Markup {
    let table_row = |entry: &SchemaChangeEntry| {
        html! {
            tr
            {
                th scope="row" { (entry.event_id) }

                td { (entry.event_type) }

                td { (entry.object_name.as_deref().unwrap_or("-")) }

                td { (entry.executed_by) }

                td { (format_timestamp(entry.occurred_at)) }
            }
        }
    };

    let content = html! {
        (nav_bar(endpoints::SCHEMA_LOG_VIEW))

        main
        {
            section
            {
                h1 { "Schema Changes" }

                p
                {
                    "Structural changes (CREATE/ALTER/DROP) captured by the "
                    code { "trg_log_schema_changes" }
                    " and "
                    code { "trg_log_schema_drops" }
                    " event triggers. "
                    a href=(endpoints::SCHEMA_LOG_VIEW) { "Refresh" }
                }

                table
                {
                    thead
                    {
                        tr
                        {
                            th scope="col" { "ID" }
                            th scope="col" { "Event" }
                            th scope="col" { "Object" }
                            th scope="col" { "Executed By" }
                            th scope="col" { "Occurred At" }
                        }
                    }

                    tbody
                    {
                        @for entry in entries {
                            (table_row(entry))
                        }

                        @if entries.is_empty() {
                            tr
                            {
                                td class="empty" colspan="5" { "No schema changes recorded yet." }
                            }
                        }
                    }
                }
            }
        }
    };

    base("Schema Changes", &content)
}

#[cfg(test)]
mod schema_log_view_tests {
    use chrono::{TimeZone, Utc};
    use scraper::{Html, Selector};

    use crate::models::schema_change::SchemaChangeEntry;

    use super::schema_log_view;

    fn sample_entry(event_id: i64, object_name: Option<&str>) -> SchemaChangeEntry {
        SchemaChangeEntry {
            event_id,
            event_type: "CREATE TABLE".to_string(),
            object_name: object_name.map(str::to_string),
            executed_by: "postgres".to_string(),
            occurred_at: Utc.with_ymd_and_hms(2025, 8, 1, 9, 30, 0).unwrap(),
        }
    }

    #[test]
    fn renders_one_row_per_event() {
        let entries = vec![
            sample_entry(2, Some("public.accounts")),
            sample_entry(1, None),
        ];

        let markup = schema_log_view(&entries).into_string();
        let html = Html::parse_document(&markup);

        let row_selector = Selector::parse("tbody tr").unwrap();
        assert_eq!(html.select(&row_selector).count(), 2);
        assert!(markup.contains("public.accounts"));
        assert!(markup.contains("CREATE TABLE"));
    }

    #[test]
    fn renders_placeholder_for_missing_object_name() {
        let entries = vec![sample_entry(1, None)];

        let markup = schema_log_view(&entries).into_string();
        let html = Html::parse_document(&markup);

        let cell_selector = Selector::parse("tbody td").unwrap();
        let cells: Vec<String> = html
            .select(&cell_selector)
            .map(|cell| cell.text().collect())
            .collect();
        assert!(cells.iter().any(|text| text == "-"));
    }

    #[test]
    fn renders_empty_state_without_events() {
        let markup = schema_log_view(&[]).into_string();
        let html = Html::parse_document(&markup);

        let empty_selector = Selector::parse("td[colspan='5']").unwrap();
        assert!(html.select(&empty_selector).next().is_some());
    }
}
