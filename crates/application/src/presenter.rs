//! Presenter contract: view-model projections and the selection port.
//!
//! No business logic lives here; the host owns rendering and navigation.

use std::sync::Arc;

use crewdeck_domain::SearchResult;
use serde::Serialize;

/// Presenter-ready projection of one result entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRow {
    /// Composite result id, passed back on selection.
    pub id: String,
    /// Category glyph rendered in front of the row.
    pub icon: &'static str,
    /// Localizable category label rendered at the row's trailing edge.
    pub category_label: &'static str,
    /// Primary display line.
    pub title: String,
    /// Secondary display line.
    pub subtitle: String,
}

impl From<&SearchResult> for ResultRow {
    fn from(result: &SearchResult) -> Self {
        Self {
            id: result.id().to_owned(),
            icon: result.category().icon(),
            category_label: result.category().label(),
            title: result.title().to_owned(),
            subtitle: result.subtitle().to_owned(),
        }
    }
}

/// What to render when the result list is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// Blank query: render nothing at all.
    Hidden,
    /// Non-empty query with zero matches: render the no-results indicator.
    NoResults,
}

/// Returns the empty-state to render, or `None` when there are results.
#[must_use]
pub fn empty_state(query: &str, results: &[SearchResult]) -> Option<EmptyState> {
    if !results.is_empty() {
        return None;
    }
    if query.trim().is_empty() {
        Some(EmptyState::Hidden)
    } else {
        Some(EmptyState::NoResults)
    }
}

/// Host-implemented selection callback.
pub trait SelectionSink: Send + Sync {
    /// Invoked with the selected result; the carried record lets the host
    /// route to the matching detail screen without re-querying the engine.
    fn on_select(&self, result: &SearchResult);
}

/// Thin boundary between the assembled result list and the host UI.
pub struct SearchPresenter {
    sink: Arc<dyn SelectionSink>,
}

impl SearchPresenter {
    /// Creates a presenter over the host's selection sink.
    #[must_use]
    pub fn new(sink: Arc<dyn SelectionSink>) -> Self {
        Self { sink }
    }

    /// Projects results into renderable rows, preserving order.
    #[must_use]
    pub fn rows(&self, results: &[SearchResult]) -> Vec<ResultRow> {
        results.iter().map(ResultRow::from).collect()
    }

    /// Dispatches the selection callback for the row with the given id.
    ///
    /// Unknown ids are ignored: a stale row from a superseded search must
    /// not crash the host.
    pub fn select(&self, results: &[SearchResult], result_id: &str) {
        if let Some(result) = results.iter().find(|result| result.id() == result_id) {
            self.sink.on_select(result);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use crewdeck_core::OrgId;
    use crewdeck_domain::{Employee, SearchResult, SearchableRecord};

    use super::{EmptyState, ResultRow, SearchPresenter, SelectionSink, empty_state};

    fn sample_result() -> SearchResult {
        SearchResult::new(
            "Mohamed Ben Ali",
            "Backend engineer",
            SearchableRecord::Employee(Employee {
                id: OrgId::from(2),
                name: "Mohamed Ben Ali".to_owned(),
                email: None,
                position: Some("Backend engineer".to_owned()),
                company_id: None,
                team_id: None,
            }),
        )
    }

    #[derive(Default)]
    struct RecordingSink {
        selected: Mutex<Vec<String>>,
    }

    impl SelectionSink for RecordingSink {
        fn on_select(&self, result: &crewdeck_domain::SearchResult) {
            if let Ok(mut selected) = self.selected.lock() {
                selected.push(result.id().to_owned());
            }
        }
    }

    #[test]
    fn empty_state_distinguishes_blank_from_unmatched_queries() {
        assert_eq!(empty_state("", &[]), Some(EmptyState::Hidden));
        assert_eq!(empty_state("  ", &[]), Some(EmptyState::Hidden));
        assert_eq!(empty_state("sarah", &[]), Some(EmptyState::NoResults));
        assert_eq!(empty_state("sarah", &[sample_result()]), None);
    }

    #[test]
    fn rows_carry_icon_label_and_composite_id() {
        let presenter = SearchPresenter::new(Arc::new(RecordingSink::default()));
        let rows = presenter.rows(&[sample_result()]);
        assert_eq!(
            rows,
            vec![ResultRow {
                id: "employee-2".to_owned(),
                icon: "\u{1F465}",
                category_label: "Employees",
                title: "Mohamed Ben Ali".to_owned(),
                subtitle: "Backend engineer".to_owned(),
            }]
        );
    }

    #[test]
    fn select_dispatches_the_matching_result_only() {
        let sink = Arc::new(RecordingSink::default());
        let presenter = SearchPresenter::new(sink.clone());
        let results = [sample_result()];

        presenter.select(&results, "employee-2");
        presenter.select(&results, "team-9");

        let selected = sink.selected.lock().map(|ids| ids.clone());
        assert_eq!(selected.unwrap_or_default(), vec!["employee-2".to_owned()]);
    }
}
