use std::sync::Arc;

use crate::color::StageColors;
use crate::data::model::{
    DatasetSummary, FilterCriteria, Record, StageCount, StageFilter, Table, ToolCount,
};
use crate::data::query;

// ---------------------------------------------------------------------------
// Tabs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Table,
    ByStage,
    TechStack,
    Kpis,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Table, Tab::ByStage, Tab::TechStack, Tab::Kpis];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Table => "Table View",
            Tab::ByStage => "By Stage",
            Tab::TechStack => "Tech Stack",
            Tab::Kpis => "KPIs",
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Full table, shared with the composition root.
    pub table: Arc<Table>,

    /// Current search and stage constraints.
    pub criteria: FilterCriteria,

    /// Records passing `criteria` (cached, rebuilt by `refilter`).
    pub filtered: Table,

    /// Sorted stage names for the stage selector.
    pub stage_options: Vec<String>,

    /// Per-stage counts over the full table.
    pub stage_counts: Vec<StageCount>,

    /// Tool ranking over the full table.
    pub tool_counts: Vec<ToolCount>,

    pub summary: DatasetSummary,
    pub stage_colors: StageColors,
    pub tab: Tab,

    /// Phase shown in the detail panel.
    pub selected_phase: Option<String>,
}

impl AppState {
    pub fn new(table: Arc<Table>) -> Self {
        let stage_counts = query::group_count_by_stage(&table);
        let stage_colors = StageColors::new(&stage_counts);
        let selected_phase = table.phase_ids().first().map(|id| id.to_string());

        Self {
            criteria: FilterCriteria::default(),
            filtered: Table::clone(&table),
            stage_options: query::stage_options(&table),
            tool_counts: query::tokenize_and_count_tools(&table),
            summary: query::summarize(&table),
            stage_counts,
            stage_colors,
            tab: Tab::default(),
            selected_phase,
            table,
        }
    }

    /// Recompute `filtered` after a criteria change.
    pub fn refilter(&mut self) {
        self.filtered = query::filter(&self.table, &self.criteria);
        log::debug!(
            "filter search={:?} stage={} -> {} of {} phases",
            self.criteria.search_term,
            self.criteria.stage_filter,
            self.filtered.len(),
            self.table.len()
        );
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.criteria = FilterCriteria::new(term, self.criteria.stage_filter.clone());
        self.refilter();
    }

    pub fn set_stage_filter(&mut self, stage_filter: StageFilter) {
        self.criteria = FilterCriteria::new(self.criteria.search_term.clone(), stage_filter);
        self.refilter();
    }

    pub fn clear_filters(&mut self) {
        self.criteria = FilterCriteria::default();
        self.refilter();
    }

    pub fn select_phase(&mut self, phase_id: &str) {
        self.selected_phase = Some(phase_id.to_string());
    }

    /// The record behind `selected_phase`, or `None` when it no longer
    /// resolves.
    pub fn selected_record(&self) -> Option<&Record> {
        let phase_id = self.selected_phase.as_deref()?;
        match query::lookup_by_phase_id(&self.table, phase_id) {
            Ok(record) => Some(record),
            Err(e) => {
                log::warn!("{e}");
                None
            }
        }
    }

    /// Header line above the results, e.g. `Showing 3 of 26 phases`.
    pub fn showing_label(&self) -> String {
        format!(
            "Showing {} of {} phases",
            self.filtered.len(),
            self.table.len()
        )
    }
}
