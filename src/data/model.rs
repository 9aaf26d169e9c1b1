use std::fmt;

use serde::Deserialize;

/// Label shown in the stage selector for "no stage constraint".
pub const ALL_STAGES: &str = "All Stages";

/// Column headers the source file must carry, in display order.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "Phase ID",
    "Lifecycle Stage",
    "Process Action",
    "Standard Operating Procedure (SOP)",
    "RACI Matrix Role",
    "Critical KPI",
    "Tech Stack",
];

// ---------------------------------------------------------------------------
// Record – one row of the lifecycle table
// ---------------------------------------------------------------------------

/// A single lifecycle phase.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Record {
    #[serde(rename = "Phase ID")]
    pub phase_id: String,
    #[serde(rename = "Lifecycle Stage")]
    pub lifecycle_stage: String,
    #[serde(rename = "Process Action")]
    pub process_action: String,
    /// Standard Operating Procedure.
    #[serde(rename = "Standard Operating Procedure (SOP)")]
    pub sop: String,
    #[serde(rename = "RACI Matrix Role")]
    pub raci_role: String,
    #[serde(rename = "Critical KPI")]
    pub critical_kpi: String,
    /// Tool names separated by `|`.
    #[serde(rename = "Tech Stack", default)]
    pub tech_stack: String,
}

// ---------------------------------------------------------------------------
// Table – the complete loaded dataset
// ---------------------------------------------------------------------------

/// Ordered records, in source row order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    records: Vec<Record>,
}

impl Table {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Number of phases.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Phase ids in table order, for the detail selector.
    pub fn phase_ids(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.phase_id.as_str()).collect()
    }
}

impl FromIterator<Record> for Table {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ---------------------------------------------------------------------------
// Filter criteria
// ---------------------------------------------------------------------------

/// Stage constraint picked in the side panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StageFilter {
    #[default]
    All,
    /// Exact, case-sensitive stage name.
    Stage(String),
}

impl StageFilter {
    /// Parse a selector label; the [`ALL_STAGES`] sentinel maps to `All`.
    pub fn from_label(label: &str) -> Self {
        if label == ALL_STAGES {
            StageFilter::All
        } else {
            StageFilter::Stage(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            StageFilter::All => ALL_STAGES,
            StageFilter::Stage(s) => s,
        }
    }
}

impl fmt::Display for StageFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Search and stage constraints for one interaction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub search_term: String,
    pub stage_filter: StageFilter,
}

impl FilterCriteria {
    pub fn new(search_term: impl Into<String>, stage_filter: StageFilter) -> Self {
        Self {
            search_term: search_term.into(),
            stage_filter,
        }
    }

    /// True when neither the search nor the stage constrains anything.
    pub fn is_empty(&self) -> bool {
        self.search_term.is_empty() && self.stage_filter == StageFilter::All
    }
}

// ---------------------------------------------------------------------------
// Derived views
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageCount {
    pub stage: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCount {
    pub tool: String,
    pub count: usize,
}

/// Headline numbers for the top bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DatasetSummary {
    pub phases: usize,
    pub stages: usize,
    pub tools: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_filter_sentinel_round_trips() {
        assert_eq!(StageFilter::from_label(ALL_STAGES), StageFilter::All);
        assert_eq!(
            StageFilter::from_label("Planning"),
            StageFilter::Stage("Planning".to_string())
        );
        assert_eq!(StageFilter::All.label(), "All Stages");
        assert_eq!(StageFilter::Stage("Launch".into()).to_string(), "Launch");
    }

    #[test]
    fn sentinel_label_is_case_sensitive() {
        assert_eq!(
            StageFilter::from_label("all stages"),
            StageFilter::Stage("all stages".to_string())
        );
    }

    #[test]
    fn default_criteria_are_empty() {
        assert!(FilterCriteria::default().is_empty());
        assert!(!FilterCriteria::new("kpi", StageFilter::All).is_empty());
        assert!(!FilterCriteria::new("", StageFilter::Stage("Plan".into())).is_empty());
    }
}
