use std::collections::{BTreeSet, HashMap};

use super::model::{
    DatasetSummary, FilterCriteria, Record, StageCount, StageFilter, Table, ToolCount,
};
use crate::error::LookupError;

/// Separator between tool names in the `Tech Stack` column.
pub const TOOL_DELIMITER: char = '|';

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Return the records matching both the search term and the stage filter,
/// in table order.
///
/// * An empty search term matches every record.
/// * A non-empty term must appear, ignoring case, in the phase id, the
///   process action or the critical KPI. It is a literal substring.
/// * [`StageFilter::Stage`] requires an exact, case-sensitive stage match.
pub fn filter(table: &Table, criteria: &FilterCriteria) -> Table {
    let needle = criteria.search_term.to_lowercase();
    table
        .iter()
        .filter(|r| matches_search(r, &needle) && matches_stage(r, &criteria.stage_filter))
        .cloned()
        .collect()
}

/// `needle` must already be lowercased.
fn matches_search(record: &Record, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    [
        &record.phase_id,
        &record.process_action,
        &record.critical_kpi,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}

fn matches_stage(record: &Record, stage_filter: &StageFilter) -> bool {
    match stage_filter {
        StageFilter::All => true,
        StageFilter::Stage(stage) => record.lifecycle_stage == *stage,
    }
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Count records per stage, stages in first-encountered order.
pub fn group_count_by_stage(table: &Table) -> Vec<StageCount> {
    let mut counts: Vec<StageCount> = Vec::new();
    for record in table {
        match counts.iter_mut().find(|c| c.stage == record.lifecycle_stage) {
            Some(entry) => entry.count += 1,
            None => counts.push(StageCount {
                stage: record.lifecycle_stage.clone(),
                count: 1,
            }),
        }
    }
    counts
}

/// Distinct stages sorted alphabetically, for the stage selector.
pub fn stage_options(table: &Table) -> Vec<String> {
    table
        .iter()
        .map(|r| r.lifecycle_stage.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Records belonging to `stage`, in table order.
pub fn records_in_stage<'a>(table: &'a Table, stage: &'a str) -> impl Iterator<Item = &'a Record> + 'a {
    table.iter().filter(move |r| r.lifecycle_stage == stage)
}

/// Split a tech stack cell into trimmed, non-empty tool names.
pub fn split_tools(tech_stack: &str) -> impl Iterator<Item = &str> {
    tech_stack
        .split(TOOL_DELIMITER)
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Tools listed by a single record.
pub fn tools_for(record: &Record) -> Vec<&str> {
    split_tools(&record.tech_stack).collect()
}

/// Count how often each tool appears across the table.
///
/// Sorted by count descending; ties keep the order in which tools were
/// first seen.
pub fn tokenize_and_count_tools(table: &Table) -> Vec<ToolCount> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<ToolCount> = Vec::new();

    for tool in table.iter().flat_map(|r| split_tools(&r.tech_stack)) {
        match index.get(tool) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(tool, counts.len());
                counts.push(ToolCount {
                    tool: tool.to_string(),
                    count: 1,
                });
            }
        }
    }

    // `sort_by` is stable, so equal counts stay in first-seen order.
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// The `n` most used tools of an already ranked list.
pub fn top_tools(ranked: &[ToolCount], n: usize) -> &[ToolCount] {
    &ranked[..n.min(ranked.len())]
}

pub fn summarize(table: &Table) -> DatasetSummary {
    DatasetSummary {
        phases: table.len(),
        stages: group_count_by_stage(table).len(),
        tools: tokenize_and_count_tools(table).len(),
    }
}

// ---------------------------------------------------------------------------
// Lookup
// ---------------------------------------------------------------------------

/// Find the record with exactly this phase id. Duplicates resolve to the
/// first occurrence.
pub fn lookup_by_phase_id<'a>(table: &'a Table, phase_id: &str) -> Result<&'a Record, LookupError> {
    table
        .iter()
        .find(|r| r.phase_id == phase_id)
        .ok_or_else(|| LookupError::NotFound {
            phase_id: phase_id.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, stage: &str, action: &str, kpi: &str, tools: &str) -> Record {
        Record {
            phase_id: id.to_string(),
            lifecycle_stage: stage.to_string(),
            process_action: action.to_string(),
            sop: format!("SOP for {id}"),
            raci_role: "Marketing Ops (R)".to_string(),
            critical_kpi: kpi.to_string(),
            tech_stack: tools.to_string(),
        }
    }

    fn two_phase_table() -> Table {
        Table::new(vec![
            record("P1", "Plan", "Define goals", "ROI", "CRM | Analytics"),
            record("P2", "Execute", "Launch ad", "CTR", "CRM"),
        ])
    }

    fn lifecycle_table() -> Table {
        Table::new(vec![
            record("MC-01", "Strategy", "Market research", "TAM coverage", "Semrush | GA4"),
            record("MC-02", "Strategy", "Audience segmentation", "Segment lift", "Segment|GA4"),
            record("MC-03", "Creative", "Brief the agency", "Brief approval time", "Asana | Figma"),
            record("MC-04", "Launch", "Launch paid media", "CPA", "Google Ads | Meta Ads | GA4"),
            record("MC-05", "Creative", "Asset QA", "Defect rate", ""),
            record("MC-06", "Optimize", "A/B test landing pages", "Conversion rate", "Optimizely |  | GA4"),
            record("MC-07", "Launch", "Email blast", "Open rate", "HubSpot"),
        ])
    }

    fn search(term: &str) -> FilterCriteria {
        FilterCriteria::new(term, StageFilter::All)
    }

    fn ids(table: &Table) -> Vec<&str> {
        table.phase_ids()
    }

    #[test]
    fn empty_criteria_return_the_whole_table() {
        let table = lifecycle_table();
        assert_eq!(filter(&table, &FilterCriteria::default()), table);
    }

    #[test]
    fn search_ignores_tech_stack() {
        let table = two_phase_table();
        assert!(filter(&table, &search("crm")).is_empty());
    }

    #[test]
    fn search_matches_action() {
        let table = two_phase_table();
        assert_eq!(ids(&filter(&table, &search("goals"))), vec!["P1"]);
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let table = lifecycle_table();
        assert_eq!(ids(&filter(&table, &search("mc-04"))), vec!["MC-04"]);
        assert_eq!(ids(&filter(&table, &search("RATE"))), vec!["MC-05", "MC-06", "MC-07"]);
        assert_eq!(ids(&filter(&table, &search("launch"))), vec!["MC-04"]);
    }

    #[test]
    fn search_term_is_literal() {
        let table = lifecycle_table();
        assert!(filter(&table, &search("A/B.*")).is_empty());
        assert_eq!(ids(&filter(&table, &search("a/b"))), vec!["MC-06"]);
    }

    #[test]
    fn search_is_sound_and_complete() {
        let table = lifecycle_table();
        for term in ["rate", "mc", "brief", "xyz", "e"] {
            let found = filter(&table, &search(term));
            let needle = term.to_lowercase();
            for r in &table {
                let hit = matches_search(r, &needle);
                let kept = found.iter().any(|f| f.phase_id == r.phase_id);
                assert_eq!(hit, kept, "term {term:?}, phase {}", r.phase_id);
            }
        }
    }

    #[test]
    fn stage_filter_is_exact_and_keeps_order() {
        let table = lifecycle_table();
        let creative = FilterCriteria::new("", StageFilter::Stage("Creative".into()));
        assert_eq!(ids(&filter(&table, &creative)), vec!["MC-03", "MC-05"]);

        let lower = FilterCriteria::new("", StageFilter::Stage("creative".into()));
        assert!(filter(&table, &lower).is_empty());
    }

    #[test]
    fn search_and_stage_combine_with_and() {
        let table = lifecycle_table();
        let criteria = FilterCriteria::new("rate", StageFilter::Stage("Launch".into()));
        assert_eq!(ids(&filter(&table, &criteria)), vec!["MC-07"]);
    }

    #[test]
    fn stage_counts_follow_first_appearance() {
        let counts = group_count_by_stage(&lifecycle_table());
        let pairs: Vec<(&str, usize)> = counts.iter().map(|c| (c.stage.as_str(), c.count)).collect();
        assert_eq!(
            pairs,
            vec![("Strategy", 2), ("Creative", 2), ("Launch", 2), ("Optimize", 1)]
        );
    }

    #[test]
    fn stage_counts_cover_the_table() {
        let table = lifecycle_table();
        let counts = group_count_by_stage(&table);
        assert_eq!(counts.iter().map(|c| c.count).sum::<usize>(), table.len());

        let keys: BTreeSet<&str> = counts.iter().map(|c| c.stage.as_str()).collect();
        let stages: BTreeSet<&str> = table.iter().map(|r| r.lifecycle_stage.as_str()).collect();
        assert_eq!(keys, stages);
    }

    #[test]
    fn stage_counts_for_the_small_example() {
        let counts = group_count_by_stage(&two_phase_table());
        assert_eq!(
            counts,
            vec![
                StageCount { stage: "Plan".into(), count: 1 },
                StageCount { stage: "Execute".into(), count: 1 },
            ]
        );
    }

    #[test]
    fn stage_options_are_sorted_and_distinct() {
        assert_eq!(
            stage_options(&lifecycle_table()),
            vec!["Creative", "Launch", "Optimize", "Strategy"]
        );
    }

    #[test]
    fn records_in_stage_lists_members_in_order() {
        let table = lifecycle_table();
        let launch: Vec<&str> = records_in_stage(&table, "Launch")
            .map(|r| r.phase_id.as_str())
            .collect();
        assert_eq!(launch, vec!["MC-04", "MC-07"]);
    }

    #[test]
    fn tools_are_trimmed_and_counted() {
        let counts = tokenize_and_count_tools(&two_phase_table());
        assert_eq!(
            counts,
            vec![
                ToolCount { tool: "CRM".into(), count: 2 },
                ToolCount { tool: "Analytics".into(), count: 1 },
            ]
        );
    }

    #[test]
    fn tool_ties_keep_first_appearance() {
        let counts = tokenize_and_count_tools(&lifecycle_table());
        let names: Vec<&str> = counts.iter().map(|c| c.tool.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "GA4", "Semrush", "Segment", "Asana", "Figma", "Google Ads", "Meta Ads",
                "Optimizely", "HubSpot",
            ]
        );
        assert_eq!(counts[0].count, 4);
    }

    #[test]
    fn tool_counts_sum_to_non_empty_tokens() {
        let table = lifecycle_table();
        let total: usize = tokenize_and_count_tools(&table).iter().map(|c| c.count).sum();
        let tokens: usize = table.iter().map(|r| tools_for(r).len()).sum();
        assert_eq!(total, tokens);
        assert_eq!(total, 12);
    }

    #[test]
    fn empty_tech_stack_contributes_nothing() {
        let table = Table::new(vec![record("X", "Plan", "a", "b", ""), record("Y", "Plan", "a", "b", " | ")]);
        assert!(tokenize_and_count_tools(&table).is_empty());
        assert!(tools_for(&table.records()[1]).is_empty());
    }

    #[test]
    fn both_delimiter_spellings_split_the_same() {
        assert_eq!(split_tools("A | B").collect::<Vec<_>>(), vec!["A", "B"]);
        assert_eq!(split_tools("A|B").collect::<Vec<_>>(), vec!["A", "B"]);
    }

    #[test]
    fn top_tools_caps_at_available_entries() {
        let ranked = tokenize_and_count_tools(&two_phase_table());
        assert_eq!(top_tools(&ranked, 10).len(), 2);
        assert_eq!(top_tools(&ranked, 1)[0].tool, "CRM");
        assert!(top_tools(&ranked, 0).is_empty());
    }

    #[test]
    fn summary_counts_distinct_values() {
        let summary = summarize(&lifecycle_table());
        assert_eq!(
            summary,
            DatasetSummary {
                phases: 7,
                stages: 4,
                tools: 9,
            }
        );
        assert_eq!(summarize(&Table::default()), DatasetSummary::default());
    }

    #[test]
    fn lookup_finds_exact_id() {
        let table = lifecycle_table();
        let found = lookup_by_phase_id(&table, "MC-03").unwrap();
        assert_eq!(found.process_action, "Brief the agency");
        assert!(lookup_by_phase_id(&table, "mc-03").is_err());
    }

    #[test]
    fn lookup_miss_is_not_found() {
        let err = lookup_by_phase_id(&Table::default(), "MC-01").unwrap_err();
        assert_eq!(
            err,
            LookupError::NotFound {
                phase_id: "MC-01".to_string()
            }
        );
    }

    #[test]
    fn lookup_prefers_the_first_duplicate() {
        let table = Table::new(vec![
            record("DUP", "Plan", "first", "k", ""),
            record("DUP", "Plan", "second", "k", ""),
        ]);
        assert_eq!(lookup_by_phase_id(&table, "DUP").unwrap().process_action, "first");
    }
}
