use eframe::egui::{self, RichText, Ui};

use crate::data::model::{StageFilter, ALL_STAGES};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters & Controls");
    ui.separator();

    // ---- Free-text search ----
    ui.strong("Search by Phase ID, Action, or KPI");
    let mut term = state.criteria.search_term.clone();
    let response = ui.add(
        egui::TextEdit::singleline(&mut term)
            .hint_text("e.g. ROI, launch, MC-07")
            .desired_width(f32::INFINITY),
    );
    if response.changed() {
        state.set_search_term(term);
    }
    ui.add_space(8.0);

    // ---- Stage selector ----
    ui.strong("Filter by Lifecycle Stage");
    let current = state.criteria.stage_filter.label().to_string();
    let mut choice = current.clone();
    egui::ComboBox::from_id_salt("stage_filter")
        .selected_text(current.as_str())
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            let labels = std::iter::once(ALL_STAGES).chain(state.stage_options.iter().map(String::as_str));
            for label in labels {
                ui.selectable_value(&mut choice, label.to_string(), label);
            }
        });
    if choice != current {
        state.set_stage_filter(StageFilter::from_label(&choice));
    }
    ui.add_space(8.0);

    if ui
        .add_enabled(!state.criteria.is_empty(), egui::Button::new("Reset filters"))
        .clicked()
    {
        state.clear_filters();
    }

    ui.separator();

    // ---- Stage legend ----
    ui.strong("Stages");
    for count in &state.stage_counts {
        ui.horizontal(|ui: &mut Ui| {
            ui.colored_label(state.stage_colors.color_for(&count.stage), "■");
            ui.label(format!("{}  ({})", count.stage, count.count));
        });
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the title and the dataset summary.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.add_space(4.0);
    ui.heading("Marketing Campaign Lifecycle Dashboard");
    ui.label(
        RichText::new(format!(
            "Marketing Operations Blueprint | {}-Phase Framework",
            state.summary.phases
        ))
        .italics(),
    );

    ui.horizontal(|ui: &mut Ui| {
        summary_metric(ui, "Total Phases", state.summary.phases);
        ui.separator();
        summary_metric(ui, "Lifecycle Stages", state.summary.stages);
        ui.separator();
        summary_metric(ui, "Tools", state.summary.tools);
    });
    ui.add_space(4.0);
}

fn summary_metric(ui: &mut Ui, label: &str, value: usize) {
    ui.label(label);
    ui.label(RichText::new(value.to_string()).strong().size(18.0));
}
