use eframe::egui::{self, Color32, Frame, RichText, ScrollArea, Ui};

use crate::data::model::Record;
use crate::data::query;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Detailed phase analysis (bottom panel)
// ---------------------------------------------------------------------------

pub fn detail_panel(ui: &mut Ui, state: &mut AppState) {
    ui.add_space(4.0);
    ui.heading("Detailed Phase Analysis");

    phase_selector(ui, state);
    ui.separator();

    let state: &AppState = state;

    ScrollArea::vertical()
        .id_salt("detail_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| match state.selected_record() {
            Some(record) => record_detail(ui, state, record),
            None => {
                ui.label("Select a phase for detailed information.");
            }
        });
}

fn phase_selector(ui: &mut Ui, state: &mut AppState) {
    let mut choice = state.selected_phase.clone().unwrap_or_default();
    egui::ComboBox::from_id_salt("phase_selector")
        .selected_text(choice.as_str())
        .show_ui(ui, |ui: &mut Ui| {
            for id in state.table.phase_ids() {
                ui.selectable_value(&mut choice, id.to_string(), id);
            }
        });
    if state.selected_phase.as_deref() != Some(choice.as_str()) && !choice.is_empty() {
        state.select_phase(&choice);
    }
}

fn record_detail(ui: &mut Ui, state: &AppState, record: &Record) {
    ui.columns(2, |cols| {
        cols[0].heading(&record.phase_id);
        cols[0].horizontal(|ui: &mut Ui| {
            ui.strong("Stage:");
            ui.colored_label(
                state.stage_colors.color_for(&record.lifecycle_stage),
                &record.lifecycle_stage,
            );
        });
        cols[0].horizontal_wrapped(|ui: &mut Ui| {
            ui.strong("Action:");
            ui.label(&record.process_action);
        });

        cols[1].strong("Standard Operating Procedure");
        callout(&mut cols[1], Color32::from_rgb(40, 70, 110), &record.sop);
    });

    ui.add_space(6.0);
    ui.columns(2, |cols| {
        cols[0].strong("RACI Matrix");
        callout(&mut cols[0], Color32::from_rgb(110, 85, 30), &record.raci_role);

        cols[1].strong("Critical KPI");
        callout(&mut cols[1], Color32::from_rgb(35, 95, 55), &record.critical_kpi);
    });

    ui.add_space(6.0);
    ui.strong("Tech Stack");
    let tools = query::tools_for(record);
    if tools.is_empty() {
        ui.label("No tools listed.");
        return;
    }
    ui.horizontal_wrapped(|ui: &mut Ui| {
        for tool in tools {
            Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
                ui.label(RichText::new(tool).strong());
            });
        }
    });
}

/// Filled box around a block of free text.
fn callout(ui: &mut Ui, fill: Color32, text: &str) {
    Frame::group(ui.style())
        .fill(fill)
        .show(ui, |ui: &mut Ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(text).color(Color32::WHITE));
        });
}
