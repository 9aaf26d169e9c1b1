use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::REQUIRED_COLUMNS;
use crate::data::query;
use crate::state::{AppState, Tab};
use crate::ui::charts;

const ROW_HEIGHT: f32 = 22.0;
const TOP_TOOLS: usize = 10;

// ---------------------------------------------------------------------------
// Central panel – tab selector and views
// ---------------------------------------------------------------------------

pub fn tab_view(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Campaign Lifecycle Phases");
    ui.label(RichText::new(state.showing_label()).strong());
    ui.add_space(4.0);

    ui.horizontal(|ui: &mut Ui| {
        for tab in Tab::ALL {
            ui.selectable_value(&mut state.tab, tab, tab.title());
        }
    });
    ui.separator();

    match state.tab {
        Tab::Table => table_tab(ui, state),
        Tab::ByStage => by_stage_tab(ui, state),
        Tab::TechStack => tech_stack_tab(ui, state),
        Tab::Kpis => kpi_tab(ui, state),
    }
}

// ---------------------------------------------------------------------------
// Table View
// ---------------------------------------------------------------------------

fn table_tab(ui: &mut Ui, state: &mut AppState) {
    if state.filtered.is_empty() {
        ui.label("No phases match the current filters.");
        return;
    }

    let mut clicked: Option<String> = None;
    let records = state.filtered.records();
    let selected = state.selected_phase.as_deref();

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::auto().at_least(70.0))
        .column(Column::auto().at_least(110.0))
        .columns(Column::initial(220.0).at_least(80.0).clip(true), REQUIRED_COLUMNS.len() - 2)
        .min_scrolled_height(0.0)
        .header(ROW_HEIGHT, |mut header| {
            for title in REQUIRED_COLUMNS {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, records.len(), |mut row| {
                let record = &records[row.index()];
                row.col(|ui| {
                    let is_selected = selected == Some(record.phase_id.as_str());
                    if ui.selectable_label(is_selected, &record.phase_id).clicked() {
                        clicked = Some(record.phase_id.clone());
                    }
                });
                for text in [
                    &record.lifecycle_stage,
                    &record.process_action,
                    &record.sop,
                    &record.raci_role,
                    &record.critical_kpi,
                    &record.tech_stack,
                ] {
                    row.col(|ui| {
                        ui.add(egui::Label::new(text.as_str()).truncate());
                    });
                }
            });
        });

    if let Some(phase_id) = clicked {
        state.select_phase(&phase_id);
    }
}

// ---------------------------------------------------------------------------
// By Stage (always the full table)
// ---------------------------------------------------------------------------

fn by_stage_tab(ui: &mut Ui, state: &AppState) {
    ui.strong("Phases by Lifecycle Stage");
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for count in &state.stage_counts {
                let color = state.stage_colors.color_for(&count.stage);
                let header = RichText::new(format!("{} ({} phases)", count.stage, count.count))
                    .strong()
                    .color(color);

                egui::CollapsingHeader::new(header)
                    .id_salt(&count.stage)
                    .default_open(false)
                    .show(ui, |ui: &mut Ui| {
                        for record in query::records_in_stage(&state.table, &count.stage) {
                            ui.label(
                                RichText::new(format!("{}: {}", record.phase_id, record.process_action))
                                    .strong(),
                            );
                            ui.label(RichText::new(format!("KPI: {}", record.critical_kpi)).small());
                            ui.label(RichText::new(format!("RACI: {}", record.raci_role)).small());
                            ui.add_space(4.0);
                        }
                    });
            }
        });
}

// ---------------------------------------------------------------------------
// Tech Stack
// ---------------------------------------------------------------------------

fn tech_stack_tab(ui: &mut Ui, state: &AppState) {
    ui.strong("Enterprise Technology Stack");
    if state.tool_counts.is_empty() {
        ui.colored_label(Color32::LIGHT_BLUE, "No tech stack data available");
        return;
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            let height = (state.tool_counts.len() as f32 * 18.0).clamp(200.0, 600.0);
            charts::tool_bar_chart(ui, &state.tool_counts, height);

            ui.add_space(8.0);
            ui.heading("Most Used Tools");
            for tool in query::top_tools(&state.tool_counts, TOP_TOOLS) {
                ui.label(format!("• {}: Used in {} phases", tool.tool, tool.count));
            }
        });
}

// ---------------------------------------------------------------------------
// KPIs
// ---------------------------------------------------------------------------

fn kpi_tab(ui: &mut Ui, state: &AppState) {
    ui.strong("Critical KPIs by Phase");

    let mut by_stage = state.stage_counts.clone();
    by_stage.sort_by(|a, b| a.stage.cmp(&b.stage));

    ui.columns(2, |cols| {
        cols[0].heading("KPI by Stage");
        charts::stage_bar_chart(&mut cols[0], "kpi_stage_chart", &by_stage, &state.stage_colors, 320.0);

        cols[1].heading("KPI Categories");
        ScrollArea::vertical()
            .id_salt("kpi_grid_scroll")
            .auto_shrink([false, false])
            .show(&mut cols[1], |ui: &mut Ui| {
                egui::Grid::new("kpi_grid")
                    .striped(true)
                    .num_columns(3)
                    .show(ui, |ui: &mut Ui| {
                        ui.strong("Phase ID");
                        ui.strong("Lifecycle Stage");
                        ui.strong("Critical KPI");
                        ui.end_row();

                        for record in state.table.iter() {
                            ui.label(&record.phase_id);
                            ui.colored_label(
                                state.stage_colors.color_for(&record.lifecycle_stage),
                                &record.lifecycle_stage,
                            );
                            ui.label(&record.critical_kpi);
                            ui.end_row();
                        }
                    });
            });
    });
}
