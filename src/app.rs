use std::sync::Arc;

use eframe::egui;

use crate::data::model::Table;
use crate::state::AppState;
use crate::ui::{detail, panels, tabs};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct CampaignDashboardApp {
    pub state: AppState,
}

impl CampaignDashboardApp {
    pub fn new(table: Arc<Table>) -> Self {
        Self {
            state: AppState::new(table),
        }
    }
}

impl eframe::App for CampaignDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title and summary ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Bottom panel: phase detail ----
        egui::TopBottomPanel::bottom("detail_panel")
            .resizable(true)
            .default_height(300.0)
            .show(ctx, |ui| {
                detail::detail_panel(ui, &mut self.state);
            });

        // ---- Central panel: tabs ----
        egui::CentralPanel::default().show(ctx, |ui| {
            tabs::tab_view(ui, &mut self.state);
        });
    }
}
