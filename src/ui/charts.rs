use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, Legend, Plot};

use crate::color::StageColors;
use crate::data::model::{StageCount, ToolCount};

// ---------------------------------------------------------------------------
// Bar charts (static, no pan/zoom)
// ---------------------------------------------------------------------------

fn static_plot(id: &str, height: f32) -> Plot<'_> {
    Plot::new(id)
        .height(height)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show_x(false)
        .y_axis_label("Phases")
}

/// One coloured bar per stage, in the order given.
pub fn stage_bar_chart(ui: &mut Ui, id: &str, counts: &[StageCount], colors: &StageColors, height: f32) {
    static_plot(id, height)
        .legend(Legend::default())
        .show(ui, |plot_ui| {
            for (i, c) in counts.iter().enumerate() {
                let color = colors.color_for(&c.stage);
                let bar = Bar::new(i as f64, c.count as f64)
                    .width(0.7)
                    .name(&c.stage)
                    .fill(color);
                plot_ui.bar_chart(BarChart::new(vec![bar]).name(&c.stage).color(color));
            }
        });
}

/// Horizontal bars for the tool ranking; the most used tool is on top.
pub fn tool_bar_chart(ui: &mut Ui, counts: &[ToolCount], height: f32) {
    let n = counts.len();
    let bars: Vec<Bar> = counts
        .iter()
        .enumerate()
        .map(|(i, c)| {
            Bar::new((n - i) as f64, c.count as f64)
                .width(0.8)
                .name(&c.tool)
                .fill(Color32::from_rgb(102, 126, 234))
        })
        .collect();

    static_plot("tool_chart", height)
        .x_axis_label("Phases")
        .y_axis_label("")
        .show_x(true)
        .show_y(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).horizontal().name("Tools"));
        });
}
