use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::StageCount;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.65, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Stage colours
// ---------------------------------------------------------------------------

/// One colour per lifecycle stage, assigned in lifecycle order so that
/// neighbouring stages get neighbouring hues.
#[derive(Debug, Clone, Default)]
pub struct StageColors {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl StageColors {
    pub fn new(stages: &[StageCount]) -> Self {
        let palette = generate_palette(stages.len());
        let mapping = stages
            .iter()
            .zip(palette)
            .map(|(s, c)| (s.stage.clone(), c))
            .collect();

        StageColors {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Colour for a stage; unknown stages fall back to grey.
    pub fn color_for(&self, stage: &str) -> Color32 {
        self.mapping
            .get(stage)
            .copied()
            .unwrap_or(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stage(name: &str) -> StageCount {
        StageCount {
            stage: name.to_string(),
            count: 1,
        }
    }

    #[test]
    fn palette_has_requested_size() {
        assert!(generate_palette(0).is_empty());
        assert_eq!(generate_palette(7).len(), 7);
    }

    #[test]
    fn palette_colours_are_distinct() {
        let colors = generate_palette(7);
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn unknown_stage_is_grey() {
        let colors = StageColors::new(&[stage("Strategy"), stage("Launch")]);
        assert_ne!(colors.color_for("Strategy"), colors.color_for("Launch"));
        assert_eq!(colors.color_for("Retired"), Color32::GRAY);
    }
}
