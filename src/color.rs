use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

/// Background of the highlighted amount column in the grid (`#d3d3d3`).
pub const AMOUNT_HIGHLIGHT: Color32 = Color32::from_rgb(0xd3, 0xd3, 0xd3);

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.65, 0.5);
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
// Bar colours by decade
// ---------------------------------------------------------------------------

/// Colours chart bars by the decade of their year, so long ranges stay readable.
#[derive(Debug, Clone)]
pub struct DecadePalette {
    first_decade: i32,
    colors: Vec<Color32>,
}

impl DecadePalette {
    /// One colour per decade touched by `first..=last`.
    pub fn new(first: i32, last: i32) -> Self {
        let first_decade = first.div_euclid(10);
        let n = (last.div_euclid(10) - first_decade + 1).max(1) as usize;
        DecadePalette {
            first_decade,
            colors: generate_palette(n),
        }
    }

    pub fn color_for(&self, year: i32) -> Color32 {
        let offset = year.div_euclid(10) - self.first_decade;
        usize::try_from(offset)
            .ok()
            .and_then(|i| self.colors.get(i))
            .copied()
            .unwrap_or(Color32::GRAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_sizes() {
        assert!(generate_palette(0).is_empty());
        let colors = generate_palette(4);
        assert_eq!(colors.len(), 4);
        assert_ne!(colors[0], colors[2]);
    }

    #[test]
    fn same_decade_same_colour() {
        let p = DecadePalette::new(1960, 2023);
        assert_eq!(p.color_for(1961), p.color_for(1969));
        assert_ne!(p.color_for(1969), p.color_for(1970));
        assert_eq!(p.color_for(1900), Color32::GRAY);
        assert_eq!(p.color_for(2050), Color32::GRAY);
    }
}
