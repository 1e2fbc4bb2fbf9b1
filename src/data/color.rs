//! Color helpers: the plasma ramp, darkening, and hex parsing.

use egui::Color32;
use once_cell::sync::Lazy;

/// Default point fill (`#667eea`).
pub const DEFAULT_FILL: Color32 = Color32::from_rgb(0x66, 0x7e, 0xea);
/// Default point stroke (`#5a67d8`).
pub const DEFAULT_STROKE: Color32 = Color32::from_rgb(0x5a, 0x67, 0xd8);

/// Amount used to derive a stroke from a color-encoded fill.
pub const STROKE_DARKEN: f32 = 0.5;

// Plasma control points at t = 0, 1/8, ..., 1.
const PLASMA_STOPS: [(u8, u8, u8); 9] = [
    (13, 8, 135),
    (75, 3, 161),
    (126, 3, 168),
    (168, 34, 150),
    (204, 71, 120),
    (230, 108, 92),
    (248, 149, 64),
    (253, 197, 39),
    (240, 249, 33),
];

const LUT_SIZE: usize = 256;

static PLASMA_LUT: Lazy<Vec<Color32>> = Lazy::new(|| build_lut(&PLASMA_STOPS));

fn build_lut(stops: &[(u8, u8, u8)]) -> Vec<Color32> {
    let segments = (stops.len() - 1) as f32;
    (0..LUT_SIZE)
        .map(|i| {
            let t = i as f32 / (LUT_SIZE - 1) as f32;
            let pos = t * segments;
            let idx = (pos.floor() as usize).min(stops.len() - 2);
            let s = pos - idx as f32;
            let (a, b) = (stops[idx], stops[idx + 1]);
            Color32::from_rgb(
                lerp_u8(a.0, b.0, s),
                lerp_u8(a.1, b.1, s),
                lerp_u8(a.2, b.2, s),
            )
        })
        .collect()
}

fn lerp_u8(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 + (b as f32 - a as f32) * t).round().clamp(0.0, 255.0) as u8
}

/// Sequential color ramps available to [`SequentialColorScale`](crate::data::scale::SequentialColorScale).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorRamp {
    Plasma,
}

impl ColorRamp {
    /// Sample the ramp at `t`, clamped to `[0, 1]`. NaN maps to the start.
    pub fn sample(self, t: f64) -> Color32 {
        let lut: &[Color32] = match self {
            ColorRamp::Plasma => PLASMA_LUT.as_slice(),
        };
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let idx = (t * (lut.len() - 1) as f64).round() as usize;
        lut[idx]
    }
}

/// Darken a color by multiplying its RGB channels with `0.7^k`. Alpha is kept.
pub fn darker(color: Color32, k: f32) -> Color32 {
    let f = 0.7f32.powf(k);
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    Color32::from_rgba_unmultiplied(
        (r as f32 * f).round() as u8,
        (g as f32 * f).round() as u8,
        (b as f32 * f).round() as u8,
        a,
    )
}

/// Parse `#rrggbb` (leading `#` optional).
pub fn parse_hex(s: &str) -> Option<Color32> {
    let hex = s.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color32::from_rgb(r, g, b))
}

/// Format as lowercase `#rrggbb`.
pub fn to_hex(color: Color32) -> String {
    let [r, g, b, _] = color.to_srgba_unmultiplied();
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}
