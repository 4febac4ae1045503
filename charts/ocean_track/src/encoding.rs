// Value-to-visual encoding

use crate::ranges::VariableRange;
use crate::ChartStyle;

// ============================================================================
// VISUAL CHANNELS
// ============================================================================

// A visual channel a variable can be encoded onto
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    // Uniform marker radius grows with the value
    Size,

    // Marker aspect encodes the value: wide ellipses for high values,
    // tall ones for low values
    Shape,

    // Marker hue sweeps the upper half of the HSV circle,
    // cyan (low) through blue and magenta to red (high)
    Color,
}

impl Channel {
    // Name used in filenames and the manifest
    pub fn name(&self) -> &'static str {
        match self {
            Self::Size => "size",
            Self::Shape => "shape",
            Self::Color => "color",
        }
    }
}

// An encoding mode: the ordered channel set one chart uses
//
// With a single charted variable the whole mode applies to it; with two
// variables each takes the channel at its own index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodingMode {
    channels: Vec<Channel>,
}

impl EncodingMode {
    // Create a new mode from an ordered channel list
    pub fn new(channels: Vec<Channel>) -> Self {
        assert!(!channels.is_empty(), "Mode needs at least one channel");
        Self { channels }
    }

    #[inline]
    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    // Number of channel slots this mode provides
    #[inline]
    pub fn len(&self) -> usize {
        self.channels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    // Name used in filenames, e.g. "color-size"
    pub fn name(&self) -> String {
        let names: Vec<&str> = self.channels.iter().map(|c| c.name()).collect();
        names.join("-")
    }
}

// ============================================================================
// RGB COLOR
// ============================================================================

// 8-bit RGB triplet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    // CSS color string for SVG fill attributes
    pub fn css(&self) -> String {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }
}

// Convert HSV (all components in [0, 1]) to an 8-bit RGB triplet
//
// Standard sector decomposition: the hue picks one of six RGB sectors and
// the fractional part interpolates within it. Saturation and value are
// always 1.0 here but the full formula keeps the hue math readable.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> Rgb {
    let h = h.rem_euclid(1.0) * 6.0;
    let sector = h.floor();
    let f = h - sector;

    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    let (r, g, b) = match sector as u8 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Rgb {
        r: (255.0 * r) as u8,
        g: (255.0 * g) as u8,
        b: (255.0 * b) as u8,
    }
}

// ============================================================================
// VALUE-TO-VISUAL MAPPERS
// ============================================================================

// Uniform radius for a value, linear in the normalized value
//
// radius = r_hi * n + r_lo, so the drawn radii cover [r_lo, r_lo + r_hi]
pub fn size_radius(range: &VariableRange, value: f64, radius_range: (f64, f64)) -> f64 {
    let (lo, hi) = radius_range;
    hi * range.normalize(value) + lo
}

// Complementary radius pair whose aspect encodes the value
//
// One radius grows with the normalized value while the other shrinks; the
// two always sum to 2 * r_lo + r_hi regardless of the input.
pub fn shape_radii(range: &VariableRange, value: f64, radius_range: (f64, f64)) -> (f64, f64) {
    let (lo, hi) = radius_range;
    let a = range.normalize(value);
    let b = 1.0 - a;
    (hi * a + lo, hi * b + lo)
}

// Hue-mapped fill for a value
//
// The hue covers [0.5, 1.0]: the range minimum is cyan, the maximum wraps
// around to red. Full saturation and value throughout.
pub fn color_rgb(range: &VariableRange, value: f64) -> Rgb {
    let hue = 0.5 * (1.0 + range.normalize(value));
    hsv_to_rgb(hue, 1.0, 1.0)
}

// ============================================================================
// MARKER ATTRIBUTES
// ============================================================================

// Fill of a marker: the style default or a color-mapped value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerFill {
    Default,
    Mapped(Rgb),
}

impl MarkerFill {
    // Resolve to a CSS color, falling back to the style default
    pub fn resolve(&self, style: &ChartStyle) -> String {
        match self {
            Self::Default => style.marker_fill.to_string(),
            Self::Mapped(rgb) => rgb.css(),
        }
    }
}

// Radii of a marker: the style default, a size-mapped circle, or a
// shape-mapped ellipse
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MarkerRadii {
    Default,
    Sized(f64),
    Shaped(f64, f64),
}

impl MarkerRadii {
    // Resolve to concrete (rx, ry), falling back to the style default
    pub fn resolve(&self, style: &ChartStyle) -> (f64, f64) {
        match self {
            Self::Default => style.marker_radii,
            Self::Sized(r) => (*r, *r),
            Self::Shaped(rx, ry) => (*rx, *ry),
        }
    }
}

// Accumulated visual attributes for one marker
//
// Every channel starts at its tagged Default and picks up a mapped value
// as each variable's channels are applied, so a two-variable chart can
// compose e.g. color from temperature with size from salinity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualAttributes {
    pub fill: MarkerFill,
    pub radii: MarkerRadii,
}

impl VisualAttributes {
    pub fn new() -> Self {
        Self {
            fill: MarkerFill::Default,
            radii: MarkerRadii::Default,
        }
    }

    // Apply one variable's assigned channels for a concrete value
    //
    // Channels outside the assignment are left untouched.
    pub fn apply(
        &mut self,
        channels: &[Channel],
        range: &VariableRange,
        value: f64,
        style: &ChartStyle,
    ) {
        for channel in channels {
            match channel {
                Channel::Size => {
                    self.radii = MarkerRadii::Sized(size_radius(range, value, style.radius_range));
                }
                Channel::Shape => {
                    let (rx, ry) = shape_radii(range, value, style.radius_range);
                    self.radii = MarkerRadii::Shaped(rx, ry);
                }
                Channel::Color => {
                    self.fill = MarkerFill::Mapped(color_rgb(range, value));
                }
            }
        }
    }
}

impl Default for VisualAttributes {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range() -> VariableRange {
        VariableRange { min: 10.0, max: 20.0, span: 10.0 }
    }

    #[test]
    fn test_size_monotonic() {
        let r = range();
        let rr = (10.0, 20.0);
        let mut prev = f64::NEG_INFINITY;
        for i in 0..=10 {
            let v = 10.0 + i as f64;
            let radius = size_radius(&r, v, rr);
            assert!(radius >= prev, "size mapping must be non-decreasing");
            prev = radius;
        }
        assert_eq!(size_radius(&r, 10.0, rr), 10.0);
        assert_eq!(size_radius(&r, 20.0, rr), 30.0);
    }

    #[test]
    fn test_shape_radii_sum_constant() {
        let r = range();
        let rr = (10.0, 20.0);
        for i in 0..=10 {
            let v = 10.0 + i as f64;
            let (a, b) = shape_radii(&r, v, rr);
            // 2 * r_lo + r_hi
            assert!((a + b - 40.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_color_endpoints() {
        let r = range();
        // Minimum: hue 0.5 = cyan; maximum: hue 1.0 wraps to red
        assert_eq!(color_rgb(&r, 10.0), Rgb { r: 0, g: 255, b: 255 });
        assert_eq!(color_rgb(&r, 20.0), Rgb { r: 255, g: 0, b: 0 });
    }

    #[test]
    fn test_hsv_sectors() {
        assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), Rgb { r: 255, g: 0, b: 0 });
        assert_eq!(hsv_to_rgb(1.0 / 3.0, 1.0, 1.0), Rgb { r: 0, g: 255, b: 0 });
        assert_eq!(hsv_to_rgb(2.0 / 3.0, 1.0, 1.0), Rgb { r: 0, g: 0, b: 255 });
        assert_eq!(hsv_to_rgb(0.75, 1.0, 1.0), Rgb { r: 127, g: 0, b: 255 });
    }

    #[test]
    fn test_color_channels_in_range() {
        let r = range();
        for i in 0..=20 {
            let v = 10.0 + 0.5 * i as f64;
            let rgb = color_rgb(&r, v);
            // u8 bounds hold by construction; the hue must stay in the
            // upper half circle, which never produces a pure green
            assert!(!(rgb.g == 255 && rgb.r == 0 && rgb.b == 0));
        }
    }

    #[test]
    fn test_attributes_compose() {
        let style = ChartStyle::default();
        let r = range();

        let mut attrs = VisualAttributes::new();
        assert_eq!(attrs.radii.resolve(&style), (15.0, 15.0));
        assert_eq!(attrs.fill.resolve(&style), "black");

        // Color from one variable, size from another
        attrs.apply(&[Channel::Color], &r, 20.0, &style);
        attrs.apply(&[Channel::Size], &r, 10.0, &style);
        assert_eq!(attrs.fill, MarkerFill::Mapped(Rgb { r: 255, g: 0, b: 0 }));
        assert_eq!(attrs.radii.resolve(&style), (10.0, 10.0));
    }

    #[test]
    fn test_mode_name() {
        let mode = EncodingMode::new(vec![Channel::Color, Channel::Size]);
        assert_eq!(mode.name(), "color-size");
        assert_eq!(mode.len(), 2);
    }
}
