// charts/ocean_track/src/lib.rs

// Ocean Survey Track Chart Core
//
// This library synthesizes oceanographic samples along a simulated survey
// track and renders them as static SVG scatter/line charts. Each sampled
// variable is encoded onto a visual channel (marker size, aspect, color),
// with one legend panel per encoded variable.

pub mod chart;
pub mod encoding;
pub mod ranges;
pub mod samples;

pub use chart::{chart_specs, encoding_modes, render_chart, variable_sets, ChartSpec};
pub use encoding::{Channel, EncodingMode, MarkerFill, MarkerRadii, Rgb, VisualAttributes};
pub use ranges::{compute_ranges, RangeSet, VariableRange};
pub use samples::{generate_track, Measurement};

// ============================================================================
// MEASURED VARIABLES
// ============================================================================

// A variable sampled along the survey track
//
// Oceanography: a towed CTD-style instrument records temperature and salinity
// continuously along the ship track. Here both are synthesized: temperature
// trends warmer over the run while salinity trends fresher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variable {
    Temperature,
    Salinity,
}

impl Variable {
    // Short key used in output filenames
    pub fn key(&self) -> &'static str {
        match self {
            Self::Temperature => "temp",
            Self::Salinity => "sal",
        }
    }

    // Human-readable label drawn as the legend title
    pub fn label(&self) -> &'static str {
        match self {
            Self::Temperature => "Temp. (C)",
            Self::Salinity => "Salinity (PSU)",
        }
    }
}

// ============================================================================
// TRACK AREA
// ============================================================================

// Canvas-space rectangle the survey track is laid out in
//
// The track enters at the left edge and sweeps to the right edge; the sine
// swing spans the full height of the area.
#[derive(Debug, Clone, Copy)]
pub struct TrackArea {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl TrackArea {
    // Create a new track area
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        assert!(width > 0.0 && height > 0.0, "Area dimensions must be positive");
        Self { x, y, width, height }
    }
}

// ============================================================================
// SURVEY CONFIGURATION
// ============================================================================

// Survey configuration
//
// Everything the sample generator needs: how many samples to take, the
// nominal value range of each variable, and the noise level. Immutable for
// the whole run; components receive it at construction.
#[derive(Debug, Clone, Copy)]
pub struct SurveyConfig {
    // Number of samples along the track
    pub sample_count: usize,

    // Nominal (low, high) temperature over the run, in °C
    pub temperature_range: (f64, f64),

    // Nominal (low, high) salinity over the run, in PSU
    pub salinity_range: (f64, f64),

    // Measurement noise as a fraction of each variable's span
    // 0.05 = every reading jitters by up to ±5% of the span
    pub noise: f64,

    // Canvas region the track is drawn in
    pub area: TrackArea,
}

impl SurveyConfig {
    // Create a new survey configuration
    pub fn new(
        sample_count: usize,
        temperature_range: (f64, f64),
        salinity_range: (f64, f64),
        noise: f64,
        area: TrackArea,
    ) -> Self {
        assert!(sample_count > 0, "Sample count must be positive");
        assert!(temperature_range.0 < temperature_range.1, "Temperature range must be increasing");
        assert!(salinity_range.0 < salinity_range.1, "Salinity range must be increasing");
        assert!(noise >= 0.0 && noise < 1.0, "Noise fraction must be in [0, 1)");
        Self { sample_count, temperature_range, salinity_range, noise, area }
    }
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self::new(
            30,
            (15.0, 20.0),
            (29.0, 32.0),
            0.05,
            TrackArea::new(300.0, 100.0, 1000.0, 600.0),
        )
    }
}

// ============================================================================
// CHART STYLE
// ============================================================================

// Chart styling
//
// Fixed drawing parameters shared by every chart: canvas size, colors, the
// marker radius range the size/shape encodings map into, and the legend
// geometry. Defaults reproduce the reference figures.
#[derive(Debug, Clone, Copy)]
pub struct ChartStyle {
    // Canvas size in SVG user units
    pub fig_size: (f64, f64),

    // Background fill for the canvas and the legend panels
    pub background: &'static str,

    // Stroke color for the track, legend outlines, and the arrowhead
    pub stroke: &'static str,

    // Track stroke width
    pub path_width: f64,

    // Marker fill used when no color encoding is active
    pub marker_fill: &'static str,

    // Marker radii used when no size/shape encoding is active
    pub marker_radii: (f64, f64),

    // (low, high) radius range the size and shape encodings map into
    pub radius_range: (f64, f64),

    // Number of graduation steps per legend (steps + 1 entries are drawn)
    pub legend_steps: usize,

    // Padding inside and around legend panels
    pub legend_padding: f64,

    // Legend panel width; height is derived from steps and padding
    pub legend_width: f64,

    // Vertical offset of both legend panels from the canvas top
    pub legend_top: f64,

    // Text size and family for legend titles and value labels
    pub font_size: f64,
    pub font_family: &'static str,
}

impl ChartStyle {
    // Legend panel size
    //
    // Height allows two padded symbol rows per entry plus a title row,
    // using the largest encodable radius so no symbol overflows the panel.
    pub fn legend_size(&self) -> (f64, f64) {
        let row = self.radius_range.1 + self.legend_padding;
        let height = 2.0 * (2 + self.legend_steps) as f64 * row;
        (self.legend_width, height)
    }

    // Position of a legend slot: slot 0 hugs the left canvas edge,
    // slot 1 the right
    pub fn legend_position(&self, slot: usize) -> (f64, f64) {
        assert!(slot < 2, "Only two legend slots are laid out");
        match slot {
            0 => (self.legend_padding, self.legend_top),
            _ => (
                self.fig_size.0 - self.legend_width - self.legend_padding,
                self.legend_top,
            ),
        }
    }
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            fig_size: (1600.0, 800.0),
            background: "white",
            stroke: "black",
            path_width: 4.0,
            marker_fill: "black",
            marker_radii: (15.0, 15.0),
            radius_range: (10.0, 20.0),
            legend_steps: 6,
            legend_padding: 20.0,
            legend_width: 180.0,
            legend_top: 100.0,
            font_size: 24.0,
            font_family: "sans-serif",
        }
    }
}
