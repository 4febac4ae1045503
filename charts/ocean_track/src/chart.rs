// SVG Chart Assembly

use crate::encoding::{Channel, EncodingMode, VisualAttributes};
use crate::ranges::RangeSet;
use crate::samples::Measurement;
use crate::{ChartStyle, Variable};

// ============================================================================
// FIXED CONFIGURATIONS
// ============================================================================

/// Variable sets charted by default: temperature alone, then both variables
pub fn variable_sets() -> Vec<Vec<Variable>> {
    vec![
        vec![Variable::Temperature],
        vec![Variable::Temperature, Variable::Salinity],
    ]
}

/// The five fixed encoding modes
pub fn encoding_modes() -> Vec<EncodingMode> {
    vec![
        EncodingMode::new(vec![Channel::Size]),
        EncodingMode::new(vec![Channel::Shape]),
        EncodingMode::new(vec![Channel::Color]),
        EncodingMode::new(vec![Channel::Color, Channel::Size]),
        EncodingMode::new(vec![Channel::Color, Channel::Shape]),
    ]
}

// ============================================================================
// CHART SPECIFICATION
// ============================================================================

/// One chart: a variable set drawn with an encoding mode
#[derive(Debug, Clone)]
pub struct ChartSpec {
    pub variables: Vec<Variable>,
    pub mode: EncodingMode,
}

impl ChartSpec {
    pub fn new(variables: Vec<Variable>, mode: EncodingMode) -> Self {
        assert!(!variables.is_empty(), "Chart needs at least one variable");
        Self { variables, mode }
    }

    /// Whether the mode has a channel slot for every variable
    ///
    /// A lone variable can use any mode, but with more than one variable
    /// each needs its own slot, so e.g. a two-variable chart is skipped
    /// for the single-channel modes.
    pub fn is_valid(&self) -> bool {
        self.variables.len() <= self.mode.len()
    }

    /// Channels assigned to variable `i`: a lone variable takes the whole
    /// mode, otherwise each variable takes the slot at its own index
    pub fn assigned_channels(&self, i: usize) -> &[Channel] {
        if self.variables.len() == 1 {
            self.mode.channels()
        } else {
            std::slice::from_ref(&self.mode.channels()[i])
        }
    }

    /// Deterministic output filename: variable keys then channel names,
    /// all joined by '-', e.g. "temp-sal-color-size.svg"
    pub fn filename(&self) -> String {
        let vars: Vec<&str> = self.variables.iter().map(|v| v.key()).collect();
        format!("{}-{}.svg", vars.join("-"), self.mode.name())
    }
}

/// Enumerate the valid (variable set, mode) combinations
pub fn chart_specs() -> Vec<ChartSpec> {
    let mut specs = Vec::new();
    for vars in variable_sets() {
        for mode in encoding_modes() {
            let spec = ChartSpec::new(vars.clone(), mode);
            if spec.is_valid() {
                specs.push(spec);
            }
        }
    }
    specs
}

// ============================================================================
// SVG RENDERING
// ============================================================================

/// Render one chart to a complete SVG document
///
/// Draws the background, the survey track with an arrowhead on its final
/// segment, one legend panel per encoded variable, and one marker per
/// sample except the last (the arrowhead occupies the final position).
pub fn render_chart(
    spec: &ChartSpec,
    samples: &[Measurement],
    ranges: &RangeSet,
    style: &ChartStyle,
) -> String {
    let (fig_w, fig_h) = style.fig_size;

    let mut body = String::new();

    // Background
    body.push_str(&format!(
        r##"<rect width="{}" height="{}" fill="{}" stroke="none"/>"##,
        fig_w, fig_h, style.background
    ));
    body.push('\n');

    // Survey track
    body.push_str(&render_track(samples, style));

    // One legend per (variable, channel slot), drawn once up front
    for (i, var) in spec.variables.iter().enumerate() {
        body.push_str(&render_legend(*var, spec.assigned_channels(i), ranges, style, i));
    }

    // Track markers
    for m in samples.iter().take(samples.len().saturating_sub(1)) {
        let mut attrs = VisualAttributes::new();
        for (i, var) in spec.variables.iter().enumerate() {
            attrs.apply(
                spec.assigned_channels(i),
                ranges.get(*var),
                m.value(*var),
                style,
            );
        }

        let (rx, ry) = attrs.radii.resolve(style);
        body.push_str(&format!(
            r##"<ellipse cx="{:.2}" cy="{:.2}" rx="{:.2}" ry="{:.2}" fill="{}"/>"##,
            m.position.0,
            m.position.1,
            rx,
            ry,
            attrs.fill.resolve(style)
        ));
        body.push('\n');
    }

    format!(
        r##"<svg width="{fig_w}" height="{fig_h}" xmlns="http://www.w3.org/2000/svg">
<defs>
<marker id="arrow" refX="0" refY="3" markerWidth="10" markerHeight="10" orient="auto">
<path d="M0,0 L0,6 L9,3 z" fill="{arrow}"/>
</marker>
</defs>
{body}</svg>
"##,
        fig_w = fig_w,
        fig_h = fig_h,
        arrow = style.stroke,
        body = body,
    )
}

/// Polyline through every sample position in track order, with the
/// arrowhead marker on the final segment
fn render_track(samples: &[Measurement], style: &ChartStyle) -> String {
    if samples.is_empty() {
        return String::new();
    }

    let points: Vec<String> = samples
        .iter()
        .map(|m| format!("{:.2},{:.2}", m.position.0, m.position.1))
        .collect();

    format!(
        r##"<polyline points="{}" fill="none" stroke="{}" stroke-width="{}" marker-end="url(#arrow)"/>
"##,
        points.join(" "),
        style.stroke,
        style.path_width
    )
}

/// Legend panel for one variable and its assigned channels
///
/// A titled box with legend_steps + 1 graduated example symbols, listed
/// maximum-first, each labelled with its value. Drawn exactly once per
/// chart for each encoded variable.
fn render_legend(
    var: Variable,
    channels: &[Channel],
    ranges: &RangeSet,
    style: &ChartStyle,
    slot: usize,
) -> String {
    let range = ranges.get(var);
    let (lx, ly) = style.legend_position(slot);
    let (lw, lh) = style.legend_size();
    let pad = style.legend_padding;
    let r_hi = style.radius_range.1;

    let mut svg = String::new();

    // Panel box
    svg.push_str(&format!(
        r##"<rect x="{}" y="{}" width="{}" height="{}" fill="{}" stroke="{}"/>"##,
        lx, ly, lw, lh, style.background, style.stroke
    ));
    svg.push('\n');

    // Title
    svg.push_str(&format!(
        r##"<text x="{:.1}" y="{:.1}" font-size="{}" font-family="{}" text-anchor="middle">{}</text>"##,
        lx + 0.5 * lw,
        ly + style.font_size + pad,
        style.font_size,
        style.font_family,
        var.label()
    ));
    svg.push('\n');

    // Graduated entries, maximum value first
    let steps = style.legend_steps;
    for i in 0..=steps {
        let value = range.lerp((steps - i) as f64 / steps as f64);

        let mut attrs = VisualAttributes::new();
        attrs.apply(channels, range, value, style);
        let (rx, ry) = attrs.radii.resolve(style);

        let sx = lx + pad + r_hi;
        let sy = ly + pad + 2.0 * (1 + i) as f64 * (r_hi + pad);
        let tx = sx + pad + r_hi;
        let ty = sy + 0.5 * style.font_size;

        svg.push_str(&format!(
            r##"<ellipse cx="{:.1}" cy="{:.1}" rx="{:.2}" ry="{:.2}" fill="{}"/>"##,
            sx,
            sy,
            rx,
            ry,
            attrs.fill.resolve(style)
        ));
        svg.push('\n');
        svg.push_str(&format!(
            r##"<text x="{:.1}" y="{:.1}" font-size="{}" font-family="{}" text-anchor="start">{:9.3}</text>"##,
            tx, ty, style.font_size, style.font_family, value
        ));
        svg.push('\n');
    }

    svg
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranges::compute_ranges;
    use crate::samples::generate_track;
    use crate::SurveyConfig;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn fixture(samples: usize) -> (Vec<Measurement>, RangeSet, ChartStyle) {
        let config = SurveyConfig {
            sample_count: samples,
            ..SurveyConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(42);
        let track = generate_track(&config, &mut rng);
        let ranges = compute_ranges(&track);
        (track, ranges, ChartStyle::default())
    }

    fn count(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    #[test]
    fn test_valid_combinations() {
        let specs = chart_specs();
        // 1 variable x 5 modes, plus 2 variables x the two 2-channel modes
        assert_eq!(specs.len(), 7);
        assert_eq!(specs.iter().filter(|s| s.variables.len() == 2).count(), 2);
    }

    #[test]
    fn test_filename_determinism() {
        let spec = ChartSpec::new(
            vec![Variable::Temperature, Variable::Salinity],
            EncodingMode::new(vec![Channel::Color, Channel::Size]),
        );
        assert_eq!(spec.filename(), "temp-sal-color-size.svg");
        assert_eq!(spec.filename(), "temp-sal-color-size.svg");

        let single = ChartSpec::new(
            vec![Variable::Temperature],
            EncodingMode::new(vec![Channel::Shape]),
        );
        assert_eq!(single.filename(), "temp-shape.svg");
    }

    #[test]
    fn test_two_variable_needs_two_slots() {
        let spec = ChartSpec::new(
            vec![Variable::Temperature, Variable::Salinity],
            EncodingMode::new(vec![Channel::Color]),
        );
        assert!(!spec.is_valid());
    }

    #[test]
    fn test_single_variable_color_chart() {
        let (track, ranges, style) = fixture(30);
        let spec = ChartSpec::new(
            vec![Variable::Temperature],
            EncodingMode::new(vec![Channel::Color]),
        );
        let svg = render_chart(&spec, &track, &ranges, &style);

        // Background rect + exactly one legend panel rect
        assert_eq!(count(&svg, "<rect"), 2);
        // One title + 7 graduated value labels
        assert_eq!(count(&svg, "<text"), 8);
        assert_eq!(count(&svg, "Temp. (C)"), 1);
        // 7 legend symbols + 29 track markers (last sample is skipped)
        assert_eq!(count(&svg, "<ellipse"), 7 + 29);
        // Color encoding fills markers with mapped colors, not the default
        assert!(count(&svg, r#"fill="rgb("#) >= 29);
        // Track polyline carries the arrowhead
        assert_eq!(count(&svg, "<polyline"), 1);
        assert_eq!(count(&svg, r##"marker-end="url(#arrow)""##), 1);
    }

    #[test]
    fn test_single_sample_chart_has_no_markers() {
        let (track, ranges, style) = fixture(1);
        let spec = ChartSpec::new(
            vec![Variable::Temperature],
            EncodingMode::new(vec![Channel::Color]),
        );
        let svg = render_chart(&spec, &track, &ranges, &style);

        // Legend symbols only; the single sample sits under the arrowhead
        assert_eq!(count(&svg, "<ellipse"), 7);
    }

    #[test]
    fn test_two_variable_chart_has_two_legends() {
        let (track, ranges, style) = fixture(30);
        let spec = ChartSpec::new(
            vec![Variable::Temperature, Variable::Salinity],
            EncodingMode::new(vec![Channel::Color, Channel::Size]),
        );
        let svg = render_chart(&spec, &track, &ranges, &style);

        // Background + two legend panels
        assert_eq!(count(&svg, "<rect"), 3);
        assert_eq!(count(&svg, "Temp. (C)"), 1);
        assert_eq!(count(&svg, "Salinity (PSU)"), 1);
        // 2 x 7 legend symbols + 29 markers
        assert_eq!(count(&svg, "<ellipse"), 14 + 29);
    }

    #[test]
    fn test_size_only_markers_keep_default_fill() {
        let (track, ranges, style) = fixture(10);
        let spec = ChartSpec::new(
            vec![Variable::Temperature],
            EncodingMode::new(vec![Channel::Size]),
        );
        let svg = render_chart(&spec, &track, &ranges, &style);

        // No color channel active anywhere, so every fill is a named color
        assert_eq!(count(&svg, r#"fill="rgb("#), 0);
        assert!(count(&svg, r#"fill="black""#) >= 9);
    }
}
