// Per-variable value ranges

use crate::samples::Measurement;
use crate::Variable;

// ============================================================================
// VARIABLE RANGE
// ============================================================================

// Observed (min, max, span) of one variable over a sample set
//
// Computed once at startup and read-only afterwards; every encoding
// normalizes against these extremes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariableRange {
    pub min: f64,
    pub max: f64,
    pub span: f64,
}

impl VariableRange {
    // Scan a sample set for one variable's extremes
    pub fn from_samples(samples: &[Measurement], var: Variable) -> Self {
        assert!(!samples.is_empty(), "Range needs at least one sample");

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for m in samples {
            let v = m.value(var);
            min = min.min(v);
            max = max.max(v);
        }

        Self { min, max, span: max - min }
    }

    // Rescale a raw value into [0, 1] using the observed extremes
    //
    // A constant variable (span 0) normalizes to 0.5 so the encodings stay
    // total instead of dividing by zero.
    #[inline]
    pub fn normalize(&self, value: f64) -> f64 {
        if self.span == 0.0 {
            return 0.5;
        }
        (value - self.min) / self.span
    }

    // Value at a fraction of the range (legend graduations)
    #[inline]
    pub fn lerp(&self, t: f64) -> f64 {
        self.min + self.span * t
    }
}

// ============================================================================
// RANGE SET
// ============================================================================

// Ranges for every tracked variable, computed once per run
#[derive(Debug, Clone, Copy)]
pub struct RangeSet {
    pub temperature: VariableRange,
    pub salinity: VariableRange,
}

impl RangeSet {
    // Range of one variable
    #[inline]
    pub fn get(&self, var: Variable) -> &VariableRange {
        match var {
            Variable::Temperature => &self.temperature,
            Variable::Salinity => &self.salinity,
        }
    }
}

// Compute the range of every tracked variable over the sample set
pub fn compute_ranges(samples: &[Measurement]) -> RangeSet {
    RangeSet {
        temperature: VariableRange::from_samples(samples, Variable::Temperature),
        salinity: VariableRange::from_samples(samples, Variable::Salinity),
    }
}
