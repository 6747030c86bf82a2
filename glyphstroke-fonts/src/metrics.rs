//! Vertical font metrics.

/// Global vertical metrics for a font, in design units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontMetrics {
    /// Design units per em. Always positive.
    pub units_per_em: u16,
    /// Ascender above the baseline (positive).
    pub ascent: i32,
    /// Descender below the baseline (typically negative).
    pub descent: i32,
}

impl FontMetrics {
    /// Resolve metrics from what the face reports.
    ///
    /// Fonts that report no usable vertical metrics (both values zero)
    /// fall back to the documented defaults: ascent = units per em,
    /// descent = −units per em / 4.
    #[must_use]
    pub fn resolve(units_per_em: u16, ascent: i16, descent: i16) -> Self {
        let upm = i32::from(units_per_em);
        let (ascent, descent) = if ascent == 0 && descent == 0 {
            (upm, -upm / 4)
        } else {
            (i32::from(ascent), i32::from(descent))
        };
        Self {
            units_per_em,
            ascent,
            descent,
        }
    }

    /// Total vertical extent: ascent − descent.
    #[must_use]
    pub const fn vertical_extent(&self) -> i32 {
        self.ascent - self.descent
    }
}
