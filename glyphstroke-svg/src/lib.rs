//! SVG document builder for exported glyph strokes.
//!
//! Wraps a glyph's path-data string and its font metrics into a
//! self-describing SVG [`Document`] using the `svg` crate. The document
//! carries the metrics as `data-*` attributes so downstream consumers
//! can lay glyphs out without re-reading the font, and uses stroke-based
//! presentation (`fill="none"`, `stroke="currentColor"`, round caps and
//! joins) since the path data is a centerline, not a filled outline.

use svg::node::element::Path;
use svg::Document;

/// Fraction of units-per-em used as the stroke width when the caller
/// does not specify one.
pub const DEFAULT_STROKE_WIDTH_RATIO: f64 = 0.05;

/// The default stroke width for a font: 5% of its units per em.
#[must_use]
pub fn default_stroke_width(units_per_em: u16) -> f64 {
    f64::from(units_per_em) * DEFAULT_STROKE_WIDTH_RATIO
}

/// Everything needed to build one glyph's output document.
#[derive(Debug, Clone)]
pub struct GlyphDocument {
    /// Centerline path data, as produced by the core pipeline.
    pub path_data: String,
    /// Horizontal advance in design units; becomes the document width.
    pub advance_width: u16,
    /// Ascent − descent in design units; becomes the document height.
    pub vertical_extent: i32,
    pub ascent: i32,
    pub descent: i32,
    pub units_per_em: u16,
    /// Stroke width in design units.
    pub stroke_width: f64,
    /// Glyph name, when the font provides one.
    pub glyph_name: Option<String>,
    /// Unicode codepoint the glyph is mapped from.
    pub codepoint: Option<u32>,
}

/// Build the SVG document for one glyph.
#[must_use]
pub fn build_document(glyph: &GlyphDocument) -> Document {
    let mut doc = Document::new()
        .set("xmlns", "http://www.w3.org/2000/svg")
        .set("width", glyph.advance_width)
        .set("height", glyph.vertical_extent)
        .set(
            "viewBox",
            format!("0 0 {} {}", glyph.advance_width, glyph.vertical_extent),
        )
        .set("data-advance", glyph.advance_width)
        .set("data-ascent", glyph.ascent)
        .set("data-descent", glyph.descent)
        .set("data-vertical-extent", glyph.vertical_extent)
        .set("data-units-per-em", glyph.units_per_em);

    if let Some(ref name) = glyph.glyph_name {
        doc = doc.set("data-glyph-name", name.as_str());
    }
    if let Some(codepoint) = glyph.codepoint {
        doc = doc.set("data-codepoint", codepoint);
    }

    doc.set("fill", "none")
        .set("stroke", "currentColor")
        .set("stroke-width", fmt_scalar(glyph.stroke_width, 6))
        .set("stroke-linecap", "round")
        .set("stroke-linejoin", "round")
        .add(Path::new().set("d", glyph.path_data.as_str()))
}

/// Build the SVG document and serialize it.
#[must_use]
pub fn build_document_string(glyph: &GlyphDocument) -> String {
    build_document(glyph).to_string()
}

/// Format a scalar to the given precision, stripping trailing zeros.
fn fmt_scalar(v: f64, precision: usize) -> String {
    let s = format!("{v:.precision$}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_owned()
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GlyphDocument {
        GlyphDocument {
            path_data: "M50,500L0,500".to_owned(),
            advance_width: 600,
            vertical_extent: 1250,
            ascent: 1000,
            descent: -250,
            units_per_em: 1000,
            stroke_width: 50.0,
            glyph_name: Some("a".to_owned()),
            codepoint: Some(97),
        }
    }

    #[test]
    fn test_document_dimensions_and_viewbox() {
        let s = build_document_string(&sample());
        assert!(s.contains("width=\"600\""), "missing width: {s}");
        assert!(s.contains("height=\"1250\""), "missing height: {s}");
        assert!(s.contains("viewBox=\"0 0 600 1250\""), "bad viewBox: {s}");
    }

    #[test]
    fn test_document_metric_attributes() {
        let s = build_document_string(&sample());
        assert!(s.contains("data-advance=\"600\""), "{s}");
        assert!(s.contains("data-ascent=\"1000\""), "{s}");
        assert!(s.contains("data-descent=\"-250\""), "{s}");
        assert!(s.contains("data-vertical-extent=\"1250\""), "{s}");
        assert!(s.contains("data-units-per-em=\"1000\""), "{s}");
        assert!(s.contains("data-glyph-name=\"a\""), "{s}");
        assert!(s.contains("data-codepoint=\"97\""), "{s}");
    }

    #[test]
    fn test_document_stroke_presentation() {
        let s = build_document_string(&sample());
        assert!(s.contains("fill=\"none\""), "{s}");
        assert!(s.contains("stroke=\"currentColor\""), "{s}");
        assert!(s.contains("stroke-width=\"50\""), "{s}");
        assert!(s.contains("stroke-linecap=\"round\""), "{s}");
        assert!(s.contains("stroke-linejoin=\"round\""), "{s}");
    }

    #[test]
    fn test_document_contains_path_data() {
        let s = build_document_string(&sample());
        assert!(s.contains("d=\"M50,500L0,500\""), "missing path: {s}");
    }

    #[test]
    fn test_optional_attributes_omitted() {
        let mut glyph = sample();
        glyph.glyph_name = None;
        glyph.codepoint = None;
        let s = build_document_string(&glyph);
        assert!(!s.contains("data-glyph-name"), "{s}");
        assert!(!s.contains("data-codepoint"), "{s}");
    }

    #[test]
    fn test_default_stroke_width() {
        assert!((default_stroke_width(1000) - 50.0).abs() < f64::EPSILON);
        assert!((default_stroke_width(2048) - 102.4).abs() < 1e-9);
    }

    #[test]
    fn test_fmt_scalar_trims_trailing_zeros() {
        assert_eq!(fmt_scalar(50.0, 6), "50");
        assert_eq!(fmt_scalar(102.4, 6), "102.4");
        assert_eq!(fmt_scalar(0.125, 6), "0.125");
    }
}
