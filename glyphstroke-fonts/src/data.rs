//! Font data wrapper around `ttf-parser`.

use std::collections::BTreeMap;
use std::sync::Arc;

use glyphstroke_core::Command;

use crate::error::FontError;
use crate::metrics::FontMetrics;
use crate::outline::OutlineRecorder;

/// Parsed font data.
///
/// Stores owned font bytes and cached global metrics, and creates a
/// `ttf_parser::Face` on demand for individual queries. Re-parsing is
/// cheap: no allocation, just header validation and offset table
/// construction.
#[derive(Clone)]
pub struct FontData {
    bytes: Arc<[u8]>,
    metrics: FontMetrics,
}

impl FontData {
    /// Parse font data from an owned byte buffer.
    ///
    /// # Errors
    ///
    /// Returns [`FontError::Parse`] if the data is not a valid
    /// OpenType/TrueType font, or [`FontError::BadMetrics`] if the face
    /// declares zero units per em.
    pub fn from_bytes(bytes: Arc<[u8]>) -> Result<Self, FontError> {
        let face =
            ttf_parser::Face::parse(&bytes, 0).map_err(|e| FontError::Parse(e.to_string()))?;
        let units_per_em = face.units_per_em();
        if units_per_em == 0 {
            return Err(FontError::BadMetrics { units_per_em });
        }
        let metrics = FontMetrics::resolve(units_per_em, face.ascender(), face.descender());
        Ok(Self { bytes, metrics })
    }

    /// Create a temporary `Face` reference for queries.
    #[expect(clippy::expect_used, reason = "bytes were validated at construction")]
    fn face(&self) -> ttf_parser::Face<'_> {
        ttf_parser::Face::parse(&self.bytes, 0).expect("font bytes validated at construction")
    }

    /// Cached global metrics, with the fallback policy already applied.
    #[must_use]
    pub const fn metrics(&self) -> FontMetrics {
        self.metrics
    }

    /// Every character the font maps, with its glyph ID, sorted by
    /// codepoint. Characters mapped by several cmap subtables appear
    /// once, taking the first unicode subtable's mapping.
    #[must_use]
    pub fn glyphs(&self) -> Vec<(char, u16)> {
        let face = self.face();
        let mut mapped: BTreeMap<char, u16> = BTreeMap::new();
        if let Some(cmap) = face.tables().cmap {
            for subtable in cmap.subtables {
                if !subtable.is_unicode() {
                    continue;
                }
                subtable.codepoints(|codepoint| {
                    let Some(ch) = char::from_u32(codepoint) else {
                        return;
                    };
                    if let Some(glyph) = subtable.glyph_index(codepoint) {
                        mapped.entry(ch).or_insert(glyph.0);
                    }
                });
            }
        }
        mapped.into_iter().collect()
    }

    /// Horizontal advance for a glyph in design units, falling back to
    /// units per em when the face has no entry.
    #[must_use]
    pub fn advance_width(&self, glyph_id: u16) -> u16 {
        self.face()
            .glyph_hor_advance(ttf_parser::GlyphId(glyph_id))
            .unwrap_or(self.metrics.units_per_em)
    }

    /// PostScript name for a glyph, when the font carries one.
    #[must_use]
    pub fn glyph_name(&self, glyph_id: u16) -> Option<String> {
        self.face()
            .glyph_name(ttf_parser::GlyphId(glyph_id))
            .map(str::to_owned)
    }

    /// Record a glyph's raw outline as a command stream in design
    /// units. Glyphs without an outline (e.g. space) record nothing and
    /// yield an empty stream.
    #[must_use]
    pub fn outline_commands(&self, glyph_id: u16) -> Vec<Command> {
        let face = self.face();
        let mut recorder = OutlineRecorder::new();
        face.outline_glyph(ttf_parser::GlyphId(glyph_id), &mut recorder);
        recorder.into_commands()
    }
}

impl std::fmt::Debug for FontData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontData")
            .field("metrics", &self.metrics)
            .field("bytes_len", &self.bytes.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bytes_rejects_garbage() {
        let result = FontData::from_bytes(Arc::from(&b"not a font"[..]));
        assert!(matches!(result, Err(FontError::Parse(_))));
    }

    #[test]
    fn test_from_bytes_rejects_empty() {
        let result = FontData::from_bytes(Arc::from(&b""[..]));
        assert!(matches!(result, Err(FontError::Parse(_))));
    }
}
