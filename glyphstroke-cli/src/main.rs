//! glyphstroke CLI: export each mapped glyph in a font as its own
//! stroke-rendered SVG file.

mod filename;

use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use clap::Parser;

use glyphstroke_core::render_path;
use glyphstroke_fonts::{FontData, FontMetrics};
use glyphstroke_svg::{build_document_string, default_stroke_width, GlyphDocument};

use filename::FilenameTable;

#[derive(Parser)]
#[command(
    version,
    about = "Export each mapped glyph in a font to its own stroke-rendered SVG file"
)]
struct Cli {
    /// Path to the font file to process (e.g. .otf, .ttf)
    font_path: PathBuf,

    /// Directory where SVG files will be written
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// Stroke width in font units; defaults to 5% of the font's units per em
    #[arg(long)]
    stroke_width: Option<f64>,
}

fn main() {
    let cli = Cli::parse();

    if matches!(cli.stroke_width, Some(width) if width <= 0.0) {
        eprintln!("Error: --stroke-width must be positive");
        process::exit(1);
    }

    let bytes = match fs::read(&cli.font_path) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("Error reading {}: {e}", cli.font_path.display());
            process::exit(1);
        }
    };

    let font = match FontData::from_bytes(Arc::from(bytes)) {
        Ok(font) => font,
        Err(e) => {
            eprintln!("Error parsing {}: {e}", cli.font_path.display());
            process::exit(1);
        }
    };

    let stroke_width = cli
        .stroke_width
        .unwrap_or_else(|| default_stroke_width(font.metrics().units_per_em));

    if let Err(e) = fs::create_dir_all(&cli.output) {
        eprintln!("Error creating {}: {e}", cli.output.display());
        process::exit(1);
    }

    export_glyphs(&font, &cli.output, stroke_width);
}

/// Export every cmap-mapped glyph, one SVG file each.
///
/// Failures are local to one glyph: a malformed outline is reported and
/// skipped, and the rest of the font keeps exporting.
fn export_glyphs(font: &FontData, output_dir: &Path, stroke_width: f64) {
    let metrics = font.metrics();
    let table = FilenameTable::default();

    eprintln!(
        "Font metrics: units_per_em={}, ascent={}, descent={}",
        metrics.units_per_em, metrics.ascent, metrics.descent
    );
    eprintln!("Exporting to: {}", output_dir.display());
    eprintln!("Stroke width: {stroke_width}");

    let mut exported = 0_usize;
    for (ch, glyph_id) in font.glyphs() {
        let stem = filename::sanitize(ch, &table);

        let commands = font.outline_commands(glyph_id);
        let path_data = match render_path(commands, f64::from(metrics.ascent)) {
            Ok(d) => d,
            Err(e) => {
                eprintln!("Warning: skipping glyph '{ch}' ({stem}): {e}");
                continue;
            }
        };

        if path_data.is_empty() {
            eprintln!("Skipping empty glyph: '{ch}' ({stem})");
            continue;
        }

        let advance = font.advance_width(glyph_id);
        let svg = build_document_string(&glyph_document(
            path_data,
            advance,
            metrics,
            stroke_width,
            font.glyph_name(glyph_id),
            ch,
        ));

        let path = output_dir.join(format!("{stem}.svg"));
        match fs::write(&path, svg) {
            Ok(()) => {
                exported += 1;
                eprintln!("Exported: '{ch}' -> {stem}.svg (advance: {advance})");
            }
            Err(e) => {
                eprintln!("Error writing {}: {e}", path.display());
            }
        }
    }

    eprintln!("Successfully exported {exported} glyphs");
}

fn glyph_document(
    path_data: String,
    advance_width: u16,
    metrics: FontMetrics,
    stroke_width: f64,
    glyph_name: Option<String>,
    ch: char,
) -> GlyphDocument {
    GlyphDocument {
        path_data,
        advance_width,
        vertical_extent: metrics.vertical_extent(),
        ascent: metrics.ascent,
        descent: metrics.descent,
        units_per_em: metrics.units_per_em,
        stroke_width,
        glyph_name,
        codepoint: Some(u32::from(ch)),
    }
}
