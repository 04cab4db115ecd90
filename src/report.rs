use std::io;

use log::{info, warn};
use ttf_parser::GlyphId;

use crate::font_metrics::FontMetrics;
use crate::glyph::{format_number, GlyphRecord};
use crate::sink::OutputSink;

/// The `FONT_METRICS.*` lines, in the order they are emitted, ending with
/// the marker that introduces the glyph table.
pub fn font_metric_lines(metrics: &FontMetrics<'_>) -> Vec<String> {
    vec![
        format!("FONT_METRICS.glyphCount = {}", metrics.glyph_count()),
        format!(
            "FONT_METRICS.baseline = {}",
            format_number(metrics.baseline())
        ),
        format!(
            "FONT_METRICS.capsHeight = {}",
            format_number(metrics.caps_height())
        ),
        format!(
            "FONT_METRICS.xHeight = {}",
            format_number(metrics.x_height())
        ),
        format!("FONT_METRICS.height = {}", format_number(metrics.height())),
        "FONT_METRICS.glyphs = GLYPHS".to_string(),
    ]
}

// The record for one character map entry, or None when it is skipped:
// either the code point isn't a valid character or its glyph has no outline.
fn record_for(
    metrics: &FontMetrics<'_>,
    code_point: u32,
    glyph_id: GlyphId,
) -> Option<GlyphRecord> {
    let chr = match std::char::from_u32(code_point) {
        Some(chr) => chr,
        None => {
            warn!("skipping code point {:#x}: not a character", code_point);
            return None;
        }
    };
    GlyphRecord::measure(metrics, chr, glyph_id)
}

/// Writes the whole report for `metrics` into `sink`, line by line. Returns
/// the number of glyph lines written.
pub fn write_report<T: io::Write>(
    metrics: &FontMetrics<'_>,
    sink: &mut OutputSink<T>,
) -> io::Result<usize> {
    for line in font_metric_lines(metrics) {
        sink.write_line(line)?;
    }

    let mut glyph_count = 0;
    for (code_point, glyph_id) in metrics.char_map() {
        if let Some(record) = record_for(metrics, code_point, glyph_id) {
            sink.write_line(record.to_string())?;
            glyph_count += 1;
        }
    }

    info!(
        "wrote {} of {} glyphs",
        glyph_count,
        metrics.glyph_count()
    );
    Ok(glyph_count)
}
