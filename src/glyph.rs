use std::fmt;

use log::debug;
use ttf_parser::GlyphId;

use crate::font_metrics::FontMetrics;
use crate::unicode_name::unicode_name;

/// Everything emitted about a single mapped code point. Vertical values are
/// in ems and measured from the outline; horizontal ones are the font's own
/// metrics in ems.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphRecord {
    pub code_point: u32,
    pub chr: char,
    pub name: String,
    // Extent of the outline. Not part of the emitted line.
    pub width: f64,
    pub advance_width: f64,
    pub descent: f64,
    pub ascent: f64,
    pub left_bearing: f64,
    pub right_bearing: f64,
}

impl GlyphRecord {
    /// Measures `glyph_id` as the glyph for `chr`. Returns None when the
    /// glyph has no outline to measure (its ascent or descent is infinite),
    /// in which case the code point is left out of the output entirely.
    pub fn measure(
        metrics: &FontMetrics<'_>,
        chr: char,
        glyph_id: GlyphId,
    ) -> Option<GlyphRecord> {
        let em = metrics.em_size();
        let bounds = metrics.outline_bounds(glyph_id);

        let width = bounds.width() / em;
        let ascent = (0.0 - bounds.top) / em;
        let descent = bounds.bottom / em;

        if ascent.is_infinite() || descent.is_infinite() {
            debug!("skipping U+{:04X}: glyph {} has no outline", chr as u32, glyph_id.0);
            return None;
        }

        Some(GlyphRecord {
            code_point: chr as u32,
            chr,
            name: unicode_name(chr),
            width,
            advance_width: metrics.advance_width(glyph_id),
            descent,
            ascent,
            left_bearing: metrics.left_side_bearing(glyph_id),
            right_bearing: metrics.right_side_bearing(glyph_id),
        })
    }
}

/// Escapes a character for a single-quoted literal. Only quotes and
/// backslashes are touched.
pub fn escape_char(chr: char) -> String {
    match chr {
        '\'' | '\\' => format!("\\{}", chr),
        _ => chr.to_string(),
    }
}

/// Formats a scalar for output, folding negative zero into zero.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

impl fmt::Display for GlyphRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GLYPHS[{}] = Glyph('{}', '{}', {}, {}, {}, {}, {})",
            self.code_point,
            escape_char(self.chr),
            self.name,
            format_number(self.advance_width),
            format_number(self.descent),
            format_number(self.ascent),
            format_number(self.left_bearing),
            format_number(self.right_bearing),
        )
    }
}
