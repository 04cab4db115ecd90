use ttf_parser::{Face, GlyphId};

use crate::bounds::{Bounds, BoundsBuilder};
use crate::char_map::char_map;
use crate::error::Result;
use crate::font::Font;

/// Metrics of a parsed font. Font-wide values and horizontal glyph metrics
/// come back in ems (design units over units-per-em); outline bounds come
/// back scaled to the font's sampling em size.
pub struct FontMetrics<'a> {
    face: Face<'a>,
    units_per_em: f64,
    em_size: f64,
}

impl<'a> FontMetrics<'a> {
    /// Parses `data` (as returned by `Font::load`) for `font`.
    pub fn from_font(font: &Font, data: &'a [u8]) -> Result<Self> {
        let face = Face::parse(data, 0)?;
        let units_per_em = f64::from(face.units_per_em());

        Ok(FontMetrics {
            face,
            units_per_em,
            em_size: font.em_size,
        })
    }

    pub fn em_size(&self) -> f64 {
        self.em_size
    }

    fn to_ems(&self, design_units: f64) -> f64 {
        design_units / self.units_per_em
    }

    pub fn glyph_count(&self) -> u16 {
        self.face.number_of_glyphs()
    }

    pub fn baseline(&self) -> f64 {
        self.to_ems(f64::from(self.face.ascender()))
    }

    pub fn height(&self) -> f64 {
        self.to_ems(
            f64::from(self.face.ascender()) - f64::from(self.face.descender()),
        )
    }

    pub fn caps_height(&self) -> f64 {
        match self.face.capital_height() {
            Some(height) => self.to_ems(f64::from(height)),
            None => self.glyph_top('H'),
        }
    }

    pub fn x_height(&self) -> f64 {
        match self.face.x_height() {
            Some(height) => self.to_ems(f64::from(height)),
            None => self.glyph_top('x'),
        }
    }

    // Top of a character's outline in ems, used when the font doesn't
    // record a metric directly. Zero when the character isn't there.
    fn glyph_top(&self, chr: char) -> f64 {
        self.face
            .glyph_index(chr)
            .and_then(|glyph_id| self.face.glyph_bounding_box(glyph_id))
            .map_or(0.0, |rect| self.to_ems(f64::from(rect.y_max)))
    }

    pub fn char_map(&self) -> Vec<(u32, GlyphId)> {
        char_map(&self.face)
    }

    /// The glyph's outline bounds at the sampling em size. Glyphs without an
    /// outline get `Bounds::EMPTY`.
    pub fn outline_bounds(&self, glyph_id: GlyphId) -> Bounds {
        let mut builder = BoundsBuilder::new(self.em_size / self.units_per_em);
        match self.face.outline_glyph(glyph_id, &mut builder) {
            Some(_) if !builder.bounds().is_empty() => builder.bounds(),
            _ => Bounds::EMPTY,
        }
    }

    pub fn advance_width(&self, glyph_id: GlyphId) -> f64 {
        self.to_ems(f64::from(
            self.face.glyph_hor_advance(glyph_id).unwrap_or(0),
        ))
    }

    pub fn left_side_bearing(&self, glyph_id: GlyphId) -> f64 {
        self.to_ems(f64::from(
            self.face.glyph_hor_side_bearing(glyph_id).unwrap_or(0),
        ))
    }

    /// Space between the right edge of the outline and the advance. Glyphs
    /// without an outline have their whole advance as bearing.
    pub fn right_side_bearing(&self, glyph_id: GlyphId) -> f64 {
        let advance = f64::from(self.face.glyph_hor_advance(glyph_id).unwrap_or(0));
        let lsb =
            f64::from(self.face.glyph_hor_side_bearing(glyph_id).unwrap_or(0));
        let ink_width = self
            .face
            .glyph_bounding_box(glyph_id)
            .map_or(0.0, |rect| f64::from(rect.x_max) - f64::from(rect.x_min));

        self.to_ems(advance - lsb - ink_width)
    }
}
