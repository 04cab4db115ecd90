use std::collections::HashSet;

use log::warn;
use ttf_parser::cmap::Subtable;
use ttf_parser::{Face, GlyphId, PlatformId};

// Subtables covering all of Unicode beat BMP-only ones. A Windows Symbol
// subtable is only used when there is no Unicode one; its codes sit in the
// private use area and are emitted as they are. Anything else is never used.
fn subtable_rank(subtable: &Subtable<'_>) -> u8 {
    match (subtable.platform_id, subtable.encoding_id) {
        (PlatformId::Windows, 10) => 3,
        (PlatformId::Unicode, 4) | (PlatformId::Unicode, 6) => 3,
        _ if subtable.is_unicode() => 2,
        (PlatformId::Windows, 0) => 1,
        _ => 0,
    }
}

/// Returns every (code point, glyph) pair of the font's character map, in
/// the order the chosen cmap subtable lists them. Code points that map to
/// the missing glyph are left out, and each code point appears once.
pub fn char_map(face: &Face<'_>) -> Vec<(u32, GlyphId)> {
    let cmap = match face.tables().cmap {
        Some(cmap) => cmap,
        None => {
            warn!("font has no cmap table");
            return Vec::new();
        }
    };

    let mut best: Option<Subtable<'_>> = None;
    for subtable in cmap.subtables {
        let rank = subtable_rank(&subtable);
        let best_rank = best.as_ref().map_or(0, subtable_rank);
        if rank > best_rank {
            best = Some(subtable);
        }
    }

    let subtable = match best {
        Some(subtable) => subtable,
        None => {
            warn!("font has no unicode or symbol cmap subtable");
            return Vec::new();
        }
    };
    if subtable_rank(&subtable) == 1 {
        warn!("font has no unicode cmap subtable, using its symbol subtable");
    }

    let mut code_points = Vec::new();
    subtable.codepoints(|code_point| code_points.push(code_point));

    let mut seen = HashSet::new();
    code_points
        .into_iter()
        .filter(|code_point| seen.insert(*code_point))
        .filter_map(|code_point| {
            subtable
                .glyph_index(code_point)
                .filter(|glyph_id| glyph_id.0 != 0)
                .map(|glyph_id| (code_point, glyph_id))
        })
        .collect()
}
