/// Module for finding font files on disk
use std::path::Path;
use std::sync::Mutex;

use log::{debug, info};

lazy_static! {
    // A single shared reference to the kpathsea library, so it is only
    // initialized once. kpathsea isn't thread-safe, so every lookup goes
    // through the mutex. None until the first lookup that misses the
    // filesystem.
    static ref SHARED_KPATHS: Mutex<Option<kpathsea::Kpaths>> = Mutex::new(None);
}

/// Given a font path or a bare font file name (like "lmroman10-regular.otf"),
/// returns a path to the font if it can be found. Paths that exist are used
/// as-is; anything else is looked up in the TeX font tree.
///
/// The TeX tree lookup is a narrow fallback. It only runs when `font_name`
/// is not an existing file, and kpathsea decides where to look from TeX's
/// own search variables (`TEXMF`, `OPENTYPEFONTS` and friends). There is no
/// other search path or configuration for it here.
pub fn find_font(font_name: &str) -> Option<String> {
    if Path::new(font_name).is_file() {
        return Some(font_name.to_string());
    }

    debug!("{} is not a file, asking kpathsea", font_name);
    let result = find_in_tex_tree(font_name);
    if let Some(ref path) = result {
        info!("kpathsea resolved {} to {}", font_name, path);
    }
    result
}

fn find_in_tex_tree(font_name: &str) -> Option<String> {
    // A poisoned lock only means another lookup panicked; the cached handle
    // is still usable.
    let mut maybe_kpse = match SHARED_KPATHS.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };

    if let Some(ref kpse) = *maybe_kpse {
        kpse.find_file(font_name)
    } else {
        match kpathsea::Kpaths::new() {
            Ok(kpse) => {
                let result = kpse.find_file(font_name);
                *maybe_kpse = Some(kpse);
                result
            }
            // If we can't initialize kpathsea successfully, just say we
            // couldn't find the font.
            Err(_) => None,
        }
    }
}
