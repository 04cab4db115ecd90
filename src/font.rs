use std::fs;

use log::info;

use crate::error::{MetricsError, Result};
use crate::paths::find_font;

/// A font to measure: where it lives and the em size its outlines are
/// sampled at.
#[derive(Clone, PartialEq, Debug)]
pub struct Font {
    pub font_name: String,
    pub em_size: f64,
}

impl Font {
    pub fn new(font_name: &str, em_size: f64) -> Self {
        Font {
            font_name: font_name.to_string(),
            em_size,
        }
    }

    /// Resolves the font and reads the whole file into memory. The returned
    /// bytes are what `FontMetrics` borrows from.
    pub fn load(&self) -> Result<Vec<u8>> {
        let path = find_font(&self.font_name)
            .ok_or_else(|| MetricsError::FontNotFound(self.font_name.clone()))?;
        let data = fs::read(&path)?;
        info!("loaded {} ({} bytes)", path, data.len());
        Ok(data)
    }
}
