use crate::error::{MetricsError, Result};

pub const DEFAULT_FONT_PATH: &str = "font.ttf";
pub const DEFAULT_OUTPUT_PATH: &str = "fontmetric.txt";

// The size outlines are sampled at before being normalized back to ems.
pub const DEFAULT_EM_SIZE: f64 = 18.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub font_path: String,
    pub output_path: String,
    pub em_size: f64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            font_path: DEFAULT_FONT_PATH.to_string(),
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            em_size: DEFAULT_EM_SIZE,
        }
    }
}

impl Config {
    /// Builds a config from positional arguments (program name already
    /// stripped): an optional font path followed by an optional output path.
    pub fn from_args<I>(args: I) -> Result<Config>
    where
        I: IntoIterator<Item = String>,
    {
        let args: Vec<String> = args.into_iter().collect();
        if args.len() > 2 {
            return Err(MetricsError::Usage(format!(
                "expected at most 2 arguments (font, output), got {}",
                args.len()
            )));
        }

        let mut config = Config::default();
        let mut args = args.into_iter();
        if let Some(font_path) = args.next() {
            config.font_path = font_path;
        }
        if let Some(output_path) = args.next() {
            config.output_path = output_path;
        }

        Ok(config)
    }
}
