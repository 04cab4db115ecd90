#![deny(clippy::all)]

#[macro_use]
extern crate lazy_static;

mod bounds;
mod char_map;
mod config;
mod error;
mod font;
mod font_metrics;
mod glyph;
mod paths;
mod report;
mod sink;
mod unicode_name;


use std::env;
use std::io;
use std::io::prelude::*;

use log::info;

use crate::config::Config;
use crate::error::Result;
use crate::font::Font;
use crate::font_metrics::FontMetrics;
use crate::report::write_report;
use crate::sink::OutputSink;

/// Measures the configured font, echoing every line to `console`, and writes
/// the full set of lines to the output file once everything succeeded.
fn run<T: io::Write>(config: &Config, console: T) -> Result<OutputSink<T>> {
    let font = Font::new(&config.font_path, config.em_size);
    let data = font.load()?;
    let metrics = FontMetrics::from_font(&font, &data)?;

    let mut sink = OutputSink::new(console);
    write_report(&metrics, &mut sink)?;

    sink.write_to_file(&config.output_path)?;
    info!(
        "wrote {} lines to {}",
        sink.lines().len(),
        config.output_path
    );

    Ok(sink)
}

// Keeps a console window open until someone looks at it. Waits for a whole
// line, since that is what a terminal hands over; end of input also releases
// it.
fn pause<W, R>(console: &mut W, mut input: R) -> io::Result<()>
where
    W: io::Write,
    R: io::BufRead,
{
    writeln!(console, "Press Enter to exit ...")?;
    console.flush()?;

    input.read_line(&mut String::new())?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn"),
    )
    .init();

    let config = Config::from_args(env::args().skip(1))?;

    let stdout = io::stdout();
    let mut sink = run(&config, stdout.lock())?;

    pause(sink.console(), io::stdin().lock())?;
    Ok(())
}
