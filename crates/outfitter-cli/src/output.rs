//! Output management and formatting.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use outfitter_core::domain::{Color, Garment, Outfit, WeatherSnapshot};

use crate::cli::ListFormat;
use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;
use crate::error::CliResult;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // Flag, then config, then Human (TTY) or Plain (piped/redirected).
        let requested = match args.output_format {
            OutputFormat::Auto => OutputFormat::from_config(&config.output.format),
            explicit => explicit,
        };
        let resolved_format = if requested == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            requested
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}") // ℹ
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// Pretty JSON on stdout.  Data output, so never suppressed.
    pub fn json<T: Serialize + ?Sized>(&self, value: &T) -> CliResult<()> {
        let text = serde_json::to_string_pretty(value)?;
        self.term.write_line(&text)?;
        Ok(())
    }

    /// Every filled slot of `outfit`, one per line.
    pub fn outfit(&self, outfit: &Outfit) -> io::Result<()> {
        for (slot, garment) in outfit.garments() {
            self.print(&format!("  {:<10} {}", slot.as_str(), self.garment_line(garment)))?;
        }
        Ok(())
    }

    /// One-line garment summary with a color swatch.
    pub fn garment_line(&self, garment: &Garment) -> String {
        let colors = match garment.palette.accent {
            Some(accent) => {
                format!("{} {}", self.swatch(garment.palette.primary), self.swatch(accent))
            }
            None => self.swatch(garment.palette.primary),
        };
        format!(
            "{:>4}  {:<16} {:<14} {:<17} {}",
            format!("#{}", garment.id),
            colors,
            garment.subcategory.as_str(),
            garment.material.as_str(),
            garment.formality.as_str(),
        )
    }

    /// `high/low (now current) °F` for display.
    pub fn weather_line(weather: &WeatherSnapshot) -> String {
        format!(
            "{}°F / {}°F (now {}°F)",
            weather.high, weather.low, weather.current
        )
    }

    fn swatch(&self, color: Color) -> String {
        let hex = color.to_hex();
        if self.no_color {
            return hex;
        }
        let (r, g, b) = rgb(color);
        format!("{} {}", "\u{25a0}".truecolor(r, g, b), hex) // ■
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }

    /// Whether a listing should be JSON: the command's `--format` wins over
    /// the global output format.
    pub fn wants_json(&self, requested: Option<ListFormat>) -> bool {
        match requested {
            Some(format) => format == ListFormat::Json,
            None => self.format() == OutputFormat::Json,
        }
    }
}

fn rgb(color: Color) -> (u8, u8, u8) {
    let byte = |c: f64| (c * 255.0).clamp(0.0, 255.0) as u8;
    (byte(color.r), byte(color.g), byte(color.b))
}

// ── tests ─────────────────────────────────────────────────────────────────────
