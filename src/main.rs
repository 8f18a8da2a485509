// SPDX-License-Identifier: MIT
//
// expressive: derive an accent theme from one color and print it as
// style variables.
//
// This is the presentation layer that wires the crates together:
//
//   expressive-color → hex parsing, HSL math, on-color contrast
//   expressive-theme → role scheme, shape/type tokens, style projection
//
// Each run flows through:
//
//   args / env → ThemeConfig → Scheme + ShapeScale + TypeAxes
//   → StyleSheet (last write wins) → CSS rule or name/value list on stdout
//
// Diagnostics go to stderr through tracing; set RUST_LOG=debug to see
// every projection step.

use std::fmt::Write as _;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use expressive_color::Rgb;
use expressive_theme::{Appearance, StyleSheet, ThemeConfig};

// ─── Command line ───────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "expressive")]
#[command(version, about = "Derive accent theme variables from a source color")]
struct Args {
    /// Source color, `#rgb` or `#rrggbb` (defaults to #6750a4)
    #[arg(env = "EXPRESSIVE_SOURCE")]
    source: Option<String>,

    /// Render for dark mode (adds the dark-theme root class)
    #[arg(long)]
    dark: bool,

    /// Base corner radius in pixels
    #[arg(long, value_name = "PX")]
    radius: Option<u32>,

    /// Variable-font weight axis
    #[arg(long)]
    weight: Option<u16>,

    /// Variable-font width axis
    #[arg(long)]
    width: Option<u16>,

    /// Extra directives applied last, e.g. "radius=24 dark!"
    #[arg(long = "set", value_name = "DIRECTIVES")]
    set: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Css)]
    format: Format,

    /// Selector for the CSS rule
    #[arg(long, default_value = ":root")]
    selector: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// A single CSS rule with one custom property per token
    Css,
    /// One `name value` pair per line
    List,
}

// ─── Wiring ─────────────────────────────────────────────────────────────────

/// Fold flags and directives into a config. Flags apply first, `--set`
/// directives after, so directives win.
fn build_config(args: &Args) -> Result<ThemeConfig> {
    let mut config = ThemeConfig::default();

    if let Some(source) = &args.source {
        let rgb = Rgb::from_hex(source).with_context(|| format!("invalid source color {source:?}"))?;
        config = config.with_source(rgb);
    }
    if args.dark {
        config = config.with_appearance(Appearance::Dark);
    }
    if let Some(radius) = args.radius {
        config = config.with_radius(radius);
    }
    if let Some(weight) = args.weight {
        config = config.with_font_weight(weight);
    }
    if let Some(width) = args.width {
        config = config.with_font_width(width);
    }
    for directives in &args.set {
        config
            .apply_set(directives)
            .with_context(|| format!("invalid --set {directives:?}"))?;
    }

    debug!(?config, "resolved theme config");
    Ok(config)
}

fn render(sheet: &StyleSheet, format: Format, selector: &str) -> String {
    match format {
        Format::Css => sheet.to_css(selector),
        Format::List => {
            let mut out = String::new();
            if let Some(class) = sheet.root_class() {
                let _ = writeln!(out, "class {class}");
            }
            for (name, value) in sheet.iter() {
                let _ = writeln!(out, "{name} {value}");
            }
            out
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = build_config(&args)?;
    print!("{}", render(&config.render(), args.format, &args.selector));
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
