use std::{fs::read, io, path::PathBuf, process::ExitCode};

use clap::Parser;
use font_fakery::{AxisRange, AxisTable, FontFakery, FontStyle, Slant, Weight, merge};
use font_variation::{Tag, VariationSettings, parse_tag};
use log::info;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("{0}")]
    Fakery(#[from] font_fakery::Error),
    #[error("expected TAG=MIN:DEFAULT:MAX: {0}")]
    InvalidAxisSpec(String),
    #[error("{0}")]
    InvalidTag(#[from] font_variation::Error),
    #[error("invalid axis value: {0}")]
    InvalidAxisValue(String),
}

#[derive(Parser)]
#[command(name = "font-fakery", version)]
#[command(about = "Merge variation settings with a requested style and report fake bold/italic")]
struct Cli {
    /// Read supported axes from this font's fvar table
    #[arg(short, long)]
    font: Option<PathBuf>,

    /// Supported axis as TAG=MIN:DEFAULT:MAX (e.g., wght=100:400:900)
    #[arg(short, long = "axis")]
    axes: Vec<String>,

    /// Variation settings of the selected face (e.g., "'wght' 650")
    #[arg(long, default_value = "")]
    base: String,

    /// Requested variation overrides (e.g., "'wght' 750, 'ABCD' 75")
    #[arg(long, default_value = "")]
    target: String,

    /// Weight of the selected face
    #[arg(long, default_value_t = 400)]
    base_weight: u16,

    /// The selected face is italic
    #[arg(long)]
    base_italic: bool,

    /// Requested weight
    #[arg(long, default_value_t = 400)]
    target_weight: u16,

    /// Italic is requested
    #[arg(long)]
    target_italic: bool,

    /// Only print the merged variation settings
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    env_logger::init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let (axes, fakery) = resolve(&cli)?;

    if cli.quiet {
        println!("{}", fakery.variation_settings());
        return Ok(());
    }

    println!("Axes:");
    for (tag, range) in &axes {
        println!("  {tag}  {range}");
    }
    println!("Style:       {} -> {}", cli.base_style(), cli.target_style());
    println!("Variations:  {}", fakery.variation_settings());
    println!("Fake bold:   {}", fakery.is_fake_bold());
    println!("Fake italic: {}", fakery.is_fake_italic());

    Ok(())
}

/// Collect the supported axes and merge the requested settings against them.
fn resolve(cli: &Cli) -> Result<(AxisTable, FontFakery), CliError> {
    let mut axes = match &cli.font {
        Some(path) => {
            let axes = AxisTable::from_data(&read(path)?)?;
            info!("{}: {} variable axes", path.display(), axes.len());
            axes
        }
        None => AxisTable::new(),
    };
    axes.extend(parse_axes(&cli.axes)?);

    let fakery = merge(
        &axes,
        &VariationSettings::parse(&cli.base),
        &VariationSettings::parse(&cli.target),
        cli.base_style(),
        cli.target_style(),
    );
    Ok((axes, fakery))
}

impl Cli {
    fn base_style(&self) -> FontStyle {
        style(self.base_weight, self.base_italic)
    }

    fn target_style(&self) -> FontStyle {
        style(self.target_weight, self.target_italic)
    }
}

fn style(weight: u16, italic: bool) -> FontStyle {
    let slant = if italic { Slant::Italic } else { Slant::Upright };
    FontStyle::new(Weight::from(weight), slant)
}

fn parse_axes(args: &[String]) -> Result<Vec<(Tag, AxisRange)>, CliError> {
    args.iter().map(String::as_str).map(parse_axis_spec).collect()
}

fn parse_axis_spec(s: &str) -> Result<(Tag, AxisRange), CliError> {
    let (tag, range) = s
        .split_once('=')
        .ok_or_else(|| CliError::InvalidAxisSpec(s.to_string()))?;

    let values = range
        .split(':')
        .map(|v| v.trim().parse::<f32>().map_err(|_| CliError::InvalidAxisValue(v.to_string())))
        .collect::<Result<Vec<_>, _>>()?;
    let [min, default, max] = values[..] else {
        return Err(CliError::InvalidAxisSpec(s.to_string()));
    };

    Ok((parse_tag(tag)?, AxisRange::new(min, max, default)))
}

#[cfg(test)]
mod tests {
    use font_variation::TAG_WGHT;

    use super::*;

    #[test]
    fn parse_valid_spec() {
        let (tag, range) = parse_axis_spec("wght=100:400:900").unwrap();
        assert_eq!(tag, TAG_WGHT);
        assert_eq!(range, AxisRange::new(100.0, 900.0, 400.0));
    }

    #[test]
    fn parse_negative_values() {
        let (_, range) = parse_axis_spec("slnt=-10:0:0").unwrap();
        assert_eq!(range.min, -10.0);
        assert_eq!(range.max, 0.0);
    }

    #[test]
    fn parse_rejects_missing_equals() {
        assert!(matches!(parse_axis_spec("wght100:400:900"), Err(CliError::InvalidAxisSpec(_))));
    }

    #[test]
    fn parse_rejects_wrong_arity() {
        assert!(matches!(parse_axis_spec("wght=100:900"), Err(CliError::InvalidAxisSpec(_))));
        assert!(matches!(parse_axis_spec("wght=1:2:3:4"), Err(CliError::InvalidAxisSpec(_))));
    }

    #[test]
    fn parse_rejects_invalid_value() {
        assert!(matches!(parse_axis_spec("wght=thin:400:900"), Err(CliError::InvalidAxisValue(_))));
    }

    #[test]
    fn parse_rejects_long_tag() {
        assert!(matches!(parse_axis_spec("weight=1:2:3"), Err(CliError::InvalidTag(_))));
    }

    #[test]
    fn resolve_merges_axis_specs() {
        let cli = Cli::try_parse_from([
            "font-fakery",
            "--axis",
            "wght=100:400:900",
            "--axis",
            "slnt=-10:0:0",
            "--base",
            "'wght' 650",
            "--target",
            "'ABCD' 1",
            "--target-weight",
            "1000",
            "--target-italic",
            "--quiet",
        ])
        .unwrap();
        assert!(cli.quiet);

        let (axes, fakery) = resolve(&cli).unwrap();
        assert_eq!(axes.len(), 2);
        // The base weight beats the style weight, so bold is still faked.
        assert_eq!(fakery.variation_settings().to_string(), "'slnt' -10, 'wght' 650");
        assert!(fakery.is_fake_bold());
        assert!(!fakery.is_fake_italic());
    }

    #[test]
    fn resolve_reads_font_axes() {
        let path = std::env::temp_dir().join(format!("font-fakery-{}.ttf", std::process::id()));
        std::fs::write(&path, font_test_data::VAZIRMATN_VAR).unwrap();

        let cli = Cli::try_parse_from([
            "font-fakery",
            "--font",
            path.to_str().unwrap(),
            "--target-weight",
            "700",
        ])
        .unwrap();
        let result = resolve(&cli);
        std::fs::remove_file(&path).unwrap();

        let (axes, fakery) = result.unwrap();
        assert_eq!(axes.get(TAG_WGHT), Some(&AxisRange::new(100.0, 900.0, 400.0)));
        assert_eq!(fakery.variation_settings().to_string(), "'wght' 700");
        assert!(!fakery.is_fake_bold());
    }

    #[test]
    fn resolve_reports_missing_font() {
        let cli = Cli::try_parse_from(["font-fakery", "--font", "/nonexistent/font.ttf"]).unwrap();
        assert!(matches!(resolve(&cli), Err(CliError::Io(_))));
    }

    #[test]
    fn style_from_flags() {
        assert_eq!(style(700, true), FontStyle::new(Weight::BOLD, Slant::Italic));
        assert!(!style(400, false).is_italic());
    }
}
