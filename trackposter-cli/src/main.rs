use std::{io, path::PathBuf};

use anyhow::Context as _;
use chrono::Datelike as _;
use clap::{Parser, ValueEnum};
use trackposter::SourceAdapter as _;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "trackposter", version, about = "Render a calendar poster from activity tracks")]
struct Cli {
    /// Type of poster to create.
    #[arg(long = "type", value_enum, default_value_t = PosterType::Duolingo)]
    kind: PosterType,

    /// Saved JSON payload from the source service.
    #[arg(long = "input")]
    input: PathBuf,

    /// Directory the poster is written to, as `<type>.svg` / `<type>.png`.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Output image format.
    #[arg(long, value_enum, default_value_t = FormatChoice::Svg)]
    format: FormatChoice,

    /// Filter tracks by year: "NUM", "NUM-NUM" or "all" (default: current year).
    #[arg(long)]
    year: Option<String>,

    /// Title to display (default: "<me> <TYPE>").
    #[arg(long)]
    title: Option<String>,

    /// Athlete name to display.
    #[arg(long, default_value = "Joey")]
    me: String,

    /// Background color of poster.
    #[arg(long, default_value = "#222222")]
    background_color: String,

    /// Color of tracks.
    #[arg(long, default_value = "#4DD2FF")]
    track_color: String,

    /// Secondary color of tracks (default: track color).
    #[arg(long)]
    track_color2: Option<String>,

    /// Color of text.
    #[arg(long, default_value = "#FFFFFF")]
    text_color: String,

    /// Special track color.
    #[arg(long, default_value = "yellow")]
    special_color: String,

    /// Secondary special track color (default: special color).
    #[arg(long, default_value = "red")]
    special_color2: Option<String>,

    /// First highlight threshold; a number, or "off" to disable.
    #[arg(long, default_value = "0")]
    special_number1: String,

    /// Second highlight threshold; a number, or "off" to disable.
    #[arg(long, default_value = "0")]
    special_number2: String,

    /// Strava: keep only this activity type (Run, Ride, ...).
    #[arg(long)]
    strava_sport: Option<String>,

    /// Duolingo: minutes east of UTC used to bucket calendar timestamps into days.
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    duolingo_utc_offset: i32,

    /// Enable debug logging.
    #[arg(long, short)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PosterType {
    Duolingo,
    Shanbay,
    Strava,
    Cichang,
    Ns,
}

impl From<PosterType> for trackposter::SourceKind {
    fn from(value: PosterType) -> Self {
        match value {
            PosterType::Duolingo => Self::Duolingo,
            PosterType::Shanbay => Self::Shanbay,
            PosterType::Strava => Self::Strava,
            PosterType::Cichang => Self::Cichang,
            PosterType::Ns => Self::Ns,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatChoice {
    Svg,
    Png,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let path = run(cli)?;
    eprintln!("wrote {}", path.display());
    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<PathBuf> {
    // Year filter and thresholds fail fast, before the payload is read.
    let filter: trackposter::YearFilter = match cli.year.as_deref() {
        Some(text) => text.parse()?,
        None => trackposter::YearFilter::Single(chrono::Local::now().year()),
    };
    let special1: trackposter::SpecialOverride = cli
        .special_number1
        .parse()
        .context("--special-number1")?;
    let special2: trackposter::SpecialOverride = cli
        .special_number2
        .parse()
        .context("--special-number2")?;

    let kind = trackposter::SourceKind::from(cli.kind);
    let source_config = match trackposter::SourceConfig::default_for(kind) {
        trackposter::SourceConfig::Strava(_) => {
            trackposter::SourceConfig::Strava(trackposter::source::StravaConfig {
                sport: cli.strava_sport,
            })
        }
        trackposter::SourceConfig::Duolingo(_) => {
            trackposter::SourceConfig::Duolingo(trackposter::source::DuolingoConfig {
                utc_offset_minutes: cli.duolingo_utc_offset,
            })
        }
        other => other,
    };

    let payload = std::fs::read_to_string(&cli.input)
        .with_context(|| format!("read payload '{}'", cli.input.display()))?;
    let source = trackposter::Source::from_json(source_config, &payload)
        .with_context(|| format!("parse {kind} payload '{}'", cli.input.display()))?;

    let mut builder = trackposter::PosterConfigBuilder::new()
        .athlete(cli.me)
        .colors(trackposter::PaletteOptions {
            background: cli.background_color,
            track: cli.track_color,
            track2: cli.track_color2,
            special: cli.special_color,
            special2: cli.special_color2,
            text: cli.text_color,
        })
        .special_numbers(special1, special2);
    if let Some(title) = cli.title {
        builder = builder.title(title);
    }
    let config = builder.build(kind, source.default_special_numbers())?;
    tracing::debug!(?config, "resolved poster config");

    let poster = trackposter::Poster::from_source(config, &source, filter.range())?;
    let format = match cli.format {
        FormatChoice::Svg => trackposter::OutputFormat::Svg,
        FormatChoice::Png => trackposter::OutputFormat::Png,
    };
    Ok(poster.write(&cli.out_dir, format)?)
}
