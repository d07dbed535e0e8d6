use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use motionsketch::{CssOptions, PathStyle, PipelineConfig, PipelineOutput, Point, Session};

#[derive(Parser, Debug)]
#[command(name = "motionsketch", version)]
struct Cli {
    /// Log pipeline stages to stderr.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Reduce a recorded trajectory to keyframes or a cubic-bezier curve.
    Analyze(AnalyzeArgs),
    /// Print only the SVG motion path of a recorded trajectory.
    Path(PathArgs),
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Input JSON array of `{ "time", "x", "y" }` samples.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Pipeline config JSON (unset fields keep their defaults).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Emit cubic segments instead of one line per sample.
    #[arg(long, default_value_t = false)]
    curved: bool,

    /// Path origin as `X,Y` (defaults to the first sample).
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    origin: Option<Point>,
}

#[derive(Parser, Debug)]
struct AnalyzeArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// `@keyframes` name (css format only).
    #[arg(long, default_value = "sketched-motion")]
    name: String,

    /// Selector for the animation rule (css format only).
    #[arg(long, default_value = ".sketched")]
    selector: String,

    /// Animation duration in milliseconds (css format only).
    #[arg(long)]
    duration_ms: Option<f64>,
}

#[derive(Parser, Debug)]
struct PathArgs {
    #[command(flatten)]
    input: InputArgs,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Json,
    Css,
}

#[derive(serde::Serialize)]
struct Report<'a> {
    #[serde(flatten)]
    output: &'a PipelineOutput,
    path: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .init();

    match cli.cmd {
        Command::Analyze(args) => cmd_analyze(args),
        Command::Path(args) => cmd_path(args),
    }
}

fn cmd_analyze(args: AnalyzeArgs) -> anyhow::Result<()> {
    let mut sess = load_session(&args.input)?;
    let style = path_style(args.input.curved);
    let path = sess.path_string(args.input.origin, style);
    let curve_segments = sess.config().curve_segments;
    let output = sess.run();

    match args.format {
        Format::Json => {
            let report = Report { output, path };
            let json =
                serde_json::to_string_pretty(&report).context("serialize pipeline output")?;
            println!("{json}");
        }
        Format::Css => {
            let opts = CssOptions {
                name: args.name,
                selector: args.selector,
                duration_ms: args.duration_ms,
                iterations: None,
                origin: args.input.origin,
                path_style: style,
                curve_segments,
            };
            print!("{}", motionsketch::render_css(output, &opts));
        }
    }
    Ok(())
}

fn cmd_path(args: PathArgs) -> anyhow::Result<()> {
    let sess = load_session(&args.input)?;
    println!(
        "{}",
        sess.path_string(args.input.origin, path_style(args.input.curved))
    );
    Ok(())
}

fn load_session(input: &InputArgs) -> anyhow::Result<Session> {
    let config = match &input.config {
        Some(p) => PipelineConfig::from_path(p)
            .with_context(|| format!("load config '{}'", p.display()))?,
        None => PipelineConfig::default(),
    };
    let json = std::fs::read_to_string(&input.in_path)
        .with_context(|| format!("read samples '{}'", input.in_path.display()))?;
    let samples = motionsketch::samples_from_json(&json)
        .with_context(|| format!("parse samples '{}'", input.in_path.display()))?;

    let min_raw = config.min_raw_samples;
    let mut sess = Session::new(config)?;
    sess.extend(samples)?;
    if sess.raw().len() < min_raw {
        eprintln!(
            "only {} samples recorded (need {min_raw} for keyframes); using the fallback curve",
            sess.raw().len()
        );
    }
    Ok(sess)
}

fn path_style(curved: bool) -> PathStyle {
    if curved {
        PathStyle::Curved
    } else {
        PathStyle::Straight
    }
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{s}'"))?;
    let x: f64 = x.trim().parse().map_err(|e| format!("bad x '{x}': {e}"))?;
    let y: f64 = y.trim().parse().map_err(|e| format!("bad y '{y}': {e}"))?;
    Ok(Point::new(x, y))
}
