use std::fs;

use clap::{Parser, ValueEnum};
use log::{error, info};
use serde::Serialize;

use plotstyles::config::ProfileParams;
use plotstyles::demo::{render_sheet, DemoMode, USAGE};
use plotstyles::error::StyleResult;
use plotstyles::profile::rc::RcParams;
use plotstyles::profile::{apply_profile, Profile};
use plotstyles::styles::StyleRegistry;

#[derive(Parser)]
#[command(name = "plotstyles")]
#[command(
    about = "Show the line, point, fill and arrow styles of a plot style profile",
    long_about = "Generates the named styles of a profile and renders all styles of one kind into an SVG sheet, or prints the styles and rendering settings as JSON."
)]
struct Cli {
    /// Kind of styles to show: line, point, linepoint, fill or arrow
    #[arg(default_value = "line")]
    mode: String,
    /// Built-in profile
    #[arg(long, value_enum, default_value_t = Profile::Screen)]
    style: Profile,
    /// Profile JSON file; overrides --style
    #[arg(long)]
    profile: Option<String>,
    /// Write the SVG sheet to this file instead of stdout
    #[arg(short, long)]
    output: Option<String>,
    /// Print the generated styles and rendering settings as JSON
    #[arg(long)]
    json: bool,
    /// Log verbosity level
    #[arg(long, default_value = "info")]
    log_level: LogLevel,
    /// Write log output to a file instead of stderr
    #[arg(long)]
    log_file: Option<String>,
    /// Append to log file instead of truncating
    #[arg(long)]
    append_log: bool,
}

#[derive(Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Everything a profile produces, as printed by `--json`.
#[derive(Serialize)]
struct Export<'a> {
    styles: &'a StyleRegistry,
    rc: &'a RcParams,
}

fn run(cli: &Cli) -> StyleResult<()> {
    let params = match &cli.profile {
        Some(path) => {
            info!("Loading profile from {}", path);
            ProfileParams::load(path)?
        }
        None => cli.style.params(),
    };
    let mut registry = StyleRegistry::new();
    let mut rc = RcParams::new();
    apply_profile(&params, &mut registry, &mut rc)?;

    if cli.json {
        let export = Export {
            styles: &registry,
            rc: &rc,
        };
        println!("{}", serde_json::to_string_pretty(&export)?);
        return Ok(());
    }

    let Some(mode) = DemoMode::parse(&cli.mode) else {
        println!("unknown option {}!", cli.mode);
        println!("{}", USAGE);
        return Ok(());
    };
    let svg = render_sheet(&registry, &rc, mode);
    match &cli.output {
        Some(path) => {
            fs::write(path, svg)?;
            info!("Wrote {:?} sheet to {}", mode, path);
        }
        None => println!("{}", svg),
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let mut log_builder = env_logger::Builder::from_default_env();
    log_builder
        .filter_level(cli.log_level.to_level_filter())
        .format_module_path(false);
    if let Some(ref path) = cli.log_file {
        let file = if cli.append_log {
            fs::File::options().create(true).append(true).open(path)
        } else {
            fs::File::create(path)
        }
        .unwrap_or_else(|e| panic!("Could not open log file '{}': {}", path, e));
        log_builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    log_builder.init();

    if let Err(e) = run(&cli) {
        error!("{}", e);
    }
}
