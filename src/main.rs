//! clipscope - clipboard content inspector
//!
//! Entry point for the command-line binary.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use clipscope::config::{Config, Overrides};
use clipscope::core::{Renderer, TempImageStore};
use clipscope::report::{ColorMode, ConsolePresenter};

/// Command-line arguments for clipscope
#[derive(Parser, Debug)]
#[command(name = "clipscope")]
#[command(version, about = "Inspect every format on the clipboard", long_about = None)]
pub struct Args {
    /// Ask the clipboard to convert text formats to decoded values
    #[arg(long = "auto", visible_alias = "all")]
    pub auto_convert: bool,

    /// Save image payloads to files
    #[arg(long = "save")]
    pub save_images: bool,

    /// Directory for saved images (defaults to the temp directory)
    #[arg(long)]
    pub image_dir: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, env = "CLIPSCOPE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Clipboard backend (auto|wayland|x11)
    #[arg(long)]
    pub backend: Option<String>,

    /// Read the primary selection instead of the clipboard
    #[arg(long)]
    pub primary: bool,

    /// Colored output (auto|always|never)
    #[arg(long)]
    pub color: Option<String>,

    /// Verbose logging (can be specified multiple times)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Log format (json|pretty|compact)
    #[arg(long, default_value = "compact")]
    pub log_format: String,

    /// Write logs to file (in addition to stderr)
    #[arg(long)]
    pub log_file: Option<String>,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("{}", clipscope::utils::format_user_error(&e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    init_logging(&args)?;

    info!(
        "clipscope v{} (built {}, commit {})",
        env!("CARGO_PKG_VERSION"),
        env!("BUILD_DATE"),
        env!("GIT_HASH")
    );

    let config = Config::load_or_default(args.config.as_deref())?.with_overrides(Overrides {
        auto_convert: args.auto_convert,
        save_images: args.save_images,
        image_dir: args.image_dir,
        backend: args.backend,
        primary: args.primary,
        color: args.color,
    });
    config.validate()?;
    tracing::debug!("Config: {:?}", config);

    let source = clipscope::clipboard::open(&config.clipboard)?;

    let store = match &config.inspect.image_dir {
        Some(dir) => TempImageStore::in_dir(dir),
        None => TempImageStore::new(),
    };
    let renderer = Renderer::with_sink(config.inspect.save_images, store);

    let mut presenter = ConsolePresenter::stdout(ColorMode::from_config(&config.output.color));
    let summary = clipscope::inspect::inspect(
        &source,
        &renderer,
        config.inspect.auto_convert,
        &mut presenter,
    )?;
    presenter.into_inner()?;

    tracing::debug!("Summary: {:?}", summary);
    Ok(())
}

fn init_logging(args: &Args) -> Result<()> {
    use std::fs::File;

    let log_level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!(
            "clipscope={level},clipscope_core={level},warn",
            level = log_level
        ))
    });

    // If log file is specified, write to both stderr and file
    if let Some(log_file_path) = &args.log_file {
        let file = File::create(log_file_path)?;

        match args.log_format.as_str() {
            "json" => {
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(
                        tracing_subscriber::fmt::layer()
                            .json()
                            .with_writer(std::io::stderr),
                    )
                    .with(
                        tracing_subscriber::fmt::layer()
                            .json()
                            .with_writer(file)
                            .with_ansi(false),
                    )
                    .init();
            }
            "pretty" => {
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(
                        tracing_subscriber::fmt::layer()
                            .pretty()
                            .with_writer(std::io::stderr),
                    )
                    .with(
                        tracing_subscriber::fmt::layer()
                            .with_writer(file)
                            .with_ansi(false),
                    )
                    .init();
            }
            _ => {
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(
                        tracing_subscriber::fmt::layer()
                            .compact()
                            .with_writer(std::io::stderr),
                    )
                    .with(
                        tracing_subscriber::fmt::layer()
                            .compact()
                            .with_writer(file)
                            .with_ansi(false),
                    )
                    .init();
            }
        }
        info!("Logging to file: {}", log_file_path);
    } else {
        // Stderr only
        match args.log_format.as_str() {
            "json" => {
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                    .init();
            }
            "pretty" => {
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
                    .init();
            }
            _ => {
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
                    .init();
            }
        }
    }

    Ok(())
}
