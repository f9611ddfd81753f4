use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fadelabel_core::{AppConfig, HAlign};

mod commands;

#[derive(Parser)]
#[command(name = "fadelabel")]
#[command(author, version, about = "A fading, auto-scrolling text label for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive label demo
    Run,
    /// Render one label headlessly and print every frame as JSON lines
    Trace {
        /// Label text, `\r` or newlines separate lines
        #[arg(short, long)]
        text: String,
        /// Number of frames to render
        #[arg(short = 'n', long, default_value_t = 120)]
        frames: u32,
        /// Box width in pixels (10 per character)
        #[arg(short, long, default_value_t = 200.0)]
        width: f32,
        /// Scroll speed, 0-6
        #[arg(short, long, default_value_t = 4)]
        speed: u8,
        /// Wrap string joining the end of a line to its start
        #[arg(long, default_value = "")]
        wrap: String,
        /// Horizontal alignment: left, center or right
        #[arg(short, long, default_value = "left")]
        align: HAlign,
        /// Skip the fade-in
        #[arg(long)]
        no_fade: bool,
        /// Frames per second the trace simulates
        #[arg(long, default_value_t = 30)]
        fps: u32,
        /// Seconds before an overflowing line starts to scroll
        #[arg(long, default_value_t = 1)]
        delay: u32,
    },
    /// Show or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    // Handle commands
    match cli.command {
        Some(Commands::Run) | None => commands::run::run(config),
        Some(Commands::Trace {
            text,
            frames,
            width,
            speed,
            wrap,
            align,
            no_fade,
            fps,
            delay,
        }) => {
            let options = commands::trace::TraceOptions {
                text,
                frames,
                width,
                speed,
                wrap,
                align,
                fade_in: !no_fade,
                fps,
                delay_secs: delay,
            };
            commands::trace::run(&options, &mut std::io::stdout().lock())
        }
        Some(Commands::Config { action }) => match action {
            ConfigAction::Show => commands::config::show(&config),
            ConfigAction::Init { force } => commands::config::init(force),
        },
    }
}
