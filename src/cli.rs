use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use ui_format::config::{ConfigOverrides, FormatterConfig};
use ui_format::logging::init_logging;
use ui_format::{DisplayFormatter, Rating, TimeZoneSetting};

#[derive(Parser)]
#[command(name = "uifmt")]
#[command(about = "Format dates, ratings and text the way the display layer shows them")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    verbose: bool,

    #[arg(short, long, global = true, help = "Configuration file path")]
    config: Option<String>,

    #[arg(long, global = true, help = "Time zone: local, an IANA name, or an offset like +05:30")]
    time_zone: Option<TimeZoneSetting>,
}

#[derive(Subcommand)]
enum Commands {
    /// Format an ISO 8601 date as "Jan 15, 2024"
    Date {
        #[arg(help = "ISO 8601 date or date-time")]
        input: String,
    },

    /// Format a rating to one decimal place
    Rating {
        #[arg(help = "Rating value; missing or non-numeric prints the fallback", allow_hyphen_values = true)]
        value: Option<String>,
    },

    /// Truncate text and append an ellipsis
    Truncate {
        #[arg(help = "Text to truncate")]
        text: String,

        #[arg(help = "Maximum length in characters; defaults to display.max_text_length")]
        max_length: Option<usize>,
    },

    /// Print the effective configuration
    Config,
}

fn load_config(cli: &Cli) -> Result<FormatterConfig> {
    let mut config = match &cli.config {
        Some(path) => FormatterConfig::load_from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path))?,
        None => FormatterConfig::load()?,
    };

    ConfigOverrides::apply(&mut config);

    if let Some(zone) = cli.time_zone {
        config.date.time_zone = zone;
    }
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }

    Ok(config)
}

/// Text that does not parse as a number is treated like a missing rating
fn parse_rating(value: Option<&str>) -> Rating {
    value
        .and_then(|raw| raw.trim().parse::<f64>().ok())
        .into()
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    init_logging(&config.logging)?;
    debug!("uifmt v{}", env!("CARGO_PKG_VERSION"));

    let formatter = DisplayFormatter::new(config);

    match cli.command {
        Commands::Date { input } => {
            println!("{}", formatter.date(&input));
        }
        Commands::Rating { value } => {
            println!("{}", formatter.rating(parse_rating(value.as_deref())));
        }
        Commands::Truncate { text, max_length } => {
            let formatted = match max_length {
                Some(max_length) => formatter.truncate(&text, max_length),
                None => formatter.truncate_default(&text),
            };
            println!("{}", formatted);
        }
        Commands::Config => {
            print!("{}", formatter.config().to_toml()?);
        }
    }

    Ok(())
}
