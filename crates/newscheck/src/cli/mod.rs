pub mod analyze;
pub mod batch;
pub mod config;
pub mod interactive;
mod render;

use clap::{Parser, Subcommand};
use console::style;
use newscheck_lib::{Config, Pipeline, Result, Strategy};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "newscheck")]
#[command(about = "Check whether a news headline or article looks real or fake", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Path to configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, value_enum, help = "Classifier strategy (overrides config)")]
    pub strategy: Option<Strategy>,

    #[arg(long, global = true, help = "Path to model artifact (overrides config)")]
    pub model: Option<PathBuf>,

    #[arg(long, short = 'v', global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, short = 'q', global = true, help = "Suppress non-error output")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Analyze a single headline or article")]
    Analyze {
        #[arg(help = "Text to analyze")]
        text: Option<String>,

        #[arg(long, help = "News headline")]
        headline: Option<String>,

        #[arg(long, help = "Full article text")]
        article: Option<String>,

        #[arg(long, help = "Print the result as JSON")]
        json: bool,
    },

    #[command(about = "Enter headlines and articles interactively")]
    Interactive,

    #[command(about = "Analyze every line of a file")]
    Batch {
        #[arg(help = "File with one headline or article per line")]
        path: PathBuf,

        #[arg(long, help = "Print the results as JSON")]
        json: bool,
    },

    #[command(about = "Show or initialize configuration")]
    Config {
        #[command(subcommand)]
        action: config::ConfigCommands,
    },
}

pub struct PipelineOptions {
    pub config: Option<PathBuf>,
    pub strategy: Option<Strategy>,
    pub model: Option<PathBuf>,
}

pub fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

pub fn init_pipeline(options: &PipelineOptions) -> Result<Pipeline> {
    let mut config = Config::load(options.config.as_deref())?;
    if let Some(strategy) = options.strategy {
        config.strategy = strategy;
    }
    if let Some(model) = &options.model {
        config.model_path = Some(model.clone());
        if options.strategy.is_none() {
            config.strategy = Strategy::Model;
        }
    }

    let pipeline = Pipeline::from_config(&config)?;
    if let Some(warning) = pipeline.load_warning() {
        eprintln!("{} {}", style("!").yellow().bold(), style(warning).yellow());
    }

    Ok(pipeline)
}
