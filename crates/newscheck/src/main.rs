mod cli;
mod util;

use clap::Parser;
use newscheck_lib::Result;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbose);

    let options = cli::PipelineOptions {
        config: cli.config,
        strategy: cli.strategy,
        model: cli.model,
    };

    match cli.command {
        cli::Commands::Analyze { text, headline, article, json } => {
            let pipeline = cli::init_pipeline(&options)?;
            cli::analyze::handle_analyze_command(&pipeline, text, headline, article, json)
        }

        cli::Commands::Interactive => {
            let pipeline = cli::init_pipeline(&options)?;
            cli::interactive::handle_interactive_command(&pipeline)
        }

        cli::Commands::Batch { path, json } => {
            let pipeline = cli::init_pipeline(&options)?;
            cli::batch::handle_batch_command(&pipeline, &path, json, cli.verbose, cli.quiet)
        }

        cli::Commands::Config { action } => {
            cli::config::handle_config_command(options.config.as_deref(), action, cli.quiet)
        }
    }
}
