use clap::Subcommand;
use console::style;
use newscheck_lib::{Config, NewscheckError, Result};
use std::path::Path;

#[derive(Subcommand)]
pub enum ConfigCommands {
    #[command(about = "Print the effective configuration as TOML")]
    Show,

    #[command(about = "Write the default configuration to the XDG config directory")]
    Init {
        #[arg(long, help = "Overwrite an existing file")]
        force: bool,
    },
}

pub fn handle_config_command(
    config_path: Option<&Path>,
    action: ConfigCommands,
    quiet: bool,
) -> Result<()> {
    match action {
        ConfigCommands::Show => {
            let config = Config::load(config_path)?;
            print!("{}", config.to_toml()?);
            Ok(())
        }
        ConfigCommands::Init { force } => {
            let path = match config_path {
                Some(path) => path.to_path_buf(),
                None => Config::default_path()?,
            };
            if path.exists() && !force {
                return Err(NewscheckError::Config(format!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                )));
            }

            Config::default().save_to_file(&path)?;
            if !quiet {
                println!("{} Wrote default configuration to {}", style("✓").green(), path.display());
            }
            Ok(())
        }
    }
}
