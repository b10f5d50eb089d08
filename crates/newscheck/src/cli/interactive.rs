use super::render::print_outcome;
use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use newscheck_lib::{NewscheckError, Pipeline, Result};

const INPUT_TYPES: [&str; 2] = ["Headline Only", "Full Article"];

pub fn handle_interactive_command(pipeline: &Pipeline) -> Result<()> {
    let theme = ColorfulTheme::default();

    println!(
        "{} Fake news detection ({} strategy)\n",
        style(">>>").cyan(),
        pipeline.strategy()
    );

    loop {
        let choice = Select::with_theme(&theme)
            .with_prompt("Select what you want to enter")
            .items(&INPUT_TYPES)
            .default(0)
            .interact()?;

        let (headline, article) = if choice == 0 {
            let headline: String = Input::with_theme(&theme)
                .with_prompt("Enter news headline")
                .allow_empty(true)
                .interact_text()?;
            (headline, String::new())
        } else {
            let headline: String = Input::with_theme(&theme)
                .with_prompt("Headline (optional)")
                .allow_empty(true)
                .interact_text()?;
            let article: String = Input::with_theme(&theme)
                .with_prompt("Enter full article text")
                .allow_empty(true)
                .interact_text()?;
            (headline, article)
        };

        match pipeline.analyze_parts(&headline, &article) {
            Ok(outcome) => print_outcome(&outcome),
            Err(NewscheckError::Input(message)) => {
                println!("{} {}", style("⚠").yellow(), style(message).yellow());
            }
            Err(err) => return Err(err),
        }

        let again = Confirm::with_theme(&theme)
            .with_prompt("Analyze another?")
            .default(false)
            .interact()?;
        if !again {
            break;
        }
    }

    Ok(())
}
