use super::render::print_outcome;
use newscheck_lib::{Pipeline, Result};

pub fn handle_analyze_command(
    pipeline: &Pipeline,
    text: Option<String>,
    headline: Option<String>,
    article: Option<String>,
    json: bool,
) -> Result<()> {
    let raw = [headline, text, article]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ");

    let outcome = pipeline.analyze(&raw)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print_outcome(&outcome);
    }

    Ok(())
}
