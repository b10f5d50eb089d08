use crate::util::format::format_evidence;
use console::{style, StyledObject};
use newscheck_lib::{AnalysisOutcome, AnalysisReport, Label};

pub fn styled_label(label: Label) -> StyledObject<&'static str> {
    match label {
        Label::Fake => style("FAKE NEWS").red().bold(),
        Label::PossiblyFake => style("POSSIBLY FAKE").yellow().bold(),
        Label::Real => style("REAL NEWS").green().bold(),
    }
}

fn section(title: &str) {
    println!("\n{}", style(title).bold());
    println!("{}", style("─".repeat(60)).dim());
}

pub fn print_outcome(outcome: &AnalysisOutcome) {
    match outcome {
        AnalysisOutcome::Analyzed(report) => print_report(report),
        AnalysisOutcome::Unavailable { reason } => {
            println!(
                "{} {}",
                style("!").yellow().bold(),
                style(format!("Classification unavailable: {}", reason)).yellow()
            );
        }
        AnalysisOutcome::PredictionFailed { message } => {
            println!(
                "{} {}",
                style("✗").red().bold(),
                style(format!("Prediction failed: {}", message)).red()
            );
        }
    }
}

pub fn print_report(report: &AnalysisReport) {
    section("Prediction");
    println!(
        "  {}  {}",
        styled_label(report.label()),
        style(format!(
            "({} strategy, {})",
            report.classification.strategy,
            format_evidence(&report.classification)
        ))
        .dim()
    );

    section("Reasoning");
    println!("  {}", report.reasoning);

    section("Advice");
    println!("  {}", style(&report.advice.title).bold());
    for step in &report.advice.steps {
        println!("  - {}", step);
    }

    section("Trusted Verification Sources");
    for source in &report.advice.sources {
        println!("  - {}: {}", source.name, style(&source.url).cyan());
    }

    if !report.links.is_empty() {
        section("Search Fact-Checkers");
        for (name, url) in &report.links {
            println!("  - {}: {}", name, style(url).cyan());
        }
    }

    println!();
}
