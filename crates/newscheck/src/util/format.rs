use newscheck_lib::Classification;

/// Shorten `text` to at most `max_chars` characters, ending with `…` when cut.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", kept)
}

pub fn format_confidence(confidence: f64) -> String {
    format!("{:.1}%", confidence * 100.0)
}

pub fn format_evidence(classification: &Classification) -> String {
    match (classification.score, classification.confidence) {
        (Some(score), _) => format!("score {}", score),
        (None, Some(confidence)) => format!("confidence {}", format_confidence(confidence)),
        (None, None) => "-".to_string(),
    }
}
