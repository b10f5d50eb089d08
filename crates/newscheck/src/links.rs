//! Fact-check search URLs built from the analyzed text.
//!
//! Templates carry a single `{query}` slot as the whole value of one query
//! parameter. The
//! text is encoded with `application/x-www-form-urlencoded` rules, so
//! decoding the parameter gives the text back unchanged.

use crate::error::{NewscheckError, Result};
use std::collections::BTreeMap;
use url::form_urlencoded;
use url::Url;

pub const QUERY_SLOT: &str = "{query}";

// Stand-in for the encoded text while checking where the slot lands.
const SLOT_MARKER: &str = "newscheck-slot-marker";

pub fn default_templates() -> BTreeMap<String, String> {
    [
        ("alt_news", "https://www.altnews.in/?s={query}"),
        ("boom", "https://www.boomlive.in/search?search={query}"),
        ("factly", "https://factly.in/?s={query}"),
        ("google_fact_check", "https://toolbox.google.com/factcheck/explorer/search?query={query}"),
        ("google_news", "https://news.google.com/search?q={query}"),
        ("snopes", "https://www.snopes.com/search/?q={query}"),
    ]
    .into_iter()
    .map(|(name, template)| (name.to_string(), template.to_string()))
    .collect()
}

pub fn encode_query(text: &str) -> String {
    form_urlencoded::byte_serialize(text.as_bytes()).collect()
}

#[derive(Debug, Clone)]
pub struct LinkGenerator {
    templates: BTreeMap<String, String>,
}

impl LinkGenerator {
    pub fn new(templates: BTreeMap<String, String>) -> Result<Self> {
        for (name, template) in &templates {
            validate_template(name, template)?;
        }
        Ok(Self { templates })
    }

    pub fn sources(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    pub fn links(&self, text: &str) -> Result<BTreeMap<String, Url>> {
        let encoded = encode_query(text);
        let mut links = BTreeMap::new();
        for (name, template) in &self.templates {
            let url = Url::parse(&template.replace(QUERY_SLOT, &encoded))?;
            links.insert(name.clone(), url);
        }
        Ok(links)
    }
}

fn validate_template(name: &str, template: &str) -> Result<()> {
    let slots = template.matches(QUERY_SLOT).count();
    if slots != 1 {
        return Err(NewscheckError::Config(format!(
            "Link template '{}' must contain exactly one {} slot, found {}",
            name, QUERY_SLOT, slots
        )));
    }

    let sample = Url::parse(&template.replace(QUERY_SLOT, SLOT_MARKER))
        .map_err(|e| NewscheckError::Config(format!("Invalid link template '{}': {}", name, e)))?;
    if !matches!(sample.scheme(), "http" | "https") {
        return Err(NewscheckError::Config(format!(
            "Link template '{}' must use http or https, got {}",
            name,
            sample.scheme()
        )));
    }
    if !sample.query_pairs().any(|(_, value)| value == SLOT_MARKER) {
        return Err(NewscheckError::Config(format!(
            "Link template '{}' must use {} as a whole query parameter value",
            name, QUERY_SLOT
        )));
    }

    Ok(())
}
