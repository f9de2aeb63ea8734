//! Artikelsuche zu einem Ortsnamen über die Wikipedia-OpenSearch-API.

use anyhow::Context;

use super::{API_URL, HTTP_TIMEOUT, USER_AGENT};

/// Verwandter Wikipedia-Artikel zu einem Ort.
#[derive(Debug, Clone, PartialEq)]
pub struct RelatedLink {
    /// Artikeltitel wie von der API gemeldet.
    pub title: String,
    /// Artikel-URL in kanonischer Form.
    pub url: String,
}

/// Liefert verwandte Artikel zu einem Ortsnamen.
pub trait RelatedLinksLookup {
    fn related(&self, place_name: &str) -> anyhow::Result<Vec<RelatedLink>>;
}

/// OpenSearch-Anbindung der Wikipedia-API.
pub struct WikipediaOpenSearch {
    agent: ureq::Agent,
}

impl WikipediaOpenSearch {
    pub fn new() -> Self {
        let agent = ureq::builder()
            .timeout(HTTP_TIMEOUT)
            .user_agent(USER_AGENT)
            .build();
        Self { agent }
    }
}

impl Default for WikipediaOpenSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl RelatedLinksLookup for WikipediaOpenSearch {
    fn related(&self, place_name: &str) -> anyhow::Result<Vec<RelatedLink>> {
        let body = self
            .agent
            .get(API_URL)
            .query("action", "opensearch")
            .query("search", place_name)
            .query("format", "json")
            .call()
            .context("OpenSearch-Abfrage fehlgeschlagen")?
            .into_string()
            .context("OpenSearch-Antwort nicht lesbar")?;
        parse_opensearch(&body)
    }
}

/// OpenSearch antwortet als 4-Tupel: Suchbegriff, Titel, Beschreibungen, URLs.
type OpenSearchPayload = (String, Vec<String>, Vec<String>, Vec<String>);

/// Wandelt den OpenSearch-Antwortkörper in die Artikelliste um.
///
/// Die URL wird aus dem Titel abgeleitet (Leerzeichen als Unterstriche),
/// damit Titel und Attributions-URL immer zusammenpassen.
fn parse_opensearch(body: &str) -> anyhow::Result<Vec<RelatedLink>> {
    let payload: OpenSearchPayload =
        serde_json::from_str(body).context("OpenSearch-Antwort ist kein gültiges JSON")?;
    Ok(payload
        .1
        .into_iter()
        .map(|title| {
            let url = format!("https://en.wikipedia.org/wiki/{}", title.replace(' ', "_"));
            RelatedLink { title, url }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_opensearch_titles() {
        let body = r#"["Empire State",
            ["Empire State Building","Empire State of Mind"],
            ["",""],
            ["https://en.wikipedia.org/wiki/Empire_State_Building","https://en.wikipedia.org/wiki/Empire_State_of_Mind"]]"#;

        let links = parse_opensearch(body).expect("Antwort sollte parsebar sein");
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].title, "Empire State Building");
        assert_eq!(links[0].url, "https://en.wikipedia.org/wiki/Empire_State_Building");
        assert_eq!(links[1].url, "https://en.wikipedia.org/wiki/Empire_State_of_Mind");
    }

    #[test]
    fn test_parse_opensearch_empty_result() {
        let links = parse_opensearch(r#"["xyzzy",[],[],[]]"#)
            .expect("Leere Antwort sollte parsebar sein");
        assert!(links.is_empty());
    }

    #[test]
    fn test_parse_opensearch_rejects_garbage() {
        assert!(parse_opensearch("{}").is_err());
    }
}
