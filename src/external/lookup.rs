use serde::Deserialize;

use crate::error::{QuizError, Result};

/// One supplementary definition from the lookup service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sense {
    pub part_of_speech: Option<String>,
    pub definition: String,
}

pub trait DefinitionLookup {
    fn define(&self, word: &str) -> Result<Vec<Sense>>;
}

#[derive(Deserialize)]
struct LookupResponse {
    #[serde(default)]
    results: Vec<LookupResult>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LookupResult {
    part_of_speech: Option<String>,
    definition: Option<String>,
}

/// Results without a definition are dropped.
pub fn parse_response(body: &str) -> Result<Vec<Sense>> {
    let response: LookupResponse = serde_json::from_str(body)
        .map_err(|e| QuizError::External(format!("malformed lookup response: {e}")))?;
    Ok(response
        .results
        .into_iter()
        .filter_map(|r| {
            r.definition.map(|definition| Sense {
                part_of_speech: r.part_of_speech,
                definition,
            })
        })
        .collect())
}

/// Whether supplementary lookups are on, and the token to use. Lives only
/// in memory for the lifetime of the process.
#[derive(Clone, Debug, Default)]
pub struct LookupSettings {
    pub enabled: bool,
    pub token: Option<String>,
}

impl LookupSettings {
    /// A client when lookups are enabled and a token is set.
    pub fn client(&self, url_template: &str) -> Option<HttpLookup> {
        if !self.enabled {
            return None;
        }
        let token = self.token.as_deref().filter(|t| !t.is_empty())?;
        Some(HttpLookup::new(url_template, token))
    }
}

/// Token-authenticated JSON lookup keyed by word. `{word}` in the URL
/// template stands for one path segment and is filled in percent-encoded.
#[cfg_attr(not(feature = "network"), allow(dead_code))]
pub struct HttpLookup {
    url_template: String,
    token: String,
}

impl HttpLookup {
    pub fn new(url_template: &str, token: &str) -> Self {
        Self {
            url_template: url_template.to_string(),
            token: token.to_string(),
        }
    }
}

impl DefinitionLookup for HttpLookup {
    fn define(&self, word: &str) -> Result<Vec<Sense>> {
        let body = self.fetch(word)?;
        parse_response(&body)
    }
}

#[cfg(feature = "network")]
impl HttpLookup {
    fn url_for(&self, word: &str) -> Result<reqwest::Url> {
        let bad_template = |reason: &str| {
            QuizError::External(format!("lookup url {:?}: {reason}", self.url_template))
        };
        let (base, rest) = self
            .url_template
            .split_once("{word}")
            .ok_or_else(|| bad_template("missing {word}"))?;
        if !base.ends_with('/') || base.contains(['?', '#']) {
            return Err(bad_template("{word} must be a whole path segment"));
        }
        let mut url = reqwest::Url::parse(base).map_err(|e| bad_template(&e.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| bad_template("not a hierarchical url"))?
            .pop_if_empty()
            .push(word);
        if rest.is_empty() {
            return Ok(url);
        }
        reqwest::Url::parse(&format!("{url}{rest}")).map_err(|e| bad_template(&e.to_string()))
    }

    fn fetch(&self, word: &str) -> Result<String> {
        let external = |e: reqwest::Error| QuizError::External(e.to_string());
        let url = self.url_for(word)?;
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .map_err(external)?;
        let response = client
            .get(url)
            .header("X-RapidAPI-Key", &self.token)
            .send()
            .map_err(external)?;
        if !response.status().is_success() {
            return Err(QuizError::External(format!(
                "lookup returned {}",
                response.status()
            )));
        }
        response.text().map_err(external)
    }
}

#[cfg(not(feature = "network"))]
impl HttpLookup {
    fn fetch(&self, _word: &str) -> Result<String> {
        Err(QuizError::External(
            "built without the `network` feature".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_results_with_optional_fields() {
        let body = r#"{
            "word": "lucid",
            "results": [
                {"definition": "transparently clear", "partOfSpeech": "adjective"},
                {"definition": "having a clear mind"},
                {"partOfSpeech": "noun"}
            ]
        }"#;
        let senses = parse_response(body).unwrap();
        assert_eq!(
            senses,
            vec![
                Sense {
                    part_of_speech: Some("adjective".to_string()),
                    definition: "transparently clear".to_string(),
                },
                Sense {
                    part_of_speech: None,
                    definition: "having a clear mind".to_string(),
                },
            ]
        );
    }

    #[test]
    fn missing_results_is_empty() {
        assert!(parse_response(r#"{"word": "lucid"}"#).unwrap().is_empty());
    }

    #[test]
    fn malformed_body_is_external_error() {
        let err = parse_response("<html>rate limited</html>").unwrap_err();
        assert!(matches!(err, QuizError::External(_)));
        let err = parse_response(r#"{"results": "nope"}"#).unwrap_err();
        assert!(matches!(err, QuizError::External(_)));
    }

    #[test]
    fn client_requires_enabled_and_token() {
        let url = "https://example.com/words/{word}";
        assert!(LookupSettings::default().client(url).is_none());
        let no_token = LookupSettings {
            enabled: true,
            token: None,
        };
        assert!(no_token.client(url).is_none());
        let disabled = LookupSettings {
            enabled: false,
            token: Some("abc".to_string()),
        };
        assert!(disabled.client(url).is_none());
        let ready = LookupSettings {
            enabled: true,
            token: Some("abc".to_string()),
        };
        assert!(ready.client(url).is_some());
    }

    #[cfg(feature = "network")]
    #[test]
    fn url_encodes_word_as_path_segment() {
        let lookup = HttpLookup::new("https://example.com/words/{word}", "abc");
        assert_eq!(
            lookup.url_for("lucid").unwrap().as_str(),
            "https://example.com/words/lucid"
        );
        assert_eq!(
            lookup.url_for("a/b?c#d").unwrap().as_str(),
            "https://example.com/words/a%2Fb%3Fc%23d"
        );
    }

    #[cfg(feature = "network")]
    #[test]
    fn url_keeps_template_suffix() {
        let lookup = HttpLookup::new("https://example.com/words/{word}/definitions", "abc");
        assert_eq!(
            lookup.url_for("half life").unwrap().as_str(),
            "https://example.com/words/half%20life/definitions"
        );
    }

    #[cfg(feature = "network")]
    #[test]
    fn query_placeholder_is_rejected() {
        let lookup = HttpLookup::new("https://example.com/define?term={word}", "abc");
        assert!(matches!(lookup.url_for("lucid"), Err(QuizError::External(_))));
    }
}
