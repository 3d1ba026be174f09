use std::env;
use std::str::FromStr;
use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;

use crate::error::SourceError;
use crate::question::{Answer, Question};

pub const DEFAULT_API_URL: &str = "https://opentdb.com/api.php";
pub const DEFAULT_AMOUNT: u8 = 10;
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Anything that can hand out a fresh batch of questions.
pub trait QuestionSource {
    /// Fetch a new batch, in serving order.
    ///
    /// # Errors
    ///
    /// Returns `SourceError` when the batch cannot be retrieved or decoded.
    /// A successful fetch is never empty.
    fn fetch(&self) -> Result<Vec<Question>, SourceError>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceConfig {
    pub base_url: String,
    pub amount: u8,
    pub timeout: Duration,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            amount: DEFAULT_AMOUNT,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl SourceConfig {
    /// Read overrides from `QUIZZLER_API_URL`, `QUIZZLER_QUESTION_COUNT`
    /// and `QUIZZLER_TIMEOUT_SECS`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(url) = lookup("QUIZZLER_API_URL").filter(|u| !u.trim().is_empty()) {
            config.base_url = url.trim().to_string();
        }
        if let Some(amount) = parse_var::<u8>(&lookup, "QUIZZLER_QUESTION_COUNT") {
            if amount == 0 {
                log::warn!("QUIZZLER_QUESTION_COUNT must be positive, keeping {}", config.amount);
            } else {
                config.amount = amount;
            }
        }
        if let Some(secs) = parse_var::<u64>(&lookup, "QUIZZLER_TIMEOUT_SECS") {
            config.timeout = Duration::from_secs(secs);
        }

        config
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("ignoring invalid {key}={raw:?}");
            None
        }
    }
}

/// Client for the Open Trivia DB boolean question endpoint.
#[derive(Clone, Debug)]
pub struct OpenTriviaSource {
    client: Client,
    config: SourceConfig,
}

impl OpenTriviaSource {
    /// # Errors
    ///
    /// Returns `SourceError::Http` if the HTTP client cannot be built.
    pub fn new(config: SourceConfig) -> Result<Self, SourceError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &SourceConfig {
        &self.config
    }
}

impl QuestionSource for OpenTriviaSource {
    fn fetch(&self) -> Result<Vec<Question>, SourceError> {
        log::info!(
            "fetching {} questions from {}",
            self.config.amount,
            self.config.base_url
        );

        let response = self
            .client
            .get(&self.config.base_url)
            .query(&[
                ("amount", self.config.amount.to_string()),
                ("type", "boolean".to_string()),
            ])
            .send()?;

        if !response.status().is_success() {
            return Err(SourceError::HttpStatus(response.status()));
        }

        let body = response.text()?;
        let questions = decode_batch(&body)?;
        log::debug!("decoded {} questions", questions.len());
        Ok(questions)
    }
}

#[derive(Debug, Deserialize)]
struct TriviaResponse {
    response_code: u8,
    #[serde(default)]
    results: Vec<TriviaItem>,
}

#[derive(Debug, Deserialize)]
struct TriviaItem {
    question: String,
    correct_answer: String,
}

fn response_reason(code: u8) -> &'static str {
    match code {
        1 => "not enough questions for the query",
        2 => "invalid parameter",
        3 => "session token not found",
        4 => "session token exhausted",
        5 => "rate limited",
        _ => "unknown response code",
    }
}

/// Decode an Open Trivia DB payload into questions, unescaping HTML entities
/// in the question text.
///
/// # Errors
///
/// Returns `SourceError` for malformed JSON, a non-zero `response_code`,
/// an answer other than `True`/`False`, or an empty result list.
pub fn decode_batch(body: &str) -> Result<Vec<Question>, SourceError> {
    let payload: TriviaResponse = serde_json::from_str(body)?;

    if payload.response_code != 0 {
        return Err(SourceError::Api {
            code: payload.response_code,
            reason: response_reason(payload.response_code),
        });
    }
    if payload.results.is_empty() {
        return Err(SourceError::Empty);
    }

    payload
        .results
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let answer = Answer::from_canonical(&item.correct_answer).ok_or_else(|| {
                SourceError::InvalidAnswer {
                    index,
                    value: item.correct_answer.clone(),
                }
            })?;
            let text = html_escape::decode_html_entities(&item.question);
            Ok(Question::new(text.into_owned(), answer))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const BATCH: &str = r#"{
        "response_code": 0,
        "results": [
            {
                "type": "boolean",
                "difficulty": "easy",
                "category": "Science: Computers",
                "question": "&quot;HTML&quot; stands for Hypertext Markup Language.",
                "correct_answer": "True",
                "incorrect_answers": ["False"]
            },
            {
                "type": "boolean",
                "difficulty": "medium",
                "category": "General Knowledge",
                "question": "Tom &amp; Jerry&#039;s creators never won an Oscar.",
                "correct_answer": "False",
                "incorrect_answers": ["True"]
            }
        ]
    }"#;

    #[test]
    fn decodes_entities_and_answers_in_order() {
        let questions = decode_batch(BATCH).unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(
            questions[0].text(),
            "\"HTML\" stands for Hypertext Markup Language."
        );
        assert_eq!(questions[0].correct_answer(), Answer::True);
        assert_eq!(
            questions[1].text(),
            "Tom & Jerry's creators never won an Oscar."
        );
        assert_eq!(questions[1].correct_answer(), Answer::False);
    }

    #[test]
    fn api_error_code_is_surfaced() {
        let err = decode_batch(r#"{"response_code": 5, "results": []}"#).unwrap_err();
        assert!(matches!(
            err,
            SourceError::Api {
                code: 5,
                reason: "rate limited"
            }
        ));
    }

    #[test]
    fn empty_batch_is_an_error() {
        let err = decode_batch(r#"{"response_code": 0, "results": []}"#).unwrap_err();
        assert!(matches!(err, SourceError::Empty));
    }

    #[test]
    fn non_canonical_answer_is_rejected() {
        let body = r#"{"response_code": 0, "results": [
            {"question": "Q", "correct_answer": "true"}
        ]}"#;
        match decode_batch(body).unwrap_err() {
            SourceError::InvalidAnswer { index, value } => {
                assert_eq!(index, 0);
                assert_eq!(value, "true");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn malformed_payload_is_an_error() {
        let err = decode_batch("<html>Service Unavailable</html>").unwrap_err();
        assert!(matches!(err, SourceError::Malformed(_)));

        let err = decode_batch(r#"{"results": []}"#).unwrap_err();
        assert!(matches!(err, SourceError::Malformed(_)));
    }

    #[test]
    fn config_reads_overrides() {
        let vars: HashMap<&str, &str> = [
            ("QUIZZLER_API_URL", "http://localhost:8080/api.php"),
            ("QUIZZLER_QUESTION_COUNT", "5"),
            ("QUIZZLER_TIMEOUT_SECS", "3"),
        ]
        .into_iter()
        .collect();

        let config = SourceConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(config.base_url, "http://localhost:8080/api.php");
        assert_eq!(config.amount, 5);
        assert_eq!(config.timeout, Duration::from_secs(3));
    }

    #[test]
    fn config_ignores_invalid_values() {
        let config = SourceConfig::from_lookup(|k| match k {
            "QUIZZLER_QUESTION_COUNT" => Some("0".into()),
            "QUIZZLER_TIMEOUT_SECS" => Some("soon".into()),
            _ => None,
        });
        assert_eq!(config, SourceConfig::default());
    }
}
