//! Static FAQ knowledge: topic key -> pre-written answer, plus the keyword layer that
//! picks a topic. Independent of the dataset tables.

mod faq;

use std::collections::HashMap;
use std::path::Path;

pub use faq::{FaqLayer, FaqRule, Refinement, FAQ_RULES};

/// Answers keyed by topic (e.g. `hostel_fees`). Empty when the source is absent.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    answers: HashMap<String, String>,
}

impl KnowledgeBase {
    /// Reads a JSON object of string answers. A missing or unreadable file yields an
    /// empty knowledge base; non-string values are skipped.
    pub async fn load(path: &Path) -> Self {
        let raw = match tokio::fs::read_to_string(path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(
                    target: "campus::knowledge",
                    path = %path.display(),
                    "Knowledge file not found; running without FAQ answers"
                );
                return Self::default();
            }
            Err(e) => {
                tracing::warn!(target: "campus::knowledge", path = %path.display(), error = %e, "Failed to read knowledge file");
                return Self::default();
            }
        };
        match Self::from_json(&raw) {
            Ok(kb) => {
                tracing::info!(target: "campus::knowledge", entries = kb.len(), "Loaded knowledge base");
                kb
            }
            Err(e) => {
                tracing::warn!(target: "campus::knowledge", path = %path.display(), error = %e, "Failed to parse knowledge file");
                Self::default()
            }
        }
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let map: serde_json::Map<String, serde_json::Value> = serde_json::from_str(raw)?;
        let answers = map
            .into_iter()
            .filter_map(|(key, value)| match value {
                serde_json::Value::String(answer) => Some((key, answer)),
                _ => {
                    tracing::debug!(target: "campus::knowledge", key = %key, "Skipping non-string answer");
                    None
                }
            })
            .collect();
        Ok(Self { answers })
    }

    pub fn get(&self, topic: &str) -> Option<&str> {
        self.answers.get(topic).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for KnowledgeBase {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            answers: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}
