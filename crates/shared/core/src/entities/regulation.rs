use serde::{Deserialize, Deserializer, Serialize};

use crate::values::DocketId;

/// A regulatory docket as served by the regulations API.
///
/// Field names match the wire shape (`docket_id`, `title`, `summary`,
/// `keywords`). Keyword order is display order and is preserved as received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Regulation {
    pub docket_id: DocketId,
    pub title: String,
    pub summary: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub keywords: Vec<String>,
}

impl Regulation {
    pub fn new(docket_id: i64, title: impl Into<String>, summary: impl Into<String>) -> Self {
        Regulation {
            docket_id: DocketId::new(docket_id),
            title: title.into(),
            summary: summary.into(),
            keywords: Vec::new(),
        }
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Keywords joined for single-line display
    pub fn keyword_line(&self) -> String {
        self.keywords.join(", ")
    }
}

// Dockets stored without keywords come back as `null`
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
