use serde::{Deserialize, Serialize};

/// Readwise highlight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    /// Highlighted text
    pub text: String,

    /// Highlight ID
    pub id: i64,

    /// Tags attached to the highlight
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl Highlight {
    /// Whether a tag with exactly this name is attached
    pub fn has_tag(&self, name: &str) -> bool {
        self.tags.iter().any(|tag| tag.name == name)
    }
}

/// Highlight tag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
}

/// One page of the highlight list
#[derive(Debug, Clone, Deserialize)]
pub struct Page {
    /// Highlights on this page
    #[serde(default)]
    pub results: Vec<Highlight>,

    /// Absolute URL of the next page, null or empty on the last page
    #[serde(default)]
    pub next: Option<String>,
}

impl Page {
    /// Next page URL, if any
    pub fn next_url(&self) -> Option<&str> {
        self.next.as_deref().filter(|next| !next.is_empty())
    }
}
