use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: i64,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub date: String,
    pub category: String,
    pub tags: Vec<String>,
    pub read_time: String,
    pub featured: bool,
}

impl BlogPost {
    /// Case-insensitive match against title and excerpt, the same fields the
    /// blog page searches over.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.title.to_lowercase().contains(&term) || self.excerpt.to_lowercase().contains(&term)
    }
}
