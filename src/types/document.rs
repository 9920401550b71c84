use serde::Serialize;

/// A candidate document. The text is lowercased once, on construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    name: String,
    #[serde(skip)]
    text: String,
}

impl Document {
    pub fn new(name: impl Into<String>, content: &str) -> Self {
        Self {
            name: name.into(),
            text: content.to_lowercase(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Normalized (lowercased) content.
    pub fn text(&self) -> &str {
        &self.text
    }
}
