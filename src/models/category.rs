use serde::{Deserialize, Serialize};

/// A product category. Stored in the `categories` collection and embedded by
/// value inside every product that references it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl Category {
    pub fn new(name: &str) -> Self {
        Self {
            id: None,
            name: Some(name.to_string()),
        }
    }

    pub fn validation_errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        match self.name.as_deref() {
            None => errors.push("name: must not be null".to_string()),
            Some(name) if name.trim().is_empty() => {
                errors.push("name: must not be empty".to_string());
            }
            Some(_) => {}
        }
        errors
    }
}
