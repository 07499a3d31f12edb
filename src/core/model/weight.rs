use serde::{Deserialize, Serialize};

/// Identity and role of a single weight tensor within a checkpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeightInfo {
    pub name: String,
    /// Embedding or language model head, tied to vocabulary size.
    #[serde(default)]
    pub is_embed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_space: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_space: Option<String>,
    /// The tensor may be legitimately absent from a checkpoint.
    #[serde(default)]
    pub optional: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aliases: Option<Vec<String>>,
}

impl WeightInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn embed(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_embed: true,
            ..Self::default()
        }
    }
}
