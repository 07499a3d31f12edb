use std::collections::HashMap;

use serde::Deserialize;

use super::traits::NUM_LAYERS_KEY;

/// Declared configuration of a checkpoint, as found in its `config.json`.
///
/// The catalog only interprets the architecture list, the `model_type`
/// discriminator, and the handful of integer fields a layout asks for;
/// everything else rides along untouched in `fields`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModelConfig {
    #[serde(default)]
    pub architectures: Vec<String>,
    #[serde(default)]
    pub model_type: Option<String>,
    #[serde(flatten)]
    pub fields: HashMap<String, ConfigValue>,
}

impl ModelConfig {
    pub fn builder() -> ModelConfigBuilder {
        ModelConfigBuilder::new()
    }

    /// Parse a Hugging Face style `config.json` document.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn get<T: FromConfigValue>(&self, key: &str) -> Option<T> {
        self.fields.get(key).and_then(|v| T::from_config_value(v.clone()))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Bool(bool),
    Uint(u64),
    Int(i64),
    Float(f64),
    String(String),
    Array(Vec<ConfigValue>),
    Object(HashMap<String, ConfigValue>),
    Null,
}

pub trait FromConfigValue: Sized {
    fn from_config_value(value: ConfigValue) -> Option<Self>;
}

impl FromConfigValue for i64 {
    fn from_config_value(value: ConfigValue) -> Option<Self> {
        match value {
            ConfigValue::Int(v) => Some(v),
            ConfigValue::Uint(v) => Some(v as i64),
            _ => None,
        }
    }
}

impl FromConfigValue for u64 {
    fn from_config_value(value: ConfigValue) -> Option<Self> {
        match value {
            ConfigValue::Uint(v) => Some(v),
            ConfigValue::Int(v) => Some(v as u64),
            _ => None,
        }
    }
}

impl FromConfigValue for f64 {
    fn from_config_value(value: ConfigValue) -> Option<Self> {
        match value {
            ConfigValue::Float(v) => Some(v),
            ConfigValue::Int(v) => Some(v as f64),
            ConfigValue::Uint(v) => Some(v as f64),
            _ => None,
        }
    }
}

impl FromConfigValue for String {
    fn from_config_value(value: ConfigValue) -> Option<Self> {
        match value {
            ConfigValue::String(v) => Some(v),
            _ => None,
        }
    }
}

impl FromConfigValue for bool {
    fn from_config_value(value: ConfigValue) -> Option<Self> {
        match value {
            ConfigValue::Bool(v) => Some(v),
            ConfigValue::Int(v) => Some(v != 0),
            ConfigValue::Uint(v) => Some(v != 0),
            _ => None,
        }
    }
}

pub struct ModelConfigBuilder {
    config: ModelConfig,
}

impl ModelConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: ModelConfig::default(),
        }
    }

    pub fn architecture(mut self, arch: impl Into<String>) -> Self {
        self.config.architectures.push(arch.into());
        self
    }

    pub fn model_type(mut self, tag: impl Into<String>) -> Self {
        self.config.model_type = Some(tag.into());
        self
    }

    pub fn num_layers(mut self, n: u64) -> Self {
        self.config
            .fields
            .insert(NUM_LAYERS_KEY.to_string(), ConfigValue::Uint(n));
        self
    }

    pub fn field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: IntoConfigValue,
    {
        self.config.fields.insert(key.into(), value.into_config_value());
        self
    }

    pub fn build(self) -> ModelConfig {
        self.config
    }
}

impl Default for ModelConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub trait IntoConfigValue {
    fn into_config_value(self) -> ConfigValue;
}

impl IntoConfigValue for i64 {
    fn into_config_value(self) -> ConfigValue {
        ConfigValue::Int(self)
    }
}

impl IntoConfigValue for u64 {
    fn into_config_value(self) -> ConfigValue {
        ConfigValue::Uint(self)
    }
}

impl IntoConfigValue for f64 {
    fn into_config_value(self) -> ConfigValue {
        ConfigValue::Float(self)
    }
}

impl IntoConfigValue for String {
    fn into_config_value(self) -> ConfigValue {
        ConfigValue::String(self)
    }
}

impl IntoConfigValue for &str {
    fn into_config_value(self) -> ConfigValue {
        ConfigValue::String(self.to_string())
    }
}

impl IntoConfigValue for bool {
    fn into_config_value(self) -> ConfigValue {
        ConfigValue::Bool(self)
    }
}

impl IntoConfigValue for ConfigValue {
    fn into_config_value(self) -> ConfigValue {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = ModelConfig::builder()
            .architecture("LlamaForCausalLM")
            .num_layers(32)
            .model_type("llama")
            .field("num_local_experts", 8u64)
            .build();

        assert_eq!(config.architectures, ["LlamaForCausalLM"]);
        assert_eq!(config.model_type.as_deref(), Some("llama"));
        assert_eq!(config.get::<u64>("num_hidden_layers"), Some(32));
        assert_eq!(config.get::<u64>("num_local_experts"), Some(8));
        assert_eq!(config.get::<u64>("missing"), None);
    }

    #[test]
    fn test_config_from_json() {
        let config = ModelConfig::from_json(
            r#"{
                "architectures": ["MixtralForCausalLM"],
                "model_type": "mixtral",
                "num_hidden_layers": 32,
                "num_local_experts": 8,
                "rms_norm_eps": 1e-05,
                "rope_scaling": {"type": "linear", "factor": 2.0},
                "tie_word_embeddings": false,
                "pad_token_id": null
            }"#,
        )
        .unwrap();

        assert_eq!(config.architectures, ["MixtralForCausalLM"]);
        assert_eq!(config.model_type.as_deref(), Some("mixtral"));
        assert_eq!(config.get::<u64>("num_hidden_layers"), Some(32));
        assert_eq!(config.get::<u64>("num_local_experts"), Some(8));
        assert_eq!(config.get::<f64>("rms_norm_eps"), Some(1e-5));
        assert_eq!(config.get::<bool>("tie_word_embeddings"), Some(false));
        // typed accessors refuse mismatched values rather than coercing
        assert_eq!(config.get::<u64>("rope_scaling"), None);
    }
}
