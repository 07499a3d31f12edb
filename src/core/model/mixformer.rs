use super::config::ModelConfig;
use super::error::ModelError;
use super::traits::WeightLayout;
use super::weight::WeightInfo;
use super::LayerId;
use crate::core::Result;

const LAYER_COUNT_KEY: &str = "n_layer";

const LAYER_SUFFIXES: &[&str] = &[
    "ln.bias",
    "ln.weight",
    "mixer.Wqkv.bias",
    "mixer.Wqkv.weight",
    "mixer.out_proj.bias",
    "mixer.out_proj.weight",
    "mixer.rotary_emb.inv_freq",
    "mlp.fc1.bias",
    "mlp.fc1.weight",
    "mlp.fc2.bias",
    "mlp.fc2.weight",
];

/// Phi's sequential MixFormer naming. The embedding sits in layer slot 0 and
/// the head occupies the slot just past the last transformer layer, so the
/// layout is built per config from `n_layer`.
#[derive(Debug, Clone)]
pub struct MixFormerLayout {
    n_layer: usize,
}

impl MixFormerLayout {
    pub const ARCHITECTURE: &'static str = "MixFormerSequentialForCausalLM";

    pub fn new(n_layer: usize) -> Self {
        Self { n_layer }
    }

    pub fn from_config(config: &ModelConfig) -> Result<Self> {
        let n_layer = config
            .get::<u64>(LAYER_COUNT_KEY)
            .ok_or_else(|| ModelError::MissingConfigKey {
                key: LAYER_COUNT_KEY.to_string(),
            })?;
        Ok(Self::new(n_layer as usize))
    }
}

impl WeightLayout for MixFormerLayout {
    fn pre_weights(&self) -> Vec<WeightInfo> {
        vec![WeightInfo::embed("layers.0.wte.weight")]
    }

    fn post_weights(&self) -> Vec<WeightInfo> {
        let head_slot = self.n_layer;
        ["linear.bias", "linear.weight", "ln.bias", "ln.weight"]
            .iter()
            .map(|suffix| WeightInfo {
                name: format!("layers.{head_slot}.{suffix}"),
                is_embed: suffix.starts_with("linear."),
                ..WeightInfo::default()
            })
            .collect()
    }

    fn layer_weights(&self, index: LayerId) -> Option<Vec<WeightInfo>> {
        Some(
            LAYER_SUFFIXES
                .iter()
                .map(|suffix| WeightInfo::new(format!("layers.{index}.{suffix}")))
                .collect(),
        )
    }

    fn num_layers_key(&self) -> &str {
        LAYER_COUNT_KEY
    }

    fn sliceable(&self) -> bool {
        true
    }
}
