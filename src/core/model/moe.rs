use super::catalog::MISTRAL;
use super::config::ModelConfig;
use super::error::ModelError;
use super::traits::WeightLayout;
use super::weight::WeightInfo;
use super::LayerId;
use crate::core::Result;

const EXPERT_COUNT_KEY: &str = "num_local_experts";

/// Sparse mixture-of-experts naming (Mixtral). The per-layer tensor set
/// depends on the configured expert count, so one instance is built per
/// resolved config; everything outside the layers follows the Mistral table.
#[derive(Debug, Clone)]
pub struct MoeLayout {
    num_local_experts: usize,
}

impl MoeLayout {
    pub const ARCHITECTURE: &'static str = "MixtralForCausalLM";

    pub fn new(num_local_experts: usize) -> Self {
        Self { num_local_experts }
    }

    pub fn from_config(config: &ModelConfig) -> Result<Self> {
        let experts = config
            .get::<u64>(EXPERT_COUNT_KEY)
            .ok_or_else(|| ModelError::MissingConfigKey {
                key: EXPERT_COUNT_KEY.to_string(),
            })?;
        Ok(Self::new(experts as usize))
    }

    pub fn num_local_experts(&self) -> usize {
        self.num_local_experts
    }
}

impl WeightLayout for MoeLayout {
    fn pre_weights(&self) -> Vec<WeightInfo> {
        MISTRAL.pre_weights()
    }

    fn post_weights(&self) -> Vec<WeightInfo> {
        MISTRAL.post_weights()
    }

    fn layer_weights(&self, index: LayerId) -> Option<Vec<WeightInfo>> {
        let prefix = format!("{}.{}", MISTRAL.layer_prefix, index);
        let mut res = Vec::with_capacity(3 * self.num_local_experts + 1);
        for expert in 0..self.num_local_experts {
            for param in ["w1", "w2", "w3"] {
                res.push(MISTRAL.weight(format!(
                    "{prefix}.block_sparse_moe.experts.{expert}.{param}.weight"
                )));
            }
        }
        res.push(MISTRAL.weight(format!("{prefix}.block_sparse_moe.gate.weight")));
        Some(res)
    }

    fn num_layers_key(&self) -> &str {
        MISTRAL.num_layers_key()
    }

    fn sliceable(&self) -> bool {
        true
    }
}
