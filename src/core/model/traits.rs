use super::config::ModelConfig;
use super::error::ModelError;
use super::weight::WeightInfo;
use super::LayerId;
use crate::core::Result;

/// Conventional config key holding the transformer layer count.
pub const NUM_LAYERS_KEY: &str = "num_hidden_layers";

/// Tensor naming scheme of one model architecture.
pub trait WeightLayout: Send + Sync {
    /// Weights that exist once, before the first layer.
    fn pre_weights(&self) -> Vec<WeightInfo>;

    /// Weights that exist once, after the last layer.
    fn post_weights(&self) -> Vec<WeightInfo>;

    /// Weights belonging to the layer at `index`, or `None` if the
    /// architecture has no such layer.
    fn layer_weights(&self, index: LayerId) -> Option<Vec<WeightInfo>>;

    /// True if layers can be independently sliced or reordered.
    fn sliceable(&self) -> bool;

    fn num_layers_key(&self) -> &str {
        NUM_LAYERS_KEY
    }

    fn num_layers(&self, config: &ModelConfig) -> Result<usize> {
        let key = self.num_layers_key();
        config
            .get::<u64>(key)
            .map(|n| n as usize)
            .ok_or_else(|| ModelError::MissingConfigKey {
                key: key.to_string(),
            })
    }

    /// Every weight of a model with this layout, in traversal order:
    /// pre-weights, then each layer in turn, then post-weights.
    fn all_weights(&self, config: &ModelConfig) -> Result<Vec<WeightInfo>> {
        let num_layers = self.num_layers(config)?;
        let mut res = self.pre_weights();
        for index in 0..num_layers {
            res.extend(self.layer_weights(index).unwrap_or_default());
        }
        res.extend(self.post_weights());
        Ok(res)
    }
}
