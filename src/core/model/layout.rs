use super::traits::{WeightLayout, NUM_LAYERS_KEY};
use super::weight::WeightInfo;
use super::LayerId;

/// Table-driven tensor naming for architectures whose layout is fixed:
/// literal pre/post weight names plus a per-layer suffix list hung off an
/// indexed layer prefix.
#[derive(Debug, Clone)]
pub struct StaticLayout {
    pub name: &'static str,
    pub pre_weight_names: Vec<String>,
    pub post_weight_names: Vec<String>,
    pub embed_weight_names: Vec<String>,
    pub layer_prefix: String,
    pub layer_weight_suffixes: Vec<String>,
    pub num_layers_key: Option<&'static str>,
}

impl StaticLayout {
    pub(crate) fn weight(&self, name: String) -> WeightInfo {
        if self.embed_weight_names.iter().any(|e| *e == name) {
            WeightInfo::embed(name)
        } else {
            WeightInfo::new(name)
        }
    }
}

impl WeightLayout for StaticLayout {
    fn pre_weights(&self) -> Vec<WeightInfo> {
        self.pre_weight_names
            .iter()
            .map(|n| self.weight(n.clone()))
            .collect()
    }

    fn post_weights(&self) -> Vec<WeightInfo> {
        self.post_weight_names
            .iter()
            .map(|n| self.weight(n.clone()))
            .collect()
    }

    fn layer_weights(&self, index: LayerId) -> Option<Vec<WeightInfo>> {
        let prefix = format!("{}.{}", self.layer_prefix, index);
        Some(
            self.layer_weight_suffixes
                .iter()
                .map(|suffix| self.weight(format!("{prefix}.{suffix}")))
                .collect(),
        )
    }

    fn num_layers_key(&self) -> &str {
        self.num_layers_key.unwrap_or(NUM_LAYERS_KEY)
    }

    fn sliceable(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::super::catalog::LLAMA;
    use super::super::ModelConfig;
    use super::*;

    #[test]
    fn test_layer_names_carry_their_index() {
        let weights = LLAMA.layer_weights(7).unwrap();
        assert_eq!(weights.len(), 9);
        for w in &weights {
            assert!(w.name.starts_with("model.layers.7."), "{}", w.name);
            assert!(!w.is_embed);
        }
    }

    #[test]
    fn test_embed_membership_sets_flag() {
        let pre = LLAMA.pre_weights();
        assert_eq!(pre.len(), 1);
        assert!(pre[0].is_embed);

        let post = LLAMA.post_weights();
        assert_eq!(post.len(), 2);
        assert!(!post[0].is_embed); // model.norm.weight
        assert!(post[1].is_embed); // lm_head.weight
    }

    #[test]
    fn test_all_weights_order_and_count() {
        let config = ModelConfig::builder()
            .architecture("LlamaForCausalLM")
            .num_layers(3)
            .build();
        let all = LLAMA.all_weights(&config).unwrap();
        assert_eq!(all.len(), 1 + 3 * 9 + 2);
        assert_eq!(all[0].name, "model.embed_tokens.weight");
        assert!(all[1].name.starts_with("model.layers.0."));
        assert!(all[9 * 3].name.starts_with("model.layers.2."));
        assert_eq!(all[all.len() - 1].name, "lm_head.weight");
    }

    #[test]
    fn test_missing_layer_count_is_an_error() {
        let config = ModelConfig::builder()
            .architecture("LlamaForCausalLM")
            .build();
        assert!(LLAMA.all_weights(&config).is_err());
    }
}
