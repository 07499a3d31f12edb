use once_cell::sync::Lazy;

use super::catalog::{
    BAICHUAN, CHATGLM, FALCON, GPT2, GPT2_SEQCLASS, GPT_NEOX, JAIS, LLAMA, MISTRAL, PHI,
    PHI_MSFT, QWEN, STABLELM,
};
use super::config::ModelConfig;
use super::error::ModelError;
use super::layout::StaticLayout;
use super::mixformer::MixFormerLayout;
use super::moe::MoeLayout;
use super::traits::WeightLayout;
use super::weight::WeightInfo;
use super::LayerId;
use crate::core::Result;

/// Architectures resolvable by declared name alone, scanned in order.
static SUPPORTED: Lazy<Vec<&'static StaticLayout>> = Lazy::new(|| {
    vec![
        &*LLAMA,
        &*MISTRAL,
        &*GPT_NEOX,
        &*QWEN,
        &*GPT2,
        &*GPT2_SEQCLASS,
        &*CHATGLM,
        &*STABLELM,
        &*JAIS,
        &*BAICHUAN,
        &*FALCON,
    ]
});

/// A resolved architecture, one of the closed set of layout families.
#[derive(Debug, Clone)]
pub enum Architecture {
    Static(&'static StaticLayout),
    Moe(MoeLayout),
    MixFormer(MixFormerLayout),
}

impl Architecture {
    pub fn name(&self) -> &str {
        match self {
            Architecture::Static(layout) => layout.name,
            Architecture::Moe(_) => MoeLayout::ARCHITECTURE,
            Architecture::MixFormer(_) => MixFormerLayout::ARCHITECTURE,
        }
    }
}

impl WeightLayout for Architecture {
    fn pre_weights(&self) -> Vec<WeightInfo> {
        match self {
            Architecture::Static(layout) => layout.pre_weights(),
            Architecture::Moe(layout) => layout.pre_weights(),
            Architecture::MixFormer(layout) => layout.pre_weights(),
        }
    }

    fn post_weights(&self) -> Vec<WeightInfo> {
        match self {
            Architecture::Static(layout) => layout.post_weights(),
            Architecture::Moe(layout) => layout.post_weights(),
            Architecture::MixFormer(layout) => layout.post_weights(),
        }
    }

    fn layer_weights(&self, index: LayerId) -> Option<Vec<WeightInfo>> {
        match self {
            Architecture::Static(layout) => layout.layer_weights(index),
            Architecture::Moe(layout) => layout.layer_weights(index),
            Architecture::MixFormer(layout) => layout.layer_weights(index),
        }
    }

    fn num_layers_key(&self) -> &str {
        match self {
            Architecture::Static(layout) => layout.num_layers_key(),
            Architecture::Moe(layout) => layout.num_layers_key(),
            Architecture::MixFormer(layout) => layout.num_layers_key(),
        }
    }

    fn sliceable(&self) -> bool {
        match self {
            Architecture::Static(layout) => layout.sliceable(),
            Architecture::Moe(layout) => layout.sliceable(),
            Architecture::MixFormer(layout) => layout.sliceable(),
        }
    }
}

/// Resolve a model configuration to the architecture that names its tensors.
pub fn resolve(config: &ModelConfig) -> Result<Architecture> {
    let arch = lookup(config)?;
    tracing::debug!("Resolved architecture {}", arch.name());
    Ok(arch)
}

fn lookup(config: &ModelConfig) -> Result<Architecture> {
    if config.architectures.len() != 1 {
        return Err(ModelError::ArchitectureCount {
            count: config.architectures.len(),
        });
    }
    let arch_name = config.architectures[0].as_str();

    if arch_name == MixFormerLayout::ARCHITECTURE {
        return Ok(Architecture::MixFormer(MixFormerLayout::from_config(config)?));
    }
    if arch_name == MoeLayout::ARCHITECTURE {
        return Ok(Architecture::Moe(MoeLayout::from_config(config)?));
    }

    if arch_name == PHI_MSFT.name {
        // two unrelated checkpoint layouts ship under this name
        return match config.model_type.as_deref() {
            Some("phi-msft") => Ok(Architecture::Static(&*PHI_MSFT)),
            Some("phi") => Ok(Architecture::Static(&*PHI)),
            other => Err(ModelError::UnknownModelType {
                name: arch_name.to_string(),
                model_type: other.map(str::to_string),
            }),
        };
    }

    SUPPORTED
        .iter()
        .copied()
        .find(|layout| layout.name == arch_name)
        .map(Architecture::Static)
        .ok_or_else(|| ModelError::UnsupportedArchitecture {
            name: arch_name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_every_named_architecture() {
        for name in [
            "LlamaForCausalLM",
            "MistralForCausalLM",
            "GPTNeoXForCausalLM",
            "QWenLMHeadModel",
            "GPT2LMHeadModel",
            "GPT2ForSequenceClassification",
            "ChatGLMModel",
            "StableLMEpochForCausalLM",
            "JAISLMHeadModel",
            "BaichuanForCausalLM",
            "FalconForCausalLM",
        ] {
            let config = ModelConfig::builder().architecture(name).build();
            let arch = resolve(&config).unwrap();
            assert_eq!(arch.name(), name);
            assert!(arch.sliceable());
        }
    }

    #[test]
    fn test_static_inventory_size_is_pre_plus_layers_plus_post() {
        for layout in SUPPORTED.iter() {
            let config = ModelConfig::builder()
                .architecture(layout.name)
                .field(layout.num_layers_key(), 4u64)
                .build();
            let all = layout.all_weights(&config).unwrap();
            let expected = layout.pre_weight_names.len()
                + 4 * layout.layer_weight_suffixes.len()
                + layout.post_weight_names.len();
            assert_eq!(all.len(), expected, "{}", layout.name);
        }
    }

    #[test]
    fn test_layer_names_carry_only_their_own_index() {
        for layout in SUPPORTED.iter() {
            let prefix = format!("{}.3.", layout.layer_prefix);
            for w in layout.layer_weights(3).unwrap() {
                assert!(w.name.starts_with(&prefix), "{}: {}", layout.name, w.name);
            }
        }
    }

    #[test]
    fn test_unknown_architecture_fails_closed() {
        let config = ModelConfig::builder()
            .architecture("BloomForCausalLM")
            .build();
        assert_eq!(
            resolve(&config).unwrap_err(),
            ModelError::UnsupportedArchitecture {
                name: "BloomForCausalLM".to_string()
            }
        );
    }

    #[test]
    fn test_exactly_one_architecture_required() {
        let two = ModelConfig::builder()
            .architecture("LlamaForCausalLM")
            .architecture("MistralForCausalLM")
            .build();
        assert_eq!(
            resolve(&two).unwrap_err(),
            ModelError::ArchitectureCount { count: 2 }
        );

        let none = ModelConfig::builder().build();
        assert_eq!(
            resolve(&none).unwrap_err(),
            ModelError::ArchitectureCount { count: 0 }
        );
    }

    #[test]
    fn test_phi_discriminated_by_model_type() {
        let msft = ModelConfig::builder()
            .architecture("PhiForCausalLM")
            .model_type("phi-msft")
            .build();
        let a = resolve(&msft).unwrap();
        assert!(a
            .layer_weights(0)
            .unwrap()
            .iter()
            .any(|w| w.name.contains("mixer.")));

        let native = ModelConfig::builder()
            .architecture("PhiForCausalLM")
            .model_type("phi")
            .build();
        let b = resolve(&native).unwrap();
        assert!(b
            .layer_weights(0)
            .unwrap()
            .iter()
            .any(|w| w.name.contains("self_attn.q_proj")));

        assert_ne!(a.pre_weights(), b.pre_weights());
        assert_ne!(a.post_weights(), b.post_weights());
    }

    #[test]
    fn test_phi_with_unknown_model_type_fails() {
        let config = ModelConfig::builder()
            .architecture("PhiForCausalLM")
            .model_type("phi3")
            .build();
        assert_eq!(
            resolve(&config).unwrap_err(),
            ModelError::UnknownModelType {
                name: "PhiForCausalLM".to_string(),
                model_type: Some("phi3".to_string()),
            }
        );

        let untagged = ModelConfig::builder().architecture("PhiForCausalLM").build();
        assert_eq!(
            resolve(&untagged).unwrap_err(),
            ModelError::UnknownModelType {
                name: "PhiForCausalLM".to_string(),
                model_type: None,
            }
        );
    }

    #[test]
    fn test_mixtral_builds_from_expert_count() {
        let config = ModelConfig::builder()
            .architecture("MixtralForCausalLM")
            .field("num_local_experts", 8u64)
            .num_layers(32)
            .build();
        let arch = resolve(&config).unwrap();
        assert_eq!(arch.layer_weights(0).unwrap().len(), 25);
        assert_eq!(arch.num_layers_key(), "num_hidden_layers");
    }

    #[test]
    fn test_mixformer_builds_from_layer_count() {
        let config = ModelConfig::builder()
            .architecture("MixFormerSequentialForCausalLM")
            .field("n_layer", 24u64)
            .build();
        let arch = resolve(&config).unwrap();
        assert_eq!(arch.num_layers_key(), "n_layer");
        assert_eq!(
            arch.post_weights()[1].name,
            "layers.24.linear.weight"
        );

        let missing = ModelConfig::builder()
            .architecture("MixFormerSequentialForCausalLM")
            .build();
        assert!(resolve(&missing).is_err());
    }
}
