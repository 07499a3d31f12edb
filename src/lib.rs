pub mod core;

pub mod model {
    pub use crate::core::model::*;
}

pub use crate::core::{
    resolve, Architecture, ConfigValue, MixFormerLayout, ModelConfig, ModelConfigBuilder,
    ModelError, MoeLayout, Result, StaticLayout, WeightInfo, WeightLayout,
};
