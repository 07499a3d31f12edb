pub mod model;

pub use model::{
    resolve, Architecture, ConfigValue, MixFormerLayout, ModelConfig, ModelConfigBuilder,
    ModelError, MoeLayout, StaticLayout, WeightInfo, WeightLayout,
};

pub type Result<T> = std::result::Result<T, ModelError>;
