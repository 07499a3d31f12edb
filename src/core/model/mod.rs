pub mod catalog;
pub mod config;
pub mod error;
pub mod layout;
pub mod mixformer;
pub mod moe;
pub mod registry;
pub mod traits;
pub mod weight;

pub use config::{ConfigValue, ModelConfig, ModelConfigBuilder};
pub use error::ModelError;
pub use layout::StaticLayout;
pub use mixformer::MixFormerLayout;
pub use moe::MoeLayout;
pub use registry::{resolve, Architecture};
pub use traits::{WeightLayout, NUM_LAYERS_KEY};
pub use weight::WeightInfo;

pub type LayerId = usize;
