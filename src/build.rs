mod builder;
mod markdown;
mod paths;
pub mod pipeline;
mod render;

pub use builder::Builder;
pub use paths::{base_path_from_config, source_path_to_url};
