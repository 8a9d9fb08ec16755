pub mod load;
pub mod types;

pub use types::{Config, DEFAULT_SIMILARITY_THRESHOLD, VideoExtensionTable};
