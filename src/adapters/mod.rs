// Adapters layer: concrete implementations of the domain ports (AWS SDK, local filesystem).

pub mod aws;
pub mod template;
