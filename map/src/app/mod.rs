//! Application layer
//!
//! Contains the dataset-selection use case and map configuration.

pub mod map_config;
pub mod renderer_service;

pub use map_config::{MapProfile, PopupPolicy};
pub use renderer_service::{RenderOutcome, StoreFeedRenderer};
