pub mod app;
pub mod core;
pub mod debug;
pub mod gameplay;
pub mod interaction;
pub mod physics;
pub mod rendering;

// Curated re-exports
pub use crate::app::game::GamePlugin;
pub use crate::core::components::{Ball, BallCircleVisual, BallId, BallRadius, BallState};
pub use crate::core::config::GameConfig;
pub use crate::core::registry::BallRegistry;
pub use crate::gameplay::levels::BallLevel;
