use bevy::prelude::*;
use uuid::Uuid;

/// Marker component identifying a ball entity parent (holds physics body & collider).
#[derive(Component)]
pub struct Ball;

/// Stable identity carried by every ball; keys the [`crate::core::registry::BallRegistry`]
/// and resolves collision events back to live balls. Never reused after removal.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BallId(Uuid);

impl BallId {
    pub fn fresh() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for BallId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

/// Logical radius in render units; drives both the collider and the visual scale.
#[derive(Component, Debug, Deref, DerefMut, Copy, Clone)]
pub struct BallRadius(pub f32);

/// Tag component for the circle mesh child.
#[derive(Component)]
pub struct BallCircleVisual;

/// Ball lifecycle. Transitions only ever run forward:
/// Active (collidable, solver-driven) -> Dead (merging, kinematic, filtered out
/// of the active collision group) -> Removed (entity despawned, registry purged).
#[derive(Component, Debug, Copy, Clone, PartialEq, Eq)]
pub enum BallState {
    Active,
    Dead,
    Removed,
}

impl BallState {
    pub fn is_active(self) -> bool {
        matches!(self, BallState::Active)
    }

    /// Active -> Dead. Returns false (caller logs and skips) from any other state.
    pub fn begin_merge(&mut self) -> bool {
        if !matches!(self, BallState::Active) {
            return false;
        }
        *self = BallState::Dead;
        true
    }

    /// Active|Dead -> Removed. Returns false if already removed.
    pub fn release(&mut self) -> bool {
        if matches!(self, BallState::Removed) {
            return false;
        }
        *self = BallState::Removed;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifecycle_runs_forward_only() {
        let mut state = BallState::Active;
        assert!(state.begin_merge());
        assert_eq!(state, BallState::Dead);
        // Dead balls cannot re-enter a merge.
        assert!(!state.begin_merge());
        assert_eq!(state, BallState::Dead);
        assert!(state.release());
        assert_eq!(state, BallState::Removed);
        // Removed is terminal.
        assert!(!state.release());
        assert!(!state.begin_merge());
        assert_eq!(state, BallState::Removed);
    }

    #[test]
    fn release_directly_from_active() {
        let mut state = BallState::Active;
        assert!(state.release());
        assert_eq!(state, BallState::Removed);
    }

    #[test]
    fn ids_are_unique() {
        assert_ne!(BallId::fresh(), BallId::fresh());
    }
}
