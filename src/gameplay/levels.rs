use bevy::prelude::*;
use rand::Rng;

/// Discrete ball rank, 1 through [`BallLevel::MAX`]. The level fixes the
/// render radius; two balls of equal level below the maximum fuse into one
/// ball of the next level.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BallLevel(u8);

const LEVEL_RADII: [f32; 5] = [12.0, 18.0, 24.0, 30.0, 36.0];

impl BallLevel {
    pub const MIN: BallLevel = BallLevel(1);
    pub const MAX: BallLevel = BallLevel(LEVEL_RADII.len() as u8);

    pub fn new(raw: u8) -> Option<Self> {
        (Self::MIN.0..=Self::MAX.0).contains(&raw).then_some(Self(raw))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Render-space radius for this level.
    pub fn radius(self) -> f32 {
        LEVEL_RADII[(self.0 - 1) as usize]
    }

    /// The level a merged pair produces; None at the cap.
    pub fn next(self) -> Option<Self> {
        Self::new(self.0 + 1)
    }

    /// Uniform choice over the whole level set (drip spawner policy).
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.gen_range(Self::MIN.0..=Self::MAX.0))
    }

    /// Equal levels below the cap qualify for fusion.
    pub fn can_merge(self, other: Self) -> bool {
        self == other && self < Self::MAX
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn can_merge_truth_table() {
        for a in 1..=5u8 {
            for b in 1..=5u8 {
                let la = BallLevel::new(a).unwrap();
                let lb = BallLevel::new(b).unwrap();
                let expected = a == b && a < 5;
                assert_eq!(la.can_merge(lb), expected, "levels {a} vs {b}");
            }
        }
    }

    #[test]
    fn next_is_monotonic_and_capped() {
        let mut level = BallLevel::MIN;
        let mut radius = level.radius();
        while let Some(next) = level.next() {
            assert_eq!(next.get(), level.get() + 1);
            assert!(next.radius() > radius);
            radius = next.radius();
            level = next;
        }
        assert_eq!(level, BallLevel::MAX);
        assert!(level.next().is_none());
    }

    #[test]
    fn out_of_range_levels_rejected() {
        assert!(BallLevel::new(0).is_none());
        assert!(BallLevel::new(6).is_none());
        assert_eq!(BallLevel::new(3).unwrap().radius(), 24.0);
    }

    #[test]
    fn random_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let level = BallLevel::random(&mut rng);
            assert!((1..=5).contains(&level.get()));
        }
    }
}
