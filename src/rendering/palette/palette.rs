use bevy::prelude::*;

use crate::gameplay::levels::BallLevel;

/// Fill colors per ball level, low to high. Obstacles share one muted tone.
pub const LEVEL_COLORS: [Color; 5] = [
    Color::srgb(0.36, 0.72, 0.33), // level 1
    Color::srgb(0.26, 0.62, 0.77), // level 2
    Color::srgb(0.85, 0.68, 0.22), // level 3
    Color::srgb(0.82, 0.40, 0.26), // level 4
    Color::srgb(0.62, 0.35, 0.80), // level 5
];

pub const OBSTACLE_COLOR: Color = Color::srgb(0.70, 0.22, 0.20);

pub fn color_for_level(level: BallLevel) -> Color {
    LEVEL_COLORS[(level.get() - 1) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_level_has_a_color() {
        let mut level = BallLevel::MIN;
        loop {
            let _ = color_for_level(level);
            match level.next() {
                Some(next) => level = next,
                None => break,
            }
        }
        assert_eq!(LEVEL_COLORS.len(), BallLevel::MAX.get() as usize);
    }
}
