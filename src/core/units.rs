//! Conversion between render space (pixels, what bevy transforms hold) and
//! physics space (meters, what rapier solves in).

/// Render units per physics unit. Collider sizes and gravity are authored in
/// render units and rapier rescales internally via `pixels_per_meter`.
pub const SCALE_FACTOR: f32 = 32.0;

/// Render units -> physics units.
pub fn to_physics(render: f32) -> f32 {
    render / SCALE_FACTOR
}

/// Physics units -> render units.
pub fn to_render(physics: f32) -> f32 {
    physics * SCALE_FACTOR
}
