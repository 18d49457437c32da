use super::Opponent;

// Gains are expressed per 60 Hz reference tick, so a variable-rate driver
// produces the same average pursuit speed as a fixed 60 Hz loop.
const REFERENCE_TICK_HZ: f32 = 60.0;

/// Proportional tracker: closes a fixed fraction of the horizontal gap to
/// the ball every reference tick. Never overshoots.
pub struct ChaseBot {
    gain: f32,
}

impl ChaseBot {
    pub fn new(gain: f32) -> Self {
        Self {
            gain: gain.clamp(0.0, 1.0),
        }
    }
}

impl Opponent for ChaseBot {
    fn shift(&mut self, ball_x: f32, paddle_center_x: f32, dt: f32) -> f32 {
        let offset = ball_x - paddle_center_x;
        let factor = (self.gain * dt * REFERENCE_TICK_HZ).min(1.0);
        offset * factor
    }

    fn reset(&mut self) {}

    fn name(&self) -> &str {
        "Chase"
    }
}
