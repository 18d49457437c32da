use super::Opponent;

/// Fixed-rate tracker gated by a dead-zone: the paddle holds still while its
/// center is within the tolerance band around the ball, otherwise marches
/// toward it at constant speed without overshooting.
pub struct StepBot {
    speed: f32,
    dead_zone: f32,
}

impl StepBot {
    pub fn new(speed: f32, dead_zone: f32) -> Self {
        Self {
            speed: speed.max(0.0),
            dead_zone: dead_zone.max(0.0),
        }
    }
}

impl Opponent for StepBot {
    fn shift(&mut self, ball_x: f32, paddle_center_x: f32, dt: f32) -> f32 {
        let offset = ball_x - paddle_center_x;
        if offset.abs() <= self.dead_zone {
            return 0.0;
        }
        offset.signum() * (self.speed * dt).min(offset.abs())
    }

    fn reset(&mut self) {}

    fn name(&self) -> &str {
        "Step"
    }
}
