// Opponent trait for the scripted CPU paddle

/// A tracking policy for the CPU paddle.
///
/// The simulation consults the opponent once per physics step; the returned
/// shift is a horizontal displacement in court units which the simulation
/// clamps to court bounds before applying.
pub trait Opponent {
    /// Horizontal displacement to apply this step, given the ball's x, the
    /// paddle's current center x, and the step delta in seconds.
    fn shift(&mut self, ball_x: f32, paddle_center_x: f32, dt: f32) -> f32;

    /// Clear internal state; called when a point ends and on match reset.
    fn reset(&mut self);

    /// Tracker name for logging/display
    fn name(&self) -> &str;
}
