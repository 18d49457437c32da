use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Uniform};

use crate::ai::{self, Opponent, OpponentKind};
use crate::config::{AiConfig, CourtConfig};

// Court coordinates: origin top-left, +y downward. The CPU paddle guards the
// top goal line, the player paddle guards the bottom one. Both paddles move
// horizontally only.

/// Gap between a paddle and its court edge, in court units
pub const EDGE_INSET: f32 = 10.0;

/// Half-width of the serve launch cone, radians off vertical
pub const LAUNCH_CONE: f32 = 0.3;

const MIN_PADDLE_WIDTH: f32 = 48.0;
const MIN_BALL_RADIUS: f32 = 7.0;
const MIN_BALL_SPEED: f32 = 220.0;
const BALL_RADIUS_PCT: f32 = 0.018;
const BALL_SPEED_PCT: f32 = 0.6;

/// Phase of the current match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    /// Ball parked at center, waiting for the opening serve
    NotStarted,
    /// Ball in flight
    Running,
    /// Frozen mid-point, resumable
    Paused,
    /// A goal was just scored; waiting for the next serve
    PointScored,
    /// A side reached the win threshold
    Over,
}

/// The two competitors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Player,
    Cpu,
}

#[derive(Debug, Clone, Copy)]
pub struct Court {
    pub w: f32,
    pub h: f32,
}

#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    /// Left edge
    pub x: f32,
    /// Top edge (fixed per side)
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Paddle {
    pub fn center_x(&self) -> f32 {
        self.x + self.w / 2.0
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Ball {
    /// Center position
    pub x: f32,
    pub y: f32,
    pub r: f32,
    pub vx: f32,
    pub vy: f32,
    /// Launch speed; reflections never rescale velocity, so the in-flight
    /// magnitude stays at this value for the whole point
    pub speed: f32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub player: u32,
    pub cpu: u32,
}

/// One Pong match: all state lives here, nothing is global.
///
/// The struct is driven from outside: an external loop calls [`advance`]
/// with measured frame deltas and feeds player input through
/// [`set_player_target`]. Malformed calls (bad dimensions, out-of-phase
/// serves, negative deltas) are clamped or ignored, never panicked on.
///
/// [`advance`]: Simulation::advance
/// [`set_player_target`]: Simulation::set_player_target
pub struct Simulation {
    pub(crate) court: Court,
    pub(crate) player: Paddle,
    pub(crate) cpu: Paddle,
    pub(crate) ball: Ball,
    pub(crate) scores: Scoreboard,
    pub(crate) state: MatchState,
    pub(crate) win_score: u32,
    pub(crate) max_step: f32,
    paddle_width_pct: f32,
    paddle_height: f32,
    pub(crate) tracker: Box<dyn Opponent>,
    launch_angle: Uniform<f32>,
    rng: StdRng,
}

impl Simulation {
    pub fn new(court: &CourtConfig, ai: &AiConfig) -> Self {
        Self::with_rng(StdRng::from_entropy(), court, ai)
    }

    /// Deterministic variant for tests: the serve angle draw is the only
    /// randomness in the simulation.
    pub fn with_rng_seed(seed: u64, court: &CourtConfig, ai: &AiConfig) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), court, ai)
    }

    fn with_rng(rng: StdRng, court: &CourtConfig, ai_cfg: &AiConfig) -> Self {
        let kind = OpponentKind::from_name(&ai_cfg.style);
        let mut sim = Self {
            court: Court { w: 0.0, h: 0.0 },
            player: Paddle {
                x: 0.0,
                y: 0.0,
                w: 0.0,
                h: 0.0,
            },
            cpu: Paddle {
                x: 0.0,
                y: 0.0,
                w: 0.0,
                h: 0.0,
            },
            ball: Ball {
                x: 0.0,
                y: 0.0,
                r: 0.0,
                vx: 0.0,
                vy: 0.0,
                speed: 0.0,
            },
            scores: Scoreboard::default(),
            state: MatchState::NotStarted,
            win_score: court.win_score,
            max_step: court.max_step_ms as f32 / 1000.0,
            paddle_width_pct: court.paddle_width_pct,
            paddle_height: court.paddle_height,
            tracker: ai::create_opponent(kind, ai_cfg),
            launch_angle: Uniform::new(-LAUNCH_CONE, LAUNCH_CONE),
            rng,
        };
        sim.configure(
            court.width,
            court.height,
            court.paddle_width_pct,
            court.paddle_height,
            court.win_score,
        );
        sim.park_ball();
        sim
    }

    /// Recompute court-proportional dimensions and re-center both paddles at
    /// their goal lines. Scores and match state are untouched; the ball is
    /// clamped into the new bounds. Callable on every court resize.
    /// Non-positive dimensions are ignored; the paddle fraction is clamped
    /// into (0, 1]; `win_score` 0 plays an unbounded match.
    pub fn configure(
        &mut self,
        w: f32,
        h: f32,
        paddle_width_pct: f32,
        paddle_height: f32,
        win_score: u32,
    ) {
        if w <= 0.0 || h <= 0.0 {
            tracing::debug!(w, h, "configure ignored: non-positive court dimensions");
            return;
        }
        self.court = Court { w, h };
        self.paddle_width_pct = paddle_width_pct.clamp(0.01, 1.0);
        self.paddle_height = paddle_height.max(1.0);
        self.win_score = win_score;

        let pw = (w * self.paddle_width_pct).floor().max(MIN_PADDLE_WIDTH);
        let ph = self.paddle_height;
        self.player = Paddle {
            x: (w - pw) / 2.0,
            y: (h - ph - EDGE_INSET).max(0.0),
            w: pw,
            h: ph,
        };
        self.cpu = Paddle {
            x: (w - pw) / 2.0,
            y: EDGE_INSET,
            w: pw,
            h: ph,
        };

        self.ball.r = (w * BALL_RADIUS_PCT).floor().max(MIN_BALL_RADIUS);
        self.ball.speed = (w * BALL_SPEED_PCT).max(MIN_BALL_SPEED);
        self.ball.x = self
            .ball
            .x
            .clamp(self.ball.r, (w - self.ball.r).max(self.ball.r));
        self.ball.y = self
            .ball
            .y
            .clamp(self.ball.r, (h - self.ball.r).max(self.ball.r));
    }

    /// Zero the scoreboard and return to the pre-serve state.
    pub fn reset(&mut self) {
        self.scores = Scoreboard::default();
        self.state = MatchState::NotStarted;
        self.park_ball();
        self.player.x = (self.court.w - self.player.w) / 2.0;
        self.cpu.x = (self.court.w - self.cpu.w) / 2.0;
        self.tracker.reset();
        tracing::debug!("match reset");
    }

    /// Launch the ball from center court with a fresh angle drawn uniformly
    /// from the ±0.3 rad cone about vertical. `toward` picks the goal line
    /// the serve heads for. Valid only before the opening serve or between
    /// points; otherwise a no-op.
    pub fn serve(&mut self, toward: Side) {
        if !matches!(self.state, MatchState::NotStarted | MatchState::PointScored) {
            return;
        }
        let angle = self.launch_angle.sample(&mut self.rng);
        let dir = match toward {
            Side::Player => 1.0,
            Side::Cpu => -1.0,
        };
        self.ball.x = self.court.w / 2.0;
        self.ball.y = self.court.h / 2.0;
        self.ball.vx = angle.sin() * self.ball.speed;
        self.ball.vy = dir * angle.cos() * self.ball.speed;
        self.state = MatchState::Running;
        tracing::debug!(angle, ?toward, "serve");
    }

    /// Move the player paddle's left edge, clamped to the court. Input is
    /// not physics: the move applies in every match state.
    pub fn set_player_target(&mut self, x: f32) {
        let max = (self.court.w - self.player.w).max(0.0);
        self.player.x = x.clamp(0.0, max);
    }

    /// Running ⇄ Paused; no effect in any other state.
    pub fn toggle_pause(&mut self) {
        self.state = match self.state {
            MatchState::Running => MatchState::Paused,
            MatchState::Paused => MatchState::Running,
            other => other,
        };
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    pub fn court(&self) -> Court {
        self.court
    }

    pub fn player(&self) -> Paddle {
        self.player
    }

    pub fn scores(&self) -> Scoreboard {
        self.scores
    }

    /// The side that reached the win threshold, if the match is decided.
    /// Always `None` when `win_score` is 0 (unbounded match).
    pub fn winner(&self) -> Option<Side> {
        if self.win_score == 0 {
            return None;
        }
        if self.scores.player >= self.win_score {
            Some(Side::Player)
        } else if self.scores.cpu >= self.win_score {
            Some(Side::Cpu)
        } else {
            None
        }
    }

    pub(crate) fn park_ball(&mut self) {
        self.ball.x = self.court.w / 2.0;
        self.ball.y = self.court.h / 2.0;
        self.ball.vx = 0.0;
        self.ball.vy = 0.0;
    }
}
