// Solopong configuration types
// All settings carry defaults matching the built-in court

use serde::{Deserialize, Serialize};

use crate::game::Palette;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub keybindings: KeyBindings,
    #[serde(default)]
    pub court: CourtConfig,
    #[serde(default)]
    pub ai: AiConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct KeyBindings {
    pub move_left: String,
    pub move_right: String,
    pub serve: String,
    pub pause: String,
    pub reset: String,
    pub quit: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            move_left: "Left".to_string(),
            move_right: "Right".to_string(),
            serve: "Space".to_string(),
            pause: "P".to_string(),
            reset: "R".to_string(),
            quit: "Q".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CourtConfig {
    // Court dimensions in court units
    pub width: f32,
    pub height: f32,

    // Paddle width as a fraction of court width
    pub paddle_width_pct: f32,

    // Paddle height in court units
    pub paddle_height: f32,

    // Points needed to win the match; 0 plays an unbounded match
    pub win_score: u32,

    // Pause between a goal and the next serve
    pub serve_delay_ms: u64,

    // Largest time delta a single physics step will integrate
    pub max_step_ms: u64,

    // Player paddle movement per key press, in court units
    pub paddle_tap_distance: f32,
}

impl Default for CourtConfig {
    fn default() -> Self {
        Self {
            width: 320.0,
            height: 480.0,
            paddle_width_pct: 0.22,
            paddle_height: 12.0,
            win_score: 5,
            serve_delay_ms: 600,
            max_step_ms: 30,
            paddle_tap_distance: 24.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AiConfig {
    // Tracking style: "chase" (proportional) or "step" (dead-zone stepper)
    pub style: String,

    // Chase: fraction of the horizontal gap closed per 60 Hz tick
    pub chase_gain: f32,

    // Step: paddle speed in court units per second
    pub step_speed: f32,

    // Step: no movement while the paddle center is this close to the ball
    pub dead_zone: f32,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            style: "chase".to_string(),
            chase_gain: 0.04,
            step_speed: 150.0,
            dead_zone: 35.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    // Target frames per second for the driver loop
    pub target_fps: u64,

    // Colors as RGB values 0-255
    pub player_color: [u8; 3],
    pub cpu_color: [u8; 3],
    pub ball_color: [u8; 3],
    pub net_color: [u8; 3],
    pub score_color: [u8; 3],
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            target_fps: 60,
            player_color: [167, 243, 208],
            cpu_color: [230, 249, 239],
            ball_color: [52, 211, 153],
            net_color: [60, 60, 60],
            score_color: [255, 255, 255],
        }
    }
}

impl DisplayConfig {
    pub fn palette(&self) -> Palette {
        Palette {
            player: self.player_color,
            cpu: self.cpu_color,
            ball: self.ball_color,
            net: self.net_color,
            score: self.score_color,
        }
    }
}
