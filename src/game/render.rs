use super::state::Simulation;

pub type Rgb = [u8; 3];

/// Colors for the draw-command stream, sourced from `DisplayConfig`.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub player: Rgb,
    pub cpu: Rgb,
    pub ball: Rgb,
    pub net: Rgb,
    pub score: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            player: [167, 243, 208],
            cpu: [230, 249, 239],
            ball: [52, 211, 153],
            net: [60, 60, 60],
            score: [255, 255, 255],
        }
    }
}

/// Abstract draw primitive in court coordinates. The renderer maps these to
/// the terminal and applies no game logic of its own.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Rgb,
    },
    Circle {
        x: f32,
        y: f32,
        r: f32,
        color: Rgb,
    },
    Text {
        value: String,
        x: f32,
        y: f32,
        color: Rgb,
        size: f32,
    },
}

const NET_DASH: f32 = 6.0;
const NET_GAP: f32 = 8.0;
const NET_THICKNESS: f32 = 2.0;
const SCORE_ROW: f32 = 30.0;
const SCORE_SIZE: f32 = 14.0;

impl Simulation {
    /// Emit the frame's draw list: dashed mid-court net, both paddles, the
    /// ball, and the score line.
    pub fn render_commands(&self, palette: &Palette) -> Vec<DrawCommand> {
        let mut commands = Vec::new();

        let net_y = self.court.h / 2.0 - NET_THICKNESS / 2.0;
        let mut x = 0.0;
        while x < self.court.w {
            commands.push(DrawCommand::Rect {
                x,
                y: net_y,
                w: NET_DASH.min(self.court.w - x),
                h: NET_THICKNESS,
                color: palette.net,
            });
            x += NET_DASH + NET_GAP;
        }

        commands.push(DrawCommand::Rect {
            x: self.cpu.x,
            y: self.cpu.y,
            w: self.cpu.w,
            h: self.cpu.h,
            color: palette.cpu,
        });
        commands.push(DrawCommand::Rect {
            x: self.player.x,
            y: self.player.y,
            w: self.player.w,
            h: self.player.h,
            color: palette.player,
        });
        commands.push(DrawCommand::Circle {
            x: self.ball.x,
            y: self.ball.y,
            r: self.ball.r,
            color: palette.ball,
        });
        commands.push(DrawCommand::Text {
            value: format!("YOU {} : {} CPU", self.scores.player, self.scores.cpu),
            x: self.court.w / 2.0,
            y: SCORE_ROW,
            color: palette.score,
            size: SCORE_SIZE,
        });

        commands
    }
}
