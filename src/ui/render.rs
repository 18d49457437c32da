use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use super::braille::BrailleCanvas;
use super::overlay::{render_overlay, OverlayMessage};
use crate::game::{Court, DrawCommand};

// Layout: the whole terminal is the court, minus one bottom row for the
// controls hint. Court coordinates stretch onto the Braille pixel grid with
// independent x/y scaling.
const HINT_ROWS: u16 = 1;

/// Mapping between court coordinates and the terminal's Braille pixel grid.
/// The driver uses the same mapping to translate mouse columns into
/// court-local x, so input and rendering can never disagree.
#[derive(Debug, Clone, Copy)]
pub struct CourtTransform {
    scale_x: f32,
    scale_y: f32,
    court_rows: u16,
}

impl CourtTransform {
    pub fn new(width_cells: u16, height_cells: u16, court: &Court) -> Self {
        let court_rows = height_cells.saturating_sub(HINT_ROWS).max(1);
        Self {
            scale_x: (width_cells.max(1) as f32 * 2.0) / court.w,
            scale_y: (court_rows as f32 * 4.0) / court.h,
            court_rows,
        }
    }

    fn to_pixel(&self, x: f32, y: f32) -> (isize, isize) {
        (
            (x * self.scale_x).round() as isize,
            (y * self.scale_y).round() as isize,
        )
    }

    /// Court-local x of a terminal column (the column's center pixel)
    pub fn column_to_court_x(&self, column: u16) -> f32 {
        (column as f32 * 2.0 + 1.0) / self.scale_x
    }
}

/// Draw one frame: consume the simulation's draw list, then the controls
/// hint and any overlay. No game logic lives here.
pub fn render(
    frame: &mut Frame,
    commands: &[DrawCommand],
    court: &Court,
    overlay: Option<&OverlayMessage>,
) {
    let area = frame.area();

    // true black background, not the terminal default
    let bg = Block::default().style(Style::default().bg(Color::Rgb(0, 0, 0)));
    frame.render_widget(bg, area);

    let tf = CourtTransform::new(area.width, area.height, court);
    let mut canvas = BrailleCanvas::new(area.width as usize, tf.court_rows as usize);
    let mut texts: Vec<(&str, f32, [u8; 3])> = Vec::new();

    for cmd in commands {
        match cmd {
            DrawCommand::Rect { x, y, w, h, color } => {
                let (px, py) = tf.to_pixel(*x, *y);
                let pw = ((w * tf.scale_x).round() as isize).max(1);
                let ph = ((h * tf.scale_y).round() as isize).max(1);
                canvas.fill_rect(px, py, pw, ph, *color);
            }
            DrawCommand::Circle { x, y, r, color } => {
                let (px, py) = tf.to_pixel(*x, *y);
                let rx = ((r * tf.scale_x).round() as isize).max(1);
                let ry = ((r * tf.scale_y).round() as isize).max(1);
                canvas.fill_ellipse(px, py, rx, ry, *color);
            }
            DrawCommand::Text { value, y, color, .. } => texts.push((value.as_str(), *y, *color)),
        }
    }

    render_canvas(frame, &canvas, area);

    for (value, y, color) in texts {
        draw_text_row(frame, area, &tf, value, y, color);
    }

    draw_controls(frame, area);

    if let Some(message) = overlay {
        render_overlay(frame, message, area);
    }
}

/// Render the canvas row by row, batching runs of same-colored cells into
/// single spans.
fn render_canvas(frame: &mut Frame, canvas: &BrailleCanvas, area: Rect) {
    for y in 0..canvas.height() {
        let mut spans: Vec<Span> = Vec::new();
        let mut run = String::new();
        let mut run_color: Option<[u8; 3]> = None;

        for x in 0..canvas.width() {
            let color = canvas.color_at(x, y);
            if color != run_color && !run.is_empty() {
                spans.push(colored_span(std::mem::take(&mut run), run_color));
            }
            run_color = color;
            run.push(canvas.to_char(x, y));
        }
        if !run.is_empty() {
            spans.push(colored_span(run, run_color));
        }

        let row_area = Rect {
            x: area.x,
            y: area.y + y as u16,
            width: area.width,
            height: 1,
        };
        frame.render_widget(Paragraph::new(Line::from(spans)), row_area);
    }
}

fn colored_span(text: String, color: Option<[u8; 3]>) -> Span<'static> {
    let style = match color {
        Some([r, g, b]) => Style::default().fg(Color::Rgb(r, g, b)),
        None => Style::default(),
    };
    Span::styled(text, style)
}

/// Center a text command on its court row, sized exactly to the text so the
/// surrounding Braille cells survive.
fn draw_text_row(
    frame: &mut Frame,
    area: Rect,
    tf: &CourtTransform,
    value: &str,
    court_y: f32,
    color: [u8; 3],
) {
    let row = (((court_y * tf.scale_y) / 4.0) as u16).min(tf.court_rows.saturating_sub(1));
    let width = (value.chars().count() as u16).min(area.width);
    let text_area = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + row,
        width,
        height: 1,
    };
    let [r, g, b] = color;
    let paragraph = Paragraph::new(value.to_string())
        .style(Style::default().fg(Color::Rgb(r, g, b)))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, text_area);
}

fn draw_controls(frame: &mut Frame, area: Rect) {
    if area.height == 0 {
        return;
    }
    let controls = Paragraph::new("←/→ move   Space serve   P pause   R reset   Q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    let hint_area = Rect {
        x: area.x,
        y: area.y + area.height - 1,
        width: area.width,
        height: 1,
    };
    frame.render_widget(controls, hint_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_maps_court_corners_onto_the_pixel_grid() {
        let court = Court { w: 320.0, h: 480.0 };
        // 80×25 terminal: 24 court rows → 160×96 pixels
        let tf = CourtTransform::new(80, 25, &court);
        assert_eq!(tf.to_pixel(0.0, 0.0), (0, 0));
        assert_eq!(tf.to_pixel(320.0, 480.0), (160, 96));
        assert_eq!(tf.to_pixel(160.0, 240.0), (80, 48));
    }

    #[test]
    fn column_mapping_inverts_the_x_scale() {
        let court = Court { w: 320.0, h: 480.0 };
        let tf = CourtTransform::new(80, 25, &court);
        // column 40 of 80 ≈ court center
        let x = tf.column_to_court_x(40);
        assert!((x - 162.0).abs() < 2.5);
        assert!(tf.column_to_court_x(0) < tf.column_to_court_x(79));
    }

    #[test]
    fn degenerate_terminal_sizes_do_not_panic() {
        let court = Court { w: 320.0, h: 480.0 };
        let tf = CourtTransform::new(0, 0, &court);
        let _ = tf.to_pixel(160.0, 240.0);
        let _ = tf.column_to_court_x(0);
    }
}
