use crate::game::Rgb;

#[derive(Clone, Copy, Default)]
struct Cell {
    dots: u8,
    color: Option<Rgb>,
}

/// Braille canvas for high-resolution terminal rendering.
/// Each terminal cell holds a 2×4 grid of Braille dots, giving 2× horizontal
/// and 4× vertical resolution; each cell additionally carries the color of
/// the last shape drawn into it.
pub struct BrailleCanvas {
    width: usize,  // terminal cells
    height: usize, // terminal cells
    cells: Vec<Cell>,
}

impl BrailleCanvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width * height],
        }
    }

    /// Set a dot at pixel coordinates. Out-of-range (including negative)
    /// coordinates are ignored, so shapes may safely spill off the canvas.
    pub fn set_pixel(&mut self, pixel_x: isize, pixel_y: isize, color: Rgb) {
        if pixel_x < 0 || pixel_y < 0 {
            return;
        }
        let (cell_x, cell_y) = (pixel_x as usize / 2, pixel_y as usize / 4);
        if cell_x >= self.width || cell_y >= self.height {
            return;
        }

        // Braille dot numbering:
        // 1 4
        // 2 5
        // 3 6
        // 7 8
        let dot_index = match (pixel_x % 2, pixel_y % 4) {
            (0, 0) => 0,
            (0, 1) => 1,
            (0, 2) => 2,
            (0, 3) => 6,
            (1, 0) => 3,
            (1, 1) => 4,
            (1, 2) => 5,
            _ => 7,
        };

        let cell = &mut self.cells[cell_y * self.width + cell_x];
        cell.dots |= 1 << dot_index;
        cell.color = Some(color);
    }

    /// Fill an axis-aligned rectangle of pixels
    pub fn fill_rect(&mut self, x: isize, y: isize, w: isize, h: isize, color: Rgb) {
        for py in y..y + h {
            for px in x..x + w {
                self.set_pixel(px, py, color);
            }
        }
    }

    /// Fill an ellipse centered at (cx, cy). Separate radii let circles in
    /// court space survive the non-uniform court-to-cell scaling.
    pub fn fill_ellipse(&mut self, cx: isize, cy: isize, rx: isize, ry: isize, color: Rgb) {
        let (rx, ry) = (rx.max(1), ry.max(1));
        for dy in -ry..=ry {
            let frac = 1.0 - (dy as f32 / ry as f32).powi(2);
            let half = (rx as f32 * frac.max(0.0).sqrt()).round() as isize;
            for dx in -half..=half {
                self.set_pixel(cx + dx, cy + dy, color);
            }
        }
    }

    /// Braille Unicode: U+2800 + dot pattern
    pub fn to_char(&self, cell_x: usize, cell_y: usize) -> char {
        if cell_x >= self.width || cell_y >= self.height {
            return ' ';
        }
        let pattern = self.cells[cell_y * self.width + cell_x].dots;
        char::from_u32(0x2800 + pattern as u32).unwrap_or(' ')
    }

    /// Color of the cell, if anything was drawn into it
    pub fn color_at(&self, cell_x: usize, cell_y: usize) -> Option<Rgb> {
        if cell_x >= self.width || cell_y >= self.height {
            return None;
        }
        self.cells[cell_y * self.width + cell_x].color
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgb = [255, 255, 255];

    #[test]
    fn single_pixel_sets_dot_one_and_color() {
        let mut canvas = BrailleCanvas::new(2, 2);
        canvas.set_pixel(0, 0, WHITE);
        assert_eq!(canvas.to_char(0, 0), '⠁');
        assert_eq!(canvas.color_at(0, 0), Some(WHITE));
        assert_eq!(canvas.color_at(1, 0), None);
    }

    #[test]
    fn filled_cell_is_the_full_braille_block() {
        let mut canvas = BrailleCanvas::new(2, 2);
        canvas.fill_rect(0, 0, 2, 4, WHITE);
        assert_eq!(canvas.to_char(0, 0), '⣿');
        assert_eq!(canvas.to_char(1, 0), '⠀');
    }

    #[test]
    fn out_of_range_pixels_are_ignored() {
        let mut canvas = BrailleCanvas::new(2, 2);
        canvas.set_pixel(-1, 0, WHITE);
        canvas.set_pixel(0, -3, WHITE);
        canvas.set_pixel(100, 100, WHITE);
        for y in 0..2 {
            for x in 0..2 {
                assert_eq!(canvas.color_at(x, y), None);
            }
        }
    }

    #[test]
    fn ellipse_covers_its_extremes() {
        let mut canvas = BrailleCanvas::new(8, 8);
        canvas.fill_ellipse(8, 16, 4, 8, WHITE);
        // center, leftmost, topmost pixels all land
        assert!(canvas.color_at(4, 4).is_some());
        assert!(canvas.color_at(2, 4).is_some());
        assert!(canvas.color_at(4, 2).is_some());
    }
}
