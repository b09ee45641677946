//! Built-in segment-stroke text
//!
//! Tiny monospaced glyphs assembled from horizontal and vertical strokes and
//! emitted as colored quads into the frame's vertex stream. Coverage is
//! letters, digits, and a little punctuation; unknown glyphs render a
//! placeholder box. Good enough for a static overlay label without pulling in
//! a font rasterizer.

use glam::Vec2;

use super::shapes::rect;
use super::vertex::Vertex;

/// Glyph advance (cell width) relative to glyph height
const ADVANCE: f32 = 0.75;
/// Stroke thickness relative to glyph height
const STROKE: f32 = 1.0 / 6.0;

/// Width of `text` in pixels when drawn at `size`
pub fn measure(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * ADVANCE
}

/// Append quads for one line of text.
///
/// `origin` is the top-left corner of the first glyph cell; `size` is the
/// glyph height in pixels.
pub fn line(out: &mut Vec<Vertex>, text: &str, origin: Vec2, size: f32, color: [f32; 4]) {
    let mut pen = origin;
    for ch in text.chars() {
        let cell = Cell::new(pen, size, color);
        glyph(out, ch.to_ascii_uppercase(), &cell);
        pen.x += size * ADVANCE;
    }
}

/// Stroke geometry for one glyph cell.
///
/// The box is inset by one stroke width on the right so adjacent glyphs do
/// not touch.
struct Cell {
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
    t: f32,
    color: [f32; 4],
}

impl Cell {
    fn new(pen: Vec2, size: f32, color: [f32; 4]) -> Self {
        let t = size * STROKE;
        Self {
            x0: pen.x,
            y0: pen.y,
            x1: pen.x + size * ADVANCE - t,
            y1: pen.y + size,
            t,
            color,
        }
    }

    fn mid_y(&self) -> f32 {
        self.y0 + (self.y1 - self.y0 - self.t) / 2.0
    }

    fn mid_x(&self) -> f32 {
        self.x0 + (self.x1 - self.x0 - self.t) / 2.0
    }

    fn hline(&self, out: &mut Vec<Vertex>, y: f32, x0: f32, x1: f32) {
        rect(out, Vec2::new(x0, y), Vec2::new(x1, y + self.t), self.color);
    }

    fn vline(&self, out: &mut Vec<Vertex>, x: f32, y0: f32, y1: f32) {
        rect(out, Vec2::new(x, y0), Vec2::new(x + self.t, y1), self.color);
    }

    fn top(&self, out: &mut Vec<Vertex>) {
        self.hline(out, self.y0, self.x0, self.x1);
    }

    fn mid(&self, out: &mut Vec<Vertex>) {
        self.hline(out, self.mid_y(), self.x0, self.x1);
    }

    fn bot(&self, out: &mut Vec<Vertex>) {
        self.hline(out, self.y1 - self.t, self.x0, self.x1);
    }

    fn left(&self, out: &mut Vec<Vertex>) {
        self.vline(out, self.x0, self.y0, self.y1);
    }

    fn right(&self, out: &mut Vec<Vertex>) {
        self.vline(out, self.x1 - self.t, self.y0, self.y1);
    }

    fn left_upper(&self, out: &mut Vec<Vertex>) {
        self.vline(out, self.x0, self.y0, self.mid_y() + self.t);
    }

    fn left_lower(&self, out: &mut Vec<Vertex>) {
        self.vline(out, self.x0, self.mid_y(), self.y1);
    }

    fn right_upper(&self, out: &mut Vec<Vertex>) {
        self.vline(out, self.x1 - self.t, self.y0, self.mid_y() + self.t);
    }

    fn right_lower(&self, out: &mut Vec<Vertex>) {
        self.vline(out, self.x1 - self.t, self.mid_y(), self.y1);
    }

    fn center(&self, out: &mut Vec<Vertex>) {
        self.vline(out, self.mid_x(), self.y0, self.y1);
    }

    fn center_upper(&self, out: &mut Vec<Vertex>) {
        self.vline(out, self.mid_x(), self.y0, self.mid_y() + self.t);
    }

    fn center_lower(&self, out: &mut Vec<Vertex>) {
        self.vline(out, self.mid_x(), self.mid_y(), self.y1);
    }

    fn dot(&self, out: &mut Vec<Vertex>, y: f32) {
        let x = self.mid_x();
        rect(
            out,
            Vec2::new(x, y),
            Vec2::new(x + self.t, y + self.t),
            self.color,
        );
    }

    fn outline(&self, out: &mut Vec<Vertex>) {
        self.top(out);
        self.bot(out);
        self.left(out);
        self.right(out);
    }
}

fn glyph(out: &mut Vec<Vertex>, ch: char, c: &Cell) {
    match ch {
        ' ' => {}

        // Digits, classic seven-segment approximations
        '0' => {
            c.top(out);
            c.bot(out);
            c.left(out);
            c.right(out);
        }
        '1' => c.right(out),
        '2' => {
            c.top(out);
            c.mid(out);
            c.bot(out);
            c.right_upper(out);
            c.left_lower(out);
        }
        '3' => {
            c.top(out);
            c.mid(out);
            c.bot(out);
            c.right(out);
        }
        '4' => {
            c.mid(out);
            c.left_upper(out);
            c.right(out);
        }
        '5' => {
            c.top(out);
            c.mid(out);
            c.bot(out);
            c.left_upper(out);
            c.right_lower(out);
        }
        '6' => {
            c.top(out);
            c.mid(out);
            c.bot(out);
            c.left(out);
            c.right_lower(out);
        }
        '7' => {
            c.top(out);
            c.right(out);
        }
        '8' => {
            c.top(out);
            c.mid(out);
            c.bot(out);
            c.left(out);
            c.right(out);
        }
        '9' => {
            c.top(out);
            c.mid(out);
            c.bot(out);
            c.left_upper(out);
            c.right(out);
        }

        // Letters, crude stroke approximations
        'A' => {
            c.top(out);
            c.mid(out);
            c.left(out);
            c.right(out);
        }
        'B' => {
            c.top(out);
            c.mid(out);
            c.bot(out);
            c.left(out);
            c.right(out);
        }
        'C' => {
            c.top(out);
            c.bot(out);
            c.left(out);
        }
        'D' => {
            c.top(out);
            c.bot(out);
            c.left(out);
            c.right(out);
        }
        'E' => {
            c.top(out);
            c.mid(out);
            c.bot(out);
            c.left(out);
        }
        'F' => {
            c.top(out);
            c.mid(out);
            c.left(out);
        }
        'G' => {
            c.top(out);
            c.bot(out);
            c.left(out);
            c.right_lower(out);
            c.hline(out, c.mid_y(), c.mid_x(), c.x1);
        }
        'H' => {
            c.mid(out);
            c.left(out);
            c.right(out);
        }
        'I' => c.center(out),
        'J' => {
            c.bot(out);
            c.right(out);
            c.left_lower(out);
        }
        'K' => {
            c.mid(out);
            c.left(out);
            c.right_upper(out);
            c.right_lower(out);
        }
        'L' => {
            c.bot(out);
            c.left(out);
        }
        'M' => {
            c.top(out);
            c.left(out);
            c.right(out);
            c.center_upper(out);
        }
        'N' => {
            c.top(out);
            c.left(out);
            c.right(out);
        }
        'O' => {
            c.top(out);
            c.bot(out);
            c.left(out);
            c.right(out);
        }
        'P' => {
            c.top(out);
            c.mid(out);
            c.left(out);
            c.right_upper(out);
        }
        'Q' => {
            c.top(out);
            c.bot(out);
            c.left(out);
            c.right(out);
            c.center_lower(out);
        }
        'R' => {
            c.top(out);
            c.mid(out);
            c.left(out);
            c.right_upper(out);
            c.right_lower(out);
        }
        'S' => {
            c.top(out);
            c.mid(out);
            c.bot(out);
            c.left_upper(out);
            c.right_lower(out);
        }
        'T' => {
            c.top(out);
            c.center(out);
        }
        'U' | 'V' => {
            c.bot(out);
            c.left(out);
            c.right(out);
        }
        'W' => {
            c.bot(out);
            c.left(out);
            c.right(out);
            c.center_lower(out);
        }
        'X' => {
            c.mid(out);
            c.left_upper(out);
            c.right_upper(out);
            c.left_lower(out);
            c.right_lower(out);
        }
        'Y' => {
            c.mid(out);
            c.left_upper(out);
            c.right_upper(out);
            c.center_lower(out);
        }
        'Z' => {
            c.top(out);
            c.mid(out);
            c.bot(out);
            c.right_upper(out);
            c.left_lower(out);
        }

        '-' => c.mid(out),
        '_' => c.bot(out),
        '.' | ',' => c.dot(out, c.y1 - c.t),
        ':' => {
            c.dot(out, c.y0 + (c.y1 - c.y0) / 3.0);
            c.dot(out, c.y0 + (c.y1 - c.y0) * 2.0 / 3.0);
        }
        '!' => {
            c.center_upper(out);
            c.dot(out, c.y1 - c.t);
        }
        '+' => {
            c.mid(out);
            c.center(out);
        }

        // Placeholder box for unknown glyphs
        _ => c.outline(out),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_emits_nothing() {
        let mut out = Vec::new();
        line(&mut out, " ", Vec2::ZERO, 20.0, [1.0; 4]);
        assert!(out.is_empty());
    }

    #[test]
    fn test_dash_is_one_quad() {
        let mut out = Vec::new();
        line(&mut out, "-", Vec2::ZERO, 20.0, [1.0; 4]);
        assert_eq!(out.len(), 6);
    }

    #[test]
    fn test_glyphs_stay_inside_cells() {
        let origin = Vec2::new(10.0, 10.0);
        let size = 20.0;
        let mut out = Vec::new();
        line(&mut out, "BOUNCE 123", origin, size, [1.0; 4]);

        let width = measure("BOUNCE 123", size);
        for v in &out {
            assert!(v.position[0] >= origin.x && v.position[0] <= origin.x + width);
            assert!(v.position[1] >= origin.y && v.position[1] <= origin.y + size);
        }
    }

    #[test]
    fn test_unknown_glyph_renders_box() {
        let mut out = Vec::new();
        line(&mut out, "@", Vec2::ZERO, 20.0, [1.0; 4]);
        // Outline box: four strokes
        assert_eq!(out.len(), 4 * 6);
    }

    #[test]
    fn test_text_is_quads() {
        let mut out = Vec::new();
        line(&mut out, "RUST VERSION - BOUNCING BALLS", Vec2::ZERO, 20.0, [1.0; 4]);
        assert!(!out.is_empty());
        assert_eq!(out.len() % 6, 0);
    }
}
