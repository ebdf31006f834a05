use common::{
    maze::Maze,
    raycast::Pose,
    view::{Camera, Column, Rgb, Viewport},
};

pub const WALL_SYMBOLS: [char; 4] = ['█', '▓', '▒', '░']; // Nearest first.
pub const SPACE_SYMBOL: char = ' ';

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyph {
    pub symbol: char,
    pub color: Rgb,
}

impl Glyph {
    pub const EMPTY: Glyph = Glyph {
        symbol: SPACE_SYMBOL,
        color: Rgb::BLACK,
    };
}

/// A camera whose viewport is measured in terminal cells, one column per cell.
pub fn terminal_camera(fov_degrees: f32, width: u16, height: u16) -> Camera {
    Camera {
        fov_degrees,
        columns: width as usize,
        viewport: Viewport {
            width: width as f32,
            height: height as f32,
        },
        ..Camera::default()
    }
}

/// Character buffer that projected columns are rasterized into.
#[derive(Clone, Debug, PartialEq)]
pub struct TextFrame {
    width: usize,
    height: usize,
    glyphs: Vec<Glyph>,
}

impl TextFrame {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            glyphs: vec![Glyph::EMPTY; width * height],
        }
    }

    pub fn render(camera: &Camera, pose: &Pose, maze: &Maze) -> Self {
        let mut frame = Self::new(camera.columns, camera.viewport.height.max(0.0) as usize);
        for column in camera.project(pose, maze) {
            frame.draw_column(&column, camera.max_distance);
        }
        frame
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn glyph(&self, x: usize, y: usize) -> Option<Glyph> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.glyphs[y * self.width + x])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Glyph]> {
        // `chunks` panics on zero, and a zero-width frame has no glyphs anyway.
        self.glyphs.chunks(self.width.max(1))
    }

    /// Fills every row whose centre lies between the column's start and end.
    pub fn draw_column(&mut self, column: &Column, max_distance: f32) {
        let x = column.screen_x.floor();
        if x < 0.0 || x as usize >= self.width {
            return;
        }
        let x = x as usize;

        let glyph = Glyph {
            symbol: wall_symbol(column.distance, max_distance),
            color: column.color,
        };

        for y in 0..self.height {
            let centre = y as f32 + 0.5;
            if centre >= column.draw_start && centre <= column.draw_end {
                self.glyphs[y * self.width + x] = glyph;
            }
        }
    }

    pub fn to_plain_string(&self) -> String {
        self.rows()
            .map(|row| row.iter().map(|glyph| glyph.symbol).collect::<String>())
            .collect::<Vec<String>>()
            .join("\n")
    }
}

fn wall_symbol(distance: f32, max_distance: f32) -> char {
    let band = (distance / max_distance * WALL_SYMBOLS.len() as f32).floor();
    let band = (band.max(0.0) as usize).min(WALL_SYMBOLS.len() - 1);
    WALL_SYMBOLS[band]
}

#[cfg(test)]
mod tests {
    use glam::vec2;

    use super::*;

    fn column(screen_x: f32, distance: f32, draw_start: f32, draw_end: f32) -> Column {
        Column {
            screen_x,
            distance,
            draw_start,
            draw_end,
            color: Rgb::PHOSPHOR,
        }
    }

    #[test]
    fn draws_only_rows_inside_column() {
        let mut frame = TextFrame::new(3, 6);
        frame.draw_column(&column(1.0, 1.0, 1.5, 4.5), 15.0);

        let plain = frame.to_plain_string();
        let lines: Vec<&str> = plain.lines().collect();
        assert_eq!(lines, vec!["   ", " █ ", " █ ", " █ ", " █ ", "   "]);
        assert_eq!(frame.glyph(1, 2).unwrap().color, Rgb::PHOSPHOR);
        assert_eq!(frame.glyph(0, 2), Some(Glyph::EMPTY));
    }

    #[test]
    fn ignores_columns_outside_frame() {
        let mut frame = TextFrame::new(2, 2);
        frame.draw_column(&column(5.0, 1.0, 0.0, 2.0), 15.0);
        frame.draw_column(&column(-1.0, 1.0, 0.0, 2.0), 15.0);
        assert_eq!(frame, TextFrame::new(2, 2));
    }

    #[test]
    fn farther_walls_use_lighter_symbols() {
        assert_eq!(wall_symbol(0.5, 15.0), '█');
        assert_eq!(wall_symbol(5.0, 15.0), '▓');
        assert_eq!(wall_symbol(9.0, 15.0), '▒');
        assert_eq!(wall_symbol(14.0, 15.0), '░');
        assert_eq!(wall_symbol(30.0, 15.0), '░');
    }

    #[test]
    fn render_fills_view_when_facing_a_close_wall() {
        let grid = vec![
            vec![1, 1, 1, 1, 1],
            vec![1, 0, 1, 1, 1],
            vec![1, 1, 1, 1, 1],
            vec![1, 1, 1, 1, 1],
            vec![1, 1, 1, 1, 1],
        ];
        let maze = Maze::from_grid(&grid).unwrap();
        let camera = terminal_camera(45.0, 20, 10);
        let pose = Pose::new(vec2(1.5, 1.5), 0.0);

        let frame = TextFrame::render(&camera, &pose, &maze);
        assert_eq!(frame.width(), 20);
        assert_eq!(frame.height(), 10);
        for row in frame.rows() {
            assert!(row.iter().all(|glyph| glyph.symbol == '█'));
        }
    }

    #[test]
    fn zero_sized_frame_renders_nothing() {
        let frame = TextFrame::new(0, 0);
        assert_eq!(frame.to_plain_string(), "");
    }
}
