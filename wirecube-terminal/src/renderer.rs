//! Terminal render surface: a raster canvas scaled onto character cells
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute, queue,
    style::{Color as TermColor, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};
use std::io::{self, stdout, Stdout, Write};
use std::time::Duration;
use wirecube_core::{Color, RenderSurface, SurfaceError, SurfaceResult, Vertex};

const MARKER_GLYPH: char = '█';
const POINT_GLYPH: char = '•';

/// One painted character cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub glyph: char,
    pub color: Color,
}

/// A square raster canvas of `canvas_width` pixels mapped onto a grid of
/// terminal cells.
///
/// Terminals cannot blend, so alpha is ignored and every draw overwrites the
/// cells it touches.
pub struct CellCanvas {
    cols: usize,
    rows: usize,
    canvas_width: f32,
    cells: Vec<Option<Cell>>,
}

impl CellCanvas {
    pub fn new(cols: usize, rows: usize, canvas_width: u32) -> Self {
        Self {
            cols,
            rows,
            canvas_width: canvas_width.max(1) as f32,
            cells: vec![None; cols * rows],
        }
    }

    pub fn size(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    pub fn resize(&mut self, cols: usize, rows: usize) {
        self.cols = cols;
        self.rows = rows;
        self.cells = vec![None; cols * rows];
    }

    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    pub fn cell(&self, col: usize, row: usize) -> Option<Cell> {
        if col < self.cols && row < self.rows {
            self.cells[row * self.cols + col]
        } else {
            None
        }
    }

    /// Cell containing raster pixel `(x, y)`; may lie outside the grid
    fn to_cell(&self, x: f32, y: f32) -> (i64, i64) {
        let (col, row) = self.cell_space(x, y);
        (col.floor() as i64, row.floor() as i64)
    }

    /// Raster pixel `(x, y)` in continuous cell units
    fn cell_space(&self, x: f32, y: f32) -> (f64, f64) {
        let width = self.canvas_width as f64;
        (
            x as f64 * self.cols as f64 / width,
            y as f64 * self.rows as f64 / width,
        )
    }

    /// Liang-Barsky clip of a cell-space segment to the grid rectangle
    fn clip(&self, from: (f64, f64), to: (f64, f64)) -> Option<((f64, f64), (f64, f64))> {
        if ![from.0, from.1, to.0, to.1].iter().all(|c| c.is_finite()) {
            return None;
        }

        let (dx, dy) = (to.0 - from.0, to.1 - from.1);
        let (mut t0, mut t1) = (0.0f64, 1.0f64);
        let bounds = [
            (-dx, from.0),
            (dx, self.cols as f64 - from.0),
            (-dy, from.1),
            (dy, self.rows as f64 - from.1),
        ];

        for (p, q) in bounds {
            if p == 0.0 {
                // Parallel to this boundary and outside it
                if q < 0.0 {
                    return None;
                }
            } else {
                let r = q / p;
                if p < 0.0 {
                    if r > t1 {
                        return None;
                    }
                    t0 = t0.max(r);
                } else {
                    if r < t0 {
                        return None;
                    }
                    t1 = t1.min(r);
                }
            }
        }

        Some((
            (from.0 + t0 * dx, from.1 + t0 * dy),
            (from.0 + t1 * dx, from.1 + t1 * dy),
        ))
    }

    fn plot(&mut self, col: i64, row: i64, cell: Cell) {
        if col < 0 || row < 0 || col >= self.cols as i64 || row >= self.rows as i64 {
            return;
        }
        self.cells[row as usize * self.cols + col as usize] = Some(cell);
    }

    pub fn point(&mut self, at: &Vertex, color: Color) {
        let (col, row) = self.to_cell(at.x(), at.y());
        self.plot(col, row, Cell { glyph: POINT_GLYPH, color });
    }

    /// Paint every cell overlapped by the `side` pixel square around `center`
    pub fn fill_square(&mut self, center: &Vertex, side: u32, color: Color) {
        let half = side as f32 / 2.0;
        let (left, top) = self.to_cell(center.x() - half, center.y() - half);
        let (right, bottom) = self.to_cell(center.x() + half, center.y() + half);

        let cell = Cell { glyph: MARKER_GLYPH, color };
        for row in top.max(0)..=bottom.min(self.rows as i64 - 1) {
            for col in left.max(0)..=right.min(self.cols as i64 - 1) {
                self.plot(col, row, cell);
            }
        }
    }

    /// Bresenham line between the cells holding `from` and `to`, clipped to the grid
    pub fn line(&mut self, from: &Vertex, to: &Vertex, color: Color) {
        if self.cols == 0 || self.rows == 0 {
            return;
        }
        let start = self.cell_space(from.x(), from.y());
        let end = self.cell_space(to.x(), to.y());
        let Some((start, end)) = self.clip(start, end) else {
            return;
        };

        // The far grid edge belongs to the next cell over
        let last_col = self.cols as i64 - 1;
        let last_row = self.rows as i64 - 1;
        let snap = |(x, y): (f64, f64)| (x.floor() as i64, y.floor() as i64);
        let (x0, y0) = snap(start);
        let (x1, y1) = snap(end);
        if (x0 > last_col && x1 > last_col) || (y0 > last_row && y1 > last_row) {
            return;
        }
        let (x0, y0) = (x0.clamp(0, last_col), y0.clamp(0, last_row));
        let (x1, y1) = (x1.clamp(0, last_col), y1.clamp(0, last_row));

        let cell = Cell {
            glyph: line_glyph(end.0 - start.0, end.1 - start.1),
            color,
        };

        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };

        let (mut x, mut y) = (x0, y0);
        let mut err = dx + dy;
        loop {
            self.plot(x, y, cell);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Write the grid to `writer`, one line per row, on a black background
    pub fn draw<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.queue(SetBackgroundColor(term_color(Color::BLACK)))?;
        let mut current = None;

        for row in 0..self.rows {
            writer.queue(cursor::MoveTo(0, row as u16))?;
            for col in 0..self.cols {
                match self.cells[row * self.cols + col] {
                    Some(cell) => {
                        if current != Some(cell.color) {
                            writer.queue(SetForegroundColor(term_color(cell.color)))?;
                            current = Some(cell.color);
                        }
                        writer.queue(Print(cell.glyph))?;
                    }
                    None => {
                        writer.queue(Print(' '))?;
                    }
                }
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

/// Character that best follows a line with the given cell-space direction
fn line_glyph(dx: f64, dy: f64) -> char {
    let (ax, ay) = (dx.abs(), dy.abs());
    if ax >= 2.0 * ay {
        '-'
    } else if ay >= 2.0 * ax {
        '|'
    } else if (dx > 0.0) == (dy > 0.0) {
        // Rows grow downwards, so a positive slope leans right
        '\\'
    } else {
        '/'
    }
}

fn term_color(color: Color) -> TermColor {
    TermColor::Rgb {
        r: color.red(),
        g: color.green(),
        b: color.blue(),
    }
}

/// Render surface that draws into the terminal's alternate screen
pub struct TerminalSurface {
    canvas: CellCanvas,
    stdout: Stdout,
    active: bool,
}

impl TerminalSurface {
    /// Switch the terminal to raw mode on the alternate screen
    pub fn open(canvas_width: u32) -> SurfaceResult<Self> {
        let (cols, rows) = terminal::size()
            .map_err(|e| SurfaceError::Init(format!("cannot query terminal size: {}", e)))?;
        if cols == 0 || rows == 0 {
            return Err(SurfaceError::Init(format!("terminal too small ({}x{})", cols, rows)));
        }

        terminal::enable_raw_mode()
            .map_err(|e| SurfaceError::Init(format!("cannot enable raw mode: {}", e)))?;

        let mut stdout = stdout();
        if let Err(e) = execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide) {
            let _ = terminal::disable_raw_mode();
            return Err(SurfaceError::Init(format!("cannot enter alternate screen: {}", e)));
        }

        log::info!("Terminal surface opened at {}x{} cells", cols, rows);

        Ok(Self {
            canvas: CellCanvas::new(cols as usize, rows as usize, canvas_width),
            stdout,
            active: true,
        })
    }

    fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        terminal::disable_raw_mode()?;
        execute!(self.stdout, ResetColor, terminal::LeaveAlternateScreen, cursor::Show)
    }
}

impl RenderSurface for TerminalSurface {
    fn clear(&mut self) {
        self.canvas.clear();
    }

    fn draw_point(&mut self, at: &Vertex, color: Color) {
        self.canvas.point(at, color);
    }

    fn draw_filled_square(&mut self, center: &Vertex, side: u32, color: Color) {
        self.canvas.fill_square(center, side, color);
    }

    fn draw_line(&mut self, from: &Vertex, to: &Vertex, color: Color) {
        self.canvas.line(from, to, color);
    }

    fn present(&mut self) -> SurfaceResult<()> {
        self.canvas.draw(&mut self.stdout)?;
        self.stdout.flush()?;
        Ok(())
    }

    fn poll_quit(&mut self) -> SurfaceResult<bool> {
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) if is_quit_key(&key) => return Ok(true),
                Event::Resize(cols, rows) => {
                    log::debug!("Terminal resized to {}x{}", cols, rows);
                    self.canvas.resize(cols as usize, rows as usize);
                    queue!(self.stdout, terminal::Clear(terminal::ClearType::All))?;
                }
                _ => {}
            }
        }
        Ok(false)
    }

    fn set_title(&mut self, title: &str) -> SurfaceResult<()> {
        queue!(self.stdout, terminal::SetTitle(title))?;
        Ok(())
    }

    fn shutdown(&mut self) -> SurfaceResult<()> {
        self.restore()?;
        log::info!("Terminal restored");
        Ok(())
    }
}

impl Drop for TerminalSurface {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            log::warn!("Failed to restore terminal: {}", e);
        }
    }
}

/// `q`, `Esc` or `Ctrl-C`
fn is_quit_key(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
