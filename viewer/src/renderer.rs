//! Character-grid renderer
//!
//! Projects balls through the orbit camera and draws each as an `o` in its
//! colour. The camera turns a little every frame.

use crate::camera::OrbitCamera;
use crossterm::{
    cursor, queue,
    style::{self, Print, ResetColor, SetForegroundColor},
    terminal::{self, BeginSynchronizedUpdate, ClearType, EndSynchronizedUpdate},
};
use sim_core::{BallView, Color, Renderer};
use std::io::{self, Write};

/// Terminal colour for each palette entry
fn term_color(color: Color) -> style::Color {
    match color {
        Color::Blue => style::Color::Blue,
        Color::Green => style::Color::Green,
        Color::Red => style::Color::Red,
        Color::Cyan => style::Color::Cyan,
        Color::Magenta => style::Color::Magenta,
        Color::Yellow => style::Color::Yellow,
    }
}

pub struct TerminalRenderer<W: Write> {
    out: W,
    camera: OrbitCamera,
    width: usize,
    height: usize,
    cells: Vec<Option<Color>>, // Row-major, one entry per character cell
    frame: u32,
    delta_t: f32,
    ansi: bool,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, camera: OrbitCamera, width: usize, height: usize, delta_t: f32) -> Self {
        Self {
            out,
            camera,
            width,
            height,
            cells: vec![None; width * height],
            frame: 0,
            delta_t,
            ansi: true,
        }
    }

    /// Plain text output, no escape sequences
    pub fn plain(mut self) -> Self {
        self.ansi = false;
        self
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    pub fn frame(&self) -> u32 {
        self.frame
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn rasterize(&mut self, balls: &[BallView]) {
        self.cells.fill(None);
        if self.width == 0 || self.height == 0 {
            return;
        }

        let max_col = (self.width - 1) as f32;
        let max_row = (self.height - 1) as f32;
        for ball in balls {
            let Some(ndc) = self.camera.project(ball.position.as_vec3()) else {
                continue;
            };
            let col = ((ndc.x + 1.0) * 0.5 * max_col).round() as usize;
            let row = ((1.0 - ndc.y) * 0.5 * max_row).round() as usize;
            // Later balls win when they share a cell
            self.cells[row * self.width + col] = Some(ball.color);
        }
    }

    fn write_frame(&mut self) -> io::Result<()> {
        if !self.ansi {
            return self.write_plain();
        }

        queue!(
            self.out,
            BeginSynchronizedUpdate,
            terminal::Clear(ClearType::All)
        )?;
        for (y, row) in self.cells.chunks(self.width.max(1)).enumerate() {
            queue!(self.out, cursor::MoveTo(0, y as u16))?;
            for cell in row {
                match cell {
                    Some(color) => queue!(
                        self.out,
                        SetForegroundColor(term_color(*color)),
                        Print('o'),
                        ResetColor
                    )?,
                    None => queue!(self.out, Print(' '))?,
                }
            }
        }
        queue!(self.out, EndSynchronizedUpdate)?;
        self.out.flush()
    }

    fn write_plain(&mut self) -> io::Result<()> {
        for row in self.cells.chunks(self.width.max(1)) {
            let line: String = row
                .iter()
                .map(|cell| if cell.is_some() { 'o' } else { ' ' })
                .collect();
            writeln!(self.out, "{}", line)?;
        }
        self.out.flush()
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    type Error = io::Error;

    fn draw(&mut self, balls: &[BallView]) -> io::Result<()> {
        let t = self.frame as f32 * self.delta_t;
        self.camera.rotate(t);
        self.frame += 1;

        self.rasterize(balls);
        self.write_frame()
    }
}
