// src/checker/progress.rs
// =============================================================================
// Progress reporting for the liveness counter.
//
// Probing links is slow (one network round-trip each), so we show a bar:
//
//     Progress on https://example.com/ : [██████......] 6/12
//
// The counter only talks to the ProgressObserver trait. That keeps the
// rendering out of the counting logic, and lets tests plug in NoProgress
// (or a recorder) instead of writing escape-free junk to stdout.
// =============================================================================

use std::io::{self, Write};

/// Receives one callback per unit of work done by the liveness counter
pub trait ProgressObserver {
    /// Called once before the first link is probed
    fn start(&mut self, label: &str, total: usize);
    /// Called after each link is probed, `done` counts from 1
    fn advance(&mut self, done: usize, total: usize);
    /// Called once after the last link
    fn finish(&mut self);
}

// Lets the driver pick an observer at runtime (bar or nothing)
impl<T: ProgressObserver + ?Sized> ProgressObserver for Box<T> {
    fn start(&mut self, label: &str, total: usize) {
        (**self).start(label, total)
    }
    fn advance(&mut self, done: usize, total: usize) {
        (**self).advance(done, total)
    }
    fn finish(&mut self) {
        (**self).finish()
    }
}

/// Observer that ignores everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn start(&mut self, _label: &str, _total: usize) {}
    fn advance(&mut self, _done: usize, _total: usize) {}
    fn finish(&mut self) {}
}

/// Fixed-width text bar redrawn in place with a carriage return
pub struct ProgressBar<W: Write> {
    out: W,
    width: usize,
    label: String,
}

impl ProgressBar<io::Stdout> {
    pub fn stdout(width: usize) -> Self {
        Self::new(io::stdout(), width)
    }
}

impl<W: Write> ProgressBar<W> {
    pub fn new(out: W, width: usize) -> Self {
        Self {
            out,
            width,
            label: String::new(),
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    // Write errors are ignored: a broken terminal must never change the count
    fn draw(&mut self, done: usize, total: usize) {
        let frame = render_frame(&self.label, self.width, done, total);
        let _ = write!(self.out, "{}\r", frame);
        let _ = self.out.flush();
    }
}

impl<W: Write> ProgressObserver for ProgressBar<W> {
    fn start(&mut self, label: &str, total: usize) {
        self.label = label.to_string();
        self.draw(0, total);
    }

    fn advance(&mut self, done: usize, total: usize) {
        self.draw(done, total);
    }

    fn finish(&mut self) {
        // Blank out the bar so the next line starts clean
        let blank = " ".repeat(self.width * 3 / 2);
        let _ = write!(self.out, "{}\r", blank);
        let _ = self.out.flush();
    }
}

// Builds one frame of the bar, without the trailing carriage return
fn render_frame(label: &str, width: usize, done: usize, total: usize) -> String {
    let filled = if total == 0 { 0 } else { width * done / total };
    format!(
        "{}[{}{}] {}/{}",
        label,
        "█".repeat(filled),
        ".".repeat(width - filled),
        done,
        total
    )
}
