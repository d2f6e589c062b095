//! Terminal renderer
//!
//! Draws grids and bar charts with ANSI colours between algorithm steps. The
//! renderer is the host side of the step protocol: it also enforces the
//! `--max-steps` budget and stops a run when the terminal goes away.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use algoviz_library::{
    Cancellation, CellStatus, Focus, Grid, PathfindingHost, SortingHost, StepControl,
};
use colored::{ColoredString, Colorize};

use crate::config::RenderConfig;

/// Height of the bar chart in terminal rows
const BAR_ROWS: usize = 16;
/// Widest bar chart in terminal columns; longer sequences are bucketed
const MAX_BAR_COLUMNS: usize = 120;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

fn paint_cell(status: CellStatus, focused: bool) -> ColoredString {
    let block = "██";
    let (r, g, b) = match status {
        CellStatus::Walkable => (220, 220, 220),
        CellStatus::Barrier => (31, 78, 110),
        CellStatus::Start => (248, 133, 244),
        CellStatus::End => (215, 17, 27),
        CellStatus::Frontier => (195, 255, 105),
        CellStatus::Visited => (255, 205, 102),
        CellStatus::Path => (89, 205, 225),
    };
    if focused {
        block.truecolor(r, g, b).on_black()
    } else {
        block.truecolor(r, g, b)
    }
}

/// One line per grid row, two columns per cell
pub fn render_grid(grid: &Grid, focus: Focus) -> String {
    let mut out = String::with_capacity(grid.len() * 24);
    for (index, cell) in grid.cells().iter().enumerate() {
        out.push_str(&paint_cell(cell.status(), focus.contains(index)).to_string());
        if (index + 1) % grid.size() == 0 {
            out.push('\n');
        }
    }
    out
}

/// Vertical bar chart, tallest bar at full height
///
/// Bars under `focus` are red (primary) and green (secondary); `sorted` paints
/// everything yellow.
pub fn render_bars(bars: &[u32], focus: Focus, sorted: bool) -> String {
    if bars.is_empty() {
        return String::new();
    }
    let bucket = bars.len().div_ceil(MAX_BAR_COLUMNS);
    let tallest = bars.iter().copied().max().unwrap_or(1).max(1) as usize;

    // (height in rows, focus colour) per column
    let columns: Vec<(usize, Option<bool>)> = bars
        .chunks(bucket)
        .enumerate()
        .map(|(column, chunk)| {
            let value = chunk.iter().copied().max().unwrap_or(0) as usize;
            let height = (value * BAR_ROWS).div_ceil(tallest);
            let range = column * bucket..column * bucket + chunk.len();
            let primary = focus.primary.is_some_and(|i| range.contains(&i));
            let secondary = focus.secondary.is_some_and(|i| range.contains(&i));
            let mark = if primary {
                Some(true)
            } else if secondary {
                Some(false)
            } else {
                None
            };
            (height, mark)
        })
        .collect();

    let mut out = String::new();
    for row in (1..=BAR_ROWS).rev() {
        for &(height, mark) in &columns {
            if height < row {
                out.push(' ');
                continue;
            }
            let bar = match (sorted, mark) {
                (true, _) => "█".yellow(),
                (false, Some(true)) => "█".red(),
                (false, Some(false)) => "█".green(),
                (false, None) => "█".white(),
            };
            out.push_str(&bar.to_string());
        }
        out.push('\n');
    }
    out
}

/// Host that draws each step to a terminal (or any writer)
pub struct TerminalRenderer<W: Write> {
    out: W,
    frame_delay: Duration,
    frames_every: usize,
    headless: bool,
    max_steps: Option<usize>,
    steps: usize,
    frames: usize,
    no_path: bool,
    error: Option<io::Error>,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, config: &RenderConfig) -> Self {
        Self {
            out,
            frame_delay: Duration::from_millis(config.frame_delay_ms),
            frames_every: config.frames_every.max(1),
            headless: config.headless,
            max_steps: None,
            steps: 0,
            frames: 0,
            no_path: false,
            error: None,
        }
    }

    /// Cancel the run after `limit` steps
    pub fn with_max_steps(mut self, limit: Option<usize>) -> Self {
        self.max_steps = limit;
        self
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn frames(&self) -> usize {
        self.frames
    }

    pub fn no_path_reported(&self) -> bool {
        self.no_path
    }

    /// First write error seen while drawing, if any
    pub fn take_error(&mut self) -> io::Result<()> {
        match self.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Count a step and decide whether it gets a frame
    fn tick(&mut self) -> bool {
        self.steps += 1;
        !self.headless && self.error.is_none() && self.steps % self.frames_every == 0
    }

    fn draw(&mut self, frame: &str, caption: &str) {
        let result = writeln!(self.out, "{}{}{}", CLEAR_SCREEN, frame, caption)
            .and_then(|()| self.out.flush());
        match result {
            Ok(()) => {
                self.frames += 1;
                if !self.frame_delay.is_zero() {
                    thread::sleep(self.frame_delay);
                }
            }
            Err(e) => {
                tracing::warn!("stopping run, terminal write failed: {}", e);
                self.error.get_or_insert(e);
            }
        }
    }

    fn caption(&self) -> String {
        format!("step {}", self.steps).dimmed().to_string()
    }
}

impl<W: Write> Cancellation for TerminalRenderer<W> {
    fn is_cancelled(&self) -> bool {
        self.error.is_some() || self.max_steps.is_some_and(|limit| self.steps >= limit)
    }
}

impl<W: Write> StepControl<Grid> for TerminalRenderer<W> {
    fn step(&mut self, grid: &Grid, focus: Focus) {
        if self.tick() {
            let frame = render_grid(grid, focus);
            let caption = self.caption();
            self.draw(&frame, &caption);
        }
    }
}

impl<W: Write> PathfindingHost for TerminalRenderer<W> {
    fn notify_no_path_found(&mut self) {
        self.no_path = true;
        tracing::warn!("No path found!");
    }
}

impl<W: Write> StepControl<[u32]> for TerminalRenderer<W> {
    fn step(&mut self, bars: &[u32], focus: Focus) {
        if self.tick() {
            let frame = render_bars(bars, focus, false);
            let caption = self.caption();
            self.draw(&frame, &caption);
        }
    }
}

impl<W: Write> SortingHost for TerminalRenderer<W> {
    fn on_sorted(&mut self, bars: &[u32]) {
        if !self.headless && self.error.is_none() {
            let frame = render_bars(bars, Focus::none(), true);
            let caption = format!("sorted in {} steps", self.steps).green().to_string();
            self.draw(&frame, &caption);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use algoviz_library::{PathfindingAlgorithm, Position, SortingAlgorithm};

    fn config(frames_every: usize, headless: bool) -> RenderConfig {
        RenderConfig {
            frame_delay_ms: 0,
            frames_every,
            headless,
        }
    }

    #[test]
    fn test_grid_has_one_line_per_row() {
        let grid = Grid::with_endpoints(4, Position::new(0, 0), Position::new(3, 3)).unwrap();
        let text = render_grid(&grid, Focus::none());
        assert_eq!(text.lines().count(), 4);
        assert_eq!(text.matches("██").count(), 16);
    }

    #[test]
    fn test_bars_scale_to_height() {
        let text = render_bars(&[1, 2, 3, 4], Focus::pair(0, 3), false);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), BAR_ROWS);
        // only the tallest bar reaches the top row
        assert_eq!(lines[0].matches('█').count(), 1);
        assert_eq!(lines[BAR_ROWS - 1].matches('█').count(), 4);
        assert!(render_bars(&[], Focus::none(), true).is_empty());
    }

    #[test]
    fn test_long_sequences_are_bucketed() {
        let bars: Vec<u32> = (1..=500).collect();
        let text = render_bars(&bars, Focus::none(), false);
        let bottom = text.lines().last().unwrap();
        assert!(bottom.matches('█').count() <= MAX_BAR_COLUMNS);
    }

    #[test]
    fn test_frames_every_thins_output() {
        let mut renderer = TerminalRenderer::new(Vec::new(), &config(5, false));
        let mut bars: Vec<u32> = (1..=30).rev().collect();
        SortingAlgorithm::Insertion.run(&mut bars, &mut renderer);

        assert_eq!(renderer.frames(), renderer.steps() / 5);
        let output = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(output.matches(CLEAR_SCREEN).count(), 435 / 5);
    }

    #[test]
    fn test_headless_draws_nothing() {
        let mut renderer = TerminalRenderer::new(Vec::new(), &config(1, true));
        let mut grid =
            Grid::with_endpoints(6, Position::new(0, 0), Position::new(5, 5)).unwrap();
        grid.compute_neighbors();
        let outcome = PathfindingAlgorithm::AStar.run(&mut grid, &mut renderer);

        assert!(outcome.found());
        assert!(renderer.steps() > 0);
        assert_eq!(renderer.frames(), 0);
        assert!(renderer.into_inner().is_empty());
    }

    #[test]
    fn test_max_steps_cancels() {
        let mut renderer =
            TerminalRenderer::new(io::sink(), &config(1, false)).with_max_steps(Some(7));
        let mut bars: Vec<u32> = (1..=50).rev().collect();
        let outcome = SortingAlgorithm::Bubble.run(&mut bars, &mut renderer);

        assert!(!outcome.is_completed());
        assert_eq!(renderer.steps(), 7);
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_error_stops_run() {
        let mut renderer = TerminalRenderer::new(BrokenPipe, &config(1, false));
        let mut bars: Vec<u32> = (1..=50).rev().collect();
        let outcome = SortingAlgorithm::Selection.run(&mut bars, &mut renderer);

        assert!(!outcome.is_completed());
        assert_eq!(renderer.steps(), 1);
        assert!(renderer.take_error().is_err());
        assert!(renderer.take_error().is_ok());
    }
}
