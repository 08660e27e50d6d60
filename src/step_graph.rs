use std::io::{self, Write};

use colored::{ColoredString, Colorize};
use sort_it_out::Step;

/// Bar-graph renderer for one history step. Each frame is composed into a
/// single buffer and printed at once to avoid flickering.
pub struct StepGraph {
    pub title: String,
    pub complexity_line: String,
    pub max_value: u32,
}

const HEIGHT: u32 = 20;

impl StepGraph {
    pub fn new(title: &str, complexity_line: &str, values: &[u32]) -> Self {
        StepGraph {
            title: title.to_string(),
            complexity_line: complexity_line.to_string(),
            max_value: values.iter().copied().max().unwrap_or(1).max(1),
        }
    }

    /// One color per highlight role, in the same precedence the step fields
    /// are meant to be read: auxiliary tag, comparison, swap, shift source,
    /// shift destination, sorted.
    fn style_bar(step: &Step, x: usize, symbol: &str) -> ColoredString {
        if step.auxiliary.iter().any(|tag| tag.index == x) {
            symbol.magenta()
        } else if step.comparing.contains(&x) {
            symbol.bright_yellow()
        } else if step.swapping.contains(&x) {
            symbol.red()
        } else if step.shifting.map_or(false, |s| s.from == x) {
            symbol.bright_magenta()
        } else if step.shifting.map_or(false, |s| s.to == x) {
            symbol.cyan()
        } else if step.sorted.contains(&x) {
            symbol.green()
        } else {
            symbol.white()
        }
    }

    fn bar_height(&self, value: u32) -> u32 {
        // Scale into the fixed row count, rounding up so 1 still shows.
        (value * HEIGHT + self.max_value - 1) / self.max_value
    }

    pub fn display_step(&self, step: &Step, index: usize, total: usize) {
        let mut buffer = String::new();
        // Hide the cursor to avoid flickering
        buffer.push_str("\x1B[?25l");
        // Move cursor to the top-left
        buffer.push_str("\x1B[H");
        // Clear the screen from the cursor to the end of the screen
        buffer.push_str("\x1B[J");

        buffer.push_str(&format!("{}\r\n\r\n", self.title.bold()));

        for y in (1..=HEIGHT).rev() {
            for (x, &value) in step.array.iter().enumerate() {
                let symbol = if self.bar_height(value) >= y {
                    "[x]"
                } else {
                    "   "
                };
                buffer += &format!("{}", Self::style_bar(step, x, symbol));
            }
            buffer.push_str("\r\n");
        }
        for &value in &step.array {
            buffer += &format!("{value:^3}");
        }
        buffer.push_str("\r\n\r\n");

        buffer += &format!("{}\r\n", step.description);
        buffer += &format!("Step: {} / {}\r\n", index, total.saturating_sub(1));
        buffer += &format!("{}\r\n", self.complexity_line);
        buffer += &format!(
            "{}\r\n",
            "space play/pause   arrows or n/p step   r reset   +/- speed   q quit".dimmed()
        );

        // Show the cursor again
        buffer.push_str("\x1B[?25h");

        print!("{buffer}");
        let _ = io::stdout().flush();
    }
}
