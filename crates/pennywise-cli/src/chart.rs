use std::cmp;

use crate::output::format::{money, percent, rule};

const SHARE_TITLE: &str = "Expense Distribution by Category";
const MAGNITUDE_TITLE: &str = "Expenses by Category";
const SIDE_BY_SIDE_MIN_WIDTH: usize = 80;
const PANEL_GAP: usize = 4;
const MIN_BAR_WIDTH: usize = 4;
const BAR: char = '█';

/// Draws category series. Labels and values are parallel and equally long.
pub trait ChartRenderer {
    fn render(&self, labels: &[String], values: &[f64]) -> String;
}

/// Terminal renderer: a share-of-whole panel next to a magnitude panel.
#[derive(Debug, Clone, Copy)]
pub struct TextChartRenderer {
    width: usize,
}

impl TextChartRenderer {
    pub fn new(width: usize) -> Self {
        Self { width }
    }

    fn share_panel(&self, series: &[(&str, f64)], panel_width: usize) -> Vec<String> {
        let total = series.iter().map(|(_, value)| value).sum::<f64>();
        let suffixes = series
            .iter()
            .map(|(_, value)| percent(value / total * 100.0))
            .collect::<Vec<String>>();
        draw_panel(SHARE_TITLE, series, &suffixes, total, panel_width)
    }

    fn magnitude_panel(&self, series: &[(&str, f64)], panel_width: usize) -> Vec<String> {
        let largest = series
            .iter()
            .map(|(_, value)| *value)
            .fold(0.0_f64, f64::max);
        let suffixes = series
            .iter()
            .map(|(_, value)| money(*value))
            .collect::<Vec<String>>();
        draw_panel(MAGNITUDE_TITLE, series, &suffixes, largest, panel_width)
    }
}

impl ChartRenderer for TextChartRenderer {
    fn render(&self, labels: &[String], values: &[f64]) -> String {
        let series = labels
            .iter()
            .map(String::as_str)
            .zip(values.iter().copied())
            .filter(|(_, value)| *value > 0.0)
            .collect::<Vec<(&str, f64)>>();
        if series.is_empty() {
            return "No expenses to visualize.".to_string();
        }

        if self.width < SIDE_BY_SIDE_MIN_WIDTH {
            let mut lines = self.share_panel(&series, self.width);
            lines.push(String::new());
            lines.extend(self.magnitude_panel(&series, self.width));
            return lines.join("\n");
        }

        let panel_width = (self.width - PANEL_GAP) / 2;
        let left = self.share_panel(&series, panel_width);
        let right = self.magnitude_panel(&series, panel_width);
        let gap = " ".repeat(PANEL_GAP);

        (0..cmp::max(left.len(), right.len()))
            .map(|index| {
                let left_cell = left.get(index).map(String::as_str).unwrap_or_default();
                let right_cell = right.get(index).map(String::as_str).unwrap_or_default();
                format!("{left_cell:<panel_width$}{gap}{right_cell}")
                    .trim_end()
                    .to_string()
            })
            .collect::<Vec<String>>()
            .join("\n")
    }
}

fn draw_panel(
    title: &str,
    series: &[(&str, f64)],
    suffixes: &[String],
    scale: f64,
    panel_width: usize,
) -> Vec<String> {
    let label_width = series
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);
    let suffix_width = suffixes
        .iter()
        .map(|suffix| suffix.chars().count())
        .max()
        .unwrap_or(0);
    let bar_width = cmp::max(
        panel_width.saturating_sub(label_width + suffix_width + 4),
        MIN_BAR_WIDTH,
    );

    let mut lines = vec![title.to_string(), rule(cmp::min(panel_width, title.len()))];
    for ((label, value), suffix) in series.iter().zip(suffixes) {
        let bar = BAR.to_string().repeat(bar_length(*value, scale, bar_width));
        lines.push(format!(
            "{label:<label_width$}  {bar:<bar_width$}  {suffix:>suffix_width$}"
        ));
    }
    lines
}

/// Whole cells proportional to `value / scale`, never empty for a positive value.
fn bar_length(value: f64, scale: f64, bar_width: usize) -> usize {
    if scale <= 0.0 {
        return 0;
    }
    let cells = (value / scale * bar_width as f64).round() as usize;
    cells.clamp(1, bar_width)
}
