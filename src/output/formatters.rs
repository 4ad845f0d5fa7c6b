//! Formatting utilities for terminal output

const SPARK_LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a rate in [0, 1] as a bar
#[must_use]
pub fn rate_bar(rate: f64, width: usize) -> String {
    create_progress_bar(rate.clamp(0.0, 1.0), 1.0, width)
}

/// One block character per value, scaled to [0, 1]
#[must_use]
pub fn sparkline(values: &[f64]) -> String {
    let top = SPARK_LEVELS.len() - 1;
    values
        .iter()
        .map(|v| SPARK_LEVELS[((v.clamp(0.0, 1.0) * top as f64).round() as usize).min(top)])
        .collect()
}

/// Format a share as a percentage, treating an empty total as zero
#[must_use]
pub fn percent(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn rate_bar_clamps() {
        assert_eq!(rate_bar(1.5, 4), "████");
        assert_eq!(rate_bar(-1.0, 4), "░░░░");
    }

    #[test]
    fn sparkline_spans_levels() {
        assert_eq!(sparkline(&[0.0, 0.5, 1.0]), "▁▅█");
        assert_eq!(sparkline(&[]), "");
    }

    #[test]
    fn percent_of_empty_total() {
        assert_eq!(percent(3, 0), 0.0);
        assert_eq!(percent(1, 4), 25.0);
    }
}
