//! Formatting helpers shared by the terminal views

/// Format a category share to one decimal place
pub fn format_percentage(pct: f64) -> String {
    format!("{:.1}%", pct)
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Build a bar from consecutive segments, each drawn with its own glyph
///
/// Segment edges are rounded from the running total so the bar length
/// matches `format_bar` for the same overall value.
pub fn format_stacked_bar(segments: &[(char, f64)], max_value: f64, width: usize) -> String {
    if max_value <= 0.0 {
        return " ".repeat(width);
    }

    let scale = |value: f64| (((value / max_value) * width as f64).round() as usize).min(width);

    let mut bar = String::with_capacity(width * 3);
    let mut running = 0.0;
    let mut drawn = 0;
    for &(glyph, value) in segments {
        if value <= 0.0 {
            continue;
        }
        running += value;
        let edge = scale(running);
        for _ in drawn..edge {
            bar.push(glyph);
        }
        drawn = drawn.max(edge);
    }

    bar.extend(std::iter::repeat(' ').take(width - drawn));
    bar
}

/// Format a section title with an underline
pub fn format_header(title: &str) -> String {
    format!("{}\n{}\n", title, separator(title.chars().count()))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.0), "0.0%");
        assert_eq!(format_percentage(33.333), "33.3%");
        assert_eq!(format_percentage(100.0), "100.0%");
    }

    #[test]
    fn test_format_bar() {
        let bar = format_bar(50.0, 100.0, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(format_bar(0.0, 100.0, 4), "    ");
    }

    #[test]
    fn test_stacked_bar() {
        let bar = format_stacked_bar(&[('#', 30.0), ('=', 0.0), ('*', 20.0)], 100.0, 10);
        assert_eq!(bar, "###**     ");

        let full = format_stacked_bar(&[('a', 1.0), ('b', 1.0), ('c', 1.0)], 3.0, 10);
        assert_eq!(full.chars().count(), 10);
        assert!(!full.contains(' '));

        assert_eq!(format_stacked_bar(&[('a', 1.0)], 0.0, 3), "   ");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello World", 5), "He...");
        assert_eq!(truncate("Hi", 5), "Hi");
        assert_eq!(truncate("₹₹₹₹₹₹", 5), "₹₹...");
    }

    #[test]
    fn test_header() {
        assert_eq!(format_header("Totals"), "Totals\n──────\n");
    }
}
