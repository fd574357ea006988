//! Line grouping for positioned text
//!
//! Recognition engines return words or chunks with a bounding quadrilateral.
//! Receipts are read line by line, so fragments are clustered by vertical
//! centre and joined left to right.

use serde::{Deserialize, Serialize};

/// Height used when no fragment has a measurable height
const FALLBACK_HEIGHT: f64 = 12.0;

/// Fragments whose centres are within this many median heights of a line's
/// first fragment belong to that line
const LINE_TOLERANCE: f64 = 1.6;

/// A piece of recognised text with its bounding box
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextFragment {
    /// Corners in reading order: top-left, top-right, bottom-right, bottom-left
    pub corners: [(f64, f64); 4],
    pub text: String,
    #[serde(default)]
    pub confidence: f64,
}

impl TextFragment {
    pub fn new(corners: [(f64, f64); 4], text: impl Into<String>) -> Self {
        Self {
            corners,
            text: text.into(),
            confidence: 1.0,
        }
    }

    fn center(&self) -> (f64, f64) {
        let (sx, sy) = self
            .corners
            .iter()
            .fold((0.0, 0.0), |(sx, sy), (x, y)| (sx + x, sy + y));
        (sx / 4.0, sy / 4.0)
    }

    /// Distance between the top-right and bottom-right corners
    fn height(&self) -> f64 {
        (self.corners[2].1 - self.corners[1].1).abs()
    }
}

struct Placed<'a> {
    y: f64,
    x: f64,
    text: &'a str,
}

/// Groups fragments into text lines, top to bottom
pub fn group_into_lines(fragments: &[TextFragment]) -> Vec<String> {
    if fragments.is_empty() {
        return Vec::new();
    }

    let threshold = median(fragments.iter().map(TextFragment::height).collect())
        .unwrap_or(FALLBACK_HEIGHT)
        * LINE_TOLERANCE;

    let mut placed: Vec<Placed<'_>> = fragments
        .iter()
        .map(|f| {
            let (x, y) = f.center();
            Placed { y, x, text: &f.text }
        })
        .collect();
    placed.sort_by(|a, b| a.y.total_cmp(&b.y).then(a.x.total_cmp(&b.x)));

    let mut lines: Vec<Vec<Placed<'_>>> = Vec::new();
    for fragment in placed {
        match lines.last_mut() {
            Some(line) if (fragment.y - line[0].y).abs() <= threshold => line.push(fragment),
            _ => lines.push(vec![fragment]),
        }
    }

    lines
        .into_iter()
        .map(|mut line| {
            line.sort_by(|a, b| a.x.total_cmp(&b.x));
            line.iter().map(|p| p.text).collect::<Vec<_>>().join(" ")
        })
        .collect()
}

fn median(mut values: Vec<f64>) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(f64::total_cmp);
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        Some((values[mid - 1] + values[mid]) / 2.0)
    } else {
        Some(values[mid])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(x: f64, y: f64, text: &str) -> TextFragment {
        let (w, h) = (40.0, 10.0);
        TextFragment::new([(x, y), (x + w, y), (x + w, y + h), (x, y + h)], text)
    }

    #[test]
    fn test_groups_by_row_and_orders_by_column() {
        let fragments = vec![
            word(200.0, 51.0, "18.99"),
            word(0.0, 50.0, "Margherita"),
            word(60.0, 49.0, "Pizza"),
            word(0.0, 90.0, "Total"),
            word(200.0, 91.0, "34.32"),
        ];

        assert_eq!(
            group_into_lines(&fragments),
            vec!["Margherita Pizza 18.99".to_string(), "Total 34.32".to_string()]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(group_into_lines(&[]).is_empty());
    }

    #[test]
    fn test_median() {
        assert_eq!(median(vec![3.0, 1.0, 2.0]), Some(2.0));
        assert_eq!(median(vec![4.0, 1.0, 3.0, 2.0]), Some(2.5));
        assert_eq!(median(Vec::new()), None);
    }
}
