use std::ops::Range;

use crate::figure::Line;

/// Fraction of the data span added above and below a data-driven axis.
pub const AXIS_PADDING: f64 = 0.05;

/// y range covering every point of `lines`, padded on both sides.
///
/// A flat range is widened by 0.5 each way and an empty one becomes `0..1`, so
/// the resulting axis is never degenerate.
pub fn value_range(lines: &[Line]) -> Range<f64> {
    let (min, max) = lines
        .iter()
        .flat_map(|line| line.points.iter().map(|&(_, y)| y))
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), y| {
            (lo.min(y), hi.max(y))
        });

    if min > max {
        return 0.0..1.0;
    }
    let span = max - min;
    if span <= f64::EPSILON * max.abs().max(1.0) {
        return (min - 0.5)..(max + 0.5);
    }
    (min - span * AXIS_PADDING)..(max + span * AXIS_PADDING)
}

/// Turns fractions into percentages.
pub fn to_percent(values: &[f64]) -> impl Iterator<Item = f64> + '_ {
    values.iter().map(|v| v * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn line(values: &[f64]) -> Line {
        Line {
            label: "l".into(),
            points: values.iter().copied().enumerate().collect(),
        }
    }

    #[test]
    fn empty_lines_fall_back_to_unit_range() {
        assert_eq!(value_range(&[]), 0.0..1.0);
        assert_eq!(value_range(&[line(&[])]), 0.0..1.0);
    }

    #[test]
    fn flat_line_is_widened() {
        let range = value_range(&[line(&[2.0, 2.0, 2.0])]);
        assert_relative_eq!(range.start, 1.5);
        assert_relative_eq!(range.end, 2.5);
    }

    #[test]
    fn range_spans_all_lines_with_padding() {
        let range = value_range(&[line(&[0.0, 1.0]), line(&[-1.0, 0.5])]);
        assert_relative_eq!(range.start, -1.1);
        assert_relative_eq!(range.end, 1.1);
    }

    #[test]
    fn percent_scales_by_hundred() {
        let scaled: Vec<f64> = to_percent(&[0.0, 0.25, 1.0]).collect();
        assert_eq!(scaled, vec![0.0, 25.0, 100.0]);
    }
}
