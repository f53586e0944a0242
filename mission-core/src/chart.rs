use crate::summary::ActivityPoint;

/// The four activity counters plotted as independent lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartSeries {
    Created,
    Joined,
    Completed,
    Active,
}

impl ChartSeries {
    pub const ALL: [ChartSeries; 4] = [
        ChartSeries::Created,
        ChartSeries::Joined,
        ChartSeries::Completed,
        ChartSeries::Active,
    ];

    pub fn value_of(self, point: &ActivityPoint) -> i64 {
        match self {
            ChartSeries::Created => point.created,
            ChartSeries::Joined => point.joined,
            ChartSeries::Completed => point.completed,
            ChartSeries::Active => point.active,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ChartSeries::Created => "Created",
            ChartSeries::Joined => "Joined",
            ChartSeries::Completed => "Completed",
            ChartSeries::Active => "Active",
        }
    }

    // Vertical nudge applied to zero-valued points so overlapping
    // flat lines stay distinguishable. Rendering-only.
    fn zero_nudge(self) -> f64 {
        match self {
            ChartSeries::Created => -3.0,
            ChartSeries::Active => -1.5,
            ChartSeries::Completed => 3.0,
            ChartSeries::Joined => 0.0,
        }
    }
}

/// A projected screen-space coordinate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
}

/// Logical canvas the trend chart projects into: fixed width and height
/// with uniform padding on all four sides.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartGeometry {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Default for ChartGeometry {
    fn default() -> Self {
        Self {
            width: 700.0,
            height: 320.0,
            padding: 40.0,
        }
    }
}

/// Top of the y axis: the largest counter across every series and point,
/// rounded up so `max + 5` lands on a multiple of 5. All-zero data and an
/// empty sequence both floor to 10, keeping one gridline of headroom above
/// the tallest line and round-number labels.
pub fn max_value(points: &[ActivityPoint]) -> i64 {
    if points.is_empty() {
        return 10;
    }
    let observed = points
        .iter()
        .flat_map(|p| [p.created, p.joined, p.completed, p.active])
        .max()
        .unwrap_or(0);
    let base = if observed == 0 { 5 } else { observed };
    ((base as u64 + 5).div_ceil(5) * 5) as i64
}

/// Gridline labels from 0 to `max_value` in steps of 5, largest first
/// (the chart renders top-down).
pub fn y_axis_labels(points: &[ActivityPoint]) -> Vec<i64> {
    let mut labels: Vec<i64> = (0..=max_value(points)).step_by(5).collect();
    labels.reverse();
    labels
}

impl ChartGeometry {
    /// Maps one sample onto the canvas. `x` interpolates across the padded
    /// width by index; `y` scales the value onto the inverted padded height.
    /// Zero values get the series' fixed nudge so flat lines do not overlap;
    /// the stored value is untouched.
    pub fn project(
        &self,
        index: usize,
        value: i64,
        points: &[ActivityPoint],
        series: Option<ChartSeries>,
    ) -> ChartPoint {
        debug_assert!(points.is_empty() || index < points.len());

        let count = if points.is_empty() { 12 } else { points.len() };
        let span = count.saturating_sub(1).max(1) as f64;
        let x = self.padding + (index as f64 / span) * (self.width - 2.0 * self.padding);

        let max = max_value(points) as f64;
        let usable = self.height - 2.0 * self.padding;
        let mut y = (self.height - self.padding) - (value as f64 / max) * usable;
        if value == 0 {
            if let Some(series) = series {
                y += series.zero_nudge();
            }
        }

        ChartPoint { x, y }
    }

    /// Every sample of one series, projected in order. Used for point markers.
    pub fn series_points(&self, points: &[ActivityPoint], series: ChartSeries) -> Vec<ChartPoint> {
        points
            .iter()
            .enumerate()
            .map(|(i, p)| self.project(i, series.value_of(p), points, Some(series)))
            .collect()
    }

    /// A cubic-Bezier path through every projected point of the series.
    /// Each segment's control points sit at the horizontal midpoint of the
    /// pair while keeping their own anchor's y, which eases horizontally but
    /// stays linear vertically per segment. Empty below 2 points.
    pub fn smooth_path(&self, points: &[ActivityPoint], series: ChartSeries) -> String {
        if points.len() < 2 {
            return String::new();
        }

        let projected = self.series_points(points, series);
        let mut path = format!("M {} {}", projected[0].x, projected[0].y);
        for pair in projected.windows(2) {
            let (p0, p1) = (pair[0], pair[1]);
            let mid = (p0.x + p1.x) / 2.0;
            path.push_str(&format!(
                " C {} {}, {} {}, {} {}",
                mid, p0.y, mid, p1.y, p1.x, p1.y
            ));
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(created: i64, joined: i64, completed: i64, active: i64) -> ActivityPoint {
        ActivityPoint {
            date: "2026-01-01".into(),
            created,
            joined,
            completed,
            active,
        }
    }

    #[test]
    fn max_value_of_empty_is_ten() {
        assert_eq!(max_value(&[]), 10);
    }

    #[test]
    fn max_value_of_all_zero_points_is_ten() {
        let points = vec![point(0, 0, 0, 0); 3];
        assert_eq!(max_value(&points), 10);
    }

    #[test]
    fn max_value_rounds_past_observed_max() {
        let points = [point(7, 1, 0, 2)];
        assert_eq!(max_value(&points), 15);

        let points = [point(10, 0, 0, 0)];
        assert_eq!(max_value(&points), 15);

        let points = [point(3, 14, 9, 2), point(1, 1, 1, 1)];
        assert_eq!(max_value(&points), 20);
    }

    #[test]
    fn max_value_is_bounded_multiple_of_five() {
        for observed in 1..60 {
            let points = [point(observed, 0, 0, 0)];
            let max = max_value(&points);
            assert_eq!(max % 5, 0);
            assert!(max >= observed);
            assert!(max < observed + 10);
        }
    }

    #[test]
    fn y_axis_labels_descend_from_max_to_zero() {
        let points = [point(12, 0, 0, 0)];
        let labels = y_axis_labels(&points);
        assert_eq!(labels.first(), Some(&max_value(&points)));
        assert_eq!(labels.last(), Some(&0));
        for pair in labels.windows(2) {
            assert_eq!(pair[0] - pair[1], 5);
        }
    }

    #[test]
    fn project_spreads_x_across_padded_width() {
        let geo = ChartGeometry::default();
        let points = vec![point(1, 2, 3, 4); 5];

        let first = geo.project(0, 1, &points, None);
        let last = geo.project(4, 1, &points, None);
        assert_eq!(first.x, geo.padding);
        assert_eq!(last.x, geo.width - geo.padding);
    }

    #[test]
    fn project_single_point_is_still_computable() {
        let geo = ChartGeometry::default();
        let points = [point(2, 0, 0, 0)];
        let projected = geo.project(0, 2, &points, Some(ChartSeries::Created));
        assert!(projected.x.is_finite());
        assert!(projected.y.is_finite());
    }

    #[test]
    fn zero_nudges_split_created_and_completed_by_six() {
        let geo = ChartGeometry::default();
        let points = vec![point(0, 0, 0, 0); 3];

        let created = geo.project(1, 0, &points, Some(ChartSeries::Created));
        let completed = geo.project(1, 0, &points, Some(ChartSeries::Completed));
        let unnamed = geo.project(1, 0, &points, None);

        assert_eq!(completed.y - created.y, 6.0);
        assert_eq!(created.y - unnamed.y, -3.0);
        assert_eq!(completed.y - unnamed.y, 3.0);
    }

    #[test]
    fn nudge_only_applies_to_zero_values() {
        let geo = ChartGeometry::default();
        let points = [point(4, 4, 4, 4), point(4, 4, 4, 4)];
        let created = geo.project(0, 4, &points, Some(ChartSeries::Created));
        let completed = geo.project(0, 4, &points, Some(ChartSeries::Completed));
        assert_eq!(created.y, completed.y);
    }

    #[test]
    fn smooth_path_is_empty_below_two_points() {
        let geo = ChartGeometry::default();
        assert_eq!(geo.smooth_path(&[], ChartSeries::Created), "");
        assert_eq!(geo.smooth_path(&[point(1, 0, 0, 0)], ChartSeries::Created), "");
    }

    #[test]
    fn smooth_path_has_one_cubic_per_segment() {
        let geo = ChartGeometry::default();
        let points = vec![point(1, 2, 3, 4); 6];
        let path = geo.smooth_path(&points, ChartSeries::Joined);

        assert!(path.starts_with("M "));
        assert_eq!(path.matches(" C ").count(), points.len() - 1);
    }

    #[test]
    fn smooth_path_starts_at_first_projection() {
        let geo = ChartGeometry::default();
        let points = [point(0, 3, 1, 0), point(2, 5, 0, 1)];
        let first = geo.project(0, 3, &points, Some(ChartSeries::Joined));
        let path = geo.smooth_path(&points, ChartSeries::Joined);
        assert!(path.starts_with(&format!("M {} {}", first.x, first.y)));
    }
}
