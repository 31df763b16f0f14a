use crate::Walk;

pub fn total_distance(walks: &[Walk]) -> f64 {
    // Start from +0.0: an empty f64 sum is -0.0 and would print as "-0"
    walks.iter().fold(0., |total, walk| total + walk.distance)
}

/// Totals shown in the global info panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalSummary {
    pub total_distance: f64,
    pub walk_count: usize,
}

impl GlobalSummary {
    pub fn new(walks: &[Walk]) -> Self {
        Self {
            total_distance: total_distance(walks),
            walk_count: walks.len(),
        }
    }

    pub fn line(&self) -> String {
        format!("{} km on {} walks", self.total_distance, self.walk_count)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn walk(distance: f64) -> Walk {
        Walk::new(
            format!("{distance} km"),
            NaiveDate::from_ymd_opt(2017, 1, 1).unwrap(),
            distance,
            Vec::new(),
            Vec::new(),
        )
    }

    #[test]
    fn no_walks() {
        let summary = GlobalSummary::new(&[]);
        assert_eq!(summary.total_distance, 0.);
        assert!(summary.total_distance.is_sign_positive());
        assert_eq!(summary.walk_count, 0);
        assert_eq!(summary.line(), "0 km on 0 walks");
    }

    #[test]
    fn sums_distances() {
        let walks = vec![walk(3.), walk(5.), walk(2.)];
        assert_eq!(total_distance(&walks), 10.);
        assert_eq!(GlobalSummary::new(&walks).line(), "10 km on 3 walks");
    }

    #[test]
    fn keeps_fractions() {
        let walks = vec![walk(3.5), walk(1.)];
        assert_eq!(GlobalSummary::new(&walks).line(), "4.5 km on 2 walks");
    }
}
