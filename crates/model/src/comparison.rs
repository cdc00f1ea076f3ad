//! Fitted versus observed comparison data.

use crate::FittedModel;

/// A point in (fitted, observed) space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Model estimate (x axis).
    pub fitted: f64,
    /// Realised excess return (y axis).
    pub observed: f64,
}

/// Scatter of fitted against observed excess returns with a 45° reference
/// segment, ready for any plotting backend.
#[derive(Debug, Clone, PartialEq)]
pub struct FitComparison {
    /// Chart title.
    pub title: String,
    /// One point per observation, in date order.
    pub points: Vec<Point>,
    /// Segment from (min fitted, min fitted) to (max fitted, max fitted).
    pub reference: (Point, Point),
}

impl FitComparison {
    /// Axis label for fitted values.
    pub const X_LABEL: &'static str = "Fitted";
    /// Axis label for observed values.
    pub const Y_LABEL: &'static str = "Observed";

    /// Build the comparison for a fitted model.
    #[must_use]
    pub fn new(model: &FittedModel) -> Self {
        let points: Vec<Point> = model
            .fitted()
            .iter()
            .zip(model.observed.iter())
            .map(|(&fitted, &observed)| Point { fitted, observed })
            .collect();

        let (lo, hi) = model
            .fitted()
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));

        Self {
            title: format!("Fama-French for {}", model.symbol),
            points,
            reference: (Point { fitted: lo, observed: lo }, Point { fitted: hi, observed: hi }),
        }
    }
}
