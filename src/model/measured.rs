//! Gemeten ("huidige") segmentlengtes, per segment optioneel.

use std::collections::BTreeMap;

use serde::Serialize;

use super::proportion::{ProportionModel, Segment};

/// Alleen daadwerkelijk opgegeven maten worden bewaard; een segment zonder
/// meting blijft leeg in plaats van `0`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CurrentMeasurements {
    values: BTreeMap<Segment, f64>,
}

impl CurrentMeasurements {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Legt een maat in inches vast. Negatieve of niet-eindige waarden worden
    /// genegeerd en geven `false` terug.
    pub fn set(&mut self, segment: Segment, inches: f64) -> bool {
        if !inches.is_finite() || inches < 0.0 {
            return false;
        }
        self.values.insert(segment, inches);
        true
    }

    pub fn remove(&mut self, segment: Segment) -> Option<f64> {
        self.values.remove(&segment)
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    #[must_use]
    pub fn get(&self, segment: Segment) -> Option<f64> {
        self.values.get(&segment).copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Het werkelijke silhouet: gemeten segmenten vervangen de ideale lengte,
    /// niet-gemeten segmenten houden de ideale lengte.
    #[must_use]
    pub fn overlay(&self, ideal: &ProportionModel) -> ProportionModel {
        ProportionModel::from_segments(
            ideal
                .segments()
                .map(|(segment, value)| (segment, self.get(segment).unwrap_or(value))),
        )
    }
}

impl FromIterator<(Segment, f64)> for CurrentMeasurements {
    fn from_iter<I: IntoIterator<Item = (Segment, f64)>>(iter: I) -> Self {
        let mut measurements = Self::new();
        for (segment, inches) in iter {
            measurements.set(segment, inches);
        }
        measurements
    }
}

#[cfg(test)]
mod tests {
    use super::CurrentMeasurements;
    use crate::model::{ProportionModel, Segment};

    #[test]
    fn unmeasured_segments_stay_empty() {
        let measurements: CurrentMeasurements = [(Segment::WaistWidth, 44.0)].into_iter().collect();
        assert_eq!(measurements.len(), 1);
        assert_eq!(measurements.get(Segment::WaistWidth), Some(44.0));
        assert_eq!(measurements.get(Segment::HeadRadius), None);
    }

    #[test]
    fn overlay_falls_back_to_ideal_lengths() {
        let ideal = ProportionModel::ideal(8.0);
        let measurements: CurrentMeasurements = [(Segment::WaistWidth, 44.0)].into_iter().collect();
        let actual = measurements.overlay(&ideal);
        assert_eq!(actual.waist_width(), 44.0);
        assert_eq!(actual.head_radius(), ideal.head_radius());
        assert_eq!(actual.leg_length(), ideal.leg_length());
    }

    #[test]
    fn rejects_invalid_lengths() {
        let mut measurements = CurrentMeasurements::new();
        assert!(!measurements.set(Segment::LegLength, -1.0));
        assert!(!measurements.set(Segment::LegLength, f64::NAN));
        assert!(measurements.is_empty());
        assert!(measurements.set(Segment::LegLength, 0.0));
        assert_eq!(measurements.remove(Segment::LegLength), Some(0.0));
    }
}
