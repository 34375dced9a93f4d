//! Tabel met ideale tegenover huidige maten.

use serde::Serialize;

use crate::model::{CurrentMeasurements, ProportionModel, Segment};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonRow {
    pub segment: Segment,
    pub ideal: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<f64>,
    /// `current - ideal`, alleen als er een huidige maat is.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difference: Option<f64>,
}

/// Eén rij per segment, in de vaste segmentvolgorde. Segmenten zonder meting
/// krijgen een lege huidige waarde.
#[must_use]
pub fn compare(ideal: &ProportionModel, current: Option<&CurrentMeasurements>) -> Vec<ComparisonRow> {
    ideal
        .segments()
        .map(|(segment, ideal_value)| {
            let current_value = current.and_then(|measurements| measurements.get(segment));
            ComparisonRow {
                segment,
                ideal: ideal_value,
                current: current_value,
                difference: current_value.map(|value| value - ideal_value),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::compare;
    use crate::model::{CurrentMeasurements, ProportionModel, Segment};

    #[test]
    fn rows_without_current_have_no_difference() {
        let rows = compare(&ProportionModel::ideal(8.0), None);
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0].segment, Segment::HeadRadius);
        assert!(rows.iter().all(|row| row.current.is_none() && row.difference.is_none()));
    }

    #[test]
    fn difference_is_current_minus_ideal() {
        let ideal = ProportionModel::ideal(8.0);
        let current: CurrentMeasurements = [(Segment::WaistWidth, 44.0)].into_iter().collect();
        let rows = compare(&ideal, Some(&current));
        let waist = rows
            .iter()
            .find(|row| row.segment == Segment::WaistWidth)
            .expect("waist row");
        assert_eq!(waist.ideal, 40.0);
        assert_eq!(waist.current, Some(44.0));
        assert_eq!(waist.difference, Some(4.0));
    }

    #[test]
    fn single_measurement_leaves_other_rows_blank() {
        let ideal = ProportionModel::ideal(8.0);
        let current: CurrentMeasurements = [(Segment::WaistWidth, 44.0)].into_iter().collect();
        for row in compare(&ideal, Some(&current)) {
            if row.segment == Segment::WaistWidth {
                continue;
            }
            assert_eq!(row.current, None, "{}", row.segment);
            assert_eq!(row.difference, None, "{}", row.segment);
        }
    }
}
