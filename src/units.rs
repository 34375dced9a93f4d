//! Omzetting van ingevoerde maten naar inches.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Vaste omrekenfactor van centimeters naar inches.
pub const CM_TO_INCH: f64 = 0.393_701;

/// Ondersteunde eenheden voor de polsmaat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Inches,
    Centimeters,
}

impl Unit {
    /// Korte label zoals die in het formulier getoond wordt.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Inches => "in",
            Self::Centimeters => "cm",
        }
    }

    /// Zet een waarde in deze eenheid om naar inches.
    #[must_use]
    pub fn to_inches(self, value: f64) -> f64 {
        match self {
            Self::Inches => value,
            Self::Centimeters => value * CM_TO_INCH,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Unit {
    type Err = MeasurementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "in" | "inch" | "inches" | "\"" => Ok(Self::Inches),
            "cm" | "centimeter" | "centimeters" | "centimetre" | "centimetres" => {
                Ok(Self::Centimeters)
            }
            _ => Err(MeasurementError::UnsupportedUnit(s.to_owned())),
        }
    }
}

/// Fouten bij het valideren van een ingevoerde maat.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeasurementError {
    /// Er is nog niets ingevoerd.
    #[error("er is geen maat ingevoerd")]
    Empty,
    /// De tekst is geen positief getal.
    #[error("ongeldige maat `{0}`: verwacht een positief getal")]
    InvalidMeasurement(String),
    /// De eenheid wordt niet ondersteund.
    #[error("niet-ondersteunde eenheid `{0}`")]
    UnsupportedUnit(String),
}

static NUMERIC_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)$").expect("numeric pattern compiles")
});

/// Valideert `raw` en geeft de maat in inches terug.
pub fn normalize(raw: &str, unit: Unit) -> Result<f64, MeasurementError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(MeasurementError::Empty);
    }
    if !NUMERIC_PATTERN.is_match(trimmed) {
        return Err(MeasurementError::InvalidMeasurement(trimmed.to_owned()));
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|_| MeasurementError::InvalidMeasurement(trimmed.to_owned()))?;
    if !value.is_finite() || value <= 0.0 {
        return Err(MeasurementError::InvalidMeasurement(trimmed.to_owned()));
    }

    Ok(unit.to_inches(value))
}

/// Variant van [`normalize`] waarbij de eenheid ook als tekst binnenkomt.
pub fn normalize_with_tag(raw: &str, unit_tag: &str) -> Result<f64, MeasurementError> {
    let unit = unit_tag.parse::<Unit>()?;
    normalize(raw, unit)
}

#[cfg(test)]
mod tests {
    use super::{MeasurementError, Unit, normalize, normalize_with_tag};

    #[test]
    fn rejects_empty_and_non_numeric_text() {
        assert_eq!(normalize("", Unit::Inches), Err(MeasurementError::Empty));
        assert_eq!(normalize("   ", Unit::Inches), Err(MeasurementError::Empty));
        assert!(matches!(
            normalize("abc", Unit::Inches),
            Err(MeasurementError::InvalidMeasurement(_))
        ));
        assert!(normalize("1e3", Unit::Inches).is_err());
        assert!(normalize("7.5.1", Unit::Inches).is_err());
    }

    #[test]
    fn rejects_negative_and_zero() {
        assert!(normalize("-3", Unit::Inches).is_err());
        assert!(normalize("0", Unit::Inches).is_err());
        assert!(normalize("0.000", Unit::Centimeters).is_err());
    }

    #[test]
    fn inches_pass_through() {
        assert_eq!(normalize("8", Unit::Inches), Ok(8.0));
        assert_eq!(normalize(" 6.25 ", Unit::Inches), Ok(6.25));
        assert_eq!(normalize(".5", Unit::Inches), Ok(0.5));
        assert_eq!(normalize("7.", Unit::Inches), Ok(7.0));
    }

    #[test]
    fn centimeters_are_converted() {
        let inches = normalize("20", Unit::Centimeters).expect("valid cm");
        assert!((inches - 7.874).abs() < 1e-3, "kreeg {inches}");
    }

    #[test]
    fn parses_unit_tags() {
        assert_eq!("in".parse::<Unit>(), Ok(Unit::Inches));
        assert_eq!(" CM ".parse::<Unit>(), Ok(Unit::Centimeters));
        assert_eq!(
            "mm".parse::<Unit>(),
            Err(MeasurementError::UnsupportedUnit("mm".to_owned()))
        );
        assert!(matches!(
            normalize_with_tag("8", "furlong"),
            Err(MeasurementError::UnsupportedUnit(_))
        ));
        assert_eq!(normalize_with_tag("8", "inches"), Ok(8.0));
    }
}
