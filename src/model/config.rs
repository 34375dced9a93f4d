//! Configuratie van de verhoudingsconstanten.
//!
//! De zes vermenigvuldigers zijn gebundeld in [`ProportionConfig`] zodat ze
//! los van de rendercode gekalibreerd en getest kunnen worden. Een configuratie
//! kan worden overschreven met een klein XML-document:
//!
//! ```xml
//! <proportions head="0.6" shoulder="7" waist="5" torso="7.5" leg="10" arm="9"/>
//! ```
//!
//! Ontbrekende attributen houden hun standaardwaarde.

use quick_xml::de::from_str;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::proportion::Segment;

/// Fouten bij het laden of valideren van een configuratie.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Het XML-document kon niet gede-serialiseerd worden.
    #[error("XML parsefout: {0}")]
    Xml(#[from] quick_xml::DeError),
    /// Het document heeft niet `<proportions>` als root.
    #[error("onbekende root `<{0}>`: verwacht <proportions>")]
    UnknownRoot(String),
    /// Een constante is niet positief of niet eindig.
    #[error("ongeldige constante voor {segment}: {value}")]
    InvalidConstant { segment: Segment, value: f64 },
}

/// Vermenigvuldigers van polsmaat naar segmentlengte.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProportionConfig {
    pub head: f64,
    pub shoulder: f64,
    pub waist: f64,
    pub torso: f64,
    pub leg: f64,
    pub arm: f64,
}

impl Default for ProportionConfig {
    fn default() -> Self {
        Self {
            head: 0.6,
            shoulder: 7.0,
            waist: 5.0,
            torso: 7.5,
            leg: 10.0,
            arm: 9.0,
        }
    }
}

impl ProportionConfig {
    /// Geeft de constante voor een segment terug.
    #[must_use]
    pub fn factor(&self, segment: Segment) -> f64 {
        match segment {
            Segment::HeadRadius => self.head,
            Segment::ShoulderWidth => self.shoulder,
            Segment::WaistWidth => self.waist,
            Segment::TorsoHeight => self.torso,
            Segment::LegLength => self.leg,
            Segment::ArmLength => self.arm,
        }
    }

    /// Controleert dat alle constanten eindig en strikt positief zijn.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for segment in Segment::ALL {
            let value = self.factor(segment);
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidConstant { segment, value });
            }
        }
        Ok(())
    }

    /// Leest een `<proportions .../>` document en valideert het resultaat.
    pub fn from_xml(xml: &str) -> Result<Self, ConfigError> {
        let root = root_name(xml);
        if !root.eq_ignore_ascii_case("proportions") {
            return Err(ConfigError::UnknownRoot(root.to_owned()));
        }
        let document: XmlProportions = from_str(xml)?;
        let config = document.into_config();
        config.validate()?;
        log::debug!("verhoudingsconfiguratie geladen: {config:?}");
        Ok(config)
    }
}

fn root_name(input: &str) -> &str {
    let trimmed = input.trim_start_matches(|c: char| c == '\u{feff}' || c.is_whitespace());
    let trimmed = match trimmed.strip_prefix("<?xml") {
        Some(rest) => rest.find("?>").map_or(rest, |idx| rest[idx + 2..].trim_start()),
        None => trimmed,
    };
    let Some(tag) = trimmed.strip_prefix('<') else {
        return "";
    };
    let end = tag
        .find(|c: char| c.is_whitespace() || c == '/' || c == '>')
        .unwrap_or(tag.len());
    &tag[..end]
}

#[derive(Debug, Default, Deserialize)]
struct XmlProportions {
    #[serde(default, rename = "@head")]
    head: Option<f64>,
    #[serde(default, rename = "@shoulder")]
    shoulder: Option<f64>,
    #[serde(default, rename = "@waist")]
    waist: Option<f64>,
    #[serde(default, rename = "@torso")]
    torso: Option<f64>,
    #[serde(default, rename = "@leg")]
    leg: Option<f64>,
    #[serde(default, rename = "@arm")]
    arm: Option<f64>,
}

impl XmlProportions {
    fn into_config(self) -> ProportionConfig {
        let defaults = ProportionConfig::default();
        ProportionConfig {
            head: self.head.unwrap_or(defaults.head),
            shoulder: self.shoulder.unwrap_or(defaults.shoulder),
            waist: self.waist.unwrap_or(defaults.waist),
            torso: self.torso.unwrap_or(defaults.torso),
            leg: self.leg.unwrap_or(defaults.leg),
            arm: self.arm.unwrap_or(defaults.arm),
        }
    }
}
