//! Berekening van de ideale segmentlengtes.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::config::ProportionConfig;

/// De zes afgeleide lichaamsmaten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Segment {
    HeadRadius,
    ShoulderWidth,
    WaistWidth,
    TorsoHeight,
    LegLength,
    ArmLength,
}

impl Segment {
    /// Alle segmenten in vaste volgorde.
    pub const ALL: [Segment; 6] = [
        Segment::HeadRadius,
        Segment::ShoulderWidth,
        Segment::WaistWidth,
        Segment::TorsoHeight,
        Segment::LegLength,
        Segment::ArmLength,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::HeadRadius => "Head radius",
            Self::ShoulderWidth => "Shoulder width",
            Self::WaistWidth => "Waist width",
            Self::TorsoHeight => "Torso height",
            Self::LegLength => "Leg length",
            Self::ArmLength => "Arm length",
        }
    }

    /// Zoekt een segment op sleutel (`waistWidth`, `waist_width`) of naam.
    #[must_use]
    pub fn lookup(key: &str) -> Option<Self> {
        let normalized: String = key
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        Self::ALL.into_iter().find(|segment| {
            let name: String = segment
                .name()
                .chars()
                .filter(|c| c.is_ascii_alphanumeric())
                .map(|c| c.to_ascii_lowercase())
                .collect();
            name == normalized
        })
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Segmentlengtes in inches, allemaal lineair in de polsmaat.
///
/// De velden zijn niet los te zetten; een model ontstaat altijd via
/// [`ProportionModel::compute`] of, voor gemeten waarden,
/// [`ProportionModel::from_segments`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProportionModel {
    head_radius: f64,
    shoulder_width: f64,
    waist_width: f64,
    torso_height: f64,
    leg_length: f64,
    arm_length: f64,
}

impl ProportionModel {
    /// Leidt het model af van een polsmaat in inches.
    ///
    /// Negatieve of niet-eindige invoer wordt als `0` behandeld, wat een
    /// figuur zonder afmetingen oplevert.
    #[must_use]
    pub fn compute(wrist_inches: f64, config: &ProportionConfig) -> Self {
        let wrist = if wrist_inches.is_finite() {
            wrist_inches.max(0.0)
        } else {
            0.0
        };
        Self {
            head_radius: wrist * config.head,
            shoulder_width: wrist * config.shoulder,
            waist_width: wrist * config.waist,
            torso_height: wrist * config.torso,
            leg_length: wrist * config.leg,
            arm_length: wrist * config.arm,
        }
    }

    /// [`ProportionModel::compute`] met de standaardconstanten.
    #[must_use]
    pub fn ideal(wrist_inches: f64) -> Self {
        Self::compute(wrist_inches, &ProportionConfig::default())
    }

    /// Bouwt een model uit losse (gemeten) lengtes. Ontbrekende of negatieve
    /// waarden worden `0`.
    #[must_use]
    pub fn from_segments<I>(segments: I) -> Self
    where
        I: IntoIterator<Item = (Segment, f64)>,
    {
        let mut model = Self::default();
        for (segment, value) in segments {
            let value = if value.is_finite() { value.max(0.0) } else { 0.0 };
            *model.slot_mut(segment) = value;
        }
        model
    }

    #[must_use]
    pub fn head_radius(&self) -> f64 {
        self.head_radius
    }

    #[must_use]
    pub fn shoulder_width(&self) -> f64 {
        self.shoulder_width
    }

    #[must_use]
    pub fn waist_width(&self) -> f64 {
        self.waist_width
    }

    #[must_use]
    pub fn torso_height(&self) -> f64 {
        self.torso_height
    }

    #[must_use]
    pub fn leg_length(&self) -> f64 {
        self.leg_length
    }

    #[must_use]
    pub fn arm_length(&self) -> f64 {
        self.arm_length
    }

    #[must_use]
    pub fn get(&self, segment: Segment) -> f64 {
        match segment {
            Segment::HeadRadius => self.head_radius,
            Segment::ShoulderWidth => self.shoulder_width,
            Segment::WaistWidth => self.waist_width,
            Segment::TorsoHeight => self.torso_height,
            Segment::LegLength => self.leg_length,
            Segment::ArmLength => self.arm_length,
        }
    }

    /// Itereert `(segment, lengte)` in de volgorde van [`Segment::ALL`].
    pub fn segments(&self) -> impl Iterator<Item = (Segment, f64)> + '_ {
        Segment::ALL.into_iter().map(move |segment| (segment, self.get(segment)))
    }

    /// Totale hoogte van hoofd, romp en benen.
    #[must_use]
    pub fn standing_height(&self) -> f64 {
        self.head_radius * 2.0 + self.torso_height + self.leg_length
    }

    /// Hoogte van het hele silhouet; armen hangen vanaf de onderrand van de
    /// romp en kunnen langer zijn dan de benen.
    #[must_use]
    pub fn figure_height(&self) -> f64 {
        self.head_radius * 2.0 + self.torso_height + self.leg_length.max(self.arm_length)
    }

    /// Breedste horizontale maat van hoofd en romp.
    #[must_use]
    pub fn body_width(&self) -> f64 {
        self.shoulder_width
            .max(self.waist_width)
            .max(self.head_radius * 2.0)
    }

    fn slot_mut(&mut self, segment: Segment) -> &mut f64 {
        match segment {
            Segment::HeadRadius => &mut self.head_radius,
            Segment::ShoulderWidth => &mut self.shoulder_width,
            Segment::WaistWidth => &mut self.waist_width,
            Segment::TorsoHeight => &mut self.torso_height,
            Segment::LegLength => &mut self.leg_length,
            Segment::ArmLength => &mut self.arm_length,
        }
    }
}
