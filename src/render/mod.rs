//! Tekenopdrachten voor het silhouet en de SVG-uitvoer daarvan.
//!
//! De renderer is een pure projectie: een [`ProportionModel`](crate::model::ProportionModel)
//! gaat erin, een [`Figure`] met getekende vormen komt eruit. Er blijft geen
//! toestand achter tussen twee aanroepen; elke aanroep tekent alles opnieuw.

pub mod figure;
pub mod hover;
pub mod svg;

use serde::Serialize;
use thiserror::Error;

pub use figure::{FigureLayout, render_comparison, render_figure, render_state};
pub use hover::{HoverAnimation, HoverFrame};
pub use svg::{SvgStyle, to_svg};

/// Fouten van de tekenbackend.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Het tekenoppervlak heeft geen bruikbare afmetingen.
    #[error("ongeldig tekenoppervlak {width}x{height}")]
    EmptyLayout { width: f64, height: f64 },
    /// Schrijven van het SVG-document is mislukt.
    #[error("SVG schrijffout: {0}")]
    Xml(String),
}

/// Welk lichaamsdeel een vorm voorstelt. Bepaalt ook de tekenvolgorde.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Part {
    Head,
    Torso,
    LeftLeg,
    RightLeg,
    LeftArm,
    RightArm,
    WaistMarker,
    WaistLabel,
}

impl Part {
    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Head => "head",
            Self::Torso => "torso",
            Self::LeftLeg => "leg left",
            Self::RightLeg => "leg right",
            Self::LeftArm => "arm left",
            Self::RightArm => "arm right",
            Self::WaistMarker => "waist-marker",
            Self::WaistLabel => "waist-label",
        }
    }
}

/// Het silhouet waartoe een vorm behoort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Silhouette {
    Ideal,
    Actual,
}

impl Silhouette {
    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Ideal => "ideal",
            Self::Actual => "actual",
        }
    }
}

/// Een primitieve vorm in lokale coördinaten (oorsprong = hoofdmidden, y omlaag).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Shape {
    Circle {
        center: [f64; 2],
        radius: f64,
    },
    Polygon {
        points: Vec<[f64; 2]>,
    },
    Rect {
        origin: [f64; 2],
        width: f64,
        height: f64,
    },
    Ellipse {
        center: [f64; 2],
        radii: [f64; 2],
    },
    Text {
        position: [f64; 2],
        size: f64,
        text: String,
    },
}

/// Eén tekenopdracht.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawCommand {
    pub part: Part,
    pub silhouette: Silhouette,
    #[serde(flatten)]
    pub shape: Shape,
}

/// Resultaat van een render: ankerpunt, hover-zoom en vormen van achter naar voor.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Figure {
    pub width: f64,
    pub height: f64,
    pub anchor: [f64; 2],
    pub zoom: f64,
    pub scale: f64,
    pub commands: Vec<DrawCommand>,
}

impl Figure {
    /// Een leeg tekenoppervlak, gebruikt zolang er nog geen model is.
    #[must_use]
    pub fn empty(layout: &FigureLayout) -> Self {
        Self {
            width: layout.width,
            height: layout.height,
            anchor: [layout.width / 2.0, layout.margin],
            zoom: 1.0,
            scale: 0.0,
            commands: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Alle opdrachten voor een bepaald lichaamsdeel.
    pub fn part(&self, part: Part) -> impl Iterator<Item = &DrawCommand> + '_ {
        self.commands.iter().filter(move |command| command.part == part)
    }
}
