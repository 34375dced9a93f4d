//! Formuliertoestand en de overgangen daartussen.
//!
//! De toestand is onveranderlijk: elke gebeurtenis levert via [`update`] een
//! nieuwe [`FormState`] op. De renderer leest alleen uit de toestand.

use serde::Serialize;

use crate::model::{ProportionConfig, ProportionModel};
use crate::units::{self, MeasurementError, Unit};

/// Wat de pagina toont.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayState {
    #[default]
    AwaitingInput,
    ShowingFigure,
}

/// Gebeurtenissen vanuit het formulier.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Nieuwe tekst in het invoerveld, letterlijk overgenomen.
    Input(String),
    SelectUnit(Unit),
    Submit,
    /// Terug naar het invoerformulier; de ingevoerde tekst blijft staan.
    Reset,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    raw: String,
    unit: Unit,
    display: DisplayState,
    wrist_inches: Option<f64>,
}

impl FormState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    #[must_use]
    pub fn unit(&self) -> Unit {
        self.unit
    }

    #[must_use]
    pub fn display(&self) -> DisplayState {
        self.display
    }

    /// Polsmaat in inches zoals bij de laatste geslaagde verzending vastgelegd.
    #[must_use]
    pub fn wrist_inches(&self) -> Option<f64> {
        self.wrist_inches
    }

    /// Validatie van de huidige tekst met de huidige eenheid.
    pub fn validate(&self) -> Result<f64, MeasurementError> {
        units::normalize(&self.raw, self.unit)
    }

    /// Of de verzendknop actief mag zijn.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.validate().is_ok()
    }

    /// Het model dat getoond wordt, of `None` zolang er op invoer gewacht wordt.
    #[must_use]
    pub fn model(&self, config: &ProportionConfig) -> Option<ProportionModel> {
        match (self.display, self.wrist_inches) {
            (DisplayState::ShowingFigure, Some(wrist)) => {
                Some(ProportionModel::compute(wrist, config))
            }
            _ => None,
        }
    }
}

/// Past een gebeurtenis toe en geeft de nieuwe toestand terug.
#[must_use]
pub fn update(state: &FormState, event: Event) -> FormState {
    match event {
        Event::Input(raw) => FormState {
            raw,
            ..state.clone()
        },
        Event::SelectUnit(unit) => FormState {
            unit,
            ..state.clone()
        },
        Event::Submit => match state.validate() {
            Ok(wrist) => {
                log::debug!("invoer geaccepteerd: {wrist:.3} in");
                FormState {
                    display: DisplayState::ShowingFigure,
                    wrist_inches: Some(wrist),
                    ..state.clone()
                }
            }
            Err(err) => {
                log::debug!("verzending genegeerd: {err}");
                state.clone()
            }
        },
        Event::Reset => FormState {
            display: DisplayState::AwaitingInput,
            wrist_inches: None,
            ..state.clone()
        },
    }
}
