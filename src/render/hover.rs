//! Vloeiende hover-animatie van het figuur.
//!
//! Elk frame schuift schaal en verticale positie een vast deel van de
//! resterende afstand naar het doel op. Zonder hover is het doel schaal 1.5 op
//! hoogte 0, met hover schaal 3 en 3 eenheden omlaag.

use serde::Serialize;

/// Deel van de resterende afstand dat per frame wordt afgelegd.
pub const SMOOTHING: f64 = 0.1;

const REST_SCALE: f64 = 1.5;
const HOVER_SCALE: f64 = 3.0;
const HOVER_OFFSET: f64 = -3.0;

/// Schaal en verschuiving (scène-eenheden, y omhoog) van één frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoverFrame {
    pub scale: f64,
    pub offset_y: f64,
}

impl HoverFrame {
    #[must_use]
    pub const fn rest() -> Self {
        Self {
            scale: REST_SCALE,
            offset_y: 0.0,
        }
    }

    #[must_use]
    pub const fn hovered() -> Self {
        Self {
            scale: HOVER_SCALE,
            offset_y: HOVER_OFFSET,
        }
    }

    #[must_use]
    pub const fn target(hovered: bool) -> Self {
        if hovered { Self::hovered() } else { Self::rest() }
    }

    /// Vergroting ten opzichte van de rusthouding.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.scale / REST_SCALE
    }
}

impl Default for HoverFrame {
    fn default() -> Self {
        Self::rest()
    }
}

#[derive(Debug, Clone)]
pub struct HoverAnimation {
    frame: HoverFrame,
    hovered: bool,
    smoothing: f64,
}

impl Default for HoverAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl HoverAnimation {
    #[must_use]
    pub fn new() -> Self {
        Self::starting_at(HoverFrame::rest())
    }

    #[must_use]
    pub fn starting_at(frame: HoverFrame) -> Self {
        Self {
            frame,
            hovered: false,
            smoothing: SMOOTHING,
        }
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    #[must_use]
    pub fn frame(&self) -> HoverFrame {
        self.frame
    }

    /// Zet één frame stap richting het huidige doel en geeft het nieuwe frame terug.
    pub fn step(&mut self) -> HoverFrame {
        let target = HoverFrame::target(self.hovered);
        self.frame.scale += (target.scale - self.frame.scale) * self.smoothing;
        self.frame.offset_y += (target.offset_y - self.frame.offset_y) * self.smoothing;
        self.frame
    }

    /// Of het frame binnen `epsilon` van het doel ligt.
    #[must_use]
    pub fn settled(&self, epsilon: f64) -> bool {
        let target = HoverFrame::target(self.hovered);
        (target.scale - self.frame.scale).abs() <= epsilon
            && (target.offset_y - self.frame.offset_y).abs() <= epsilon
    }
}

#[cfg(test)]
mod tests {
    use super::{HoverAnimation, HoverFrame};

    #[test]
    fn first_step_covers_a_tenth_of_the_distance() {
        let mut animation = HoverAnimation::new();
        animation.set_hovered(true);
        let frame = animation.step();
        assert!((frame.scale - 1.65).abs() < 1e-12);
        assert!((frame.offset_y + 0.3).abs() < 1e-12);
    }

    #[test]
    fn converges_to_hover_target_and_back() {
        let mut animation = HoverAnimation::new();
        animation.set_hovered(true);
        for _ in 0..200 {
            animation.step();
        }
        assert!(animation.settled(1e-6));
        assert!((animation.frame().zoom() - 2.0).abs() < 1e-6);

        animation.set_hovered(false);
        assert!(!animation.settled(1e-6));
        for _ in 0..200 {
            animation.step();
        }
        assert!(animation.settled(1e-6));
        assert!((animation.frame().offset_y).abs() < 1e-6);
    }

    #[test]
    fn resting_animation_stays_put() {
        let mut animation = HoverAnimation::new();
        assert_eq!(animation.step(), HoverFrame::rest());
    }
}
