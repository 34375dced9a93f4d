//! Opbouw van het gelaagde silhouet.

use serde::{Deserialize, Serialize};

use super::hover::HoverFrame;
use super::{DrawCommand, Figure, Part, RenderError, Shape, Silhouette};
use crate::model::ProportionModel;
use crate::units::CM_TO_INCH;

/// Afmetingen van het tekenoppervlak en de vaste maten van armen en benen,
/// allemaal in oppervlakte-eenheden.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FigureLayout {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
    pub neck_gap: f64,
    pub leg_width: f64,
    pub arm_width: f64,
    /// Oppervlakte-eenheden per scène-eenheid voor de hover-verschuiving.
    pub hover_unit: f64,
    pub annotate_waist: bool,
}

impl Default for FigureLayout {
    fn default() -> Self {
        Self {
            width: 200.0,
            height: 300.0,
            margin: 10.0,
            neck_gap: 2.0,
            leg_width: 10.0,
            arm_width: 8.0,
            hover_unit: 10.0,
            annotate_waist: true,
        }
    }
}

impl FigureLayout {
    pub fn validate(&self) -> Result<(), RenderError> {
        let usable = |value: f64| value.is_finite() && value > 0.0;
        if usable(self.width) && usable(self.height) {
            Ok(())
        } else {
            Err(RenderError::EmptyLayout {
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Eén schaal (oppervlakte-eenheden per inch) waarin alle gegeven modellen
    /// passen. Zo delen ideaal en werkelijk silhouet hetzelfde eenhedenstelsel.
    #[must_use]
    pub fn fit_scale<'a, I>(&self, models: I) -> f64
    where
        I: IntoIterator<Item = &'a ProportionModel>,
    {
        let (natural_height, natural_width) = models.into_iter().fold((0.0_f64, 0.0_f64), |acc, model| {
            (acc.0.max(model.figure_height()), acc.1.max(model.body_width()))
        });

        let available_height = (self.height - 2.0 * self.margin - self.neck_gap).max(0.0);
        let available_width = (self.width - 2.0 * self.margin - 2.0 * self.arm_width).max(0.0);

        let mut scale = f64::INFINITY;
        if natural_height > 0.0 {
            scale = scale.min(available_height / natural_height);
        }
        if natural_width > 0.0 {
            scale = scale.min(available_width / natural_width);
        }
        if scale.is_finite() { scale } else { 1.0 }
    }
}

/// Tekent het ideale silhouet in rusthouding.
#[must_use]
pub fn render_figure(model: &ProportionModel, layout: &FigureLayout) -> Figure {
    render_with_hover(model, layout, HoverFrame::rest())
}

/// Tekent het ideale silhouet voor een gegeven hover-frame.
#[must_use]
pub fn render_with_hover(model: &ProportionModel, layout: &FigureLayout, frame: HoverFrame) -> Figure {
    let scale = layout.fit_scale([model]);
    let mut commands = silhouette(model, Silhouette::Ideal, scale, layout);
    if layout.annotate_waist {
        commands.extend(waist_marker(model, scale, layout));
    }
    assemble(model, layout, frame, scale, commands)
}

/// Tekent het werkelijke silhouet over het ideale heen, met één gedeelde schaal.
#[must_use]
pub fn render_comparison(
    ideal: &ProportionModel,
    actual: &ProportionModel,
    layout: &FigureLayout,
    frame: HoverFrame,
) -> Figure {
    let scale = layout.fit_scale([ideal, actual]);
    let mut commands = silhouette(ideal, Silhouette::Ideal, scale, layout);
    commands.extend(silhouette(actual, Silhouette::Actual, scale, layout));
    if layout.annotate_waist {
        commands.extend(waist_marker(ideal, scale, layout));
    }
    let reference = if ideal.standing_height() >= actual.standing_height() {
        ideal
    } else {
        actual
    };
    assemble(reference, layout, frame, scale, commands)
}

/// Projectie van een optioneel model: zonder model blijft het oppervlak leeg.
#[must_use]
pub fn render_state(model: Option<&ProportionModel>, layout: &FigureLayout, frame: HoverFrame) -> Figure {
    match model {
        Some(model) => render_with_hover(model, layout, frame),
        None => Figure::empty(layout),
    }
}

fn assemble(
    reference: &ProportionModel,
    layout: &FigureLayout,
    frame: HoverFrame,
    scale: f64,
    commands: Vec<DrawCommand>,
) -> Figure {
    // Scène-y wijst omhoog, SVG-y omlaag.
    let shift = -frame.offset_y * layout.hover_unit;
    let anchor = [
        layout.width / 2.0,
        layout.margin + reference.head_radius() * scale + shift,
    ];
    log::debug!(
        "figuur gerenderd: {} vormen, schaal {scale:.3}, zoom {:.3}",
        commands.len(),
        frame.zoom()
    );
    Figure {
        width: layout.width,
        height: layout.height,
        anchor,
        zoom: frame.zoom(),
        scale,
        commands,
    }
}

fn silhouette(
    model: &ProportionModel,
    role: Silhouette,
    scale: f64,
    layout: &FigureLayout,
) -> Vec<DrawCommand> {
    let head_radius = model.head_radius() * scale;
    let waist = model.waist_width() * scale;
    let shoulder = model.shoulder_width() * scale;
    let torso_top = head_radius + layout.neck_gap;
    let torso_bottom = torso_top + model.torso_height() * scale;
    let leg_length = model.leg_length() * scale;
    let arm_length = model.arm_length() * scale;

    let command = |part, shape| DrawCommand {
        part,
        silhouette: role,
        shape,
    };

    let leg_center = shoulder / 4.0;
    let leg = |center_x: f64| Shape::Rect {
        origin: [center_x - layout.leg_width / 2.0, torso_bottom],
        width: layout.leg_width,
        height: leg_length,
    };

    // Armen hangen aan de schouderrand van de romp (de onderrand).
    let arm_offset = shoulder / 2.0;
    let arm = |origin_x: f64| Shape::Rect {
        origin: [origin_x, torso_bottom],
        width: layout.arm_width,
        height: arm_length,
    };

    vec![
        command(
            Part::Head,
            Shape::Circle {
                center: [0.0, 0.0],
                radius: head_radius,
            },
        ),
        command(
            Part::Torso,
            Shape::Polygon {
                points: vec![
                    [-waist / 2.0, torso_top],
                    [waist / 2.0, torso_top],
                    [shoulder / 2.0, torso_bottom],
                    [-shoulder / 2.0, torso_bottom],
                ],
            },
        ),
        command(Part::LeftLeg, leg(-leg_center)),
        command(Part::RightLeg, leg(leg_center)),
        command(Part::LeftArm, arm(-arm_offset - layout.arm_width)),
        command(Part::RightArm, arm(arm_offset)),
    ]
}

fn waist_marker(model: &ProportionModel, scale: f64, layout: &FigureLayout) -> Vec<DrawCommand> {
    let waist_y = model.head_radius() * scale + layout.neck_gap;
    let radius_x = model.waist_width() * scale / 2.0 + 2.0;
    // Verhouding van de taille-ellips uit de 3D-weergave (0.12 / 0.8).
    let radius_y = radius_x * 0.15;
    let centimeters = (model.waist_width() / CM_TO_INCH).round();

    vec![
        DrawCommand {
            part: Part::WaistMarker,
            silhouette: Silhouette::Ideal,
            shape: Shape::Ellipse {
                center: [0.0, waist_y],
                radii: [radius_x, radius_y],
            },
        },
        DrawCommand {
            part: Part::WaistLabel,
            silhouette: Silhouette::Ideal,
            shape: Shape::Text {
                position: [radius_x + 4.0, waist_y],
                size: 10.0,
                text: format!("Waist: {centimeters}cm"),
            },
        },
    ]
}
