//! Schrijft een [`Figure`] als SVG-document.

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use serde::{Deserialize, Serialize};

use super::{DrawCommand, Figure, RenderError, Shape, Silhouette};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Kleuren per silhouet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SvgStyle {
    pub background: String,
    pub ideal_fill: String,
    pub ideal_stroke: String,
    pub actual_fill: String,
    pub actual_stroke: String,
    pub marker: String,
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self {
            background: "white".to_owned(),
            ideal_fill: "rgb(200 170 60 / 60%)".to_owned(),
            ideal_stroke: "rgb(120 90 20)".to_owned(),
            actual_fill: "rgb(0 0 200 / 35%)".to_owned(),
            actual_stroke: "rgb(0 0 140)".to_owned(),
            marker: "yellow".to_owned(),
        }
    }
}

impl SvgStyle {
    fn fill(&self, silhouette: Silhouette) -> &str {
        match silhouette {
            Silhouette::Ideal => &self.ideal_fill,
            Silhouette::Actual => &self.actual_fill,
        }
    }

    fn stroke(&self, silhouette: Silhouette) -> &str {
        match silhouette {
            Silhouette::Ideal => &self.ideal_stroke,
            Silhouette::Actual => &self.actual_stroke,
        }
    }
}

/// Serialiseert de figuur. Een figuur zonder vormen levert alleen het
/// (lege) tekenoppervlak op.
pub fn to_svg(figure: &Figure, style: &SvgStyle) -> Result<String, RenderError> {
    if !(figure.width.is_finite() && figure.width > 0.0 && figure.height.is_finite() && figure.height > 0.0)
    {
        return Err(RenderError::EmptyLayout {
            width: figure.width,
            height: figure.height,
        });
    }

    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    let width = format_number(figure.width);
    let height = format_number(figure.height);
    let mut root = BytesStart::new("svg");
    root.push_attribute(("xmlns", SVG_NS));
    root.push_attribute(("width", width.as_str()));
    root.push_attribute(("height", height.as_str()));
    root.push_attribute(("viewBox", format!("0 0 {width} {height}").as_str()));
    write(&mut writer, Event::Start(root))?;

    let mut background = BytesStart::new("rect");
    background.push_attribute(("class", "surface"));
    background.push_attribute(("width", width.as_str()));
    background.push_attribute(("height", height.as_str()));
    background.push_attribute(("fill", style.background.as_str()));
    write(&mut writer, Event::Empty(background))?;

    if !figure.is_empty() {
        let mut group = BytesStart::new("g");
        group.push_attribute(("class", "figure"));
        group.push_attribute((
            "transform",
            format!(
                "translate({} {}) scale({})",
                format_number(figure.anchor[0]),
                format_number(figure.anchor[1]),
                format_number(figure.zoom)
            )
            .as_str(),
        ));
        write(&mut writer, Event::Start(group))?;

        for command in &figure.commands {
            write_command(&mut writer, command, style)?;
        }

        write(&mut writer, Event::End(BytesEnd::new("g")))?;
    }

    write(&mut writer, Event::End(BytesEnd::new("svg")))?;

    String::from_utf8(writer.into_inner()).map_err(|err| RenderError::Xml(err.to_string()))
}

fn write_command(
    writer: &mut Writer<Vec<u8>>,
    command: &DrawCommand,
    style: &SvgStyle,
) -> Result<(), RenderError> {
    let class = format!(
        "{} {}",
        command.part.class_name(),
        command.silhouette.class_name()
    );
    let fill = style.fill(command.silhouette);
    let stroke = style.stroke(command.silhouette);

    match &command.shape {
        Shape::Circle { center, radius } => {
            let mut element = BytesStart::new("circle");
            element.push_attribute(("class", class.as_str()));
            element.push_attribute(("cx", format_number(center[0]).as_str()));
            element.push_attribute(("cy", format_number(center[1]).as_str()));
            element.push_attribute(("r", format_number(*radius).as_str()));
            element.push_attribute(("fill", fill));
            element.push_attribute(("stroke", stroke));
            write(writer, Event::Empty(element))
        }
        Shape::Polygon { points } => {
            let points = points
                .iter()
                .map(|point| format!("{},{}", format_number(point[0]), format_number(point[1])))
                .collect::<Vec<_>>()
                .join(" ");
            let mut element = BytesStart::new("polygon");
            element.push_attribute(("class", class.as_str()));
            element.push_attribute(("points", points.as_str()));
            element.push_attribute(("fill", fill));
            element.push_attribute(("stroke", stroke));
            write(writer, Event::Empty(element))
        }
        Shape::Rect {
            origin,
            width,
            height,
        } => {
            let mut element = BytesStart::new("rect");
            element.push_attribute(("class", class.as_str()));
            element.push_attribute(("x", format_number(origin[0]).as_str()));
            element.push_attribute(("y", format_number(origin[1]).as_str()));
            element.push_attribute(("width", format_number(*width).as_str()));
            element.push_attribute(("height", format_number(*height).as_str()));
            element.push_attribute(("fill", fill));
            element.push_attribute(("stroke", stroke));
            write(writer, Event::Empty(element))
        }
        Shape::Ellipse { center, radii } => {
            let mut element = BytesStart::new("ellipse");
            element.push_attribute(("class", class.as_str()));
            element.push_attribute(("cx", format_number(center[0]).as_str()));
            element.push_attribute(("cy", format_number(center[1]).as_str()));
            element.push_attribute(("rx", format_number(radii[0]).as_str()));
            element.push_attribute(("ry", format_number(radii[1]).as_str()));
            element.push_attribute(("fill", "none"));
            element.push_attribute(("stroke", style.marker.as_str()));
            write(writer, Event::Empty(element))
        }
        Shape::Text {
            position,
            size,
            text,
        } => {
            let mut element = BytesStart::new("text");
            element.push_attribute(("class", class.as_str()));
            element.push_attribute(("x", format_number(position[0]).as_str()));
            element.push_attribute(("y", format_number(position[1]).as_str()));
            element.push_attribute(("font-size", format_number(*size).as_str()));
            element.push_attribute(("dominant-baseline", "middle"));
            element.push_attribute(("fill", style.marker.as_str()));
            write(writer, Event::Start(element))?;
            write(writer, Event::Text(BytesText::new(text)))?;
            write(writer, Event::End(BytesEnd::new("text")))
        }
    }
}

fn write(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<(), RenderError> {
    writer
        .write_event(event)
        .map_err(|err| RenderError::Xml(err.to_string()))
}

/// Getal met hoogstens drie decimalen, zonder overbodige nullen.
fn format_number(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    let text = format!("{rounded:.3}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    text.to_owned()
}
