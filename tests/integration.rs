use golden_figure::Engine;
use golden_figure::model::{CurrentMeasurements, ProportionConfig, ProportionModel, Segment};
use golden_figure::render::{FigureLayout, HoverFrame, Part, Shape, SvgStyle, render_state, to_svg};
use golden_figure::state::{DisplayState, Event, FormState, update};
use golden_figure::units::{Unit, normalize};

fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "verwacht {expected}, kreeg {actual}"
    );
}

#[test]
fn engine_initializes() {
    let engine = Engine::new();
    assert!(engine.is_initialized());
    assert!(!engine.is_showing_figure());
    assert!(!engine.can_submit());
    assert_eq!(engine.unit(), "in");
}

#[test]
fn eight_inches_shows_reference_figure() {
    let mut engine = Engine::new();
    engine.set_input("8");
    assert!(engine.can_submit());
    assert!(engine.submit());
    assert!(engine.is_showing_figure());
    assert_eq!(engine.form().display(), DisplayState::ShowingFigure);

    let model = engine.model().expect("model after submit");
    assert_close(model.head_radius(), 4.8, 1e-9);
    assert_close(model.shoulder_width(), 56.0, 1e-9);
    assert_close(model.waist_width(), 40.0, 1e-9);
    assert_close(model.torso_height(), 60.0, 1e-9);
    assert_close(model.leg_length(), 80.0, 1e-9);
    assert_close(model.arm_length(), 72.0, 1e-9);
}

#[test]
fn zero_keeps_submit_disabled() {
    let mut engine = Engine::new();
    engine.set_input("0");
    assert!(!engine.can_submit());
    assert!(engine.validation_message().is_some());
    assert!(!engine.submit());
    assert!(!engine.is_showing_figure());
    assert!(engine.model().is_none());
}

#[test]
fn twelve_centimeters_are_normalized_before_the_model() {
    let mut engine = Engine::new();
    engine.set_input("12");
    assert!(engine.set_unit("cm").is_ok());
    assert!(engine.submit());

    let wrist = engine.wrist_inches().expect("wrist stored");
    assert_close(wrist, 4.72, 0.01);

    let model = engine.model().expect("model");
    let expected = ProportionModel::ideal(12.0 * 0.393_701);
    assert_eq!(model, expected);
    assert_close(model.waist_width(), wrist * 5.0, 1e-9);
    assert_close(model.leg_length(), wrist * 10.0, 1e-9);
}

#[test]
fn unknown_unit_is_rejected_without_state_change() {
    let mut engine = Engine::new();
    assert!(engine.set_unit("furlong").is_err());
    assert_eq!(engine.unit(), "in");
}

#[test]
fn normalizer_cases() {
    assert!(normalize("", Unit::Inches).is_err());
    assert!(normalize("abc", Unit::Inches).is_err());
    assert!(normalize("-3", Unit::Inches).is_err());
    assert_eq!(normalize("8", Unit::Inches), Ok(8.0));
    assert_close(normalize("20", Unit::Centimeters).expect("cm"), 7.874, 1e-3);
}

#[test]
fn reset_returns_to_the_form_and_clears_the_figure() {
    let mut engine = Engine::new();
    engine.set_input("8");
    assert!(engine.submit());
    engine.reset();
    assert!(!engine.is_showing_figure());
    assert!(engine.figure().is_empty());
    assert_eq!(engine.input(), "8");
    assert!(engine.can_submit());
}

#[test]
fn config_override_changes_derived_lengths() {
    let mut engine = Engine::new();
    assert!(engine.load_config_xml(r#"<proportions waist="4"/>"#).is_ok());
    assert!(engine.load_config_xml(r#"<proportions waist="-4"/>"#).is_err());
    assert_eq!(engine.config().waist, 4.0);

    engine.set_input("10");
    assert!(engine.submit());
    let model = engine.model().expect("model");
    assert_close(model.waist_width(), 40.0, 1e-9);
    assert_close(model.arm_length(), 90.0, 1e-9);
}

#[test]
fn rendered_svg_reflects_state() {
    let mut engine = Engine::new();
    let before = engine.render_svg();
    assert!(before.contains("<svg"));
    assert!(!before.contains("<circle"));

    engine.set_input("7.5");
    assert!(engine.submit());
    let after = engine.render_svg();
    assert!(after.contains(r#"class="head ideal""#));
    assert!(after.contains(r#"class="torso ideal""#));
    assert_eq!(after.matches(r#"class="leg "#).count(), 2);
    assert_eq!(after.matches(r#"class="arm "#).count(), 2);
}

#[test]
fn unusable_surface_size_is_refused() {
    let mut engine = Engine::new();
    assert!(engine.set_surface_size(0.0, 300.0).is_err());
    assert!(engine.set_surface_size(400.0, 600.0).is_ok());
    engine.set_input("8");
    assert!(engine.submit());
    assert!(engine.render_svg().contains(r#"viewBox="0 0 400 600""#));
}

#[test]
fn form_update_drives_the_renderer() {
    let config = ProportionConfig::default();
    let layout = FigureLayout::default();

    let state = update(&FormState::new(), Event::Input("9".to_owned()));
    let figure = render_state(state.model(&config).as_ref(), &layout, HoverFrame::rest());
    assert!(figure.is_empty());

    let state = update(&state, Event::Submit);
    let figure = render_state(state.model(&config).as_ref(), &layout, HoverFrame::rest());
    let head = figure.part(Part::Head).next().expect("head drawn");
    match &head.shape {
        Shape::Circle { radius, .. } => assert_close(*radius, 9.0 * 0.6 * figure.scale, 1e-9),
        other => panic!("verwacht Circle, kreeg {other:?}"),
    }

    let svg = to_svg(&figure, &SvgStyle::default()).expect("svg");
    assert!(svg.contains("<polygon"));
}

#[test]
fn comparison_rows_follow_segment_order() {
    let ideal = ProportionModel::ideal(8.0);
    let current: CurrentMeasurements = [(Segment::LegLength, 78.0)].into_iter().collect();
    let rows = golden_figure::compare::compare(&ideal, Some(&current));
    let segments: Vec<Segment> = rows.iter().map(|row| row.segment).collect();
    assert_eq!(segments, Segment::ALL.to_vec());
    let leg = rows.iter().find(|row| row.segment == Segment::LegLength).expect("leg row");
    assert_eq!(leg.difference, Some(-2.0));
    let head = rows.iter().find(|row| row.segment == Segment::HeadRadius).expect("head row");
    assert_eq!(head.current, None);
    assert_eq!(head.difference, None);
}
