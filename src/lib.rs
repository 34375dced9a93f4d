#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod compare;
pub mod model;
pub mod render;
pub mod state;
pub mod units;

use std::fmt;

use model::{CurrentMeasurements, ProportionConfig, ProportionModel, Segment};
use render::{Figure, FigureLayout, HoverAnimation, SvgStyle};
use state::{DisplayState, Event, FormState};
use units::Unit;
use wasm_bindgen::JsError;
use wasm_bindgen::prelude::*;

cfg_if::cfg_if! {
    if #[cfg(all(feature = "console_error_panic_hook", target_arch = "wasm32"))] {
        #[wasm_bindgen(start)]
        pub fn initialize() {
            console_error_panic_hook::set_once();
            init_logger();
        }
    } else {
        #[wasm_bindgen(start)]
        pub fn initialize() {
            init_logger();
        }
    }
}

#[cfg(feature = "debug_logs")]
fn init_logger() {
    use log::LevelFilter;
    use wasm_bindgen_console_logger::DEFAULT_LOGGER;
    if log::set_logger(&DEFAULT_LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Debug);
    }
}

#[cfg(not(feature = "debug_logs"))]
fn init_logger() {
    // no-op fallback when debug logs are disabled
}

#[macro_export]
macro_rules! debug_log {
    ($($t:tt)*) => {{
        #[cfg(feature = "debug_logs")]
        {
            #[cfg(target_arch = "wasm32")]
            {
                ::web_sys::console::log_1(&::wasm_bindgen::JsValue::from_str(&format!($($t)*)));
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                println!("{}", format!($($t)*));
            }
        }
    }};
}

/// Publieke ingang voor de webpagina: formulier, model en tekening.
#[wasm_bindgen]
pub struct Engine {
    initialized: bool,
    form: FormState,
    config: ProportionConfig,
    layout: FigureLayout,
    style: SvgStyle,
    hover: HoverAnimation,
    current: CurrentMeasurements,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl Engine {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Engine {
        Engine {
            initialized: true,
            form: FormState::new(),
            config: ProportionConfig::default(),
            layout: FigureLayout::default(),
            style: SvgStyle::default(),
            hover: HoverAnimation::new(),
            current: CurrentMeasurements::new(),
        }
    }

    /// Geeft terug of de engine de minimale initialisatie heeft doorlopen.
    #[wasm_bindgen]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Neemt de tekst uit het invoerveld letterlijk over.
    #[wasm_bindgen]
    pub fn set_input(&mut self, text: &str) {
        self.apply(Event::Input(text.to_owned()));
    }

    #[wasm_bindgen]
    pub fn input(&self) -> String {
        self.form.raw().to_owned()
    }

    /// Stel de eenheid in (`in` of `cm`).
    #[wasm_bindgen]
    pub fn set_unit(&mut self, unit: &str) -> Result<(), JsValue> {
        let unit = unit.parse::<Unit>().map_err(to_js_error)?;
        self.apply(Event::SelectUnit(unit));
        Ok(())
    }

    #[wasm_bindgen]
    pub fn unit(&self) -> String {
        self.form.unit().symbol().to_owned()
    }

    /// Of de verzendknop actief moet zijn.
    #[wasm_bindgen]
    pub fn can_submit(&self) -> bool {
        self.form.can_submit()
    }

    /// Foutmelding voor de huidige invoer, of `None` als die geldig is.
    #[wasm_bindgen]
    pub fn validation_message(&self) -> Option<String> {
        self.form.validate().err().map(|err| err.to_string())
    }

    /// Verzendt het formulier. Ongeldige invoer laat de toestand ongemoeid en
    /// geeft `false` terug.
    #[wasm_bindgen]
    pub fn submit(&mut self) -> bool {
        self.apply(Event::Submit);
        self.form.display() == DisplayState::ShowingFigure && self.form.validate().is_ok()
    }

    /// Terug naar het invoerformulier.
    #[wasm_bindgen]
    pub fn reset(&mut self) {
        self.apply(Event::Reset);
    }

    #[wasm_bindgen]
    pub fn is_showing_figure(&self) -> bool {
        self.form.display() == DisplayState::ShowingFigure
    }

    #[wasm_bindgen]
    pub fn wrist_inches(&self) -> Option<f64> {
        self.form.wrist_inches()
    }

    /// Laad verhoudingsconstanten uit een `<proportions .../>` document.
    #[wasm_bindgen]
    pub fn load_config_xml(&mut self, xml: &str) -> Result<(), JsValue> {
        self.config = ProportionConfig::from_xml(xml).map_err(to_js_error)?;
        Ok(())
    }

    /// Stel verhoudingsconstanten in vanuit een JS-object.
    #[wasm_bindgen]
    pub fn set_config(&mut self, value: JsValue) -> Result<(), JsValue> {
        let config: ProportionConfig = serde_wasm_bindgen::from_value(value)
            .map_err(|err| JsValue::from(JsError::new(&err.to_string())))?;
        config.validate().map_err(to_js_error)?;
        self.config = config;
        Ok(())
    }

    #[wasm_bindgen]
    pub fn get_config(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.config).map_err(|err| JsError::new(&err.to_string()).into())
    }

    /// Stel de afmetingen van het tekenoppervlak in.
    #[wasm_bindgen]
    pub fn set_surface_size(&mut self, width: f64, height: f64) -> Result<(), JsValue> {
        let layout = FigureLayout {
            width,
            height,
            ..self.layout
        };
        layout.validate().map_err(to_js_error)?;
        self.layout = layout;
        Ok(())
    }

    #[wasm_bindgen]
    pub fn set_hovered(&mut self, hovered: bool) {
        self.hover.set_hovered(hovered);
    }

    /// Eén animatieframe. Geeft `true` zolang er nog beweging is.
    #[wasm_bindgen]
    pub fn tick(&mut self) -> bool {
        self.hover.step();
        !self.hover.settled(1e-3)
    }

    /// Leg een gemeten maat (in inches) vast voor de vergelijking.
    #[wasm_bindgen]
    pub fn set_current_measurement(&mut self, segment: &str, inches: f64) -> Result<(), JsValue> {
        let segment =
            Segment::lookup(segment).ok_or_else(|| js_error(&format!("onbekend segment `{segment}`")))?;
        if !self.current.set(segment, inches) {
            return Err(js_error("maat moet een eindig, niet-negatief getal zijn"));
        }
        Ok(())
    }

    #[wasm_bindgen]
    pub fn clear_current_measurements(&mut self) {
        self.current.clear();
    }

    /// Rendert de huidige toestand als SVG. Bij een backendfout blijft de
    /// figuur weg en komt er een lege string terug.
    #[wasm_bindgen]
    pub fn render_svg(&self) -> String {
        match render::to_svg(&self.figure(), &self.style) {
            Ok(svg) => svg,
            Err(err) => {
                log::warn!("figuur niet getekend: {err}");
                String::new()
            }
        }
    }

    #[wasm_bindgen]
    pub fn get_model(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.model()).map_err(|err| JsError::new(&err.to_string()).into())
    }

    #[wasm_bindgen]
    pub fn get_draw_commands(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.figure()).map_err(|err| JsError::new(&err.to_string()).into())
    }

    /// Tabel ideaal tegenover huidig; leeg zolang er geen figuur is.
    #[wasm_bindgen]
    pub fn get_comparison(&self) -> Result<JsValue, JsValue> {
        let rows = self
            .model()
            .map(|ideal| compare::compare(&ideal, Some(&self.current)))
            .unwrap_or_default();
        serde_wasm_bindgen::to_value(&rows).map_err(|err| JsError::new(&err.to_string()).into())
    }
}

impl Engine {
    fn apply(&mut self, event: Event) {
        debug_log!("formuliergebeurtenis: {:?}", event);
        self.form = state::update(&self.form, event);
    }

    /// Het model voor de huidige toestand.
    #[must_use]
    pub fn model(&self) -> Option<ProportionModel> {
        self.form.model(&self.config)
    }

    #[must_use]
    pub fn form(&self) -> &FormState {
        &self.form
    }

    #[must_use]
    pub fn config(&self) -> &ProportionConfig {
        &self.config
    }

    /// Tekening voor de huidige toestand en het huidige hover-frame.
    #[must_use]
    pub fn figure(&self) -> Figure {
        let frame = self.hover.frame();
        match self.model() {
            Some(ideal) if !self.current.is_empty() => {
                let actual = self.current.overlay(&ideal);
                render::render_comparison(&ideal, &actual, &self.layout, frame)
            }
            ideal => render::render_state(ideal.as_ref(), &self.layout, frame),
        }
    }
}

fn to_js_error<E: fmt::Display>(error: E) -> JsValue {
    js_error(&error.to_string())
}

fn js_error(message: &str) -> JsValue {
    #[cfg(target_arch = "wasm32")]
    {
        JsError::new(message).into()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = message;
        JsValue::NULL
    }
}
