#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    if let Err(err) = native::run() {
        eprintln!("figure_cli error: {err}");
        std::process::exit(1);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use golden_figure::compare::compare;
    use golden_figure::model::{CurrentMeasurements, ProportionConfig, Segment};
    use golden_figure::render::{FigureLayout, HoverFrame, SvgStyle, render_comparison, render_state, to_svg};
    use golden_figure::state::{DisplayState, Event, FormState, update};
    use golden_figure::units::Unit;
    use std::fs;
    use std::path::{Path, PathBuf};

    const USAGE: &str = r#"figure_cli (golden-figure)

USAGE:
  figure_cli model --wrist <value> [options]
  figure_cli render --wrist <value> [options]

OPTIONS:
  --wrist <value>          Wrist measurement as typed in the form
  --unit <in|cm>           Unit of the wrist measurement (default: in)
  --config <path>          <proportions .../> XML with constant overrides
  --actual <segment=inch>  Measured segment length, repeatable (e.g. waistWidth=38)
  --out <path>             Write the SVG to this file instead of stdout (render only)
  --size <w>x<h>           Drawing surface size (default: 200x300)
  --hover                  Render the fully hovered frame
  --no-waist               Leave out the waist marker
  --overwrite              Overwrite an existing output file
  -h, --help               Show this help
"#;

    #[derive(Debug, Default)]
    struct Options {
        wrist: Option<String>,
        unit: Unit,
        config: Option<PathBuf>,
        actual: Vec<(Segment, f64)>,
        out: Option<PathBuf>,
        layout: FigureLayout,
        hover: bool,
        overwrite: bool,
    }

    pub fn run() -> Result<(), String> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        let mut args = Args::new(args);

        let Some(command) = args.next() else {
            print_usage();
            return Ok(());
        };

        match command.as_str() {
            "model" => {
                let Some(options) = parse_options(&mut args)? else {
                    return Ok(());
                };
                cmd_model(&options)
            }
            "render" => {
                let Some(options) = parse_options(&mut args)? else {
                    return Ok(());
                };
                cmd_render(&options)
            }
            "-h" | "--help" | "help" => {
                print_usage();
                Ok(())
            }
            other => Err(format!("unknown command `{other}`\n\n{USAGE}")),
        }
    }

    fn print_usage() {
        println!("{USAGE}");
    }

    fn parse_options(args: &mut Args) -> Result<Option<Options>, String> {
        let mut options = Options::default();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--wrist" => options.wrist = Some(args.value("--wrist")?),
                "--unit" => {
                    options.unit = args
                        .value("--unit")?
                        .parse::<Unit>()
                        .map_err(|err| err.to_string())?;
                }
                "--config" => options.config = Some(PathBuf::from(args.value("--config")?)),
                "--actual" => options.actual.push(parse_actual(&args.value("--actual")?)?),
                "--out" => options.out = Some(PathBuf::from(args.value("--out")?)),
                "--size" => {
                    let (width, height) = parse_size(&args.value("--size")?)?;
                    options.layout.width = width;
                    options.layout.height = height;
                }
                "--hover" => options.hover = true,
                "--no-waist" => options.layout.annotate_waist = false,
                "--overwrite" => options.overwrite = true,
                "-h" | "--help" => {
                    print_usage();
                    return Ok(None);
                }
                other => return Err(format!("unknown option `{other}`\n\n{USAGE}")),
            }
        }

        options.layout.validate().map_err(|err| err.to_string())?;
        Ok(Some(options))
    }

    fn parse_actual(text: &str) -> Result<(Segment, f64), String> {
        let (key, value) = text
            .split_once('=')
            .ok_or_else(|| format!("expected <segment>=<inches>, got `{text}`"))?;
        let segment = Segment::lookup(key).ok_or_else(|| format!("unknown segment `{key}`"))?;
        let value: f64 = value
            .trim()
            .parse()
            .map_err(|e| format!("invalid length `{value}`: {e}"))?;
        if !value.is_finite() || value < 0.0 {
            return Err(format!("length for {segment} must be a non-negative number"));
        }
        Ok((segment, value))
    }

    fn parse_size(text: &str) -> Result<(f64, f64), String> {
        let (width, height) = text
            .split_once(['x', 'X'])
            .ok_or_else(|| format!("expected <width>x<height>, got `{text}`"))?;
        let width = width
            .trim()
            .parse::<f64>()
            .map_err(|e| format!("invalid width `{width}`: {e}"))?;
        let height = height
            .trim()
            .parse::<f64>()
            .map_err(|e| format!("invalid height `{height}`: {e}"))?;
        Ok((width, height))
    }

    fn load_config(options: &Options) -> Result<ProportionConfig, String> {
        match options.config.as_deref() {
            Some(path) => {
                let xml = fs::read_to_string(path).map_err(|e| format!("read {}: {e}", path.display()))?;
                ProportionConfig::from_xml(&xml).map_err(|e| format!("{}: {e}", path.display()))
            }
            None => Ok(ProportionConfig::default()),
        }
    }

    /// Doorloopt het formulier zoals de webpagina dat doet.
    fn submit_form(options: &Options) -> Result<FormState, String> {
        let raw = options.wrist.clone().ok_or("missing --wrist")?;
        let state = update(&FormState::new(), Event::Input(raw));
        let state = update(&state, Event::SelectUnit(options.unit));
        if let Err(err) = state.validate() {
            return Err(err.to_string());
        }
        let state = update(&state, Event::Submit);
        debug_assert_eq!(state.display(), DisplayState::ShowingFigure);
        Ok(state)
    }

    fn current_measurements(options: &Options) -> CurrentMeasurements {
        options.actual.iter().copied().collect()
    }

    fn cmd_model(options: &Options) -> Result<(), String> {
        let config = load_config(options)?;
        let state = submit_form(options)?;
        let model = state.model(&config).ok_or("no figure after submit")?;
        let current = current_measurements(options);

        if let Some(wrist) = state.wrist_inches() {
            println!("wrist {wrist:.3} in");
        }
        for row in compare(&model, Some(&current)) {
            match (row.current, row.difference) {
                (Some(current), Some(difference)) => println!(
                    "{:<15} {:>9.3} {:>9.3} {:>+9.3}",
                    row.segment.name(),
                    row.ideal,
                    current,
                    difference
                ),
                _ => println!("{:<15} {:>9.3} {:>9}", row.segment.name(), row.ideal, "-"),
            }
        }
        Ok(())
    }

    fn cmd_render(options: &Options) -> Result<(), String> {
        let config = load_config(options)?;
        let state = submit_form(options)?;
        let model = state.model(&config);
        let frame = HoverFrame::target(options.hover);

        let current = current_measurements(options);

        let figure = match model.as_ref() {
            Some(ideal) if !current.is_empty() => {
                render_comparison(ideal, &current.overlay(ideal), &options.layout, frame)
            }
            ideal => render_state(ideal, &options.layout, frame),
        };
        let svg = to_svg(&figure, &SvgStyle::default()).map_err(|e| e.to_string())?;

        if let Some(path) = options.out.as_deref() {
            write_text_file(path, &svg, options.overwrite)?;
            eprintln!("wrote {}", path.display());
        } else {
            println!("{svg}");
        }
        Ok(())
    }

    fn write_text_file(path: &Path, text: &str, overwrite: bool) -> Result<(), String> {
        if path.exists() && !overwrite {
            return Err(format!(
                "refusing to overwrite existing file {} (use --overwrite)",
                path.display()
            ));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| format!("create dir {}: {e}", parent.display()))?;
        }
        fs::write(path, text).map_err(|e| format!("write {}: {e}", path.display()))
    }

    struct Args {
        args: Vec<String>,
        pos: usize,
    }

    impl Args {
        fn new(args: Vec<String>) -> Self {
            Self { args, pos: 0 }
        }

        fn next(&mut self) -> Option<String> {
            let arg = self.args.get(self.pos)?.clone();
            self.pos += 1;
            Some(arg)
        }

        fn value(&mut self, flag: &str) -> Result<String, String> {
            self.next().ok_or_else(|| format!("missing value for {flag}"))
        }
    }
}
