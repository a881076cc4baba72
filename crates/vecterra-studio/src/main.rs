use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use resvg::{tiny_skia, usvg};
use vecterra_engine::logging::{LoggingConfig, init_logging};
use vecterra_engine::paint::Color;
use vecterra_engine::surface::{Placement, ScreenConfig, SvgSurface};
use vecterra_pen::Screen;

/// Render a Vecterra drawing script.
#[derive(Parser)]
#[command(name = "vecterra-studio", version)]
struct Cli {
    /// Script to run.
    script: PathBuf,

    /// SVG output. Defaults to the script path with an `.svg` extension.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also rasterize to this PNG file. Text blocks are not rasterized.
    #[arg(long)]
    png: Option<PathBuf>,

    #[arg(long, default_value_t = 800.0)]
    width: f64,

    #[arg(long, default_value_t = 600.0)]
    height: f64,

    /// Background color (`#rrggbb`, `rgba(...)` or a name).
    #[arg(long, default_value = "black")]
    background: String,

    /// Register a font for text measurement, as `family=path/to/font.ttf`. Repeatable.
    #[arg(long = "font", value_name = "FAMILY=PATH")]
    fonts: Vec<String>,

    /// Log filter in `env_logger` syntax. Overrides `RUST_LOG`.
    #[arg(long)]
    log: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log.clone().map(LoggingConfig::with_filter).unwrap_or_default());

    let background: Color = cli
        .background
        .parse()
        .with_context(|| format!("invalid --background {:?}", cli.background))?;
    let mut surface = SvgSurface::standalone(ScreenConfig {
        width: cli.width,
        height: cli.height,
        background,
        parent: None,
    });
    for spec in &cli.fonts {
        load_font(&mut surface, spec)?;
    }

    let src = std::fs::read_to_string(&cli.script)
        .with_context(|| format!("reading {}", cli.script.display()))?;
    let script = vecterra_script::parse_script(&src)
        .with_context(|| format!("parsing {}", cli.script.display()))?;
    log::info!("{}: {} commands", cli.script.display(), script.len());

    let (screen, svg) = Screen::shared(surface);
    let mut pen = screen.add_pen(Placement::Top);
    pen.run(&script);
    // a script that ends with rendering off still gets its buffer written out
    if !pen.is_render_on() {
        pen.render_on();
    }

    let document = svg.borrow().to_string();
    let output = cli.output.unwrap_or_else(|| cli.script.with_extension("svg"));
    std::fs::write(&output, &document).with_context(|| format!("writing {}", output.display()))?;
    log::info!("wrote {} ({} primitives)", output.display(), svg.borrow().primitive_count());

    if let Some(png) = cli.png {
        rasterize(&document, &png)?;
        log::info!("wrote {}", png.display());
    }
    Ok(())
}

fn load_font(surface: &mut SvgSurface, spec: &str) -> Result<()> {
    let Some((family, path)) = spec.split_once('=') else {
        bail!("--font expects FAMILY=PATH, got {spec:?}");
    };
    let bytes = std::fs::read(path).with_context(|| format!("reading font {path}"))?;
    surface
        .fonts_mut()
        .load_font(family, &bytes)
        .with_context(|| format!("loading font {path}"))?;
    log::debug!("loaded font family {family:?} from {path}");
    Ok(())
}

fn rasterize(document: &str, path: &Path) -> Result<()> {
    let tree = usvg::Tree::from_str(document, &usvg::Options::default()).context("re-parsing SVG output")?;
    let size = tree.size().to_int_size();
    let Some(mut pixmap) = tiny_skia::Pixmap::new(size.width(), size.height()) else {
        bail!("cannot allocate a {}x{} pixmap", size.width(), size.height());
    };
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());
    pixmap.save_png(path).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
