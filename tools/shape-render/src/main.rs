// Command-line front end for grid-shapes.
//
// Usage:
//   shape-render render [options] -o <output.bmp|json|txt>
//   shape-render ascii [options]

mod logging;

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{anyhow, bail, Context, Result};
use grid_shapes::{
    basics::deg2rad, generate_grid, render_shape_with_stats, FillMode, Grid, RasterSurface,
    RenderRequest, Rgba8, ShapeKind,
};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let result = match args[1].as_str() {
        "render" => cmd_render(&args[2..]),
        "ascii" => cmd_ascii(&args[2..]),
        "-h" | "--help" | "help" => {
            print_usage();
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            print_usage();
            process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("error: {:#}", e);
        process::exit(1);
    }
}

fn print_usage() {
    eprintln!("shape-render - rasterize circles and regular polygons onto a cell grid");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  render [options] -o <output.bmp|output.json|output.txt>");
    eprintln!("      Render a shape and write it as an image, a JSON grid or ASCII art.");
    eprintln!();
    eprintln!("  ascii [options]");
    eprintln!("      Print the painted grid to stdout.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --kind circle|polygon   shape kind (default circle)");
    eprintln!("  --sides N               polygon side count (default 6)");
    eprintln!("  --diameter D            size in cells (default 17)");
    eprintln!("  --angle RAD             rotation of the first polygon vertex");
    eprintln!("  --angle-deg DEG         same rotation in degrees");
    eprintln!("  --fill                  flood-fill the interior");
    eprintln!("  --color C               #rrggbb, rgb(r, g, b) or a color name");
    eprintln!("  --config FILE           JSON request with optional `config` and `shape`");
    eprintln!("  --cell-size PX          pixels per cell in BMP output");
    eprintln!("  -v, --verbose           debug logging (RUST_LOG overrides)");
}

// ============================================================================
// Argument parsing
// ============================================================================

struct Options {
    request: RenderRequest,
    output: Option<PathBuf>,
}

fn value<'a>(args: &'a [String], i: usize) -> Result<&'a str> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("{} needs a value", args[i]))
}

fn parse_options(args: &[String]) -> Result<Options> {
    let verbose = args.iter().any(|a| a == "-v" || a == "--verbose");
    logging::init_logging(verbose);

    // The config file is the base; flags given on the command line override it.
    let mut request = load_request(args)?;
    let output = apply_flags(&mut request, args)?;

    request.config.validate()?;
    Ok(Options { request, output })
}

fn load_request(args: &[String]) -> Result<RenderRequest> {
    match args.iter().position(|a| a == "--config") {
        Some(i) => {
            let path = value(args, i)?;
            let text =
                fs::read_to_string(path).with_context(|| format!("reading config {}", path))?;
            Ok(RenderRequest::from_json_str(&text).with_context(|| format!("parsing {}", path))?)
        }
        None => Ok(RenderRequest::default()),
    }
}

/// Apply command-line flags on top of `request`. Returns the `-o` path.
fn apply_flags(request: &mut RenderRequest, args: &[String]) -> Result<Option<PathBuf>> {
    let mut output = None;

    let mut i = 0;
    while i < args.len() {
        let shape = &mut request.shape;
        match args[i].as_str() {
            "--kind" => {
                shape.kind = match value(args, i)? {
                    "circle" => ShapeKind::Circle,
                    "polygon" | "shape" => ShapeKind::Polygon,
                    other => bail!("unknown shape kind '{}'", other),
                };
                i += 2;
            }
            "--sides" => {
                shape.sides = value(args, i)?.parse().context("invalid --sides")?;
                i += 2;
            }
            "--diameter" => {
                shape.diameter = value(args, i)?.parse().context("invalid --diameter")?;
                i += 2;
            }
            "--angle" => {
                shape.angle_offset = value(args, i)?.parse().context("invalid --angle")?;
                i += 2;
            }
            "--angle-deg" => {
                let deg: f64 = value(args, i)?.parse().context("invalid --angle-deg")?;
                shape.angle_offset = deg2rad(deg);
                i += 2;
            }
            "--color" => {
                shape.color = value(args, i)?.parse::<Rgba8>()?;
                i += 2;
            }
            "--cell-size" => {
                request.config.cell_size = value(args, i)?.parse().context("invalid --cell-size")?;
                i += 2;
            }
            "-o" => {
                output = Some(PathBuf::from(value(args, i)?));
                i += 2;
            }
            "--config" => i += 2,
            "--fill" => {
                shape.fill = FillMode::Filled;
                i += 1;
            }
            "-v" | "--verbose" => i += 1,
            other => bail!("unknown option: {}", other),
        }
    }
    Ok(output)
}

// ============================================================================
// Commands
// ============================================================================

fn cmd_render(args: &[String]) -> Result<()> {
    let opts = parse_options(args)?;
    let output = opts
        .output
        .ok_or_else(|| anyhow!("render needs -o <output.bmp|output.json|output.txt>"))?;
    let RenderRequest { config, shape } = &opts.request;

    let ext = output
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match ext.as_str() {
        "bmp" => {
            let mut surface = RasterSurface::new(config);
            let (grid, stats) = render_shape_with_stats(shape, config, &mut surface)?;
            surface
                .save_bmp(&output)
                .with_context(|| format!("writing {}", output.display()))?;
            log::info!(
                "{}x{} grid, {} cells painted ({} outline paints, {} fill paints)",
                grid.width(),
                grid.height(),
                grid.painted_count(),
                stats.outline_paints,
                stats.fill_paints
            );
        }
        "json" => {
            let grid = generate_grid(shape, config)?;
            let text = serde_json::to_string(&grid)?;
            write_text(&output, &text)?;
        }
        "txt" => {
            let grid = generate_grid(shape, config)?;
            write_text(&output, &ascii(&grid))?;
        }
        _ => bail!(
            "unsupported output '{}': use .bmp, .json or .txt",
            output.display()
        ),
    }

    println!("Saved: {}", output.display());
    Ok(())
}

fn cmd_ascii(args: &[String]) -> Result<()> {
    let opts = parse_options(args)?;
    let grid = generate_grid(&opts.request.shape, &opts.request.config)?;
    print!("{}", ascii(&grid));
    Ok(())
}

fn ascii(grid: &Grid<Rgba8>) -> String {
    grid.to_ascii(|_| '#')
}

fn write_text(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).with_context(|| format!("writing {}", path.display()))
}

// ============================================================================
// Tests
// ============================================================================
