//! trigon command line.
//!
//! The two surfaces of the tool sit behind subcommands: `show`/`set` are
//! the input side (inspect and edit the persisted points), `render` is the
//! display side (emit the SVG figure). Points live in a JSON store file;
//! set `TRIGON_STORE` to relocate it.

use std::path::PathBuf;
use std::process;

use glam::dvec2;
use miette::{IntoDiagnostic, Result, WrapErr, miette};
use trigon::{PointStore, Vertex, defaults, interior_angle, triangle_svg};

fn main() -> Result<()> {
    // Log to stderr so `render` can pipe SVG through stdout.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "show" => show(),
        "set" => set(&args[2..]),
        "render" => render(&args[2..]),
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            usage();
            process::exit(1);
        }
    }
}

fn usage() {
    eprintln!("Usage: trigon <command>");
    eprintln!("Commands:");
    eprintln!("  show                 Print the stored points and their interior angles");
    eprintln!("  set <A|B|C> <x> <y>  Update one vertex and persist the change");
    eprintln!("  render [file.svg]    Render the stored triangle to SVG (stdout by default)");
}

fn store_path() -> PathBuf {
    std::env::var_os("TRIGON_STORE")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("triangle_points.json"))
}

fn show() -> Result<()> {
    let store = PointStore::load(store_path());
    let points = store.points();
    for v in Vertex::ALL {
        let (n1, n2) = v.neighbors();
        let p = points[v.index()];
        let angle = interior_angle(p, points[n1.index()], points[n2.index()]);
        println!("{}: ({}, {})  interior angle {}", v, p.x, p.y, angle);
    }
    Ok(())
}

fn set(rest: &[String]) -> Result<()> {
    let [name, x, y] = rest else {
        usage();
        process::exit(1);
    };

    let vertex = Vertex::from_name(name)
        .ok_or_else(|| miette!("unknown vertex {name:?}, expected A, B or C"))?;
    let x = parse_coordinate(x, "x")?;
    let y = parse_coordinate(y, "y")?;

    let mut store = PointStore::load(store_path());
    store.set_point(vertex, dvec2(x, y))?;
    println!("{} = ({}, {})", vertex, x, y);
    Ok(())
}

/// The geometry core assumes finite inputs, so coordinate parsing is where
/// NaN and infinity get rejected.
fn parse_coordinate(raw: &str, which: &str) -> Result<f64> {
    let value: f64 = raw
        .parse()
        .into_diagnostic()
        .wrap_err_with(|| format!("invalid {which} coordinate {raw:?}"))?;
    if !value.is_finite() {
        return Err(miette!("{which} coordinate must be finite, got {raw:?}"));
    }
    Ok(value)
}

fn render(rest: &[String]) -> Result<()> {
    let store = PointStore::load(store_path());
    let svg = triangle_svg(store.points(), defaults::CANVAS_SIZE, defaults::CANVAS_SIZE)
        .into_diagnostic()?;

    match rest.first() {
        Some(path) => {
            std::fs::write(path, &svg)
                .into_diagnostic()
                .wrap_err_with(|| format!("failed to write {path}"))?;
            eprintln!("wrote {path}");
        }
        None => print!("{svg}"),
    }
    Ok(())
}
