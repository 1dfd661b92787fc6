//! Load a voxel model and report what the editor would show.
//!
//! Usage:
//!   cargo run --bin volumetrik-inspect -- model.json
//!   cargo run --bin volumetrik-inspect -- model.json --layers 8 --xray --no-empty --config editor.json

use std::path::PathBuf;

use volumetrik::core::logging;
use volumetrik::core::types::Result;
use volumetrik::editor::{EditorConfig, EditorSession};

struct Args {
    model: PathBuf,
    config: Option<PathBuf>,
    layers: Option<u32>,
    xray: bool,
    no_empty: bool,
}

fn parse_args() -> Option<Args> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let value_of = |flag: &str| {
        args.iter()
            .position(|a| a == flag)
            .and_then(|i| args.get(i + 1))
    };

    let model = args.first().filter(|a| !a.starts_with("--"))?;
    Some(Args {
        model: PathBuf::from(model),
        config: value_of("--config").map(PathBuf::from),
        layers: value_of("--layers").and_then(|s| s.parse().ok()),
        xray: args.iter().any(|a| a == "--xray"),
        no_empty: args.iter().any(|a| a == "--no-empty"),
    })
}

fn run(args: Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => EditorConfig::load(path)?,
        None => EditorConfig::default(),
    };
    let mut session = EditorSession::new(config)?;
    session.import_file(&args.model)?;

    if let Some(layers) = args.layers {
        session.jump_to_bottom_layer();
        for _ in 1..layers {
            session.increase_visible_layers();
        }
    }
    if args.xray {
        session.toggle_xray_mode();
    }
    if args.no_empty && session.is_showing_empty() {
        session.toggle_grid_visibility();
    }

    let size = session.grid().size() as i32;
    let mut per_layer = vec![0usize; size as usize];
    for (coord, _) in session.store().entries() {
        per_layer[coord.y as usize] += 1;
    }

    println!("{}: {} painted voxels in a {}^3 grid", args.model.display(), session.store().len(), size);
    for (y, count) in per_layer.iter().enumerate().filter(|(_, c)| **c > 0) {
        println!("  layer {:>3}: {}", y, count);
    }
    println!(
        "visible cells: {} (layers {}, xray {}, empty {})",
        session.visibility().visible_count(),
        session.layers().visible(),
        session.is_xray(),
        session.is_showing_empty(),
    );
    Ok(())
}

fn main() {
    logging::init();

    let Some(args) = parse_args() else {
        eprintln!("Usage: volumetrik-inspect <model.json> [--layers N] [--xray] [--no-empty] [--config editor.json]");
        std::process::exit(2);
    };

    if let Err(e) = run(args) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
