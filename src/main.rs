// main.rs
//
// Computes the ground footprint of one camera setup and prints a summary.
// Usage: groundfov [config.json]
// Without a config the built-in setup is used (5 MP sensor, 2.8 mm lens,
// 4 m up, pitched 75 degrees). Set RUST_LOG=debug to see the pipeline.

use groundfov::config::{RuntimeConfig, load_config};
use groundfov::ground::{GroundView, compute_ground_trapezoid};
use groundfov::io::write_json;
use groundfov::placement::{PlacementGrid, place_footprints};
#[cfg(not(feature = "obj-io"))]
use log::warn;
use log::info;
use std::env;
use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let cfg = match env::args().nth(1) {
        Some(path) => load_config(Path::new(&path))?,
        None => RuntimeConfig::default(),
    };

    let query = cfg.ground_query()?;
    info!(
        "camera FOV {:.4} x {:.4} rad at {} m, pitch {} deg",
        query.fov_horizontal, query.fov_vertical, query.altitude, query.pitch_deg
    );
    let view = compute_ground_trapezoid(&query)?;
    let grid = cfg
        .footprint
        .as_ref()
        .map(|footprint| place_footprints(&view.trapezoid, footprint))
        .transpose()?;

    let t = &view.trapezoid;
    println!("case: {:?}", view.case);
    for (name, p) in [("A", t.a), ("B", t.b), ("C", t.c), ("D", t.d)] {
        println!("{name}: ({:.4}, {:.4}, {:.4})", p.x, p.y, p.z);
    }
    println!("area: {:.4} m^2", view.area);
    if let Some(aim) = view.aim_point {
        println!("optical axis hits the ground at y = {:.4}", aim.y);
    }
    if let Some(grid) = grid.as_ref() {
        println!(
            "{} footprints of {} x {} m in {} rows",
            grid.len(),
            grid.footprint.width,
            grid.footprint.depth,
            grid.rows
        );
    }

    if let Some(path) = cfg.output.json_out.as_ref() {
        let mut report = view.report();
        if let Some(grid) = grid.as_ref() {
            report = report.with_placement(grid);
        }
        write_json(&report, &mut BufWriter::new(File::create(path)?))?;
        println!("Saved report to {}", path.display());
    }

    if let Some(path) = cfg.output.obj_out.as_ref() {
        export_obj(path, &view, grid.as_ref())?;
    }

    Ok(())
}

#[cfg(feature = "obj-io")]
fn export_obj(path: &Path, view: &GroundView, grid: Option<&PlacementGrid>) -> Result<(), Box<dyn Error>> {
    let mut obj = groundfov::io::ObjExport::new();
    obj.add_pyramid("fov", &view.pyramid)?;
    obj.add_trapezoid("ground", &view.trapezoid)?;
    if let Some(grid) = grid {
        obj.add_footprints("footprint", grid)?;
    }
    obj.save(path)?;
    println!("Saved OBJ to {}", path.display());
    Ok(())
}

#[cfg(not(feature = "obj-io"))]
fn export_obj(path: &Path, _view: &GroundView, _grid: Option<&PlacementGrid>) -> Result<(), Box<dyn Error>> {
    warn!("built without obj-io, not writing {}", path.display());
    Ok(())
}
