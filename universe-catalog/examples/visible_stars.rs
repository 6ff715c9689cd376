//! Loads a star catalog and prints what a camera near the Sun can see.
//!
//! ```text
//! cargo run --example visible_stars -- path/to/stars.csv
//! ```
//!
//! Without an argument a small built-in catalog is used.

use std::io::Cursor;

use universe_catalog::ingest::read_stars;
use universe_catalog::query::{
    select_target, visible_stars, CameraPose, TargetParams, VisibleParams,
};
use universe_catalog::{load, resolve_overlaps, Catalog, IngestReport, LoadConfig};
use universe_core::Vector3;

const BUILTIN: &str = "\
hip,hab,display_name,spectral_class,dist,xg,yg,zg,absmag
0,0,Sun,G2V,0,0,0,0,4.85
71683,0,Alpha Centauri,G2V,1.34,0.95,-0.93,-0.02,4.38
70890,1,Proxima Centauri,M5.5Ve,1.30,0.90,-0.94,-0.04,15.5
32349,0,Sirius,A1V,2.64,-0.49,-2.48,-0.76,1.42
37279,0,Procyon,F5IV-V,3.51,-1.49,-3.05,0.82,2.66
";

fn builtin() -> Catalog {
    let mut catalog = Catalog::new();
    let mut report = IngestReport::default();
    if let Err(e) = read_stars(Cursor::new(BUILTIN), &mut catalog, &mut report) {
        eprintln!("{}", e);
    }
    resolve_overlaps(&mut catalog);
    catalog
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let catalog = match std::env::args().nth(1) {
        Some(path) => load(&LoadConfig::new(path))?.0,
        None => builtin(),
    };
    println!("{} stars loaded", catalog.star_count());

    // Just outside the Sun, looking back through it.
    let pose = CameraPose::new(Vector3::new(0.0, 0.0, 2.0), Vector3::new(0.0, 0.0, -1.0));
    let params = VisibleParams {
        half_angle_deg: 89.0,
        ..VisibleParams::default()
    };

    for star in visible_stars(&catalog, &pose, &params) {
        if let Some(body) = catalog.get(star.id) {
            println!(
                "{:>20} {:8.3} ly  scale {:.4}  {}",
                body.name, star.distance_ly, star.hints.render_scale, star.color
            );
        }
    }

    match select_target(&catalog, &pose, &TargetParams::default()) {
        Some(t) => {
            let name = catalog.get(t.id).map_or("?", |b| b.name.as_str());
            println!("Looking at {} ({:.2}°)", name, t.angle_deg);
        }
        None => println!("Nothing in the center of view"),
    }
    Ok(())
}
