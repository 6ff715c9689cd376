use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use universe_catalog::body::format_scientific;
use universe_catalog::query::{
    select_target, visible_stars, CameraPose, TargetParams, VisibleParams, VisibleStar,
};
use universe_catalog::{load, Catalog, LoadConfig};
use universe_core::Vector3;

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Parser)]
#[command(name = "query-catalog")]
#[command(about = "Load star and planet catalogs and run view queries")]
struct Cli {
    /// Path to the star catalog
    #[arg(long)]
    stars: PathBuf,

    /// Path to the planet catalog
    #[arg(long)]
    planets: Option<PathBuf>,

    /// Keep stars that physically overlap
    #[arg(long)]
    no_dedup: bool,

    /// Log at debug level (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print load statistics
    Info,
    /// Resolve a name, compound key or HIP id to a star
    Search {
        query: String,
    },
    /// List visible stars, farthest first
    Visible {
        /// Camera position as x,y,z in light-years
        #[arg(long, default_value = "0,0,1", allow_hyphen_values = true)]
        pos: String,
        /// View direction as x,y,z
        #[arg(long, default_value = "0,0,-1", allow_hyphen_values = true)]
        dir: String,
        #[arg(long, default_value = "1000")]
        max_distance: f64,
        #[arg(long, default_value = "75")]
        half_angle: f64,
        /// Print only the nearest N entries
        #[arg(long)]
        limit: Option<usize>,
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
    /// Show the star closest to the view center
    Target {
        #[arg(long, default_value = "0,0,1", allow_hyphen_values = true)]
        pos: String,
        #[arg(long, default_value = "0,0,-1", allow_hyphen_values = true)]
        dir: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = LoadConfig::new(&cli.stars).resolve_overlaps(!cli.no_dedup);
    if let Some(planets) = &cli.planets {
        config = config.with_planets(planets);
    }
    let (catalog, report) =
        load(&config).with_context(|| format!("Failed to load catalog {:?}", cli.stars))?;

    match cli.command {
        Commands::Info => {
            println!("Stars: {}", catalog.star_count());
            println!("Planets: {}", catalog.planet_count());
            println!("Index keys: {}", catalog.key_count());
            println!("{}", report);
        }
        Commands::Search { query } => match catalog.search(&query) {
            Some(id) => print_star(&catalog, id),
            None => println!("No star matches '{}'", query),
        },
        Commands::Visible {
            pos,
            dir,
            max_distance,
            half_angle,
            limit,
            format,
        } => {
            let pose = CameraPose::new(parse_vector(&pos)?, parse_vector(&dir)?);
            let params = VisibleParams {
                max_distance_ly: max_distance,
                half_angle_deg: half_angle,
            };
            let mut visible = visible_stars(&catalog, &pose, &params);
            if let Some(n) = limit {
                let skip = visible.len().saturating_sub(n);
                visible.drain(..skip);
            }
            match format {
                OutputFormat::Table => print_table(&catalog, &visible),
                OutputFormat::Json => print_json(&catalog, &visible)?,
                OutputFormat::Csv => print_csv(&catalog, &visible),
            }
        }
        Commands::Target { pos, dir } => {
            let pose = CameraPose::new(parse_vector(&pos)?, parse_vector(&dir)?);
            match select_target(&catalog, &pose, &TargetParams::default()) {
                Some(target) => {
                    print_star(&catalog, target.id);
                    println!(
                        "Angle: {:.3}°  Distance: {:.4} ly  Reason: {:?}",
                        target.angle_deg, target.distance_ly, target.reason
                    );
                }
                None => println!("No target in view"),
            }
        }
    }

    Ok(())
}

fn print_star(catalog: &Catalog, id: universe_catalog::BodyId) {
    let Some((body, info)) = catalog.star(id) else {
        return;
    };
    println!("{} ({})", body.name, id);
    if info.hip_id > 0 {
        println!("  HIP: {}", info.hip_id);
    }
    println!("  Class: {} [{}]", info.spectral_class, info.classification);
    println!("  Position: {:.4} ly", body.position);
    println!("  Distance: {:.4} ly ({:.4} pc)", info.distance_ly, info.distance_pc);
    println!("  Mass: {} kg", format_scientific(body.mass_kg));
    println!("  Radius: {:.0} km", body.radius_km);
    println!("  Abs. magnitude: {:.2}", info.absolute_magnitude);
    println!("  Color: {}", body.color());
    for (_, planet, p) in catalog.planets_of(id) {
        println!("  Planet: {} at {} AU", planet.name, p.distance_au);
    }
}

fn name_of(catalog: &Catalog, star: &VisibleStar) -> String {
    catalog
        .get(star.id)
        .map_or_else(|| star.id.to_string(), |b| b.name.clone())
}

fn print_table(catalog: &Catalog, visible: &[VisibleStar]) {
    for (i, star) in visible.iter().enumerate() {
        println!(
            "{:4}: {:>24} Dist={:10.4} ly Scale={:.5} Color={}{}",
            i + 1,
            name_of(catalog, star),
            star.distance_ly,
            star.hints.render_scale,
            star.color,
            if star.hints.opaque_core { " core" } else { "" }
        );
    }

    if visible.is_empty() {
        println!("No stars in view.");
    } else {
        println!("\nTotal visible: {}", visible.len());
    }
}

#[derive(serde::Serialize)]
struct JsonVisible {
    name: String,
    #[serde(flatten)]
    star: VisibleStar,
}

fn print_json(catalog: &Catalog, visible: &[VisibleStar]) -> anyhow::Result<()> {
    let rows: Vec<JsonVisible> = visible
        .iter()
        .map(|s| JsonVisible {
            name: name_of(catalog, s),
            star: s.clone(),
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}

fn print_csv(catalog: &Catalog, visible: &[VisibleStar]) {
    println!("name,distance_ly,render_scale,opaque_core,ensure_visible,color");
    for s in visible {
        println!(
            "{},{},{},{},{},{}",
            name_of(catalog, s),
            s.distance_ly,
            s.hints.render_scale,
            s.hints.opaque_core,
            s.hints.ensure_visible,
            s.color
        );
    }
}

fn parse_vector(s: &str) -> anyhow::Result<Vector3> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        anyhow::bail!("Invalid vector '{}', expected x,y,z", s);
    }
    let x: f64 = parts[0].parse()?;
    let y: f64 = parts[1].parse()?;
    let z: f64 = parts[2].parse()?;
    Ok(Vector3::new(x, y, z))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_vectors_are_values() {
        let cli = Cli::try_parse_from([
            "query-catalog",
            "--stars",
            "stars.csv",
            "target",
            "--pos",
            "-2.5,0,1",
            "--dir",
            "-1,0,0",
        ])
        .unwrap();
        let Commands::Target { pos, dir } = cli.command else {
            panic!("expected the target subcommand");
        };
        assert_eq!(parse_vector(&pos).unwrap(), Vector3::new(-2.5, 0.0, 1.0));
        assert_eq!(parse_vector(&dir).unwrap(), Vector3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_visible_accepts_negative_direction() {
        let cli = Cli::try_parse_from([
            "query-catalog",
            "--stars",
            "stars.csv",
            "visible",
            "--dir",
            "0,-1,0",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::Visible { ref dir, .. } if dir == "0,-1,0"));
    }
}
