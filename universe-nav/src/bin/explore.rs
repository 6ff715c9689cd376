use anyhow::Context;
use clap::Parser;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Editor, Helper};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use universe_nav::console::{self, CommandOutput, COMMANDS};
use universe_nav::Session;

#[derive(Parser)]
#[command(name = "explore")]
#[command(about = "Fly a camera through a star catalog")]
struct Cli {
    /// Path to the star catalog
    stars: PathBuf,

    /// Path to the planet catalog
    #[arg(long)]
    planets: Option<PathBuf>,

    /// Log at debug level (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn history_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_default()
        .join(".universe_explore_history")
}

struct ExploreHelper;

impl Completer for ExploreHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let up_to = &line[..pos];
        if up_to.contains(char::is_whitespace) {
            return Ok((pos, vec![]));
        }
        let prefix = up_to.to_uppercase();
        let matches = COMMANDS
            .iter()
            .filter(|c| c.starts_with(&prefix))
            .map(|c| Pair {
                display: c.to_string(),
                replacement: c.to_string(),
            })
            .collect();
        Ok((0, matches))
    }
}

impl Hinter for ExploreHelper {
    type Hint = String;
}
impl Highlighter for ExploreHelper {}
impl Validator for ExploreHelper {}
impl Helper for ExploreHelper {}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut session = Session::open(&cli.stars, cli.planets.as_deref())
        .with_context(|| format!("Failed to load catalog {:?}", cli.stars))?;

    println!("universe explore v{}", env!("CARGO_PKG_VERSION"));
    println!(
        "{} stars, {} planets. Type HELP for commands, Ctrl-D to exit\n",
        session.catalog.star_count(),
        session.catalog.planet_count()
    );

    let mut rl = Editor::with_config(rustyline::Config::builder().auto_add_history(true).build())?;
    rl.set_helper(Some(ExploreHelper));

    let history = history_path();
    let _ = rl.load_history(&history);

    loop {
        match rl.readline(">> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if line.eq_ignore_ascii_case("QUIT") {
                    println!("Bye!");
                    break;
                }
                match console::dispatch(&mut session, line) {
                    Ok(output) => print_output(output),
                    Err(e) => eprintln!("Error: {}", e),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("Bye!");
                break;
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                break;
            }
        }
    }

    let _ = rl.save_history(&history);
    Ok(())
}

fn print_output(output: CommandOutput) {
    match output {
        CommandOutput::Text(s) => println!("{}", s),
        CommandOutput::Table { headers, rows } => print_table(&headers, &rows),
        CommandOutput::None => {}
    }
}

fn print_table(headers: &[String], rows: &[Vec<String>]) {
    let widths: Vec<usize> = (0..headers.len())
        .map(|i| {
            let hw = headers[i].chars().count();
            let rw = rows
                .iter()
                .map(|r| r.get(i).map_or(0, |s| s.chars().count()))
                .max()
                .unwrap_or(0);
            hw.max(rw)
        })
        .collect();

    for (i, h) in headers.iter().enumerate() {
        print!("{:>width$}  ", h, width = widths[i]);
    }
    println!();

    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            print!("{:>width$}  ", cell, width = widths[i]);
        }
        println!();
    }
}
