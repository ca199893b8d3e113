//! Command-line driver: solve one route query on a network stored as JSON.
//!
//! ```text
//! route <network.json> <start> <exit>[,<exit>...]
//! ```
//!
//! The file holds `{"edges": [[from, to, weight], ...], "shortcuts": [[trigger, cost, destination], ...]}`.

use serde::Deserialize;
use shortcut_sssp::{RouteSolver, ShortcutCandidate};
use std::{env, fs, process};

#[derive(Debug, Deserialize)]
struct NetworkFile {
    edges: Vec<(usize, usize, i64)>,
    #[serde(default)]
    shortcuts: Vec<(usize, i64, usize)>,
}

fn parse_exits(arg: &str) -> Result<Vec<usize>, std::num::ParseIntError> {
    arg.split(',')
        .filter(|s| !s.trim().is_empty())
        .map(|s| s.trim().parse())
        .collect()
}

fn run(args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let [path, start, exits] = args else {
        return Err("usage: route <network.json> <start> <exit>[,<exit>...]".into());
    };

    let network: NetworkFile = serde_json::from_str(&fs::read_to_string(path)?)?;
    let shortcuts: Vec<ShortcutCandidate<i64>> = network.shortcuts.into_iter().map(Into::into).collect();
    let solver = RouteSolver::from_edges(&network.edges, &shortcuts)?;

    let start: usize = start.parse()?;
    let exits = parse_exits(exits)?;
    log::info!("solving {} -> {:?} on {}", start, exits, path);

    match solver.solve(start, &exits)? {
        Some(route) => {
            let path: Vec<String> = route.path.iter().map(|v| v.to_string()).collect();
            println!("cost: {}", route.cost);
            println!("path: {}", path.join(" -> "));
            println!(
                "shortcut: {} -> {} (cost {})",
                route.shortcut.trigger, route.shortcut.destination, route.shortcut.cost
            );
        }
        None => println!("no route: no usable shortcut reaches an exit"),
    }

    Ok(())
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    if let Err(err) = run(&args) {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}
