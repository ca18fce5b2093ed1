use clap::{Parser, ValueEnum};
use std::fs;
use std::io::Read;
use std::path::PathBuf;

use lg_core::{LgError, LgResult, Weight};
use lg_graph::{AdjacencyGraph, EdgeListGraph, Graph};

#[derive(Parser)]
#[command(name = "lg-cli")]
#[command(about = "Drive a weighted directed graph from a command script", long_about = None)]
struct Cli {
    /// Internal representation to use
    #[arg(long, value_enum, default_value_t = Rep::Adjacency)]
    rep: Rep,

    /// Script file; reads stdin when omitted.
    ///
    /// One command per line: add L | set S T W | remove L | vertices |
    /// sources T | targets S | show. Blank lines and '#' comments ignored.
    script: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Rep {
    /// Each vertex owns its outgoing-edge map
    Adjacency,
    /// Flat edge list over a vertex set
    EdgeList,
}

fn main() -> LgResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let text = match &cli.script {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    match cli.rep {
        Rep::Adjacency => run_script(&mut AdjacencyGraph::new(), &text),
        Rep::EdgeList => run_script(&mut EdgeListGraph::new(), &text),
    }
}

fn run_script<G: Graph<String>>(graph: &mut G, text: &str) -> LgResult<()> {
    for (line_no, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        run_command(graph, line).map_err(|err| match err {
            LgError::InvalidInput { what } => LgError::InvalidInput {
                what: format!("line {}: {what}", line_no + 1),
            },
            other => other,
        })?;
    }
    tracing::info!("script complete");
    Ok(())
}

fn run_command<G: Graph<String>>(graph: &mut G, line: &str) -> LgResult<()> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        ["add", label] => {
            let added = graph.add((*label).to_string());
            tracing::debug!(label, added, "add");
            println!("add {label}: {added}");
        }
        ["set", source, target, weight] => {
            let weight = parse_weight(weight)?;
            let previous = graph.set((*source).to_string(), (*target).to_string(), weight);
            tracing::debug!(source, target, weight, previous, "set");
            println!("set {source} {target} {weight}: previous {previous}");
        }
        ["remove", label] => {
            let removed = graph.remove(&(*label).to_string());
            tracing::debug!(label, removed, "remove");
            println!("remove {label}: {removed}");
        }
        ["vertices"] => {
            let mut all: Vec<String> = graph.vertices().into_iter().collect();
            all.sort();
            println!("vertices: {}", all.join(" "));
        }
        ["sources", target] => {
            print_weighted("sources", target, graph.sources(&(*target).to_string()));
        }
        ["targets", source] => {
            print_weighted("targets", source, graph.targets(&(*source).to_string()));
        }
        ["show"] => {
            print!("{}", graph.describe());
        }
        _ => {
            return Err(LgError::InvalidInput {
                what: format!("unrecognized command: {line}"),
            });
        }
    }
    Ok(())
}

fn print_weighted(what: &str, vertex: &str, weighted: std::collections::HashMap<String, Weight>) {
    let mut entries: Vec<(String, Weight)> = weighted.into_iter().collect();
    entries.sort();
    let rendered: Vec<String> = entries
        .iter()
        .map(|(label, weight)| format!("{label}:{weight}"))
        .collect();
    println!("{what} {vertex}: {}", rendered.join(" "));
}

/// Parse a weight token from a script, rejecting negatives explicitly.
///
/// The library takes unsigned weights, so this boundary is the one place
/// a negative weight can appear; it is caller-input validation, not an
/// invariant violation.
fn parse_weight(token: &str) -> LgResult<Weight> {
    let value: i64 = token.parse().map_err(|_| LgError::InvalidInput {
        what: format!("weight must be an integer, got '{token}'"),
    })?;
    if value < 0 {
        return Err(LgError::InvalidInput {
            what: format!("negative weight {value} rejected"),
        });
    }
    Weight::try_from(value).map_err(|_| LgError::InvalidInput {
        what: format!("weight {value} out of range"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_weight_accepts_zero_and_positive() {
        assert_eq!(parse_weight("0").unwrap(), 0);
        assert_eq!(parse_weight("42").unwrap(), 42);
    }

    #[test]
    fn parse_weight_rejects_negative_and_garbage() {
        assert!(matches!(
            parse_weight("-3"),
            Err(LgError::InvalidInput { .. })
        ));
        assert!(matches!(
            parse_weight("five"),
            Err(LgError::InvalidInput { .. })
        ));
    }

    #[test]
    fn unknown_command_is_invalid_input() {
        let mut graph: AdjacencyGraph<String> = AdjacencyGraph::new();
        let err = run_command(&mut graph, "frobnicate A").unwrap_err();
        assert!(matches!(err, LgError::InvalidInput { .. }));
    }

    #[test]
    fn script_drives_the_graph() {
        let mut graph: EdgeListGraph<String> = EdgeListGraph::new();
        let script = "# demo\nadd A\nset A B 5\nset C B 4\nremove C\n";
        run_script(&mut graph, script).unwrap();
        assert_eq!(graph.targets(&"A".to_string())["B"], 5);
        assert_eq!(graph.sources(&"B".to_string()).len(), 1);
    }
}
