use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rustavl::render::{join_keys, structure};
use rustavl::{parse_keys, AvlTree, KeyPreset, Traversal};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "rustavl", about = "Insert keys into an AVL tree and show each rebalancing step")]
struct Cli {
    /// Keys to insert, separated by commas or spaces.
    keys: Vec<String>,
    /// Read keys from a file instead (commas or whitespace between keys).
    #[arg(long, conflicts_with = "keys")]
    keys_file: Option<PathBuf>,
    /// Built-in key sequence used when no keys are given.
    #[arg(long, value_enum, default_value_t = KeyPreset::Demo)]
    preset: KeyPreset,
    /// Run the whole sequence this many times, starting from an empty tree each time.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    rounds: u32,
    /// Log every rotation.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)))
        .with_writer(std::io::stderr)
        .init();

    let keys = load_keys(&cli)?;
    let mut tree = AvlTree::new();

    for round in 1..=cli.rounds {
        if round > 1 {
            tree.reset();
            println!();
        }
        info!(round, keys = keys.len(), "starting insertion round");
        run_round(&mut tree, &keys);
    }

    Ok(())
}

fn load_keys(cli: &Cli) -> Result<Vec<i32>> {
    if let Some(path) = &cli.keys_file {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read keys file {}", path.display()))?;
        return parse_keys(&text).with_context(|| format!("bad keys in {}", path.display()));
    }
    if !cli.keys.is_empty() {
        return parse_keys(&cli.keys.join(" ")).context("bad keys on the command line");
    }
    Ok(cli.preset.keys().to_vec())
}

fn run_round(tree: &mut AvlTree<i32>, keys: &[i32]) {
    println!("Insertion steps:");
    for &key in keys {
        println!(" {}", tree.insert(key));
    }

    println!("\n---> Insertion process completed <---\n");
    for order in Traversal::ALL {
        println!(" {:<11}: {}", order.label(), join_keys(&tree.collect(order)));
    }
    println!("\nFinal tree structure:\n{}", structure(tree));
}
