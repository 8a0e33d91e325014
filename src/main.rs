use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Arg, ArgAction, ArgGroup, Command};

use seqgraph::debruijn::{self, DebruijnGraph};
use seqgraph::graph_viz;
use seqgraph::overlap::{OverlapGraph, MIN_OVERLAP};
use seqgraph::reads;

const INPUT_ERROR: &str = "Input not recognized. Please double check your input and try again.";
const OVERLAP_DOT: &str = "overlapG.dot";
const DEBRUIJN_DOT: &str = "deBruijnG.dot";

fn cli() -> Command {
    // the accepted surface is exactly one file and one mode flag; anything
    // else is reported with the fixed input error, so the automatic help
    // flag is turned off
    Command::new("seqgraph")
        .about("Builds an overlap or de Bruijn graph from a file of sequencing reads")
        .disable_help_flag(true)
        .arg(Arg::new("file").value_name("FILE").required(true))
        .arg(Arg::new("overlap").short('O').action(ArgAction::SetTrue))
        .arg(Arg::new("debruijn").short('D').action(ArgAction::SetTrue))
        .group(ArgGroup::new("mode").args(["overlap", "debruijn"]).required(true))
}

fn build_overlap(input: &Path, output: &Path) -> Result<()> {
    let reads = reads::read_sequences(input)?;
    let graph = OverlapGraph::build(&reads, MIN_OVERLAP);
    graph_viz::write_overlap_dot(&graph, output)?;
    println!("Overlap graph successfully created.");
    Ok(())
}

fn build_debruijn(input: &Path, output: &Path) -> Result<()> {
    let reads = reads::read_sequences(input)?;
    let graph = DebruijnGraph::build(&reads, debruijn::K);
    graph_viz::write_debruijn_dot(&graph, output)?;
    println!("de Bruijn graph successfully created.");
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let matches = match cli().try_get_matches() {
        Ok(matches) => matches,
        Err(_) => {
            println!("{}", INPUT_ERROR);
            return ExitCode::from(2);
        }
    };

    let input = Path::new(matches.get_one::<String>("file").unwrap());
    let result = if matches.get_flag("overlap") {
        build_overlap(input, Path::new(OVERLAP_DOT))
    } else {
        build_debruijn(input, Path::new(DEBRUIJN_DOT))
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
