//! Example: object correspondence on an ARC-style puzzle task.
//!
//! Loads a task JSON file ({"train": [{"input": [[..]], "output": [[..]]}]}),
//! ingests every train example into a graph store, then computes the optimal
//! one-to-one input/output assignment for one chosen example along with the
//! properties each matched pair does not share.
//!
//! Results are written to a JSON file next to the task file.
//! Ingestion and assignment timing is printed to stdout.
//!
//! Run from the workspace root:
//!   cargo run -p grid-graph --example correspondence -- --help
//!   cargo run -p grid-graph --example correspondence -- --task data/task_0.json

use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;
use grid_graph::{
    DEFAULT_ASSIGNMENT_THRESHOLD, Example, Grid, IngestConfig, MatchStatus, ingest_task,
    optimal_one_to_one_assignment, unshared_properties,
};
use serde::{Deserialize, Serialize};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(about = "Match input objects to output objects of one puzzle example")]
struct Args {
    /// Path to the task JSON file
    #[arg(long, default_value = "data/task_0.json")]
    task: String,

    /// 1-based train example to match (0 = all examples)
    #[arg(long, default_value_t = 1)]
    example: u32,

    /// Minimum similarity for an accepted match
    #[arg(long, default_value_t = DEFAULT_ASSIGNMENT_THRESHOLD)]
    threshold: f64,

    /// Row batch size for the overlap query
    #[arg(long, default_value_t = 100)]
    batch_size: usize,

    /// Output JSON path (default: <task stem>_matches.json next to the task)
    #[arg(long)]
    out: Option<String>,
}

// ── Task JSON ─────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct TaskFile {
    train: Vec<PairDto>,
}

#[derive(Deserialize)]
struct PairDto {
    input: Vec<Vec<u8>>,
    output: Vec<Vec<u8>>,
}

// ── JSON DTOs ─────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct AssignmentDto {
    input_id: Option<u32>,
    output_id: u32,
    similarity: f64,
    matched: bool,
}

#[derive(Serialize)]
struct UnsharedDto {
    input_id: u32,
    output_id: u32,
    unshared: Vec<&'static str>,
}

#[derive(Serialize)]
struct ExampleResult {
    example: u32,
    /// Wall-clock time for this example's query and assignment, in
    /// milliseconds.
    elapsed_ms: f64,
    assignments: Vec<AssignmentDto>,
    unshared: Vec<UnsharedDto>,
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();

    let task_path = &args.task;
    let out_path = args.out.clone().unwrap_or_else(|| {
        let p = std::path::Path::new(task_path);
        let stem = p.file_stem().unwrap_or_default().to_string_lossy();
        let dir = p.parent().unwrap_or(std::path::Path::new("."));
        dir.join(format!("{stem}_matches.json"))
            .to_string_lossy()
            .into_owned()
    });

    let raw = std::fs::read_to_string(task_path).with_context(|| format!("reading {task_path}"))?;
    let task: TaskFile =
        serde_json::from_str(&raw).with_context(|| format!("parsing {task_path}"))?;

    let n_examples = task.train.len() as u32;
    if n_examples == 0 {
        bail!("{task_path} has no train examples");
    }
    if args.example > n_examples {
        bail!("--example {} out of range (task has {n_examples} train examples)", args.example);
    }

    let examples = task
        .train
        .iter()
        .enumerate()
        .map(|(i, pair)| {
            let input = Grid::from_rows(&pair.input)
                .with_context(|| format!("train[{i}] input grid"))?;
            let output = Grid::from_rows(&pair.output)
                .with_context(|| format!("train[{i}] output grid"))?;
            Ok(Example { input, output })
        })
        .collect::<Result<Vec<_>>>()?;

    println!("loaded {task_path}: {n_examples} train examples");
    println!("config: threshold={:.2}, batch_size={}", args.threshold, args.batch_size);

    let t0 = Instant::now();
    let store = ingest_task(&examples, &IngestConfig::default()).context("ingesting task")?;
    println!("ingestion: {:.2} ms", t0.elapsed().as_secs_f64() * 1e3);

    let selected: Vec<u32> = if args.example == 0 {
        (1..=n_examples).collect()
    } else {
        vec![args.example]
    };

    let mut results: Vec<ExampleResult> = Vec::with_capacity(selected.len());
    for example_id in selected {
        let t0 = Instant::now();
        let records = store
            .get_shared_properties(example_id, args.batch_size)
            .with_context(|| format!("overlap query for example {example_id}"))?;
        let assignments = optimal_one_to_one_assignment(&records, args.threshold);
        let unshared = unshared_properties(&records, &assignments);
        let elapsed_ms = t0.elapsed().as_secs_f64() * 1e3;

        let matched = assignments
            .iter()
            .filter(|a| a.status == MatchStatus::Matched)
            .count();
        println!(
            "  example {example_id}: {matched} matched, {} unmatched  ({elapsed_ms:.2} ms)",
            assignments.len() - matched
        );
        for a in &assignments {
            match a.input_id {
                Some(input_id) => println!(
                    "    {input_id} -> {}  (similarity {:.2})",
                    a.output_id, a.similarity
                ),
                None => println!("    unmatched output {}", a.output_id),
            }
        }

        results.push(ExampleResult {
            example: example_id,
            elapsed_ms,
            assignments: assignments
                .iter()
                .map(|a| AssignmentDto {
                    input_id: a.input_id,
                    output_id: a.output_id,
                    similarity: a.similarity,
                    matched: a.status == MatchStatus::Matched,
                })
                .collect(),
            unshared: unshared
                .iter()
                .map(|u| UnsharedDto {
                    input_id: u.input_id,
                    output_id: u.output_id,
                    unshared: u.unshared.iter().map(|p| p.as_str()).collect(),
                })
                .collect(),
        });
    }

    let out_file =
        std::fs::File::create(&out_path).with_context(|| format!("creating {out_path}"))?;
    serde_json::to_writer_pretty(out_file, &results)
        .with_context(|| format!("writing JSON to {out_path}"))?;

    println!("results written to {out_path}");
    Ok(())
}
