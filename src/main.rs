use anyhow::{Context, Result};
use batch::{TaskEnv, cloud_run_batch, select_batch, slice};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::{self, BufRead, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "batch",
    version,
    about = "Split newline-separated work items into near-equal contiguous batches"
)]
struct Cli {
    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Split stdin into N batches and print them as a JSON array of arrays
    Slice {
        /// Number of batches (zero or negative yields none)
        #[arg(short = 'n', long, allow_negative_numbers = true)]
        count: i64,
    },
    /// Print the batch owned by this task of a parallel job
    Shard {
        /// Task count; read from CLOUD_RUN_TASK_COUNT when omitted
        #[arg(long, requires = "index", allow_negative_numbers = true)]
        count: Option<i64>,

        /// Task index; read from CLOUD_RUN_TASK_INDEX when omitted
        #[arg(long, requires = "count", allow_negative_numbers = true)]
        index: Option<i64>,

        /// Identifier reported alongside failures
        #[arg(long, default_value = "local")]
        batch_id: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "batch=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let items = read_items().context("read work items from stdin")?;
    tracing::info!(items = items.len(), "loaded work items");

    match cli.command {
        Command::Slice { count } => {
            let batches = slice(&items, count);
            tracing::info!(batches = batches.len(), "sliced work items");
            emit(&batches, cli.pretty)
        }
        Command::Shard {
            count,
            index,
            batch_id,
        } => {
            let batch = match (count, index) {
                (Some(count), Some(index)) => select_batch(&items, &TaskEnv::new(count, index)),
                _ => cloud_run_batch(&items),
            }
            .with_context(|| format!("process batch (id:{})", batch_id))?;

            tracing::info!(batch_id = %batch_id, size = batch.len(), "selected batch");
            emit(&batch, cli.pretty)
        }
    }
}

/// Read non-blank stdin lines as work items
fn read_items() -> io::Result<Vec<String>> {
    let mut items = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line?;
        if !line.trim().is_empty() {
            items.push(line);
        }
    }
    Ok(items)
}

fn emit<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<()> {
    let mut out = io::stdout().lock();
    if pretty {
        serde_json::to_writer_pretty(&mut out, value)?;
    } else {
        serde_json::to_writer(&mut out, value)?;
    }
    writeln!(out)?;
    Ok(())
}
