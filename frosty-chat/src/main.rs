use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::info;
use tracing_subscriber::EnvFilter;

use frosty_chat::{render_table, Orchestrator, TurnOutcome};
use frosty_cortex::{CortexCompletion, CortexRetriever, CortexWarehouse, WarehouseConfig};
use frosty_sql::{ExtractionMode, SqlExtractor};

#[derive(Debug, Parser)]
#[command(name = "frosty", about = "Chat with your warehouse tables")]
struct Args {
    /// Cortex model identifier to complete with.
    #[arg(long)]
    model: Option<String>,

    /// Table the direct prompt should talk about.
    #[arg(long)]
    table: Option<String>,

    /// How to look for SQL in completion text.
    #[arg(long, default_value = "lenient", value_parser = parse_extraction_mode)]
    extraction_mode: ExtractionMode,

    /// Augment prompts with similar prior questions from the reference table.
    #[arg(long)]
    retrieval: bool,

    /// Reference pairs to retrieve per question.
    #[arg(long, default_value_t = 3)]
    top_k: usize,

    /// Attempts per warehouse query before giving up.
    #[arg(long, default_value_t = 2)]
    max_attempts: usize,

    /// Rows shown by the :load command.
    #[arg(long, default_value_t = 100)]
    preview_rows: usize,

    /// Reference table for retrieval.
    #[arg(long, env = "FROSTY_REFERENCE_TABLE")]
    reference_table: Option<String>,
}

fn parse_extraction_mode(value: &str) -> Result<ExtractionMode, String> {
    match value {
        "strict" => Ok(ExtractionMode::Strict),
        "lenient" => Ok(ExtractionMode::Lenient),
        other => Err(format!("unknown extraction mode: {other}")),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = WarehouseConfig::from_env()?;
    let warehouse = CortexWarehouse::connect(&config).await?;
    info!(database = warehouse.database(), schema = warehouse.schema(), "connected");

    let completion = CortexCompletion::new(warehouse.clone());
    let retriever = args.retrieval.then(|| {
        let retriever = CortexRetriever::new(warehouse.clone());
        match &args.reference_table {
            Some(table) => retriever.with_reference_table(table.clone()),
            None => retriever,
        }
    });

    let mut orchestrator = Orchestrator::new(
        completion,
        warehouse,
        retriever,
        SqlExtractor::new(args.extraction_mode),
    )
    .with_top_k(args.top_k)
    .with_max_attempts(args.max_attempts);

    if let Some(model) = &args.model {
        orchestrator.select_model(model)?;
    }
    if let Some(table) = &args.table {
        orchestrator.select_table(table)?;
    }

    println!("Frosty — ask about your tables. :help for commands.");
    println!(
        "assistant> {}",
        orchestrator.conversation().messages()[0].content
    );

    let mut editor = DefaultEditor::new()?;
    loop {
        match editor.readline("you> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                editor.add_history_entry(line)?;
                if let Some(command) = line.strip_prefix(':') {
                    if !run_command(&mut orchestrator, command, args.preview_rows).await {
                        break;
                    }
                    continue;
                }
                orchestrator.push_user(line);
                if let Some(outcome) = orchestrator.respond().await {
                    print_outcome(&outcome);
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("input error: {err}");
                break;
            }
        }
    }

    Ok(())
}

/// Returns false when the REPL should exit.
async fn run_command<C, W, R>(
    orchestrator: &mut Orchestrator<C, W, R>,
    command: &str,
    preview_rows: usize,
) -> bool
where
    C: frosty_core::CompletionModel,
    W: frosty_core::Warehouse,
    R: frosty_core::ContextRetriever,
{
    let mut parts = command.splitn(2, ' ');
    let name = parts.next().unwrap_or_default();
    let argument = parts.next().map(str::trim);

    match name {
        "quit" | "exit" => return false,
        "reset" => match orchestrator.reset().await {
            Ok(()) => println!(
                "assistant> {}",
                orchestrator.conversation().messages()[0].content
            ),
            Err(err) => eprintln!("reset failed: {err}"),
        },
        "load" => {
            let table = argument.unwrap_or(orchestrator.table()).to_string();
            match orchestrator.load_table(&table, preview_rows).await {
                Ok(rows) => {
                    println!("Here's the data from `{table}`:");
                    println!("{}", render_table(&rows));
                }
                Err(err) => eprintln!("An error occurred while loading the table `{table}`: {err}"),
            }
        }
        "table" => match argument {
            Some(table) => match orchestrator.select_table(table) {
                Ok(()) => println!("table: {table}"),
                Err(err) => eprintln!("{err}"),
            },
            None => println!(
                "tables: {}",
                orchestrator.catalog().tables().join(", ")
            ),
        },
        "model" => match argument {
            Some(model) => match orchestrator.select_model(model) {
                Ok(()) => println!("model: {model}"),
                Err(err) => eprintln!("{err}"),
            },
            None => println!(
                "models: {}",
                orchestrator.catalog().models().join(", ")
            ),
        },
        "help" => {
            println!(":reset              start a fresh chat");
            println!(":load [table]       preview rows from a table");
            println!(":table <name>       pick the table to ask about");
            println!(":model <name>       pick the completion model");
            println!(":quit               leave");
        }
        other => eprintln!("unknown command: :{other}"),
    }
    true
}

fn print_outcome(outcome: &TurnOutcome) {
    match outcome {
        TurnOutcome::Answered {
            response,
            sql,
            rows,
        } => {
            println!("assistant> {response}");
            if let Some(sql) = sql {
                println!("[sql] {sql}");
            }
            if let Some(rows) = rows {
                println!("{}", render_table(rows));
            }
        }
        TurnOutcome::Refused { response, notice } => {
            println!("assistant> {response}");
            println!("{notice}");
        }
        TurnOutcome::ExecutionFailed { response, notice } => {
            println!("assistant> {response}");
            eprintln!("{notice}");
        }
        TurnOutcome::Failed { notice } => {
            eprintln!("{notice}");
            println!("assistant> {}", frosty_chat::APOLOGY);
        }
    }
}
