//! Resume builder - command-line host
//!
//! Reads one JSON command per line on stdin and answers with one JSON
//! response per line on stdout. Exports run in the background; their result
//! arrives as a later `exportFinished` line.

mod cli;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use export::ExportOutcome;
use resume_builder::{execute, Command, Response, Session};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Stdout};
use tokio::task::JoinSet;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting resume builder");
    tracing::info!("App data directory: {:?}", cli.data_dir);

    let mut settings = export::SettingsManager::new(&cli.data_dir);
    let settings = settings
        .load()
        .await
        .with_context(|| format!("reading settings from {}", cli.data_dir.display()))?
        .clone();
    let mut session = Session::new(&settings);

    if cli.export_once {
        let outcome = session.export().await;
        println!("{}", serde_json::to_string(&Response::export_finished(&outcome))?);
        return Ok(());
    }

    run_command_loop(&mut session).await
}

async fn run_command_loop(session: &mut Session) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    let mut exports: JoinSet<ExportOutcome> = JoinSet::new();

    loop {
        let response = tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("reading stdin")? else {
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }
                match serde_json::from_str::<Command>(&line) {
                    Ok(Command::Export) => match session.begin_export() {
                        Some(job) => {
                            exports.spawn(job.run());
                            Response::ExportStarted
                        }
                        None => Response::export_finished(&ExportOutcome::Busy),
                    },
                    Ok(command) => execute(session, command).unwrap_or_else(Response::error),
                    Err(e) => Response::error(format!("Malformed command: {}", e)),
                }
            }
            Some(joined) = exports.join_next(), if !exports.is_empty() => {
                Response::export_finished(&session.finish_joined(joined))
            }
        };
        write_response(&mut stdout, &response).await?;
    }

    // Let a running export land before exiting
    while let Some(joined) = exports.join_next().await {
        let outcome = session.finish_joined(joined);
        write_response(&mut stdout, &Response::export_finished(&outcome)).await?;
    }

    tracing::info!("Shutting down");
    Ok(())
}

async fn write_response(stdout: &mut Stdout, response: &Response) -> anyhow::Result<()> {
    let mut json = serde_json::to_vec(response)?;
    json.push(b'\n');
    stdout.write_all(&json).await?;
    stdout.flush().await?;
    Ok(())
}
