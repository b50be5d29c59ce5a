//! Terminal front end for calcpad.
//!
//! Exposes a `run` helper so the binary stays a thin wrapper, plus the backend
//! worker and app types used by headless tests.

/// Interactive session controller and rendering.
pub mod app;
/// Backend worker, protocol types, and the HTTP evaluator.
pub mod backend;
/// Command-line arguments.
pub mod cli;
/// OSC 52 terminal clipboard.
pub mod clipboard;
/// Client error types.
pub mod error;

use anyhow::{bail, Context};
use app::{CalcApp, Reply};
use backend::{spawn_backend, BackendEvent, HttpEvaluator};
use calcpad_core::{CalcSession, Config, DurableStore, FileStore, MemoryStore, Tone};
use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use clipboard::Osc52Clipboard;
use crossbeam_channel::{select, unbounded};
use std::io::{self, BufRead, IsTerminal, Write};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

pub use error::ClientError;

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("calcpad=warn,calcpad_client=info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}

/// Open the persisted store, or an in-memory one for ephemeral sessions.
///
/// # Errors
/// Returns an error when the data directory cannot be created.
pub fn open_store(config: &Config) -> Result<DurableStore, ClientError> {
    if config.ephemeral {
        return Ok(DurableStore::new(MemoryStore::new()));
    }
    let store = FileStore::open(&config.data_dir)?;
    info!("session data in {}", store.dir().display());
    Ok(DurableStore::new(store))
}

/// Parse arguments, then run one subcommand or the interactive session.
///
/// # Errors
/// Returns an error when the store or HTTP client cannot be set up, when
/// terminal I/O fails, or when a one-shot evaluation fails.
pub fn run() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    if let Some(Commands::Completions { shell }) = &cli.command {
        let mut cmd = Cli::command();
        clap_complete::generate(*shell, &mut cmd, "calcpad", &mut io::stdout());
        return Ok(());
    }

    let config = cli.resolve(Config::from_env());
    let store = open_store(&config)
        .with_context(|| format!("opening data directory {}", config.data_dir.display()))?;
    let mut session = CalcSession::load(store, &config.default_accent);
    let timeout = Duration::from_secs(config.timeout_secs);

    match cli.command {
        Some(Commands::Eval { expression }) => {
            let evaluator = HttpEvaluator::new(&config.server_url, timeout)?;
            session.set_input_focus(true);
            session.insert_text(&expression);
            session.evaluate_with(&evaluator);
            session.flush();
            let display = session.display();
            if display.tone == Tone::Error {
                bail!("{}", display.text);
            }
            println!("{}", display.text);
        }
        Some(Commands::History { clear, json }) => {
            if clear {
                session.clear_history();
            }
            if json {
                println!("{}", serde_json::to_string_pretty(session.history().entries())?);
            } else if clear {
                println!("History cleared");
            } else {
                println!("{}", app::render_history(session.history()));
            }
        }
        Some(Commands::Memory { clear }) => {
            if clear {
                session.memory_clear();
            }
            println!("{}", session.memory().display());
        }
        Some(Commands::Completions { .. }) => {}
        None => {
            let evaluator = HttpEvaluator::new(&config.server_url, timeout)?;
            info!("evaluating with {}", evaluator.endpoint());
            let color = !cli.no_color && io::stdout().is_terminal();
            let backend = spawn_backend(Arc::new(evaluator));
            let app = CalcApp::new(session, backend, Box::new(Osc52Clipboard::stdout()), color);
            run_interactive(app, timeout)?;
        }
    }
    Ok(())
}

enum Input {
    Line(io::Result<String>),
    Closed,
    Event(BackendEvent),
    BackendStopped,
    Redraw,
}

fn print_reply(out: &mut impl Write, reply: &Reply) -> io::Result<()> {
    match reply {
        Reply::Frame(frame) => writeln!(out, "{}", frame)?,
        Reply::Message { text, frame } => writeln!(out, "{}\n{}", text, frame)?,
        Reply::Quit => {}
    }
    out.flush()
}

/// Drive the interactive session until `:q` or end of input.
///
/// Lines from stdin and settled evaluations are multiplexed on this thread so
/// the session has a single writer.
fn run_interactive(mut app: CalcApp, timeout: Duration) -> anyhow::Result<()> {
    let (line_tx, line_rx) = unbounded();
    thread::Builder::new()
        .name("calcpad-stdin".to_string())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                if line_tx.send(line).is_err() {
                    break;
                }
            }
        })
        .context("spawning stdin reader")?;

    let events = app.events();
    let mut out = io::stdout();
    writeln!(out, "Type an expression and press Enter. :help lists commands.")?;
    print_reply(&mut out, &Reply::Frame(app.frame()))?;

    loop {
        let redraw = match app.redraw_at() {
            Some(deadline) => crossbeam_channel::at(deadline),
            None => crossbeam_channel::never(),
        };
        let input = select! {
            recv(line_rx) -> line => line.map_or(Input::Closed, Input::Line),
            recv(events) -> event => event.map_or(Input::BackendStopped, Input::Event),
            recv(redraw) -> _ => Input::Redraw,
        };
        match input {
            Input::Line(Ok(line)) => {
                let reply = app.handle_line(&line);
                if reply == Reply::Quit {
                    break;
                }
                print_reply(&mut out, &reply)?;
            }
            Input::Line(Err(err)) => {
                warn!("failed to read input: {}", err);
                break;
            }
            Input::Closed => break,
            Input::Event(event) => print_reply(&mut out, &app.apply_event(event))?,
            Input::BackendStopped => {
                warn!("backend worker stopped");
                break;
            }
            Input::Redraw => print_reply(&mut out, &Reply::Frame(app.frame()))?,
        }
    }

    if app.settle_pending(timeout) > 0 {
        print_reply(&mut out, &Reply::Frame(app.frame()))?;
    }
    app.shutdown();
    Ok(())
}
