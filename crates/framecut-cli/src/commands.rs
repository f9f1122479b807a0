use std::io::{self, BufRead, IsTerminal, Write};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tracing::{debug, info, info_span, warn};

use framecut_cli::clipboard::default_clipboard;
use framecut_cli::config::Config;
use framecut_cli::input::{HELP, SessionCommand, parse_command, parse_size};
use framecut_cli::render::{
    OutputFormat, TerminalRenderer, field_reference_table, terminal_area,
};
use framecut_core::{CopyStatus, ExportController, Renderer, Session, copy_text};

use crate::cli::{CalcArgs, SessionArgs};

/// How often the session checks for a finished copy or an expired status.
const TICK: Duration = Duration::from_millis(100);

/// How long a session waits at exit for a copy still in flight.
const EXIT_COPY_WAIT: Duration = Duration::from_secs(2);

pub fn run_fields() -> Result<()> {
    println!("{}", field_reference_table());
    Ok(())
}

/// Run a one-shot calculation. Returns whether the results were valid.
pub fn run_calc(args: &CalcArgs, config: &Config) -> Result<bool> {
    let span = info_span!("calc");
    let _guard = span.enter();

    let mut options = config.engine_options();
    if let Some(units) = args.units {
        options = options.with_unit(units.into());
    }
    let mut session = Session::new(options);
    for (name, raw) in args.inputs() {
        session = session.edit(name.id(), raw);
    }
    if let Some(size) = &args.diagram {
        let cells = parse_size(size).context("parse --diagram")?;
        session = session.resize(terminal_area(cells, config.padding()));
    }

    let mut frame = session.frame();
    if args.copy {
        match session.export_text() {
            Some(text) => {
                let outcome = copy_text(&default_clipboard(), &text);
                frame = frame.with_status(Some(outcome.message()));
            }
            None => warn!("nothing copied: results are not valid"),
        }
    }

    let format = OutputFormat::from(args.format);
    let stdout = io::stdout();
    match (format, session.export_text()) {
        (OutputFormat::Text, Some(text)) => {
            let mut out = stdout.lock();
            writeln!(out, "{text}").context("write cut list")?;
            if let Some(status) = &frame.status {
                eprintln!("{status}");
            }
        }
        (OutputFormat::Text, None) => {}
        _ => TerminalRenderer::new(stdout.lock(), format)
            .render(&frame)
            .context("write results")?,
    }

    let valid = session.results_valid();
    if !valid {
        for field in &frame.fields {
            if let Some(message) = &field.message {
                eprintln!("{}: {message}", field.label);
            }
        }
        let missing: Vec<&str> = frame
            .fields
            .iter()
            .filter(|field| field.required && field.raw.trim().is_empty())
            .map(|field| field.label)
            .collect();
        if !missing.is_empty() {
            eprintln!("missing: {}", missing.join(", "));
        }
    }
    info!(results_valid = valid, unit = %session.unit(), "calc finished");
    Ok(valid)
}

/// Interactive loop: each line is parsed into a command, applied, and the
/// new state re-rendered. Copies run in the background; the state is also
/// re-rendered when the copy status appears or clears.
pub fn run_session(args: &SessionArgs, config: &Config) -> Result<()> {
    let span = info_span!("session");
    let _guard = span.enter();

    let mut options = config.engine_options();
    if let Some(units) = args.units {
        options = options.with_unit(units.into());
    }
    let mut controller =
        ExportController::new(default_clipboard(), CopyStatus::new(options.status_duration));
    let mut session = Session::new(options);
    if let Some(size) = &args.size {
        let cells = parse_size(size).context("parse --size")?;
        session = session.resize(terminal_area(cells, config.padding()));
    }

    let mut renderer = TerminalRenderer::new(io::stdout(), args.format.into());
    let interactive = io::stdin().is_terminal();
    let lines = spawn_line_reader();

    renderer
        .render(&session.frame())
        .context("write session state")?;
    let mut prompt = interactive;
    loop {
        if prompt {
            eprint!("> ");
            prompt = false;
        }
        let received = lines.recv_timeout(TICK);
        if controller.tick(Instant::now()) {
            let frame = session.frame().with_status(controller.status().text());
            renderer.render(&frame).context("write session state")?;
            prompt = interactive;
        }
        let line = match received {
            Ok(line) => line.context("read session input")?,
            Err(RecvTimeoutError::Timeout) => continue,
            Err(RecvTimeoutError::Disconnected) => break,
        };
        prompt = interactive;

        match parse_command(&line) {
            Ok(SessionCommand::Nothing) => continue,
            Ok(SessionCommand::Quit) => break,
            Ok(SessionCommand::Help) => {
                println!("{HELP}");
                continue;
            }
            Ok(SessionCommand::Fields) => {
                println!("{}", field_reference_table());
                continue;
            }
            Ok(SessionCommand::Show) => {}
            Ok(SessionCommand::Copy) => {
                if !controller.request(&session) {
                    eprintln!("nothing to copy until every required field is valid");
                }
                continue;
            }
            Ok(SessionCommand::Event(event)) => {
                debug!(?event, "session event");
                session = session.apply(&event);
            }
            Err(error) => {
                eprintln!("error: {error}");
                continue;
            }
        }

        let frame = session.frame().with_status(controller.status().text());
        renderer.render(&frame).context("write session state")?;
    }

    let deadline = Instant::now() + EXIT_COPY_WAIT;
    while controller.is_copying() && Instant::now() < deadline {
        thread::sleep(TICK);
        if controller.tick(Instant::now()) {
            let frame = session.frame().with_status(controller.status().text());
            renderer.render(&frame).context("write session state")?;
        }
    }
    if controller.is_copying() {
        warn!("clipboard still busy at exit");
    }
    info!(results_valid = session.results_valid(), "session finished");
    Ok(())
}

/// Read stdin lines on their own thread so the session can keep ticking.
fn spawn_line_reader() -> Receiver<io::Result<String>> {
    let (sender, receiver) = mpsc::channel();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            if sender.send(line).is_err() {
                break;
            }
        }
    });
    receiver
}
