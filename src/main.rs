//! Console shell and entry point.
//!
//! This module provides the thin integration layer between the hrdesk library
//! and a line-oriented terminal. It owns stdin/stdout; everything else lives in
//! the library.
//!
//! # Lifecycle
//!
//! 1. **Load**: Read config, initialize tracing, create `AppState`
//! 2. **Render**: Draw the active tab, then any notices from the last command
//! 3. **Read**: Read one command line through the line source
//! 4. **Dispatch**: Parse it into an `Event` and run it through `dispatch`
//! 5. Repeat until `quit` or end of input
//!
//! # Input
//!
//! An interactive terminal is read through a `rustyline` editor, with line
//! editing and history. Ctrl-C leaves a notice, Ctrl-D ends the session.
//! Piped input is read byte-wise and decoded lossily, so a stray invalid
//! byte never ends a session.
//!
//! # Prompts
//!
//! Delete confirmations are asked inline (`[y/N]`) through the same line
//! source. Notices are buffered and shown under the next screen, since each
//! render clears the terminal.

#![allow(clippy::multiple_crate_versions)]

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::Path;
use std::process::ExitCode;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use hrdesk::app::command::parse_command;
use hrdesk::infrastructure::{config_file, expand_tilde};
use hrdesk::ui::components::render_notice;
use hrdesk::{dispatch, AppState, Config, Event, HrdeskError, Notice, Prompter, Theme};

const PROMPT: &str = "> ";
const DEFAULT_ROWS: usize = 40;
const DEFAULT_COLS: usize = 100;

/// One read from a line source.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Input {
    Line(String),
    /// Ctrl-C at the prompt.
    Interrupted,
    /// The terminal delivered bytes that are not UTF-8.
    Unreadable(String),
    Eof,
}

/// Where command lines and confirmation answers come from.
trait LineSource {
    /// Shows `prompt` and reads one line without its terminator.
    fn read_line(&mut self, prompt: &str) -> hrdesk::Result<Input>;

    /// Records a command line in the history, if the source keeps one.
    fn remember(&mut self, _line: &str) {}
}

impl LineSource for DefaultEditor {
    fn read_line(&mut self, prompt: &str) -> hrdesk::Result<Input> {
        match self.readline(prompt) {
            Ok(line) => Ok(Input::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(Input::Interrupted),
            Err(ReadlineError::Eof) => Ok(Input::Eof),
            Err(ReadlineError::Io(e)) if e.kind() == io::ErrorKind::InvalidData => {
                Ok(Input::Unreadable(e.to_string()))
            }
            Err(e) => Err(HrdeskError::Io(io::Error::other(e.to_string()))),
        }
    }

    fn remember(&mut self, line: &str) {
        if let Err(e) = self.add_history_entry(line) {
            tracing::debug!(error = %e, "history entry dropped");
        }
    }
}

/// Non-interactive line source over any buffered reader.
///
/// Prompts are echoed to `echo`; invalid UTF-8 is replaced, not rejected.
struct ByteLines<R, W> {
    input: R,
    echo: W,
}

impl<R: BufRead, W: Write> ByteLines<R, W> {
    fn new(input: R, echo: W) -> Self {
        Self { input, echo }
    }
}

impl<R: BufRead, W: Write> LineSource for ByteLines<R, W> {
    fn read_line(&mut self, prompt: &str) -> hrdesk::Result<Input> {
        write!(self.echo, "{prompt}")?;
        self.echo.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(Input::Eof);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Input::Line(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// Console-backed prompter.
///
/// Reads answers from `source`, draws to `output`, and keeps notices until
/// the next screen is drawn.
struct Console<S, W> {
    source: S,
    output: W,
    theme: Theme,
    pending: Vec<Notice>,
}

impl<S: LineSource, W: Write> Console<S, W> {
    fn new(source: S, output: W, theme: Theme) -> Self {
        Self {
            source,
            output,
            theme,
            pending: Vec::new(),
        }
    }

    /// Draws the screen followed by the buffered notices.
    fn draw(&mut self, state: &AppState, rows: usize, cols: usize) -> hrdesk::Result<()> {
        let notice_lines: usize = self.pending.iter().map(|n| n.message.lines().count().max(1)).sum();
        let screen_rows = rows.saturating_sub(notice_lines + 1);

        hrdesk::ui::render_to(&mut self.output, state, screen_rows, cols)?;
        for notice in self.pending.drain(..) {
            render_notice(&mut self.output, &notice, &self.theme)?;
        }
        self.output.flush()?;
        Ok(())
    }
}

impl<S: LineSource, W: Write> Prompter for Console<S, W> {
    fn confirm(&mut self, message: &str) -> bool {
        match self.source.read_line(&format!("{message} [y/N] ")) {
            Ok(Input::Line(answer)) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
            Ok(_) => false,
            Err(e) => {
                tracing::warn!(error = %e, "confirmation unreadable, declining");
                false
            }
        }
    }

    fn notify(&mut self, notice: &Notice) {
        self.pending.push(notice.clone());
    }
}

/// Terminal size as `(rows, cols)`, 40 by 100 when stdout is not a terminal.
fn terminal_size() -> (usize, usize) {
    match crossterm::terminal::size() {
        Ok((cols, rows)) if cols > 0 && rows > 0 => (usize::from(rows), usize::from(cols)),
        Ok(_) => (DEFAULT_ROWS, DEFAULT_COLS),
        Err(e) => {
            tracing::trace!(error = %e, "terminal size unavailable");
            (DEFAULT_ROWS, DEFAULT_COLS)
        }
    }
}

fn load_config() -> Config {
    let Some(path) = config_file() else {
        return Config::default();
    };
    Config::from_file(&path).unwrap_or_else(|e| {
        eprintln!("hrdesk: ignoring {}: {e}", path.display());
        Config::default()
    })
}

/// Replaces `import @file` with the file's contents.
fn resolve_import(event: Event) -> hrdesk::Result<Event> {
    match event {
        Event::Import(text) if text.starts_with('@') => {
            let path = expand_tilde(text[1..].trim());
            tracing::debug!(path = %path, "reading import file");
            let contents = std::fs::read_to_string(Path::new(&path))
                .map_err(|e| HrdeskError::Command(format!("cannot read {path}: {e}")))?;
            Ok(Event::Import(contents))
        }
        other => Ok(other),
    }
}

/// Runs the render/read/dispatch loop until `quit` or end of input.
fn session<S: LineSource, W: Write>(state: &mut AppState, console: &mut Console<S, W>) -> hrdesk::Result<()> {
    let _span = tracing::debug_span!("session").entered();

    loop {
        let (rows, cols) = terminal_size();
        console.draw(state, rows, cols)?;

        let line = match console.source.read_line(PROMPT)? {
            Input::Line(line) => line,
            Input::Interrupted => {
                console.notify(&Notice::warning("Interrupted. Type 'quit' to exit."));
                continue;
            }
            Input::Unreadable(reason) => {
                tracing::debug!(reason = %reason, "input line dropped");
                console.notify(&Notice::error(format!("Unreadable input: {reason}")));
                continue;
            }
            Input::Eof => {
                tracing::debug!("end of input");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        console.source.remember(line.trim());

        let event = match parse_command(&line).and_then(resolve_import) {
            Ok(event) => event,
            Err(e) => {
                tracing::debug!(error = %e, "command rejected");
                console.notify(&Notice::error(e.to_string()));
                continue;
            }
        };

        if dispatch(state, event, console)?.quit {
            break;
        }
    }

    writeln!(console.output)?;
    Ok(())
}

fn run() -> hrdesk::Result<()> {
    let config = load_config();
    hrdesk::observability::init_tracing(&config);

    let mut state = hrdesk::initialize(&config);
    let theme = state.theme.clone();

    if io::stdin().is_terminal() {
        let editor = DefaultEditor::new().map_err(|e| io::Error::other(e.to_string()))?;
        session(&mut state, &mut Console::new(editor, io::stdout(), theme))?;
    } else {
        let source = ByteLines::new(io::stdin().lock(), io::stdout());
        session(&mut state, &mut Console::new(source, io::stdout(), theme))?;
    }

    tracing::info!("session ended");
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "fatal error");
            eprintln!("hrdesk: {e}");
            ExitCode::FAILURE
        }
    }
}
