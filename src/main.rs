use std::{
    borrow::Cow,
    fs,
    io::{BufRead, IsTerminal},
    path::{Path, PathBuf},
    process,
};

use clap::Parser;
use laika::{Outcome, Session};
use reedline::{
    Prompt, PromptEditMode, PromptHistorySearch, PromptHistorySearchStatus, Reedline, Signal,
};

/// Extension every LAIka source file must carry.
const EXTENSION: &str = "lai";

/// Input that ends an interactive session.
const QUIT: &str = ".q";

/// LAIka is a small dynamically typed scripting language. Run a `.lai` file,
/// or start the interactive prompt when no file is given.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The `.lai` source file to run.
    files: Vec<PathBuf>,

    /// Log interpreter activity at debug level unless `RUST_LOG` says
    /// otherwise.
    #[arg(short, long)]
    verbose: bool,
}

/// The `>>` prompt shown by the interactive session.
struct LaikaPrompt;

impl Prompt for LaikaPrompt {
    fn render_prompt_left(&self) -> Cow<'_, str> {
        Cow::Borrowed(">>")
    }

    fn render_prompt_right(&self) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_indicator(&self, _prompt_mode: PromptEditMode) -> Cow<'_, str> {
        Cow::Borrowed(" ")
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<'_, str> {
        Cow::Borrowed(".. ")
    }

    fn render_prompt_history_search_indicator(&self,
                                              history_search: PromptHistorySearch)
                                              -> Cow<'_, str> {
        let prefix = match history_search.status {
            PromptHistorySearchStatus::Passing => "",
            PromptHistorySearchStatus::Failing => "failing ",
        };
        Cow::Owned(format!("({prefix}reverse-search: {}) ", history_search.term))
    }
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    match args.files.as_slice() {
        [] => repl(),
        [file] => run_file(file),
        files => {
            let names = files.iter()
                             .map(|f| f.display().to_string())
                             .collect::<Vec<_>>()
                             .join(", ");
            eprintln!("Multiple filenames [{names}] cannot be simultaneously interpreted.");
            process::exit(2);
        },
    }
}

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level is `warn`, or `debug` with
/// `--verbose`.
fn init_logging(verbose: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt().with_env_filter(filter)
         .with_writer(std::io::stderr)
         .with_target(false)
         .init();
}

/// Runs a source file and exits the process with its status.
fn run_file(path: &Path) {
    if path.extension().and_then(|ext| ext.to_str()) != Some(EXTENSION) {
        eprintln!("Source code files must end with .{EXTENSION} extension.");
        process::exit(1);
    }

    let source = fs::read_to_string(path).unwrap_or_else(|e| {
                                             eprintln!("Failed to read the input file '{}': {e}",
                                                       path.display());
                                             process::exit(1);
                                         });

    tracing::debug!(path = %path.display(), "running file");

    match Session::new().run(&source) {
        Ok(Outcome::Value(_)) => {},
        Ok(Outcome::Exit(code)) => process::exit(code),
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        },
    }
}

/// Starts the interactive session.
///
/// A line editor is used when stdin is a terminal; piped input is read line
/// by line.
fn repl() {
    println!("LAIka v0.1 [enter '{QUIT}' for quick exit]");

    let mut session = Session::new();

    if std::io::stdin().is_terminal() {
        let mut line_editor = Reedline::create();
        loop {
            match line_editor.read_line(&LaikaPrompt) {
                Ok(Signal::Success(buffer)) => {
                    if !interpret_line(&mut session, &buffer) {
                        return;
                    }
                },
                Ok(Signal::CtrlD | Signal::CtrlC) => return,
                Err(e) => {
                    eprintln!("Line editor error: {e}");
                    return;
                },
            }
        }
    } else {
        for line in std::io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if !interpret_line(&mut session, &line) {
                        return;
                    }
                },
                Err(e) => {
                    eprintln!("Error reading line from stdin: {e}");
                    return;
                },
            }
        }
    }
}

/// Runs one line of input and prints its result.
///
/// Returns `false` when the session should end.
fn interpret_line(session: &mut Session, line: &str) -> bool {
    let input = line.trim();
    if input.is_empty() {
        return true;
    }
    if input == QUIT {
        return false;
    }

    match session.run(input) {
        Ok(Outcome::Value(value)) => println!("{value}"),
        Ok(Outcome::Exit(code)) => process::exit(code),
        Err(e) => eprintln!("{e}"),
    }
    true
}
