use std::env;
use std::fs;

use anyhow::{bail, Context};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use minisexp::{Error, EvalConfig, LineOutcome, LispEvaluator, Session};

const PROMPT: &str = "sexp> ";
const CONTINUATION_PROMPT: &str = "...> ";

struct Options {
    file: Option<String>,
    config: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    if args.iter().any(|x| x == "--help" || x == "-h") {
        println!("{HELP_MSG}");
        return Ok(());
    }

    let options = parse_args(args)?;
    let config = match &options.config {
        Some(path) => load_config(path)?,
        None => EvalConfig::default(),
    };
    let mut session = Session::with_evaluator(LispEvaluator::with_config(config));

    match &options.file {
        Some(path) => {
            let source =
                fs::read_to_string(path).with_context(|| format!("failed to read {path}"))?;
            for value in session.run_source(&source) {
                println!("{value}");
            }
            Ok(())
        }
        None => run_repl(&mut session),
    }
}

fn parse_args(args: Vec<String>) -> anyhow::Result<Options> {
    let mut options = Options {
        file: None,
        config: None,
    };

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => match args.next() {
                Some(path) => options.config = Some(path),
                None => bail!("--config needs a path"),
            },
            _ if options.file.is_none() => options.file = Some(arg),
            _ => bail!("unexpected argument: {arg}"),
        }
    }

    Ok(options)
}

fn load_config(path: &str) -> anyhow::Result<EvalConfig> {
    let text = fs::read_to_string(path).with_context(|| format!("failed to read {path}"))?;
    match EvalConfig::from_json_str(&text) {
        Ok(config) => Ok(config),
        Err(Error::InvalidConfig(reason)) => bail!("invalid config {path}: {reason}"),
        Err(err) => Err(err.into()),
    }
}

fn run_repl(session: &mut Session) -> anyhow::Result<()> {
    let mut rl = DefaultEditor::new().context("could not initialize line editor")?;

    loop {
        let prompt = if session.is_continuing() {
            CONTINUATION_PROMPT
        } else {
            PROMPT
        };

        match rl.readline(prompt) {
            Ok(line) => {
                if let Err(err) = rl.add_history_entry(line.as_str()) {
                    tracing::debug!(error = %err, "could not record history entry");
                }

                if !session.is_continuing() && run_command(session, line.trim()) {
                    continue;
                }

                match session.feed_line(&line) {
                    LineOutcome::Evaluated(value) => println!("{value}"),
                    LineOutcome::Exit => break,
                    LineOutcome::Skipped | LineOutcome::Incomplete => {}
                }
            }
            Err(ReadlineError::Interrupted) if session.is_continuing() => {
                session.cancel_pending();
            }
            Err(ReadlineError::Eof) | Err(ReadlineError::Interrupted) => break,
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

/// Handles `:`-prefixed commands, returning true when `line` was one
fn run_command(session: &mut Session, line: &str) -> bool {
    match line {
        ":help" => print_help(),
        ":defs" => print_definitions(session.evaluator()),
        ":reset" => {
            session.evaluator_mut().reset();
            println!("definitions cleared");
        }
        _ => return false,
    }
    true
}

fn print_definitions(evaluator: &LispEvaluator) {
    let definitions = evaluator.env().snapshot();
    if definitions.is_empty() {
        println!("no definitions");
        return;
    }
    for (name, value) in definitions {
        println!("  {name} = {value}");
    }
}

fn print_help() {
    println!("Special forms:");
    println!("  (if cond then else)   (def name value)   (quote x)   (lambda (params) body)");
    println!("Primitives:");
    println!("  atom? head tail cons eq? and or not + *");
    println!("Commands:");
    println!("  :help   show this message");
    println!("  :defs   list definitions");
    println!("  :reset  forget all definitions");
    println!("  exit    leave (also Ctrl-D)");
}

const HELP_MSG: &str = r#"Usage: minisexp [FILE] [--config PATH] [--help|-h]

  FILE  Source file to evaluate line by line; without it an interactive
        session starts

Options:
  --config PATH  JSON evaluator configuration, e.g. {"max-depth": 512}
  -h, --help     Print this message"#;
