//! Line-oriented front end for the calculator core.
//!
//! Reads one expression per line from stdin and prints its result. ASCII
//! spellings are accepted in place of the keypad glyphs: `pi`, `e`, `ans`, and
//! function names such as `sqrt(2)`. Commands:
//!
//! - `plot <expr>`: print `x` and `y` columns over `[-10, 10]`
//! - `history`: list previous calculations
//! - `clear`: forget the history
//! - `quit` / `exit`
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `warn`).

use std::io::{self, BufRead, IsTerminal, Write};

use glyphcalc::engine::{evaluate, is_math_error};
use glyphcalc::graph::{self, DEFAULT_RESOLUTION, Domain};
use glyphcalc::lexer::{ANSWER_GLYPH, EULER_GLYPH, PI_GLYPH};
use glyphcalc::{EvalContext, History};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> io::Result<()> {
    let default_level = "warn";
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(default_level))
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .try_init();

    let interactive = io::stdin().is_terminal();
    let mut history = History::new();
    let mut stdout = io::stdout().lock();

    prompt(&mut stdout, interactive)?;
    for line in io::stdin().lock().lines() {
        let line = line?;
        let line = line.trim();

        match line {
            "" => {}
            "quit" | "exit" => break,
            "history" => {
                for entry in history.entries() {
                    writeln!(stdout, "{} = {}", entry.expression, entry.result)?;
                }
            }
            "clear" => {
                history.clear();
                info!("history cleared");
            }
            _ => match line.strip_prefix("plot ") {
                Some(template) => plot(&mut stdout, &rewrite_ascii(template), &history)?,
                None => calculate(&mut stdout, &rewrite_ascii(line), &mut history)?,
            },
        }
        prompt(&mut stdout, interactive)?;
    }
    Ok(())
}

fn prompt(out: &mut impl Write, interactive: bool) -> io::Result<()> {
    if interactive {
        write!(out, "> ")?;
        out.flush()?;
    }
    Ok(())
}

fn calculate(out: &mut impl Write, expression: &str, history: &mut History) -> io::Result<()> {
    let ctx = EvalContext::new().with_history(history);
    match evaluate(expression, &ctx) {
        Ok(result) if is_math_error(&result) => writeln!(out, "Math error"),
        Ok(result) => {
            writeln!(out, "{result}")?;
            history.record(expression, result);
            Ok(())
        }
        Err(err) => writeln!(out, "Error: {err}"),
    }
}

fn plot(out: &mut impl Write, template: &str, history: &History) -> io::Result<()> {
    for point in graph::sample(template, Domain::default(), DEFAULT_RESOLUTION, history) {
        match point.y {
            Ok(y) => writeln!(out, "{:>8.3}\t{}", point.x, y)?,
            Err(err) => writeln!(out, "{:>8.3}\t({err})", point.x)?,
        }
    }
    Ok(())
}

/// Rewrites ASCII words into the glyphs and markers the evaluator reads.
///
/// Unrecognized words become markers too, so `log(2)` reports an unknown
/// function. An `e` directly after a digit is an exponent and stays as is.
fn rewrite_ascii(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut chars = line.chars().peekable();
    let mut previous: Option<char> = None;

    while let Some(c) = chars.next() {
        if c == '<' {
            // already a marker
            out.push(c);
            for inner in chars.by_ref() {
                out.push(inner);
                if inner == '>' {
                    break;
                }
            }
            previous = Some('>');
            continue;
        }
        if !c.is_ascii_alphabetic() {
            out.push(c);
            previous = Some(c);
            continue;
        }

        let mut word = String::from(c);
        while let Some(&next) = chars.peek() {
            if !next.is_ascii_alphabetic() {
                break;
            }
            word.push(next);
            chars.next();
        }

        let after_numeral = previous.is_some_and(|p| p.is_ascii_digit() || p == '.');
        match word.as_str() {
            "e" | "E" if after_numeral => out.push_str(&word),
            "pi" => out.push(PI_GLYPH),
            "e" => out.push(EULER_GLYPH),
            "ans" => out.push(ANSWER_GLYPH),
            "x" => out.push('x'),
            name => {
                out.push('<');
                out.push_str(name);
                out.push('>');
            }
        }
        previous = word.chars().last();
    }
    out
}
