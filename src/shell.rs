// SPDX: CC0-1.0

use crate::{geometry::Operation, style, Number, Point};
use anyhow::Context;
use core::{fmt, str::FromStr};
use log::trace;
use std::io::{self, BufRead, Write};

pub const YES_NO_ERROR: &str = "Please enter either yes or no";
pub const COORDINATE_ERROR: &str =
    "Invalid input. Please enter coordinates in the format 'x, y' (e.g., 3, 4)";
pub const CHOICE_ERROR: &str = "Invalid choice. Please enter one of the valid choices.";

/// Outcome of a prompt that the user may also answer with a control word.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Reply<T> {
    Value(T),
    /// Abandon the current calculation and go back to the menu.
    Cancel,
    /// Stop reading input. Also returned once input is exhausted.
    Exit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum YesNo {
    Yes,
    No,
}

impl FromStr for YesNo {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "yes" | "y" => Ok(Self::Yes),
            "no" | "n" => Ok(Self::No),
            _ => Err(()),
        }
    }
}

/// Writes `prompt` and reads one trimmed line. `None` means end of input.
pub fn input<R: BufRead, W: Write>(
    src: R,
    out: W,
    prompt: impl fmt::Display,
) -> anyhow::Result<Option<String>> {
    fn inner<R: BufRead, W: Write>(
        mut src: R,
        mut out: W,
        prompt: impl fmt::Display,
    ) -> io::Result<Option<String>> {
        write!(out, "{prompt}")?;
        out.flush()?;
        let mut s = String::new();
        if src.read_line(&mut s)? == 0 {
            return Ok(None);
        }
        Ok(Some(s.trim().to_string()))
    }

    let s = inner(src, out, prompt).context("read from standard input failed")?;
    Ok(s)
}

fn complain<W: Write>(mut out: W, message: &str) -> anyhow::Result<()> {
    writeln!(out, "{}", style::error(message)).context("write to standard output failed")
}

/// Reads a number strictly greater than zero, in whichever numeric type `T`
/// the caller asks for.
pub fn read_positive_number<R, W, T>(
    mut src: R,
    mut out: W,
    prompt: &str,
    error: &str,
    exit_sentinel: &str,
) -> anyhow::Result<Reply<T>>
where
    R: BufRead,
    W: Write,
    T: FromStr + PartialOrd + Default,
{
    loop {
        let Some(line) = input(&mut src, &mut out, style::prompt(prompt))? else {
            return Ok(Reply::Exit);
        };
        if line == exit_sentinel {
            return Ok(Reply::Exit);
        }
        match line.parse::<T>() {
            // written so NaN is rejected too
            Ok(n) if n > T::default() => return Ok(Reply::Value(n)),
            _ => {
                trace!("rejected number {line:?}");
                complain(&mut out, error)?;
            }
        }
    }
}

pub fn read_yes_no<R: BufRead, W: Write>(
    mut src: R,
    mut out: W,
    prompt: &str,
) -> anyhow::Result<Reply<YesNo>> {
    loop {
        let Some(line) = input(&mut src, &mut out, prompt)? else {
            return Ok(Reply::Exit);
        };
        match line.parse() {
            Ok(answer) => return Ok(Reply::Value(answer)),
            Err(()) => {
                trace!("rejected yes/no answer {line:?}");
                complain(&mut out, YES_NO_ERROR)?;
            }
        }
    }
}

pub fn read_coordinate<R: BufRead, W: Write>(
    mut src: R,
    mut out: W,
    prompt: &str,
    cancel_sentinel: &str,
) -> anyhow::Result<Reply<Point<Number>>> {
    loop {
        let Some(line) = input(&mut src, &mut out, style::prompt(prompt))? else {
            return Ok(Reply::Exit);
        };
        if line.eq_ignore_ascii_case(cancel_sentinel) {
            return Ok(Reply::Cancel);
        }
        match line.parse() {
            Ok(point) => return Ok(Reply::Value(point)),
            Err(err) => {
                trace!("rejected coordinate {line:?}: {err}");
                complain(&mut out, COORDINATE_ERROR)?;
            }
        }
    }
}

pub fn read_choice<R: BufRead, W: Write>(
    mut src: R,
    mut out: W,
    prompt: &str,
) -> anyhow::Result<Reply<Operation>> {
    loop {
        let Some(line) = input(&mut src, &mut out, prompt)? else {
            return Ok(Reply::Exit);
        };
        if let Ok(op) = line.parse::<Operation>() {
            return Ok(Reply::Value(op));
        }
        trace!("rejected menu choice {line:?}");
        complain(&mut out, CHOICE_ERROR)?;
        if let Some(op) = similar_operation(&line) {
            writeln!(
                out,
                "note: to choose '{label}', enter {key}",
                label = op.help(),
                key = op.key()
            )?;
        }
        writeln!(out)?;
    }
}

/// The operation whose label most resembles `text`, if any is close enough.
pub fn similar_operation(text: &str) -> Option<Operation> {
    let text = text.to_ascii_lowercase();
    Operation::exhaustive()
        .iter()
        .map(|op| {
            (
                strsim::normalized_damerau_levenshtein(&text, &op.label().to_ascii_lowercase()),
                *op,
            )
        })
        .reduce(|(acc_sim, acc_op), (elem_sim, elem_op)| {
            if elem_sim > acc_sim {
                (elem_sim, elem_op)
            } else {
                (acc_sim, acc_op)
            }
        })
        .filter(|(sim, _)| *sim > 0.6)
        .map(|(_, op)| op)
}
