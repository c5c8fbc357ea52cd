// SPDX: CC0-1.0

use crate::{
    config::Config,
    geometry::{Answer, Operation},
    record::SessionTable,
    shell::{self, Reply, YesNo},
    style, Number, Point,
};
use log::debug;
use std::io::{BufRead, Write};

const ORDINALS: [&str; 3] = ["first", "second", "third"];

#[derive(Clone, Debug, PartialEq)]
enum Stage {
    AwaitingChoice,
    CollectingCoordinates(Operation),
    Dispatching(Operation, Vec<Point<Number>>),
    AwaitingContinue,
    Terminated,
}

/// State carried across one run of the menu loop.
#[derive(Clone, Debug, Default)]
pub struct Session {
    table: SessionTable,
    previous: Option<Operation>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn table(&self) -> &SessionTable {
        &self.table
    }

    pub fn into_table(self) -> SessionTable {
        self.table
    }

    /// The operation picked most recently, shown again when the menu returns.
    pub fn previous(&self) -> Option<Operation> {
        self.previous
    }

    /// Runs the menu loop until the user declines to continue or input runs
    /// out. Every completed calculation is appended to the table.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut src: R,
        mut out: W,
        config: &Config,
    ) -> anyhow::Result<()> {
        let mut stage = Stage::AwaitingChoice;
        loop {
            stage = match stage {
                Stage::AwaitingChoice => self.choose(&mut src, &mut out, config)?,

                Stage::CollectingCoordinates(op) => {
                    match collect_points(&mut src, &mut out, op, config)? {
                        Reply::Value(points) => Stage::Dispatching(op, points),
                        Reply::Cancel => {
                            debug!("{op} cancelled");
                            Stage::AwaitingChoice
                        }
                        Reply::Exit => Stage::Terminated,
                    }
                }

                Stage::Dispatching(op, points) => {
                    let answer = op.evaluate(&points);
                    writeln!(out, "{}", describe(op, &points, answer))?;
                    debug!("recorded {op} = {answer}");
                    self.table.record(points, op, answer);
                    Stage::AwaitingContinue
                }

                Stage::AwaitingContinue => match shell::read_yes_no(
                    &mut src,
                    &mut out,
                    "\nDo you want to perform another calculation? (yes/no): ",
                )? {
                    Reply::Value(YesNo::Yes) => {
                        writeln!(out, "\nReturning to main menu...\n")?;
                        Stage::AwaitingChoice
                    }
                    Reply::Value(YesNo::No) | Reply::Cancel | Reply::Exit => Stage::Terminated,
                },

                Stage::Terminated => break,
            };
        }
        Ok(())
    }

    fn choose<R: BufRead, W: Write>(
        &mut self,
        mut src: R,
        mut out: W,
        config: &Config,
    ) -> anyhow::Result<Stage> {
        for op in Operation::exhaustive() {
            writeln!(out, "{key}. {help}", key = op.key(), help = op.help())?;
        }
        if let Some(prev) = self.previous {
            writeln!(out, "Your previous choice was: {}", prev.help())?;
        }

        let op = match shell::read_choice(&mut src, &mut out, "Enter your choice (1/2/3/4): ")? {
            Reply::Value(op) => op,
            Reply::Cancel | Reply::Exit => return Ok(Stage::Terminated),
        };
        self.previous = Some(op);
        writeln!(out, "You chose: {}", op.help())?;
        writeln!(
            out,
            "{}",
            style::hint(&format!(
                "If you want to change your choice enter '{}'",
                config.cancel_sentinel
            ))
        )?;
        Ok(Stage::CollectingCoordinates(op))
    }
}

fn collect_points<R: BufRead, W: Write>(
    mut src: R,
    mut out: W,
    op: Operation,
    config: &Config,
) -> anyhow::Result<Reply<Vec<Point<Number>>>> {
    writeln!(out)?;
    writeln!(out, "{}", op.heading())?;

    let mut points = Vec::with_capacity(op.arity());
    for (idx, ordinal) in ORDINALS.iter().enumerate().take(op.arity()) {
        let prompt = format!(
            "Enter coordinates of {ordinal} {noun} (x{n}, y{n}): ",
            noun = op.vertex_name(),
            n = idx + 1
        );
        match shell::read_coordinate(&mut src, &mut out, &prompt, &config.cancel_sentinel)? {
            Reply::Value(point) => points.push(point),
            Reply::Cancel => return Ok(Reply::Cancel),
            Reply::Exit => return Ok(Reply::Exit),
        }
    }
    Ok(Reply::Value(points))
}

/// Sentence shown to the user after a calculation.
pub fn describe(op: Operation, points: &[Point<Number>], answer: Answer) -> String {
    let listed = points
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>();
    match (op, answer) {
        (Operation::Distance, _) => {
            format!("The distance between {} is: {answer}", listed.join(" and "))
        }
        (Operation::Midpoint, _) => format!(
            "The midpoint of the line segment between {} is: {answer}",
            listed.join(" and ")
        ),
        (Operation::Gradient, Answer::Undefined) => format!(
            "The line passing through {} is vertical. Gradient is undefined.",
            listed.join(" and ")
        ),
        (Operation::Gradient, _) => format!(
            "The gradient of the line passing through {} is: {answer}",
            listed.join(" and ")
        ),
        (Operation::Area, _) => format!(
            "The area of the triangle with vertices {} is: {answer}",
            listed.join(", ")
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_each_operation() {
        let a = Point::new(3.0, 4.0);
        let b = Point::new(0.0, 0.0);
        assert_eq!(
            describe(Operation::Distance, &[a, b], Answer::Scalar(5.0)),
            "The distance between (3.0, 4.0) and (0.0, 0.0) is: 5.00"
        );
        assert_eq!(
            describe(Operation::Gradient, &[a, a], Answer::Undefined),
            "The line passing through (3.0, 4.0) and (3.0, 4.0) is vertical. Gradient is undefined."
        );
        assert_eq!(
            describe(
                Operation::Area,
                &[b, Point::new(4.0, 0.0), Point::new(0.0, 3.0)],
                Answer::Scalar(6.0)
            ),
            "The area of the triangle with vertices (0.0, 0.0), (4.0, 0.0), (0.0, 3.0) is: 6.00"
        );
    }
}
