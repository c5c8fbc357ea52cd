// SPDX: CC0-1.0

use crate::geometry::Operation;
use owo_colors::{OwoColorize, Stream::Stdout};
use std::io::{self, Write};

pub fn prompt(text: &str) -> String {
    text.if_supports_color(Stdout, |t| t.yellow()).to_string()
}

pub fn error(text: &str) -> String {
    text.if_supports_color(Stdout, |t| t.red()).to_string()
}

pub fn hint(text: &str) -> String {
    text.if_supports_color(Stdout, |t| t.green()).to_string()
}

pub fn farewell(text: &str) -> String {
    text.if_supports_color(Stdout, |t| t.magenta()).to_string()
}

pub fn flourish(text: &str) -> String {
    text.if_supports_color(Stdout, |t| t.blue()).to_string()
}

pub fn heading(text: &str) -> String {
    text.if_supports_color(Stdout, |t| t.bold().underline().to_string())
        .to_string()
}

/// Prints `statement` framed by `side` on both ends and a rule of `rule`
/// above and below, as wide as the framed line.
pub fn banner<W: Write>(mut out: W, statement: &str, side: char, rule: char) -> io::Result<()> {
    let sides = side.to_string().repeat(5);
    let line = format!("{sides} {statement} {sides}");
    let rule = rule.to_string().repeat(line.chars().count());
    writeln!(out, "{rule}")?;
    writeln!(out, "{line}")?;
    writeln!(out, "{rule}")
}

pub fn instructions<W: Write>(mut out: W) -> io::Result<()> {
    writeln!(out, "{}", heading("****Instructions****"))?;
    writeln!(out)?;
    writeln!(out, "Choose an option:")?;
    for op in Operation::exhaustive() {
        writeln!(out, "{key}. {help}", key = op.key(), help = op.help())?;
    }
    writeln!(
        out,
        "Enter each point as two numbers separated by a comma, e.g. 3, 4"
    )?;
    writeln!(out)
}

pub fn ending<W: Write>(mut out: W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "{}",
        farewell("Thank you for using the Coordinate Geometry Calculator!")
    )?;
    banner(&mut out, "Enjoy exploring coordinates with our calculator!", '*', '=')?;
    writeln!(out, "{}", flourish("📐✨ Happy calculating! ✨📐"))?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_rule_matches_line_width() {
        let mut buf = Vec::new();
        banner(&mut buf, "hi", '!', '=').unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, ["==============", "!!!!! hi !!!!!", "=============="]);
    }

    #[test]
    fn instructions_list_every_operation() {
        let mut buf = Vec::new();
        instructions(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        for op in Operation::exhaustive() {
            assert!(text.contains(op.help()));
        }
    }
}
