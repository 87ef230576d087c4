//! Line-oriented configuration language.
//!
//! Each non-blank line starts with a keyword followed by whitespace-separated
//! arguments:
//!
//! ```text
//! origin 0.05 0.4
//! angle 0
//! unitLength 0.9
//! unitLengthDegreeScaler 1.0 / 3.0
//! command F draw 1
//! command + rotate 60
//! axiom F
//! production F F+F--F+F
//! ```
//!
//! Lines starting with an unknown word, and `#` comments, are ignored.

use crate::command::Command;
use crate::error::{LSystemError, Result};
use crate::log::trace;

/// A single parsed configuration line.
#[derive(Clone, Debug, PartialEq)]
pub enum Directive {
    Origin(f64, f64),
    Angle(f64),
    UnitLengthDegreeScaler(f64),
    UnitLength(f64),
    Axiom(String),
    Command(char, Command),
    Production(char, String),
}

/// Parses one line. Returns `Ok(None)` for blank, comment and unrecognized lines.
///
/// Errors are [`LSystemError::InvalidArgument`] describing what is wrong with
/// the line; [`parse_lines`] adds the line number and text to the message.
pub fn parse_line(line: &str) -> Result<Option<Directive>> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&keyword, args)) = tokens.split_first() else {
        return Ok(None);
    };

    let arity = |n: usize| {
        if args.len() == n {
            Ok(())
        } else {
            Err(LSystemError::invalid(format!(
                "`{keyword}` expects {n} argument(s), got {}",
                args.len()
            )))
        }
    };

    let directive = match keyword {
        "origin" => {
            arity(2)?;
            Directive::Origin(number(args[0], "origin x")?, number(args[1], "origin y")?)
        }
        "angle" => {
            arity(1)?;
            Directive::Angle(number(args[0], "angle")?)
        }
        // Must stay distinct from `unitLength`: keywords are matched whole.
        "unitLengthDegreeScaler" => {
            if args.is_empty() {
                return Err(LSystemError::invalid(
                    "`unitLengthDegreeScaler` expects a value or a fraction",
                ));
            }
            Directive::UnitLengthDegreeScaler(scaler(&args.concat())?)
        }
        "unitLength" => {
            arity(1)?;
            Directive::UnitLength(number(args[0], "unit length")?)
        }
        "axiom" => {
            arity(1)?;
            Directive::Axiom(args[0].to_string())
        }
        "command" => {
            if args.len() < 2 {
                return Err(LSystemError::invalid(
                    "`command` expects a symbol and a command",
                ));
            }
            Directive::Command(symbol(args[0])?, args[1..].join(" ").parse()?)
        }
        "production" => {
            arity(2)?;
            Directive::Production(symbol(args[0])?, args[1].to_string())
        }
        comment if comment.starts_with('#') => return Ok(None),
        _ => {
            trace!(keyword, "ignoring unrecognized line");
            return Ok(None);
        }
    };
    Ok(Some(directive))
}

/// Parses every line, stopping at the first malformed one.
///
/// Returns the recognized directives with their 1-based line numbers. A
/// malformed line fails with [`LSystemError::InvalidArgument`] naming the
/// line number and quoting the line.
pub fn parse_lines<I, S>(lines: I) -> Result<Vec<(usize, Directive)>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut directives = Vec::new();
    for (idx, line) in lines.into_iter().enumerate() {
        let text = line.as_ref();
        match parse_line(text) {
            Ok(Some(d)) => directives.push((idx + 1, d)),
            Ok(None) => {}
            Err(err) => {
                let reason = match err {
                    LSystemError::InvalidArgument(reason) => reason,
                    other => other.to_string(),
                };
                return Err(LSystemError::invalid(format!(
                    "line {}: {reason} (`{text}`)",
                    idx + 1
                )));
            }
        }
    }
    Ok(directives)
}

/// Parses a finite decimal number.
pub(crate) fn number(token: &str, what: &str) -> Result<f64> {
    match token.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(LSystemError::invalid(format!(
            "{what} must be a finite number, got `{token}`"
        ))),
    }
}

/// Parses `value` or `num/den`, with all whitespace already removed.
fn scaler(compact: &str) -> Result<f64> {
    let Some((num, den)) = compact.split_once('/') else {
        return number(compact, "scaler");
    };
    let num = number(num, "scaler numerator")?;
    let den = number(den, "scaler denominator")?;
    let value = num / den;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(LSystemError::invalid(format!(
            "scaler fraction {num}/{den} is not finite"
        )))
    }
}

fn symbol(token: &str) -> Result<char> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(LSystemError::invalid(format!(
            "symbol must be a single character, got `{token}`"
        ))),
    }
}
