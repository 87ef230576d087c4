//! The fixed set of turtle commands a symbol can be bound to.

use crate::color::Rgb;
use crate::error::{LSystemError, Result};
use crate::log::trace;
use crate::painter::Painter;
use crate::parse::number;
use crate::turtle::Context;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stroke width of every line emitted by [`Command::Draw`].
pub const LINE_WIDTH: f32 = 1.0;

/// A strictly positive, finite multiplier (step length or scale factor).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Positive(f64);

impl Positive {
    pub fn new(value: f64) -> Result<Self> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(LSystemError::invalid(format!(
                "value must be positive, got {value}"
            )))
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Positive {
    type Error = LSystemError;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Positive> for f64 {
    fn from(p: Positive) -> Self {
        p.0
    }
}

/// Operations that can be performed by the turtle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Move forward `step` effective lengths, painting a line (`draw <step>`).
    Draw(Positive),
    /// Move forward without painting (`skip <step>`).
    Skip(Positive),
    /// Turn the heading by the given degrees, counter-clockwise (`rotate <angle>`).
    Rotate(f64),
    /// Multiply the effective length (`scale <factor>`).
    Scale(Positive),
    /// Change the pen colour (`color <RRGGBB>`).
    Color(Rgb),
    /// Save a copy of the current state (`push`).
    Push,
    /// Restore the most recently saved state (`pop`).
    Pop,
}

impl Command {
    pub fn draw(step: f64) -> Result<Self> {
        Positive::new(step).map(Self::Draw)
    }

    pub fn skip(step: f64) -> Result<Self> {
        Positive::new(step).map(Self::Skip)
    }

    pub fn rotate(angle: f64) -> Result<Self> {
        if angle.is_finite() {
            Ok(Self::Rotate(angle))
        } else {
            Err(LSystemError::invalid(format!(
                "rotation angle must be finite, got {angle}"
            )))
        }
    }

    pub fn scale(factor: f64) -> Result<Self> {
        Positive::new(factor).map(Self::Scale)
    }

    pub fn color(color: Rgb) -> Self {
        Self::Color(color)
    }

    /// Executes the command against the current state of `ctx`.
    ///
    /// Only `Draw` paints, and it paints exactly one line from the old to the
    /// new position.
    pub fn apply(&self, ctx: &mut Context, painter: &mut dyn Painter) -> Result<()> {
        match *self {
            Command::Draw(step) => {
                let state = ctx.current_mut()?;
                let from = state.position;
                let to = from.translated(state.step_offset(step.get()));
                painter.draw_line(from.x(), from.y(), to.x(), to.y(), state.color, LINE_WIDTH);
                state.position = to;
            }
            Command::Skip(step) => {
                let state = ctx.current_mut()?;
                let offset = state.step_offset(step.get());
                state.position.translate(offset);
            }
            Command::Rotate(angle) => ctx.current_mut()?.direction.rotate(angle),
            Command::Scale(factor) => ctx.current_mut()?.effective_length *= factor.get(),
            Command::Color(color) => ctx.current_mut()?.color = color,
            Command::Push => {
                let copy = ctx.current()?.clone();
                ctx.push(copy);
                trace!(depth = ctx.depth(), "push");
            }
            Command::Pop => {
                ctx.pop()?;
                trace!(depth = ctx.depth(), "pop");
            }
        }
        Ok(())
    }
}

impl FromStr for Command {
    type Err = LSystemError;

    /// Parses command text such as `draw 1`, `rotate -60`, `color 00ff00` or `push`.
    fn from_str(text: &str) -> Result<Self> {
        let mut tokens = text.split_whitespace();
        let kind = tokens
            .next()
            .ok_or_else(|| LSystemError::invalid("empty command"))?;
        let args: Vec<&str> = tokens.collect();

        let expect_args = |n: usize| {
            if args.len() == n {
                Ok(())
            } else {
                Err(LSystemError::invalid(format!(
                    "`{kind}` takes {n} argument(s), got {} in `{}`",
                    args.len(),
                    text.trim()
                )))
            }
        };

        match kind {
            "draw" => {
                expect_args(1)?;
                Self::draw(number(args[0], "draw step")?)
            }
            "skip" => {
                expect_args(1)?;
                Self::skip(number(args[0], "skip step")?)
            }
            "rotate" => {
                expect_args(1)?;
                Self::rotate(number(args[0], "rotation angle")?)
            }
            "scale" => {
                expect_args(1)?;
                Self::scale(number(args[0], "scale factor")?)
            }
            "color" => {
                expect_args(1)?;
                Rgb::from_hex(args[0]).map(Self::Color)
            }
            "push" => {
                expect_args(0)?;
                Ok(Self::Push)
            }
            "pop" => {
                expect_args(0)?;
                Ok(Self::Pop)
            }
            other => Err(LSystemError::invalid(format!(
                "unknown command kind `{other}`"
            ))),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Draw(step) => write!(f, "draw {}", step.get()),
            Command::Skip(step) => write!(f, "skip {}", step.get()),
            Command::Rotate(angle) => write!(f, "rotate {angle}"),
            Command::Scale(factor) => write!(f, "scale {}", factor.get()),
            Command::Color(color) => write!(f, "color {color}"),
            Command::Push => f.write_str("push"),
            Command::Pop => f.write_str("pop"),
        }
    }
}
