//! Turtle state and the state stack commands operate on.

use crate::color::Rgb;
use crate::error::{LSystemError, Result};
use crate::vector::Vector2D;
use serde::{Deserialize, Serialize};

/// The state of the drawing turtle.
///
/// Tracks where the pen is, which way it is heading, and how it draws.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurtleState {
    /// Current position of the pen.
    pub position: Vector2D,

    /// Current heading. Unit length when constructed through [`TurtleState::new`];
    /// `Rotate` turns it in place.
    pub direction: Vector2D,

    /// Pen colour for subsequent lines.
    pub color: Rgb,

    /// Distance covered by a step of 1.
    pub effective_length: f64,
}

impl TurtleState {
    /// Creates a state heading along `direction`, normalized to unit length.
    ///
    /// A zero `direction` has no heading and yields a NaN direction.
    pub fn new(position: Vector2D, direction: Vector2D, color: Rgb, effective_length: f64) -> Self {
        Self {
            position,
            direction: direction.normalized(),
            color,
            effective_length,
        }
    }

    /// Displacement produced by moving `step` units along the heading.
    pub fn step_offset(&self, step: f64) -> Vector2D {
        self.direction.scaled(self.effective_length * step)
    }
}

/// A LIFO stack of turtle states. The top of the stack is the current state.
///
/// `Push` stores a full copy of the current state; since [`Vector2D`] is `Copy`
/// the saved position and heading never alias the live ones.
#[derive(Clone, Debug, Default)]
pub struct Context {
    stack: Vec<TurtleState>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context whose only state is `state`.
    pub fn with_state(state: TurtleState) -> Self {
        Self { stack: vec![state] }
    }

    pub fn push(&mut self, state: TurtleState) {
        self.stack.push(state);
    }

    /// Removes the current state, exposing the previously pushed one.
    ///
    /// The bottom state is never removed: popping it fails with
    /// [`LSystemError::EmptyStack`] and leaves the context untouched.
    pub fn pop(&mut self) -> Result<TurtleState> {
        match self.stack.len() {
            0 => Err(LSystemError::NoCurrentState),
            1 => Err(LSystemError::EmptyStack),
            _ => self.stack.pop().ok_or(LSystemError::EmptyStack),
        }
    }

    pub fn current(&self) -> Result<&TurtleState> {
        self.stack.last().ok_or(LSystemError::NoCurrentState)
    }

    pub fn current_mut(&mut self) -> Result<&mut TurtleState> {
        self.stack.last_mut().ok_or(LSystemError::NoCurrentState)
    }

    /// Number of states on the stack.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}
