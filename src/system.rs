//! Rewriting engine and turtle interpreter for a configured L-system.
//!
//! The entry point is [`LSystem`], obtained from
//! [`LSystemBuilder::build`](crate::LSystemBuilder::build). Call
//! [`LSystem::generate`] for the expanded symbol string or [`LSystem::draw`]
//! to paint it.

use crate::builder::LSystemConfig;
use crate::color::Rgb;
use crate::error::{LSystemError, Result};
use crate::log::debug;
use crate::painter::Painter;
use crate::turtle::{Context, TurtleState};
use crate::vector::Vector2D;

/// A built L-system: an immutable configuration that can be expanded and drawn
/// at any level.
#[derive(Clone, Debug)]
pub struct LSystem {
    config: LSystemConfig,
}

impl LSystem {
    pub fn new(config: LSystemConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LSystemConfig {
        &self.config
    }

    /// Expands the axiom through `level` generations.
    ///
    /// Each generation replaces every symbol that has a production with the
    /// production text, once; replacement text is not expanded again within
    /// the same generation. Symbols without a production are copied.
    ///
    /// Output length can grow exponentially with `level`; callers are
    /// expected to bound it.
    pub fn generate(&self, level: i32) -> Result<String> {
        let level = check_level(level)?;
        let mut current = self.config.axiom.clone();
        for _generation in 1..=level {
            current = self.rewrite(&current);
            debug!(generation = _generation, len = current.len(), "expanded");
        }
        Ok(current)
    }

    /// Returns every generation from the axiom up to and including `level`.
    pub fn generate_up_to(&self, level: i32) -> Result<Vec<String>> {
        let level = check_level(level)?;
        let mut generations = vec![self.config.axiom.clone()];
        for _ in 0..level {
            let next = self.rewrite(generations.last().map_or("", String::as_str));
            generations.push(next);
        }
        Ok(generations)
    }

    /// One substitution pass over `input`.
    fn rewrite(&self, input: &str) -> String {
        let productions = &self.config.productions;
        let estimate = input
            .chars()
            .map(|c| productions.get(c).map_or(c.len_utf8(), String::len))
            .sum();
        let mut out = String::with_capacity(estimate);
        for c in input.chars() {
            match productions.get(c) {
                Some(replacement) => out.push_str(replacement),
                None => out.push(c),
            }
        }
        out
    }

    /// The turtle state every render at `level` starts from.
    ///
    /// Black pen at the origin, heading `angle` degrees from +X, with an
    /// effective length of `unit_length * unit_length_degree_scaler^level`.
    pub fn initial_state(&self, level: i32) -> Result<TurtleState> {
        let level = check_level(level)?;
        let config = &self.config;
        let direction = Vector2D::X.rotated(config.angle);
        let effective_length = config.unit_length * config.unit_length_degree_scaler.powi(level);
        Ok(TurtleState::new(
            config.origin,
            direction,
            Rgb::BLACK,
            effective_length,
        ))
    }

    /// Expands the system to `level` and paints it.
    ///
    /// Every symbol of the expanded string bound to a command is executed in
    /// order against a fresh [`Context`]; symbols with no command are skipped.
    /// A `Pop` on the bottom state aborts the render with
    /// [`LSystemError::EmptyStack`]; lines painted before it stay painted.
    pub fn draw(&self, level: i32, painter: &mut dyn Painter) -> Result<()> {
        let mut ctx = Context::with_state(self.initial_state(level)?);
        let symbols = self.generate(level)?;

        let mut _executed = 0usize;
        for symbol in symbols.chars() {
            if let Some(command) = self.config.commands.get(symbol) {
                command.apply(&mut ctx, painter)?;
                _executed += 1;
            }
        }
        debug!(
            level,
            symbols = symbols.len(),
            executed = _executed,
            "rendered"
        );
        Ok(())
    }
}

fn check_level(level: i32) -> Result<i32> {
    if level < 0 {
        Err(LSystemError::invalid(format!(
            "level must not be negative, got {level}"
        )))
    } else {
        Ok(level)
    }
}
