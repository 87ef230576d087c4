//! Configuration of an L-system, assembled programmatically or from text.

use crate::command::Command;
use crate::error::Result;
use crate::log::debug;
use crate::parse::{Directive, parse_lines};
use crate::symbols::SymbolTable;
use crate::system::LSystem;
use crate::vector::Vector2D;
use serde::{Deserialize, Serialize};

/// Everything needed to expand and draw an L-system.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LSystemConfig {
    /// Step length at level 0.
    pub unit_length: f64,
    /// Per-level factor applied to `unit_length`: the effective length at
    /// level `n` is `unit_length * unit_length_degree_scaler^n`.
    pub unit_length_degree_scaler: f64,
    /// Starting position of the turtle.
    pub origin: Vector2D,
    /// Initial heading in degrees, measured counter-clockwise from +X.
    pub angle: f64,
    /// The level-0 string.
    pub axiom: String,
    pub commands: SymbolTable<Command>,
    pub productions: SymbolTable<String>,
}

impl Default for LSystemConfig {
    fn default() -> Self {
        Self {
            unit_length: 0.1,
            unit_length_degree_scaler: 1.0,
            origin: Vector2D::ZERO,
            angle: 0.0,
            axiom: String::new(),
            commands: SymbolTable::new(),
            productions: SymbolTable::new(),
        }
    }
}

/// Fluent builder for [`LSystem`]s.
///
/// Setters store values as given; only command text and configuration lines
/// are validated.
#[derive(Clone, Debug, Default)]
pub struct LSystemBuilder {
    config: LSystemConfig,
}

impl LSystemBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an existing configuration.
    pub fn from_config(config: LSystemConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LSystemConfig {
        &self.config
    }

    pub fn set_origin(&mut self, x: f64, y: f64) -> &mut Self {
        self.config.origin = Vector2D::new(x, y);
        self
    }

    pub fn set_angle(&mut self, degrees: f64) -> &mut Self {
        self.config.angle = degrees;
        self
    }

    pub fn set_unit_length(&mut self, unit_length: f64) -> &mut Self {
        self.config.unit_length = unit_length;
        self
    }

    pub fn set_unit_length_degree_scaler(&mut self, scaler: f64) -> &mut Self {
        self.config.unit_length_degree_scaler = scaler;
        self
    }

    pub fn set_axiom(&mut self, axiom: impl Into<String>) -> &mut Self {
        self.config.axiom = axiom.into();
        self
    }

    /// Binds `symbol` to the command described by `command_text` (e.g. `"draw 1"`).
    pub fn register_command(&mut self, symbol: char, command_text: &str) -> Result<&mut Self> {
        let command = command_text.parse()?;
        Ok(self.register(symbol, command))
    }

    /// Binds `symbol` to an already constructed command.
    pub fn register(&mut self, symbol: char, command: Command) -> &mut Self {
        self.config.commands.insert(symbol, command);
        self
    }

    /// Sets the string `symbol` is rewritten to in each generation.
    pub fn register_production(&mut self, symbol: char, production: impl Into<String>) -> &mut Self {
        self.config.productions.insert(symbol, production.into());
        self
    }

    /// Applies configuration lines (see [`crate::parse`]).
    ///
    /// All lines are parsed before any is applied, so a malformed line leaves
    /// the builder unchanged. The error is [`LSystemError::InvalidArgument`]
    /// quoting the line.
    ///
    /// [`LSystemError::InvalidArgument`]: crate::error::LSystemError::InvalidArgument
    pub fn configure_from_text<I, S>(&mut self, lines: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let directives = parse_lines(lines)?;
        debug!(count = directives.len(), "applying configuration");
        for (_line, directive) in directives {
            debug!(line = _line, ?directive, "directive");
            self.apply(directive);
        }
        Ok(self)
    }

    /// Like [`configure_from_text`](Self::configure_from_text), splitting `text` into lines.
    pub fn configure_from_str(&mut self, text: &str) -> Result<&mut Self> {
        self.configure_from_text(text.lines())
    }

    fn apply(&mut self, directive: Directive) {
        match directive {
            Directive::Origin(x, y) => {
                self.set_origin(x, y);
            }
            Directive::Angle(a) => {
                self.set_angle(a);
            }
            Directive::UnitLengthDegreeScaler(s) => {
                self.set_unit_length_degree_scaler(s);
            }
            Directive::UnitLength(l) => {
                self.set_unit_length(l);
            }
            Directive::Axiom(axiom) => {
                self.set_axiom(axiom);
            }
            Directive::Command(symbol, command) => {
                self.register(symbol, command);
            }
            Directive::Production(symbol, production) => {
                self.register_production(symbol, production);
            }
        }
    }

    /// Builds a renderer from a snapshot of the current configuration.
    ///
    /// Later changes to this builder do not affect the returned system.
    pub fn build(&self) -> LSystem {
        LSystem::new(self.config.clone())
    }
}
