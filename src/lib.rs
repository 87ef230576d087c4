//! # lsystem-turtle
//!
//! Lindenmayer-system fractals for 2D turtle graphics.
//!
//! An [`LSystemBuilder`] collects the axiom, the production rules and the
//! symbol-to-[`Command`] bindings, either through method calls or from
//! line-oriented configuration text. [`LSystemBuilder::build`] yields an
//! [`LSystem`] that expands the axiom to any level and replays the result as
//! turtle commands, sending every drawn segment to a [`Painter`].
//!
//! ```
//! use lsystem_turtle::{LSystemBuilder, LineRecorder};
//!
//! let mut builder = LSystemBuilder::new();
//! builder.configure_from_text([
//!     "command F draw 1",
//!     "command + rotate 60",
//!     "command - rotate -60",
//!     "axiom F",
//!     "production F F+F--F+F",
//! ])?;
//! let koch = builder.build();
//!
//! let mut painter = LineRecorder::new();
//! koch.draw(2, &mut painter)?;
//! assert_eq!(painter.lines.len(), 16);
//! # Ok::<(), lsystem_turtle::LSystemError>(())
//! ```

pub mod builder;
pub mod color;
pub mod command;
pub mod error;
pub mod log;
pub mod painter;
pub mod parse;
pub mod presets;
pub mod symbols;
pub mod system;
pub mod turtle;
pub mod vector;

pub use builder::*;
pub use color::*;
pub use command::*;
pub use error::*;
pub use painter::*;
pub use symbols::*;
pub use system::*;
pub use turtle::*;
pub use vector::*;
