//! Ready-made L-systems.

use crate::builder::LSystemBuilder;
use crate::command::Command;
use crate::error::Result;
use crate::system::LSystem;

/// The Koch curve in configuration-text form, drawn left to right across a
/// unit canvas.
pub const KOCH_CURVE_TEXT: &str = "\
origin 0.05 0.4
angle 0
unitLength 0.9
unitLengthDegreeScaler 1.0 / 3.0

command F draw 1
command + rotate 60
command - rotate -60

axiom F

production F F+F--F+F
";

/// The Koch curve, assembled through the builder API.
pub fn koch_curve() -> Result<LSystem> {
    let mut builder = LSystemBuilder::new();
    builder
        .register_command('F', "draw 1")?
        .register('+', Command::rotate(60.0)?)
        .register('-', Command::rotate(-60.0)?)
        .set_origin(0.05, 0.4)
        .set_angle(0.0)
        .set_unit_length(0.9)
        .set_unit_length_degree_scaler(1.0 / 3.0)
        .register_production('F', "F+F--F+F")
        .set_axiom("F");
    Ok(builder.build())
}

/// Parses [`KOCH_CURVE_TEXT`].
pub fn koch_curve_from_text() -> Result<LSystem> {
    Ok(LSystemBuilder::new()
        .configure_from_str(KOCH_CURVE_TEXT)?
        .build())
}
