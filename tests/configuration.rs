// tests/configuration.rs
use lsystem_turtle::{Command, FnPainter, LSystemBuilder, LSystemError, LineSegment, Vector2D};

#[test]
fn test_draw_directive_moves_by_effective_length() {
    // `command F draw 1` with an effective length of 2 moves exactly 2 units
    // and paints exactly one segment.
    let mut builder = LSystemBuilder::new();
    builder
        .configure_from_text(["origin 1 1", "unitLength 2", "command F draw 1", "axiom F"])
        .unwrap();
    assert_eq!(builder.config().commands.get('F'), Some(&Command::draw(1.0).unwrap()));

    let mut segments: Vec<LineSegment> = Vec::new();
    builder
        .build()
        .draw(0, &mut FnPainter(|segment: LineSegment| segments.push(segment)))
        .unwrap();

    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].start, Vector2D::new(1.0, 1.0));
    assert!((segments[0].end.x() - 3.0).abs() < 1e-9);
    assert!((segments[0].end.y() - 1.0).abs() < 1e-9);
}

#[test]
fn test_malformed_number_is_an_invalid_argument() {
    let err = LSystemBuilder::new()
        .configure_from_text(["angle x"])
        .unwrap_err();
    assert_eq!(
        err,
        LSystemError::InvalidArgument(
            "line 1: angle must be a finite number, got `x` (`angle x`)".into()
        )
    );
}

#[test]
fn test_scaler_fraction_directive() {
    let mut builder = LSystemBuilder::new();
    builder
        .configure_from_text(["unitLengthDegreeScaler 1.0 / 3.0"])
        .unwrap();
    assert!((builder.config().unit_length_degree_scaler - 0.333_333).abs() < 1e-5);
}

#[test]
fn test_skip_scale_and_color_directives() {
    let mut builder = LSystemBuilder::new();
    builder
        .configure_from_str(
            "# dashed line, red and shorter after the first gap\n\
             unitLength 0.1\n\
             command D draw 1\n\
             command s skip 1\n\
             command h scale 0.5\n\
             command r color ff0000\n\
             axiom DsrhDsD\n",
        )
        .unwrap();

    let mut segments = Vec::new();
    builder
        .build()
        .draw(0, &mut FnPainter(|s: LineSegment| segments.push(s)))
        .unwrap();

    assert_eq!(segments.len(), 3);
    // D: 0.0 -> 0.1, s: -> 0.2, then red and half length.
    assert!((segments[0].end.x() - 0.1).abs() < 1e-9);
    assert!((segments[1].start.x() - 0.2).abs() < 1e-9);
    assert!((segments[1].end.x() - 0.25).abs() < 1e-9);
    assert!((segments[2].start.x() - 0.3).abs() < 1e-9);
    assert_eq!(segments[0].color.to_string(), "000000");
    assert_eq!(segments[2].color.to_string(), "ff0000");
}

#[test]
fn test_bad_line_aborts_whole_configuration() {
    let mut builder = LSystemBuilder::new();
    let err = builder
        .configure_from_text(["axiom F", "command F draw 1", "command G teleport 3"])
        .unwrap_err();

    match err {
        LSystemError::InvalidArgument(message) => {
            assert!(message.starts_with("line 3:"), "{message}");
            assert!(message.contains("`command G teleport 3`"), "{message}");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(builder.config().axiom.is_empty());
    assert!(builder.config().commands.is_empty());
}

#[test]
fn test_unregistered_symbols_are_inert() {
    let mut builder = LSystemBuilder::new();
    builder
        .configure_from_text(["axiom XYZ", "production X XX"])
        .unwrap();
    let system = builder.build();

    let mut count = 0;
    system
        .draw(3, &mut FnPainter(|_: LineSegment| count += 1))
        .unwrap();
    assert_eq!(count, 0);
    assert_eq!(system.generate(3).unwrap(), "XXXXXXXXYZ");
}
