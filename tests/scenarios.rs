use robosim::{
    CommandError, Direction, Grid, Interpreter, OutputFormat, Placement, RecordingOutput, Robot,
    WriterOutput,
};

fn run(lines: &[&str]) -> Interpreter<RecordingOutput> {
    let robot = Robot::new(Grid::new(5).unwrap());
    let mut interpreter = Interpreter::new(robot, RecordingOutput::default());
    interpreter.run(lines);
    interpreter
}

#[test]
fn test_place_move_turn_report() {
    let interp = run(&["PLACE 1,2,EAST", "MOVE", "MOVE", "LEFT", "MOVE", "REPORT"]);
    let expected = Placement { x: 3, y: 3, facing: Direction::North };
    assert_eq!(interp.robot().placement(), Some(expected));
    assert_eq!(interp.sink().reports, vec![expected]);
}

#[test]
fn test_out_of_bounds_place_on_fresh_robot() {
    let interp = run(&["PLACE 5,5,NORTH"]);
    assert!(!interp.robot().is_placed());
    assert_eq!(
        interp.sink().warnings,
        vec![CommandError::PlaceOutOfBounds { x: 5, y: 5 }]
    );
}

#[test]
fn test_robot_stops_at_edge() {
    let interp = run(&["PLACE 0,0,EAST", "MOVE", "MOVE", "MOVE", "MOVE", "MOVE"]);
    assert_eq!(
        interp.robot().placement(),
        Some(Placement { x: 4, y: 0, facing: Direction::East })
    );
    assert_eq!(
        interp.sink().warnings,
        vec![CommandError::MoveOutOfBounds { x: 5, y: 0 }]
    );
}

#[test]
fn test_place_without_space_is_not_a_command() {
    let interp = run(&["PLACE1,2,EAST", "MOVE", "MOVE", "LEFT", "MOVE", "REPORT"]);
    assert!(!interp.robot().is_placed());
    assert!(interp.sink().reports.is_empty());
    // The PLACE1 line itself is silent; every later action warns about placement
    assert_eq!(interp.sink().warnings.len(), 5);
    assert!(interp
        .sink()
        .warnings
        .iter()
        .all(|w| matches!(w, CommandError::NotPlaced { .. })));
    assert_eq!(interp.summary().ignored, 1);
}

#[test]
fn test_malformed_direction_single_warning() {
    let interp = run(&["PLACE 0,0,C"]);
    assert!(!interp.robot().is_placed());
    assert_eq!(interp.sink().warnings.len(), 1);
    assert!(matches!(
        interp.sink().warnings[0],
        CommandError::InvalidDirection { .. }
    ));
}

#[test]
fn test_malformed_places_leave_robot_unplaced() {
    let interp = run(&[
        "PLACE A,0,EAST",
        "MOVE",
        "LEFT",
        "RIGHT",
        "PLACE 0,B,EAST",
        "PLACE A,B,EAST",
        "PLACE 0,0,C",
        "PLACE A,B,C",
        "REPORT",
    ]);
    assert!(!interp.robot().is_placed());
    assert_eq!(interp.summary().warnings, 9);
}

#[test]
fn test_extra_place_arguments_rejected() {
    let interp = run(&["0, PLACE 0,0,EAST,0", "PLACE 0,0,EAST,0", "REPORT", "REPORT"]);
    assert!(!interp.robot().is_placed());
    assert_eq!(interp.summary().ignored, 1);
    assert!(matches!(
        interp.sink().warnings[0],
        CommandError::InvalidPlaceArguments { .. }
    ));
}

#[test]
fn test_second_place_overwrites() {
    let interp = run(&["PLACE 0,0,NORTH", "MOVE", "PLACE 3,1,west", "REPORT"]);
    assert_eq!(
        interp.sink().reports,
        vec![Placement { x: 3, y: 1, facing: Direction::West }]
    );
}

#[test]
fn test_larger_grid() {
    let robot = Robot::new(Grid::new(10).unwrap());
    let mut interp = Interpreter::new(robot, RecordingOutput::default());
    interp.run(["PLACE 9,9,NORTH", "LEFT", "MOVE", "MOVE", "PLACE 5,5,NORTH", "REPORT"]);
    assert_eq!(
        interp.robot().placement(),
        Some(Placement { x: 5, y: 5, facing: Direction::North })
    );
    assert!(interp.sink().warnings.is_empty());
}

#[test]
fn test_console_text_rendering() {
    let sink = WriterOutput::new(Vec::new(), Vec::new(), OutputFormat::Text);
    let mut interp = Interpreter::new(Robot::default(), sink);
    interp.run(["MOVE", "PLACE 0,0,NORTH", "MOVE", "REPORT"]);

    let (_, sink) = interp.into_parts();
    let (out, err) = sink.into_inner();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "REPORT - Final coordinates & Direction:\nX: 0, Y: 1, Facing: NORTH\n\n"
    );
    assert_eq!(
        String::from_utf8(err).unwrap(),
        "WARNING: MOVE ignored (robot not placed yet)\n"
    );
}

#[test]
fn test_every_warning_line_ends_in_reason_parens() {
    let sink = WriterOutput::new(Vec::new(), Vec::new(), OutputFormat::Text);
    let mut interp = Interpreter::new(Robot::default(), sink);
    interp.run([
        "PLACE 0,0,C",
        "PLACE A,1,NORTH",
        "PLACE 1,1",
        "PLACE",
        "PLACE 5,5,NORTH",
        "MOVE",
    ]);

    let (_, sink) = interp.into_parts();
    let (_, err) = sink.into_inner();
    let err = String::from_utf8(err).unwrap();
    let lines: Vec<&str> = err.lines().collect();
    assert_eq!(lines.len(), 6);
    for line in &lines {
        assert!(line.starts_with("WARNING: "), "{}", line);
        assert!(line.contains(" ignored ("), "{}", line);
        assert!(line.ends_with(')'), "{}", line);
    }
    assert_eq!(
        lines[0],
        "WARNING: PLACE ignored (direction must be NORTH, SOUTH, EAST or WEST; line: PLACE 0,0,C)"
    );
}
