use std::io::Write;

use robosim::{
    load_commands, read_commands, Direction, Interpreter, Placement, RecordingOutput, Robot,
};
use tempfile::NamedTempFile;

#[test]
fn test_reads_bundled_demo() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/inputA.txt");
    assert_eq!(read_commands(path), vec!["PLACE 0,0,NORTH", "MOVE", "REPORT"]);
}

#[test]
fn test_missing_file_is_empty() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/INVALID_INPUT.txt");
    assert!(read_commands(path).is_empty());
}

#[test]
fn test_file_with_blank_and_padded_lines() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "\n  PLACE 1,2,EAST \n\n MOVE\nMOVE\n\t\nLEFT\nMOVE\n   REPORT\n").unwrap();

    let commands = load_commands(file.path()).unwrap();
    assert_eq!(commands.len(), 6);

    let mut interp = Interpreter::new(Robot::default(), RecordingOutput::default());
    interp.run(&commands);
    assert_eq!(
        interp.sink().reports,
        vec![Placement { x: 3, y: 3, facing: Direction::North }]
    );
}

#[test]
fn test_bundled_demos_run_cleanly() {
    let dir = concat!(env!("CARGO_MANIFEST_DIR"), "/demos");
    let cases = [
        ("inputA.txt", Placement { x: 0, y: 1, facing: Direction::North }),
        ("inputB.txt", Placement { x: 0, y: 0, facing: Direction::West }),
        ("inputC.txt", Placement { x: 3, y: 3, facing: Direction::North }),
    ];
    for (name, expected) in cases {
        let commands = read_commands(format!("{}/{}", dir, name));
        let mut interp = Interpreter::new(Robot::default(), RecordingOutput::default());
        interp.run(&commands);
        assert_eq!(interp.sink().reports.last(), Some(&expected), "{}", name);
    }
}
