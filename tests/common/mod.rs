use std::fs;
use std::path::Path;

/// Read a golden file from `tests/golden/`.
pub fn golden(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("golden")
        .join(name);
    fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("golden file {:?} unreadable: {}", path, err))
        .replace("\r\n", "\n")
}

/// Compare `actual` with a golden file, reporting the first line that differs.
pub fn assert_matches_golden(name: &str, actual: &str) {
    let expected = golden(name);
    let mut expected_lines = expected.lines();
    let mut actual_lines = actual.lines();

    for line_no in 1.. {
        match (expected_lines.next(), actual_lines.next()) {
            (None, None) => break,
            (want, got) => assert_eq!(got, want, "{} differs at line {}", name, line_no),
        }
    }

    assert_eq!(
        actual.ends_with('\n'),
        expected.ends_with('\n'),
        "{} trailing newline differs",
        name
    );
}
