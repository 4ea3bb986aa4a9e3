use crate::input::IStr;

use super::{check, error_context, Parts};

#[test]
fn test_parts_one_per_line() {
    let mut out = Vec::new();
    (11u64, -31i64).write_parts(&mut out).unwrap();
    assert_eq!(out, b"11\n-31\n");
}

#[test]
fn test_check() {
    assert!(check(&(2usize, 4usize), &(2usize, 4usize)).is_ok());

    let error = check(&(2usize, 4usize), &(2usize, 5usize)).unwrap_err();
    assert_eq!(error.to_string(), "(2, 4) (value) != (2, 5) (expected)");
}

#[cfg(not(prod))]
#[test]
fn test_error_context_position() {
    let input = IStr::from_static("1 2\n3 x\n");
    let mut p = input;

    let error = p
        .lines::<Vec<i64>>()
        .collect::<Result<Vec<_>, _>>()
        .unwrap_err();

    let error = error_context("inputs/test.txt", input, error);

    assert_eq!(
        format!("{error:#}"),
        "inputs/test.txt:2:3: not an integer or integer overflow `x`"
    );
}

#[cfg(not(prod))]
#[test]
fn test_error_context_first_line() {
    let input = IStr::from_static("x 2\n");
    let mut p = input;
    let error = p.next::<u32>().unwrap_err();
    let error = error_context("inputs/test.txt", input, error);
    assert_eq!(error.to_string(), "inputs/test.txt:1:1");
}

#[test]
fn test_error_context_without_span() {
    let input = IStr::from_static("");
    let error = error_context("inputs/test.txt", input, anyhow::anyhow!("boom"));
    assert_eq!(format!("{error:#}"), "inputs/test.txt: boom");
}
