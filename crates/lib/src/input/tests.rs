use super::{Ends, ErrorKind, IStr};

#[test]
fn test_words_split_on_any_whitespace() {
    let mut input = IStr::from_static("  1\t2   3 \r\n4");

    assert_eq!(input.try_line::<Vec<u32>>().unwrap(), Some(vec![1, 2, 3]));
    assert_eq!(input.try_line::<Vec<u32>>().unwrap(), Some(vec![4]));
    assert_eq!(input.try_line::<Vec<u32>>().unwrap(), None);
}

#[test]
fn test_blank_lines() {
    let mut input = IStr::from_static("1 2\n\n   \n3 4\n");

    let lines = input
        .lines::<Option<Vec<u32>>>()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();

    assert_eq!(lines, [Some(vec![1, 2]), None, None, Some(vec![3, 4])]);

    // Without the option a blank line ends parsing.
    let mut input = IStr::from_static("1 2\n\n3 4\n");
    assert_eq!(input.lines::<Vec<u32>>().count(), 1);
}

#[test]
fn test_ends() {
    let mut input = IStr::from_static("3   4\n5\n1 x y 2\n-7 8\n");

    let lines = input
        .lines::<Ends<i64>>()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();

    assert_eq!(lines, [Ends(3, 4), Ends(5, 5), Ends(1, 2), Ends(-7, 8)]);
}

#[test]
fn test_not_integer() {
    let mut input = IStr::from_static("1 2\n3 x\n");

    assert_eq!(input.try_line::<Vec<i64>>().unwrap(), Some(vec![1, 2]));

    let error = input.try_line::<Vec<i64>>().unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::NotInteger(..)));
    assert_eq!(error.to_string(), "not an integer or integer overflow `x`");
}

#[test]
fn test_integer_overflow() {
    let mut input = IStr::from_static("256");
    let error = input.next::<u8>().unwrap_err();
    assert_eq!(error.to_string(), "not an integer or integer overflow `256`");
}

#[test]
fn test_unexpected_eof() {
    let mut input = IStr::from_static("   ");
    let error = input.next::<u32>().unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::UnexpectedEof));
}

#[derive(Debug)]
struct Pair {
    sum: u32,
}

crate::from_input! {
    |values: Vec<u32>| -> Pair {
        anyhow::ensure!(values.len() == 2, "expected a pair, got {}", values.len());
        Ok(Pair { sum: values.iter().sum() })
    }
}

#[test]
fn test_from_input() {
    let mut input = IStr::from_static("1 2\n1 2 3\n");

    let pair = input.try_line::<Pair>().unwrap().unwrap();
    assert_eq!(pair.sum, 3);

    let error = input.try_line::<Pair>().unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::Boxed(..)));
    assert_eq!(error.to_string(), "expected a pair, got 3");
}
