use super::{ErrorKind, IStr, Split, B};
use crate::env::Size;

#[test]
fn test_tuples() {
    let mut input = IStr::from_static(b"3   4\n4   3\n\n2   5\n");

    let values = input
        .iter::<(u32, u32)>()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();

    assert_eq!(values, [(3, 4), (4, 3), (2, 5)]);
    assert_eq!(input.as_data(), b"\n");
}

#[test]
fn test_lines() {
    let mut input = IStr::from_static(b"7 6 4\n\n1 2\n");

    assert_eq!(input.line::<Vec<i32>>().unwrap(), [7, 6, 4]);
    assert_eq!(input.line::<Vec<i32>>().unwrap(), Vec::<i32>::new());
    assert_eq!(input.try_line::<Vec<i32>>().unwrap(), Some(vec![1, 2]));
    assert_eq!(input.try_line::<Vec<i32>>().unwrap(), None);
    assert!(input.line::<Vec<i32>>().is_err());
}

#[test]
fn test_sections() {
    let mut input = IStr::from_static(b"47|53\n97|13\n\n75,47\n");
    let mut rules = Vec::new();

    while let Some(Split((a, b))) = input.line::<Option<Split<'|', (u32, u32)>>>().unwrap() {
        rules.push((a, b));
    }

    assert_eq!(rules, [(47, 53), (97, 13)]);

    let Split(pages) = input.line::<Split<',', Vec<u32>>>().unwrap();
    assert_eq!(pages, [75, 47]);
}

#[test]
fn test_bad_integer() {
    let mut input = IStr::from_static(b"12 x4\n");
    assert_eq!(input.next::<u32>().unwrap(), 12);

    let error = input.next::<u32>().unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::NotInteger("x4")));
}

#[test]
fn test_bad_integer_span() {
    let mut input = IStr::from_static(b"12 x4\n");
    input.next::<u32>().unwrap();

    let error = input.next::<u32>().unwrap_err();
    assert_eq!(error.span, Size::ZERO.offset(3)..Size::ZERO.offset(5));
}

#[test]
fn test_bytes() {
    let mut input = IStr::from_static(b"R4");

    let B(b) = input.next::<B>().unwrap();
    assert_eq!(b, b'R');
    assert_eq!(input.next::<u32>().unwrap(), 4);
    assert!(input.is_empty());
    assert!(input.try_next::<B>().unwrap().is_none());
}

#[test]
fn test_half_pair() {
    let mut input = IStr::from_static(b"1 2 3\n");
    assert_eq!(input.next::<(u32, u32)>().unwrap(), (1, 2));

    let error = input.next::<(u32, u32)>().unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::ExpectedTuple(2)));
}

#[test]
fn test_split_pair_length() {
    let mut input = IStr::from_static(b"1|2|3\n4\n");

    let error = input.line::<Split<'|', (u32, u32)>>().unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::ExpectedTuple(2)));

    let error = input.line::<Split<'|', (u32, u32)>>().unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::ExpectedTuple(2)));
}

#[test]
fn test_split_chunk_error() {
    let mut input = IStr::from_static(b"1,,3\n");

    let error = input.line::<Split<',', Vec<i32>>>().unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::UnexpectedEof));
    assert_eq!(error.span, Size::ZERO.offset(2)..Size::ZERO.offset(2));
}
