use super::{Grid, GridExt};

#[test]
fn test_trailing_newline() {
    let with = b"abc\ndef\n".as_grid_with_stride(3, 1);
    let without = b"abc\ndef".as_grid_with_stride(3, 1);

    for grid in [with, without] {
        assert_eq!(grid.rows_len(), 2);
        assert_eq!(grid.columns_len(), 3);
        assert_eq!(grid.row(1), Some(&b"def"[..]));
        assert_eq!(grid.row(2), None);
        assert!(grid.rows().eq([&b"abc"[..], &b"def"[..]]));
    }
}

#[test]
fn test_out_of_bounds() {
    let data = [0u8; 6];
    let grid = data.as_grid(3);

    assert_eq!(grid.try_get(1, 2), Some(&0));
    assert_eq!(grid.try_get(2, 0), None);
    assert_eq!(grid.try_get(0, 3), None);
    assert_eq!(grid.try_get(usize::MAX, usize::MAX), None);
}

#[test]
fn test_empty() {
    let grid = b"".as_grid_with_stride(3, 1);
    assert_eq!(grid.rows_len(), 0);
    assert_eq!(grid.rows().count(), 0);

    let grid = b"abc".as_grid(0);
    assert_eq!(grid.rows_len(), 0);
}

#[test]
fn test_collect() {
    let grid = b"XMAS\n.M..\n..A.\n...S\n".as_grid_with_stride(4, 1);

    let row = grid.collect::<4>((0..).zip([0; 4]));
    assert_eq!(&row[..], b"XMAS");

    let diagonal = grid.collect::<4>((0..).zip(0..));
    assert_eq!(&diagonal[..], b"XMAS");

    let clipped = grid.collect::<4>((2..).zip([0; 4]));
    assert_eq!(&clipped[..], b"AS");
}
