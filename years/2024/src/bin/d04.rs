use lib::grid::SliceGrid;
use lib::prelude::*;

/// The eight directions a word can be read in, as `(dx, dy)`.
const DIRECTIONS: [(isize, isize); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

#[entry(input = "d04.txt", expect = (18, 9))]
fn main(input: IStr) -> Result<(u32, u32)> {
    let data = input.as_data();
    let columns = data.find_byte(b'\n').unwrap_or(data.len());
    let grid = data.as_grid_with_stride(columns, 1);
    Ok((count_xmas(&grid), count_x_mas(&grid)))
}

/// Read the byte at an offset from the given position, if it's in the grid.
fn at(grid: &SliceGrid<'_, u8>, (x, y): (usize, usize), (dx, dy): (isize, isize)) -> Option<u8> {
    let x = x.checked_add_signed(dx)?;
    let y = y.checked_add_signed(dy)?;
    grid.try_get(y, x).copied()
}

fn count_xmas(grid: &SliceGrid<'_, u8>) -> u32 {
    let mut count = 0;

    for y in 0..grid.rows_len() {
        for x in 0..grid.columns_len() {
            for (dx, dy) in DIRECTIONS {
                let found = b"XMAS"
                    .iter()
                    .zip(0..)
                    .all(|(&c, n)| at(grid, (x, y), (dx * n, dy * n)) == Some(c));

                count += u32::from(found);
            }
        }
    }

    count
}

fn count_x_mas(grid: &SliceGrid<'_, u8>) -> u32 {
    let mut count = 0;

    for y in 0..grid.rows_len() {
        for x in 0..grid.columns_len() {
            if grid.try_get(y, x) != Some(&b'A') {
                continue;
            }

            let diagonal = |(dx, dy): (isize, isize)| {
                let a = at(grid, (x, y), (-dx, -dy));
                let b = at(grid, (x, y), (dx, dy));
                matches!((a, b), (Some(b'M'), Some(b'S')) | (Some(b'S'), Some(b'M')))
            };

            count += u32::from(diagonal((1, 1)) && diagonal((1, -1)));
        }
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample() {
        let data = include_bytes!("../../inputs/d04.txt");
        let grid = data.as_grid_with_stride(10, 1);
        assert_eq!(grid.rows_len(), 10);
        assert_eq!(count_xmas(&grid), 18);
        assert_eq!(count_x_mas(&grid), 9);
    }

    #[test]
    fn test_edges() {
        let grid = b"XMAS\nSAMX".as_grid_with_stride(4, 1);
        assert_eq!(count_xmas(&grid), 2);
        assert_eq!(count_x_mas(&grid), 0);
    }
}
