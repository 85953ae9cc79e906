//! Bounds-checked two-dimensional views over flat slices.
//!
//! Rows are laid out back to back with `stride` elements in between them,
//! which lets a grid be viewed straight out of newline-separated input.

#[cfg(test)]
mod tests;

use core::ops::Range;

use arrayvec::ArrayVec;

use self::sealed::Sealed;

mod sealed {
    pub trait Sealed {}
    impl<T> Sealed for [T] {}
}

pub trait GridExt<T>: Sealed {
    /// Convert type into grid with a stride of `0`.
    ///
    /// See [GridExt::as_grid_with_stride].
    #[inline]
    fn as_grid(&self, columns: usize) -> SliceGrid<'_, T> {
        self.as_grid_with_stride(columns, 0)
    }

    /// Convert type into a grid with the given topology.
    ///
    /// The `columns` is the width of a row while `stride` is the number of
    /// elements skipped after each row. A final row is included even if it is
    /// not followed by `stride` elements, so input without a trailing newline
    /// still produces every row.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::prelude::*;
    ///
    /// let grid = b"ab\ncd".as_grid_with_stride(2, 1);
    /// assert_eq!(grid.rows_len(), 2);
    /// assert_eq!(grid.try_get(1, 0), Some(&b'c'));
    /// ```
    fn as_grid_with_stride(&self, columns: usize, stride: usize) -> SliceGrid<'_, T>;
}

impl<T> GridExt<T> for [T] {
    #[inline]
    fn as_grid_with_stride(&self, columns: usize, stride: usize) -> SliceGrid<'_, T> {
        let stride = columns.saturating_add(stride);

        let rows = match self.len().checked_sub(columns) {
            Some(rest) if columns != 0 => rest / stride + 1,
            _ => 0,
        };

        SliceGrid {
            data: self,
            rows,
            columns,
            stride,
        }
    }
}

pub trait Grid<T> {
    /// Iterator over rows in the grid.
    type Rows<'a>: Iterator<Item = &'a [T]>
    where
        Self: 'a,
        T: 'a;

    /// Iterate over rows in the grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::prelude::*;
    ///
    /// let values = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];
    /// let grid = values.as_grid(4);
    /// assert!(grid.rows().flatten().copied().eq(1..=12));
    /// ```
    fn rows(&self) -> Self::Rows<'_>;

    /// Access the specified row in the grid.
    fn row(&self, row: usize) -> Option<&[T]>;

    /// Get number of rows in the grid.
    fn rows_len(&self) -> usize;

    /// Get number of columns in the grid.
    fn columns_len(&self) -> usize;

    /// Get the element at the given row and column.
    #[inline]
    #[track_caller]
    fn get(&self, row: usize, column: usize) -> &T {
        match self.try_get(row, column) {
            Some(value) => value,
            None => panic!("missing row `{row}`, column `{column}`"),
        }
    }

    /// Get the element at the given row and column.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::prelude::*;
    ///
    /// let data = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];
    /// let grid = data.as_grid(4);
    ///
    /// assert_eq!(grid.try_get(0, 1), Some(&2));
    /// assert_eq!(grid.try_get(2, 1), Some(&10));
    /// assert_eq!(grid.try_get(3, 0), None);
    /// assert_eq!(grid.try_get(0, 4), None);
    /// ```
    #[inline]
    fn try_get(&self, row: usize, column: usize) -> Option<&T> {
        self.row(row)?.get(column)
    }

    /// Collect an iterator of columns and rows into an array.
    ///
    /// This collects up until the array is full, an out of bounds position is
    /// encountered, or the iterator completes.
    #[inline]
    fn collect<const N: usize>(
        &self,
        it: impl IntoIterator<Item = (usize, usize)>,
    ) -> ArrayVec<T, N>
    where
        T: Copy,
    {
        let mut values = ArrayVec::new();

        for (column, row) in it {
            let Some(value) = self.try_get(row, column) else {
                break;
            };

            if values.try_push(*value).is_err() {
                break;
            }
        }

        values
    }
}

/// A grid borrowed from a slice.
pub struct SliceGrid<'a, T> {
    data: &'a [T],
    rows: usize,
    columns: usize,
    stride: usize,
}

impl<T> Clone for SliceGrid<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceGrid<'_, T> {}

impl<T> Grid<T> for SliceGrid<'_, T> {
    type Rows<'a> = Rows<'a, T>
    where
        Self: 'a,
        T: 'a;

    #[inline]
    fn rows(&self) -> Self::Rows<'_> {
        Rows {
            data: self.data,
            range: 0..self.rows,
            columns: self.columns,
            stride: self.stride,
        }
    }

    #[inline]
    fn row(&self, row: usize) -> Option<&[T]> {
        if row >= self.rows {
            return None;
        }

        row_slice(self.data, row, self.columns, self.stride)
    }

    #[inline]
    fn rows_len(&self) -> usize {
        self.rows
    }

    #[inline]
    fn columns_len(&self) -> usize {
        self.columns
    }
}

impl<G, T> Grid<T> for &G
where
    G: Grid<T>,
{
    type Rows<'a> = G::Rows<'a>
    where
        Self: 'a,
        T: 'a;

    #[inline]
    fn rows(&self) -> Self::Rows<'_> {
        (**self).rows()
    }

    #[inline]
    fn row(&self, row: usize) -> Option<&[T]> {
        (**self).row(row)
    }

    #[inline]
    fn rows_len(&self) -> usize {
        (**self).rows_len()
    }

    #[inline]
    fn columns_len(&self) -> usize {
        (**self).columns_len()
    }
}

/// Iterator over rows in a [SliceGrid].
pub struct Rows<'a, T> {
    data: &'a [T],
    range: Range<usize>,
    columns: usize,
    stride: usize,
}

impl<'a, T> Iterator for Rows<'a, T> {
    type Item = &'a [T];

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let row = self.range.next()?;
        row_slice(self.data, row, self.columns, self.stride)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

#[inline]
fn row_slice<T>(data: &[T], row: usize, columns: usize, stride: usize) -> Option<&[T]> {
    let start = row.checked_mul(stride)?;
    data.get(start..start.checked_add(columns)?)
}
