//! Square pixel grid with horizontally mirrored rows
//!
//! Only the left half of each row is generated. The right half is the reverse
//! of the leading cells, so every row reads the same from both ends.

use ndarray::{Array2, ArrayView1};

/// Tri-state cell value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum PixelValue {
    /// Left as background color
    #[default]
    Background = 0,
    /// Painted with the foreground color
    Foreground = 1,
    /// Painted with the spot color
    Spot = 2,
}

impl PixelValue {
    /// Map a bucket index to a value, saturating at [`PixelValue::Spot`]
    pub const fn from_index(index: usize) -> Self {
        match index {
            0 => Self::Background,
            1 => Self::Foreground,
            _ => Self::Spot,
        }
    }

    /// Numeric cell value
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Preview character used for text rendering
    pub const fn glyph(self) -> char {
        match self {
            Self::Background => '.',
            Self::Foreground => '#',
            Self::Spot => '*',
        }
    }
}

/// Number of generated columns per row
pub const fn data_width(size: usize) -> usize {
    size.div_ceil(2)
}

/// Number of mirrored columns per row
pub const fn mirror_width(size: usize) -> usize {
    size - data_width(size)
}

/// Complete a row from its generated half
///
/// Appends the reverse of the first [`mirror_width`] cells. For odd sizes the
/// center column is not repeated.
pub fn mirror_row(half: &[PixelValue], size: usize) -> Vec<PixelValue> {
    let mirrored = half.iter().take(mirror_width(size)).rev();
    half.iter().chain(mirrored).copied().collect()
}

/// Square grid of pixel values stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    cells: Array2<PixelValue>,
}

impl PixelGrid {
    /// Create a grid filled with background
    ///
    /// # Panics
    ///
    /// Panics if `size * size` overflows `isize`. Icon generation clamps
    /// sizes well below that bound.
    pub fn new(size: usize) -> Self {
        Self {
            cells: Array2::from_elem((size, size), PixelValue::Background),
        }
    }

    /// Build a grid by generating each row's left half with `cell`
    ///
    /// Rows are produced top to bottom and cells left to right, so `cell` is
    /// called exactly `size * ceil(size / 2)` times in a fixed order.
    pub fn from_half_rows<F>(size: usize, mut cell: F) -> Self
    where
        F: FnMut() -> PixelValue,
    {
        let mut grid = Self::new(size);
        for mut row in grid.cells.rows_mut() {
            let half: Vec<PixelValue> = (0..data_width(size)).map(|_| cell()).collect();
            for (target, value) in row.iter_mut().zip(mirror_row(&half, size)) {
                *target = value;
            }
        }
        grid
    }

    /// Cells per side
    pub fn size(&self) -> usize {
        self.cells.nrows()
    }

    /// Value at `(row, col)`, if in bounds
    pub fn get(&self, row: usize, col: usize) -> Option<PixelValue> {
        self.cells.get([row, col]).copied()
    }

    /// View of a single row
    pub fn row(&self, row: usize) -> Option<ArrayView1<'_, PixelValue>> {
        (row < self.size()).then(|| self.cells.row(row))
    }

    /// Iterate `(row, col, value)` in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, PixelValue)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((row, col), &value)| (row, col, value))
    }

    /// Flat row-major numeric values, `size * size` long
    pub fn values(&self) -> Vec<u8> {
        self.cells.iter().map(|value| value.as_u8()).collect()
    }

    /// Whether every row equals its own reverse
    pub fn is_mirrored(&self) -> bool {
        self.cells
            .rows()
            .into_iter()
            .all(|row| row.iter().eq(row.iter().rev()))
    }

    /// Text preview, one line per row
    pub fn to_ascii(&self) -> String {
        let mut text = String::with_capacity(self.size() * (self.size() + 1));
        for row in self.cells.rows() {
            text.extend(row.iter().map(|value| value.glyph()));
            text.push('\n');
        }
        text
    }
}
