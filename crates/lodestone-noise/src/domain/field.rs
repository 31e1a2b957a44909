//! Two-dimensional scalar noise field.

/// A `width × height` grid of noise values, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct NoiseField {
    width: usize,
    height: usize,
    values: Vec<f32>,
}

impl NoiseField {
    /// Creates a zero-filled field.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            values: vec![0.0; width * height],
        }
    }

    /// Creates a field by evaluating `cell(x, y)` for every cell.
    ///
    /// Cells are visited column by column (`x` outer, `y` inner). Generators
    /// rely on this order, so a given stream always maps to the same pixels.
    pub fn from_fn<F>(width: usize, height: usize, mut cell: F) -> Self
    where
        F: FnMut(usize, usize) -> f32,
    {
        let mut field = Self::new(width, height);
        for x in 0..width {
            for y in 0..height {
                field.values[y * width + x] = cell(x, y);
            }
        }
        field
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// All values, row-major (`values[y * width + x]`).
    #[must_use]
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// The value at `(x, y)`, or `None` outside the grid.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<f32> {
        if x < self.width && y < self.height {
            Some(self.values[y * self.width + x])
        } else {
            None
        }
    }

    /// Overwrites the value at `(x, y)`. Returns `false` (and writes nothing)
    /// outside the grid.
    pub fn set(&mut self, x: usize, y: usize, value: f32) -> bool {
        if x < self.width && y < self.height {
            self.values[y * self.width + x] = value;
            true
        } else {
            false
        }
    }

    /// The value at `(x, y)` with repeat addressing: coordinates outside the
    /// grid wrap around. An empty field samples as `0.0`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn sample_wrapped(&self, x: i64, y: i64) -> f32 {
        if self.values.is_empty() {
            return 0.0;
        }
        let wrap = |coord: i64, len: usize| -> usize {
            let len = i64::try_from(len).unwrap_or(i64::MAX);
            coord.rem_euclid(len) as usize
        };
        self.values[wrap(y, self.height) * self.width + wrap(x, self.width)]
    }
}
