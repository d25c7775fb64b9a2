use std::collections::HashMap;

pub(super) type CellKey = (i64, i64);

/// Cell coordinates beyond this magnitude are not bucketed, which keeps key
/// arithmetic exact and far from `i64` overflow.
const MAX_CELL_COORD: f64 = (1u64 << 40) as f64;

/// Fixed-size square buckets over projected points.
pub(super) struct SpatialGrid {
    cells: HashMap<CellKey, Vec<usize>>,
    outliers: Vec<usize>,
}

impl SpatialGrid {
    /// Bucket `points` into cells of side `cell_size`. Indices inside a cell
    /// stay in input order.
    pub fn build(points: &[(f64, f64)], cell_size: f64) -> Self {
        let mut cells: HashMap<CellKey, Vec<usize>> = HashMap::new();
        let mut outliers = Vec::new();
        for (i, &(x, y)) in points.iter().enumerate() {
            match cell_key(x, y, cell_size) {
                Some(key) => cells.entry(key).or_default().push(i),
                None => outliers.push(i),
            }
        }
        Self { cells, outliers }
    }

    /// Occupied cells in key order.
    pub fn sorted_cells(&self) -> Vec<(CellKey, &[usize])> {
        let mut cells: Vec<(CellKey, &[usize])> = self
            .cells
            .iter()
            .map(|(k, v)| (*k, v.as_slice()))
            .collect();
        cells.sort_unstable_by_key(|(k, _)| *k);
        cells
    }

    pub fn get(&self, key: CellKey) -> Option<&[usize]> {
        self.cells.get(&key).map(Vec::as_slice)
    }

    /// Points whose cell coordinate is out of range or not finite, in input order.
    pub fn outliers(&self) -> &[usize] {
        &self.outliers
    }
}

fn cell_key(x: f64, y: f64, cell_size: f64) -> Option<CellKey> {
    let cx = (x / cell_size).floor();
    let cy = (y / cell_size).floor();
    // NaN fails both comparisons.
    if cx.abs() <= MAX_CELL_COORD && cy.abs() <= MAX_CELL_COORD {
        Some((cx as i64, cy as i64))
    } else {
        None
    }
}
