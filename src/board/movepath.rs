use std::fmt;

use super::tile::Color;

/// Sentinel marking the end of a move's path in both coordinate arrays.
pub const PATH_END: i8 = -1;

/// Maximum number of cells a capture chain may occupy before silent truncation.
pub const MAXIMUM_MOVE_SIZE: usize = 6;

/// A path of up to 6 board cells: `rows[0],cols[0]` is the source, the rest are
/// successive landings. A `PATH_END` row marks the end of the path early.
/// An all-sentinel path (length 0) is the null move.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Move {
    rows: [i8; MAXIMUM_MOVE_SIZE],
    cols: [i8; MAXIMUM_MOVE_SIZE],
    pub color: Color,
}

impl Move {
    pub fn null(color: Color) -> Self {
        Move {
            rows: [PATH_END; MAXIMUM_MOVE_SIZE],
            cols: [PATH_END; MAXIMUM_MOVE_SIZE],
            color,
        }
    }

    /// Builds a move from an explicit path of `(row, col)` cells, at most 6.
    /// Longer paths are silently truncated to the cap.
    pub fn from_path(color: Color, path: &[(i32, i32)]) -> Self {
        let mut m = Move::null(color);
        for (i, &(row, col)) in path.iter().take(MAXIMUM_MOVE_SIZE).enumerate() {
            m.rows[i] = row as i8;
            m.cols[i] = col as i8;
        }
        m
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        self.rows[0] == PATH_END
    }

    /// Number of cells in the path (0 for the null move).
    pub fn path_len(&self) -> usize {
        self.rows.iter().position(|&r| r == PATH_END).unwrap_or(MAXIMUM_MOVE_SIZE)
    }

    /// The path's cells as `(row, col)` pairs.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let len = self.path_len();
        (0..len).map(move |i| (self.rows[i] as i32, self.cols[i] as i32))
    }

    pub fn cell(&self, i: usize) -> (i32, i32) {
        (self.rows[i] as i32, self.cols[i] as i32)
    }

    pub fn source(&self) -> (i32, i32) {
        self.cell(0)
    }

    pub fn destination(&self) -> (i32, i32) {
        self.cell(self.path_len() - 1)
    }

    /// A move is a capture iff the first hop has diagonal delta 2 on both axes.
    pub fn is_capture(&self) -> bool {
        if self.path_len() < 2 {
            return false;
        }
        let (r0, c0) = self.cell(0);
        let (r1, c1) = self.cell(1);
        (r0 - r1).abs() == 2 && (c0 - c1).abs() == 2
    }

    /// Number of ants captured: one per jump, i.e. `path_len - 1` for a
    /// capture chain, else 0.
    pub fn num_captures(&self) -> u32 {
        if !self.is_capture() {
            return 0;
        }
        (self.path_len() - 1) as u32
    }

    /// Appends a tail (from another move's path, starting at its index 1) onto
    /// `(land_row, land_col)`, used when prefixing a chained-capture tail.
    /// Extra cells beyond the 6-cell cap are dropped.
    pub fn prefixed(source: (i32, i32), land: (i32, i32), tail: &Move) -> Self {
        let mut rows = [PATH_END; MAXIMUM_MOVE_SIZE];
        let mut cols = [PATH_END; MAXIMUM_MOVE_SIZE];
        rows[0] = source.0 as i8;
        cols[0] = source.1 as i8;
        rows[1] = land.0 as i8;
        cols[1] = land.1 as i8;

        let tail_len = tail.path_len();
        let mut out_idx = 2;
        for tail_idx in 1..tail_len {
            if out_idx >= MAXIMUM_MOVE_SIZE {
                break;
            }
            rows[out_idx] = tail.rows[tail_idx];
            cols[out_idx] = tail.cols[tail_idx];
            out_idx += 1;
        }

        Move { rows, cols, color: tail.color }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            return write!(f, "null({:?})", self.color);
        }
        write!(f, "{:?}:", self.color)?;
        for (row, col) in self.cells() {
            write!(f, " ({row},{col})")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_move_has_zero_length() {
        let m = Move::null(Color::White);
        assert!(m.is_null());
        assert_eq!(m.path_len(), 0);
        assert_eq!(m.num_captures(), 0);
    }

    #[test]
    fn quiet_step_is_not_a_capture() {
        let m = Move::from_path(Color::White, &[(2, 1), (3, 0)]);
        assert_eq!(m.path_len(), 2);
        assert!(!m.is_capture());
        assert_eq!(m.num_captures(), 0);
    }

    #[test]
    fn single_jump_captures_one() {
        let m = Move::from_path(Color::White, &[(2, 1), (4, 3)]);
        assert!(m.is_capture());
        assert_eq!(m.num_captures(), 1);
    }

    #[test]
    fn multi_jump_captures_one_per_jump() {
        let m = Move::from_path(Color::White, &[(0, 1), (2, 3), (4, 5), (6, 7)]);
        assert!(m.is_capture());
        assert_eq!(m.path_len(), 4);
        assert_eq!(m.num_captures(), 3);
    }

    #[test]
    fn paths_longer_than_cap_are_truncated() {
        let path = [(0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13)];
        let m = Move::from_path(Color::White, &path);
        assert_eq!(m.path_len(), MAXIMUM_MOVE_SIZE);
    }

    #[test]
    fn prefixed_combines_source_and_tail() {
        let tail = Move::from_path(Color::White, &[(4, 3), (6, 5)]);
        let full = Move::prefixed((2, 1), (4, 3), &tail);
        assert_eq!(full.path_len(), 3);
        assert_eq!(full.cell(0), (2, 1));
        assert_eq!(full.cell(1), (4, 3));
        assert_eq!(full.cell(2), (6, 5));
    }
}
