//! Minimum-cost bipartite assignment (Hungarian / Kuhn-Munkres)
//!
//! Solves the slot-to-observation pairing over the cost matrix padded to a
//! `max(rows, cols)` square. Padding cells carry the matrix's sentinel cost,
//! so excess rows or columns are forced into dummy matches that the
//! classifier later discards. O(S^3) with row/column potentials; S is tiny
//! here (4 slots plus a day's punches).

use crate::services::cost_matrix::CostMatrix;

/// Solve the padded square assignment for a day's cost matrix.
///
/// Returns `row -> column` over `[0, S)` with minimal total cost. For a
/// fixed matrix the result is deterministic: columns are scanned in
/// ascending order and only a strictly smaller reduced cost displaces the
/// current candidate, so ties resolve toward lower indices.
pub fn solve(matrix: &CostMatrix) -> Vec<usize> {
    let size = matrix.rows().max(matrix.cols());
    solve_square(size, |row, col| matrix.padded_get(row, col))
}

/// Hungarian algorithm over an `n x n` cost function.
///
/// Classic potentials formulation: grow an alternating tree from each row,
/// maintaining per-column minima of reduced costs, then flip the augmenting
/// path found when a free column is reached.
fn solve_square<F>(n: usize, cost: F) -> Vec<usize>
where
    F: Fn(usize, usize) -> f64,
{
    if n == 0 {
        return Vec::new();
    }

    // 1-indexed working arrays; index 0 is the virtual root column
    let mut u = vec![0.0f64; n + 1];
    let mut v = vec![0.0f64; n + 1];
    let mut matched_row = vec![0usize; n + 1]; // column -> row (0 = free)
    let mut way = vec![0usize; n + 1];

    for row in 1..=n {
        matched_row[0] = row;
        let mut j0 = 0usize;
        let mut minv = vec![f64::INFINITY; n + 1];
        let mut used = vec![false; n + 1];

        loop {
            used[j0] = true;
            let i0 = matched_row[j0];
            let mut delta = f64::INFINITY;
            let mut j1 = 0usize;

            for j in 1..=n {
                if used[j] {
                    continue;
                }
                let reduced = cost(i0 - 1, j - 1) - u[i0] - v[j];
                if reduced < minv[j] {
                    minv[j] = reduced;
                    way[j] = j0;
                }
                if minv[j] < delta {
                    delta = minv[j];
                    j1 = j;
                }
            }

            for j in 0..=n {
                if used[j] {
                    u[matched_row[j]] += delta;
                    v[j] -= delta;
                } else {
                    minv[j] -= delta;
                }
            }

            j0 = j1;
            if matched_row[j0] == 0 {
                break;
            }
        }

        // Flip the augmenting path back to the root
        loop {
            let j1 = way[j0];
            matched_row[j0] = matched_row[j1];
            j0 = j1;
            if j0 == 0 {
                break;
            }
        }
    }

    let mut assignment = vec![0usize; n];
    for j in 1..=n {
        assignment[matched_row[j] - 1] = j - 1;
    }
    assignment
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ScheduleTable;
    use crate::services::cost_matrix::CostMatrix;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 11, 25).unwrap().and_hms_opt(h, m, s).unwrap()
    }

    fn total_cost(n: usize, cost: impl Fn(usize, usize) -> f64, assignment: &[usize]) -> f64 {
        (0..n).map(|i| cost(i, assignment[i])).sum()
    }

    #[test]
    fn solves_identity_matrix() {
        let cost = |i: usize, j: usize| if i == j { 0.0 } else { 10.0 };
        let assignment = solve_square(3, cost);
        assert_eq!(assignment, vec![0, 1, 2]);
    }

    #[test]
    fn solves_known_three_by_three() {
        // Unique optimum: rows take columns 1, 0, 2 for total 5 + 4 + 3 = 12
        let m = [[8.0, 5.0, 9.0], [4.0, 2.0, 4.0], [7.0, 3.0, 3.0]];
        let cost = |i: usize, j: usize| m[i][j];
        let assignment = solve_square(3, cost);
        assert_eq!(assignment, vec![1, 0, 2]);
        assert_eq!(total_cost(3, cost, &assignment), 12.0);
    }

    #[test]
    fn result_is_a_bijection() {
        let m = [
            [9.0, 11.0, 14.0, 11.0, 7.0],
            [6.0, 15.0, 13.0, 13.0, 10.0],
            [12.0, 13.0, 6.0, 8.0, 8.0],
            [11.0, 9.0, 10.0, 12.0, 9.0],
            [7.0, 12.0, 14.0, 10.0, 14.0],
        ];
        let assignment = solve_square(5, |i, j| m[i][j]);
        let mut seen = vec![false; 5];
        for &c in &assignment {
            assert!(!seen[c]);
            seen[c] = true;
        }
        // Optimal total for this matrix is 38 (hand-verified)
        assert_eq!(total_cost(5, |i, j| m[i][j], &assignment), 38.0);
    }

    #[test]
    fn equal_cost_ties_resolve_to_lower_column() {
        let cost = |_i: usize, _j: usize| 1.0;
        let assignment = solve_square(4, cost);
        assert_eq!(assignment, vec![0, 1, 2, 3]);
    }

    #[test]
    fn rectangular_matrix_pads_to_square() {
        // Six punches, four slots: solver works over a 6x6 padded square
        let schedule = ScheduleTable::standard();
        let observations = [
            at(7, 59, 0),
            at(8, 2, 0),
            at(12, 58, 0),
            at(13, 59, 0),
            at(17, 55, 0),
            at(18, 3, 0),
        ];
        let matrix = CostMatrix::build(&schedule, &observations);
        let assignment = solve(&matrix);
        assert_eq!(assignment.len(), 6);

        let mut seen = vec![false; 6];
        for &c in &assignment {
            assert!(!seen[c]);
            seen[c] = true;
        }
        // Clock-in takes 07:59 (60 s) over 08:02 (120 s)
        assert_eq!(assignment[0], 0);
    }
}
