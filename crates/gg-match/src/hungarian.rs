/// Hungarian algorithm on a dense square cost matrix, O(n³).
///
/// `cost` is row-major with `n * n` entries. Returns the assigned column for
/// each row of a minimum-total-cost perfect matching. The result is a
/// permutation of `0..n`, so callers can rely on every column appearing
/// exactly once.
pub fn minimum_cost_assignment(cost: &[f64], n: usize) -> Vec<usize> {
    assert_eq!(cost.len(), n * n, "cost matrix must be square");
    if n == 0 {
        return Vec::new();
    }

    // Potentials and matching state are 1-based; index 0 is the virtual
    // unmatched column used to seed each augmenting search.
    let mut u = vec![0.0f64; n + 1];
    let mut v = vec![0.0f64; n + 1];
    let mut row_of = vec![0usize; n + 1];
    let mut way = vec![0usize; n + 1];

    for i in 1..=n {
        row_of[0] = i;
        let mut j0 = 0usize;
        let mut minv = vec![f64::INFINITY; n + 1];
        let mut used = vec![false; n + 1];

        loop {
            used[j0] = true;
            let i0 = row_of[j0];
            let mut delta = f64::INFINITY;
            let mut j1 = 0usize;

            for j in 1..=n {
                if used[j] {
                    continue;
                }
                let reduced = cost[(i0 - 1) * n + (j - 1)] - u[i0] - v[j];
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
                    u[row_of[j]] += delta;
                    v[j] -= delta;
                } else {
                    minv[j] -= delta;
                }
            }

            j0 = j1;
            if row_of[j0] == 0 {
                break;
            }
        }

        // Walk the augmenting path back and flip the matching along it.
        loop {
            let j1 = way[j0];
            row_of[j0] = row_of[j1];
            j0 = j1;
            if j0 == 0 {
                break;
            }
        }
    }

    let mut assignment = vec![0usize; n];
    for j in 1..=n {
        if row_of[j] > 0 {
            assignment[row_of[j] - 1] = j - 1;
        }
    }
    assignment
}

#[cfg(test)]
mod tests {
    use super::minimum_cost_assignment;

    #[test]
    fn empty_matrix() {
        assert!(minimum_cost_assignment(&[], 0).is_empty());
    }

    #[test]
    fn picks_the_cheap_diagonal() {
        #[rustfmt::skip]
        let cost = [
            0.0, 1.0, 1.0,
            1.0, 0.0, 1.0,
            1.0, 1.0, 0.0,
        ];
        assert_eq!(minimum_cost_assignment(&cost, 3), vec![0, 1, 2]);
    }

    #[test]
    fn forced_off_diagonal() {
        // Row 0 strongly prefers column 1, which forces row 1 onto column 0.
        #[rustfmt::skip]
        let cost = [
            5.0, 0.0,
            5.0, 4.0,
        ];
        assert_eq!(minimum_cost_assignment(&cost, 2), vec![1, 0]);
    }

    #[test]
    fn result_is_a_permutation() {
        #[rustfmt::skip]
        let cost = [
            3.0, 1.0, 4.0, 1.5,
            2.0, 0.5, 2.5, 3.0,
            1.0, 2.0, 0.5, 2.0,
            2.5, 3.0, 1.0, 0.5,
        ];
        let mut cols = minimum_cost_assignment(&cost, 4);
        cols.sort_unstable();
        assert_eq!(cols, vec![0, 1, 2, 3]);
    }

    #[test]
    fn negated_similarity_maximizes() {
        // Maximizing similarity by minimizing its negation.
        #[rustfmt::skip]
        let sim = [
            0.9, 0.1,
            0.8, 0.2,
        ];
        let cost: Vec<f64> = sim.iter().map(|s| -s).collect();
        // 0.9 + 0.2 beats 0.1 + 0.8.
        assert_eq!(minimum_cost_assignment(&cost, 2), vec![0, 1]);
    }
}
