/// Dot product of two equal-length slices.
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len(), "dot() operands must have equal length");
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

/// Index of the maximum value in a slice, first occurrence winning.
///
/// Scans in ascending index order with a strict `>` comparison, so ties at
/// the maximum keep the earliest index. Returns 0 for an empty slice.
pub fn argmax(values: &[f64]) -> usize {
    let mut best = 0;
    let mut best_value = f64::NEG_INFINITY;
    for (i, &v) in values.iter().enumerate() {
        if v > best_value {
            best = i;
            best_value = v;
        }
    }
    best
}
