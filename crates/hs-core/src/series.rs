//! Elementary sequence builders shared by the projection and budget crates.

/// `n` evenly spaced values from `start` to `end`, both inclusive.
///
/// The last element is exactly `end` (not `start + (n - 1) * step`), so a
/// series always lands on its stated endpoint.  `n == 0` yields an empty
/// vector and `n == 1` yields `[start]`.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut out: Vec<f64> = (0..n - 1).map(|i| start + step * i as f64).collect();
            out.push(end);
            out
        }
    }
}

/// Running totals: `out[i] = values[0] + … + values[i]`.
///
/// Summation is strictly left to right so results are reproducible.
pub fn cumulative_sum(values: &[f64]) -> Vec<f64> {
    values
        .iter()
        .scan(0.0, |acc, &v| {
            *acc += v;
            Some(*acc)
        })
        .collect()
}
