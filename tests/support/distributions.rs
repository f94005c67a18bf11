use marginal_maxent::domain::Distribution;

fn binary(outcomes: &[&str], pmf: &[f64]) -> Distribution<char> {
    Distribution::new(
        outcomes.iter().map(|o| o.chars().collect()).collect(),
        pmf.to_vec(),
    )
    .expect("valid fixture")
}

/// Two perfectly correlated bits: `[0.5, 0, 0, 0.5]` over `{00, 01, 10, 11}`.
pub fn correlated_pair() -> Distribution<char> {
    binary(&["00", "11"], &[0.5, 0.5])
}

/// Two independent bits with `P(x0 = 1) = 0.3` and `P(x1 = 1) = 0.6`.
pub fn independent_pair() -> Distribution<char> {
    binary(
        &["00", "01", "10", "11"],
        &[0.7 * 0.4, 0.7 * 0.6, 0.3 * 0.4, 0.3 * 0.6],
    )
}

/// Third bit is the XOR of the first two, which are uniform.
pub fn xor() -> Distribution<char> {
    binary(&["000", "011", "101", "110"], &[0.25; 4])
}

/// Three bits with every outcome possible and no independence.
pub fn generic_triple() -> Distribution<char> {
    binary(
        &["000", "001", "010", "011", "100", "101", "110", "111"],
        &[0.20, 0.05, 0.10, 0.15, 0.05, 0.15, 0.05, 0.25],
    )
}

/// Three bits where the first is always 0.
pub fn constant_first_bit() -> Distribution<char> {
    binary(&["000", "001", "010", "011"], &[0.4, 0.1, 0.2, 0.3])
}
