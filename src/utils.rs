use num_bigint::BigUint;

/// [Binomial coefficient][binomial] `C(n, k)`, the number of `k`-element subsets of an `n`-element set.
///
/// ```text
/// C(n, k) = n! / (k! * (n - k)!)
/// ```
///
/// [binomial]: https://en.wikipedia.org/wiki/Binomial_coefficient
pub fn binomial(n: usize, k: usize) -> BigUint {
    if k > n {
        return BigUint::ZERO;
    }
    let k = k.min(n - k);
    let mut result = BigUint::from(1u8);
    for i in 0..k {
        // result * (n - i) == C(n, i + 1) * (i + 1), so the division is exact.
        result = result * BigUint::from(n - i) / BigUint::from(i + 1);
    }
    result
}

/// Number of row subsets the cover search tests for a table with `rows` rows, `essential` of them essential.
///
/// This is the sum of `C(m, k)` for `k` in `1..m`, where `m = rows - essential`.
pub fn search_space(rows: usize, essential: usize) -> BigUint {
    let m = rows.saturating_sub(essential);
    (1..m).map(|k| binomial(m, k)).sum()
}
