use serde_json::Number;

/// 2^64 and 2^63, the exclusive upper bounds of `u64` and `i64` as `f64`.
const U64_END: f64 = 18_446_744_073_709_551_616.0;
const I64_END: f64 = 9_223_372_036_854_775_808.0;

/// Multiply `value` by `factor` and drop the fractional part.
///
/// Truncates toward zero, so `45 * 1.4` (62.99999999999999 in binary floating
/// point) lands on 62, not 63. Non-negative results are stored as `u64`,
/// negative ones as `i64`; `None` when the result fits neither.
pub fn truncate_scaled(value: f64, factor: f64) -> Option<Number> {
    let truncated = (value * factor).trunc();
    if (0.0..U64_END).contains(&truncated) {
        Some(Number::from(truncated as u64))
    } else if (-I64_END..0.0).contains(&truncated) {
        Some(Number::from(truncated as i64))
    } else {
        None
    }
}

/// Identifier of the same item one tier up: the first character becomes
/// `tier`, the rest is kept.
pub fn derive_tier_id(id: &str, tier: char) -> String {
    let mut chars = id.chars();
    chars.next();
    let mut derived = String::with_capacity(id.len());
    derived.push(tier);
    derived.push_str(chars.as_str());
    derived
}

/// Apply each `(from, to)` substitution to every occurrence, one after the
/// other, on the output of the previous one.
pub fn replace_in_sequence(text: &str, substitutions: &[(&str, &str)]) -> String {
    substitutions
        .iter()
        .fold(text.to_string(), |acc, &(from, to)| acc.replace(from, to))
}
