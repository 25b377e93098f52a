//! Human-readable grouping for slip printing.

/// Group a reference for printing: two leading digits, then clusters of
/// five, the final cluster taking whatever remains.
///
/// A full 27-digit reference splits evenly (`2 + 5×5`):
/// `"210000000003139471430009017"` → `"21 00000 00003 13947 14300 09017"`.
/// Shorter strings keep the same rule, e.g.
/// `"123456789012345"` → `"12 34567 89012 345"`.
///
/// Pure and infallible; inputs of up to two characters pass through
/// unchanged.
pub fn group_for_print(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 5 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i >= 2 && (i - 2) % 5 == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}
