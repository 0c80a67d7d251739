//! Escaping of user-supplied text embedded in `LIKE`/`ILIKE` patterns.

/// Escape SQL LIKE meta-characters so user input is treated literally.
///
/// Every pattern operand built from request input goes through this before it
/// is bound, paired with an explicit `ESCAPE E'\\'` clause in the SQL. Without
/// it a search for `100%` would match everything, and pathological inputs
/// could degrade into expensive wildcard scans.
pub(crate) fn escape_like_pattern(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' | '%' | '_' => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}
