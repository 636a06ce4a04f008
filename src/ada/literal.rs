/// Quote `raw` as an Ada string literal.
///
/// Non-ASCII characters are dropped and embedded `"` are doubled.
pub fn to_ada_string(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 2);
    out.push('"');
    for c in raw.chars().filter(char::is_ascii) {
        if c == '"' {
            out.push('"');
        }
        out.push(c);
    }
    out.push('"');
    out
}
