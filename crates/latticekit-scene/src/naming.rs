//! Host-style unique naming.

/// Returns `base` if it is free, otherwise the first free `base.NNN`.
///
/// `is_taken` is queried for every candidate, so callers decide what
/// namespace the name must be unique in (scene objects, one object's
/// modifier stack, ...).
pub fn unique_name(base: &str, is_taken: impl Fn(&str) -> bool) -> String {
    if !is_taken(base) {
        return base.to_string();
    }
    let mut n: u32 = 1;
    loop {
        let candidate = format!("{}.{:03}", base, n);
        if !is_taken(&candidate) {
            return candidate;
        }
        n += 1;
    }
}
