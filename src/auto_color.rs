//! Deterministic auto-color assignment for columns and label chips.
//!
//! Maps a title to a color from a curated palette using a simple hash, so a
//! column created without an explicit color gets the same hue every session.

/// Curated palette of 12 column colors (6-char hex without `#`).
///
/// Muted enough to sit behind dark header text and distinct enough that
/// adjacent columns rarely collide.
const PALETTE: &[&str] = &[
    "1d76db", // blue
    "0e8a16", // green
    "e36209", // orange
    "d73a4a", // red
    "5319e7", // purple
    "006b75", // teal
    "fbca04", // gold
    "b60205", // dark red
    "0075ca", // ocean
    "d876e3", // pink
    "008672", // sea green
    "7057ff", // violet
];

/// Return a deterministic palette color for a column or label title.
pub fn auto_color(title: &str) -> &'static str {
    let idx = (fnv1a(title) as usize) % PALETTE.len();
    PALETTE[idx]
}

/// FNV-1a hash (32-bit) for short strings.
fn fnv1a(s: &str) -> u32 {
    let mut hash: u32 = 0x811c_9dc5;
    for byte in s.bytes() {
        hash ^= byte as u32;
        hash = hash.wrapping_mul(0x0100_0193);
    }
    hash
}
