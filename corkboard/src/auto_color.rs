//! Deterministic auto-color assignment for labels and columns.
//!
//! Maps a name to a color from a curated palette using a simple hash, so an
//! entity created without an explicit color always gets the same one back.

/// Curated palette of 16 colors (6-char hex without `#`).
///
/// Chosen to be distinct and readable as pill backgrounds with white or dark
/// text on both light and dark themes.
const PALETTE: &[&str] = &[
    "d73a4a", // red
    "e36209", // orange
    "f9c513", // yellow
    "0e8a16", // green
    "006b75", // teal
    "1d76db", // blue
    "5319e7", // purple
    "b60205", // dark red
    "d876e3", // pink
    "0075ca", // ocean
    "7057ff", // violet
    "008672", // sea green
    "e4e669", // lime
    "bfd4f2", // light blue
    "c5def5", // periwinkle
    "fbca04", // gold
];

/// Return a deterministic color for a name.
///
/// Uses a simple FNV-1a hash mapped to the palette index.
pub fn auto_color(name: &str) -> &'static str {
    let hash = fnv1a(name);
    let idx = (hash as usize) % PALETTE.len();
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
