// tests/common/mod.rs

use std::path::PathBuf;

const CANDIDATES: &[&str] = &[
    "SourceSansPro-Bold.otf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/Library/Fonts/Arial Bold.ttf",
    "C:\\Windows\\Fonts\\arialbd.ttf",
];

/// Finds a font to rasterize with: `TEXTCIRCUIT_TEST_FONT` first, then a few
/// well-known system locations. Tests that need a font skip when this is `None`.
pub fn test_font() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("TEXTCIRCUIT_TEST_FONT") {
        return Some(PathBuf::from(path));
    }
    let found = CANDIDATES.iter().map(PathBuf::from).find(|p| p.is_file());
    if found.is_none() {
        println!("No test font found, set TEXTCIRCUIT_TEST_FONT to run this test");
    }
    found
}
