//! Word-cloud color palettes.

/// Default palette, sampled from the twilight-shifted colormap.
pub const TWILIGHT: &[&str] = &[
    "#30123b", "#28417c", "#3e7aa6", "#6cb2b0", "#b0d2c2", "#e2d9e2",
    "#d3a9c8", "#c06aa2", "#97346f", "#621d45",
];

/// Returns the fill color for the word at `index`, cycling the palette.
pub fn color_for(palette: &[String], index: usize) -> &str {
    if palette.is_empty() {
        return "#333333";
    }
    &palette[index % palette.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_cycles() {
        let palette: Vec<String> = vec!["#111111".to_string(), "#222222".to_string()];
        assert_eq!(color_for(&palette, 0), "#111111");
        assert_eq!(color_for(&palette, 1), "#222222");
        assert_eq!(color_for(&palette, 2), "#111111");
    }

    #[test]
    fn test_empty_palette_falls_back() {
        assert_eq!(color_for(&[], 7), "#333333");
    }
}
