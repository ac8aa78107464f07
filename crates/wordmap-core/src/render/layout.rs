//! Deterministic word placement.
//!
//! Words are laid out largest-first along an archimedean spiral from the
//! canvas center; a word sticks at the first position where its bounding
//! box fits inside the canvas without overlapping an already placed box.
//! No randomness: the same frequency table always produces the same
//! layout.

/// Approximate glyph width as a fraction of font size.
const GLYPH_ASPECT: f32 = 0.6;
/// Gap kept between bounding boxes, in pixels.
const PADDING: f32 = 2.0;
/// Angular step along the spiral, in radians.
const ANGLE_STEP: f32 = 0.35;
/// Radial growth per radian.
const RADIAL_GROWTH: f32 = 1.8;

/// A word with its computed geometry. `x`/`y` is the box center.
#[derive(Debug, Clone)]
pub struct PlacedWord {
    pub text: String,
    pub count: u64,
    pub font_size: f32,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Places words on a fixed canvas.
#[derive(Debug, Clone, Copy)]
pub struct LayoutEngine {
    width: f32,
    height: f32,
    min_font: f32,
    max_font: f32,
    max_words: usize,
}

impl LayoutEngine {
    pub fn new(width: f32, height: f32, min_font: f32, max_font: f32, max_words: usize) -> Self {
        Self {
            width,
            height,
            min_font,
            max_font,
            max_words,
        }
    }

    /// Lays out entries already sorted by count descending. Words that
    /// cannot be placed without overlap are dropped.
    pub fn layout(&self, entries: &[(&str, u64)]) -> Vec<PlacedWord> {
        let Some(&(_, max_count)) = entries.first() else {
            return Vec::new();
        };
        if max_count == 0 {
            return Vec::new();
        }

        let mut placed: Vec<PlacedWord> = Vec::new();
        for (index, &(word, count)) in entries.iter().take(self.max_words).enumerate() {
            let font_size = self.scaled_size(count, max_count);
            let width = word.chars().count() as f32 * font_size * GLYPH_ASPECT;
            let height = font_size;
            if let Some((x, y)) = self.place(width, height, index, &placed) {
                placed.push(PlacedWord {
                    text: word.to_string(),
                    count,
                    font_size,
                    x,
                    y,
                    width,
                    height,
                });
            }
        }
        placed
    }

    /// Linear interpolation between min and max font size by count ratio.
    fn scaled_size(&self, count: u64, max_count: u64) -> f32 {
        let ratio = count as f32 / max_count as f32;
        self.min_font + (self.max_font - self.min_font) * ratio
    }

    fn place(
        &self,
        width: f32,
        height: f32,
        index: usize,
        placed: &[PlacedWord],
    ) -> Option<(f32, f32)> {
        let cx = self.width / 2.0;
        let cy = self.height / 2.0;
        // Per-word phase offset spreads successive words around the center.
        let phase = index as f32 * 0.9;
        let max_radius = (self.width * self.width + self.height * self.height).sqrt() / 2.0;

        let mut t = 0.0f32;
        loop {
            let radius = RADIAL_GROWTH * t;
            if radius > max_radius {
                return None;
            }
            let x = cx + radius * (t + phase).cos();
            let y = cy + radius * (t + phase).sin();
            if self.fits(x, y, width, height) && !collides(x, y, width, height, placed) {
                return Some((x, y));
            }
            t += ANGLE_STEP;
        }
    }

    fn fits(&self, x: f32, y: f32, width: f32, height: f32) -> bool {
        x - width / 2.0 >= 0.0
            && y - height / 2.0 >= 0.0
            && x + width / 2.0 <= self.width
            && y + height / 2.0 <= self.height
    }
}

fn collides(x: f32, y: f32, width: f32, height: f32, placed: &[PlacedWord]) -> bool {
    placed.iter().any(|p| {
        (x - p.x).abs() * 2.0 < width + p.width + PADDING
            && (y - p.y).abs() * 2.0 < height + p.height + PADDING
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> LayoutEngine {
        LayoutEngine::new(800.0, 450.0, 10.0, 60.0, 200)
    }

    #[test]
    fn test_empty_entries_place_nothing() {
        assert!(engine().layout(&[]).is_empty());
    }

    #[test]
    fn test_top_word_gets_max_font() {
        let placed = engine().layout(&[("segmentation", 10), ("scans", 1)]);
        assert_eq!(placed[0].text, "segmentation");
        assert!((placed[0].font_size - 60.0).abs() < f32::EPSILON);
        assert!(placed[1].font_size < placed[0].font_size);
    }

    #[test]
    fn test_no_overlapping_boxes() {
        let entries: Vec<(String, u64)> = (0..30)
            .map(|i| (format!("word{i}"), 30 - i as u64))
            .collect();
        let refs: Vec<(&str, u64)> = entries.iter().map(|(w, c)| (w.as_str(), *c)).collect();
        let placed = engine().layout(&refs);
        for (i, a) in placed.iter().enumerate() {
            for b in placed.iter().skip(i + 1) {
                let overlap_x = (a.x - b.x).abs() * 2.0 < a.width + b.width;
                let overlap_y = (a.y - b.y).abs() * 2.0 < a.height + b.height;
                assert!(!(overlap_x && overlap_y), "{} overlaps {}", a.text, b.text);
            }
        }
    }

    #[test]
    fn test_boxes_stay_inside_canvas() {
        let placed = engine().layout(&[("segmentation", 5), ("landmarks", 3)]);
        for p in &placed {
            assert!(p.x - p.width / 2.0 >= 0.0);
            assert!(p.y - p.height / 2.0 >= 0.0);
            assert!(p.x + p.width / 2.0 <= 800.0);
            assert!(p.y + p.height / 2.0 <= 450.0);
        }
    }

    #[test]
    fn test_max_words_cap() {
        let entries: Vec<(String, u64)> = (0..50)
            .map(|i| (format!("word{i}"), 50 - i as u64))
            .collect();
        let refs: Vec<(&str, u64)> = entries.iter().map(|(w, c)| (w.as_str(), *c)).collect();
        let capped = LayoutEngine::new(800.0, 450.0, 10.0, 60.0, 5).layout(&refs);
        assert!(capped.len() <= 5);
    }
}
