//! SVG word-cloud rendering.
//!
//! The cloud is emitted as a plain SVG document: one `<text>` element per
//! placed word, font size proportional to count, colors cycled from the
//! configured palette. Output is byte-deterministic for a given analysis.

pub mod layout;
pub mod palette;

use crate::config::RenderConfig;
use crate::errors::ReportError;
use crate::report::Reporter;
use crate::types::AnalysisReport;

use layout::LayoutEngine;

/// Renders the frequency table as an SVG word cloud.
pub struct SvgCloudRenderer {
    config: RenderConfig,
}

impl SvgCloudRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    fn escape_xml(s: &str) -> String {
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;")
    }
}

impl Reporter for SvgCloudRenderer {
    fn name(&self) -> &'static str {
        "svg"
    }

    fn generate(&self, report: &AnalysisReport) -> Result<String, ReportError> {
        let cfg = &self.config;
        let width = cfg.effective_width();
        let height = cfg.effective_height();
        let colors = cfg.effective_palette();
        let engine = LayoutEngine::new(
            width as f32,
            height as f32,
            cfg.effective_min_font_size() as f32,
            cfg.effective_max_font_size() as f32,
            cfg.effective_max_words(),
        );
        let entries = report.frequencies.sorted_entries();
        let placed = engine.layout(&entries);

        let mut svg = String::new();
        svg.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        svg.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">\n"
        ));
        svg.push_str(&format!(
            "  <rect width=\"100%\" height=\"100%\" fill=\"{}\"/>\n",
            Self::escape_xml(cfg.effective_background())
        ));
        let title = cfg.effective_title();
        if !title.is_empty() {
            svg.push_str(&format!(
                "  <text x=\"{:.1}\" y=\"28\" font-family=\"sans-serif\" font-size=\"24\" text-anchor=\"middle\" fill=\"#333333\">{}</text>\n",
                width as f32 / 2.0,
                Self::escape_xml(title)
            ));
        }
        svg.push_str("  <g font-family=\"sans-serif\" text-anchor=\"middle\">\n");
        for (index, word) in placed.iter().enumerate() {
            // Shift the baseline down so the box center sits on the glyph
            // midline.
            let baseline = word.y + word.font_size * 0.35;
            svg.push_str(&format!(
                "    <text x=\"{:.1}\" y=\"{:.1}\" font-size=\"{:.1}\" fill=\"{}\">{}</text>\n",
                word.x,
                baseline,
                word.font_size,
                Self::escape_xml(palette::color_for(&colors, index)),
                Self::escape_xml(&word.text)
            ));
        }
        svg.push_str("  </g>\n</svg>\n");
        Ok(svg)
    }
}
