use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub font_family: Option<String>,
    /// Font size in device pixels.
    pub font_size: f64,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_family: None,
            font_size: 10.0,
        }
    }
}

impl TextStyle {
    pub fn sized(font_size: f64) -> Self {
        Self {
            font_size,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextMetrics {
    pub width: f64,
    pub height: f64,
    pub line_count: usize,
}

/// Font metrics provider.
///
/// Layout only ever asks for single-line widths and the height of a representative glyph box, so
/// hosts with a real shaping engine can plug it in here without touching geometry code.
pub trait TextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics;

    fn measure_width(&self, text: &str, style: &TextStyle) -> f64 {
        self.measure(text, style).width
    }

    /// Height of a one-line text box for `style`.
    fn text_box_height(&self, style: &TextStyle) -> f64 {
        self.measure("Q", style).height
    }
}

/// Metrics derived from the font size alone: every glyph is `char_width_factor` ems wide and a
/// line is `line_height_factor` ems tall. Zero factors fall back to 0.6 and 1.2.
#[derive(Debug, Clone, Default)]
pub struct DeterministicTextMeasurer {
    pub char_width_factor: f64,
    pub line_height_factor: f64,
}

impl TextMeasurer for DeterministicTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        let char_width_factor = if self.char_width_factor == 0.0 {
            0.6
        } else {
            self.char_width_factor
        };
        let line_height_factor = if self.line_height_factor == 0.0 {
            1.2
        } else {
            self.line_height_factor
        };

        let lines: Vec<&str> = text.split('\n').collect();
        let font_size = style.font_size.max(1.0);
        let max_chars = lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);

        let width = max_chars as f64 * font_size * char_width_factor;
        let height = lines.len() as f64 * font_size * line_height_factor;
        TextMetrics {
            width,
            height,
            line_count: lines.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic_width_scales_with_chars_and_size() {
        let m = DeterministicTextMeasurer::default();
        let style = TextStyle::sized(10.0);
        assert_eq!(m.measure_width("hhhh", &style), 24.0);
        assert_eq!(m.measure_width("", &style), 0.0);
        assert_eq!(m.text_box_height(&style), 12.0);
    }

    #[test]
    fn multi_line_text_uses_widest_line() {
        let m = DeterministicTextMeasurer {
            char_width_factor: 0.5,
            line_height_factor: 1.0,
        };
        let metrics = m.measure("ab\nabcd", &TextStyle::sized(20.0));
        assert_eq!(metrics.width, 40.0);
        assert_eq!(metrics.height, 40.0);
        assert_eq!(metrics.line_count, 2);
    }
}
