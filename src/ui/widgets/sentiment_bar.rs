//! Single-line stacked bar for a positive/neutral/negative breakdown

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use crate::domain::{SentimentBreakdown, Tone};

const POSITIVE_CHAR: char = '█';
const NEUTRAL_CHAR: char = '▒';
const NEGATIVE_CHAR: char = '█';

/// A compact inline sentiment bar (single line)
pub struct SentimentBar<'a> {
    breakdown: &'a SentimentBreakdown,
}

impl<'a> SentimentBar<'a> {
    pub fn new(breakdown: &'a SentimentBreakdown) -> Self {
        Self { breakdown }
    }
}

impl<'a> Widget for SentimentBar<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let (positive, neutral, _) = segment_widths(self.breakdown, area.width as usize);
        for i in 0..area.width {
            let idx = i as usize;
            let (ch, color) = if idx < positive {
                (POSITIVE_CHAR, Color::Green)
            } else if idx < positive + neutral {
                (NEUTRAL_CHAR, Color::DarkGray)
            } else {
                (NEGATIVE_CHAR, Color::Red)
            };
            buf.get_mut(area.x + i, area.y)
                .set_char(ch)
                .set_style(Style::default().fg(color));
        }
    }
}

/// Split `width` cells between the three shares; the neutral share absorbs rounding
fn segment_widths(breakdown: &SentimentBreakdown, width: usize) -> (usize, usize, usize) {
    let share = |pct: u8| ((width as f64) * f64::from(pct) / 100.0).round() as usize;
    let positive = share(breakdown.positive).min(width);
    let negative = share(breakdown.negative).min(width - positive);
    let neutral = width - positive - negative;
    (positive, neutral, negative)
}

/// Format the bar as plain text (for status messages and tests)
pub fn sentiment_bar_text(breakdown: &SentimentBreakdown, width: usize) -> String {
    let (positive, neutral, negative) = segment_widths(breakdown, width);
    let mut out = String::with_capacity(width * 3);
    out.extend(std::iter::repeat(POSITIVE_CHAR).take(positive));
    out.extend(std::iter::repeat(NEUTRAL_CHAR).take(neutral));
    out.extend(std::iter::repeat('░').take(negative));
    out
}

pub fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Positive => Color::Green,
        Tone::Neutral => Color::Gray,
        Tone::Mixed => Color::Yellow,
        Tone::Negative => Color::Red,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breakdown(positive: u8, neutral: u8, negative: u8) -> SentimentBreakdown {
        SentimentBreakdown {
            tone: Tone::Mixed,
            positive,
            neutral,
            negative,
            note: String::new(),
        }
    }

    #[test]
    fn test_bar_text_fills_width() {
        let text = sentiment_bar_text(&breakdown(70, 25, 5), 20);
        assert_eq!(text.chars().count(), 20);
        assert_eq!(text.chars().filter(|c| *c == POSITIVE_CHAR).count(), 14);
        assert_eq!(text.chars().filter(|c| *c == '░').count(), 1);
    }

    #[test]
    fn test_bar_text_zero_width() {
        assert!(sentiment_bar_text(&breakdown(40, 35, 25), 0).is_empty());
    }

    #[test]
    fn test_bar_render_colors() {
        let area = Rect::new(0, 0, 10, 1);
        let mut buf = Buffer::empty(area);
        let data = breakdown(50, 0, 50);
        SentimentBar::new(&data).render(area, &mut buf);
        assert_eq!(buf.get(0, 0).fg, Color::Green);
        assert_eq!(buf.get(9, 0).fg, Color::Red);
    }
}
