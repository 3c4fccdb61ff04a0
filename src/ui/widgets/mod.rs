pub mod sentiment_bar;

pub use sentiment_bar::{sentiment_bar_text, tone_color, SentimentBar};
