//! Terminal implementation of the render port.
//!
//! Regions are buffered as the controller fills them and printed in one go
//! by [`TerminalView::render`]. Status messages go straight to stderr.

use colored::Colorize;

use horo_app::{MessageKind, RenderPort};
use horo_core::{FortuneCategory, ZodiacSign};

struct Card {
    category: FortuneCategory,
    stars: String,
    rating: String,
    text: String,
}

/// Render port that prints to the terminal.
#[derive(Default)]
pub struct TerminalView {
    selection: Option<ZodiacSign>,
    sign_name: String,
    date: String,
    cards: Vec<Card>,
    advice: String,
    result_visible: bool,
}

impl TerminalView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Print the fortune panel, or the empty-state hint if nothing was shown.
    pub fn render(&self) {
        if !self.result_visible {
            println!("  Pick a sign to see today's fortune: horo show <sign>");
            return;
        }

        let symbol = self.selection.map(|s| s.symbol().to_string()).unwrap_or_default();
        println!("  {symbol} {}  {}", self.sign_name.bold(), self.date.dimmed());
        println!();

        for card in &self.cards {
            println!(
                "  {}  {} {}  {}",
                card.category.label().bold(),
                card.stars.yellow(),
                card.rating,
                card.text
            );
        }
        println!();
        println!("  {}  {}", "今日建议".bold(), self.advice);
    }
}

impl RenderPort for TerminalView {
    fn set_selection(&mut self, sign: Option<ZodiacSign>) {
        self.selection = sign;
    }

    fn set_button_enabled(&mut self, _enabled: bool) {}

    fn set_sign_name(&mut self, name: &str) {
        self.sign_name = name.to_string();
    }

    fn set_date(&mut self, date: &str) {
        self.date = date.to_string();
    }

    fn set_category(&mut self, category: FortuneCategory, stars: &str, rating: &str, text: &str) {
        let card = Card {
            category,
            stars: stars.to_string(),
            rating: rating.to_string(),
            text: text.to_string(),
        };
        match self.cards.iter_mut().find(|c| c.category == category) {
            Some(existing) => *existing = card,
            None => self.cards.push(card),
        }
    }

    fn set_advice(&mut self, advice: &str) {
        self.advice = advice.to_string();
    }

    fn set_result_visible(&mut self, visible: bool) {
        self.result_visible = visible;
    }

    fn show_message(&mut self, text: &str, kind: MessageKind) {
        match kind {
            MessageKind::Success => eprintln!("  {}", text.green()),
            MessageKind::Error => eprintln!("  {}", text.yellow()),
        }
    }

    fn open_share_window(&mut self, url: &str) {
        println!("  {url}");
    }
}
