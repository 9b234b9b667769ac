use crate::{
    config::Config,
    types::{Actor, Point},
};
use crossterm::style::Color;
use std::borrow::Cow;

/// What the player has typed since the last clear, shown on the bottom row.
#[derive(Debug, Clone)]
pub struct Buffer {
    text: String,
    position: Point,
}

impl Buffer {
    pub fn new(config: &Config) -> Self {
        Self {
            text: String::new(),
            position: Point::new(0, config.max_y - 1),
        }
    }

    pub fn add_letter(&mut self, letter: char) {
        self.text.push(letter);
    }

    pub fn backspace(&mut self) {
        self.text.pop();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Actor for Buffer {
    fn label(&self) -> Cow<'_, str> {
        Cow::Owned(format!("Buffer: {}", self.text))
    }

    fn position(&self) -> Point {
        self.position
    }

    fn color(&self) -> Color {
        Color::Yellow
    }
}
