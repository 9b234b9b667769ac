use crate::types::{Actor, Point};
use crossterm::style::Color;
use std::borrow::Cow;

#[derive(Debug, Clone, Default)]
pub struct Score {
    points: u32,
}

impl Score {
    pub fn add_points(&mut self, points: u32) {
        self.points = self.points.saturating_add(points);
    }

    pub fn points(&self) -> u32 {
        self.points
    }
}

impl Actor for Score {
    fn label(&self) -> Cow<'_, str> {
        Cow::Owned(format!("Score: {}", self.points))
    }

    fn position(&self) -> Point {
        Point::new(1, 0)
    }

    fn color(&self) -> Color {
        Color::Green
    }
}
