use crossterm::style::Color;
use std::{borrow::Cow, ops::Add};

/// A cell coordinate or a per-frame velocity on the playfield.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

/// Anything the output service knows how to put on screen.
pub trait Actor {
    fn label(&self) -> Cow<'_, str>;

    fn position(&self) -> Point;

    fn color(&self) -> Color {
        Color::White
    }
}

/// A word travelling across the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub value: String,
    pub position: Point,
    pub velocity: Point,
}

impl Word {
    pub fn new(value: impl Into<String>, position: Point, velocity: Point) -> Self {
        Self {
            value: value.into(),
            position,
            velocity,
        }
    }

    /// One motion step. Bounds are not checked here; expiry handles overshoot.
    pub fn move_next(&mut self) {
        self.position = self.position + self.velocity;
    }
}

impl Actor for Word {
    fn label(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.value)
    }

    fn position(&self) -> Point {
        self.position
    }
}

/// A single keystroke as seen by the game loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Backspace,
    Enter,
    Quit,
}
