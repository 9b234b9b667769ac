use crate::{
    buffer::Buffer, config::Config, input::Input, score::Score, screen::Output, types::Key,
    words::Words,
};
use std::{io, thread, time::Duration};

/// Runs the game: one input, update and output phase per frame, then a fixed
/// pause.
pub struct Director<I, O> {
    input: I,
    output: O,
    keep_playing: bool,
    frame: u64,
    score: Score,
    buffer: Buffer,
    words: Words,
    frame_length: Duration,
    clear_sentinel: char,
    points_per_match: u32,
    max_x: i32,
}

impl<I: Input, O: Output> Director<I, O> {
    pub fn new(config: &Config, words: Words, input: I, output: O) -> Self {
        Self {
            input,
            output,
            keep_playing: true,
            frame: 0,
            score: Score::default(),
            buffer: Buffer::new(config),
            words,
            frame_length: config.frame_length,
            clear_sentinel: config.clear_sentinel,
            points_per_match: config.points_per_match,
            max_x: config.max_x,
        }
    }

    /// Plays until the player quits. `keep_playing` is only looked at between
    /// frames, so the frame that reads the quit key still finishes.
    pub fn start_game(&mut self) -> io::Result<()> {
        tracing::info!(words = self.words.len(), "game started");

        while self.keep_playing {
            self.tick()?;
            thread::sleep(self.frame_length);
        }

        tracing::info!(
            score = self.score.points(),
            frames = self.frame,
            "game over"
        );
        Ok(())
    }

    /// One full frame without the pause.
    pub fn tick(&mut self) -> io::Result<()> {
        self.frame += 1;
        self.get_inputs()?;
        self.do_updates();
        self.do_outputs()
    }

    fn get_inputs(&mut self) -> io::Result<()> {
        match self.input.get_letter()? {
            None => {}
            Some(Key::Char(c)) if c == self.clear_sentinel => self.buffer.clear(),
            Some(Key::Char(c)) => self.buffer.add_letter(c),
            Some(Key::Enter) => self.buffer.clear(),
            Some(Key::Backspace) => self.buffer.backspace(),
            Some(Key::Quit) => {
                tracing::info!(frame = self.frame, "quit requested");
                self.keep_playing = false;
            }
        }
        Ok(())
    }

    fn do_updates(&mut self) {
        let matches = self.words.match_and_score(self.buffer.text());
        if matches > 0 {
            let points = self.points_per_match * matches as u32;
            self.score.add_points(points);
            tracing::info!(matches, points, total = self.score.points(), "scored");
        }

        self.words.advance();

        let expired = self.words.expire_offscreen(self.max_x);
        if expired > 0 {
            tracing::debug!(expired, frame = self.frame, "words left the screen");
        }
    }

    fn do_outputs(&mut self) -> io::Result<()> {
        self.output.clear_screen()?;
        self.output.draw_actor(&self.buffer)?;
        self.output.draw_actors(self.words.words())?;
        self.output.draw_actor(&self.score)?;
        self.output.flush()
    }

    pub fn is_playing(&self) -> bool {
        self.keep_playing
    }

    pub fn score(&self) -> &Score {
        &self.score
    }

    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    pub fn words(&self) -> &Words {
        &self.words
    }

    pub fn output(&self) -> &O {
        &self.output
    }
}
