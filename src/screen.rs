use crate::{
    config::Config,
    types::{Actor, Point},
};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute, queue,
    style::{style, PrintStyledContent, Stylize},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Stdout, Write};

/// Where each frame is drawn.
pub trait Output {
    fn clear_screen(&mut self) -> io::Result<()>;

    fn draw_actor(&mut self, actor: &impl Actor) -> io::Result<()>;

    fn draw_actors<A: Actor>(&mut self, actors: &[A]) -> io::Result<()> {
        for actor in actors {
            self.draw_actor(actor)?;
        }
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()>;
}

/// Queues crossterm commands for a frame and writes them out on `flush`.
pub struct Screen<W: Write> {
    out: W,
    max_x: i32,
    max_y: i32,
}

impl<W: Write> Screen<W> {
    pub fn new(out: W, config: &Config) -> Self {
        Self {
            out,
            max_x: config.max_x,
            max_y: config.max_y,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Where `label` should start, and how many chars of it fit, or `None`
    /// if nothing of it is visible.
    ///
    /// Rows past the bottom wrap back into the word area above the buffer row.
    fn place(&self, position: Point, label: &str) -> Option<(u16, u16, usize)> {
        if position.x < 0 || position.x >= self.max_x || position.y < 0 {
            return None;
        }

        let y = if position.y < self.max_y {
            position.y
        } else {
            position.y % (self.max_y - 1).max(1)
        };

        let room = (self.max_x - position.x) as usize;
        let visible = label.chars().count().min(room);
        let x = u16::try_from(position.x).ok()?;
        let y = u16::try_from(y).ok()?;

        Some((x, y, visible))
    }
}

impl Screen<Stdout> {
    pub fn stdout(config: &Config) -> Self {
        Self::new(io::stdout(), config)
    }
}

impl<W: Write> Output for Screen<W> {
    fn clear_screen(&mut self) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All))
    }

    fn draw_actor(&mut self, actor: &impl Actor) -> io::Result<()> {
        let label = actor.label();

        let Some((x, y, visible)) = self.place(actor.position(), &label) else {
            return Ok(());
        };

        let text: String = label.chars().take(visible).collect();

        queue!(
            self.out,
            MoveTo(x, y),
            PrintStyledContent(style(text).with(actor.color()).bold())
        )
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

/// Raw mode plus alternate screen for as long as it lives.
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, Hide, Clear(ClearType::All))?;
        Ok(Self { _private: () })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal();
    }
}

/// Best-effort terminal reset, also used from the panic hook.
pub fn restore_terminal() {
    let _ = execute!(io::stdout(), Clear(ClearType::All), Show, LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
}
