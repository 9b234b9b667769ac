use anyhow::Context;
use speed::{
    dictionary::Dictionary,
    input::Keyboard,
    logging,
    screen::{Screen, TerminalGuard},
    Config, Director, Words,
};

fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("invalid configuration")?;

    logging::init_tracing(&config.log_path)
        .with_context(|| format!("cannot open log file {}", config.log_path.display()))?;

    // A game cannot start without words, so this fails before touching the terminal.
    let dictionary = Dictionary::load(&config.words_path)?;
    tracing::info!(
        path = %config.words_path.display(),
        words = dictionary.len(),
        seed = ?config.seed,
        "word list loaded"
    );

    let rng = match config.seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };

    let words = Words::new(&config, dictionary, rng);

    let guard = TerminalGuard::enter().context("cannot set up the terminal")?;
    let mut director = Director::new(&config, words, Keyboard, Screen::stdout(&config));
    let result = director.start_game();
    drop(guard);

    result.context("terminal I/O failed")?;

    println!("Final score: {}", director.score().points());

    Ok(())
}
