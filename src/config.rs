use std::{fmt, path::PathBuf, str::FromStr, time::Duration};

/// Startup configuration. Built once and handed to constructors by reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Playfield width. Words at `max_x - 1` or beyond are expired.
    pub max_x: i32,
    /// Playfield height. The buffer lives on row `max_y - 1`.
    pub max_y: i32,
    /// Fixed delay between frames.
    pub frame_length: Duration,
    /// Number of words kept on screen.
    pub starting_words: usize,
    /// Upper bound (inclusive) for both velocity components.
    pub max_velocity: i32,
    pub points_per_match: u32,
    /// Typing this character clears the buffer instead of appending to it.
    pub clear_sentinel: char,
    pub words_path: PathBuf,
    /// Fixed RNG seed for reproducible games.
    pub seed: Option<u64>,
    pub log_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_x: 80,
            max_y: 20,
            frame_length: Duration::from_millis(80),
            starting_words: 5,
            max_velocity: 10,
            points_per_match: 3,
            clear_sentinel: '*',
            words_path: PathBuf::from("assets/words.txt"),
            seed: None,
            log_path: PathBuf::from("speed.log"),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The variable is set but could not be parsed.
    Invalid { key: &'static str, value: String },
    /// The value parsed but is outside the playable range.
    OutOfRange { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid { key, value } => write!(f, "{key}: cannot parse {value:?}"),
            ConfigError::OutOfRange { key, value } => write!(f, "{key}: {value} is out of range"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// Reads overrides from the process environment, loading `.env` first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env locally; safe to ignore when not present.
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(max_x) = parse(&lookup, "SPEED_MAX_X")? {
            config.max_x = at_least("SPEED_MAX_X", max_x, 2)?;
        }
        if let Some(max_y) = parse(&lookup, "SPEED_MAX_Y")? {
            config.max_y = at_least("SPEED_MAX_Y", max_y, 2)?;
        }
        if let Some(millis) = parse::<u64>(&lookup, "SPEED_FRAME_MS")? {
            config.frame_length = Duration::from_millis(millis);
        }
        if let Some(count) = parse(&lookup, "SPEED_STARTING_WORDS")? {
            config.starting_words = at_least("SPEED_STARTING_WORDS", count, 1)?;
        }
        if let Some(path) = lookup("SPEED_WORDS_PATH") {
            config.words_path = PathBuf::from(path);
        }
        config.seed = parse(&lookup, "SPEED_SEED")?;
        if let Some(path) = lookup("SPEED_LOG_PATH") {
            config.log_path = PathBuf::from(path);
        }

        Ok(config)
    }
}

fn parse<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError> {
    match lookup(key) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}

fn at_least<T: PartialOrd + fmt::Display>(
    key: &'static str,
    value: T,
    min: T,
) -> Result<T, ConfigError> {
    if value < min {
        return Err(ConfigError::OutOfRange {
            key,
            value: value.to_string(),
        });
    }
    Ok(value)
}
