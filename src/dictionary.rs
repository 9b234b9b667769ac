use std::{
    fmt, fs, io,
    path::{Path, PathBuf},
};

/// The word list every spawned word is drawn from. Loaded once at startup.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<String>,
}

#[derive(Debug)]
pub enum DictionaryError {
    Io { path: PathBuf, source: io::Error },
    Empty { path: PathBuf },
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DictionaryError::Io { path, source } => {
                write!(f, "cannot read word list {}: {source}", path.display())
            }
            DictionaryError::Empty { path } => {
                write!(f, "word list {} has no words", path.display())
            }
        }
    }
}

impl std::error::Error for DictionaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DictionaryError::Io { source, .. } => Some(source),
            DictionaryError::Empty { .. } => None,
        }
    }
}

impl Dictionary {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let path = path.as_ref();

        let text = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
            path: path.to_owned(),
            source,
        })?;

        Self::from_text(&text).ok_or_else(|| DictionaryError::Empty {
            path: path.to_owned(),
        })
    }

    /// One word per line. Blank lines are skipped; `None` if nothing is left.
    pub fn from_text(text: &str) -> Option<Self> {
        let words: Vec<String> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_owned)
            .collect();

        if words.is_empty() {
            return None;
        }

        Some(Self { words })
    }

    pub fn choose(&self, rng: &fastrand::Rng) -> &str {
        &self.words[rng.usize(..self.words.len())]
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
