use crate::{
    config::Config,
    dictionary::Dictionary,
    types::{Point, Word},
};

/// The words currently on screen.
///
/// The collection never grows or shrinks after construction: every word that
/// leaves (matched or expired) is replaced by a freshly spawned word in the
/// same slot, so draw order of the other words is untouched.
pub struct Words {
    words: Vec<Word>,
    // Slots refilled by a match this frame. They start moving next frame.
    fresh: Vec<bool>,
    dictionary: Dictionary,
    rng: fastrand::Rng,
    max_x: i32,
    max_y: i32,
    max_velocity: i32,
}

impl Words {
    /// Fills the playfield with `config.starting_words` random words.
    pub fn new(config: &Config, dictionary: Dictionary, rng: fastrand::Rng) -> Self {
        let mut words = Self::with_words(config, dictionary, rng, Vec::new());

        words.words = (0..config.starting_words).map(|_| words.spawn()).collect();
        words.fresh = vec![false; config.starting_words];

        words
    }

    /// Starts from a known layout. The collection keeps `words.len()` words.
    pub fn with_words(
        config: &Config,
        dictionary: Dictionary,
        rng: fastrand::Rng,
        words: Vec<Word>,
    ) -> Self {
        Self {
            fresh: vec![false; words.len()],
            words,
            dictionary,
            rng,
            max_x: config.max_x,
            max_y: config.max_y,
            max_velocity: config.max_velocity,
        }
    }

    /// A new word with random text, position and velocity.
    ///
    /// Spawns never land on the expiry column (`max_x - 1`), so every new
    /// word is on screen for at least one frame.
    pub fn spawn(&self) -> Word {
        let value = self.dictionary.choose(&self.rng).to_owned();
        let position = Point::new(
            self.rng.i32(0..(self.max_x - 1).max(1)),
            self.rng.i32(0..self.max_y.max(1)),
        );
        let velocity = Point::new(
            self.rng.i32(0..=self.max_velocity),
            self.rng.i32(0..=self.max_velocity),
        );

        Word::new(value, position, velocity)
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Moves every word one step, except words spawned by a match this frame.
    pub fn advance(&mut self) {
        for (word, fresh) in self.words.iter_mut().zip(self.fresh.iter_mut()) {
            if !*fresh {
                word.move_next();
            }
            *fresh = false;
        }
    }

    /// Replaces every word that appears somewhere in `buffer` and returns how
    /// many were replaced. Duplicates on screen each count.
    pub fn match_and_score(&mut self, buffer: &str) -> usize {
        if buffer.is_empty() {
            return 0;
        }

        let matched: Vec<usize> = self
            .words
            .iter()
            .enumerate()
            .filter(|(_, word)| buffer.contains(word.value.as_str()))
            .map(|(i, _)| i)
            .collect();

        for &i in &matched {
            tracing::debug!(word = %self.words[i].value, slot = i, "word matched");
            self.replace(i);
            self.fresh[i] = true;
        }

        matched.len()
    }

    /// Replaces every word that reached column `max_x - 1` or beyond.
    pub fn expire_offscreen(&mut self, max_x: i32) -> usize {
        let expired: Vec<usize> = self
            .words
            .iter()
            .zip(&self.fresh)
            .enumerate()
            .filter(|(_, (word, fresh))| !**fresh && word.position.x >= max_x - 1)
            .map(|(i, _)| i)
            .collect();

        for &i in &expired {
            tracing::debug!(word = %self.words[i].value, slot = i, "word expired");
            self.replace(i);
        }

        expired.len()
    }

    fn replace(&mut self, slot: usize) {
        self.words[slot] = self.spawn();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORD_LIST: &str = "apple\nberry\ncherry\nmango\nlemon\nolive\ngrape\nmelon";

    fn config() -> Config {
        Config {
            max_x: 80,
            max_y: 20,
            starting_words: 5,
            ..Config::default()
        }
    }

    fn dictionary() -> Dictionary {
        Dictionary::from_text(WORD_LIST).unwrap()
    }

    fn staged(words: Vec<Word>) -> Words {
        Words::with_words(&config(), dictionary(), fastrand::Rng::with_seed(1), words)
    }

    fn still(value: &str, x: i32, y: i32) -> Word {
        Word::new(value, Point::new(x, y), Point::default())
    }

    #[test]
    fn new_spawns_within_bounds() {
        let config = config();
        let words = Words::new(&config, dictionary(), fastrand::Rng::with_seed(3));

        assert_eq!(words.len(), config.starting_words);
        for word in words.words() {
            assert!((0..config.max_x - 1).contains(&word.position.x));
            assert!((0..config.max_y).contains(&word.position.y));
            assert!((0..=config.max_velocity).contains(&word.velocity.x));
            assert!((0..=config.max_velocity).contains(&word.velocity.y));
            assert!(WORD_LIST.lines().any(|w| w == word.value));
        }
    }

    #[test]
    fn same_seed_same_words() {
        let a = Words::new(&config(), dictionary(), fastrand::Rng::with_seed(99));
        let b = Words::new(&config(), dictionary(), fastrand::Rng::with_seed(99));
        assert_eq!(a.words(), b.words());

        let spawned_a: Vec<Word> = (0..10).map(|_| a.spawn()).collect();
        let spawned_b: Vec<Word> = (0..10).map(|_| b.spawn()).collect();
        assert_eq!(spawned_a, spawned_b);
    }

    #[test]
    fn empty_buffer_matches_nothing() {
        let mut words = staged(vec![still("cat", 5, 0), still("dog", 6, 0)]);
        let before = words.words().to_vec();

        assert_eq!(words.match_and_score(""), 0);
        assert_eq!(words.words(), before.as_slice());
    }

    #[test]
    fn every_contained_word_is_replaced() {
        let mut words = staged(vec![
            still("cat", 5, 0),
            still("owl", 7, 2),
            still("dog", 6, 0),
        ]);

        assert_eq!(words.match_and_score("I have a cat and dog"), 2);
        assert_eq!(words.len(), 3);
        // Replacements come from the dictionary, which has neither word.
        assert_ne!(words.words()[0].value, "cat");
        assert_ne!(words.words()[2].value, "dog");
        assert_eq!(words.words()[1], still("owl", 7, 2));
    }

    #[test]
    fn duplicates_both_score() {
        let mut words = staged(vec![still("cat", 1, 1), still("cat", 40, 9)]);
        assert_eq!(words.match_and_score("cat"), 2);
        assert!(words.words().iter().all(|w| w.value != "cat"));
    }

    #[test]
    fn partial_typing_does_not_match() {
        let mut words = staged(vec![still("cat", 1, 1)]);
        assert_eq!(words.match_and_score("ca"), 0);
        assert_eq!(words.words()[0], still("cat", 1, 1));
    }

    #[test]
    fn advance_applies_velocity_unclamped() {
        let mut words = staged(vec![Word::new("cat", Point::new(75, 18), Point::new(10, 10))]);
        words.advance();
        assert_eq!(words.words()[0].position, Point::new(85, 28));
    }

    #[test]
    fn expiry_boundary_is_max_x_minus_one() {
        let mut words = staged(vec![still("far", 79, 0), still("near", 78, 0)]);

        assert_eq!(words.expire_offscreen(80), 1);
        assert_ne!(words.words()[0].value, "far");
        assert!(words.words()[0].position.x < 79);
        assert_eq!(words.words()[1], still("near", 78, 0));
    }

    #[test]
    fn matched_word_past_the_edge_is_replaced_once() {
        let mut words = staged(vec![still("cat", 85, 3), still("dog", 10, 3)]);

        assert_eq!(words.match_and_score("cat"), 1);
        let replacement = words.words()[0].clone();

        words.advance();
        assert_eq!(words.words()[0], replacement);
        assert_eq!(words.expire_offscreen(80), 0);
        assert_eq!(words.words()[0], replacement);
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn fresh_words_move_from_the_next_frame() {
        let mut words = staged(vec![Word::new("cat", Point::new(1, 1), Point::new(1, 0))]);
        words.match_and_score("cat");
        let spawned = words.words()[0].clone();

        words.advance();
        assert_eq!(words.words()[0].position, spawned.position);

        words.advance();
        assert_eq!(
            words.words()[0].position,
            spawned.position + spawned.velocity
        );
    }
}
