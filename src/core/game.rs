//! Round state and the controller that mutates it
//!
//! `Game` owns the only mutable state: the root word, the accepted words
//! (most recent first) and the score. Only an accepted submission changes it,
//! apart from starting a new round or restarting.

use super::dictionary::Dictionary;
use super::validator::{ValidationResult, Validator};
use super::word::normalize;
use crate::error::{GameError, Result};
use crate::wordlists::StartWords;
use rand::rngs::StdRng;
use tracing::debug;

/// Snapshot of a round in progress
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    root_word: String,
    used_words: Vec<String>,
    score: u32,
}

impl GameState {
    fn new(root_word: String) -> Self {
        Self {
            root_word,
            used_words: Vec::new(),
            score: 0,
        }
    }

    #[must_use]
    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    /// Accepted words, most recent first
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }
}

/// Game controller: validates submissions and applies the results
#[derive(Debug)]
pub struct Game<D> {
    validator: Validator<D>,
    start_words: StartWords,
    rng: StdRng,
    state: GameState,
}

impl<D: Dictionary> Game<D> {
    /// Create a game and start the first round on a randomly picked root word
    pub fn new(validator: Validator<D>, start_words: StartWords, mut rng: StdRng) -> Self {
        let root_word = normalize(start_words.pick(&mut rng));
        debug!(%root_word, "starting first round");

        Self {
            validator,
            start_words,
            rng,
            state: GameState::new(root_word),
        }
    }

    /// Create a game whose first round uses `root_word`
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyRootWord` if `root_word` is blank.
    pub fn with_root(
        validator: Validator<D>,
        start_words: StartWords,
        rng: StdRng,
        root_word: &str,
    ) -> Result<Self> {
        let root_word = checked_root(root_word)?;
        debug!(%root_word, "starting first round");

        Ok(Self {
            validator,
            start_words,
            rng,
            state: GameState::new(root_word),
        })
    }

    /// Start a round on `root_word`, keeping the score
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyRootWord` if `root_word` is blank; the current
    /// round is left untouched.
    pub fn start_round(&mut self, root_word: &str) -> Result<()> {
        let root_word = checked_root(root_word)?;
        self.begin_round(root_word);
        Ok(())
    }

    /// Start a round on a randomly picked root word, keeping the score
    pub fn new_round(&mut self) -> &str {
        let root_word = self.pick_root();
        self.begin_round(root_word);
        &self.state.root_word
    }

    /// Start over on a randomly picked root word with the score back at zero
    pub fn restart(&mut self) -> &str {
        let root_word = self.pick_root();
        self.begin_round(root_word);
        self.state.score = 0;
        &self.state.root_word
    }

    /// Start over on `root_word` with the score back at zero
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyRootWord` if `root_word` is blank; the current
    /// round and score are left untouched.
    pub fn restart_with(&mut self, root_word: &str) -> Result<()> {
        let root_word = checked_root(root_word)?;
        self.begin_round(root_word);
        self.state.score = 0;
        Ok(())
    }

    /// Submit a raw word
    ///
    /// Blank input returns `None` and changes nothing. An accepted word goes to
    /// the front of the used words and adds its letters to the score; a
    /// rejection leaves the state as it was.
    pub fn submit(&mut self, raw: &str) -> Option<ValidationResult> {
        if normalize(raw).is_empty() {
            return None;
        }

        let result = self
            .validator
            .validate(raw, &self.state.root_word, &self.state.used_words);

        match &result {
            ValidationResult::Accepted { word, score_delta } => {
                self.state.used_words.insert(0, word.clone());
                self.state.score = self.state.score.saturating_add(*score_delta);
                debug!(%word, score_delta, score = self.state.score, "word accepted");
            }
            ValidationResult::Rejected(reason) => {
                debug!(input = raw, %reason, "word rejected");
            }
        }

        Some(result)
    }

    #[must_use]
    pub fn root_word(&self) -> &str {
        self.state.root_word()
    }

    #[must_use]
    pub fn used_words(&self) -> &[String] {
        self.state.used_words()
    }

    #[must_use]
    pub const fn score(&self) -> u32 {
        self.state.score()
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub const fn validator(&self) -> &Validator<D> {
        &self.validator
    }

    fn pick_root(&mut self) -> String {
        normalize(self.start_words.pick(&mut self.rng))
    }

    fn begin_round(&mut self, root_word: String) {
        debug!(%root_word, score = self.state.score, "starting round");
        self.state.root_word = root_word;
        self.state.used_words.clear();
    }
}

fn checked_root(root_word: &str) -> Result<String> {
    let root_word = normalize(root_word);
    if root_word.is_empty() {
        return Err(GameError::EmptyRootWord);
    }
    Ok(root_word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Rejection, WordListDictionary};
    use rand::SeedableRng;

    fn dictionary() -> WordListDictionary {
        WordListDictionary::new(
            ["silk", "worm", "milk", "silo", "owl", "tree", "sand", "wand"],
            "en",
        )
    }

    fn start_words() -> StartWords {
        StartWords::new(vec!["silkworm".to_string(), "sandwich".to_string()])
    }

    fn game_on(root_word: &str) -> Game<WordListDictionary> {
        Game::with_root(
            Validator::new(dictionary(), "en"),
            start_words(),
            StdRng::seed_from_u64(3),
            root_word,
        )
        .unwrap()
    }

    fn accepted(word: &str) -> Option<ValidationResult> {
        Some(ValidationResult::Accepted {
            word: word.to_string(),
            score_delta: u32::try_from(word.len()).unwrap(),
        })
    }

    #[test]
    fn new_game_picks_from_start_words() {
        let game = Game::new(
            Validator::new(dictionary(), "en"),
            start_words(),
            StdRng::seed_from_u64(11),
        );

        assert!(["silkworm", "sandwich"].contains(&game.root_word()));
        assert!(game.used_words().is_empty());
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn new_game_with_empty_list_uses_default_root() {
        let game = Game::new(
            Validator::new(dictionary(), "en"),
            StartWords::default(),
            StdRng::seed_from_u64(11),
        );
        assert_eq!(game.root_word(), crate::wordlists::DEFAULT_ROOT_WORD);
    }

    #[test]
    fn with_root_rejects_blank_root() {
        let result = Game::with_root(
            Validator::new(dictionary(), "en"),
            start_words(),
            StdRng::seed_from_u64(3),
            "   ",
        );
        assert!(matches!(result, Err(GameError::EmptyRootWord)));
    }

    #[test]
    fn submit_accepts_and_scores() {
        let mut game = game_on("silkworm");

        assert_eq!(game.submit("silk"), accepted("silk"));
        assert_eq!(game.used_words(), &["silk"]);
        assert_eq!(game.score(), 4);
    }

    #[test]
    fn accepted_words_are_most_recent_first() {
        let mut game = game_on("silkworm");

        game.submit("silk");
        game.submit("worm");
        game.submit("owl");

        assert_eq!(game.used_words(), &["owl", "worm", "silk"]);
        assert_eq!(game.score(), 11);
    }

    #[test]
    fn submit_twice_is_already_used() {
        let mut game = game_on("silkworm");

        game.submit("silk");
        assert_eq!(
            game.submit("SILK"),
            Some(ValidationResult::Rejected(Rejection::AlreadyUsed))
        );
        assert_eq!(game.used_words(), &["silk"]);
        assert_eq!(game.score(), 4);
    }

    #[test]
    fn blank_submission_is_ignored() {
        let mut game = game_on("silkworm");
        game.submit("silk");
        let before = game.state().clone();

        assert_eq!(game.submit(""), None);
        assert_eq!(game.submit("   "), None);
        assert_eq!(game.submit("\n\t"), None);
        assert_eq!(game.state(), &before);
    }

    #[test]
    fn rejection_leaves_state_unchanged() {
        let mut game = game_on("silkworm");
        game.submit("milk");
        let before = game.state().clone();

        assert_eq!(
            game.submit("ok"),
            Some(ValidationResult::Rejected(Rejection::TooShort))
        );
        assert_eq!(
            game.submit("tree"),
            Some(ValidationResult::Rejected(Rejection::NotConstructible))
        );
        assert_eq!(
            game.submit("mirk"),
            Some(ValidationResult::Rejected(Rejection::NotAWord))
        );
        assert_eq!(game.state(), &before);
    }

    #[test]
    fn start_round_clears_words_and_keeps_score() {
        let mut game = game_on("silkworm");
        game.submit("silk");
        game.submit("worm");

        game.start_round("sandwich").unwrap();

        assert_eq!(game.root_word(), "sandwich");
        assert!(game.used_words().is_empty());
        assert_eq!(game.score(), 8);
    }

    #[test]
    fn start_round_normalizes_root() {
        let mut game = game_on("silkworm");
        game.start_round("  SandWich ").unwrap();
        assert_eq!(game.root_word(), "sandwich");
    }

    #[test]
    fn start_round_rejects_blank_root() {
        let mut game = game_on("silkworm");
        game.submit("silk");

        assert!(matches!(
            game.start_round(""),
            Err(GameError::EmptyRootWord)
        ));
        assert_eq!(game.root_word(), "silkworm");
        assert_eq!(game.used_words(), &["silk"]);
    }

    #[test]
    fn new_round_keeps_score() {
        let mut game = game_on("silkworm");
        game.submit("silk");

        let root = game.new_round().to_string();

        assert!(root == "silkworm" || root == "sandwich");
        assert_eq!(game.root_word(), root);
        assert!(game.used_words().is_empty());
        assert_eq!(game.score(), 4);
    }

    #[test]
    fn new_round_allows_reusing_words() {
        let mut game = game_on("silkworm");
        game.submit("silk");
        game.start_round("silkworm").unwrap();

        assert_eq!(game.submit("silk"), accepted("silk"));
        assert_eq!(game.score(), 8);
    }

    #[test]
    fn restart_resets_score_and_words() {
        let mut game = game_on("silkworm");
        game.submit("silk");
        game.submit("worm");

        game.restart();

        assert!(game.used_words().is_empty());
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn restart_with_uses_given_root() {
        let mut game = game_on("silkworm");
        game.submit("silk");

        game.restart_with("sandwich").unwrap();

        assert_eq!(game.root_word(), "sandwich");
        assert!(game.used_words().is_empty());
        assert_eq!(game.score(), 0);
        assert_eq!(game.submit("wand"), accepted("wand"));
    }

    #[test]
    fn restart_with_blank_root_keeps_state() {
        let mut game = game_on("silkworm");
        game.submit("silk");
        let before = game.state().clone();

        assert!(game.restart_with(" ").is_err());
        assert_eq!(game.state(), &before);
    }

    #[test]
    fn multiplicity_is_enforced_against_root() {
        let mut game = Game::with_root(
            Validator::new(WordListDictionary::new(["eee", "tee"], "en"), "en"),
            start_words(),
            StdRng::seed_from_u64(3),
            "tree",
        )
        .unwrap();

        assert_eq!(
            game.submit("eee"),
            Some(ValidationResult::Rejected(Rejection::NotConstructible))
        );
        assert_eq!(game.submit("tee"), accepted("tee"));
    }
}
