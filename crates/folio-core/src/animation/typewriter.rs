use std::time::Duration;

/// Cycles through words, typing each one out and holding it before the next
#[derive(Debug, Clone)]
pub struct Typewriter {
    words: Vec<String>,
    type_duration: Duration,
    pause: Duration,
}

impl Typewriter {
    /// Separator used by the hero expertise field
    pub const SEPARATOR: &'static str = " | ";

    pub fn new(words: Vec<String>, type_duration: Duration, pause: Duration) -> Self {
        let words = words
            .into_iter()
            .map(|w| w.trim().to_string())
            .filter(|w| !w.is_empty())
            .collect();
        Self {
            words,
            type_duration,
            pause,
        }
    }

    /// Build from a `" | "`-separated list with 1s typing and 1s pause per word
    pub fn from_expertise(expertise: &str) -> Self {
        let words = expertise
            .split(Self::SEPARATOR)
            .map(str::to_string)
            .collect();
        Self::new(words, Duration::from_secs(1), Duration::from_secs(1))
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    fn slot(&self) -> Duration {
        self.type_duration + self.pause
    }

    /// Index of the word being shown after `elapsed`
    pub fn word_index(&self, elapsed: Duration) -> Option<usize> {
        if self.words.is_empty() {
            return None;
        }
        let slot = self.slot();
        if slot.is_zero() {
            return Some(0);
        }
        let slot_ns = slot.as_nanos();
        let cycle_ns = slot_ns * self.words.len() as u128;
        let into_cycle = elapsed.as_nanos() % cycle_ns;
        Some((into_cycle / slot_ns) as usize)
    }

    /// Visible text after `elapsed`
    pub fn text_at(&self, elapsed: Duration) -> &str {
        let Some(index) = self.word_index(elapsed) else {
            return "";
        };
        let word = &self.words[index];
        let slot_ns = self.slot().as_nanos();
        if slot_ns == 0 || self.type_duration.is_zero() {
            return word;
        }

        let into_slot = elapsed.as_nanos() % slot_ns;
        let type_ns = self.type_duration.as_nanos();
        if into_slot >= type_ns {
            return word;
        }

        let total_chars = word.chars().count() as u128;
        let shown = (total_chars * into_slot / type_ns) as usize;
        match word.char_indices().nth(shown) {
            Some((byte_idx, _)) => &word[..byte_idx],
            None => word,
        }
    }
}
