use super::char_count::CharCountList;
use rand::prelude::IteratorRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;
use std::fmt;

/// Character-level language model over fixed-length windows.
///
/// The model maps every window (substring of `window_length` characters) seen
/// in the training corpus to the distribution of the character that followed
/// it, and samples from those distributions to generate new text.
///
/// # Responsibilities
/// - Learn window -> next-character counts from a corpus
/// - Keep each window's probability fields ready to sample from
/// - Generate text by sliding a window over the output and sampling
///
/// # Invariants
/// - `window_length` is always >= 1
/// - Every list in `char_data` is non-empty and its `p` values sum to 1.0
///   (double precision tolerance)
/// - Training only ever adds entries or increases counts
///
/// # Concurrency
/// A model belongs to one logical caller at a time; there is no internal
/// synchronization. Embedders that share a model across threads must wrap it
/// themselves (the bundled server uses a `Mutex`).
#[derive(Clone, Debug)]
pub struct LanguageModel {
	/// Number of characters in a lookup window.
	window_length: usize,

	/// Mapping from a window to the characters observed right after it.
	char_data: HashMap<String, CharCountList>,

	/// Model-owned generator; all sampling draws from here.
	rng: StdRng,
}

impl LanguageModel {
	/// Creates an empty model with the given window length.
	///
	/// The random generator is seeded from the operating system, so repeated
	/// runs produce different texts. Good for production.
	///
	/// # Errors
	/// Returns an error if `window_length` is zero.
	pub fn new(window_length: usize) -> Result<Self, String> {
		if window_length == 0 {
			return Err("window length must be >= 1".to_owned());
		}
		Ok(Self {
			window_length,
			char_data: HashMap::new(),
			rng: StdRng::from_os_rng(),
		})
	}

	/// Creates an empty model with the given window length and seed value.
	///
	/// Generating texts from this model multiple times with the same seed
	/// value produces the same random texts. Good for debugging and tests.
	///
	/// # Errors
	/// Returns an error if `window_length` is zero.
	pub fn with_seed(window_length: usize, seed: u64) -> Result<Self, String> {
		if window_length == 0 {
			return Err("window length must be >= 1".to_owned());
		}
		Ok(Self {
			window_length,
			char_data: HashMap::new(),
			rng: StdRng::seed_from_u64(seed),
		})
	}

	/// Learns the window -> next-character counts of `corpus`.
	///
	/// Every start position yields one observation: the window of
	/// `window_length` characters beginning there, and the character right
	/// after it. New characters are appended to their window's list in
	/// first-seen order; repeated ones increment the existing entry.
	///
	/// # Notes
	/// - A corpus with `window_length` characters or fewer holds no window,
	///   so the call is a no-op rather than an error.
	/// - Training is cumulative: a second call adds counts on top of the
	///   existing table.
	/// - The touched window's probabilities are refreshed after every single
	///   position, not once at the end, so every list stays ready to sample
	///   from at any point during training. Training cost is therefore
	///   O(corpus length x average list size).
	/// - UTF-8 safe: windows are made of characters, not bytes.
	pub fn train(&mut self, corpus: &str) {
		let chars: Vec<char> = corpus.chars().collect();
		if chars.len() <= self.window_length {
			// Corpus too short, no window to learn from
			return;
		}

		// For each window position of the corpus
		for i in 0..chars.len() - self.window_length {
			let window: String = chars[i..i + self.window_length].iter().collect();
			let next_char = chars[i + self.window_length];

			// Get or create the list for this window
			let list = self.char_data.entry(window).or_insert_with(CharCountList::new);
			list.add_char(next_char);
			list.calculate_probabilities();
		}
	}

	/// Generates `length` characters, starting from `seed_text`.
	///
	/// Each step takes the trailing `window_length` characters of the text
	/// accumulated so far, looks that window up, and samples the next
	/// character from its distribution (inverse-CDF over the model's own
	/// generator).
	///
	/// # Notes
	/// - If `seed_text` is shorter than the window length there is no
	///   context to start from: the seed text comes back unchanged. This is
	///   intentional, not an error.
	/// - If the current window was never seen in training, generation stops
	///   early and the text produced so far is returned.
	/// - Generation never mutates the table, only the generator state.
	pub fn generate(&mut self, seed_text: &str, length: usize) -> String {
		let mut text: Vec<char> = seed_text.chars().collect();
		if text.len() < self.window_length {
			return seed_text.to_owned();
		}

		for _ in 0..length {
			let window: String = text[text.len() - self.window_length..].iter().collect();
			let list = match self.char_data.get(&window) {
				Some(list) => list,
				// Unseen window, stop with what we have
				None => break,
			};

			let u: f64 = self.rng.random();
			match list.pick(u) {
				Some(c) => text.push(c),
				None => break,
			}
		}

		text.into_iter().collect()
	}

	/// Returns a random window known to the model.
	///
	/// Useful for starting a generation sequence. Returns `None` if the
	/// model was not trained yet.
	pub fn random_window(&mut self) -> Option<String> {
		self.char_data.keys().choose(&mut self.rng).cloned()
	}

	/// The configured window length.
	pub fn window_length(&self) -> usize {
		self.window_length
	}

	/// Number of distinct windows learned so far.
	pub fn window_count(&self) -> usize {
		self.char_data.len()
	}

	/// True once at least one window was learned.
	pub fn is_trained(&self) -> bool {
		!self.char_data.is_empty()
	}
}

/// Debug representation: one `window : entries` line per window.
///
/// Inspection aid for experiments and tests, not a stable format. Windows
/// come out in map order, which is unspecified.
impl fmt::Display for LanguageModel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (window, list) in &self.char_data {
			writeln!(f, "{} : {}", window, list)?;
		}
		Ok(())
	}
}
