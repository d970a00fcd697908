use std::fmt;

/// One next-character record attached to a window.
///
/// `p` and `cp` are only meaningful after the owning list ran
/// `calculate_probabilities`; freshly inserted entries carry zeros there.
#[derive(Clone, Debug)]
pub struct CharCount {
	/// The observed character.
	pub chr: char,
	/// How many times this character was observed after the window.
	pub count: usize,
	/// Probability of this character: `count / total count of the list`.
	pub p: f64,
	/// Running sum of `p` up to and including this entry, in list order.
	pub cp: f64,
}

impl fmt::Display for CharCount {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "({} {} {} {})", self.chr, self.count, self.p, self.cp)
	}
}

/// Ordered record of the characters observed right after one window.
///
/// Holds one [`CharCount`] entry per distinct character seen after the
/// window this list is attached to. Entries stay in first-seen order; that
/// order is fixed at first insertion and determines both the accumulation
/// of the cumulative probabilities and the scan order while sampling.
///
/// ## Responsibilities
/// - Accumulate occurrence counts during training
/// - Recompute the probability fields after a count changed
/// - Resolve a uniform draw to a character (inverse-CDF lookup)
///
/// ## Invariants
/// - Each character appears in at most one entry
/// - Every count is >= 1
/// - After `calculate_probabilities`, `p` sums to 1.0 and `cp` is
///   non-decreasing with the last entry at ~1.0 (double precision, so the
///   last `cp` may sit a hair under 1.0)
#[derive(Clone, Debug)]
pub struct CharCountList {
	entries: Vec<CharCount>,
}

impl CharCountList {
	/// Creates an empty list.
	pub fn new() -> Self {
		Self { entries: Vec::new() }
	}

	/// Records an occurrence of `chr`.
	///
	/// - If `chr` already has an entry, its count is increased.
	/// - Otherwise a new entry with count 1 is appended, so the list keeps
	///   first-seen order.
	///
	/// Lookup is a linear scan; the alphabet following a single window is
	/// small in practice.
	pub fn add_char(&mut self, chr: char) {
		for entry in &mut self.entries {
			if entry.chr == chr {
				entry.count += 1;
				return;
			}
		}
		self.entries.push(CharCount { chr, count: 1, p: 0.0, cp: 0.0 });
	}

	/// Recomputes `p` and `cp` for every entry, in place.
	///
	/// Walks the list in its stored order: `p = count / total`, `cp` is the
	/// running sum of `p`. No sorting happens here. The sums are plain f64
	/// accumulation, so the final `cp` can land slightly off 1.0.
	pub fn calculate_probabilities(&mut self) {
		let total = self.total_count() as f64;

		let mut running = 0.0;
		for entry in &mut self.entries {
			entry.p = entry.count as f64 / total;
			running += entry.p;
			entry.cp = running;
		}
	}

	/// Resolves a uniform draw `u` in [0, 1) to a character.
	///
	/// Scans the list in order and returns the first entry whose `cp`
	/// reaches `u`. If rounding left every `cp` below `u`, the last entry is
	/// returned, so a non-empty list always yields a character.
	///
	/// Returns `None` only for an empty list.
	pub fn pick(&self, u: f64) -> Option<char> {
		if self.is_empty() {
			return None;
		}

		for entry in &self.entries {
			if entry.cp >= u {
				return Some(entry.chr);
			}
		}

		// The final cp can round below u; the last entry takes the rest
		self.entries.last().map(|entry| entry.chr)
	}

	/// Sum of all counts in the list.
	pub fn total_count(&self) -> usize {
		self.entries.iter().map(|entry| entry.count).sum()
	}

	/// The entries in their stored (first-seen) order.
	pub fn entries(&self) -> &[CharCount] {
		&self.entries
	}

	/// Number of distinct characters recorded.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// True if nothing was recorded yet.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl fmt::Display for CharCountList {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (i, entry) in self.entries.iter().enumerate() {
			if i > 0 {
				write!(f, " ")?;
			}
			write!(f, "{}", entry)?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_abs_diff_eq;

	#[test]
	fn add_char_appends_in_first_seen_order() {
		let mut list = CharCountList::new();
		list.add_char('b');
		list.add_char('a');
		list.add_char('c');

		let order: Vec<char> = list.entries().iter().map(|e| e.chr).collect();
		assert_eq!(order, vec!['b', 'a', 'c']);
	}

	#[test]
	fn add_char_increments_instead_of_duplicating() {
		let mut list = CharCountList::new();
		list.add_char('x');
		list.add_char('y');
		list.add_char('x');
		list.add_char('x');

		assert_eq!(list.len(), 2);
		assert_eq!(list.entries()[0].chr, 'x');
		assert_eq!(list.entries()[0].count, 3);
		assert_eq!(list.entries()[1].chr, 'y');
		assert_eq!(list.entries()[1].count, 1);
		assert_eq!(list.total_count(), 4);
	}

	#[test]
	fn probabilities_follow_counts_and_accumulate() {
		let mut list = CharCountList::new();
		for _ in 0..3 {
			list.add_char('a');
		}
		list.add_char('b');
		list.calculate_probabilities();

		assert_abs_diff_eq!(list.entries()[0].p, 0.75, epsilon = 1e-9);
		assert_abs_diff_eq!(list.entries()[0].cp, 0.75, epsilon = 1e-9);
		assert_abs_diff_eq!(list.entries()[1].p, 0.25, epsilon = 1e-9);
		assert_abs_diff_eq!(list.entries()[1].cp, 1.0, epsilon = 1e-9);

		let sum: f64 = list.entries().iter().map(|e| e.p).sum();
		assert_abs_diff_eq!(sum, 1.0, epsilon = 1e-9);
	}

	#[test]
	fn recomputation_tracks_new_counts() {
		let mut list = CharCountList::new();
		list.add_char('a');
		list.calculate_probabilities();
		assert_abs_diff_eq!(list.entries()[0].p, 1.0, epsilon = 1e-9);

		list.add_char('b');
		list.calculate_probabilities();
		assert_abs_diff_eq!(list.entries()[0].p, 0.5, epsilon = 1e-9);
		assert_abs_diff_eq!(list.entries()[1].cp, 1.0, epsilon = 1e-9);
	}

	#[test]
	fn pick_returns_first_entry_reaching_u() {
		let mut list = CharCountList::new();
		for _ in 0..3 {
			list.add_char('a');
		}
		list.add_char('b');
		list.calculate_probabilities();

		// cp layout: a -> 0.75, b -> 1.0
		assert_eq!(list.pick(0.0), Some('a'));
		assert_eq!(list.pick(0.5), Some('a'));
		assert_eq!(list.pick(0.75), Some('a'));
		assert_eq!(list.pick(0.750001), Some('b'));
		assert_eq!(list.pick(0.999999), Some('b'));
	}

	#[test]
	fn pick_falls_back_to_last_entry_when_cp_never_reaches_u() {
		// Probabilities never computed, every cp is still 0.0
		let mut list = CharCountList::new();
		list.add_char('a');
		list.add_char('z');

		assert_eq!(list.pick(0.5), Some('z'));
	}

	#[test]
	fn pick_on_empty_list_yields_nothing() {
		let list = CharCountList::new();
		assert_eq!(list.pick(0.3), None);
	}

	#[test]
	fn display_shows_entries_in_order() {
		let mut list = CharCountList::new();
		list.add_char('a');
		list.add_char('a');
		list.add_char('b');
		list.calculate_probabilities();

		// f64 Display keeps values short: 0.5 -> "0.5", 1.0 -> "1"
		assert_eq!(list.to_string(), "(a 2 0.6666666666666666 0.6666666666666666) (b 1 0.3333333333333333 1)");
	}
}
