//! Top-level module for the window language model.
//!
//! This module provides a character-level language model, including:
//! - The trained model itself (`LanguageModel`): window -> next-character
//!   distributions plus an owned random generator
//! - Internal per-window bookkeeping (`CharCount`, `CharCountList`):
//!   counts, probabilities and cumulative probabilities in first-seen order

/// The character-level language model.
///
/// Exposes construction (seeded or not), corpus training, text generation
/// and a line-per-window debug representation.
pub mod language_model;

/// Internal representation of one window's follower statistics.
///
/// Tracks per-character counts with their probability fields and resolves
/// uniform draws to characters. This module is not exposed publicly.
mod char_count;
