//! Character-level window language model library.
//!
//! This crate provides an elementary stochastic text generator:
//! - A trainer that learns, from a corpus, which character follows each
//!   fixed-length window of preceding characters
//! - Per-window probability and cumulative-probability bookkeeping
//! - Inverse-CDF sampling over a model-owned random generator, seeded for
//!   reproducible runs or OS-seeded otherwise
//!
//! Only the high-level API is exposed publicly. Low-level components
//! are kept internal to ensure consistency and prevent misuse.

/// Core language model and generation logic.
///
/// This module exposes the model interface while keeping the per-window
/// frequency representation private.
pub mod model;

/// I/O utilities (corpus loading, data folder listing).
///
/// The model itself never touches the filesystem; these helpers are for the
/// binaries around it.
pub mod io;
