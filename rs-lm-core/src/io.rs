use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::{fs, io};

/// Reads a corpus file in full and returns it as a single `String`.
///
/// The model trains over one in-memory string; no streaming. Corpora are
/// expected to be small enough for that.
pub fn read_corpus<P: AsRef<Path>>(filename: P) -> io::Result<String> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents)
}

/// Lists all files with a given extension in a directory.
///
/// Returns file names only (no paths). Subdirectories are ignored.
pub fn list_files<P: AsRef<Path>>(dir: P, extension: &str) -> io::Result<Vec<String>> {
	let mut files = Vec::new();

	for entry in fs::read_dir(dir)? {
		let entry = entry?;
		let path = entry.path();

		if path.is_file() {
			if path.extension() == Some(std::ffi::OsStr::new(extension)) {
				if let Some(name) = path.file_name() {
					files.push(name.to_string_lossy().to_string());
				}
			}
		}
	}

	Ok(files)
}
