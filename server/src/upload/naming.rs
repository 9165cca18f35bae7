//! Collision-resistant filename generation.

use chrono::Local;
use rand::RngExt;
use uuid::Uuid;

use crate::upload::category::extension_of;

pub const SUFFIX_LENGTH: usize = 8;
pub const SAFE: [char; 36] = [
	'0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
	'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm',
	'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Generates a unique filename of the form
/// `<timestamp>_<8-char-random>_<8-hex-uuid-fragment><ext>`.
///
/// The extension is taken from `ext` when given, otherwise inferred from
/// `original`. Uniqueness is probabilistic: two calls within the same second
/// collide only if both random components collide as well. There is no
/// retry-on-collision; the odds are treated as negligible.
pub fn unique_filename(original: &str, ext: Option<&str>) -> String {
	let extension = match ext {
		Some(ext) => ext.to_ascii_lowercase(),
		None => extension_of(original).unwrap_or_default(),
	};

	let timestamp = Local::now().format("%Y%m%d_%H%M%S");
	let mut rng = rand::rng();
	let mut random_string = String::with_capacity(SUFFIX_LENGTH);
	for _ in 0..SUFFIX_LENGTH {
		random_string.push(SAFE[rng.random_range(0..SAFE.len())]);
	}
	let unique_id = Uuid::new_v4().simple().to_string();

	format!("{}_{}_{}{}", timestamp, random_string, &unique_id[..8], extension)
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashSet;

	#[test]
	fn test_shape() {
		let name = unique_filename("photo.JPG", None);
		assert!(name.ends_with(".jpg"));
		let stem = name.trim_end_matches(".jpg");
		let parts: Vec<&str> = stem.split('_').collect();
		// %Y%m%d, %H%M%S, random suffix, uuid fragment
		assert_eq!(parts.len(), 4);
		assert_eq!(parts[2].len(), SUFFIX_LENGTH);
		assert_eq!(parts[3].len(), 8);
	}

	#[test]
	fn test_extension_override() {
		let name = unique_filename("photo.jpg", Some(".WEBP"));
		assert!(name.ends_with(".webp"));
	}

	#[test]
	fn test_no_extension() {
		let name = unique_filename("README", None);
		assert!(!name.contains('.'));
	}

	#[test]
	fn test_distinct_over_many_calls() {
		let mut seen = HashSet::new();
		for _ in 0..10_000 {
			assert!(seen.insert(unique_filename("sample.png", None)));
		}
	}
}

// vim: ts=4
