//! Upload categories and their allowed extension sets.

/// Extensions recognized for each category, lowercase, with the leading dot.
pub const IMAGE_EXTENSIONS: &[&str] =
	&[".jpg", ".jpeg", ".png", ".gif", ".bmp", ".webp", ".tiff", ".svg"];
pub const VIDEO_EXTENSIONS: &[&str] =
	&[".mp4", ".avi", ".mov", ".wmv", ".flv", ".webm", ".mkv", ".m4v"];
pub const AUDIO_EXTENSIONS: &[&str] = &[".mp3", ".wav", ".flac", ".aac", ".ogg", ".wma", ".m4a"];
pub const DOC_EXTENSIONS: &[&str] =
	&[".pdf", ".doc", ".docx", ".txt", ".rtf", ".odt", ".xls", ".xlsx", ".ppt", ".pptx"];

/// Upload category - determines the allowed extension set, and for images
/// whether recompression may apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
	Image,
	Video,
	Audio,
	Document,
	/// Union of all other categories
	Any,
}

impl Category {
	/// Get the short string representation (e.g., "image", "doc")
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Image => "image",
			Self::Video => "video",
			Self::Audio => "audio",
			Self::Document => "doc",
			Self::Any => "any",
		}
	}

	/// Parse from short string representation
	pub fn from_str_opt(s: &str) -> Option<Self> {
		match s {
			"image" => Some(Self::Image),
			"video" => Some(Self::Video),
			"audio" => Some(Self::Audio),
			"doc" => Some(Self::Document),
			"any" => Some(Self::Any),
			_ => None,
		}
	}

	fn extension_sets(&self) -> &'static [&'static [&'static str]] {
		match self {
			Self::Image => &[IMAGE_EXTENSIONS],
			Self::Video => &[VIDEO_EXTENSIONS],
			Self::Audio => &[AUDIO_EXTENSIONS],
			Self::Document => &[DOC_EXTENSIONS],
			Self::Any => &[IMAGE_EXTENSIONS, VIDEO_EXTENSIONS, AUDIO_EXTENSIONS, DOC_EXTENSIONS],
		}
	}

	/// Checks whether a filename carries an extension allowed in this category.
	/// Files without an extension are never allowed.
	pub fn allows(&self, file_name: &str) -> bool {
		let Some(ext) = extension_of(file_name) else { return false };
		self.extension_sets().iter().any(|set| set.contains(&ext.as_str()))
	}
}

impl std::fmt::Display for Category {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.as_str())
	}
}

impl std::str::FromStr for Category {
	type Err = ();

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::from_str_opt(s).ok_or(())
	}
}

/// Extracts the lowercased extension (with leading dot) of the last path
/// component. Dotfiles ("`.gitignore`") carry no extension.
pub(crate) fn extension_of(file_name: &str) -> Option<String> {
	let base = file_name.rsplit(['/', '\\']).next().unwrap_or(file_name);
	let idx = base.rfind('.')?;
	if idx == 0 {
		return None;
	}
	Some(base[idx..].to_ascii_lowercase())
}


// vim: ts=4
