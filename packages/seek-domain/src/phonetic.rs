use pinyin::ToPinyin;
use unicode_script::{Script, UnicodeScript};

/// Alias keys precomputed for a display name.
///
/// Han names get full pinyin and pinyin initials, so `xiazai` and `xz` both find `下载`.
/// Latin names made of two or more words get their acronym as initials, so `vsc` finds
/// `Visual Studio Code`. Single-word Latin names get nothing; plain substring matching
/// already covers them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhoneticKeys {
	pub full: Option<String>,
	pub initials: Option<String>,
}
impl PhoneticKeys {
	pub fn of(name: &str) -> Self {
		if contains_han(name) {
			return Self::from_han(name);
		}

		let initials: String = name
			.split(|ch: char| ch.is_whitespace() || matches!(ch, '-' | '_' | '.'))
			.filter_map(|word| word.chars().find(|ch| ch.is_alphanumeric()))
			.flat_map(char::to_lowercase)
			.collect();

		if initials.chars().count() < 2 {
			return Self::default();
		}

		Self { full: None, initials: Some(initials) }
	}

	fn from_han(name: &str) -> Self {
		let mut full = String::new();
		let mut initials = String::new();

		for (ch, reading) in name.chars().zip(name.to_pinyin()) {
			match reading {
				Some(reading) => {
					full.push_str(reading.plain());
					initials.push_str(reading.first_letter());
				},
				None if ch.is_ascii_alphanumeric() => {
					full.push(ch.to_ascii_lowercase());
					initials.push(ch.to_ascii_lowercase());
				},
				None => {},
			}
		}

		Self {
			full: (!full.is_empty()).then_some(full),
			initials: (!initials.is_empty()).then_some(initials),
		}
	}
}

pub fn contains_han(input: &str) -> bool {
	input.chars().any(|ch| ch.script() == Script::Han)
}
