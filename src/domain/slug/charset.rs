// src/domain/slug/charset.rs
//! Character tables used by the slug pipeline: digit folding, per-language
//! allow-lists and the Persian/Arabic transliteration table.

use super::config::Language;

pub const ZERO_WIDTH_NON_JOINER: char = '\u{200C}';
pub const TATWEEL: char = '\u{0640}';

/// Invisible format characters (Unicode `Cf`) that can show up in copied
/// Persian and Arabic text: Arabic number signs and letter mark, zero-width
/// and bidi controls, word joiners, the soft hyphen and the BOM.
const INVISIBLE_FORMAT: &[(char, char)] = &[
    ('\u{00AD}', '\u{00AD}'),
    ('\u{0600}', '\u{0605}'),
    ('\u{061C}', '\u{061C}'),
    ('\u{06DD}', '\u{06DD}'),
    ('\u{070F}', '\u{070F}'),
    ('\u{08E2}', '\u{08E2}'),
    ('\u{180E}', '\u{180E}'),
    ('\u{200B}', '\u{200F}'),
    ('\u{202A}', '\u{202E}'),
    ('\u{2060}', '\u{2064}'),
    ('\u{2066}', '\u{206F}'),
    ('\u{FEFF}', '\u{FEFF}'),
    ('\u{FFF9}', '\u{FFFB}'),
];

/// Whether `ch` renders as nothing and must never reach a slug.
pub fn is_invisible_format(ch: char) -> bool {
    INVISIBLE_FORMAT
        .iter()
        .any(|(start, end)| (*start..=*end).contains(&ch))
}

/// Digit blocks folded to ASCII. Each entry is the code point of that
/// block's zero.
const NUMERAL_ZEROS: [char; 3] = [
    '\u{06F0}', // Extended Arabic-Indic (Persian)
    '\u{0660}', // Arabic-Indic
    '\u{0966}', // Devanagari
];

/// Maps a non-ASCII digit to its ASCII counterpart.
pub fn fold_numeral(ch: char) -> Option<char> {
    let code = u32::from(ch);
    NUMERAL_ZEROS.iter().find_map(|zero| {
        let offset = code.checked_sub(u32::from(*zero))?;
        if offset < 10 {
            char::from_digit(offset, 10)
        } else {
            None
        }
    })
}

/// Unicode ranges a language keeps during allow-list filtering, on top of
/// ASCII alphanumerics and the separator.
#[derive(Debug, Clone, Copy)]
pub struct CharacterClassPattern {
    ranges: &'static [(char, char)],
}

const ARABIC_SCRIPT: &[(char, char)] = &[
    ('\u{0600}', '\u{06FF}'), // Arabic
    ('\u{0750}', '\u{077F}'), // Arabic Supplement
    ('\u{FB50}', '\u{FDFF}'), // Arabic Presentation Forms-A
    ('\u{FE70}', '\u{FEFC}'), // Arabic Presentation Forms-B
];

impl CharacterClassPattern {
    pub const fn for_language(language: Language) -> Self {
        match language {
            Language::Fa | Language::Ar => Self {
                ranges: ARABIC_SCRIPT,
            },
            Language::En => Self { ranges: &[] },
        }
    }

    pub fn contains(&self, ch: char) -> bool {
        !is_invisible_format(ch)
            && self
                .ranges
                .iter()
                .any(|(start, end)| (*start..=*end).contains(&ch))
    }

    /// Whether `ch` survives filtering for this pattern.
    pub fn allows(&self, ch: char, separator: char) -> bool {
        ch.is_ascii_alphanumeric() || ch == separator || self.contains(ch)
    }
}

/// Latin rendering of Persian and Arabic letters.
pub fn transliterate_letter(ch: char) -> Option<&'static str> {
    let latin = match ch {
        'ا' | 'أ' | 'آ' | 'ع' => "a",
        'إ' => "e",
        'ب' => "b",
        'پ' => "p",
        'ت' | 'ط' => "t",
        'ث' => "th",
        'ج' => "j",
        'چ' => "ch",
        'ح' | 'ه' | 'ة' => "h",
        'خ' => "kh",
        'د' => "d",
        'ذ' => "dh",
        'ر' => "r",
        'ز' | 'ض' | 'ظ' => "z",
        'ژ' => "zh",
        'س' | 'ص' => "s",
        'ش' => "sh",
        'غ' | 'ق' => "gh",
        'ف' => "f",
        'ک' | 'ك' => "k",
        'گ' => "g",
        'ل' => "l",
        'م' => "m",
        'ن' => "n",
        'و' | 'ؤ' => "v",
        'ی' | 'ي' | 'ئ' | 'ى' => "y",
        _ => return None,
    };
    Some(latin)
}
