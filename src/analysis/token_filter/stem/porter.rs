//! The Porter stemmer, used by both built-in languages.
//!
//! Words are rewritten by five ordered rule groups. Within a group only the
//! longest matching suffix is considered; if its condition on the remaining
//! stem fails the group leaves the word alone.
//!
//! Words that are not pure ASCII are lowercased and returned as they are.
//!
//! ```
//! use textbayes::analysis::token_filter::stem::Stemmer;
//! use textbayes::analysis::token_filter::stem::porter::PorterStemmer;
//!
//! let stemmer = PorterStemmer::new();
//!
//! assert_eq!(stemmer.stem("Offers"), "offer");
//! assert_eq!(stemmer.stem("happy"), "happi");
//! assert_eq!(stemmer.stem("conditional"), "condit");
//! assert_eq!(stemmer.stem("naïve"), "naïve");
//! ```

use crate::analysis::token_filter::stem::Stemmer;

// Overlapping suffixes are listed longest first.
const DERIVATIONAL: &[(&str, &str)] = &[
    ("ational", "ate"),
    ("tional", "tion"),
    ("enci", "ence"),
    ("anci", "ance"),
    ("izer", "ize"),
    ("abli", "able"),
    ("alli", "al"),
    ("entli", "ent"),
    ("eli", "e"),
    ("ousli", "ous"),
    ("ization", "ize"),
    ("ation", "ate"),
    ("ator", "ate"),
    ("alism", "al"),
    ("iveness", "ive"),
    ("fulness", "ful"),
    ("ousness", "ous"),
    ("aliti", "al"),
    ("iviti", "ive"),
    ("biliti", "ble"),
];

const ADJECTIVAL: &[(&str, &str)] = &[
    ("icate", "ic"),
    ("ative", ""),
    ("alize", "al"),
    ("iciti", "ic"),
    ("ical", "ic"),
    ("ful", ""),
    ("ness", ""),
];

const RESIDUAL: &[&str] = &[
    "al", "ance", "ence", "er", "ic", "able", "ible", "ant", "ement", "ment", "ent", "ion", "ou",
    "ism", "ate", "iti", "ous", "ive", "ize",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct PorterStemmer;

impl PorterStemmer {
    pub fn new() -> Self {
        PorterStemmer
    }
}

impl Stemmer for PorterStemmer {
    fn stem(&self, word: &str) -> String {
        let mut word = word.to_lowercase();
        if word.len() <= 2 || !word.is_ascii() {
            return word;
        }

        strip_plural(&mut word);
        strip_past_or_gerund(&mut word);
        replace_terminal_y(&mut word);
        apply_rules(&mut word, DERIVATIONAL);
        apply_rules(&mut word, ADJECTIVAL);
        strip_residual(&mut word);
        tidy_ending(&mut word);
        word
    }

    fn name(&self) -> &'static str {
        "porter"
    }
}

/// `y` counts as a vowel after a consonant.
fn is_vowel(letters: &[u8], at: usize) -> bool {
    match letters[at] {
        b'a' | b'e' | b'i' | b'o' | b'u' => true,
        b'y' => at > 0 && !is_vowel(letters, at - 1),
        _ => false,
    }
}

/// Number of vowel-run/consonant-run pairs, the `m` of [C](VC)^m[V].
fn measure(stem: &str) -> usize {
    let letters = stem.as_bytes();
    let mut pairs = 0;
    let mut previous_vowel = false;
    for at in 0..letters.len() {
        let vowel = is_vowel(letters, at);
        if previous_vowel && !vowel {
            pairs += 1;
        }
        previous_vowel = vowel;
    }
    pairs
}

fn has_vowel(stem: &str) -> bool {
    let letters = stem.as_bytes();
    (0..letters.len()).any(|at| is_vowel(letters, at))
}

fn ends_in_double_consonant(stem: &str) -> bool {
    let letters = stem.as_bytes();
    let n = letters.len();
    n >= 2 && letters[n - 1] == letters[n - 2] && !is_vowel(letters, n - 1)
}

/// Consonant, vowel, consonant at the end, the last not `w`, `x` or `y`.
fn ends_in_short_syllable(stem: &str) -> bool {
    let letters = stem.as_bytes();
    let n = letters.len();
    n >= 3
        && !is_vowel(letters, n - 3)
        && is_vowel(letters, n - 2)
        && !is_vowel(letters, n - 1)
        && !matches!(letters[n - 1], b'w' | b'x' | b'y')
}

fn strip_plural(word: &mut String) {
    if word.ends_with("sses") || word.ends_with("ies") {
        word.truncate(word.len() - 2);
    } else if word.ends_with('s') && !word.ends_with("ss") {
        word.pop();
    }
}

fn strip_past_or_gerund(word: &mut String) {
    if word.ends_with("eed") {
        if measure(&word[..word.len() - 3]) > 0 {
            word.pop();
        }
        return;
    }

    let Some(suffix) = ["ed", "ing"]
        .into_iter()
        .find(|suffix| word.strip_suffix(suffix).is_some_and(has_vowel))
    else {
        return;
    };
    word.truncate(word.len() - suffix.len());

    if word.ends_with("at") || word.ends_with("bl") || word.ends_with("iz") {
        word.push('e');
    } else if ends_in_double_consonant(word) && !word.ends_with(['l', 's', 'z']) {
        word.pop();
    } else if measure(word) == 1 && ends_in_short_syllable(word) {
        word.push('e');
    }
}

fn replace_terminal_y(word: &mut String) {
    if word.ends_with('y') && has_vowel(&word[..word.len() - 1]) {
        word.pop();
        word.push('i');
    }
}

fn apply_rules(word: &mut String, rules: &[(&str, &str)]) {
    if let Some((suffix, replacement)) = rules.iter().find(|(suffix, _)| word.ends_with(suffix)) {
        let keep = word.len() - suffix.len();
        if measure(&word[..keep]) > 0 {
            word.truncate(keep);
            word.push_str(replacement);
        }
    }
}

fn strip_residual(word: &mut String) {
    let Some(suffix) = RESIDUAL.iter().find(|suffix| word.ends_with(*suffix)) else {
        return;
    };
    let keep = word.len() - suffix.len();
    let stem = &word[..keep];
    if measure(stem) > 1 && (*suffix != "ion" || stem.ends_with(['s', 't'])) {
        word.truncate(keep);
    }
}

fn tidy_ending(word: &mut String) {
    if word.ends_with('e') {
        let stem = &word[..word.len() - 1];
        let m = measure(stem);
        if m > 1 || (m == 1 && !ends_in_short_syllable(stem)) {
            word.pop();
        }
    }

    if word.ends_with("ll") && measure(word) > 1 {
        word.pop();
    }
}
