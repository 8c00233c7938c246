//! Unicode normalization ahead of tokenizing.
//!
//! The standard analyzer uses NFKC so fullwidth letters, ligatures and other
//! compatibility variants are counted as their plain spelling.

use unicode_normalization::{UnicodeNormalization, is_nfc, is_nfd, is_nfkc, is_nfkd};

use super::CharFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NormalizationForm {
    Nfc,
    Nfd,
    #[default]
    Nfkc,
    Nfkd,
}

impl NormalizationForm {
    fn is_normalized(self, text: &str) -> bool {
        match self {
            NormalizationForm::Nfc => is_nfc(text),
            NormalizationForm::Nfd => is_nfd(text),
            NormalizationForm::Nfkc => is_nfkc(text),
            NormalizationForm::Nfkd => is_nfkd(text),
        }
    }

    fn apply(self, text: &str) -> String {
        match self {
            NormalizationForm::Nfc => text.nfc().collect(),
            NormalizationForm::Nfd => text.nfd().collect(),
            NormalizationForm::Nfkc => text.nfkc().collect(),
            NormalizationForm::Nfkd => text.nfkd().collect(),
        }
    }
}

/// Rewrites text into one normalization form. Defaults to NFKC.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeNormalizationCharFilter {
    form: NormalizationForm,
}

impl UnicodeNormalizationCharFilter {
    pub fn new(form: NormalizationForm) -> Self {
        Self { form }
    }

    pub fn form(&self) -> NormalizationForm {
        self.form
    }
}

impl CharFilter for UnicodeNormalizationCharFilter {
    fn filter(&self, input: &str) -> String {
        if self.form.is_normalized(input) {
            input.to_owned()
        } else {
            self.form.apply(input)
        }
    }

    fn name(&self) -> &'static str {
        "unicode_normalization"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nfkc_folds_compatibility_characters() {
        let filter = UnicodeNormalizationCharFilter::default();

        assert_eq!(filter.form(), NormalizationForm::Nfkc);
        assert_eq!(filter.filter("\u{ff26}\u{ff32}\u{ff25}\u{ff25}"), "FREE");
        assert_eq!(filter.filter("\u{fb01}nance"), "finance");
        assert_eq!(filter.filter("plain ascii"), "plain ascii");
    }

    #[test]
    fn test_nfd_decomposes() {
        let filter = UnicodeNormalizationCharFilter::new(NormalizationForm::Nfd);
        assert_eq!(filter.filter("caf\u{e9}"), "cafe\u{301}");
    }
}
