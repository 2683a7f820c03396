//! Language detection for resume text.
//!
//! Detectors return an ISO 639-1 [`LanguageCode`]. Confidence is logged but
//! never returned: callers treat the code as authoritative.

use tracing::debug;

use resumeparser_shared::LanguageCode;

/// Contract for guessing the language of a document.
pub trait LanguageDetector: Send + Sync {
    /// Detect the language of `text`. Short or ambiguous text may produce a
    /// low-confidence guess; undetectable text yields `und`.
    fn detect(&self, text: &str) -> LanguageCode;

    /// Human-readable detector name for tracing.
    fn name(&self) -> &str;
}

// ---------------------------------------------------------------------------
// whatlang
// ---------------------------------------------------------------------------

/// Trigram-based detector backed by `whatlang`.
#[derive(Debug, Default, Clone, Copy)]
pub struct WhatlangDetector;

impl LanguageDetector for WhatlangDetector {
    fn detect(&self, text: &str) -> LanguageCode {
        let Some(info) = whatlang::detect(text) else {
            debug!("language undetectable");
            return LanguageCode::undetermined();
        };

        let iso3 = info.lang().code();
        let code = to_iso639_1(iso3).unwrap_or(iso3);
        debug!(
            code,
            iso3,
            confidence = info.confidence(),
            reliable = info.is_reliable(),
            "language detected"
        );
        LanguageCode::new(code)
    }

    fn name(&self) -> &str {
        "whatlang"
    }
}

/// Map an ISO 639-3 code (as reported by whatlang) to ISO 639-1.
///
/// Codes without a two-letter equivalent return `None` and are passed through
/// unchanged; they simply never match a registered bundle.
pub fn to_iso639_1(iso3: &str) -> Option<&'static str> {
    let code = match iso3 {
        "afr" => "af",
        "aka" => "ak",
        "amh" => "am",
        "ara" => "ar",
        "aze" => "az",
        "bel" => "be",
        "ben" => "bn",
        "bul" => "bg",
        "cat" => "ca",
        "ces" => "cs",
        "cmn" => "zh",
        "dan" => "da",
        "deu" => "de",
        "ell" => "el",
        "eng" => "en",
        "epo" => "eo",
        "est" => "et",
        "fin" => "fi",
        "fra" => "fr",
        "guj" => "gu",
        "heb" => "he",
        "hin" => "hi",
        "hrv" => "hr",
        "hun" => "hu",
        "hye" => "hy",
        "ind" => "id",
        "ita" => "it",
        "jav" => "jv",
        "jpn" => "ja",
        "kan" => "kn",
        "kat" => "ka",
        "khm" => "km",
        "kor" => "ko",
        "lat" => "la",
        "lav" => "lv",
        "lit" => "lt",
        "mal" => "ml",
        "mar" => "mr",
        "mkd" => "mk",
        "mya" => "my",
        "nep" => "ne",
        "nld" => "nl",
        "nob" => "nb",
        "ori" => "or",
        "pan" => "pa",
        "pes" => "fa",
        "pol" => "pl",
        "por" => "pt",
        "ron" => "ro",
        "rus" => "ru",
        "sin" => "si",
        "slk" => "sk",
        "slv" => "sl",
        "sna" => "sn",
        "spa" => "es",
        "srp" => "sr",
        "swe" => "sv",
        "tam" => "ta",
        "tel" => "te",
        "tgl" => "tl",
        "tha" => "th",
        "tuk" => "tk",
        "tur" => "tr",
        "ukr" => "uk",
        "urd" => "ur",
        "uzb" => "uz",
        "vie" => "vi",
        "yid" => "yi",
        "zul" => "zu",
        _ => return None,
    };
    Some(code)
}

// ---------------------------------------------------------------------------
// Fixed
// ---------------------------------------------------------------------------

/// Detector that always reports the same code (used for `--lang` overrides).
#[derive(Debug, Clone)]
pub struct FixedLanguage(pub LanguageCode);

impl LanguageDetector for FixedLanguage {
    fn detect(&self, _text: &str) -> LanguageCode {
        self.0.clone()
    }

    fn name(&self) -> &str {
        "fixed"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_english_prose() {
        let text = "Experienced software engineer with a strong background in building \
                    reliable distributed systems and leading small teams of developers.";
        assert_eq!(WhatlangDetector.detect(text).as_str(), "en");
    }

    #[test]
    fn detects_german_prose() {
        let text = "Ich bin ein erfahrener Softwareentwickler und arbeite seit vielen Jahren \
                    in der Entwicklung von verteilten Systemen für große Unternehmen.";
        assert_eq!(WhatlangDetector.detect(text).as_str(), "de");
    }

    #[test]
    fn empty_text_is_undetermined() {
        assert_eq!(WhatlangDetector.detect("").as_str(), LanguageCode::UNDETERMINED);
    }

    #[test]
    fn iso_mapping() {
        assert_eq!(to_iso639_1("eng"), Some("en"));
        assert_eq!(to_iso639_1("cmn"), Some("zh"));
        assert_eq!(to_iso639_1("xyz"), None);
    }

    #[test]
    fn fixed_language_ignores_text() {
        let detector = FixedLanguage(LanguageCode::new("xx"));
        assert_eq!(detector.detect("Hello world").as_str(), "xx");
    }
}
