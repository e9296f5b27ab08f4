use encoding_rs::Encoding;

use std::fmt;

// Codeset names glibc and iconv use for plain ASCII
const ASCII_LABELS: [&str; 5] = ["ANSI_X3.4-1968", "ASCII", "US-ASCII", "646", "ISO646-US"];

// WHATWG maps these to windows-1252, which is a superset
const LATIN1_LABELS: [&str; 9] = [
    "ISO-8859-1",
    "ISO8859-1",
    "ISO_8859-1",
    "ISO88591",
    "LATIN1",
    "L1",
    "ISO-IR-100",
    "CP819",
    "IBM819",
];

/// Character encoding used to turn text into keyboard keys for
/// [`Device::type_string()`](super::Device::type_string)
///
/// Characters the encoding cannot represent are skipped.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    /// The "C"/"POSIX" locale: ASCII only
    C,
    /// UTF-8
    Utf8,
    /// ISO-8859-1: U+0000 to U+00FF, one byte each
    Latin1,
    /// Any other byte-oriented encoding, e.g. `Locale::from_label("Shift_JIS")`
    Encoding(&'static Encoding),
}

impl Locale {
    /// Look up a locale from an encoding label ("UTF-8", "latin1", "Shift_JIS") or
    /// a locale name ("C", "POSIX", "de_DE.ISO-8859-1", "en_US.UTF-8@euro")
    ///
    /// Encodings that are not byte-oriented, like UTF-16, give `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        if label == "C" || label == "POSIX" {
            return Some(Self::C);
        }

        // language_TERRITORY.codeset@modifier, or a bare codeset
        let label = label.split('@').next().unwrap_or(label);
        let codeset = if is_known_codeset(label) {
            label
        } else {
            label.split_once('.').map_or(label, |(_, codeset)| codeset)
        };

        if matches_any(codeset, &ASCII_LABELS) {
            return Some(Self::C);
        }
        if matches_any(codeset, &LATIN1_LABELS) {
            return Some(Self::Latin1);
        }

        match Encoding::for_label(codeset.as_bytes())? {
            enc if enc == encoding_rs::UTF_8 => Some(Self::Utf8),
            enc if enc.output_encoding() != enc => None,
            enc => Some(Self::Encoding(enc)),
        }
    }

    /// Bytes of `c` in this locale, `None` if it has no representation
    pub fn encode(&self, c: char) -> Option<Vec<u8>> {
        match self {
            Self::C => c.is_ascii().then(|| vec![c as u8]),
            Self::Utf8 => {
                let mut buf = [0; 4];
                Some(c.encode_utf8(&mut buf).as_bytes().to_vec())
            }
            Self::Latin1 => u8::try_from(u32::from(c)).ok().map(|b| vec![b]),
            Self::Encoding(enc) => {
                let mut buf = [0; 4];
                let (bytes, _, had_errors) = enc.encode(c.encode_utf8(&mut buf));
                if had_errors {
                    None
                } else {
                    Some(bytes.into_owned())
                }
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::C => "C",
            Self::Utf8 => "UTF-8",
            Self::Latin1 => "ISO-8859-1",
            Self::Encoding(enc) => enc.name(),
        }
    }
}

fn matches_any(codeset: &str, labels: &[&str]) -> bool {
    labels.iter().any(|l| l.eq_ignore_ascii_case(codeset))
}

fn is_known_codeset(label: &str) -> bool {
    matches_any(label, &ASCII_LABELS)
        || matches_any(label, &LATIN1_LABELS)
        || Encoding::for_label(label.as_bytes()).is_some()
}

impl Default for Locale {
    fn default() -> Self {
        Self::Utf8
    }
}

impl fmt::Debug for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Locale({})", self.name())
    }
}
