//! URL-safe Base64 (RFC 4648 §5) with optional padding.

use base64::{
    Engine as _, alphabet,
    engine::{
        DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig, general_purpose::URL_SAFE_NO_PAD,
    },
};
use thiserror::Error as ThisError;

/// Standard-alphabet engine that tolerates non-zero trailing bits, like a browser `atob`.
const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Base64UrlError {
    /// `len % 4 == 1` can never come out of an encoder.
    #[error("invalid base64url length {len}: one symbol left over after the last full quantum")]
    InvalidLength { len: usize },

    #[error("base64 decode error: {0}")]
    Decode(#[from] base64::DecodeError),
}

/// Decode a Base64Url segment into raw bytes.
///
/// `-`/`_` are mapped back onto the standard alphabet and stripped padding is
/// restored before the standard decode runs. Failures are returned to the
/// caller untouched; recovering from them is the caller's decision.
pub fn base64_url_decode(input: &str) -> Result<Vec<u8>, Base64UrlError> {
    let mut standard: String = input
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();

    match standard.len() % 4 {
        1 => {
            return Err(Base64UrlError::InvalidLength {
                len: standard.len(),
            });
        }
        2 => standard.push_str("=="),
        3 => standard.push('='),
        _ => {}
    }

    Ok(STANDARD_LENIENT.decode(standard)?)
}

/// Unpadded URL-safe encoding, the form JWT segments are written in.
pub fn base64_url_encode(input: impl AsRef<[u8]>) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_unpadded_header() {
        let bytes = base64_url_decode("eyJhbGciOiJIUzI1NiJ9").expect("valid segment");
        assert_eq!(bytes, br#"{"alg":"HS256"}"#);
    }

    #[test]
    fn restores_padding_for_remainders_two_and_three() {
        // "a" -> "YQ" (len 2), "ab" -> "YWI" (len 3)
        assert_eq!(base64_url_decode("YQ").expect("len 2"), b"a");
        assert_eq!(base64_url_decode("YWI").expect("len 3"), b"ab");
        assert_eq!(base64_url_decode("YWJj").expect("len 0"), b"abc");
    }

    #[test]
    fn accepts_already_padded_input() {
        assert_eq!(base64_url_decode("YQ==").expect("padded"), b"a");
        assert_eq!(base64_url_decode("YWI=").expect("padded"), b"ab");
    }

    #[test]
    fn empty_input_decodes_to_empty_output() {
        assert_eq!(base64_url_decode("").expect("empty"), Vec::<u8>::new());
    }

    #[test]
    fn maps_url_safe_symbols_back() {
        // 0xfb 0xff encodes to "+/8=" in the standard alphabet.
        assert_eq!(base64_url_decode("-_8").expect("url-safe"), vec![0xfb, 0xff]);
        // Standard symbols are left as they are.
        assert_eq!(base64_url_decode("+/8").expect("standard"), vec![0xfb, 0xff]);
    }

    #[test]
    fn invalid_character_is_reported() {
        let err = base64_url_decode("@@@").expect_err("'@' is not in the alphabet");
        assert!(matches!(err, Base64UrlError::Decode(_)), "got {err:?}");
    }

    #[test]
    fn single_leftover_symbol_is_an_error() {
        let err = base64_url_decode("YWJjZ").expect_err("len % 4 == 1");
        assert_eq!(err, Base64UrlError::InvalidLength { len: 5 });
    }

    #[test]
    fn encode_then_decode_returns_the_input() {
        let samples: [&[u8]; 6] = [
            b"",
            b"f",
            b"fo",
            b"foo",
            &[0xfb, 0xef, 0xbe, 0xff],
            "héllo wörld".as_bytes(),
        ];
        for sample in samples {
            let encoded = base64_url_encode(sample);
            assert!(!encoded.contains('='), "encoded form is unpadded: {encoded}");
            assert_eq!(base64_url_decode(&encoded).expect("round trip"), sample);
        }
    }
}
