use encoding_rs::{Encoding, UTF_8};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    pub text: String,
    pub encoding_label: &'static str,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("input is not valid {encoding} text")]
    Malformed { encoding: &'static str },
}

/// Decode raw file bytes into a `String`: BOM -> UTF-8 default.
///
/// A recognised BOM is stripped. Malformed input is rejected rather than
/// replaced, so counts never include replacement characters.
pub fn decode_text(bytes: Vec<u8>) -> Result<DecodedText, DecodeError> {
    // 1) BOM selects UTF-8, UTF-16LE or UTF-16BE
    if let Some((encoding, bom_len)) = Encoding::for_bom(&bytes) {
        return decode_with(&bytes[bom_len..], encoding);
    }

    // 2) UTF-8 without a BOM; reuse the buffer when valid
    match String::from_utf8(bytes) {
        Ok(text) => Ok(DecodedText {
            text,
            encoding_label: UTF_8.name(),
        }),
        Err(_) => Err(DecodeError::Malformed {
            encoding: UTF_8.name(),
        }),
    }
}

fn decode_with(bytes: &[u8], encoding: &'static Encoding) -> Result<DecodedText, DecodeError> {
    let (text, had_errors) = encoding.decode_without_bom_handling(bytes);
    if had_errors {
        return Err(DecodeError::Malformed {
            encoding: encoding.name(),
        });
    }
    Ok(DecodedText {
        text: text.into_owned(),
        encoding_label: encoding.name(),
    })
}

#[cfg(test)]
mod tests {
    use super::{decode_text, DecodeError};

    #[test]
    fn plain_utf8_passes_through() {
        let decoded = decode_text(b"the cat".to_vec()).unwrap();
        assert_eq!(decoded.text, "the cat");
        assert_eq!(decoded.encoding_label, "UTF-8");
    }

    #[test]
    fn utf8_bom_is_stripped() {
        let decoded = decode_text(b"\xEF\xBB\xBFthe cat".to_vec()).unwrap();
        assert_eq!(decoded.text, "the cat");
    }

    #[test]
    fn utf16le_bom_is_honoured() {
        let bytes = vec![0xFF, 0xFE, b'h', 0, b'i', 0];
        let decoded = decode_text(bytes).unwrap();
        assert_eq!(decoded.text, "hi");
        assert_eq!(decoded.encoding_label, "UTF-16LE");
    }

    #[test]
    fn invalid_utf8_is_rejected() {
        let err = decode_text(vec![b'a', 0xFF, b'b']).unwrap_err();
        assert_eq!(err, DecodeError::Malformed { encoding: "UTF-8" });
    }
}
