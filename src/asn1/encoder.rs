// DER TLV Encoder
// Builds tag + length + payload encodings

use super::tags;

/// Length-header rules used when encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LengthForm {
    /// Short form up to and including 0x80, then 0x81 / 0x82 forms.
    /// Lengths above 0xFFFF are truncated to 16 bits.
    #[default]
    Legacy,
    /// Canonical DER: short form only up to 0x7F, long forms up to 4 length bytes.
    Der,
}

/// Encode a payload length as a DER length header
pub fn encode_length(length: usize, form: LengthForm) -> Vec<u8> {
    match form {
        LengthForm::Legacy => {
            if length <= 0x80 {
                vec![length as u8]
            } else if length <= 0xFF {
                vec![0x81, length as u8]
            } else {
                vec![0x82, (length >> 8) as u8, length as u8]
            }
        }
        LengthForm::Der => {
            if length < 0x80 {
                vec![length as u8]
            } else if length <= 0xFF {
                vec![0x81, length as u8]
            } else if length <= 0xFFFF {
                vec![0x82, (length >> 8) as u8, length as u8]
            } else if length <= 0xFF_FFFF {
                vec![0x83, (length >> 16) as u8, (length >> 8) as u8, length as u8]
            } else {
                vec![
                    0x84,
                    (length >> 24) as u8,
                    (length >> 16) as u8,
                    (length >> 8) as u8,
                    length as u8,
                ]
            }
        }
    }
}

/// Wrap a payload as a TLV element using the legacy length rules.
///
/// A BIT STRING (tag 0x03) payload gets a leading zero "unused bits" octet
/// before its length is computed. Never fails, the empty payload included.
pub fn wrap(tag: u8, payload: &[u8]) -> Vec<u8> {
    wrap_with(tag, payload, LengthForm::Legacy)
}

/// Wrap a payload as a TLV element using the given length rules
pub fn wrap_with(tag: u8, payload: &[u8], form: LengthForm) -> Vec<u8> {
    let prefix: &[u8] = if tag == tags::BIT_STRING { &[0x00] } else { &[] };
    let length = encode_length(prefix.len() + payload.len(), form);

    let mut out = Vec::with_capacity(1 + length.len() + prefix.len() + payload.len());
    out.push(tag);
    out.extend_from_slice(&length);
    out.extend_from_slice(prefix);
    out.extend_from_slice(payload);
    out
}
