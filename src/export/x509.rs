// X.509 SubjectPublicKeyInfo Export
// Wraps raw RSA public key bytes for a Java server and inspects the result

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use tracing::{debug, warn};

use super::config::ExportConfig;
use super::manager::PublicKeySource;
use crate::asn1::{siblings, tags, wrap_with, LengthForm, TlvElement};
use crate::error::{ExportError, ExportResult};

/// AlgorithmIdentifier body for rsaEncryption:
/// OBJECT IDENTIFIER 1.2.840.113549.1.1.1 followed by NULL parameters
pub const RSA_OID: [u8; 13] = [
    tags::OID, 0x09, 0x2A, 0x86, 0x48, 0x86, 0xF7, 0x0D, 0x01, 0x01, 0x01,
    tags::NULL, 0x00,
];

/// DER `SubjectPublicKeyInfo` for raw RSA public key bytes, legacy length rules
pub fn subject_public_key_info(raw_public_key: &[u8]) -> Vec<u8> {
    subject_public_key_info_with(raw_public_key, LengthForm::Legacy)
}

/// DER `SubjectPublicKeyInfo` for raw RSA public key bytes
pub fn subject_public_key_info_with(raw_public_key: &[u8], form: LengthForm) -> Vec<u8> {
    let bit_string = wrap_with(tags::BIT_STRING, raw_public_key, form);
    debug!(len = bit_string.len(), "wrapped public key as BIT STRING");

    let oid_sequence = wrap_with(tags::SEQUENCE, &RSA_OID, form);

    let mut body = Vec::with_capacity(oid_sequence.len() + bit_string.len());
    body.extend_from_slice(&oid_sequence);
    body.extend_from_slice(&bit_string);

    let x509 = wrap_with(tags::SEQUENCE, &body, form);
    debug!(len = x509.len(), der = %hex::encode(&x509), "built SubjectPublicKeyInfo");
    x509
}

/// Base64-encode with the configured line layout
pub fn encode_base64(bytes: &[u8], config: &ExportConfig) -> String {
    let encoded = STANDARD.encode(bytes);
    match config.line_length {
        Some(width) if width > 0 && encoded.len() > width => encoded
            .as_bytes()
            .chunks(width)
            // Base64 output is ASCII, so every chunk is valid UTF-8
            .map(String::from_utf8_lossy)
            .collect::<Vec<_>>()
            .join(config.line_ending.as_str()),
        _ => encoded,
    }
}

/// Export a public key in the form a Java server loads with `X509EncodedKeySpec`.
///
/// Returns `None` when the source has no key material; nothing resembling a
/// key is produced in that case.
pub fn export_public_key_for_java_server<S>(source: &S) -> Option<String>
where
    S: PublicKeySource + ?Sized,
{
    export_public_key_for_java_server_with(source, &ExportConfig::default())
}

/// [`export_public_key_for_java_server`] with an explicit configuration
pub fn export_public_key_for_java_server_with<S>(source: &S, config: &ExportConfig) -> Option<String>
where
    S: PublicKeySource + ?Sized,
{
    let raw = match source.public_key_bytes() {
        Ok(raw) => raw,
        Err(err) => {
            warn!(%err, "no public key to export");
            return None;
        }
    };

    let x509 = subject_public_key_info_with(&raw, config.length_form);
    Some(encode_base64(&x509, config))
}

/// Check a DER `SubjectPublicKeyInfo` for the rsaEncryption layout and return
/// the raw public key bytes carried in its BIT STRING
pub fn decode_subject_public_key_info(der: &[u8]) -> ExportResult<&[u8]> {
    if der.first() != Some(&tags::SEQUENCE) {
        return Err(ExportError::MalformedInput("missing outer SEQUENCE"));
    }
    let outer = TlvElement::parse(tags::SEQUENCE, der)
        .ok_or(ExportError::MalformedInput("unreadable outer SEQUENCE"))?;
    if outer.length() != der.len() {
        return Err(ExportError::MalformedInput("trailing bytes after SEQUENCE"));
    }

    let body = outer.value();
    let algorithm = siblings(tags::SEQUENCE, body)
        .next()
        .ok_or(ExportError::MalformedInput("missing algorithm identifier"))?;
    if algorithm.value() != RSA_OID {
        return Err(ExportError::MalformedInput("algorithm is not rsaEncryption"));
    }

    let rest = &body[algorithm.length()..];
    let bit_string = siblings(tags::BIT_STRING, rest)
        .next()
        .ok_or(ExportError::MalformedInput("missing BIT STRING"))?;
    if bit_string.length() != rest.len() {
        return Err(ExportError::MalformedInput("trailing bytes after BIT STRING"));
    }

    match bit_string.value().split_first() {
        Some((0x00, key)) => Ok(key),
        _ => Err(ExportError::MalformedInput("BIT STRING has unused bits")),
    }
}

/// Decode Base64 text produced by [`export_public_key_for_java_server`] back
/// to the raw public key bytes. Whitespace and line breaks are ignored.
pub fn decode_public_key_for_java_server(text: &str) -> ExportResult<Vec<u8>> {
    let compact: String = text.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let der = STANDARD.decode(compact)?;
    match decode_subject_public_key_info(&der) {
        Ok(raw) => Ok(raw.to_vec()),
        Err(err) => {
            warn!(%err, "rejected exported public key");
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::LineEnding;
    use crate::rsa::RsaPublicKey;

    const TOY_KEY: [u8; 15] = [
        0x30, 0x0D, 0x02, 0x08, 0x45, 0x9A, 0x3F, 0x71, 0x2E, 0x88, 0x4B, 0xD3, 0x02, 0x01, 0x03,
    ];

    #[test]
    fn test_rsa_oid() {
        assert_eq!(RSA_OID.len(), 13);
        assert_eq!(hex::encode(RSA_OID), "06092a864886f70d0101010500");
    }

    #[test]
    fn test_toy_key_stages() {
        let bit_string = wrap_with(0x03, &TOY_KEY, LengthForm::Legacy);
        assert_eq!(&bit_string[..3], &[0x03, 0x10, 0x00]);
        assert_eq!(&bit_string[3..], &TOY_KEY);

        let oid_sequence = wrap_with(0x30, &RSA_OID, LengthForm::Legacy);
        assert_eq!(&oid_sequence[..2], &[0x30, 0x0D]);
        assert_eq!(&oid_sequence[2..], &RSA_OID);

        let x509 = subject_public_key_info(&TOY_KEY);
        assert_eq!(
            hex::encode(&x509),
            "3021300d06092a864886f70d0101010500031000300d0208459a3f712e884bd3020103"
        );
    }

    #[test]
    fn test_export_toy_key() {
        let exported = export_public_key_for_java_server(&TOY_KEY[..]).unwrap();
        assert_eq!(exported, "MCEwDQYJKoZIhvcNAQEBBQADEAAwDQIIRZo/cS6IS9MCAQM=");
    }

    #[test]
    fn test_export_line_wrapping() {
        let config = ExportConfig::default().with_line_length(16);
        let exported = export_public_key_for_java_server_with(&TOY_KEY[..], &config).unwrap();
        assert_eq!(
            exported,
            "MCEwDQYJKoZIhvcN\nAQEBBQADEAAwDQII\nRZo/cS6IS9MCAQM="
        );

        let config = config.with_line_ending(LineEnding::CrLf);
        let exported = export_public_key_for_java_server_with(&TOY_KEY[..], &config).unwrap();
        assert_eq!(
            exported,
            "MCEwDQYJKoZIhvcN\r\nAQEBBQADEAAwDQII\r\nRZo/cS6IS9MCAQM="
        );
    }

    #[test]
    fn test_zero_line_length_keeps_single_line() {
        let config = ExportConfig {
            line_length: Some(0),
            ..Default::default()
        };
        let raw: [u8; 5] = [0x30, 0x03, 0x02, 0x01, 0x03];
        let exported = export_public_key_for_java_server_with(&raw[..], &config).unwrap();
        assert_eq!(exported, export_public_key_for_java_server(&raw[..]).unwrap());
        assert!(!exported.contains('\n'));
    }

    #[test]
    fn test_decode_rejects_empty_bit_string() {
        // Only the unused-bits octet: too short to be read as an element
        let mut body = wrap_with(0x30, &RSA_OID, LengthForm::Legacy);
        body.extend_from_slice(&[0x03, 0x01, 0x00]);
        let der = wrap_with(0x30, &body, LengthForm::Legacy);
        assert!(matches!(
            decode_subject_public_key_info(&der),
            Err(ExportError::MalformedInput("missing BIT STRING"))
        ));
    }

    #[test]
    fn test_export_unavailable_key() {
        let missing: Option<Vec<u8>> = None;
        assert!(export_public_key_for_java_server(&missing).is_none());
        let empty: &[u8] = &[];
        assert!(export_public_key_for_java_server(empty).is_none());
    }

    #[test]
    fn test_export_canonical_length_form() {
        // 0x7F key bytes + unused-bits octet = 0x80 payload
        let raw = vec![0x42u8; 0x7F];
        let legacy = subject_public_key_info(&raw);
        let canonical = subject_public_key_info_with(&raw, LengthForm::Der);

        assert_eq!(&legacy[..3], &[0x30, 0x81, 0x91]);
        assert_eq!(&legacy[18..20], &[0x03, 0x80]);
        assert_eq!(&canonical[..3], &[0x30, 0x81, 0x92]);
        assert_eq!(&canonical[18..21], &[0x03, 0x81, 0x80]);
        assert_eq!(canonical.len(), legacy.len() + 1);
    }

    #[test]
    fn test_decode_round_trip() {
        let exported = export_public_key_for_java_server(&TOY_KEY[..]).unwrap();
        assert_eq!(decode_public_key_for_java_server(&exported).unwrap(), TOY_KEY);

        let wrapped = export_public_key_for_java_server_with(
            &TOY_KEY[..],
            &ExportConfig::default().with_line_length(16),
        )
        .unwrap();
        assert_eq!(decode_public_key_for_java_server(&wrapped).unwrap(), TOY_KEY);
    }

    #[test]
    fn test_decode_2048_bit_key() {
        let mut modulus = vec![0xD7u8; 256];
        modulus[255] = 0x01;
        let key = RsaPublicKey::from_components(&modulus, &[0x01, 0x00, 0x01]);
        let raw = key.to_pkcs1_der();

        let x509 = subject_public_key_info(&raw);
        assert_eq!(&x509[..2], &[0x30, 0x82]);
        assert_eq!(decode_subject_public_key_info(&x509).unwrap(), raw.as_slice());
    }

    #[test]
    fn test_decode_rejects_malformed() {
        let x509 = subject_public_key_info(&TOY_KEY);

        let mut trailing = x509.clone();
        trailing.push(0x00);
        assert!(matches!(
            decode_subject_public_key_info(&trailing),
            Err(ExportError::MalformedInput(_))
        ));

        let mut wrong_oid = x509.clone();
        wrong_oid[14] = 0x05;
        assert!(decode_subject_public_key_info(&wrong_oid).is_err());

        let mut unused_bits = x509.clone();
        unused_bits[19] = 0x01;
        assert!(decode_subject_public_key_info(&unused_bits).is_err());

        assert!(decode_subject_public_key_info(&x509[1..]).is_err());
        assert!(matches!(
            decode_public_key_for_java_server("not base64!"),
            Err(ExportError::Base64(_))
        ));
    }
}
