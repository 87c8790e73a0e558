// RSA Public Key
// Modulus/exponent pair and its PKCS#1 RSAPublicKey encoding

use num_traits::Zero;

use super::bigint::{from_bytes, to_bytes, to_integer_bytes, RsaBigInt};
use crate::asn1::{tags, wrap};
use crate::error::{ExportError, ExportResult};
use crate::export::PublicKeySource;

/// RSA Public Key
#[derive(Debug, Clone, PartialEq)]
pub struct RsaPublicKey {
    pub n: RsaBigInt, // Modulus
    pub e: RsaBigInt, // Public exponent
}

impl RsaPublicKey {
    pub fn new(n: RsaBigInt, e: RsaBigInt) -> Self {
        Self { n, e }
    }

    /// Build a key from big-endian modulus and exponent bytes
    pub fn from_components(n: &[u8], e: &[u8]) -> Self {
        Self::new(from_bytes(n), from_bytes(e))
    }

    /// Get the bit length of the modulus
    pub fn bit_length(&self) -> u32 {
        let n_bytes = to_bytes(&self.n);
        (n_bytes.len() * 8) as u32
    }

    /// Encode as PKCS#1 `RSAPublicKey ::= SEQUENCE { modulus INTEGER, publicExponent INTEGER }`
    pub fn to_pkcs1_der(&self) -> Vec<u8> {
        let mut body = wrap(tags::INTEGER, &to_integer_bytes(&self.n));
        body.extend_from_slice(&wrap(tags::INTEGER, &to_integer_bytes(&self.e)));
        wrap(tags::SEQUENCE, &body)
    }
}

impl PublicKeySource for RsaPublicKey {
    fn public_key_bytes(&self) -> ExportResult<Vec<u8>> {
        if self.n.is_zero() || self.e.is_zero() {
            return Err(ExportError::UnavailableKeyMaterial);
        }
        Ok(self.to_pkcs1_der())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asn1::{siblings, TlvElement};
    use crate::rsa::bigint::from_u64;

    const TOY_MODULUS: [u8; 8] = [0x45, 0x9A, 0x3F, 0x71, 0x2E, 0x88, 0x4B, 0xD3];

    #[test]
    fn test_toy_key_encoding() {
        let key = RsaPublicKey::from_components(&TOY_MODULUS, &[0x03]);
        let der = key.to_pkcs1_der();

        let mut expected = vec![0x30, 0x0D, 0x02, 0x08];
        expected.extend_from_slice(&TOY_MODULUS);
        expected.extend_from_slice(&[0x02, 0x01, 0x03]);
        assert_eq!(der, expected);
        assert_eq!(key.bit_length(), 64);
    }

    #[test]
    fn test_modulus_high_bit_padding() {
        let modulus = [0xC5; 128];
        let key = RsaPublicKey::from_components(&modulus, &[0x01, 0x00, 0x01]);
        let der = key.to_pkcs1_der();

        let outer = TlvElement::parse(0x30, &der).unwrap();
        assert_eq!(outer.length(), der.len());

        // Modulus INTEGER: 0x81 length form, leading zero, then the modulus
        let n = siblings(0x02, outer.value()).next().unwrap();
        assert_eq!(&n.content()[..4], &[0x02, 0x81, 0x81, 0x00]);
        assert_eq!(&n.value()[1..], &modulus);
    }

    #[test]
    fn test_public_key_source() {
        let key = RsaPublicKey::new(from_bytes(&TOY_MODULUS), from_u64(3));
        assert_eq!(key.public_key_bytes().unwrap(), key.to_pkcs1_der());

        let empty = RsaPublicKey::new(from_u64(0), from_u64(3));
        assert!(matches!(
            empty.public_key_bytes(),
            Err(ExportError::UnavailableKeyMaterial)
        ));
    }
}
