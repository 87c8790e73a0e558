// RSA X.509 Export Library
// DER TLV parsing/encoding and SubjectPublicKeyInfo export for raw RSA public keys

pub mod asn1;
pub mod error;
pub mod export;
pub mod rsa;

pub use asn1::{siblings, wrap, wrap_with, LengthForm, TlvElement};
pub use error::{ExportError, ExportResult};
pub use export::{
    decode_public_key_for_java_server, decode_subject_public_key_info,
    export_public_key_for_java_server, export_public_key_for_java_server_with,
    subject_public_key_info, subject_public_key_info_with, EncryptionManager, ExportConfig,
    LineEnding, PublicKeySource, RSA_OID,
};
pub use rsa::RsaPublicKey;
