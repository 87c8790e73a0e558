// Export Module - Main module file
// Turns raw RSA public key bytes into Base64 X.509 SubjectPublicKeyInfo text

pub mod config;
pub mod manager;
pub mod x509;

pub use config::{ExportConfig, LineEnding};
pub use manager::{EncryptionManager, PublicKeySource};
pub use x509::{
    decode_public_key_for_java_server, decode_subject_public_key_info, encode_base64,
    export_public_key_for_java_server, export_public_key_for_java_server_with,
    subject_public_key_info, subject_public_key_info_with, RSA_OID,
};
