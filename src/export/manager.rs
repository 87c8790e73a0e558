// Encryption Manager
// Owns an injected public key source and produces exportable key text

use tracing::warn;

use super::config::ExportConfig;
use super::x509::{encode_base64, export_public_key_for_java_server_with};
use crate::error::{ExportError, ExportResult};

/// Anything that can hand out raw RSA public key bytes for export.
///
/// Acquiring the bytes (key store, platform keychain, file) is the
/// implementor's business; an empty result counts as unavailable.
pub trait PublicKeySource {
    fn public_key_bytes(&self) -> ExportResult<Vec<u8>>;
}

impl PublicKeySource for [u8] {
    fn public_key_bytes(&self) -> ExportResult<Vec<u8>> {
        if self.is_empty() {
            return Err(ExportError::UnavailableKeyMaterial);
        }
        Ok(self.to_vec())
    }
}

impl PublicKeySource for Vec<u8> {
    fn public_key_bytes(&self) -> ExportResult<Vec<u8>> {
        self.as_slice().public_key_bytes()
    }
}

impl<T: PublicKeySource> PublicKeySource for Option<T> {
    fn public_key_bytes(&self) -> ExportResult<Vec<u8>> {
        match self {
            Some(source) => source.public_key_bytes(),
            None => Err(ExportError::UnavailableKeyMaterial),
        }
    }
}

/// Caller-owned front end over a single key source
#[derive(Debug, Clone)]
pub struct EncryptionManager<S> {
    source: S,
    config: ExportConfig,
}

impl<S: PublicKeySource> EncryptionManager<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            config: ExportConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ExportConfig) -> Self {
        self.config = config;
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Base64 X.509 SubjectPublicKeyInfo, or `None` without key material
    pub fn public_key_for_java_server(&self) -> Option<String> {
        export_public_key_for_java_server_with(&self.source, &self.config)
    }

    /// Base64 of the raw key bytes as the source stores them
    pub fn public_key_as_base64(&self) -> Option<String> {
        match self.source.public_key_bytes() {
            Ok(raw) => Some(encode_base64(&raw, &self.config)),
            Err(err) => {
                warn!(%err, "no public key to encode");
                None
            }
        }
    }
}
