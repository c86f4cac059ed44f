//! File-backed credential store.
//!
//! Persists the credential map as a JSON file, optionally encrypted at rest
//! with ChaCha20-Poly1305 when a 32-byte key is configured. A plaintext file
//! written before encryption was enabled is still readable and gets
//! re-encrypted on the next write.

use std::{collections::HashMap, fs, path::PathBuf, sync::Mutex};

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use chacha20poly1305::{
    aead::{Aead, KeyInit},
    ChaCha20Poly1305, Key, Nonce,
};
use rand::{rngs::OsRng, RngCore};
use serde::{Deserialize, Serialize};

use foliotrack_core::{
    credentials::CredentialStore,
    errors::{Error, Result},
};

const CURRENT_VERSION: u32 = 1;

#[derive(Debug)]
pub struct FileCredentialStore {
    path: PathBuf,
    encryption_key: Option<[u8; 32]>,
    lock: Mutex<()>,
}

#[derive(Serialize, Deserialize, Default)]
struct PlainCredentials {
    version: u32,
    credentials: HashMap<String, String>,
}

#[derive(Serialize, Deserialize)]
struct EncryptedCredentials {
    version: u32,
    nonce: String,
    ciphertext: String,
}

impl FileCredentialStore {
    pub fn new(path: PathBuf, encryption_key: Option<&str>) -> Result<Self> {
        let key = match encryption_key {
            Some(value) if !value.trim().is_empty() => Some(decode_encryption_key(value)?),
            _ => None,
        };

        Ok(Self {
            path,
            encryption_key: key,
            lock: Mutex::new(()),
        })
    }

    fn with_store<F>(&self, mut op: F) -> Result<()>
    where
        F: FnMut(&mut HashMap<String, String>) -> Result<()>,
    {
        let _guard = self
            .lock
            .lock()
            .map_err(|_| Error::Credential("Credential store lock poisoned".into()))?;
        let mut store = self.load_store_locked()?;
        op(&mut store)?;
        self.persist_store_locked(&store)
    }

    fn read_store(&self) -> Result<HashMap<String, String>> {
        let _guard = self
            .lock
            .lock()
            .map_err(|_| Error::Credential("Credential store lock poisoned".into()))?;
        self.load_store_locked()
    }

    fn load_store_locked(&self) -> Result<HashMap<String, String>> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }

        let raw = fs::read(&self.path)?;
        if raw.is_empty() {
            return Ok(HashMap::new());
        }

        let value: serde_json::Value = serde_json::from_slice(&raw)?;

        if value.get("ciphertext").is_some() {
            let key = self.encryption_key.ok_or_else(|| {
                Error::Credential(
                    "FT_CREDENTIALS_KEY must be set to decrypt the credentials file".into(),
                )
            })?;
            let enc: EncryptedCredentials = serde_json::from_value(value)?;
            let nonce_bytes = BASE64
                .decode(enc.nonce)
                .map_err(|e| Error::Credential(format!("Failed to decode nonce: {e}")))?;
            let cipher_bytes = BASE64
                .decode(enc.ciphertext)
                .map_err(|e| Error::Credential(format!("Failed to decode ciphertext: {e}")))?;

            let cipher = ChaCha20Poly1305::new(Key::from_slice(&key));
            let nonce = Nonce::from_slice(&nonce_bytes);
            let plaintext = cipher
                .decrypt(nonce, cipher_bytes.as_ref())
                .map_err(|_| Error::Credential("Failed to decrypt credentials file".into()))?;
            let plain: PlainCredentials = serde_json::from_slice(&plaintext)?;
            Ok(plain.credentials)
        } else {
            let plain: PlainCredentials = serde_json::from_value(value)?;
            Ok(plain.credentials)
        }
    }

    fn persist_store_locked(&self, store: &HashMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let plain = PlainCredentials {
            version: CURRENT_VERSION,
            credentials: store.clone(),
        };

        if let Some(key) = self.encryption_key {
            let serialized = serde_json::to_vec(&plain)?;
            let mut nonce_bytes = [0u8; 12];
            OsRng.fill_bytes(&mut nonce_bytes);
            let cipher = ChaCha20Poly1305::new(Key::from_slice(&key));
            let nonce = Nonce::from_slice(&nonce_bytes);
            let ciphertext = cipher
                .encrypt(nonce, serialized.as_ref())
                .map_err(|_| Error::Credential("Failed to encrypt credentials".into()))?;
            let enc = EncryptedCredentials {
                version: CURRENT_VERSION,
                nonce: BASE64.encode(nonce_bytes),
                ciphertext: BASE64.encode(ciphertext),
            };
            let json = serde_json::to_string_pretty(&enc)?;
            fs::write(&self.path, json)?;
        } else {
            let json = serde_json::to_string_pretty(&plain)?;
            fs::write(&self.path, json)?;
        }
        Ok(())
    }
}

impl CredentialStore for FileCredentialStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let store = self.read_store()?;
        Ok(store.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.with_store(|store| {
            store.insert(key.to_string(), value.to_string());
            Ok(())
        })
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.with_store(|store| {
            store.remove(key);
            Ok(())
        })
    }

    fn clear(&self) -> Result<()> {
        self.with_store(|store| {
            store.clear();
            Ok(())
        })
    }
}

fn decode_encryption_key(raw: &str) -> Result<[u8; 32]> {
    let trimmed = raw.trim();
    let decoded = match BASE64.decode(trimmed) {
        Ok(bytes) => bytes,
        Err(_) if trimmed.len() == 32 => trimmed.as_bytes().to_vec(),
        Err(_) => {
            return Err(Error::Credential(
                "FT_CREDENTIALS_KEY must be a base64 string or 32-byte ascii value".into(),
            ))
        }
    };

    if decoded.len() != 32 {
        return Err(Error::Credential(
            "FT_CREDENTIALS_KEY must decode to exactly 32 bytes".into(),
        ));
    }

    let mut key = [0u8; 32];
    key.copy_from_slice(&decoded);
    Ok(key)
}
