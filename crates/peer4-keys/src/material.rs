//! # Key Descriptors
//!
//! Typed descriptions of verification key material. Each variant carries
//! its own verification method `type` tag and `@context` URI, so a
//! descriptor can never be paired with the wrong suite context.

use peer4_core::Relationship;
use serde_json::Value;

/// Verification key material for one verification method.
#[derive(Debug, Clone, PartialEq)]
pub enum KeyMaterial {
    /// A multibase-encoded public key (`Multikey` suite).
    Multikey {
        /// The multibase-encoded key, e.g. `z6Mk...`.
        multikey: String,
    },
    /// A JSON Web Key (`JsonWebKey2020` suite).
    JsonWebKey2020 {
        /// The public JWK as a JSON object.
        jwk: Value,
    },
}

impl KeyMaterial {
    /// The verification method `type` for this material.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Multikey { .. } => "Multikey",
            Self::JsonWebKey2020 { .. } => "JsonWebKey2020",
        }
    }

    /// The `@context` URI for this material's suite.
    pub fn context(&self) -> &'static str {
        match self {
            Self::Multikey { .. } => "https://w3id.org/security/multikey/v1",
            Self::JsonWebKey2020 { .. } => "https://w3id.org/security/suites/jws-2020/v1",
        }
    }

    /// The key material property name and value for the verification
    /// method object.
    pub(crate) fn property(&self) -> (&'static str, Value) {
        match self {
            Self::Multikey { multikey } => {
                ("publicKeyMultibase", Value::String(multikey.clone()))
            }
            Self::JsonWebKey2020 { jwk } => ("publicKeyJwk", jwk.clone()),
        }
    }
}

/// One key to include in an input document: its material, an optional
/// explicit ident, and the relationships it participates in.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyEntry {
    /// The key material.
    pub material: KeyMaterial,
    /// Explicit relative ident (`#...`); defaults to `#key-<index>`.
    pub ident: Option<String>,
    /// Relationships to reference this key from.
    pub relationships: Vec<Relationship>,
}

impl KeyEntry {
    /// A key with no explicit ident and no relationships.
    pub fn new(material: KeyMaterial) -> Self {
        Self {
            material,
            ident: None,
            relationships: Vec::new(),
        }
    }

    /// Set an explicit relative ident.
    pub fn with_ident(mut self, ident: impl Into<String>) -> Self {
        self.ident = Some(ident.into());
        self
    }

    /// Set the relationships this key participates in.
    pub fn with_relationships(mut self, relationships: impl Into<Vec<Relationship>>) -> Self {
        self.relationships = relationships.into();
        self
    }
}
