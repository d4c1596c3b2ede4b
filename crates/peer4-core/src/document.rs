//! # Document Data Model
//!
//! The `did:peer:4` document model. Documents stay in their wire shape —
//! an insertion-ordered JSON map — because identifier derivation is
//! byte-sensitive to key order. Typed wrappers exist only where the type
//! system buys correctness: the five verification relationships are an
//! enum, and polymorphic relationship entries are a sum type instead of
//! dynamic type checks at each site.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An insertion-ordered DID document (input, decoded, or resolved).
///
/// `serde_json` is compiled with `preserve_order`, so iteration and
/// serialization follow insertion order — the order the author wrote,
/// which is the order that gets hashed.
pub type Document = Map<String, Value>;

/// The seven collection fields a document may carry: the verification
/// method list, the five relationships, and the service list.
pub(crate) const RESOURCE_FIELDS: [&str; 7] = [
    "verificationMethod",
    "authentication",
    "assertionMethod",
    "keyAgreement",
    "capabilityDelegation",
    "capabilityInvocation",
    "service",
];

/// A verification relationship between a DID subject and a verification
/// method.
///
/// Using an enum makes invalid relationship names unrepresentable in the
/// builder and gives the visitor an exhaustive dispatch point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relationship {
    /// `authentication`
    #[serde(rename = "authentication")]
    Authentication,
    /// `assertionMethod`
    #[serde(rename = "assertionMethod")]
    AssertionMethod,
    /// `keyAgreement`
    #[serde(rename = "keyAgreement")]
    KeyAgreement,
    /// `capabilityDelegation`
    #[serde(rename = "capabilityDelegation")]
    CapabilityDelegation,
    /// `capabilityInvocation`
    #[serde(rename = "capabilityInvocation")]
    CapabilityInvocation,
}

impl Relationship {
    /// All relationships, in document traversal order.
    pub const ALL: [Relationship; 5] = [
        Relationship::Authentication,
        Relationship::AssertionMethod,
        Relationship::KeyAgreement,
        Relationship::CapabilityDelegation,
        Relationship::CapabilityInvocation,
    ];

    /// The document field name for this relationship.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Authentication => "authentication",
            Self::AssertionMethod => "assertionMethod",
            Self::KeyAgreement => "keyAgreement",
            Self::CapabilityDelegation => "capabilityDelegation",
            Self::CapabilityInvocation => "capabilityInvocation",
        }
    }
}

impl std::fmt::Display for Relationship {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An entry in a verification relationship: either a relative reference
/// to a verification method declared elsewhere, or a verification method
/// embedded inline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VerificationMethodOrRef {
    /// A relative fragment reference, e.g. `#key-0`.
    Reference(String),
    /// An inline verification method object.
    Embedded(Document),
}

impl VerificationMethodOrRef {
    /// Classify a JSON value as a reference or an embedded method.
    ///
    /// Values that are neither strings nor objects are returned unchanged
    /// in the error position; the traversal passes them through untouched.
    pub fn from_value(value: Value) -> Result<Self, Value> {
        match value {
            Value::String(reference) => Ok(Self::Reference(reference)),
            Value::Object(embedded) => Ok(Self::Embedded(embedded)),
            other => Err(other),
        }
    }

    /// Convert back into a JSON value.
    pub fn into_value(self) -> Value {
        match self {
            Self::Reference(reference) => Value::String(reference),
            Self::Embedded(embedded) => Value::Object(embedded),
        }
    }
}
