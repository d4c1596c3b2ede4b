//! # Input Document Builder
//!
//! Assembles a validation-ready input document from key descriptors and
//! service definitions: `@context` collected from each key's suite,
//! verification methods with `#key-<index>` default idents, relationship
//! reference arrays in key order, and the service list.

use peer4_core::{Document, Relationship};
use serde_json::Value;

use crate::material::KeyEntry;

/// The base DID document context, always first in `@context`.
pub const BASE_CONTEXT: &str = "https://www.w3.org/ns/did/v1";

/// Build an input document for a set of keys and services.
///
/// Field order is deterministic: `@context`, `verificationMethod`, the
/// relationship fields in the order first referenced, then `service`.
/// Suite contexts are deduplicated in key order. Empty inputs produce no
/// collection fields at all.
pub fn input_document_from_keys_and_services(
    keys: &[KeyEntry],
    services: &[Document],
) -> Document {
    let mut document = Document::new();

    let mut context = vec![Value::String(BASE_CONTEXT.to_owned())];
    for key in keys {
        let suite = key.material.context();
        if !context.iter().any(|c| c.as_str() == Some(suite)) {
            context.push(Value::String(suite.to_owned()));
        }
    }
    document.insert("@context".to_owned(), Value::Array(context));

    let mut methods = Vec::with_capacity(keys.len());
    let mut references: Vec<(Relationship, Vec<Value>)> = Vec::new();

    for (index, key) in keys.iter().enumerate() {
        let ident = key
            .ident
            .clone()
            .unwrap_or_else(|| format!("#key-{index}"));

        let (property, material) = key.material.property();
        let mut method = Document::new();
        method.insert("id".to_owned(), Value::String(ident.clone()));
        method.insert(
            "type".to_owned(),
            Value::String(key.material.type_name().to_owned()),
        );
        method.insert(property.to_owned(), material);
        methods.push(Value::Object(method));

        for relationship in &key.relationships {
            let reference = Value::String(ident.clone());
            match references.iter_mut().find(|(r, _)| r == relationship) {
                Some((_, list)) => list.push(reference),
                None => references.push((*relationship, vec![reference])),
            }
        }
    }

    if !methods.is_empty() {
        document.insert("verificationMethod".to_owned(), Value::Array(methods));
    }
    for (relationship, list) in references {
        document.insert(relationship.as_str().to_owned(), Value::Array(list));
    }
    if !services.is_empty() {
        document.insert(
            "service".to_owned(),
            Value::Array(services.iter().cloned().map(Value::Object).collect()),
        );
    }

    document
}
