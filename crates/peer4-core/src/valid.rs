//! # Input Document Validation
//!
//! The structural gate between untrusted input and identifier minting.
//!
//! This validation is deliberately superficial. It catches mistakes that
//! would make the minted DID unresolvable — it does not interpret key
//! material, check `type` values against a registry, or detect duplicate
//! ids. Content-level validation is left to the caller after resolution.

use serde_json::Value;

use crate::document::{Document, RESOURCE_FIELDS};
use crate::error::ValidationError;

/// Validate a did:peer:4 input document.
///
/// Checks performed:
///
/// - The document must not be empty.
/// - The document must not contain a top-level `id`.
/// - If present, `alsoKnownAs` must be an array.
/// - `verificationMethod`, the five relationship fields, and `service`
///   must be arrays, if present.
/// - Every object element within those arrays (verification methods,
///   embedded verification methods, services) must have a string `id`
///   starting with `#` and a `type`.
///
/// String references inside relationship fields are exempt — only object
/// elements are resources.
pub fn validate_input_document(document: &Document) -> Result<(), ValidationError> {
    if document.is_empty() {
        return Err(ValidationError::EmptyDocument);
    }

    if document.contains_key("id") {
        return Err(ValidationError::IdPresent);
    }

    if let Some(also_known_as) = document.get("alsoKnownAs") {
        if !also_known_as.is_array() {
            return Err(ValidationError::AlsoKnownAsNotAnArray);
        }
    }

    for field in RESOURCE_FIELDS {
        let Some(value) = document.get(field) else {
            continue;
        };
        let Value::Array(elements) = value else {
            return Err(ValidationError::NotAnArray { field });
        };

        for (index, element) in elements.iter().enumerate() {
            let Value::Object(resource) = element else {
                continue;
            };

            let Some(id) = resource.get("id") else {
                return Err(ValidationError::MissingId { field, index });
            };
            let Value::String(id) = id else {
                return Err(ValidationError::IdNotAString { field, index });
            };
            if !id.starts_with('#') {
                return Err(ValidationError::IdNotRelative {
                    field,
                    index,
                    id: id.clone(),
                });
            }
            if !resource.contains_key("type") {
                return Err(ValidationError::MissingType { field, index });
            }
        }
    }

    Ok(())
}
