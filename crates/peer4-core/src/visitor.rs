//! # Document Visitor — Fixed-Schema Traversal
//!
//! A replaceable-strategy walk over the document's fixed shape. The
//! schema has exactly three node kinds — objects with an id, relationship
//! entries (reference or embedded), and the root — so this is not a
//! recursive tree walk: [`visit_document`] performs a fixed six-field
//! dispatch and never recurses.
//!
//! Hooks dispatch in two levels, generic then specific. A strategy can
//! apply one rule to every embedded value via
//! [`DocumentVisitor::visit_value_with_id`] while still refining a single
//! relationship via its per-relationship hook. All hooks default to
//! identity, so a strategy overrides only what it needs.
//!
//! Each visited field is rebuilt in visitation order and re-inserted;
//! absent fields stay absent, and a field that rebuilds to an empty array
//! is dropped from the output.

use serde_json::Value;

use crate::document::{Document, Relationship, VerificationMethodOrRef};

/// Per-node-kind hooks for [`visit_document`]. Every hook defaults to
/// identity.
pub trait DocumentVisitor {
    /// Any object carrying an id: verification methods, embedded
    /// verification methods, and services.
    fn visit_value_with_id(&mut self, value: Document) -> Document {
        value
    }

    /// An entry of the `verificationMethod` list.
    fn visit_verification_method(&mut self, value: Document) -> Document {
        value
    }

    /// An entry of the `service` list.
    fn visit_service(&mut self, value: Document) -> Document {
        value
    }

    /// A reference entry of any relationship field.
    fn visit_relationship_ref(&mut self, value: String) -> String {
        value
    }

    /// An embedded entry of any relationship field.
    fn visit_relationship_embedded(&mut self, value: Document) -> Document {
        value
    }

    /// A reference entry of `authentication`.
    fn visit_authentication_ref(&mut self, value: String) -> String {
        value
    }

    /// An embedded entry of `authentication`.
    fn visit_authentication_embedded(&mut self, value: Document) -> Document {
        value
    }

    /// A reference entry of `assertionMethod`.
    fn visit_assertion_method_ref(&mut self, value: String) -> String {
        value
    }

    /// An embedded entry of `assertionMethod`.
    fn visit_assertion_method_embedded(&mut self, value: Document) -> Document {
        value
    }

    /// A reference entry of `keyAgreement`.
    fn visit_key_agreement_ref(&mut self, value: String) -> String {
        value
    }

    /// An embedded entry of `keyAgreement`.
    fn visit_key_agreement_embedded(&mut self, value: Document) -> Document {
        value
    }

    /// A reference entry of `capabilityDelegation`.
    fn visit_capability_delegation_ref(&mut self, value: String) -> String {
        value
    }

    /// An embedded entry of `capabilityDelegation`.
    fn visit_capability_delegation_embedded(&mut self, value: Document) -> Document {
        value
    }

    /// A reference entry of `capabilityInvocation`.
    fn visit_capability_invocation_ref(&mut self, value: String) -> String {
        value
    }

    /// An embedded entry of `capabilityInvocation`.
    fn visit_capability_invocation_embedded(&mut self, value: Document) -> Document {
        value
    }
}

/// Walk a document, dispatching each collection entry through the
/// visitor's hooks, and return the rebuilt document.
///
/// The walk takes ownership for its duration and replaces each visited
/// field wholesale with the freshly rebuilt sequence; element order is
/// preserved. Fields whose value is not an array, and elements that are
/// neither strings nor objects, pass through untouched.
pub fn visit_document<V: DocumentVisitor>(mut document: Document, visitor: &mut V) -> Document {
    if let Some(values) = take_collection(&mut document, "verificationMethod") {
        let rebuilt: Vec<Value> = values
            .into_iter()
            .map(|value| match value {
                Value::Object(map) => {
                    let map = visitor.visit_value_with_id(map);
                    Value::Object(visitor.visit_verification_method(map))
                }
                other => other,
            })
            .collect();
        put_collection(&mut document, "verificationMethod", rebuilt);
    }

    if let Some(values) = take_collection(&mut document, "service") {
        let rebuilt: Vec<Value> = values
            .into_iter()
            .map(|value| match value {
                Value::Object(map) => {
                    let map = visitor.visit_value_with_id(map);
                    Value::Object(visitor.visit_service(map))
                }
                other => other,
            })
            .collect();
        put_collection(&mut document, "service", rebuilt);
    }

    for relationship in Relationship::ALL {
        visit_relationship(&mut document, relationship, visitor);
    }

    document
}

fn visit_relationship<V: DocumentVisitor>(
    document: &mut Document,
    relationship: Relationship,
    visitor: &mut V,
) {
    let Some(values) = take_collection(document, relationship.as_str()) else {
        return;
    };

    let rebuilt: Vec<Value> = values
        .into_iter()
        .map(|value| match VerificationMethodOrRef::from_value(value) {
            Ok(VerificationMethodOrRef::Reference(reference)) => {
                let reference = visitor.visit_relationship_ref(reference);
                let reference = match relationship {
                    Relationship::Authentication => visitor.visit_authentication_ref(reference),
                    Relationship::AssertionMethod => visitor.visit_assertion_method_ref(reference),
                    Relationship::KeyAgreement => visitor.visit_key_agreement_ref(reference),
                    Relationship::CapabilityDelegation => {
                        visitor.visit_capability_delegation_ref(reference)
                    }
                    Relationship::CapabilityInvocation => {
                        visitor.visit_capability_invocation_ref(reference)
                    }
                };
                Value::String(reference)
            }
            Ok(VerificationMethodOrRef::Embedded(map)) => {
                let map = visitor.visit_value_with_id(map);
                let map = visitor.visit_relationship_embedded(map);
                let map = match relationship {
                    Relationship::Authentication => visitor.visit_authentication_embedded(map),
                    Relationship::AssertionMethod => visitor.visit_assertion_method_embedded(map),
                    Relationship::KeyAgreement => visitor.visit_key_agreement_embedded(map),
                    Relationship::CapabilityDelegation => {
                        visitor.visit_capability_delegation_embedded(map)
                    }
                    Relationship::CapabilityInvocation => {
                        visitor.visit_capability_invocation_embedded(map)
                    }
                };
                Value::Object(map)
            }
            Err(other) => other,
        })
        .collect();

    put_collection(document, relationship.as_str(), rebuilt);
}

/// Remove `key` if its value is an array, preserving the relative order
/// of the remaining keys.
fn take_collection(document: &mut Document, key: &str) -> Option<Vec<Value>> {
    if !matches!(document.get(key), Some(Value::Array(_))) {
        return None;
    }
    match document.shift_remove(key) {
        Some(Value::Array(values)) => Some(values),
        _ => None,
    }
}

/// Re-insert a rebuilt collection unless it is empty.
fn put_collection(document: &mut Document, key: &str, values: Vec<Value>) {
    if !values.is_empty() {
        document.insert(key.to_owned(), Value::Array(values));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn document(value: Value) -> Document {
        match value {
            Value::Object(document) => document,
            _ => unreachable!(),
        }
    }

    /// Identity strategy: nothing overridden.
    struct Identity;
    impl DocumentVisitor for Identity {}

    /// Records every hook invocation in order.
    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl DocumentVisitor for Recorder {
        fn visit_value_with_id(&mut self, value: Document) -> Document {
            self.calls.push(format!("value_with_id:{}", id_of(&value)));
            value
        }
        fn visit_verification_method(&mut self, value: Document) -> Document {
            self.calls.push(format!("vm:{}", id_of(&value)));
            value
        }
        fn visit_service(&mut self, value: Document) -> Document {
            self.calls.push(format!("service:{}", id_of(&value)));
            value
        }
        fn visit_relationship_ref(&mut self, value: String) -> String {
            self.calls.push(format!("rel_ref:{value}"));
            value
        }
        fn visit_relationship_embedded(&mut self, value: Document) -> Document {
            self.calls.push(format!("rel_embedded:{}", id_of(&value)));
            value
        }
        fn visit_authentication_ref(&mut self, value: String) -> String {
            self.calls.push(format!("auth_ref:{value}"));
            value
        }
        fn visit_authentication_embedded(&mut self, value: Document) -> Document {
            self.calls.push(format!("auth_embedded:{}", id_of(&value)));
            value
        }
    }

    fn id_of(value: &Document) -> String {
        value
            .get("id")
            .and_then(Value::as_str)
            .unwrap_or("?")
            .to_owned()
    }

    #[test]
    fn test_identity_walk_preserves_content() {
        let input = document(json!({
            "@context": ["https://www.w3.org/ns/did/v1"],
            "verificationMethod": [{"id": "#key-0", "type": "Multikey"}],
            "authentication": ["#key-0", {"id": "#key-1", "type": "Multikey"}],
            "service": [{"id": "#didcomm-0", "type": "DIDCommMessaging"}],
        }));
        let output = visit_document(input.clone(), &mut Identity);
        assert_eq!(output, input);
    }

    #[test]
    fn test_hooks_fire_generic_before_specific_in_declaration_order() {
        let input = document(json!({
            "verificationMethod": [{"id": "#key-0", "type": "Multikey"}],
            "authentication": ["#key-0", {"id": "#key-1", "type": "Multikey"}],
            "service": [{"id": "#didcomm-0", "type": "DIDCommMessaging"}],
        }));
        let mut recorder = Recorder::default();
        visit_document(input, &mut recorder);
        assert_eq!(
            recorder.calls,
            vec![
                "value_with_id:#key-0",
                "vm:#key-0",
                "value_with_id:#didcomm-0",
                "service:#didcomm-0",
                "rel_ref:#key-0",
                "auth_ref:#key-0",
                "value_with_id:#key-1",
                "rel_embedded:#key-1",
                "auth_embedded:#key-1",
            ]
        );
    }

    #[test]
    fn test_overriding_one_relationship_hook_touches_only_that_field() {
        struct RenameKeyAgreementRefs;
        impl DocumentVisitor for RenameKeyAgreementRefs {
            fn visit_key_agreement_ref(&mut self, _value: String) -> String {
                "#rewritten".to_owned()
            }
        }

        let input = document(json!({
            "authentication": ["#key-0"],
            "keyAgreement": ["#key-1"],
        }));
        let output = visit_document(input, &mut RenameKeyAgreementRefs);
        assert_eq!(output["authentication"], json!(["#key-0"]));
        assert_eq!(output["keyAgreement"], json!(["#rewritten"]));
    }

    #[test]
    fn test_absent_fields_stay_absent_and_empty_arrays_are_dropped() {
        let input = document(json!({
            "@context": ["https://www.w3.org/ns/did/v1"],
            "authentication": [],
        }));
        let output = visit_document(input, &mut Identity);
        assert!(!output.contains_key("verificationMethod"));
        assert!(!output.contains_key("authentication"));
        assert!(output.contains_key("@context"));
    }

    #[test]
    fn test_non_array_fields_and_odd_elements_pass_through() {
        let input = document(json!({
            "verificationMethod": "not an array",
            "authentication": ["#key-0", 42],
        }));
        let output = visit_document(input, &mut Identity);
        assert_eq!(output["verificationMethod"], json!("not an array"));
        assert_eq!(output["authentication"], json!(["#key-0", 42]));
    }

    #[test]
    fn test_element_order_is_preserved() {
        let input = document(json!({
            "authentication": ["#a", {"id": "#b", "type": "Multikey"}, "#c"],
        }));
        let output = visit_document(input, &mut Identity);
        assert_eq!(
            output["authentication"],
            json!(["#a", {"id": "#b", "type": "Multikey"}, "#c"])
        );
    }
}
