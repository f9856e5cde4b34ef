//! JSON-LD serializer for the vocabulary description.
//!
//! Produces a single JSON-LD document containing an `@context` and an
//! `@graph` array with every kind (as `owl:Class`) and every property (as an
//! OWL object or datatype property) in module order.

use serde_json::{json, Map, Value};

use crate::model::{iris, Kind, Property, Shape, Vocabulary};

/// Serializes the vocabulary to a JSON-LD `Value`.
///
/// The returned value can be pretty-printed with [`serde_json::to_string_pretty`].
#[must_use]
pub fn to_json_ld(vocabulary: &Vocabulary) -> Value {
    json!({
        "@context": build_context(),
        "@graph": build_graph(vocabulary)
    })
}

fn build_context() -> Value {
    let mut ctx = Map::new();
    ctx.insert("as".to_owned(), json!(iris::AS));
    ctx.insert("ldp".to_owned(), json!(iris::LDP));
    ctx.insert("owl".to_owned(), json!(iris::OWL));
    ctx.insert("rdf".to_owned(), json!(iris::RDF));
    ctx.insert("rdfs".to_owned(), json!(iris::RDFS));
    ctx.insert("xsd".to_owned(), json!(iris::XSD));
    Value::Object(ctx)
}

fn build_graph(vocabulary: &Vocabulary) -> Value {
    let mut nodes: Vec<Value> = Vec::new();

    nodes.push(json!({
        "@id": vocabulary.base_iri,
        "@type": "owl:Ontology",
        "rdfs:label": "Activity Streams",
        "owl:versionInfo": vocabulary.version
    }));

    for module in &vocabulary.modules {
        for kind in &module.kinds {
            nodes.push(kind_to_json(vocabulary, kind));
        }
        for property in &module.properties {
            nodes.push(property_to_json(vocabulary, property));
        }
    }

    Value::Array(nodes)
}

fn kind_to_json(vocabulary: &Vocabulary, kind: &Kind) -> Value {
    let subclass_of: Vec<Value> = kind
        .extends
        .iter()
        .filter_map(|name| vocabulary.find_kind(name))
        .map(|parent| json!({ "@id": shorten_iri(parent.id) }))
        .collect();

    let mut node = json!({
        "@id": shorten_iri(kind.id),
        "@type": "owl:Class",
        "rdfs:label": kind.name,
        "rdfs:comment": kind.comment
    });
    if !subclass_of.is_empty() {
        node["rdfs:subClassOf"] = Value::Array(subclass_of);
    }
    node
}

fn property_to_json(vocabulary: &Vocabulary, property: &Property) -> Value {
    let relates_resources = property
        .range
        .iter()
        .any(|shape| matches!(shape, Shape::Entity(_) | Shape::Reference));
    let base = if relates_resources {
        "owl:ObjectProperty"
    } else {
        "owl:DatatypeProperty"
    };
    let type_ = if property.functional {
        json!([base, "owl:FunctionalProperty"])
    } else {
        json!(base)
    };

    let domain: Vec<Value> = property
        .domain
        .iter()
        .filter_map(|name| vocabulary.find_kind(name))
        .map(|kind| json!({ "@id": shorten_iri(kind.id) }))
        .collect();

    // Keep range order: it is the resolution priority of the property.
    let mut range: Vec<Value> = Vec::new();
    for shape in property.range {
        let id = match shape {
            Shape::Entity(role) => format!("as:{}", role.as_str()),
            Shape::Reference => "xsd:anyURI".to_owned(),
            Shape::Literal(kind) => kind.datatype().to_owned(),
        };
        let entry = json!({ "@id": id });
        if !range.contains(&entry) {
            range.push(entry);
        }
    }

    json!({
        "@id": shorten_iri(property.id),
        "@type": type_,
        "rdfs:label": property.name,
        "rdfs:comment": property.comment,
        "rdfs:domain": domain,
        "rdfs:range": { "@list": range }
    })
}

/// Shortens a full IRI to a prefixed form using the known prefixes.
fn shorten_iri(iri: &str) -> String {
    const PREFIXES: &[(&str, &str)] = &[(iris::AS, "as:"), (iris::LDP, "ldp:")];
    for (full, prefix) in PREFIXES {
        if let Some(local) = iri.strip_prefix(full) {
            return format!("{prefix}{local}");
        }
    }
    iri.to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vocabulary;

    #[test]
    fn produces_context_and_graph() {
        let json = to_json_ld(Vocabulary::full());
        assert!(json["@context"].is_object());
        assert!(json["@graph"].is_array());
    }

    #[test]
    fn graph_has_every_kind_and_property() {
        let vocabulary = Vocabulary::full();
        let json = to_json_ld(vocabulary);
        let graph = json["@graph"].as_array().expect("@graph must be array");
        // ontology node + 54 kinds + 72 properties
        assert_eq!(
            graph.len(),
            1 + vocabulary.kind_count() + vocabulary.property_count()
        );
    }

    #[test]
    fn all_nodes_have_ids() {
        let json = to_json_ld(Vocabulary::full());
        let graph = json["@graph"].as_array().expect("@graph must be array");
        for (i, node) in graph.iter().enumerate() {
            assert!(!node["@id"].is_null(), "Node at index {i} is missing @id");
        }
    }

    #[test]
    fn functional_properties_are_marked() {
        let json = to_json_ld(Vocabulary::full());
        let graph = json["@graph"].as_array().expect("@graph must be array");
        let published = graph
            .iter()
            .find(|n| n["@id"] == "as:published")
            .expect("as:published present");
        assert_eq!(
            published["@type"],
            json!(["owl:DatatypeProperty", "owl:FunctionalProperty"])
        );
        let attachment = graph
            .iter()
            .find(|n| n["@id"] == "as:attachment")
            .expect("as:attachment present");
        assert_eq!(attachment["@type"], json!("owl:ObjectProperty"));
        assert_eq!(
            attachment["rdfs:range"]["@list"],
            json!([{ "@id": "as:Object" }, { "@id": "as:Link" }, { "@id": "xsd:anyURI" }])
        );
    }

    #[test]
    fn inbox_uses_ldp_prefix() {
        let json = to_json_ld(Vocabulary::full());
        let graph = json["@graph"].as_array().expect("@graph must be array");
        assert!(graph.iter().any(|n| n["@id"] == "ldp:inbox"));
    }
}
