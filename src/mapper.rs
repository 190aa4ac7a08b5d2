// Copyright 2025 Cowboy AI, LLC.

//! Structural flattening of domain object graphs into plain data
//!
//! Domain objects describe themselves as a [`DomainValue`] - a closed set of
//! shapes (scalar, identifier, list, value object, entity) - and the mapper
//! folds that description into a plain [`serde_json::Value`]. Dispatch is an
//! exhaustive `match` over the shape tags, so adding a shape is a compile
//! error until every mapping arm handles it.
//!
//! The mapper is best-effort serialization, not validation: it never fails,
//! and the one lossy rule (an entity nested directly under an entity
//! property) drops the value silently. Validation belongs to the domain
//! layer that builds the shapes.

use crate::entity::Entity;
use crate::identifiers::Uid;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde_json::Value;

/// An ordered property bag
pub type Bag = IndexMap<String, DomainValue>;

/// The closed set of shapes a domain object graph is built from
#[derive(Debug, Clone, PartialEq)]
pub enum DomainValue {
    /// A leaf: primitive, date rendered RFC 3339, or plain JSON data
    Scalar(Value),
    /// An identifier, flattened to its string value
    Id(Uid),
    /// An ordered collection of any of these shapes
    List(Vec<DomainValue>),
    /// A value object: state without identity
    ValueObject(Props),
    /// An entity: a property bag plus identity and lifecycle metadata
    Entity(EntityShape),
}

/// The state of a value object
#[derive(Debug, Clone, PartialEq)]
pub enum Props {
    /// A single-value object whose entire state is one scalar
    Scalar(Value),
    /// A keyed bag of nested shapes
    Bag(Bag),
}

/// An entity's identity, lifecycle metadata and property bag
#[derive(Debug, Clone, PartialEq)]
pub struct EntityShape {
    /// The entity's identifier
    pub id: Uid,
    /// When the entity was created
    pub created_at: DateTime<Utc>,
    /// When the entity was last updated
    pub updated_at: DateTime<Utc>,
    /// The declared properties
    pub props: Bag,
}

impl EntityShape {
    /// Build a shape from raw parts
    pub fn new(id: Uid, created_at: DateTime<Utc>, updated_at: DateTime<Utc>, props: Bag) -> Self {
        Self {
            id,
            created_at,
            updated_at,
            props,
        }
    }

    /// Build a shape from an [`Entity`]'s metadata and a property bag
    pub fn from_meta<T>(meta: &Entity<T>, props: Bag) -> Self {
        Self {
            id: meta.id.as_uid(),
            created_at: meta.created_at,
            updated_at: meta.updated_at,
            props,
        }
    }
}

impl DomainValue {
    /// A date leaf, rendered RFC 3339
    pub fn date(when: DateTime<Utc>) -> Self {
        DomainValue::Scalar(Value::String(when.to_rfc3339()))
    }

    /// A list of shapes
    pub fn list(items: impl IntoIterator<Item = DomainValue>) -> Self {
        DomainValue::List(items.into_iter().collect())
    }

    /// A value object with a keyed bag of properties
    pub fn value_object<K: Into<String>>(
        entries: impl IntoIterator<Item = (K, DomainValue)>,
    ) -> Self {
        DomainValue::ValueObject(Props::Bag(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v))
                .collect(),
        ))
    }

    /// A single-value object whose whole state is one scalar
    pub fn single(value: impl Into<Value>) -> Self {
        DomainValue::ValueObject(Props::Scalar(value.into()))
    }

    /// An entity shape
    pub fn entity(shape: EntityShape) -> Self {
        DomainValue::Entity(shape)
    }
}

impl From<Value> for DomainValue {
    fn from(value: Value) -> Self {
        DomainValue::Scalar(value)
    }
}

impl From<bool> for DomainValue {
    fn from(value: bool) -> Self {
        DomainValue::Scalar(Value::from(value))
    }
}

impl From<i64> for DomainValue {
    fn from(value: i64) -> Self {
        DomainValue::Scalar(Value::from(value))
    }
}

impl From<f64> for DomainValue {
    fn from(value: f64) -> Self {
        DomainValue::Scalar(Value::from(value))
    }
}

impl From<&str> for DomainValue {
    fn from(value: &str) -> Self {
        DomainValue::Scalar(Value::from(value))
    }
}

impl From<String> for DomainValue {
    fn from(value: String) -> Self {
        DomainValue::Scalar(Value::from(value))
    }
}

impl From<Uid> for DomainValue {
    fn from(id: Uid) -> Self {
        DomainValue::Id(id)
    }
}

/// Flatten a shape the value-object way
///
/// Scalars pass through, identifiers unwrap to their string value, lists map
/// elementwise, and bags map each key by shape. A one-key bag collapses to
/// the bare mapped value, so a value object holding `{ value: "hello" }`
/// flattens to `"hello"`. An entity fed here flattens bag-only, without
/// metadata.
pub fn map_value_object(value: &DomainValue) -> Value {
    match value {
        DomainValue::Scalar(v) => v.clone(),
        DomainValue::Id(id) => Value::String(id.value()),
        DomainValue::List(items) => Value::Array(items.iter().map(map_value_object).collect()),
        DomainValue::ValueObject(props) => match props {
            Props::Scalar(v) => v.clone(),
            Props::Bag(bag) => map_bag(bag),
        },
        DomainValue::Entity(shape) => map_bag(&shape.props),
    }
}

/// Flatten a shape the entity way
///
/// An entity always yields an object carrying `id`, `createdAt` and
/// `updatedAt`, whatever its declared properties. List properties map
/// elementwise through this function (child entity collections keep their
/// metadata); scalar, identifier and value-object properties flatten via
/// [`map_value_object`]; an entity nested directly under a property is
/// dropped. Every other input delegates to [`map_value_object`].
pub fn map_entity(value: &DomainValue) -> Value {
    let shape = match value {
        DomainValue::Entity(shape) => shape,
        other => return map_value_object(other),
    };

    let mut out = serde_json::Map::new();
    for (key, prop) in &shape.props {
        match prop {
            DomainValue::List(items) => {
                out.insert(
                    key.clone(),
                    Value::Array(items.iter().map(map_entity).collect()),
                );
            }
            // a lone child entity has no plain representation here
            DomainValue::Entity(_) => {}
            other => {
                out.insert(key.clone(), map_value_object(other));
            }
        }
    }
    // metadata last: it wins over identically named declared properties
    out.insert("id".to_string(), Value::String(shape.id.value()));
    out.insert(
        "createdAt".to_string(),
        Value::String(shape.created_at.to_rfc3339()),
    );
    out.insert(
        "updatedAt".to_string(),
        Value::String(shape.updated_at.to_rfc3339()),
    );
    Value::Object(out)
}

fn map_bag(bag: &Bag) -> Value {
    // single-key collapse: { value: "hello" } flattens to "hello"
    if bag.len() == 1 {
        if let Some((_, only)) = bag.iter().next() {
            return map_value_object(only);
        }
    }
    let mut out = serde_json::Map::new();
    for (key, value) in bag {
        out.insert(key.clone(), map_value_object(value));
    }
    Value::Object(out)
}

/// The seam between concrete domain types and the mapper
///
/// A domain object describes itself as a [`DomainValue`] once; the provided
/// [`ToPlain::to_plain`] folds the description into plain data.
pub trait ToPlain {
    /// Describe this object as a shape graph
    fn to_domain_value(&self) -> DomainValue;

    /// Flatten this object into plain serializable data
    fn to_plain(&self) -> Value {
        map_entity(&self.to_domain_value())
    }
}
