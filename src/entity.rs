//! Entity types with identity and lifecycle

use crate::identifiers::Uid;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;
use uuid::Uuid;

/// A generic entity with a typed ID
///
/// Entities are domain objects with identity that persists across time.
/// They have a lifecycle with creation and update timestamps. Concrete
/// domain types embed one of these next to their property bag and feed the
/// bag to a `History` on every mutation.
///
/// # Examples
///
/// ```rust
/// use domain_kit::{Entity, EntityId};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// struct Customer;
///
/// let customer = Entity::<Customer>::new();
/// assert_eq!(customer.created_at, customer.updated_at);
///
/// let id = EntityId::<Customer>::new();
/// let customer = Entity::with_id(id);
/// assert_eq!(customer.id, id);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity<T> {
    /// The unique identifier for this entity
    pub id: EntityId<T>,
    /// When this entity was created
    pub created_at: DateTime<Utc>,
    /// When this entity was last updated
    pub updated_at: DateTime<Utc>,
}

impl<T> Entity<T> {
    /// Create a new entity with a generated ID
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: EntityId::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Create an entity with a specific ID
    pub fn with_id(id: EntityId<T>) -> Self {
        let now = Utc::now();
        Self {
            id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Update the entity's timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl<T> Default for Entity<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A typed entity ID using phantom types for type safety
///
/// These IDs are globally unique and persistent. The phantom type
/// parameter ensures that IDs for different entity types cannot be
/// mixed up at compile time.
///
/// # Examples
///
/// ```rust
/// use domain_kit::EntityId;
///
/// struct User;
/// struct Product;
///
/// let user_id = EntityId::<User>::new();
/// let product_id = EntityId::<Product>::new();
///
/// // These are different types - won't compile if mixed up:
/// // let _: EntityId<User> = product_id; // ERROR!
///
/// // But you can explicitly cast if needed (use carefully):
/// let casted: EntityId<Product> = user_id.cast();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId<T> {
    id: Uid,
    #[serde(skip)]
    _phantom: PhantomData<T>,
}

impl<T> EntityId<T> {
    /// Create a new random entity ID
    pub fn new() -> Self {
        Self {
            id: Uid::new(),
            _phantom: PhantomData,
        }
    }

    /// Create an entity ID from a UUID
    pub fn from_uuid(id: Uuid) -> Self {
        Self {
            id: Uid::from_uuid(id),
            _phantom: PhantomData,
        }
    }

    /// Get the untyped identifier
    pub fn as_uid(&self) -> Uid {
        self.id
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        self.id.as_uuid()
    }

    /// Convert to a different entity ID type (use with caution)
    pub fn cast<U>(self) -> EntityId<U> {
        EntityId {
            id: self.id,
            _phantom: PhantomData,
        }
    }
}

impl<T> fmt::Display for EntityId<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl<T> Default for EntityId<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<EntityId<T>> for Uid {
    fn from(id: EntityId<T>) -> Self {
        id.id
    }
}

/// Trait for domain entities with identity
pub trait DomainEntity: Sized {
    /// The marker type for this entity
    type IdType;

    /// Get the entity's ID
    fn id(&self) -> EntityId<Self::IdType>;
}

// Marker types for entity IDs
/// Marker for aggregate entities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AggregateMarker;

/// Marker for entity references
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityMarker;

/// Marker for value object containers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValueObjectMarker;
