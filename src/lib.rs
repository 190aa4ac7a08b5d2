//! # Domain Kit
//!
//! Building blocks for rich domain models following Entity / Value Object /
//! Aggregate patterns:
//! - **Identifiers**: UUID-backed identity with short fixed-length tokens
//! - **Entity**: Types with identity and lifecycle timestamps
//! - **Cursor**: Bidirectional traversal with direction-reversal replay and
//!   wraparound
//! - **History**: Token-addressable undo/redo log of property snapshots
//! - **Mapper**: Recursive structural flattening of object graphs into
//!   plain serializable data
//!
//! ## Design Principles
//!
//! 1. **Type Safety**: Phantom-typed IDs and a closed shape union give
//!    compile-time guarantees where the patterns traditionally rely on
//!    runtime type predicates
//! 2. **Total Operations**: Traversal, history navigation and flattening
//!    never fail; boundaries are `None`, collisions self-heal
//! 3. **Exclusive Ownership**: Every history owns its cursor, every cursor
//!    owns its backing sequence; nothing is shared or locked
//! 4. **Domain Alignment**: Types reflect model concepts, not storage or
//!    transport details

#![warn(missing_docs)]

mod cursor;
mod entity;
mod errors;
mod history;
mod identifiers;
mod mapper;

// Re-export core types
pub use cursor::{Cursor, CursorConfig};
pub use entity::{
    AggregateMarker, DomainEntity, Entity, EntityId, EntityMarker, ValueObjectMarker,
};
pub use errors::{DomainError, DomainResult};
pub use history::{History, HistoryAction, HistoryEntry, SnapshotOptions};
pub use identifiers::{Token, Uid, TOKEN_LEN};
pub use mapper::{map_entity, map_value_object, Bag, DomainValue, EntityShape, Props, ToPlain};
