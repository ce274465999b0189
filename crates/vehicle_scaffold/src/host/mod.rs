//! Host editor contract
//!
//! The scaffold never talks to an editor directly. Everything it needs from the
//! host is expressed by [`HostSceneApi`]: one synchronous method per
//! capability. Handles returned by the host are opaque to the scaffold.

pub mod memory;

pub use memory::{InMemoryHost, SceneSnapshot};

use crate::foundation::math::{Transform, Vec3};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Opaque entity handle issued by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0)
    }
}

/// Opaque handle of a component instance attached to an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ComponentId(pub u64);

/// Opaque handle of a component type known to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ComponentTypeId(pub u64);

/// Typed literal assigned to a component property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyValue {
    /// Floating point scalar
    Float(f32),
    /// Integer scalar
    Int(i64),
    /// Boolean flag
    Bool(bool),
    /// 3-vector
    Vec3(Vec3),
    /// Text value
    Text(String),
    /// Composite value
    List(Vec<PropertyValue>),
}

impl From<f32> for PropertyValue {
    fn from(value: f32) -> Self {
        Self::Float(value)
    }
}

impl From<Vec3> for PropertyValue {
    fn from(value: Vec3) -> Self {
        Self::Vec3(value)
    }
}

/// Errors reported by a host implementation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    /// The host refused the request
    #[error("host rejected request: {0}")]
    Rejected(String),

    /// The entity handle is not known to the host
    #[error("unknown entity {0}")]
    UnknownEntity(EntityId),

    /// The component handle is not known to the host
    #[error("unknown component {0:?}")]
    UnknownComponent(ComponentId),

    /// The host could not report where the project lives
    #[error("project root unavailable: {0}")]
    ProjectRootUnavailable(String),
}

/// Synchronous scene editing capabilities consumed by the scaffold
pub trait HostSceneApi {
    /// Create a new, unnamed entity, optionally under a parent
    fn create_entity(&mut self, parent: Option<EntityId>) -> Result<EntityId, HostError>;

    /// Assign the display name of an entity
    fn set_name(&mut self, entity: EntityId, name: &str) -> Result<(), HostError>;

    /// Resolve component type names; names the host does not know are skipped
    fn find_component_types(&self, names: &[&str]) -> Vec<ComponentTypeId>;

    /// Attach one component of each given type to an entity
    fn add_components(
        &mut self,
        entity: EntityId,
        types: &[ComponentTypeId],
    ) -> Result<Vec<ComponentId>, HostError>;

    /// Assign a property on a component. Returns the host's success flag.
    fn set_property(&mut self, component: ComponentId, path: &str, value: &PropertyValue) -> bool;

    /// Assign the world-space transform of an entity
    fn set_world_transform(&mut self, entity: EntityId, transform: &Transform) -> Result<(), HostError>;

    /// Assign the parent-relative transform of an entity
    fn set_local_transform(&mut self, entity: EntityId, transform: &Transform) -> Result<(), HostError>;

    /// Root directory of the project the editor has open
    fn project_root(&self) -> Result<PathBuf, HostError>;
}
