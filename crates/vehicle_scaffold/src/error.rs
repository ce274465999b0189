//! Scaffold error taxonomy

use crate::host::{EntityId, HostError};
use std::path::PathBuf;
use thiserror::Error;

/// Coordinate space a transform was assigned in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransformSpace {
    /// World space
    World,
    /// Parent-relative space
    Local,
}

impl std::fmt::Display for TransformSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::World => f.write_str("world"),
            Self::Local => f.write_str("local"),
        }
    }
}

/// Everything that can go wrong while scaffolding
///
/// All variants except [`ScaffoldError::FatalRunError`] are recovered by the
/// step that produced them and only end up in the run report.
#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// The host refused to create or name an entity
    #[error("failed to create entity for role '{role}': {reason}")]
    CreationFailed {
        /// Logical role of the entity
        role: String,
        /// The entity, when it exists but could not be named
        entity: Option<EntityId>,
        /// Host-reported reason
        reason: HostError,
    },

    /// The requested component type is not available in this host
    #[error("could not find component: {component} (role '{role}')")]
    ComponentTypeNotFound {
        /// Logical role of the entity
        role: String,
        /// Requested component type name
        component: String,
    },

    /// The component type resolved but attaching it failed
    #[error("failed to attach component {component} to role '{role}': {reason}")]
    ComponentAttachFailed {
        /// Logical role of the entity
        role: String,
        /// Component type name
        component: String,
        /// Host-reported reason
        reason: String,
    },

    /// The host rejected a property assignment
    #[error("failed to set property: {path} on {component} (role '{role}')")]
    PropertySetFailed {
        /// Logical role of the entity
        role: String,
        /// Component type name
        component: String,
        /// Property path
        path: String,
    },

    /// The host rejected a transform assignment
    #[error("failed to set {space} transform of role '{role}': {reason}")]
    TransformRejected {
        /// Logical role of the entity
        role: String,
        /// Space the transform was assigned in
        space: TransformSpace,
        /// Host-reported reason
        reason: HostError,
    },

    /// Two input bindings share a name
    #[error("duplicate input binding name: {name}")]
    DuplicateBinding {
        /// The repeated name
        name: String,
    },

    /// Writing an artifact to disk failed
    #[error("failed to write {artifact} to {}: {source}", .path.display())]
    ArtifactWriteFailed {
        /// Artifact label
        artifact: String,
        /// Target path
        path: PathBuf,
        /// Underlying cause
        #[source]
        source: std::io::Error,
    },

    /// Something escaped every step boundary
    #[error("setup failed: {0}")]
    FatalRunError(String),
}

/// Fieldless mirror of [`ScaffoldError`] stored in step results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// See [`ScaffoldError::CreationFailed`]
    CreationFailed,
    /// See [`ScaffoldError::ComponentTypeNotFound`]
    ComponentTypeNotFound,
    /// See [`ScaffoldError::ComponentAttachFailed`]
    ComponentAttachFailed,
    /// See [`ScaffoldError::PropertySetFailed`]
    PropertySetFailed,
    /// See [`ScaffoldError::TransformRejected`]
    TransformRejected,
    /// See [`ScaffoldError::DuplicateBinding`]
    DuplicateBinding,
    /// See [`ScaffoldError::ArtifactWriteFailed`]
    ArtifactWriteFailed,
    /// See [`ScaffoldError::FatalRunError`]
    FatalRunError,
}

impl ScaffoldError {
    /// Kind of this error
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::CreationFailed { .. } => FailureKind::CreationFailed,
            Self::ComponentTypeNotFound { .. } => FailureKind::ComponentTypeNotFound,
            Self::ComponentAttachFailed { .. } => FailureKind::ComponentAttachFailed,
            Self::PropertySetFailed { .. } => FailureKind::PropertySetFailed,
            Self::TransformRejected { .. } => FailureKind::TransformRejected,
            Self::DuplicateBinding { .. } => FailureKind::DuplicateBinding,
            Self::ArtifactWriteFailed { .. } => FailureKind::ArtifactWriteFailed,
            Self::FatalRunError(_) => FailureKind::FatalRunError,
        }
    }
}

/// Result alias for scaffold operations
pub type ScaffoldResult<T> = Result<T, ScaffoldError>;
