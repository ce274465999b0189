//! Initial entity placement

use super::catalogue::{InitialTransformSpec, TransformKind};
use crate::error::{ScaffoldError, TransformSpace};
use crate::foundation::math::{utils, Transform};
use crate::host::{EntityId, HostSceneApi};
use crate::report::RunContext;

/// Builds transforms from their declarative form and assigns them
pub struct TransformInitializer;

impl TransformInitializer {
    /// Build the transform a spec describes. Every other channel stays identity.
    pub fn build(kind: TransformKind) -> Transform {
        match kind {
            TransformKind::Translation(offset) => Transform::from_translation(offset),
            TransformKind::Scale(factors) => Transform::from_scale(factors),
            TransformKind::RotationEuler(degrees) => {
                Transform::from_rotation(utils::quat_from_euler_degrees(degrees))
            }
        }
    }

    /// Build and assign an initial transform, recording a `transform:<role>` step
    pub fn apply<H: HostSceneApi + ?Sized>(
        host: &mut H,
        context: &mut RunContext,
        role: &str,
        entity: EntityId,
        spec: &InitialTransformSpec,
    ) -> bool {
        let transform = Self::build(spec.kind);
        let assigned = match spec.space {
            TransformSpace::World => host.set_world_transform(entity, &transform),
            TransformSpace::Local => host.set_local_transform(entity, &transform),
        };

        let step = format!("transform:{role}");
        match assigned {
            Ok(()) => {
                log::debug!("  ✓ Set {} transform of {role}", spec.space);
                context.record(step, Ok(()))
            }
            Err(reason) => {
                let error = ScaffoldError::TransformRejected {
                    role: role.to_string(),
                    space: spec.space,
                    reason,
                };
                log::warn!("  ✗ {error}");
                context.record(step, Err(&error))
            }
        }
    }
}
