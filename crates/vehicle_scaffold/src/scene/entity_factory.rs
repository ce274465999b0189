//! Entity creation

use crate::error::{ScaffoldError, ScaffoldResult};
use crate::host::{EntityId, HostSceneApi};
use crate::report::RunContext;

/// Creates named entities and registers them under their role
///
/// No retries: the host is an in-process call, so a refusal is final for the
/// step that asked.
pub struct EntityFactory;

impl EntityFactory {
    /// Create an entity, register it in the run context, and name it.
    ///
    /// Records a `create:<role>` step either way. Once the host has created
    /// the entity it stays registered, and a refused name is recorded as a
    /// separate failed `name:<role>` step while the handle is still returned.
    pub fn create<H: HostSceneApi + ?Sized>(
        host: &mut H,
        context: &mut RunContext,
        role: &str,
        name: &str,
        parent: Option<EntityId>,
    ) -> ScaffoldResult<EntityId> {
        let step = format!("create:{role}");
        let id = match host.create_entity(parent) {
            Ok(id) => id,
            Err(reason) => {
                let error = ScaffoldError::CreationFailed {
                    role: role.to_string(),
                    entity: None,
                    reason,
                };
                log::warn!("✗ {error}");
                context.record(step, Err(&error));
                return Err(error);
            }
        };
        context.registry.insert(role, id);
        context.record(step, Ok(()));

        let step = format!("name:{role}");
        match host.set_name(id, name) {
            Ok(()) => {
                log::info!("✓ Created entity: {name}");
                context.record(step, Ok(()));
            }
            Err(reason) => {
                let error = ScaffoldError::CreationFailed {
                    role: role.to_string(),
                    entity: Some(id),
                    reason,
                };
                log::warn!("✗ Created entity {id} but could not name it {name}: {error}");
                context.record(step, Err(&error));
            }
        }
        Ok(id)
    }
}
