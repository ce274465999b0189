//! Component attachment and property assignment

use super::catalogue::ComponentSpec;
use crate::error::{ScaffoldError, ScaffoldResult};
use crate::host::{ComponentId, EntityId, HostSceneApi, PropertyValue};
use crate::report::RunContext;

/// Attaches components by type name and applies their properties
pub struct ComponentConfigurator;

impl ComponentConfigurator {
    /// Attach a component of the named type to an entity.
    ///
    /// An unknown type name is an expected outcome (the plugin providing it may
    /// not be enabled) and yields [`ScaffoldError::ComponentTypeNotFound`].
    pub fn attach<H: HostSceneApi + ?Sized>(
        host: &mut H,
        role: &str,
        entity: EntityId,
        type_name: &str,
    ) -> ScaffoldResult<ComponentId> {
        let types = host.find_component_types(&[type_name]);
        if types.is_empty() {
            return Err(ScaffoldError::ComponentTypeNotFound {
                role: role.to_string(),
                component: type_name.to_string(),
            });
        }

        let attach_failed = |reason: String| ScaffoldError::ComponentAttachFailed {
            role: role.to_string(),
            component: type_name.to_string(),
            reason,
        };
        let added = host
            .add_components(entity, &types)
            .map_err(|e| attach_failed(e.to_string()))?;
        added
            .first()
            .copied()
            .ok_or_else(|| attach_failed("host attached nothing".to_string()))
    }

    /// Assign one property. Returns the host's verdict unchanged.
    pub fn set_property<H: HostSceneApi + ?Sized>(
        host: &mut H,
        component: ComponentId,
        path: &str,
        value: &PropertyValue,
    ) -> bool {
        host.set_property(component, path, value)
    }

    /// Attach a component and apply every property of its spec.
    ///
    /// Each property is attempted regardless of earlier failures. Returns the
    /// number of properties the host accepted, or `None` when the component
    /// could not be attached.
    pub fn configure<H: HostSceneApi + ?Sized>(
        host: &mut H,
        context: &mut RunContext,
        role: &str,
        entity: EntityId,
        spec: &ComponentSpec,
    ) -> Option<usize> {
        let component = match Self::attach(host, role, entity, spec.type_name) {
            Ok(component) => {
                log::info!("  ✓ Added component: {}", spec.type_name);
                context.record(format!("attach:{role}/{}", spec.type_name), Ok(()));
                component
            }
            Err(error) => {
                log::warn!("  ✗ {error}");
                context.record(format!("attach:{role}/{}", spec.type_name), Err(&error));
                return None;
            }
        };

        let mut accepted = 0;
        for (path, value) in &spec.properties {
            let step = format!("property:{role}/{}/{path}", spec.type_name);
            if Self::set_property(host, component, path, value) {
                log::info!("    ✓ Set property: {path}");
                context.record(step, Ok(()));
                accepted += 1;
            } else {
                let error = ScaffoldError::PropertySetFailed {
                    role: role.to_string(),
                    component: spec.type_name.to_string(),
                    path: (*path).to_string(),
                };
                log::warn!("    ✗ Failed to set property: {path}");
                context.record(step, Err(&error));
            }
        }
        Some(accepted)
    }
}
