//! Scaffold builder
//!
//! Walks the declarative catalogue and drives entity creation, component
//! configuration, and transform assignment for each entry. Entries are
//! independent: a failure while building one never stops the next.

use super::catalogue::{self, ScaffoldEntitySpec};
use super::component_configurator::ComponentConfigurator;
use super::entity_factory::EntityFactory;
use super::transform_initializer::TransformInitializer;
use crate::host::HostSceneApi;
use crate::report::RunContext;

/// Builds scaffold entities from a catalogue
pub struct SceneScaffoldBuilder {
    catalogue: Vec<ScaffoldEntitySpec>,
}

impl Default for SceneScaffoldBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneScaffoldBuilder {
    /// Builder for the vehicle combat camera scaffold
    pub fn new() -> Self {
        Self::with_catalogue(catalogue::vehicle_scaffold())
    }

    /// Builder for a custom catalogue
    pub fn with_catalogue(catalogue: Vec<ScaffoldEntitySpec>) -> Self {
        Self { catalogue }
    }

    /// Entries this builder will construct, in order
    pub fn catalogue(&self) -> &[ScaffoldEntitySpec] {
        &self.catalogue
    }

    /// Build every entry and hand the context back.
    ///
    /// The returned registry holds whatever was created, even when some steps
    /// failed; the recorded steps say which.
    pub fn build<H: HostSceneApi + ?Sized>(&self, host: &mut H, mut context: RunContext) -> RunContext {
        self.build_into(host, &mut context);
        context
    }

    /// Build every entry into a borrowed context
    pub fn build_into<H: HostSceneApi + ?Sized>(&self, host: &mut H, context: &mut RunContext) {
        for spec in &self.catalogue {
            Self::build_entity(host, context, spec);
        }
    }

    /// Build a single entry: create, configure components, place
    pub fn build_entity<H: HostSceneApi + ?Sized>(
        host: &mut H,
        context: &mut RunContext,
        spec: &ScaffoldEntitySpec,
    ) {
        log::info!("=== {} ===", spec.title);

        let Ok(entity) = EntityFactory::create(host, context, spec.role, spec.display_name, None) else {
            // Nothing to attach to
            return;
        };

        for component in &spec.components {
            ComponentConfigurator::configure(host, context, spec.role, entity, component);
        }

        if let Some(transform) = &spec.transform {
            TransformInitializer::apply(host, context, spec.role, entity, transform);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FailureKind;
    use crate::host::InMemoryHost;
    use crate::scene::catalogue::{component_types, roles};

    #[test]
    fn test_full_build_creates_every_role() {
        let mut host = InMemoryHost::new("/project");
        let context = SceneScaffoldBuilder::new().build(&mut host, RunContext::new());

        assert_eq!(context.registry.len(), 5);
        for role in roles::ALL {
            assert!(context.registry.get(role).is_some(), "missing {role}");
        }
        assert!(context.steps.iter().all(|s| s.success));
        assert_eq!(host.entities().len(), 5);
    }

    #[test]
    fn test_failed_creation_skips_only_that_entity() {
        let mut host = InMemoryHost::new("/project").fail_entity_creation();
        let context = SceneScaffoldBuilder::new().build(&mut host, RunContext::new());

        // One failed create step per role, nothing else attempted
        assert!(context.registry.is_empty());
        assert_eq!(context.steps.len(), 5);
        assert!(context.steps.iter().all(|s| s.kind == Some(FailureKind::CreationFailed)));
    }

    #[test]
    fn test_missing_script_canvas_does_not_block_later_roles() {
        let mut host = InMemoryHost::new("/project").without_component_type(component_types::SCRIPT_CANVAS);
        let context = SceneScaffoldBuilder::new().build(&mut host, RunContext::new());

        let failed: Vec<_> = context.steps.iter().filter(|s| !s.success).collect();
        assert_eq!(failed.len(), 1);
        assert_eq!(failed[0].step, "attach:manager/Script Canvas");

        let light = host.entity_by_name("DirectionalLight").unwrap();
        assert_eq!(light.component_types(), vec![component_types::DIRECTIONAL_LIGHT]);
        assert!(light.local_transform.is_some());
    }
}
