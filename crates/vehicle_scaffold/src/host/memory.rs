//! Recording in-memory host
//!
//! Implements [`HostSceneApi`] without an editor. Every request is recorded so
//! the resulting scene can be inspected or dumped, and a few failure modes can
//! be switched on to exercise the scaffold's recovery paths.

use super::{ComponentId, ComponentTypeId, EntityId, HostError, HostSceneApi, PropertyValue};
use crate::foundation::math::Transform;
use crate::scene::catalogue::component_types;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

/// Recorded state of one component instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentRecord {
    /// Component handle
    pub id: ComponentId,
    /// Registered type name
    pub type_name: String,
    /// Properties in the order they were first assigned
    pub properties: Vec<(String, PropertyValue)>,
}

impl ComponentRecord {
    /// Look up an assigned property value
    pub fn property(&self, path: &str) -> Option<&PropertyValue> {
        self.properties
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, value)| value)
    }
}

/// Recorded state of one entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityRecord {
    /// Entity handle
    pub id: EntityId,
    /// Display name, empty until assigned
    pub name: String,
    /// Parent entity, if any
    pub parent: Option<EntityId>,
    /// Attached components in attachment order
    pub components: Vec<ComponentRecord>,
    /// Last world-space transform assigned
    pub world_transform: Option<Transform>,
    /// Last local-space transform assigned
    pub local_transform: Option<Transform>,
}

impl EntityRecord {
    /// Find the first attached component of a type
    pub fn component(&self, type_name: &str) -> Option<&ComponentRecord> {
        self.components.iter().find(|c| c.type_name == type_name)
    }

    /// Type names of the attached components
    pub fn component_types(&self) -> Vec<&str> {
        self.components.iter().map(|c| c.type_name.as_str()).collect()
    }
}

/// Serializable copy of everything the host has recorded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneSnapshot {
    /// Entities in creation order
    pub entities: Vec<EntityRecord>,
}

/// Deterministic in-memory implementation of [`HostSceneApi`]
#[derive(Debug, Clone)]
pub struct InMemoryHost {
    project_root: Option<PathBuf>,
    component_types: Vec<String>,
    entities: Vec<EntityRecord>,
    component_index: HashMap<ComponentId, (usize, usize)>,
    next_component_id: u64,
    rejected_paths: HashSet<String>,
    rejected_names: HashSet<String>,
    refuse_entities: bool,
    property_attempts: usize,
}

impl InMemoryHost {
    /// Create a host for the project at `project_root` that knows every
    /// component type the vehicle scaffold uses
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: Some(project_root.into()),
            component_types: component_types::ALL.iter().map(|s| (*s).to_string()).collect(),
            entities: Vec::new(),
            component_index: HashMap::new(),
            next_component_id: 1,
            rejected_paths: HashSet::new(),
            rejected_names: HashSet::new(),
            refuse_entities: false,
            property_attempts: 0,
        }
    }

    /// Make a component type unavailable, as if its plugin were not installed
    pub fn without_component_type(mut self, type_name: &str) -> Self {
        // Keep indices stable so already issued type ids stay valid
        for name in &mut self.component_types {
            if *name == type_name {
                name.clear();
            }
        }
        self
    }

    /// Reject every assignment to the given property path
    pub fn reject_property(mut self, path: impl Into<String>) -> Self {
        self.rejected_paths.insert(path.into());
        self
    }

    /// Refuse to give any entity the given display name
    pub fn reject_name(mut self, name: impl Into<String>) -> Self {
        self.rejected_names.insert(name.into());
        self
    }

    /// Refuse every entity creation request
    pub fn fail_entity_creation(mut self) -> Self {
        self.refuse_entities = true;
        self
    }

    /// Behave as if the editor had no project open
    pub fn without_project_root(mut self) -> Self {
        self.project_root = None;
        self
    }

    /// All recorded entities in creation order
    pub fn entities(&self) -> &[EntityRecord] {
        &self.entities
    }

    /// Look up a recorded entity by handle
    pub fn entity(&self, id: EntityId) -> Option<&EntityRecord> {
        self.entity_index(id).map(|idx| &self.entities[idx])
    }

    /// Look up the first recorded entity with a display name
    pub fn entity_by_name(&self, name: &str) -> Option<&EntityRecord> {
        self.entities.iter().find(|e| e.name == name)
    }

    /// Number of `set_property` calls received, successful or not
    pub fn property_attempts(&self) -> usize {
        self.property_attempts
    }

    /// Copy of the recorded scene
    pub fn snapshot(&self) -> SceneSnapshot {
        SceneSnapshot {
            entities: self.entities.clone(),
        }
    }

    fn entity_index(&self, id: EntityId) -> Option<usize> {
        // Entity ids are 1-based positions
        let idx = usize::try_from(id.0).ok()?.checked_sub(1)?;
        (idx < self.entities.len()).then_some(idx)
    }

    fn entity_mut(&mut self, id: EntityId) -> Result<&mut EntityRecord, HostError> {
        let idx = self.entity_index(id).ok_or(HostError::UnknownEntity(id))?;
        Ok(&mut self.entities[idx])
    }

    fn type_name(&self, id: ComponentTypeId) -> Option<&str> {
        let idx = usize::try_from(id.0).ok()?.checked_sub(1)?;
        self.component_types
            .get(idx)
            .map(String::as_str)
            .filter(|name| !name.is_empty())
    }
}

impl HostSceneApi for InMemoryHost {
    fn create_entity(&mut self, parent: Option<EntityId>) -> Result<EntityId, HostError> {
        if self.refuse_entities {
            return Err(HostError::Rejected("entity creation is disabled".to_string()));
        }
        if let Some(parent) = parent {
            if self.entity_index(parent).is_none() {
                return Err(HostError::UnknownEntity(parent));
            }
        }

        let id = EntityId(self.entities.len() as u64 + 1);
        self.entities.push(EntityRecord {
            id,
            name: String::new(),
            parent,
            components: Vec::new(),
            world_transform: None,
            local_transform: None,
        });
        log::debug!("host: created entity {id}");
        Ok(id)
    }

    fn set_name(&mut self, entity: EntityId, name: &str) -> Result<(), HostError> {
        if self.rejected_names.contains(name) {
            return Err(HostError::Rejected(format!("name '{name}' is not allowed")));
        }
        self.entity_mut(entity)?.name = name.to_string();
        Ok(())
    }

    fn find_component_types(&self, names: &[&str]) -> Vec<ComponentTypeId> {
        names
            .iter()
            .filter_map(|wanted| {
                self.component_types
                    .iter()
                    .position(|known| !known.is_empty() && known == wanted)
                    .map(|idx| ComponentTypeId(idx as u64 + 1))
            })
            .collect()
    }

    fn add_components(
        &mut self,
        entity: EntityId,
        types: &[ComponentTypeId],
    ) -> Result<Vec<ComponentId>, HostError> {
        let entity_idx = self.entity_index(entity).ok_or(HostError::UnknownEntity(entity))?;

        let mut type_names = Vec::with_capacity(types.len());
        for ty in types {
            let name = self
                .type_name(*ty)
                .ok_or_else(|| HostError::Rejected(format!("unknown component type {ty:?}")))?;
            type_names.push(name.to_string());
        }

        let mut added = Vec::with_capacity(type_names.len());
        for type_name in type_names {
            let id = ComponentId(self.next_component_id);
            self.next_component_id += 1;

            let components = &mut self.entities[entity_idx].components;
            self.component_index.insert(id, (entity_idx, components.len()));
            components.push(ComponentRecord {
                id,
                type_name,
                properties: Vec::new(),
            });
            added.push(id);
        }
        Ok(added)
    }

    fn set_property(&mut self, component: ComponentId, path: &str, value: &PropertyValue) -> bool {
        self.property_attempts += 1;

        let Some(&(entity_idx, component_idx)) = self.component_index.get(&component) else {
            return false;
        };
        if self.rejected_paths.contains(path) {
            return false;
        }

        let properties = &mut self.entities[entity_idx].components[component_idx].properties;
        match properties.iter_mut().find(|(p, _)| p == path) {
            Some((_, existing)) => *existing = value.clone(),
            None => properties.push((path.to_string(), value.clone())),
        }
        true
    }

    fn set_world_transform(&mut self, entity: EntityId, transform: &Transform) -> Result<(), HostError> {
        self.entity_mut(entity)?.world_transform = Some(transform.clone());
        Ok(())
    }

    fn set_local_transform(&mut self, entity: EntityId, transform: &Transform) -> Result<(), HostError> {
        self.entity_mut(entity)?.local_transform = Some(transform.clone());
        Ok(())
    }

    fn project_root(&self) -> Result<PathBuf, HostError> {
        self.project_root
            .clone()
            .ok_or_else(|| HostError::ProjectRootUnavailable("no project is open".to_string()))
    }
}
