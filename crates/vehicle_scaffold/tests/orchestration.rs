//! End-to-end runs of the scaffold against the in-memory host

use std::fs;
use std::path::PathBuf;

use approx::assert_relative_eq;
use vehicle_scaffold::foundation::math::{Quat, Transform, Vec3};
use vehicle_scaffold::host::{
    ComponentId, ComponentTypeId, EntityId, HostError, HostSceneApi, InMemoryHost, PropertyValue,
};
use vehicle_scaffold::scene::catalogue::{component_types, roles};
use vehicle_scaffold::config::{ScaffoldConfig, SuccessPolicy};
use vehicle_scaffold::FailureKind;

fn host_in(dir: &tempfile::TempDir) -> InMemoryHost {
    InMemoryHost::new(dir.path())
}

#[test]
fn test_full_run_with_working_host() {
    let dir = tempfile::tempdir().unwrap();
    let mut host = host_in(&dir);

    let report = vehicle_scaffold::run(&mut host, ScaffoldConfig::default());

    assert!(report.success);
    assert!(report.passed(SuccessPolicy::Strict));

    let created: Vec<_> = report.entities.iter().map(|(role, _)| role.as_str()).collect();
    assert_eq!(created, roles::ALL);

    let expected_files = [
        "Config/Input/vehicle_camera.inputbindings",
        "Gem/Code/Source/Components/VehicleCombatCameraComponent.h",
        "Gem/Code/Source/Components/VehicleCombatCameraComponent.cpp",
        "CAMERA_SETUP_README.md",
    ];
    let expected: Vec<PathBuf> = expected_files.iter().map(|f| dir.path().join(f)).collect();
    assert_eq!(report.artifacts, expected);
    for path in &expected {
        assert!(path.is_file(), "{} was not written", path.display());
    }
}

#[test]
fn test_entities_named_and_placed() {
    let dir = tempfile::tempdir().unwrap();
    let mut host = host_in(&dir);
    let report = vehicle_scaffold::run(&mut host, ScaffoldConfig::default());

    let named = |role: &str, name: &str| {
        let entity = host.entity(report.entity(role).unwrap()).unwrap();
        assert_eq!(entity.name, name);
        entity.clone()
    };

    let camera = named(roles::CAMERA, "VehicleCamera");
    assert_eq!(
        camera.world_transform,
        Some(Transform::from_translation(Vec3::new(0.0, -10.0, 5.0)))
    );
    let fov = camera.component(component_types::CAMERA).unwrap().property("Field of View");
    assert_eq!(fov, Some(&PropertyValue::Float(90.0)));

    let vehicle = named(roles::VEHICLE, "PlayerVehicle");
    assert_eq!(
        vehicle.world_transform,
        Some(Transform::from_translation(Vec3::new(0.0, 0.0, 1.0)))
    );
    assert_eq!(
        vehicle.component_types(),
        vec![component_types::MESH, component_types::RIGID_BODY, component_types::COLLIDER]
    );

    let manager = named(roles::MANAGER, "GameManager");
    assert!(manager.world_transform.is_none() && manager.local_transform.is_none());

    let ground = named(roles::GROUND, "GroundPlane");
    assert_eq!(
        ground.local_transform,
        Some(Transform::from_scale(Vec3::new(100.0, 100.0, 1.0)))
    );

    let light = named(roles::LIGHT, "DirectionalLight");
    let rotation = light.local_transform.unwrap().rotation;
    let expected = Quat::from_axis_angle(&Vec3::x_axis(), (-45.0_f32).to_radians());
    assert_relative_eq!(rotation.angle_to(&expected), 0.0, epsilon = 1e-5);
}

#[test]
fn test_missing_rigid_body_type() {
    let dir = tempfile::tempdir().unwrap();
    let mut host = host_in(&dir).without_component_type(component_types::RIGID_BODY);

    let report = vehicle_scaffold::run(&mut host, ScaffoldConfig::default());

    let missing: Vec<_> = report.failures_of(FailureKind::ComponentTypeNotFound).collect();
    assert_eq!(missing.len(), 1);
    assert_eq!(missing[0].step, "attach:vehicle/PhysX Rigid Body");

    let vehicle = host.entity_by_name("PlayerVehicle").unwrap();
    assert_eq!(
        vehicle.component_types(),
        vec![component_types::MESH, component_types::COLLIDER]
    );
    assert!(vehicle.world_transform.is_some());

    // Later entities are untouched by the failure
    assert_eq!(report.entities.len(), 5);
    assert!(host.entity_by_name("GroundPlane").unwrap().local_transform.is_some());

    assert!(report.passed(SuccessPolicy::BestEffort));
    assert!(!report.passed(SuccessPolicy::Strict));
}

#[test]
fn test_unnamed_entity_is_still_reported() {
    let dir = tempfile::tempdir().unwrap();
    let mut host = host_in(&dir).reject_name("PlayerVehicle");

    let report = vehicle_scaffold::run(&mut host, ScaffoldConfig::default());

    assert_eq!(host.entities().len(), 5);
    assert_eq!(report.entities.len(), 5);

    let naming: Vec<_> = report.failures_of(FailureKind::CreationFailed).collect();
    assert_eq!(naming.len(), 1);
    assert_eq!(naming[0].step, "name:vehicle");

    // The unnamed vehicle is still configured and placed
    let vehicle = host.entity(report.entity(roles::VEHICLE).unwrap()).unwrap();
    assert!(vehicle.name.is_empty());
    assert_eq!(vehicle.component_types().len(), 3);
    assert!(vehicle.world_transform.is_some());
}

#[test]
fn test_every_property_attempted() {
    let dir = tempfile::tempdir().unwrap();
    let mut host = host_in(&dir).reject_property("Initial linear velocity");

    let report = vehicle_scaffold::run(&mut host, ScaffoldConfig::default());

    // 3 camera properties + 2 rigid body properties
    assert_eq!(host.property_attempts(), 5);
    let rejected: Vec<_> = report.failures_of(FailureKind::PropertySetFailed).collect();
    assert_eq!(rejected.len(), 1);

    let rigid_body = host
        .entity_by_name("PlayerVehicle")
        .unwrap()
        .component(component_types::RIGID_BODY)
        .unwrap()
        .clone();
    assert_eq!(rigid_body.property("Mass"), Some(&PropertyValue::Float(1500.0)));
}

#[test]
fn test_unwritable_artifact_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("Gem"), "blocks the component directory").unwrap();
    let mut host = host_in(&dir);

    let report = vehicle_scaffold::run(&mut host, ScaffoldConfig::default());

    let failed: Vec<_> = report.failures().map(|s| s.step.as_str()).collect();
    assert_eq!(failed, vec!["artifact:source_templates"]);
    assert!(dir.path().join("Config/Input/vehicle_camera.inputbindings").is_file());
    assert!(dir.path().join("CAMERA_SETUP_README.md").is_file());
    assert_eq!(report.artifacts.len(), 4);
    assert!(report.success);
}

#[test]
fn test_rerun_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let mut host = host_in(&dir);
    let bindings = dir.path().join("Config/Input/vehicle_camera.inputbindings");

    let first = vehicle_scaffold::run(&mut host, ScaffoldConfig::default());
    let first_bytes = fs::read(&bindings).unwrap();
    let second = vehicle_scaffold::run(&mut host, ScaffoldConfig::default());
    let second_bytes = fs::read(&bindings).unwrap();

    assert_eq!(first.artifacts, second.artifacts);
    assert_eq!(first.success, second.success);
    assert_eq!(first_bytes, second_bytes);
    // The host duplicates entities on every run
    assert_eq!(host.entities().len(), 10);
}

/// Host that panics as soon as the scaffold touches a light
struct PanickingHost {
    inner: InMemoryHost,
}

impl HostSceneApi for PanickingHost {
    fn create_entity(&mut self, parent: Option<EntityId>) -> Result<EntityId, HostError> {
        self.inner.create_entity(parent)
    }

    fn set_name(&mut self, entity: EntityId, name: &str) -> Result<(), HostError> {
        self.inner.set_name(entity, name)
    }

    fn find_component_types(&self, names: &[&str]) -> Vec<ComponentTypeId> {
        assert!(!names.contains(&component_types::DIRECTIONAL_LIGHT), "light subsystem crashed");
        self.inner.find_component_types(names)
    }

    fn add_components(
        &mut self,
        entity: EntityId,
        types: &[ComponentTypeId],
    ) -> Result<Vec<ComponentId>, HostError> {
        self.inner.add_components(entity, types)
    }

    fn set_property(&mut self, component: ComponentId, path: &str, value: &PropertyValue) -> bool {
        self.inner.set_property(component, path, value)
    }

    fn set_world_transform(&mut self, entity: EntityId, transform: &Transform) -> Result<(), HostError> {
        self.inner.set_world_transform(entity, transform)
    }

    fn set_local_transform(&mut self, entity: EntityId, transform: &Transform) -> Result<(), HostError> {
        self.inner.set_local_transform(entity, transform)
    }

    fn project_root(&self) -> Result<PathBuf, HostError> {
        self.inner.project_root()
    }
}

#[test]
fn test_host_panic_is_contained() {
    let dir = tempfile::tempdir().unwrap();
    let mut host = PanickingHost { inner: host_in(&dir) };

    let report = vehicle_scaffold::run(&mut host, ScaffoldConfig::default());

    assert!(!report.success);
    assert!(!report.passed(SuccessPolicy::BestEffort));
    let fatal: Vec<_> = report.failures_of(FailureKind::FatalRunError).collect();
    assert_eq!(fatal.len(), 1);
    assert!(fatal[0].message.as_deref().unwrap().contains("light subsystem crashed"));

    // Everything built before the crash is still reported
    assert_eq!(report.entities.len(), 5);
    assert!(report.artifacts.is_empty());
}
