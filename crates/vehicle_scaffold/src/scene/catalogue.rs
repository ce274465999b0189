//! Declarative description of the vehicle scaffold
//!
//! Pure data. Nothing here talks to the host; [`super::SceneScaffoldBuilder`]
//! walks these descriptions and turns them into editor state.

use crate::error::TransformSpace;
use crate::foundation::math::Vec3;
use crate::host::PropertyValue;

/// Component type names as registered by the editor
pub mod component_types {
    /// Camera
    pub const CAMERA: &str = "Camera";
    /// Static or skinned mesh renderer
    pub const MESH: &str = "Mesh";
    /// Dynamic physics body
    pub const RIGID_BODY: &str = "PhysX Rigid Body";
    /// Immovable physics body
    pub const STATIC_RIGID_BODY: &str = "PhysX Static Rigid Body";
    /// Physics collision shape
    pub const COLLIDER: &str = "PhysX Collider";
    /// Visual script graph
    pub const SCRIPT_CANVAS: &str = "Script Canvas";
    /// Sun-style light
    pub const DIRECTIONAL_LIGHT: &str = "Directional Light";

    /// Every type the scaffold attaches
    pub const ALL: [&str; 7] = [
        CAMERA,
        MESH,
        RIGID_BODY,
        STATIC_RIGID_BODY,
        COLLIDER,
        SCRIPT_CANVAS,
        DIRECTIONAL_LIGHT,
    ];
}

/// Logical roles of the scaffold entities
pub mod roles {
    /// Follow camera
    pub const CAMERA: &str = "camera";
    /// Player vehicle
    pub const VEHICLE: &str = "vehicle";
    /// Game manager holding the script graph
    pub const MANAGER: &str = "manager";
    /// Ground plane
    pub const GROUND: &str = "ground";
    /// Directional light
    pub const LIGHT: &str = "light";

    /// Roles in build order
    pub const ALL: [&str; 5] = [CAMERA, VEHICLE, MANAGER, GROUND, LIGHT];
}

/// A component type plus the properties to assign on it, in order
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentSpec {
    /// Registered component type name
    pub type_name: &'static str,
    /// Property path → value, applied in insertion order
    pub properties: Vec<(&'static str, PropertyValue)>,
}

impl ComponentSpec {
    /// Component with no properties to assign
    pub fn bare(type_name: &'static str) -> Self {
        Self {
            type_name,
            properties: Vec::new(),
        }
    }

    /// Builder pattern: append a property assignment
    pub fn with(mut self, path: &'static str, value: impl Into<PropertyValue>) -> Self {
        self.properties.push((path, value.into()));
        self
    }
}

/// What an initial transform does
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransformKind {
    /// Pure translation
    Translation(Vec3),
    /// Pure scale, factors kept as given
    Scale(Vec3),
    /// Pure rotation from Euler angles in degrees
    RotationEuler(Vec3),
}

/// Initial placement of an entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InitialTransformSpec {
    /// Transform to build
    pub kind: TransformKind,
    /// Space to assign it in
    pub space: TransformSpace,
}

impl InitialTransformSpec {
    /// World-space translation
    pub fn world_translation(x: f32, y: f32, z: f32) -> Self {
        Self {
            kind: TransformKind::Translation(Vec3::new(x, y, z)),
            space: TransformSpace::World,
        }
    }

    /// Local-space scale
    pub fn local_scale(x: f32, y: f32, z: f32) -> Self {
        Self {
            kind: TransformKind::Scale(Vec3::new(x, y, z)),
            space: TransformSpace::Local,
        }
    }

    /// Local-space rotation from Euler degrees
    pub fn local_rotation(x: f32, y: f32, z: f32) -> Self {
        Self {
            kind: TransformKind::RotationEuler(Vec3::new(x, y, z)),
            space: TransformSpace::Local,
        }
    }
}

/// Everything needed to build one scaffold entity
#[derive(Debug, Clone, PartialEq)]
pub struct ScaffoldEntitySpec {
    /// Logical role used as the registry key
    pub role: &'static str,
    /// Name shown in the editor
    pub display_name: &'static str,
    /// Banner logged before the entity is built
    pub title: &'static str,
    /// Components in attachment order
    pub components: Vec<ComponentSpec>,
    /// Optional initial placement
    pub transform: Option<InitialTransformSpec>,
}

/// The five entities of the vehicle combat camera scaffold, in build order
pub fn vehicle_scaffold() -> Vec<ScaffoldEntitySpec> {
    use component_types as ct;

    vec![
        ScaffoldEntitySpec {
            role: roles::CAMERA,
            display_name: "VehicleCamera",
            title: "Setting up Camera Entity",
            components: vec![ComponentSpec::bare(ct::CAMERA)
                .with("Field of View", 90.0_f32)
                .with("Near Clip Distance", 0.1_f32)
                .with("Far Clip Distance", 1000.0_f32)],
            // Behind and above the origin
            transform: Some(InitialTransformSpec::world_translation(0.0, -10.0, 5.0)),
        },
        ScaffoldEntitySpec {
            role: roles::VEHICLE,
            display_name: "PlayerVehicle",
            title: "Setting up Vehicle Entity",
            components: vec![
                ComponentSpec::bare(ct::MESH),
                ComponentSpec::bare(ct::RIGID_BODY)
                    .with("Initial linear velocity", Vec3::zeros())
                    .with("Mass", 1500.0_f32),
                ComponentSpec::bare(ct::COLLIDER),
            ],
            transform: Some(InitialTransformSpec::world_translation(0.0, 0.0, 1.0)),
        },
        ScaffoldEntitySpec {
            role: roles::MANAGER,
            display_name: "GameManager",
            title: "Setting up Game Manager",
            components: vec![ComponentSpec::bare(ct::SCRIPT_CANVAS)],
            transform: None,
        },
        ScaffoldEntitySpec {
            role: roles::GROUND,
            display_name: "GroundPlane",
            title: "Setting up Ground Plane",
            components: vec![
                ComponentSpec::bare(ct::MESH),
                ComponentSpec::bare(ct::STATIC_RIGID_BODY),
                ComponentSpec::bare(ct::COLLIDER),
            ],
            transform: Some(InitialTransformSpec::local_scale(100.0, 100.0, 1.0)),
        },
        ScaffoldEntitySpec {
            role: roles::LIGHT,
            display_name: "DirectionalLight",
            title: "Setting up Lighting",
            components: vec![ComponentSpec::bare(ct::DIRECTIONAL_LIGHT)],
            // Angled down toward the ground
            transform: Some(InitialTransformSpec::local_rotation(-45.0, 0.0, 0.0)),
        },
    ]
}
