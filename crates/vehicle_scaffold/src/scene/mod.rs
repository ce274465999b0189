//! Scene scaffolding
//!
//! ```text
//! catalogue (data)
//!      ↓
//! SceneScaffoldBuilder
//!      ↓
//! EntityFactory → ComponentConfigurator → TransformInitializer
//!      ↓
//! HostSceneApi
//! ```

pub mod catalogue;
mod builder;
mod component_configurator;
mod entity_factory;
mod transform_initializer;

pub use builder::SceneScaffoldBuilder;
pub use catalogue::{ComponentSpec, InitialTransformSpec, ScaffoldEntitySpec, TransformKind};
pub use component_configurator::ComponentConfigurator;
pub use entity_factory::EntityFactory;
pub use transform_initializer::TransformInitializer;
