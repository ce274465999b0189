//! Input binding document

use crate::error::{ScaffoldError, ScaffoldResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io;

/// Project-relative location of the binding document
pub const BINDINGS_PATH: &str = "Config/Input/vehicle_camera.inputbindings";

/// Physical device an input event comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputDevice {
    /// Keyboard key
    Keyboard,
    /// Gamepad button
    Gamepad,
}

impl InputDevice {
    /// Event generator identifier for a control on this device
    pub fn event_generator(self, control: &str) -> String {
        match self {
            Self::Keyboard => format!("keyboard_key_{control}"),
            Self::Gamepad => format!("gamepad_button_{control}"),
        }
    }
}

/// Maps a physical input event to a logical event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputBinding {
    /// Unique binding name
    pub name: String,
    /// Physical event identifier (device + control)
    pub event_generator: String,
    /// Logical event raised by the binding
    pub event_name: String,
}

impl InputBinding {
    /// Binding whose logical event shares its name
    pub fn new(name: &str, device: InputDevice, control: &str) -> Self {
        Self {
            name: name.to_string(),
            event_generator: device.event_generator(control),
            event_name: name.to_string(),
        }
    }
}

/// Camera and driving bindings, in file order
pub fn vehicle_camera_bindings() -> Vec<InputBinding> {
    use InputDevice::{Gamepad, Keyboard};

    vec![
        InputBinding::new("camera_cycle", Keyboard, "c"),
        InputBinding::new("camera_look_back", Gamepad, "r1"),
        InputBinding::new("camera_menu", Keyboard, "f1"),
        InputBinding::new("photo_mode", Keyboard, "f6"),
        InputBinding::new("vehicle_forward", Keyboard, "w"),
        InputBinding::new("vehicle_backward", Keyboard, "s"),
        InputBinding::new("vehicle_left", Keyboard, "a"),
        InputBinding::new("vehicle_right", Keyboard, "d"),
    ]
}

/// The on-disk binding document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputBindingDocument {
    /// Format version tag
    pub version: u32,
    /// Bindings in order
    pub bindings: Vec<InputBinding>,
}

impl InputBindingDocument {
    /// Build a document, rejecting repeated binding names
    pub fn new(version: u32, bindings: Vec<InputBinding>) -> ScaffoldResult<Self> {
        let mut seen = HashSet::with_capacity(bindings.len());
        if let Some(dup) = bindings.iter().find(|b| !seen.insert(b.name.as_str())) {
            return Err(ScaffoldError::DuplicateBinding {
                name: dup.name.clone(),
            });
        }
        Ok(Self { version, bindings })
    }

    /// Pretty JSON with four-space indentation. Deterministic for equal input.
    pub fn to_json(&self) -> io::Result<String> {
        let mut buffer = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        self.serialize(&mut serializer)?;
        String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}
