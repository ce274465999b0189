//! Human-readable setup guide

use super::input_bindings::BINDINGS_PATH;
use super::source_templates::COMPONENT_DIR;
use crate::config::TemplateSettings;

/// Project-relative location of the guide
pub const GUIDE_PATH: &str = "CAMERA_SETUP_README.md";

const GUIDE_TEMPLATE: &str = r#"# Vehicle Combat Camera System - Setup Complete!

## What Was Created

### Entities:
- **VehicleCamera**: The camera that will follow your vehicle
- **PlayerVehicle**: Your vehicle entity (needs mesh and physics setup)
- **GameManager**: Manages game systems
- **GroundPlane**: A surface to drive on
- **DirectionalLight**: Basic lighting

### Files:
- Input bindings: {{BINDINGS_PATH}}
- Component templates: {{COMPONENT_DIR}}/

## Next Steps

### 1. Add a Vehicle Mesh
1. Select the "PlayerVehicle" entity in the Entity Outliner
2. Find the "Mesh" component in the Entity Inspector
3. Click the folder icon next to "Model Asset"
4. Choose a vehicle mesh from your assets
   (You may need to import one first: Assets → Import)

### 2. Set Up the Camera Link
Custom components cannot be created from an editor script, so pick one of:

**Option A: Script Canvas (easier)**
1. Select the "GameManager" entity
2. Open its "Script Canvas" component and create a new graph
3. Every frame:
   - Get the PlayerVehicle position
   - Place VehicleCamera behind it at offset (0, -10, 5)

**Option B: Native component (more powerful)**
1. The template files are in {{COMPONENT_DIR}}/
2. Fill in the follow logic in {{COMPONENT}}.cpp
3. Rebuild your project
4. Add the {{COMPONENT}} to PlayerVehicle

### 3. Test the Basic Camera
1. Press Ctrl+G to enter Play Mode
2. The camera should sit behind your vehicle
3. With physics enabled, the vehicle should respond to gravity

### 4. Add Vehicle Controls
Create a Script Canvas graph with:
- Input events (W/A/S/D)
- Forces applied to the vehicle's Rigid Body
- Simple arcade-style driving physics

### 5. Enhance the Camera (Optional)
- Smooth follow using lerp
- Look-ahead prediction
- Camera shake on collisions
- The full combat camera mode set

## Controls (Once Set Up)

- **W/A/S/D**: Drive vehicle (needs scripting)
- **C**: Cycle camera modes (needs component)
- **R1**: Look back (needs component)
- **F1**: Open camera menu (needs component)
- **F6**: Photo mode (needs component)

## Troubleshooting

**Camera not following the vehicle?**
- Make sure the Script Canvas graph or component is active
- Check that the entity IDs are linked correctly
- Verify the vehicle entity is actually moving

**Vehicle falls through the ground?**
- Make sure GroundPlane has a PhysX Static Rigid Body
- Check that PlayerVehicle has a PhysX Rigid Body
- Verify collision layers are set correctly

**Nothing visible in the viewport?**
- Check that VehicleCamera is the active camera
- Make sure lighting is set up
- Verify the entities are not disabled

## Resources

- O3DE Documentation: https://www.o3de.org/docs/
- Script Canvas Guide: https://www.o3de.org/docs/user-guide/scripting/script-canvas/
- Forum: https://github.com/o3de/o3de/discussions
"#;

/// Render the guide
pub fn render(settings: &TemplateSettings) -> String {
    GUIDE_TEMPLATE
        .replace("{{BINDINGS_PATH}}", BINDINGS_PATH)
        .replace("{{COMPONENT_DIR}}", COMPONENT_DIR)
        .replace("{{COMPONENT}}", &settings.class_name())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guide_mentions_every_entity_and_file() {
        let guide = render(&TemplateSettings::default());
        for name in ["VehicleCamera", "PlayerVehicle", "GameManager", "GroundPlane", "DirectionalLight"] {
            assert!(guide.contains(name), "guide does not mention {name}");
        }
        assert!(guide.contains(BINDINGS_PATH));
        assert!(guide.contains("VehicleCombatCameraComponent.cpp"));
        assert!(!guide.contains("{{"));
    }
}
