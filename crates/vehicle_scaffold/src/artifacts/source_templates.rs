//! Camera-follow component source templates
//!
//! The generated pair compiles to a component that only snaps the camera to a
//! fixed offset behind the vehicle. It is a starting point for hand-written
//! code, not a finished behavior.

use crate::config::TemplateSettings;

/// Project-relative directory receiving the template pair
pub const COMPONENT_DIR: &str = "Gem/Code/Source/Components";

const HEADER_TEMPLATE: &str = r#"#pragma once

#include <AzCore/Component/Component.h>
#include <AzCore/Component/TransformBus.h>
#include <AzCore/Component/TickBus.h>

namespace {{NAMESPACE}}
{
    class {{COMPONENT}}
        : public AZ::Component
        , public AZ::TickBus::Handler
    {
    public:
        AZ_COMPONENT({{COMPONENT}}, "{{UUID}}");

        static void Reflect(AZ::ReflectContext* context);

        void Activate() override;
        void Deactivate() override;
        void OnTick(float deltaTime, AZ::ScriptTimePoint time) override;

    private:
        AZ::EntityId m_vehicleEntity;
        AZ::EntityId m_cameraEntity;
        AZ::Vector3 m_currentPosition;
    };
}
"#;

const SOURCE_TEMPLATE: &str = r#"#include "{{COMPONENT}}.h"
#include <AzCore/Serialization/SerializeContext.h>

namespace {{NAMESPACE}}
{
    void {{COMPONENT}}::Reflect(AZ::ReflectContext* context)
    {
        if (auto serializeContext = azrtti_cast<AZ::SerializeContext*>(context))
        {
            serializeContext->Class<{{COMPONENT}}, AZ::Component>()
                ->Version({{VERSION}})
                ->Field("VehicleEntity", &{{COMPONENT}}::m_vehicleEntity)
                ->Field("CameraEntity", &{{COMPONENT}}::m_cameraEntity);
        }
    }

    void {{COMPONENT}}::Activate()
    {
        AZ::TickBus::Handler::BusConnect();
    }

    void {{COMPONENT}}::Deactivate()
    {
        AZ::TickBus::Handler::BusDisconnect();
    }

    void {{COMPONENT}}::OnTick([[maybe_unused]] float deltaTime, [[maybe_unused]] AZ::ScriptTimePoint time)
    {
        // TODO: smooth follow, look-ahead and camera modes
        AZ::Vector3 vehiclePos;
        AZ::TransformBus::EventResult(vehiclePos, m_vehicleEntity,
            &AZ::TransformBus::Events::GetWorldTranslation);

        m_currentPosition = vehiclePos + AZ::Vector3(0.0f, -10.0f, 5.0f);

        AZ::TransformBus::Event(m_cameraEntity,
            &AZ::TransformBus::Events::SetWorldTranslation, m_currentPosition);
    }
}
"#;

/// Rendered header and implementation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePair {
    /// Header contents
    pub header: String,
    /// Implementation contents
    pub source: String,
}

fn substitute(template: &str, settings: &TemplateSettings) -> String {
    template
        .replace("{{NAMESPACE}}", &settings.namespace)
        .replace("{{COMPONENT}}", &settings.class_name())
        .replace("{{UUID}}", &settings.type_uuid)
        .replace("{{VERSION}}", &settings.version.to_string())
}

/// Render both templates for the given settings
pub fn render(settings: &TemplateSettings) -> SourcePair {
    SourcePair {
        header: substitute(HEADER_TEMPLATE, settings),
        source: substitute(SOURCE_TEMPLATE, settings),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_placeholders_substituted() {
        let settings = TemplateSettings {
            namespace: "Arena".to_string(),
            component_name: "ChaseCam".to_string(),
            type_uuid: "{00000000-0000-0000-0000-000000000001}".to_string(),
            version: 3,
        };
        let pair = render(&settings);

        assert!(!pair.header.contains("{{"));
        assert!(!pair.source.contains("{{"));
        assert!(pair.header.contains("namespace Arena"));
        assert!(pair.header.contains("AZ_COMPONENT(ChaseCamComponent, \"{00000000-0000-0000-0000-000000000001}\")"));
        assert!(pair.source.contains("#include \"ChaseCamComponent.h\""));
        assert!(pair.source.contains("->Version(3)"));
    }
}
