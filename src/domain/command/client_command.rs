//! Inbound client commands and their payload shapes.
//!
//! Browser clients are inconsistent about payload encoding: JSON-accepting
//! events may carry either an object or a string holding serialized JSON.
//! [`decode_json_payload`] normalizes both forms.

use serde_json::Value;

use super::errors::CommandError;
use crate::domain::camera::{CameraError, CameraName};
use crate::domain::telemetry::HeightAdjustment;

/// A command received from a connected client, before payload validation.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientCommand {
    StartCamera(Value),
    SetTask(Value),
    RunCommand(Value),
    ActuatorCommand(Value),
    ButtonPress(Value),
}

impl ClientCommand {
    /// Resolves an inbound event name and its payload into a command.
    pub fn from_event(event: &str, data: Value) -> Result<Self, CommandError> {
        match event {
            "start_camera" => Ok(ClientCommand::StartCamera(data)),
            "set_task" => Ok(ClientCommand::SetTask(data)),
            "run_command" => Ok(ClientCommand::RunCommand(data)),
            "actuator_command" => Ok(ClientCommand::ActuatorCommand(data)),
            "button_press" => Ok(ClientCommand::ButtonPress(data)),
            other => Err(CommandError::UnknownEvent(other.to_string())),
        }
    }

    /// Event name the command arrived under.
    pub fn event_name(&self) -> &'static str {
        match self {
            ClientCommand::StartCamera(_) => "start_camera",
            ClientCommand::SetTask(_) => "set_task",
            ClientCommand::RunCommand(_) => "run_command",
            ClientCommand::ActuatorCommand(_) => "actuator_command",
            ClientCommand::ButtonPress(_) => "button_press",
        }
    }
}

/// Parses string payloads as JSON text; passes every other value through.
pub fn decode_json_payload(data: Value) -> Result<Value, CommandError> {
    match data {
        Value::String(text) => Ok(serde_json::from_str(&text)?),
        other => Ok(other),
    }
}

/// Decoded `start_camera` payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartCameraRequest {
    /// Requested camera, as sent. `None` when absent or not a string.
    pub camera_name: Option<String>,
}

impl StartCameraRequest {
    pub fn from_payload(data: Value) -> Result<Self, CommandError> {
        let value = decode_json_payload(data)?;
        let camera_name = value
            .get("camera_name")
            .and_then(Value::as_str)
            .map(str::to_owned);
        Ok(Self { camera_name })
    }

    /// Validates the requested name against the known cameras.
    pub fn camera(&self) -> Result<CameraName, CameraError> {
        match &self.camera_name {
            Some(name) => name.parse(),
            None => Err(CameraError::MissingCameraName),
        }
    }
}

/// Decoded `actuator_command` payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActuatorRequest {
    /// Any JSON integer, signed or up to `u64::MAX`.
    pub actuator: i128,
}

impl ActuatorRequest {
    /// Accepts only integral JSON numbers; `3.0`, `"3"` and `null` are rejected.
    pub fn from_payload(data: Value) -> Result<Self, CommandError> {
        let value = decode_json_payload(data)?;
        let raw = value.get("actuator").cloned().unwrap_or(Value::Null);
        let actuator = raw
            .as_i64()
            .map(i128::from)
            .or_else(|| raw.as_u64().map(i128::from));
        match actuator {
            Some(actuator) => Ok(Self { actuator }),
            None => Err(CommandError::InvalidActuator(raw)),
        }
    }
}

/// Parses a `button_press` payload, which is a bare string literal.
pub fn parse_button_press(data: &Value) -> Result<HeightAdjustment, CommandError> {
    match data {
        Value::String(literal) => Ok(literal.parse::<HeightAdjustment>()?),
        other => Ok(other.to_string().parse::<HeightAdjustment>()?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::telemetry::TelemetryError;
    use serde_json::json;

    #[test]
    fn from_event_resolves_known_names() {
        let cmd = ClientCommand::from_event("set_task", json!({"task": 1})).unwrap();
        assert_eq!(cmd, ClientCommand::SetTask(json!({"task": 1})));
        assert_eq!(cmd.event_name(), "set_task");
    }

    #[test]
    fn from_event_rejects_unknown_names() {
        let err = ClientCommand::from_event("self_destruct", Value::Null).unwrap_err();
        assert!(matches!(err, CommandError::UnknownEvent(ref name) if name == "self_destruct"));
    }

    #[test]
    fn start_camera_accepts_object_payload() {
        let req = StartCameraRequest::from_payload(json!({"camera_name": "bottom"})).unwrap();
        assert_eq!(req.camera().unwrap(), CameraName::Bottom);
    }

    #[test]
    fn start_camera_accepts_json_string_payload() {
        let req =
            StartCameraRequest::from_payload(json!(r#"{"camera_name": "front_right"}"#)).unwrap();
        assert_eq!(req.camera().unwrap(), CameraName::FrontRight);
    }

    #[test]
    fn start_camera_rejects_malformed_json_string() {
        let err = StartCameraRequest::from_payload(json!("{camera_name")).unwrap_err();
        assert!(matches!(err, CommandError::MalformedPayload(_)));
    }

    #[test]
    fn start_camera_missing_name_is_invalid_camera() {
        let req = StartCameraRequest::from_payload(json!({"camera": "bottom"})).unwrap();
        assert_eq!(req.camera_name, None);
        assert_eq!(req.camera().unwrap_err(), CameraError::MissingCameraName);
    }

    #[test]
    fn start_camera_non_object_payload_has_no_name() {
        let req = StartCameraRequest::from_payload(json!(42)).unwrap();
        assert_eq!(req.camera().unwrap_err(), CameraError::MissingCameraName);
    }

    #[test]
    fn actuator_accepts_integer() {
        let req = ActuatorRequest::from_payload(json!({"actuator": 3})).unwrap();
        assert_eq!(req.actuator, 3);
    }

    #[test]
    fn actuator_accepts_integers_beyond_i64() {
        let req = ActuatorRequest::from_payload(json!({"actuator": u64::MAX})).unwrap();
        assert_eq!(req.actuator, i128::from(u64::MAX));
    }

    #[test]
    fn actuator_accepts_json_string_payload() {
        let req = ActuatorRequest::from_payload(json!(r#"{"actuator": -2}"#)).unwrap();
        assert_eq!(req.actuator, -2);
    }

    #[test]
    fn actuator_rejects_non_integers() {
        for payload in [
            json!({"actuator": 3.0}),
            json!({"actuator": 3.5}),
            json!({"actuator": "3"}),
            json!({"actuator": null}),
            json!({}),
            json!([1, 2]),
        ] {
            let err = ActuatorRequest::from_payload(payload.clone()).unwrap_err();
            assert!(
                matches!(err, CommandError::InvalidActuator(_)),
                "payload {payload} should be rejected"
            );
        }
    }

    #[test]
    fn actuator_rejects_malformed_json_string() {
        let err = ActuatorRequest::from_payload(json!("not json")).unwrap_err();
        assert!(matches!(err, CommandError::MalformedPayload(_)));
    }

    #[test]
    fn button_press_parses_literals() {
        assert_eq!(
            parse_button_press(&json!("increase_height")).unwrap(),
            HeightAdjustment::Increase
        );
        assert_eq!(
            parse_button_press(&json!("decrease_height")).unwrap(),
            HeightAdjustment::Decrease
        );
    }

    #[test]
    fn button_press_rejects_other_values() {
        let err = parse_button_press(&json!({"button": "up"})).unwrap_err();
        assert!(matches!(
            err,
            CommandError::Telemetry(TelemetryError::UnknownAdjustment(_))
        ));
    }
}
