//! CommandRelay - Executes client commands and emits acknowledgements.
//!
//! Every failure is reported where it happens: logged, and translated into
//! an error status event for commands that have a status reply
//! (`start_camera`, `actuator_command`). The returned error is informational;
//! callers only log it.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::command::{
    parse_button_press, ActuatorRequest, ClientCommand, CommandError, StartCameraRequest,
};
use crate::domain::events::{
    Acknowledgement, ActuatorStatus, CameraStatus, HeightReport, ServerEvent,
};
use crate::ports::{EventEmitter, TelemetrySource};

use super::frame_broadcaster::FrameBroadcaster;

/// Handler for all inbound client commands.
pub struct CommandRelay {
    frames: Arc<FrameBroadcaster>,
    telemetry: Arc<dyn TelemetrySource>,
    emitter: Arc<dyn EventEmitter>,
}

impl CommandRelay {
    pub fn new(
        frames: Arc<FrameBroadcaster>,
        telemetry: Arc<dyn TelemetrySource>,
        emitter: Arc<dyn EventEmitter>,
    ) -> Self {
        Self {
            frames,
            telemetry,
            emitter,
        }
    }

    /// Executes one command to completion.
    pub async fn handle(&self, command: ClientCommand) -> Result<(), CommandError> {
        match command {
            ClientCommand::StartCamera(data) => self.start_camera(data).await,
            ClientCommand::SetTask(data) => {
                tracing::info!(payload = %data, "Received 'set_task' request");
                self.emitter.emit(ServerEvent::Status(Acknowledgement::ok()));
                Ok(())
            }
            ClientCommand::RunCommand(data) => {
                tracing::info!(payload = %data, "Received 'run_command' request");
                self.emitter
                    .emit(ServerEvent::CommandStatus(Acknowledgement::ok()));
                Ok(())
            }
            ClientCommand::ActuatorCommand(data) => self.actuator_command(data),
            ClientCommand::ButtonPress(data) => self.button_press(data).await,
        }
    }

    async fn start_camera(&self, data: Value) -> Result<(), CommandError> {
        let request = match StartCameraRequest::from_payload(data) {
            Ok(request) => request,
            Err(err) => {
                tracing::error!(error_kind = %err.kind(), "Received invalid JSON data: {}", err);
                self.emit_camera_status(CameraStatus::error(None, "Invalid JSON"));
                return Err(err);
            }
        };

        tracing::info!(camera_name = ?request.camera_name, "Received 'start_camera' request");

        let camera = match request.camera() {
            Ok(camera) => camera,
            Err(err) => {
                tracing::warn!(camera_name = ?request.camera_name, "Invalid camera name");
                self.emit_camera_status(CameraStatus::error(
                    request.camera_name.clone(),
                    err.client_message(),
                ));
                return Err(err.into());
            }
        };

        if let Err(err) = self.frames.switch_to(camera).await {
            self.emit_camera_status(CameraStatus::error(
                Some(camera.to_string()),
                err.client_message(),
            ));
            return Err(err.into());
        }

        self.emit_camera_status(CameraStatus::streaming(camera));
        Ok(())
    }

    fn actuator_command(&self, data: Value) -> Result<(), CommandError> {
        match ActuatorRequest::from_payload(data) {
            Ok(request) => {
                tracing::info!(actuator = %request.actuator, "Received actuator command");
                self.emitter.emit(ServerEvent::ActuatorStatus(ActuatorStatus::received(
                    request.actuator,
                )));
                Ok(())
            }
            Err(err @ CommandError::MalformedPayload(_)) => {
                tracing::error!("Received invalid JSON data for actuator command: {}", err);
                self.emitter.emit(ServerEvent::ActuatorStatus(ActuatorStatus::error(
                    "Invalid JSON format",
                )));
                Err(err)
            }
            Err(err) => {
                tracing::warn!(error_kind = %err.kind(), "{}", err);
                self.emitter.emit(ServerEvent::ActuatorStatus(ActuatorStatus::error(
                    "Invalid actuator ID",
                )));
                Err(err)
            }
        }
    }

    /// Adjusts the shared height and echoes the height after the update.
    async fn button_press(&self, data: Value) -> Result<(), CommandError> {
        let adjustment = match parse_button_press(&data) {
            Ok(adjustment) => adjustment,
            Err(err) => {
                tracing::warn!(payload = %data, "Unknown button press command");
                let height = self.telemetry.height().await;
                self.emitter
                    .emit(ServerEvent::Telemetry(HeightReport { height }));
                return Err(err);
            }
        };

        match self.telemetry.adjust_height(adjustment).await {
            Ok(height) => {
                tracing::info!(height = %height, ?adjustment, "Height adjusted");
                self.emitter
                    .emit(ServerEvent::Telemetry(HeightReport { height }));
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error_kind = %err.kind(), "Button press ignored: {}", err);
                Err(err.into())
            }
        }
    }

    fn emit_camera_status(&self, status: CameraStatus) {
        self.emitter.emit(ServerEvent::CameraStatus(status));
    }
}
