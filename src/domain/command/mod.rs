//! Command module - inbound client commands and payload decoding.

mod client_command;
mod errors;

pub use client_command::{
    decode_json_payload, parse_button_press, ActuatorRequest, ClientCommand, StartCameraRequest,
};
pub use errors::CommandError;
