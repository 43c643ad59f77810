//! Rover Link - Demo rover gateway
//!
//! This crate streams mock camera frames and telemetry to WebSocket clients
//! and relays their control commands.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
