//! Event emitter adapters.
//!
//! - `InMemoryEmitter` - captures events for tests
//!
//! The production emitter is `websocket::SessionHub`.

mod in_memory;

pub use in_memory::InMemoryEmitter;
