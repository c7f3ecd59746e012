//! Character personas that answer through a chat-completion provider.
//!
//! Each [`Persona`] is pure configuration: a system prompt, a one-shot
//! example exchange and whether it reads the stored self-assessment. The
//! [`Gateway`] turns a persona plus a user message into one provider call.

pub mod gateway;
pub mod persona;
pub mod prompt;

pub use gateway::{Gateway, GatewayError};
pub use persona::{Persona, PersonaConfig, UnknownPersona};
pub use prompt::{compose, system_prompt};
