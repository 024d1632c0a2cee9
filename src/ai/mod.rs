//! AI reply generation module
//!
//! Formats a prompt from the pasted email and selected tone, sends it to an
//! external text-generation endpoint, and normalizes the loosely-typed
//! response into either a reply or an error.

mod actor;
mod client;
mod prompts;

pub use actor::{AiActorHandle, AiCommand, AiEvent, spawn_ai_actor};
pub use client::{GenError, HfClient};
pub use prompts::Tone;
