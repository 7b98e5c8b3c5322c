//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the chat transcript and the upload side panel. The chat
//! page owns conversation state and passes messages down by value.

pub mod chat_message;
pub mod file_upload;
