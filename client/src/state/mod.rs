//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by panel (`chat`, `upload`) so each component owns a small
//! focused model. Both are plain structs driven through methods, which keeps
//! every transition testable without a browser.

pub mod chat;
pub mod upload;
