//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Entry routes (`/`, `/login`) are decided by the server.

pub mod chat;
