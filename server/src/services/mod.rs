//! Service layer for auth decisions and ingestion forwarding.
//!
//! ARCHITECTURE
//! ============
//! Route handlers parse HTTP input and delegate to these modules; services
//! own the outbound calls and the typed errors routes map to responses.

pub mod auth;
pub mod ingest;
