//! Backend service layer.
//!
//! ARCHITECTURE
//! ============
//! Route handlers stay thin and delegate state changes to services, so the
//! register/login rules are testable without HTTP.

pub mod users;
