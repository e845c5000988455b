// ABOUTME: Developer access token management module
// ABOUTME: Token issuance, listing, verification, and removal

pub mod service;
pub mod types;

pub use service::TokenService;
pub use types::IssuedCredential;
