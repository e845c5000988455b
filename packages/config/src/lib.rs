// ABOUTME: Shared configuration names for devtoken packages
// ABOUTME: Re-exports environment variable constants and defaults

pub mod constants;

pub use constants::*;
