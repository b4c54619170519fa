//! HTTP middleware.
//!
//! - [`basic_auth::require_basic_auth`] -- optional HTTP Basic
//!   authentication applied to the `/api` route tree.

pub mod basic_auth;
