//! Shared utilities for the regen registry generator.
//!
//! This crate provides the low-level building blocks the generator relies on:
//!
//! - Filesystem lifecycle helpers: idempotent directory creation, safe
//!   recursive removal, and swapping a staged directory into its final
//!   location ([`fs`]).
//! - Percent-encoding of untrusted strings into safe path segments ([`path`]).

pub mod error;
pub mod fs;
pub mod path;
