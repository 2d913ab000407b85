//! gomod-bump - Go dependency bumper library
//!
//! Scans a directory tree for Go projects and moves each one to a target
//! version of a single dependency:
//! - discovery of go.mod files
//! - line-based version inspection
//! - a verified git/go pipeline per project (update, vet, test, build, commit, push)

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod interaction;
pub mod manifest;
pub mod orchestrator;
pub mod output;
pub mod pipeline;
pub mod reporter;
pub mod runner;
pub mod tools;
pub mod update;
