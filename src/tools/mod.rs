//! Wrappers around the external tools a project upgrade shells out to
//!
//! - `Git`: status, branch, checkout, pull, add, commit, push
//! - `GoToolchain`: get + tidy, vet, test, build

mod git;
mod go;

pub use git::Git;
pub use go::GoToolchain;
