//! External services reached over HTTP, other than text generation.

pub mod github;

pub use github::{GitHubClient, GitHubUser};
