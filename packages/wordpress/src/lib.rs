// ABOUTME: WordPress REST API publishing for Trygo
// ABOUTME: Basic-Auth credentialed posts and media uploads

pub mod client;

pub use client::{WordPressClient, WordPressError, WordPressResult};
