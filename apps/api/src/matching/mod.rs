//! Matching — the resume/JD match pipeline.
//!
//! `skills` extracts catalog keywords, `reconciler` drives the model call
//! and merges its reply with local fallbacks, `handlers` exposes the HTTP
//! surface.

pub mod handlers;
pub mod prompts;
pub mod reconciler;
pub mod skills;
