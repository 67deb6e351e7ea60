//! Test Module
//!
//! Cross-module test suite for the sitechat core.
//!
//! ## Test Categories
//! - `dispatcher_tests`: rule priority, fallback pools, normalisation, end-to-end replies
//! - `chat_actor_tests`: typing delay, delayed side effects, greeting, contact form, preferences
//! - `relay_tests`: HTTP contact relay against a mock server

pub mod dispatcher_tests;
pub mod relay_tests;
