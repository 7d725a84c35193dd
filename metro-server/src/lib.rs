//! Metro route and fare server.
//!
//! Loads a metro network description once at startup and answers:
//! "Which stations do I pass through from here to there, and what does
//! it cost?"

pub mod config;
pub mod domain;
pub mod network;
pub mod planner;
pub mod web;
