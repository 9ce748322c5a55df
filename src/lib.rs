//! Chat Sessions - Server-side companion of the chat front end
//!
//! This crate gates message submission in the chat composer and reconciles
//! a user's chat sessions with the ADK agent backend.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
