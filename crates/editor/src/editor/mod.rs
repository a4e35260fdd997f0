//! QuillAI Editor core module.
//!
//! This module contains all the components and utilities needed for the QuillAI Editor.

pub mod component;
pub mod delta_integration;
pub mod input_handler;
pub mod parchment_integration;
// pub mod state; // Commented out - using direct signals in component
pub mod contenteditable;
pub mod dom_integration;
pub mod delta_operations;
pub mod renderer;
pub mod integration_tests;