//! Tests for the template engine
//!
//! Organized into focused submodules for better maintainability.

use super::*;

// Test helper functions
mod helpers;

// TokenStream tests
mod tokenstream;
