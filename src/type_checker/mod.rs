//! Semantic checking module.
//!
//! This module holds the (deliberately small) semantic pass that runs
//! between parsing and any downstream consumer:
//!
//! - A scope map from names to their declaring statements
//! - Duplicate-declaration detection at module level
//!
//! Full static type checking is out of scope; the checker records what a
//! later pass would need and nothing more.

pub mod type_checker;
