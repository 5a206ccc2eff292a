//! Domain layer modules
//!
//! This module contains the rendering domain:
//! - `template`: Tokens, bindings, substitution and template storage
//! - `profile`: Profile cards built on the template renderer

pub mod profile;
pub mod template;
