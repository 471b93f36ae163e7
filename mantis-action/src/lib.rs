//! # MantisHub Create-Issue Action Library
//!
//! Reads workflow inputs, validates them, creates one MantisHub issue and
//! reports the new issue id back to the workflow.

pub mod cli;
pub mod consts;
pub mod error;
pub mod inputs;
pub mod output;
pub mod run;
pub mod validate;

pub use error::ActionError;
pub use inputs::RawParameters;
pub use run::run;
