//! Failure classification and analysis - pure business logic only
//!
//! This module turns an opaque [`GraphFailure`](crate::graph::GraphFailure)
//! into a [`ClassifiedError`] plus badge and troubleshooting tips, without any
//! presentation concerns.

pub mod classifier;
pub mod tips;

pub use classifier::{
    classify, determine_kind, error_locations, ClassifiedError, ErrorKind, UNKNOWN_ERROR_MESSAGE,
};
pub use tips::{Badge, BadgeTone};
