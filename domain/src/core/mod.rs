//! Core domain types

pub mod error;
pub mod model;
pub mod question;
