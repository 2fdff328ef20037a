//! Core value types shared by the background and shadow models.

mod dim;

pub use dim::{Dim, Stop};
