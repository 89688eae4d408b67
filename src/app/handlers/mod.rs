//! Feature-Handler für den AppController.
//!
//! Jeder Handler mutiert den AppState für eine Gruppe von Commands.

pub mod curve;
pub mod options;
pub mod view;
