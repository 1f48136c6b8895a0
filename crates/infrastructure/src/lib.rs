//! digkit Infrastructure Layer
pub mod dns;
pub mod system;
