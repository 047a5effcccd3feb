//! UI components.

pub mod citegraph;
pub mod site;
