pub mod classify;
pub mod language;
pub mod predict;
pub mod validation;
