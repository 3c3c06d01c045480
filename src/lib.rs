//! Free text in, mood out.
//!
//! The request pipeline is validate -> detect language -> translate to English
//! -> classify star rating -> map to `angry`/`sad`/`normal`/`happy`. The three
//! outside collaborators sit behind the traits in [`domain::traits`] so they
//! can be swapped or mocked.
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod presentation;
pub mod state;

pub use interfaces::http::router;
pub use state::AppState;
