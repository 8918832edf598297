//! Web layer for the browser-facing page.
//!
//! Serves the single HTML page with Askama server-side rendering; the
//! page's inline script talks to the JSON API.

pub mod handlers;
