//! # CareScope Dashboard
//!
//! Dioxus desktop application for exploring hospital quality scores. Pick a
//! state, zipcodes within it, and a medical condition; the score chart and
//! hospital list narrow to match as you go.

pub mod components;
pub mod state;
pub mod theme;
