// ABOUTME: Library crate for walkthrough exposing the spotlight walkthrough core and demo app

#![allow(missing_docs)]

pub mod app;
pub mod components;
pub mod config;
pub mod dom;
pub mod tour;
pub mod watch;
