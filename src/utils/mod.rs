//! Shared utilities

pub mod i18n;
