//! Process-wide configuration

pub mod prefs;
