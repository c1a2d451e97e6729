#![allow(dead_code)]

pub mod command;

pub const DATE: &str = "2024-01-15T09:30:00Z";
pub const REPO: &str = "svn://host/repo";
