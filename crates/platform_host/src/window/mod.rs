//! Window-management vocabulary and host-reported window controls configuration.

pub mod commands;
pub mod controls;
