pub mod assignments;
pub mod commands;
pub mod health;
pub mod permissions;
pub mod roles;
pub mod stats;
