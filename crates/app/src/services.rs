//! Application services.

pub mod door_service;
