// Application layer - Use cases
pub mod dashboard_service;
pub mod snapshot_repository;
