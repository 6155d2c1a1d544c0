//! Facility table: entity, store adapter, repository, schema and CSV import.

pub mod location_api_repository_trait;
pub mod location_entity;
pub mod location_import;
pub mod location_repository;
pub mod location_schema;
pub mod location_sqlite_adapter;
pub mod location_store_adapter_trait;
