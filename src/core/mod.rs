pub mod db;
pub mod persistence;
