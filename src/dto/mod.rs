//! DTOs de entrada y salida de la API HTTP

pub mod maintenance_dto;

pub use maintenance_dto::*;
