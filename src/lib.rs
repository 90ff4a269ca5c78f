//! Fleet maintenance service
//!
//! Microservicio REST que gestiona las maintenances de una flota de alquiler,
//! validadas contra el registro de vehículos y el de indisponibilidades.

pub mod clients;
pub mod config;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
