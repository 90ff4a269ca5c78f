//! Utilidades del sistema
//!
//! Manejo de errores e inicialización de logging.

pub mod errors;
pub mod logging;
