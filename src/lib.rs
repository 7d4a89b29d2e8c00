//! Fleet Management API
//!
//! API REST para gestión de flota: vehículos, conductores, asignaciones,
//! viajes y cargas de combustible sobre PostgreSQL.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
