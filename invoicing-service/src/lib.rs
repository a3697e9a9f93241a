//! Invoicing Service - freelancer invoices, payment status and income reports.

pub mod config;
pub mod dtos;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod startup;
