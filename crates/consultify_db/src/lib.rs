//! Database integration for Consultify
//!
//! This crate provides a database-agnostic client built on SQLx plus
//! repositories for the Consultify entities (bookings and contact-form
//! submissions). SQLite is the default backend; PostgreSQL and MySQL are
//! available behind features.

pub mod client;
pub mod error;
pub mod repositories;

pub use client::{DbClient, DbTransaction};
pub use error::DbError;
pub use repositories::{
    Booking, BookingRepository, ContactRepository, ContactSubmission, SqlBookingRepository,
    SqlContactRepository,
};
