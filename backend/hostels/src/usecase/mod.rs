pub mod access;
pub mod accounts;
pub mod bookings;
pub mod contracts;
pub mod dashboards;
pub mod error;
pub mod hostels;
pub mod jwt;
pub mod proximity;
pub mod ratings;
pub mod reviews;
pub mod search;
