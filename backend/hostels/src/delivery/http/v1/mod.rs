pub mod accounts;
pub mod bookings;
pub mod colleges;
pub mod dashboards;
pub mod hostels;
pub mod middleware;
pub mod reviews;
