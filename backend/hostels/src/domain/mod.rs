pub mod booking;
pub mod college;
pub mod geo;
pub mod hostel;
pub mod rating;
pub mod review;
pub mod user;
