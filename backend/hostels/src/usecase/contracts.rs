use uuid::Uuid;

use crate::{
    domain::booking::Booking,
    domain::college::College,
    domain::hostel::Hostel,
    domain::review::Review,
    domain::user::User,
    repository::errors::RepositoryError,
};

#[cfg_attr(test, mockall::automock)]
pub trait CollegeRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<College>, RepositoryError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<College>, RepositoryError>;
}

#[cfg_attr(test, mockall::automock)]
pub trait HostelRepository: Send + Sync {
    async fn create(&self, hostel: &Hostel) -> Result<(), RepositoryError>;
    async fn find_all(&self) -> Result<Vec<Hostel>, RepositoryError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Hostel>, RepositoryError>;
    async fn find_by_owner(&self, owner_id: Uuid) -> Result<Vec<Hostel>, RepositoryError>;
}

#[cfg_attr(test, mockall::automock)]
pub trait ReviewRepository: Send + Sync {
    async fn create(&self, review: &Review) -> Result<(), RepositoryError>;
    async fn find_all(&self) -> Result<Vec<Review>, RepositoryError>;
    async fn find_by_hostel(&self, hostel_id: Uuid) -> Result<Vec<Review>, RepositoryError>;
}

#[cfg_attr(test, mockall::automock)]
pub trait BookingRepository: Send + Sync {
    async fn create(&self, booking: &Booking) -> Result<(), RepositoryError>;
    async fn find_by_student(&self, student_id: Uuid) -> Result<Vec<Booking>, RepositoryError>;
    async fn find_by_hostels(&self, hostel_ids: Vec<Uuid>) -> Result<Vec<Booking>, RepositoryError>;
}

#[cfg_attr(test, mockall::automock)]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &User) -> Result<(), RepositoryError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;
    async fn update(&self, user: &User) -> Result<(), RepositoryError>;
}
