use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    domain::booking::Booking,
    domain::college::College,
    domain::hostel::Hostel,
    domain::review::Review,
    domain::user::User,
    repository::errors::RepositoryError,
    repository::seed::Seed,
    usecase::contracts::{
        BookingRepository, CollegeRepository, HostelRepository, ReviewRepository, UserRepository,
    },
};

#[derive(Debug, Default)]
struct Tables {
    colleges: Vec<College>,
    hostels: Vec<Hostel>,
    reviews: Vec<Review>,
    bookings: Vec<Booking>,
    users: Vec<User>,
}

/// Process-local store. Clones share the same tables; rows keep insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryRepository {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryRepository {
    pub fn new(seed: Seed) -> Self {
        let tables = Tables {
            colleges: seed.colleges,
            hostels: seed.hostels,
            reviews: seed.reviews,
            bookings: Vec::new(),
            users: seed.users,
        };
        Self {
            tables: Arc::new(RwLock::new(tables)),
        }
    }
}

impl CollegeRepository for MemoryRepository {
    #[tracing::instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<College>, RepositoryError> {
        let tables = self.tables.read().await;
        Ok(tables.colleges.clone())
    }

    #[tracing::instrument(skip(self), fields(college_id = %id))]
    async fn find_by_id(&self, id: &str) -> Result<Option<College>, RepositoryError> {
        let tables = self.tables.read().await;
        Ok(tables.colleges.iter().find(|c| c.id == id).cloned())
    }
}

impl HostelRepository for MemoryRepository {
    #[tracing::instrument(skip(self, hostel), fields(hostel_id = %hostel.id, owner_id = %hostel.owner_id))]
    async fn create(&self, hostel: &Hostel) -> Result<(), RepositoryError> {
        tracing::debug!("creating hostel");

        let mut tables = self.tables.write().await;
        if tables.hostels.iter().any(|h| h.id == hostel.id) {
            return Err(RepositoryError::Conflict(format!("hostel {}", hostel.id)));
        }
        tables.hostels.push(hostel.clone());
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<Hostel>, RepositoryError> {
        let tables = self.tables.read().await;
        Ok(tables.hostels.clone())
    }

    #[tracing::instrument(skip(self), fields(hostel_id = %id))]
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Hostel>, RepositoryError> {
        let tables = self.tables.read().await;
        Ok(tables.hostels.iter().find(|h| h.id == id).cloned())
    }

    #[tracing::instrument(skip(self), fields(owner_id = %owner_id))]
    async fn find_by_owner(&self, owner_id: Uuid) -> Result<Vec<Hostel>, RepositoryError> {
        let tables = self.tables.read().await;
        let hostels: Vec<Hostel> = tables
            .hostels
            .iter()
            .filter(|h| h.owner_id == owner_id)
            .cloned()
            .collect();

        tracing::debug!(count = hostels.len(), "found owner hostels");
        Ok(hostels)
    }
}

impl ReviewRepository for MemoryRepository {
    #[tracing::instrument(skip(self, review), fields(review_id = %review.id, hostel_id = %review.hostel_id))]
    async fn create(&self, review: &Review) -> Result<(), RepositoryError> {
        tracing::debug!("creating review");

        let mut tables = self.tables.write().await;
        tables.reviews.push(review.clone());
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<Review>, RepositoryError> {
        let tables = self.tables.read().await;
        Ok(tables.reviews.clone())
    }

    #[tracing::instrument(skip(self), fields(hostel_id = %hostel_id))]
    async fn find_by_hostel(&self, hostel_id: Uuid) -> Result<Vec<Review>, RepositoryError> {
        let tables = self.tables.read().await;
        Ok(tables
            .reviews
            .iter()
            .filter(|r| r.hostel_id == hostel_id)
            .cloned()
            .collect())
    }
}

impl BookingRepository for MemoryRepository {
    #[tracing::instrument(skip(self, booking), fields(booking_id = %booking.id, hostel_id = %booking.hostel_id))]
    async fn create(&self, booking: &Booking) -> Result<(), RepositoryError> {
        tracing::debug!("creating booking");

        let mut tables = self.tables.write().await;
        tables.bookings.push(booking.clone());
        Ok(())
    }

    #[tracing::instrument(skip(self), fields(student_id = %student_id))]
    async fn find_by_student(&self, student_id: Uuid) -> Result<Vec<Booking>, RepositoryError> {
        let tables = self.tables.read().await;
        Ok(tables
            .bookings
            .iter()
            .filter(|b| b.student_id == student_id)
            .cloned()
            .collect())
    }

    #[tracing::instrument(skip(self, hostel_ids), fields(hostel_count = hostel_ids.len()))]
    async fn find_by_hostels(&self, hostel_ids: Vec<Uuid>) -> Result<Vec<Booking>, RepositoryError> {
        let tables = self.tables.read().await;
        Ok(tables
            .bookings
            .iter()
            .filter(|b| hostel_ids.contains(&b.hostel_id))
            .cloned()
            .collect())
    }
}

impl UserRepository for MemoryRepository {
    #[tracing::instrument(skip(self, user), fields(user_id = %user.id))]
    async fn create(&self, user: &User) -> Result<(), RepositoryError> {
        tracing::debug!("creating user");

        let mut tables = self.tables.write().await;
        if tables.users.iter().any(|u| u.email.eq_ignore_ascii_case(&user.email)) {
            return Err(RepositoryError::Conflict(format!("user {}", user.email)));
        }
        tables.users.push(user.clone());
        Ok(())
    }

    #[tracing::instrument(skip(self), fields(user_id = %id))]
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.id == id).cloned())
    }

    #[tracing::instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let tables = self.tables.read().await;
        Ok(tables
            .users
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    #[tracing::instrument(skip(self, user), fields(user_id = %user.id))]
    async fn update(&self, user: &User) -> Result<(), RepositoryError> {
        tracing::debug!("updating user");

        let mut tables = self.tables.write().await;
        let existing = tables
            .users
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or(RepositoryError::NotFound)?;
        *existing = user.clone();
        Ok(())
    }
}
