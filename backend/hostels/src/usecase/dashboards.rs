use crate::domain::booking::Booking;
use crate::domain::hostel::Hostel;
use crate::domain::user::Capability;
use crate::usecase::access::Actor;
use crate::usecase::contracts::{
    BookingRepository, CollegeRepository, HostelRepository, ReviewRepository,
};
use crate::usecase::error::UsecaseError;

#[derive(Debug, Clone)]
pub struct OwnerDashboard {
    pub hostels: Vec<Hostel>,
    pub bookings: Vec<Booking>,
    pub average_rating: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformStats {
    pub total_hostels: usize,
    pub verified_hostels: usize,
    pub total_reviews: usize,
    pub verified_reviews: usize,
    pub total_colleges: usize,
}

pub struct DashboardsUseCase<H, B, Rv, C>
where
    H: HostelRepository,
    B: BookingRepository,
    Rv: ReviewRepository,
    C: CollegeRepository,
{
    hostel_repository: H,
    booking_repository: B,
    review_repository: Rv,
    college_repository: C,
}

impl<H, B, Rv, C> DashboardsUseCase<H, B, Rv, C>
where
    H: HostelRepository,
    B: BookingRepository,
    Rv: ReviewRepository,
    C: CollegeRepository,
{
    pub fn new(
        hostel_repository: H,
        booking_repository: B,
        review_repository: Rv,
        college_repository: C,
    ) -> Self {
        Self {
            hostel_repository,
            booking_repository,
            review_repository,
            college_repository,
        }
    }

    #[tracing::instrument(skip(self), fields(user_id = %actor.user_id))]
    pub async fn owner_dashboard(&self, actor: &Actor) -> Result<OwnerDashboard, UsecaseError> {
        actor.require(Capability::ViewOwnerDashboard)?;

        let hostels = self.hostel_repository.find_by_owner(actor.user_id).await?;
        let hostel_ids = hostels.iter().map(|h| h.id).collect();
        let bookings = self.booking_repository.find_by_hostels(hostel_ids).await?;

        let average_rating = if hostels.is_empty() {
            0.0
        } else {
            hostels.iter().map(|h| h.rating).sum::<f64>() / hostels.len() as f64
        };

        tracing::debug!(hostels = hostels.len(), bookings = bookings.len(), "owner dashboard built");
        Ok(OwnerDashboard {
            hostels,
            bookings,
            average_rating,
        })
    }

    #[tracing::instrument(skip(self), fields(user_id = %actor.user_id))]
    pub async fn platform_stats(&self, actor: &Actor) -> Result<PlatformStats, UsecaseError> {
        actor.require(Capability::ViewAdminDashboard)?;

        let hostels = self.hostel_repository.find_all().await?;
        let reviews = self.review_repository.find_all().await?;
        let colleges = self.college_repository.find_all().await?;

        Ok(PlatformStats {
            total_hostels: hostels.len(),
            verified_hostels: hostels.iter().filter(|h| h.verified).count(),
            total_reviews: reviews.len(),
            verified_reviews: reviews.iter().filter(|r| r.verified).count(),
            total_colleges: colleges.len(),
        })
    }
}
