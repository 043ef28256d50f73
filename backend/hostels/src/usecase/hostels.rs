use uuid::Uuid;

use crate::domain::college::College;
use crate::domain::hostel::{Hostel, HostelListing, NearbyHostel};
use crate::domain::user::Capability;
use crate::usecase::access::Actor;
use crate::usecase::contracts::{CollegeRepository, HostelRepository};
use crate::usecase::error::UsecaseError;
use crate::usecase::proximity::filter_by_college;
use crate::usecase::search::{refine, SearchConstraints};

#[derive(Debug, Clone)]
pub struct SearchResult {
    pub college: College,
    pub hostels: Vec<NearbyHostel>,
}

pub struct HostelsUseCase<C, H>
where
    C: CollegeRepository,
    H: HostelRepository,
{
    college_repository: C,
    hostel_repository: H,
}

impl<C, H> HostelsUseCase<C, H>
where
    C: CollegeRepository,
    H: HostelRepository,
{
    pub fn new(college_repository: C, hostel_repository: H) -> Self {
        Self {
            college_repository,
            hostel_repository,
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn list_colleges(&self) -> Result<Vec<College>, UsecaseError> {
        Ok(self.college_repository.find_all().await?)
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_college(&self, college_id: &str) -> Result<College, UsecaseError> {
        self.college_repository
            .find_by_id(college_id)
            .await?
            .ok_or_else(|| UsecaseError::NotFound("College".to_string()))
    }

    /// Hostels near a college, nearest first. Unknown colleges have none.
    #[tracing::instrument(skip(self))]
    pub async fn hostels_near(&self, college_id: &str) -> Result<Vec<NearbyHostel>, UsecaseError> {
        let Some(college) = self.college_repository.find_by_id(college_id).await? else {
            tracing::debug!("unknown college, no nearby hostels");
            return Ok(Vec::new());
        };

        let hostels = self.hostel_repository.find_all().await?;
        let nearby = filter_by_college(&college, &hostels);

        tracing::debug!(total = hostels.len(), nearby = nearby.len(), "proximity filter applied");
        Ok(nearby)
    }

    #[tracing::instrument(skip(self, constraints), fields(sort_by = ?constraints.sort_by))]
    pub async fn search(
        &self,
        college_id: &str,
        constraints: &SearchConstraints,
    ) -> Result<SearchResult, UsecaseError> {
        let college = self.get_college(college_id).await?;

        let hostels = self.hostel_repository.find_all().await?;
        let refined = refine(filter_by_college(&college, &hostels), constraints);

        tracing::debug!(count = refined.len(), "search completed");
        Ok(SearchResult {
            college,
            hostels: refined,
        })
    }

    #[tracing::instrument(skip(self), fields(hostel_id = %hostel_id))]
    pub async fn get_hostel(&self, hostel_id: Uuid) -> Result<Hostel, UsecaseError> {
        self.hostel_repository
            .find_by_id(hostel_id)
            .await?
            .ok_or_else(|| UsecaseError::NotFound("Hostel".to_string()))
    }

    #[tracing::instrument(skip(self, listing), fields(user_id = %actor.user_id, name = %listing.name))]
    pub async fn create_hostel(
        &self,
        actor: &Actor,
        listing: HostelListing,
    ) -> Result<Hostel, UsecaseError> {
        actor.require(Capability::ListHostel)?;

        listing
            .coordinates
            .validate()
            .map_err(|e| UsecaseError::Validation(e.to_string()))?;
        if listing.available_beds > listing.total_beds {
            return Err(UsecaseError::Validation(
                "available beds cannot exceed total beds".to_string(),
            ));
        }

        let hostel = Hostel::new(actor.user_id, listing);
        self.hostel_repository.create(&hostel).await?;

        tracing::info!(hostel_id = %hostel.id, "hostel listed");
        Ok(hostel)
    }
}
