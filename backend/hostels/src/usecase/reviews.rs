use uuid::Uuid;

use crate::domain::rating::{RatingBreakdown, RatingSummary};
use crate::domain::review::Review;
use crate::domain::user::Capability;
use crate::usecase::access::Actor;
use crate::usecase::contracts::{HostelRepository, ReviewRepository, UserRepository};
use crate::usecase::error::UsecaseError;
use crate::usecase::ratings::aggregate;

#[derive(Debug, Clone)]
pub struct HostelReviews {
    pub reviews: Vec<Review>,
    pub summary: RatingSummary,
}

pub struct ReviewsUseCase<Rv, H, U>
where
    Rv: ReviewRepository,
    H: HostelRepository,
    U: UserRepository,
{
    review_repository: Rv,
    hostel_repository: H,
    user_repository: U,
}

impl<Rv, H, U> ReviewsUseCase<Rv, H, U>
where
    Rv: ReviewRepository,
    H: HostelRepository,
    U: UserRepository,
{
    pub fn new(review_repository: Rv, hostel_repository: H, user_repository: U) -> Self {
        Self {
            review_repository,
            hostel_repository,
            user_repository,
        }
    }

    #[tracing::instrument(skip(self), fields(hostel_id = %hostel_id))]
    pub async fn hostel_reviews(&self, hostel_id: Uuid) -> Result<HostelReviews, UsecaseError> {
        self.hostel_repository
            .find_by_id(hostel_id)
            .await?
            .ok_or_else(|| UsecaseError::NotFound("Hostel".to_string()))?;

        let reviews = self.review_repository.find_by_hostel(hostel_id).await?;
        let summary = aggregate(&reviews);

        tracing::debug!(count = reviews.len(), overall = summary.overall, "reviews aggregated");
        Ok(HostelReviews { reviews, summary })
    }

    /// Records a review. The stored hostel rating is left as it is.
    #[tracing::instrument(skip(self, comment), fields(user_id = %actor.user_id, hostel_id = %hostel_id))]
    pub async fn submit_review(
        &self,
        actor: &Actor,
        hostel_id: Uuid,
        rating: RatingBreakdown,
        comment: String,
    ) -> Result<Review, UsecaseError> {
        actor.require(Capability::WriteReview)?;

        if !rating.is_valid() {
            return Err(UsecaseError::Validation(
                "Rating must be between 1 and 5".to_string(),
            ));
        }

        self.hostel_repository
            .find_by_id(hostel_id)
            .await?
            .ok_or_else(|| UsecaseError::NotFound("Hostel".to_string()))?;

        let student = self
            .user_repository
            .find_by_id(actor.user_id)
            .await?
            .ok_or_else(|| UsecaseError::Unauthorized("Unknown session user".to_string()))?;

        let review = Review::new(
            hostel_id,
            student.id,
            student.name,
            student.college.unwrap_or_default(),
            rating,
            comment,
        );
        self.review_repository.create(&review).await?;

        tracing::info!(review_id = %review.id, overall = rating.overall, "review submitted");
        Ok(review)
    }
}
