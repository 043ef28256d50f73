use std::time::Duration;

use uuid::Uuid;

use crate::domain::booking::{Booking, StudentContact};
use crate::domain::user::Capability;
use crate::usecase::access::Actor;
use crate::usecase::contracts::{BookingRepository, HostelRepository, UserRepository};
use crate::usecase::error::UsecaseError;

/// Contact fields entered at checkout; blanks fall back to the profile.
#[derive(Debug, Clone, Default)]
pub struct CheckoutDetails {
    pub student_name: Option<String>,
    pub student_phone: Option<String>,
    pub college_name: Option<String>,
}

pub struct BookingsUseCase<B, H, U>
where
    B: BookingRepository,
    H: HostelRepository,
    U: UserRepository,
{
    booking_repository: B,
    hostel_repository: H,
    user_repository: U,
    payment_delay: Duration,
}

impl<B, H, U> BookingsUseCase<B, H, U>
where
    B: BookingRepository,
    H: HostelRepository,
    U: UserRepository,
{
    pub fn new(
        booking_repository: B,
        hostel_repository: H,
        user_repository: U,
        payment_delay: Duration,
    ) -> Self {
        Self {
            booking_repository,
            hostel_repository,
            user_repository,
            payment_delay,
        }
    }

    /// Collects the token amount and reserves a bed. Payment is simulated and
    /// always succeeds; available beds are not decremented.
    #[tracing::instrument(skip(self, details), fields(user_id = %actor.user_id, hostel_id = %hostel_id))]
    pub async fn checkout(
        &self,
        actor: &Actor,
        hostel_id: Uuid,
        details: CheckoutDetails,
    ) -> Result<Booking, UsecaseError> {
        actor.require(Capability::BookHostel)?;

        let hostel = self
            .hostel_repository
            .find_by_id(hostel_id)
            .await?
            .ok_or_else(|| UsecaseError::NotFound("Hostel".to_string()))?;

        let student = self
            .user_repository
            .find_by_id(actor.user_id)
            .await?
            .ok_or_else(|| UsecaseError::Unauthorized("Unknown session user".to_string()))?;

        let contact = StudentContact {
            name: non_blank(details.student_name).unwrap_or(student.name),
            phone: non_blank(details.student_phone).unwrap_or(student.phone),
            college_name: non_blank(details.college_name)
                .or(student.college)
                .unwrap_or_default(),
        };

        tracing::debug!(delay_ms = self.payment_delay.as_millis() as u64, "processing token payment");
        tokio::time::sleep(self.payment_delay).await;

        let booking = Booking::paid(hostel.id, student.id, contact);
        self.booking_repository.create(&booking).await?;

        tracing::info!(booking_id = %booking.id, payment_id = ?booking.payment_id, "booking confirmed");
        Ok(booking)
    }

    #[tracing::instrument(skip(self), fields(user_id = %actor.user_id))]
    pub async fn my_bookings(&self, actor: &Actor) -> Result<Vec<Booking>, UsecaseError> {
        let bookings = self.booking_repository.find_by_student(actor.user_id).await?;

        tracing::debug!(count = bookings.len(), "retrieved bookings");
        Ok(bookings)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::booking::{BookingStatus, PaymentStatus, TOKEN_AMOUNT};
    use crate::domain::user::{Role, User};
    use crate::repository::seed::{Seed, FIXTURES};
    use crate::usecase::contracts::{MockBookingRepository, MockHostelRepository, MockUserRepository};

    fn student() -> User {
        User::new(
            "Rahul Kumar".to_string(),
            "rahul@example.com".to_string(),
            "+91 9876543201".to_string(),
            Role::Student,
        )
        .with_college(Some("SNIST".to_string()), Some("snist".to_string()))
    }

    fn mocks_for(user: &User) -> (MockHostelRepository, MockUserRepository, Uuid) {
        let hostel = Seed::parse(FIXTURES).unwrap().hostels.remove(1);
        let hostel_id = hostel.id;

        let mut hostel_repo = MockHostelRepository::new();
        hostel_repo
            .expect_find_by_id()
            .returning(move |id| Ok((id == hostel.id).then(|| hostel.clone())));

        let user = user.clone();
        let mut user_repo = MockUserRepository::new();
        user_repo
            .expect_find_by_id()
            .returning(move |id| Ok((id == user.id).then(|| user.clone())));

        (hostel_repo, user_repo, hostel_id)
    }

    #[tokio::test]
    async fn test_checkout_defaults_contact_from_profile() {
        let user = student();
        let actor = Actor::new(user.id, Role::Student);
        let (hostel_repo, user_repo, hostel_id) = mocks_for(&user);

        let mut booking_repo = MockBookingRepository::new();
        booking_repo.expect_create().times(1).returning(|_| Ok(()));

        let usecase = BookingsUseCase::new(booking_repo, hostel_repo, user_repo, Duration::ZERO);
        let details = CheckoutDetails {
            student_phone: Some("+91 9111111111".to_string()),
            college_name: Some("  ".to_string()),
            ..Default::default()
        };

        let booking = usecase.checkout(&actor, hostel_id, details).await.unwrap();

        assert_eq!(booking.hostel_id, hostel_id);
        assert_eq!(booking.student_id, user.id);
        assert_eq!(booking.student_name, "Rahul Kumar");
        assert_eq!(booking.student_phone, "+91 9111111111");
        assert_eq!(booking.college_name, "SNIST");
        assert_eq!(booking.token_amount, TOKEN_AMOUNT);
        assert_eq!(booking.payment_status, PaymentStatus::Completed);
        assert_eq!(booking.status, BookingStatus::Active);
    }

    #[tokio::test(start_paused = true)]
    async fn test_checkout_waits_for_payment() {
        let user = student();
        let actor = Actor::new(user.id, Role::Student);
        let (hostel_repo, user_repo, hostel_id) = mocks_for(&user);

        let mut booking_repo = MockBookingRepository::new();
        booking_repo.expect_create().times(1).returning(|_| Ok(()));

        let usecase = BookingsUseCase::new(
            booking_repo,
            hostel_repo,
            user_repo,
            Duration::from_millis(2000),
        );

        let started = tokio::time::Instant::now();
        usecase
            .checkout(&actor, hostel_id, CheckoutDetails::default())
            .await
            .unwrap();

        assert!(started.elapsed() >= Duration::from_millis(2000));
    }

    #[tokio::test]
    async fn test_checkout_unknown_hostel() {
        let user = student();
        let actor = Actor::new(user.id, Role::Student);
        let (hostel_repo, user_repo, _) = mocks_for(&user);

        let usecase = BookingsUseCase::new(
            MockBookingRepository::new(),
            hostel_repo,
            user_repo,
            Duration::ZERO,
        );

        let result = usecase
            .checkout(&actor, Uuid::new_v4(), CheckoutDetails::default())
            .await;

        assert!(matches!(result, Err(UsecaseError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_checkout_requires_student() {
        let usecase = BookingsUseCase::new(
            MockBookingRepository::new(),
            MockHostelRepository::new(),
            MockUserRepository::new(),
            Duration::ZERO,
        );
        let admin = Actor::new(Uuid::new_v4(), Role::Admin);

        let result = usecase
            .checkout(&admin, Uuid::new_v4(), CheckoutDetails::default())
            .await;

        assert!(matches!(result, Err(UsecaseError::Forbidden(_))));
    }

    #[tokio::test]
    async fn test_my_bookings() {
        let user = student();
        let actor = Actor::new(user.id, Role::Student);
        let booking = Booking::paid(
            Uuid::new_v4(),
            user.id,
            StudentContact {
                name: user.name.clone(),
                phone: user.phone.clone(),
                college_name: "SNIST".to_string(),
            },
        );
        let expected = booking.clone();

        let mut booking_repo = MockBookingRepository::new();
        booking_repo
            .expect_find_by_student()
            .with(mockall::predicate::eq(user.id))
            .times(1)
            .returning(move |_| Ok(vec![booking.clone()]));

        let usecase = BookingsUseCase::new(
            booking_repo,
            MockHostelRepository::new(),
            MockUserRepository::new(),
            Duration::ZERO,
        );

        assert_eq!(usecase.my_bookings(&actor).await.unwrap(), vec![expected]);
    }
}
