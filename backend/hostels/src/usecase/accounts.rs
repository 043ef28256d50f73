use uuid::Uuid;

use crate::domain::user::{ProfileUpdate, Role, User};
use crate::usecase::contracts::UserRepository;
use crate::usecase::error::UsecaseError;
use crate::usecase::jwt::JwtService;

#[derive(Debug, Clone)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: Role,
    pub college: Option<String>,
    pub college_id: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Session {
    pub user: User,
    pub access_token: String,
}

/// Sign-up, sign-in and profile management. There is no credential check:
/// a session is issued for whoever presents a known email.
pub struct AccountsUseCase<U>
where
    U: UserRepository,
{
    user_repository: U,
    jwt_service: JwtService,
}

impl<U> AccountsUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repository: U, jwt_service: JwtService) -> Self {
        Self {
            user_repository,
            jwt_service,
        }
    }

    #[tracing::instrument(skip(self, registration), fields(role = %registration.role))]
    pub async fn register(&self, registration: Registration) -> Result<Session, UsecaseError> {
        if registration.role == Role::Admin {
            return Err(UsecaseError::Forbidden(
                "admin accounts cannot be self-registered".to_string(),
            ));
        }

        let user = User::new(
            registration.name,
            registration.email,
            registration.phone,
            registration.role,
        )
        .with_college(registration.college, registration.college_id);
        self.user_repository.create(&user).await?;

        tracing::info!(user_id = %user.id, "user registered");
        self.open_session(user)
    }

    /// Signs in by email. An unknown email gets a fresh student account, the
    /// way the demo login always produced a student profile.
    #[tracing::instrument(skip(self))]
    pub async fn login(&self, email: &str) -> Result<Session, UsecaseError> {
        if let Some(user) = self.user_repository.find_by_email(email).await? {
            tracing::info!(user_id = %user.id, "user logged in");
            return self.open_session(user);
        }

        let name = email.split('@').next().unwrap_or(email).to_string();
        let user = User::new(name, email.to_string(), String::new(), Role::Student);
        self.user_repository.create(&user).await?;

        tracing::info!(user_id = %user.id, "created student profile on first login");
        self.open_session(user)
    }

    #[tracing::instrument(skip(self), fields(user_id = %user_id))]
    pub async fn profile(&self, user_id: Uuid) -> Result<User, UsecaseError> {
        self.user_repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| UsecaseError::NotFound("User".to_string()))
    }

    #[tracing::instrument(skip(self, update), fields(user_id = %user_id))]
    pub async fn update_profile(
        &self,
        user_id: Uuid,
        update: ProfileUpdate,
    ) -> Result<User, UsecaseError> {
        let mut user = self.profile(user_id).await?;
        user.update_profile(update);
        self.user_repository.update(&user).await?;

        tracing::debug!("profile updated");
        Ok(user)
    }

    fn open_session(&self, user: User) -> Result<Session, UsecaseError> {
        let access_token = self.jwt_service.generate_access_token(&user)?;
        Ok(Session { user, access_token })
    }
}
