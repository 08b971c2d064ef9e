//! Registration and credential checks.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{is_unique_violation, passenger::PassengerRepository, user::UserRepository},
    error::{auth::AuthError, validation::ValidationErrors, AppError},
    model::{
        account::Account,
        passenger::CreatePassengerParam,
        user::{CreateUserParam, RegisterUserParam, User},
    },
    service::{
        password,
        token::{TokenKind, TokenService},
        user::UserService,
    },
};

const USERNAME_TAKEN: &str = "A user with that username already exists.";

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an account and its passenger profile as one unit.
    ///
    /// Input is validated first and every violation is reported at once. The user
    /// row and the passenger row are written in a single transaction, so a failure
    /// at any point leaves neither behind.
    ///
    /// # Returns
    /// - `Ok(User)` - The new account; its passenger has passport `P-{id:06}`
    /// - `Err(AppError::Validation(_))` - Invalid input or username taken
    /// - `Err(AppError::DbErr(_))` - Store failure, nothing persisted
    pub async fn register(&self, param: RegisterUserParam) -> Result<User, AppError> {
        let mut errors = ValidationErrors::new();
        password::validate_username(&param.username, &mut errors);
        password::validate_password(&param.password, &param.username, &mut errors);
        if !param.email.is_empty() && !param.email.contains('@') {
            errors.add("email", "Enter a valid email address.");
        }
        errors.into_result()?;

        let plain = param.password.clone();
        let password_hash =
            tokio::task::spawn_blocking(move || password::hash_password(&plain)).await??;

        let txn = self.db.begin().await?;

        let user_repo = UserRepository::new(&txn);
        if user_repo.username_exists(&param.username).await? {
            return Err(ValidationErrors::single("username", USERNAME_TAKEN).into());
        }

        let user = user_repo
            .create(CreateUserParam {
                username: param.username,
                password_hash,
                email: param.email,
                first_name: param.first_name,
                last_name: param.last_name,
                is_staff: false,
            })
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    AppError::from(ValidationErrors::single("username", USERNAME_TAKEN))
                } else {
                    e.into()
                }
            })?;

        let passenger = PassengerRepository::new(&txn)
            .create(CreatePassengerParam::for_user(&user))
            .await?;

        txn.commit().await?;

        tracing::info!(
            "Registered user {} ({}) with passenger {}",
            user.id,
            user.username,
            passenger.passport
        );

        Ok(user)
    }

    /// Checks a username/password pair.
    ///
    /// Unknown usernames and wrong passwords are indistinguishable to the caller.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<User, AppError> {
        let credentials = UserRepository::new(self.db)
            .find_credentials(username)
            .await?;

        let Some((user, hash)) = credentials else {
            return Err(AuthError::InvalidCredentials.into());
        };

        let password = password.to_string();
        let verified =
            tokio::task::spawn_blocking(move || password::verify_password(&password, &hash))
                .await?;

        if !verified {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }

    /// Issues a new access token for the account named by a refresh token.
    ///
    /// The account is reloaded so the new token reflects current group membership.
    pub async fn refresh(&self, tokens: &TokenService, refresh_token: &str) -> Result<String, AppError> {
        let claims = tokens.verify(refresh_token, TokenKind::Refresh)?;
        let user_id = claims.user_id()?;

        let Some((_, account)) = UserService::new(self.db).get_account(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        tokens.issue(&account, TokenKind::Access)
    }

    /// Loads the account for a freshly authenticated user.
    pub async fn account_for(&self, user: &User) -> Result<Account, AppError> {
        UserService::new(self.db)
            .get_account(user.id)
            .await?
            .map(|(_, account)| account)
            .ok_or_else(|| AuthError::UserNotInDatabase(user.id).into())
    }
}
