use sea_orm::DatabaseConnection;

use crate::server::{
    data::{group::GroupRepository, user::UserRepository},
    error::AppError,
    model::{
        account::{Account, FLIGHT_MANAGERS_GROUP},
        user::{CreateUserParam, User},
    },
    service::password,
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads a user and builds the [`Account`] the policy evaluates.
    ///
    /// # Returns
    /// - `Ok(Some((User, Account)))` - User exists
    /// - `Ok(None)` - No user with that ID
    pub async fn get_account(&self, user_id: i32) -> Result<Option<(User, Account)>, AppError> {
        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Ok(None);
        };

        let groups = GroupRepository::new(self.db)
            .names_for_user(user.id)
            .await?;
        let account = Account::new(&user, groups);

        Ok(Some((user, account)))
    }

    /// Adds `user_id` to the group called `group_name`, creating the group if needed.
    ///
    /// Returns the user's refreshed account. Adding an existing membership is a no-op.
    pub async fn add_to_group(&self, user_id: i32, group_name: &str) -> Result<(User, Account), AppError> {
        if UserRepository::new(self.db).find_by_id(user_id).await?.is_none() {
            return Err(AppError::NotFound(format!("User {} not found", user_id)));
        }

        let group_repo = GroupRepository::new(self.db);
        let group = group_repo.get_or_create(group_name).await?;
        group_repo.add_user(user_id, group.id).await?;

        tracing::info!("Added user {} to group {}", user_id, group_name);

        self.require_account(user_id).await
    }

    /// Removes `user_id` from the group called `group_name`.
    pub async fn remove_from_group(
        &self,
        user_id: i32,
        group_name: &str,
    ) -> Result<(User, Account), AppError> {
        if UserRepository::new(self.db).find_by_id(user_id).await?.is_none() {
            return Err(AppError::NotFound(format!("User {} not found", user_id)));
        }

        let group_repo = GroupRepository::new(self.db);
        let Some(group) = group_repo.find_by_name(group_name).await? else {
            return Err(AppError::NotFound(format!("Group {} not found", group_name)));
        };

        if !group_repo.remove_user(user_id, group.id).await? {
            return Err(AppError::NotFound(format!(
                "User {} is not a member of {}",
                user_id, group_name
            )));
        }

        tracing::info!("Removed user {} from group {}", user_id, group_name);

        self.require_account(user_id).await
    }

    /// Makes sure the groups the policy relies on exist.
    pub async fn seed_groups(&self) -> Result<(), AppError> {
        GroupRepository::new(self.db)
            .get_or_create(FLIGHT_MANAGERS_GROUP)
            .await?;

        Ok(())
    }

    /// Creates a staff account with `username` unless one already exists.
    ///
    /// # Returns
    /// - `Ok(true)` - Account was created
    /// - `Ok(false)` - Username already taken, nothing changed
    pub async fn ensure_staff_user(&self, username: &str, password: &str) -> Result<bool, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.username_exists(username).await? {
            return Ok(false);
        }

        repo.create(CreateUserParam {
            username: username.to_string(),
            password_hash: password::hash_password(password)?,
            email: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            is_staff: true,
        })
        .await?;

        Ok(true)
    }

    async fn require_account(&self, user_id: i32) -> Result<(User, Account), AppError> {
        self.get_account(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))
    }
}
