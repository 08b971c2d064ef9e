use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

pub struct GroupRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GroupRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<entity::group::Model>, DbErr> {
        entity::prelude::Group::find()
            .filter(entity::group::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Returns the group called `name`, creating it first if needed.
    pub async fn get_or_create(&self, name: &str) -> Result<entity::group::Model, DbErr> {
        entity::prelude::Group::insert(entity::group::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::group::Column::Name)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        self.find_by_name(name).await?.ok_or(DbErr::RecordNotFound(format!(
            "Group {} not found after creation",
            name
        )))
    }

    /// Names of every group `user_id` belongs to, alphabetically.
    pub async fn names_for_user(&self, user_id: i32) -> Result<Vec<String>, DbErr> {
        let groups = entity::prelude::Group::find()
            .inner_join(entity::prelude::UserGroup)
            .filter(entity::user_group::Column::UserId.eq(user_id))
            .order_by_asc(entity::group::Column::Name)
            .all(self.db)
            .await?;

        Ok(groups.into_iter().map(|group| group.name).collect())
    }

    /// Adds a membership row.
    ///
    /// # Returns
    /// - `Ok(true)` - Membership was created
    /// - `Ok(false)` - User already belonged to the group
    pub async fn add_user(&self, user_id: i32, group_id: i32) -> Result<bool, DbErr> {
        let inserted = entity::prelude::UserGroup::insert(entity::user_group::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            group_id: ActiveValue::Set(group_id),
        })
        .on_conflict(
            OnConflict::columns([
                entity::user_group::Column::UserId,
                entity::user_group::Column::GroupId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(inserted > 0)
    }

    /// Removes a membership row, returning whether one existed.
    pub async fn remove_user(&self, user_id: i32, group_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::UserGroup::delete_many()
            .filter(entity::user_group::Column::UserId.eq(user_id))
            .filter(entity::user_group::Column::GroupId.eq(group_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
