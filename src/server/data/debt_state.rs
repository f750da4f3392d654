use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

/// Read-only access to the `DEBT_STATES` reference set.
pub struct DebtStateRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DebtStateRepository<'a> {
    /// Creates a new instance of [`DebtStateRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Get all debt states
    pub async fn get_all(&self) -> Result<Vec<entity::debt_state::Model>, DbErr> {
        entity::prelude::DebtState::find()
            .order_by_asc(entity::debt_state::Column::Id)
            .all(self.db)
            .await
    }

    /// Get a debt state by its name
    pub async fn find_by_name(
        &self,
        name: &str,
    ) -> Result<Option<entity::debt_state::Model>, DbErr> {
        entity::prelude::DebtState::find()
            .filter(entity::debt_state::Column::Name.eq(name))
            .one(self.db)
            .await
    }
}
