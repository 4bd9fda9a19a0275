//! Generic soft-delete-aware data access.
//!
//! # Design
//! `Repository<E>` works over any entity that names its bookkeeping columns
//! through `SoftDelete`. Reads always exclude rows with `deleted_at` set, and
//! writes stamp `created_at`/`updated_at` themselves so callers only supply
//! domain columns. Partial updates take an `ActiveModel` whose unset columns
//! stay `NotSet` and are therefore left untouched in the row.

use std::marker::PhantomData;

use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::error::{Error, Result};

/// Bookkeeping columns the generic repository needs to know about.
pub trait SoftDelete: EntityTrait {
    fn id_column() -> Self::Column;
    fn created_at_column() -> Self::Column;
    fn updated_at_column() -> Self::Column;
    fn deleted_at_column() -> Self::Column;
}

#[derive(Debug)]
pub struct Repository<E> {
    db: DatabaseConnection,
    entity: PhantomData<fn() -> E>,
}

impl<E> Clone for Repository<E> {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
            entity: PhantomData,
        }
    }
}

impl<E: SoftDelete> Repository<E> {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            entity: PhantomData,
        }
    }

    /// All live rows matching `filter`, oldest first. Pass `Condition::all()`
    /// for no filtering.
    pub async fn find_all(&self, filter: Condition) -> Result<Vec<E::Model>> {
        let rows = E::find()
            .filter(E::deleted_at_column().is_null())
            .filter(filter)
            .order_by_asc(E::id_column())
            .all(&self.db)
            .await?;
        Ok(rows)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<E::Model> {
        E::find()
            .filter(E::id_column().eq(id))
            .filter(E::deleted_at_column().is_null())
            .one(&self.db)
            .await?
            .ok_or(Error::NotFound)
    }

    /// Insert a new row; the database assigns the identifier.
    pub async fn create<A>(&self, mut model: A) -> Result<E::Model>
    where
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
        E::Model: IntoActiveModel<A>,
    {
        let now = Utc::now();
        model.set(E::created_at_column(), now.into());
        model.set(E::updated_at_column(), now.into());
        Ok(model.insert(&self.db).await?)
    }

    /// Write only the columns set in `changes` to the live row `id`.
    pub async fn updates_by_id<A>(&self, id: i64, mut changes: A) -> Result<()>
    where
        A: ActiveModelTrait<Entity = E>,
    {
        changes.set(E::updated_at_column(), Utc::now().into());
        let result = E::update_many()
            .set(changes)
            .filter(E::id_column().eq(id))
            .filter(E::deleted_at_column().is_null())
            .exec(&self.db)
            .await?;
        if result.rows_affected == 0 {
            return Err(Error::NotFound);
        }
        Ok(())
    }

    /// Soft-delete: the row stays in the table but disappears from reads.
    pub async fn delete_by_id(&self, id: i64) -> Result<()> {
        let now = Utc::now();
        let result = E::update_many()
            .col_expr(E::deleted_at_column(), Expr::value(now))
            .col_expr(E::updated_at_column(), Expr::value(now))
            .filter(E::id_column().eq(id))
            .filter(E::deleted_at_column().is_null())
            .exec(&self.db)
            .await?;
        if result.rows_affected == 0 {
            return Err(Error::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{ActiveValue::Set, EntityTrait};

    use super::*;
    use crate::entity::todo;

    async fn repository() -> (Repository<todo::Entity>, DatabaseConnection) {
        let db = crate::db::connect("sqlite::memory:").await.unwrap();
        (Repository::new(db.clone()), db)
    }

    fn new_todo(title: &str) -> todo::ActiveModel {
        todo::ActiveModel {
            title: Set(title.to_string()),
            description: Set(String::new()),
            done: Set(false),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn find_all_on_empty_table_is_empty() {
        let (repo, _db) = repository().await;
        let rows = repo.find_all(Condition::all()).await.unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn create_assigns_increasing_ids_and_timestamps() {
        let (repo, _db) = repository().await;
        let first = repo.create(new_todo("first")).await.unwrap();
        let second = repo.create(new_todo("second")).await.unwrap();

        assert!(first.id > 0);
        assert!(second.id > first.id);
        assert_eq!(first.created_at, first.updated_at);
        assert!(first.deleted_at.is_none());
    }

    #[tokio::test]
    async fn find_all_keeps_insertion_order_and_applies_filter() {
        let (repo, _db) = repository().await;
        repo.create(new_todo("a")).await.unwrap();
        let b = repo.create(new_todo("b")).await.unwrap();
        repo.create(new_todo("c")).await.unwrap();

        let titles: Vec<String> = repo
            .find_all(Condition::all())
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.title)
            .collect();
        assert_eq!(titles, ["a", "b", "c"]);

        let done = todo::ActiveModel {
            done: Set(true),
            ..Default::default()
        };
        repo.updates_by_id(b.id, done).await.unwrap();

        let finished = repo
            .find_all(Condition::all().add(todo::Column::Done.eq(true)))
            .await
            .unwrap();
        assert_eq!(finished.len(), 1);
        assert_eq!(finished[0].id, b.id);
    }

    #[tokio::test]
    async fn find_by_id_missing_is_not_found() {
        let (repo, _db) = repository().await;
        let err = repo.find_by_id(42).await.unwrap_err();
        assert!(matches!(err, Error::NotFound));
    }

    #[tokio::test]
    async fn updates_by_id_touches_only_set_columns() {
        let (repo, _db) = repository().await;
        let mut model = new_todo("Buy milk");
        model.description = Set("From the store".to_string());
        let created = repo.create(model).await.unwrap();

        let changes = todo::ActiveModel {
            title: Set("Buy bread".to_string()),
            ..Default::default()
        };
        repo.updates_by_id(created.id, changes).await.unwrap();

        let stored = repo.find_by_id(created.id).await.unwrap();
        assert_eq!(stored.title, "Buy bread");
        assert_eq!(stored.description, "From the store");
        assert!(!stored.done);
        assert!(stored.updated_at >= created.updated_at);
        assert_eq!(stored.created_at, created.created_at);
    }

    #[tokio::test]
    async fn updates_by_id_missing_is_not_found() {
        let (repo, _db) = repository().await;
        let err = repo
            .updates_by_id(7, todo::ActiveModel { ..Default::default() })
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NotFound));
    }

    #[tokio::test]
    async fn delete_by_id_soft_deletes() {
        let (repo, db) = repository().await;
        let created = repo.create(new_todo("gone soon")).await.unwrap();

        repo.delete_by_id(created.id).await.unwrap();

        assert!(matches!(repo.find_by_id(created.id).await, Err(Error::NotFound)));
        assert!(repo.find_all(Condition::all()).await.unwrap().is_empty());

        // The row is still physically present.
        let raw = todo::Entity::find_by_id(created.id).one(&db).await.unwrap().unwrap();
        assert!(raw.deleted_at.is_some());

        let again = repo.delete_by_id(created.id).await.unwrap_err();
        assert!(matches!(again, Error::NotFound));
    }

    #[tokio::test]
    async fn updates_by_id_ignores_deleted_rows() {
        let (repo, _db) = repository().await;
        let created = repo.create(new_todo("deleted")).await.unwrap();
        repo.delete_by_id(created.id).await.unwrap();

        let changes = todo::ActiveModel {
            done: Set(true),
            ..Default::default()
        };
        let err = repo.updates_by_id(created.id, changes).await.unwrap_err();
        assert!(matches!(err, Error::NotFound));
    }
}
