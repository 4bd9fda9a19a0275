//! Business rules for todos.
//!
//! # Design
//! `TodoService` is stateless apart from its repository handle and is cheap to
//! clone into request state. Every public operation emits exactly one log
//! record describing its outcome.

use log::{error, info, warn};
use sea_orm::{ActiveValue::Set, ColumnTrait, Condition};

use crate::dto::{CreateTodo, TodoFilter, TodoView, UpdateTodo};
use crate::entity::todo;
use crate::error::{Error, Result};
use crate::repository::Repository;

pub type TodoRepository = Repository<todo::Entity>;

#[derive(Clone, Debug)]
pub struct TodoService {
    todos: TodoRepository,
}

impl TodoService {
    pub fn new(todos: TodoRepository) -> Self {
        Self { todos }
    }

    pub async fn list(&self) -> Result<Vec<TodoView>> {
        self.list_filtered(TodoFilter::default()).await
    }

    pub async fn list_filtered(&self, filter: TodoFilter) -> Result<Vec<TodoView>> {
        let mut condition = Condition::all();
        if let Some(done) = filter.done {
            condition = condition.add(todo::Column::Done.eq(done));
        }

        let result = self
            .todos
            .find_all(condition)
            .await
            .map(|rows| rows.into_iter().map(TodoView::from).collect::<Vec<_>>());
        match &result {
            Ok(views) => info!("op=list count={} outcome=ok", views.len()),
            Err(err) => log_failure("list", None, err),
        }
        result
    }

    pub async fn create(&self, input: CreateTodo) -> Result<TodoView> {
        let result = async {
            require_title(&input.title)?;
            let model = todo::ActiveModel {
                title: Set(input.title),
                description: Set(input.description.unwrap_or_default()),
                done: Set(false),
                ..Default::default()
            };
            self.todos.create(model).await.map(TodoView::from)
        }
        .await;
        let id = result.as_ref().ok().map(|view| view.id);
        log_outcome("create", id, &result);
        result
    }

    pub async fn get(&self, id: i64) -> Result<TodoView> {
        let result = self.todos.find_by_id(id).await.map(TodoView::from);
        log_outcome("get", Some(id), &result);
        result
    }

    /// Apply the fields present in `input`. A present description is written
    /// even when empty; a present title must not be blank.
    pub async fn update(&self, id: i64, input: UpdateTodo) -> Result<TodoView> {
        let result = async {
            self.todos.find_by_id(id).await?;

            let mut changes = todo::ActiveModel::default();
            if let Some(title) = input.title {
                require_title(&title)?;
                changes.title = Set(title);
            }
            if let Some(description) = input.description {
                changes.description = Set(description);
            }
            if let Some(done) = input.done {
                changes.done = Set(done);
            }
            self.todos.updates_by_id(id, changes).await?;

            self.todos.find_by_id(id).await.map(TodoView::from)
        }
        .await;
        log_outcome("update", Some(id), &result);
        result
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = async {
            self.todos.find_by_id(id).await?;
            self.todos.delete_by_id(id).await
        }
        .await;
        log_outcome("delete", Some(id), &result);
        result
    }
}

fn require_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(Error::validation("title must not be empty"));
    }
    Ok(())
}

fn log_outcome<T>(op: &str, id: Option<i64>, result: &Result<T>) {
    match result {
        Ok(_) => info!("op={op} id={} outcome=ok", display_id(id)),
        Err(err) => log_failure(op, id, err),
    }
}

fn log_failure(op: &str, id: Option<i64>, err: &Error) {
    let id = display_id(id);
    match err {
        Error::Validation(reason) => warn!("op={op} id={id} outcome=invalid reason={reason:?}"),
        Error::NotFound => warn!("op={op} id={id} outcome=not_found"),
        Error::Storage(db) => error!("op={op} id={id} outcome=storage_error error={db}"),
    }
}

fn display_id(id: Option<i64>) -> String {
    id.map_or_else(|| "-".to_string(), |id| id.to_string())
}
