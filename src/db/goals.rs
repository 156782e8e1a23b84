use sqlx::PgPool;
use uuid::Uuid;

use crate::models::goal::{Goal, GoalForm};

/// Goals of a user, latest due date first. Goals without a due date sort
/// ahead of dated ones, as Postgres places NULLs first in descending order.
pub async fn goals_for_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<Goal>, sqlx::Error> {
    sqlx::query_as::<_, Goal>(
        r#"
        SELECT id, user_id, goal_type, target_value, comparison, description, due_date, created_at
        FROM goals
        WHERE user_id = $1
        ORDER BY due_date DESC NULLS FIRST, created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

pub async fn insert_goal(pool: &PgPool, user_id: Uuid, form: &GoalForm) -> Result<Goal, sqlx::Error> {
    sqlx::query_as::<_, Goal>(
        r#"
        INSERT INTO goals (user_id, goal_type, target_value, comparison, description, due_date)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, user_id, goal_type, target_value, comparison, description, due_date, created_at
        "#,
    )
    .bind(user_id)
    .bind(form.goal_type.as_str())
    .bind(form.target_value)
    .bind(form.comparison.as_str())
    .bind(&form.description)
    .bind(form.due_date)
    .fetch_one(pool)
    .await
}

/// Returns `None` when the goal does not exist or belongs to someone else.
pub async fn update_goal(
    pool: &PgPool,
    user_id: Uuid,
    goal_id: Uuid,
    form: &GoalForm,
) -> Result<Option<Goal>, sqlx::Error> {
    sqlx::query_as::<_, Goal>(
        r#"
        UPDATE goals
        SET goal_type = $3, target_value = $4, comparison = $5, description = $6, due_date = $7
        WHERE id = $1 AND user_id = $2
        RETURNING id, user_id, goal_type, target_value, comparison, description, due_date, created_at
        "#,
    )
    .bind(goal_id)
    .bind(user_id)
    .bind(form.goal_type.as_str())
    .bind(form.target_value)
    .bind(form.comparison.as_str())
    .bind(&form.description)
    .bind(form.due_date)
    .fetch_optional(pool)
    .await
}
