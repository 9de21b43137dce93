//! PostgreSQL implementation of statistics repository.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{Click, NewClick};
use crate::domain::repositories::{DailyClicks, LinkClicks, LinkStats, StatsRepository};
use crate::error::AppError;

/// PostgreSQL repository for the click ledger.
///
/// All aggregations left-join `links` to `click_events` so links without
/// clicks report zero instead of disappearing.
pub struct PgStatsRepository {
    pool: Arc<PgPool>,
}

impl PgStatsRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct ClickRow {
    id: i64,
    link_id: i64,
    clicked_at: DateTime<Utc>,
}

#[derive(FromRow)]
struct LinkClicksRow {
    destination: String,
    clicks: i64,
}

#[derive(FromRow)]
struct LinkStatsRow {
    id: i64,
    link: String,
    destination: String,
    clicks_24h: i64,
    clicks_7d: i64,
    clicks_all_time: i64,
}

#[derive(FromRow)]
struct DailyRow {
    day: NaiveDate,
    clicks: i64,
}

#[async_trait]
impl StatsRepository for PgStatsRepository {
    async fn record_click(&self, new_click: NewClick) -> Result<Click, AppError> {
        let row = sqlx::query_as::<_, ClickRow>(
            r#"
            INSERT INTO click_events (link_id)
            VALUES ($1)
            RETURNING id, link_id, clicked_at
            "#,
        )
        .bind(new_click.link_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(Click::new(row.id, row.link_id, row.clicked_at))
    }

    async fn link_clicks(&self, code: &str) -> Result<Option<LinkClicks>, AppError> {
        let row = sqlx::query_as::<_, LinkClicksRow>(
            r#"
            SELECT l.destination, COUNT(ce.id) AS clicks
            FROM links l
            LEFT JOIN click_events ce ON l.id = ce.link_id
            WHERE l.link = $1
            GROUP BY l.destination
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(|r| LinkClicks {
            code: code.to_string(),
            destination: r.destination,
            clicks: r.clicks,
        }))
    }

    async fn all_link_stats(&self, now: DateTime<Utc>) -> Result<Vec<LinkStats>, AppError> {
        let rows = sqlx::query_as::<_, LinkStatsRow>(
            r#"
            SELECT
                l.id,
                l.link,
                l.destination,
                COUNT(ce.id) FILTER (WHERE ce.clicked_at > $1 - INTERVAL '24 hours') AS clicks_24h,
                COUNT(ce.id) FILTER (WHERE ce.clicked_at > $1 - INTERVAL '7 days') AS clicks_7d,
                COUNT(ce.id) AS clicks_all_time
            FROM links l
            LEFT JOIN click_events ce ON l.id = ce.link_id
            GROUP BY l.id, l.link, l.destination
            ORDER BY l.id
            "#,
        )
        .bind(now)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| LinkStats {
                link_id: r.id,
                code: r.link,
                destination: r.destination,
                clicks_24h: r.clicks_24h,
                clicks_7d: r.clicks_7d,
                clicks_all_time: r.clicks_all_time,
            })
            .collect())
    }

    async fn daily_clicks(&self, code: &str, tz: Tz) -> Result<Vec<DailyClicks>, AppError> {
        let rows = sqlx::query_as::<_, DailyRow>(
            r#"
            SELECT (ce.clicked_at AT TIME ZONE $2)::date AS day, COUNT(ce.id) AS clicks
            FROM click_events ce
            JOIN links l ON l.id = ce.link_id
            WHERE l.link = $1
            GROUP BY day
            ORDER BY day
            "#,
        )
        .bind(code)
        .bind(tz.name())
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| DailyClicks {
                date: r.day,
                clicks: r.clicks,
            })
            .collect())
    }
}
