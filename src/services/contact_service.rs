//! services/contact_service.rs
//! Contact operations, each mapped to one statement against the `contacts` table.

use anyhow::Context;
use chrono::{SecondsFormat, Utc};
use sqlx::{Pool, Row, Sqlite};
use uuid::Uuid;

use crate::error::ContactError;
use crate::models::contact_model::{
    Contact, ContactDraft, ContactStats, ContactStatus, ServiceCount,
};

const CONTACT_COLUMNS: &str =
    "id, name, email, service, message, status, created_at, updated_at";

/// Fixed-width RFC 3339 so that text ordering in SQLite is chronological.
fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn not_found() -> ContactError {
    ContactError::NotFound("Contact not found".to_string())
}

#[derive(Clone, Debug)]
pub struct ContactService {
    pub(crate) db_pool: Pool<Sqlite>,
}

impl ContactService {
    pub fn new(db_pool: Pool<Sqlite>) -> Self {
        ContactService { db_pool }
    }

    pub async fn run_migrations(&self) -> anyhow::Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.db_pool)
            .await
            .context("Failed to run contacts migrations")?;
        Ok(())
    }

    /// Closes the pool; later calls fail with a storage error.
    pub async fn close(&self) {
        self.db_pool.close().await;
    }

    /// Round trip used by the health endpoint.
    pub async fn ping(&self) -> Result<(), ContactError> {
        sqlx::query("SELECT 1").execute(&self.db_pool).await?;
        Ok(())
    }

    /// Stores a validated draft with status `new` and returns its public id.
    pub async fn submit(&self, draft: ContactDraft) -> Result<String, ContactError> {
        let contact_id = Uuid::new_v4().to_string();
        let now = now_timestamp();

        sqlx::query(
            r#"
            INSERT INTO contacts (id, name, email, service, message, status, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, NULL)
            "#,
        )
        .bind(&contact_id)
        .bind(&draft.name)
        .bind(&draft.email)
        .bind(&draft.service)
        .bind(&draft.message)
        .bind(ContactStatus::New.as_str())
        .bind(&now)
        .execute(&self.db_pool)
        .await?;

        log::info!("Stored contact {} ({})", contact_id, draft.email);
        Ok(contact_id)
    }

    /// All contacts, newest first.
    pub async fn list(&self) -> Result<Vec<Contact>, ContactError> {
        let sql = format!(
            "SELECT {CONTACT_COLUMNS} FROM contacts ORDER BY created_at DESC, rowid DESC"
        );
        let contacts = sqlx::query_as::<_, Contact>(&sql)
            .fetch_all(&self.db_pool)
            .await?;

        log::debug!("Listed {} contacts", contacts.len());
        Ok(contacts)
    }

    pub async fn get_by_id(&self, contact_id: &str) -> Result<Contact, ContactError> {
        let sql = format!("SELECT {CONTACT_COLUMNS} FROM contacts WHERE id = ?1");
        sqlx::query_as::<_, Contact>(&sql)
            .bind(contact_id)
            .fetch_optional(&self.db_pool)
            .await?
            .ok_or_else(not_found)
    }

    /// Sets a new status (any of the four, from any current one) and stamps `updated_at`.
    pub async fn update_status(
        &self,
        contact_id: &str,
        new_status: &str,
    ) -> Result<ContactStatus, ContactError> {
        let status: ContactStatus = new_status.parse().map_err(|_| {
            let valid: Vec<&str> = ContactStatus::ALL.iter().map(|s| s.as_str()).collect();
            ContactError::InvalidArgument(format!(
                "Invalid status. Must be one of: {}",
                valid.join(", ")
            ))
        })?;

        let result = sqlx::query(
            r#"
            UPDATE contacts
            SET status = ?2,
                updated_at = ?3
            WHERE id = ?1
            "#,
        )
        .bind(contact_id)
        .bind(status.as_str())
        .bind(now_timestamp())
        .execute(&self.db_pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(not_found());
        }

        log::info!("Contact {} moved to status '{}'", contact_id, status);
        Ok(status)
    }

    /// Removes a contact. Deleting an id twice reports `NotFound` the second time.
    pub async fn delete(&self, contact_id: &str) -> Result<(), ContactError> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = ?1")
            .bind(contact_id)
            .execute(&self.db_pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found());
        }

        log::info!("Deleted contact {}", contact_id);
        Ok(())
    }

    /// Totals per status and per service, computed from a single grouped read.
    pub async fn stats(&self) -> Result<ContactStats, ContactError> {
        let rows = sqlx::query(
            r#"
            SELECT status, service, COUNT(*) AS cnt
            FROM contacts
            GROUP BY status, service
            "#,
        )
        .fetch_all(&self.db_pool)
        .await?;

        let mut stats = ContactStats::default();
        for row in rows {
            let raw_status: String = row.try_get("status")?;
            let service: Option<String> = row.try_get("service")?;
            let count = row.try_get::<i64, _>("cnt")? as u64;

            let status = raw_status
                .parse::<ContactStatus>()
                .map_err(|e| sqlx::Error::Decode(Box::new(e)))?;
            stats.total_contacts += count;
            match status {
                ContactStatus::New => stats.new_contacts += count,
                ContactStatus::Contacted => stats.contacted += count,
                ContactStatus::Qualified => stats.qualified += count,
                ContactStatus::Closed => stats.closed += count,
            }

            match stats
                .service_breakdown
                .iter()
                .position(|entry| entry.service == service)
            {
                Some(idx) => stats.service_breakdown[idx].count += count,
                None => stats.service_breakdown.push(ServiceCount { service, count }),
            }
        }

        // None sorts before Some, so the "no service" group leads among equal counts.
        stats
            .service_breakdown
            .sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.service.cmp(&b.service)));

        Ok(stats)
    }
}
