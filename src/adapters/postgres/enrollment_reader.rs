//! PostgreSQL implementation of EnrollmentReader.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::foundation::{
    DomainError, EnrollmentId, TicketId, TicketTypeId, Timestamp, UserId,
};
use crate::domain::ticket::{Enrollment, Ticket, TicketStatus, TicketType};
use crate::ports::EnrollmentReader;

/// PostgreSQL implementation of the EnrollmentReader port.
#[derive(Clone)]
pub struct PostgresEnrollmentReader {
    pool: PgPool,
}

impl PostgresEnrollmentReader {
    /// Creates a new PostgresEnrollmentReader with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct EnrollmentRow {
    id: i32,
    user_id: i32,
    name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Ticket joined with its type.
#[derive(Debug, sqlx::FromRow)]
struct TicketRow {
    id: i32,
    enrollment_id: i32,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    ticket_type_id: i32,
    ticket_type_name: String,
    price: i32,
    is_remote: bool,
    includes_hotel: bool,
}

impl From<EnrollmentRow> for Enrollment {
    fn from(row: EnrollmentRow) -> Self {
        Enrollment {
            id: EnrollmentId::new(row.id),
            user_id: UserId::new(row.user_id),
            name: row.name,
            created_at: Timestamp::from_datetime(row.created_at),
            updated_at: Timestamp::from_datetime(row.updated_at),
        }
    }
}

impl From<TicketRow> for Ticket {
    fn from(row: TicketRow) -> Self {
        Ticket {
            id: TicketId::new(row.id),
            enrollment_id: EnrollmentId::new(row.enrollment_id),
            status: TicketStatus::from(row.status),
            ticket_type: TicketType {
                id: TicketTypeId::new(row.ticket_type_id),
                name: row.ticket_type_name,
                price: row.price,
                is_remote: row.is_remote,
                includes_hotel: row.includes_hotel,
            },
            created_at: Timestamp::from_datetime(row.created_at),
            updated_at: Timestamp::from_datetime(row.updated_at),
        }
    }
}

#[async_trait]
impl EnrollmentReader for PostgresEnrollmentReader {
    async fn find_by_user(&self, user_id: UserId) -> Result<Option<Enrollment>, DomainError> {
        let row = sqlx::query_as::<_, EnrollmentRow>(
            r#"
            SELECT id, "userId" AS user_id, name,
                   "createdAt" AS created_at, "updatedAt" AS updated_at
            FROM "Enrollment"
            WHERE "userId" = $1
            "#,
        )
        .bind(user_id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch enrollment: {}", e)))?;

        tracing::debug!(user_id = %user_id, found = row.is_some(), "Enrollment lookup");

        Ok(row.map(Enrollment::from))
    }

    async fn find_ticket_by_enrollment(
        &self,
        enrollment_id: EnrollmentId,
    ) -> Result<Option<Ticket>, DomainError> {
        let row = sqlx::query_as::<_, TicketRow>(
            r#"
            SELECT t.id, t."enrollmentId" AS enrollment_id, t.status::text AS status,
                   t."createdAt" AS created_at, t."updatedAt" AS updated_at,
                   tt.id AS ticket_type_id, tt.name AS ticket_type_name, tt.price,
                   tt."isRemote" AS is_remote, tt."includesHotel" AS includes_hotel
            FROM "Ticket" t
            JOIN "TicketType" tt ON tt.id = t."ticketTypeId"
            WHERE t."enrollmentId" = $1
            "#,
        )
        .bind(enrollment_id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch ticket: {}", e)))?;

        tracing::debug!(enrollment_id = %enrollment_id, found = row.is_some(), "Ticket lookup");

        Ok(row.map(Ticket::from))
    }
}
