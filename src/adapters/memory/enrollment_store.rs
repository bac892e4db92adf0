//! In-memory enrollment and ticket store.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, EnrollmentId, TicketId, Timestamp, UserId};
use crate::domain::ticket::{Enrollment, Ticket, TicketStatus, TicketType};
use crate::ports::EnrollmentReader;

#[derive(Debug, Default)]
struct Tables {
    enrollments: Vec<Enrollment>,
    tickets: Vec<Ticket>,
    next_enrollment_id: i32,
    next_ticket_id: i32,
}

/// In-memory storage for enrollments and tickets.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEnrollmentStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryEnrollmentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enroll a user and return the new enrollment.
    pub async fn create_enrollment(&self, user_id: UserId, name: impl Into<String>) -> Enrollment {
        let mut tables = self.tables.write().await;
        tables.next_enrollment_id += 1;
        let now = Timestamp::now();
        let enrollment = Enrollment {
            id: EnrollmentId::new(tables.next_enrollment_id),
            user_id,
            name: name.into(),
            created_at: now,
            updated_at: now,
        };
        tables.enrollments.push(enrollment.clone());
        enrollment
    }

    /// Issue a ticket of the given type to an enrollment.
    pub async fn create_ticket(
        &self,
        enrollment_id: EnrollmentId,
        ticket_type: TicketType,
        status: TicketStatus,
    ) -> Ticket {
        let mut tables = self.tables.write().await;
        tables.next_ticket_id += 1;
        let now = Timestamp::now();
        let ticket = Ticket {
            id: TicketId::new(tables.next_ticket_id),
            enrollment_id,
            status,
            ticket_type,
            created_at: now,
            updated_at: now,
        };
        tables.tickets.push(ticket.clone());
        ticket
    }
}

#[async_trait]
impl EnrollmentReader for InMemoryEnrollmentStore {
    async fn find_by_user(&self, user_id: UserId) -> Result<Option<Enrollment>, DomainError> {
        Ok(self
            .tables
            .read()
            .await
            .enrollments
            .iter()
            .find(|e| e.user_id == user_id)
            .cloned())
    }

    async fn find_ticket_by_enrollment(
        &self,
        enrollment_id: EnrollmentId,
    ) -> Result<Option<Ticket>, DomainError> {
        Ok(self
            .tables
            .read()
            .await
            .tickets
            .iter()
            .find(|t| t.enrollment_id == enrollment_id)
            .cloned())
    }
}
