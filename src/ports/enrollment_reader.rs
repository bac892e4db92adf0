//! Enrollment reader port - lookup of a user's enrollment and ticket.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EnrollmentId, UserId};
use crate::domain::ticket::{Enrollment, Ticket};

/// Reader port for the records the hotel entitlement rule inspects.
///
/// The two lookups are separate because the ticket lookup needs the id the
/// enrollment lookup returns.
#[async_trait]
pub trait EnrollmentReader: Send + Sync {
    /// Find the enrollment belonging to a user (at most one per user).
    async fn find_by_user(&self, user_id: UserId) -> Result<Option<Enrollment>, DomainError>;

    /// Find the ticket of an enrollment, joined with its ticket type.
    async fn find_ticket_by_enrollment(
        &self,
        enrollment_id: EnrollmentId,
    ) -> Result<Option<Ticket>, DomainError>;
}
