//! HotelAccessGate - the entitlement step shared by every hotel query.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::hotel::HotelError;
use crate::domain::ticket::evaluate;
use crate::ports::EnrollmentReader;

/// Fetches the caller's enrollment and ticket and applies the entitlement rule.
pub struct HotelAccessGate {
    enrollments: Arc<dyn EnrollmentReader>,
}

impl HotelAccessGate {
    pub fn new(enrollments: Arc<dyn EnrollmentReader>) -> Self {
        Self { enrollments }
    }

    /// Returns `Ok(())` if the user may see hotel data.
    ///
    /// The ticket lookup is skipped when there is no enrollment.
    pub async fn check(&self, user_id: UserId) -> Result<(), HotelError> {
        let enrollment = self.enrollments.find_by_user(user_id).await?;

        let ticket = match &enrollment {
            Some(enrollment) => {
                self.enrollments
                    .find_ticket_by_enrollment(enrollment.id)
                    .await?
            }
            None => None,
        };

        let outcome = evaluate(enrollment.as_ref(), ticket.as_ref());
        match HotelError::from_entitlement(outcome) {
            None => Ok(()),
            Some(err) => {
                tracing::warn!(user_id = %user_id, error = %err, "Hotel access denied");
                Err(err)
            }
        }
    }
}
