//! Strongly-typed identifier value objects.
//!
//! Every persisted record is keyed by a database-assigned integer. Wrapping each
//! key in its own type keeps a `HotelId` from being passed where a `UserId` is
//! expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Declares an `i32`-backed identifier with the usual conversions.
macro_rules! integer_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Wraps a raw database key.
            pub const fn new(id: i32) -> Self {
                Self(id)
            }

            /// Returns the raw database key.
            pub const fn value(&self) -> i32 {
                self.0
            }
        }

        impl From<i32> for $name {
            fn from(id: i32) -> Self {
                Self(id)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.trim().parse()?))
            }
        }
    };
}

integer_id!(
    /// Identifier of a registered user (the `userId` claim of a session token).
    UserId
);

integer_id!(
    /// Identifier of a user's event enrollment.
    EnrollmentId
);

integer_id!(
    /// Identifier of a purchased ticket.
    TicketId
);

integer_id!(
    /// Identifier of a ticket category.
    TicketTypeId
);

integer_id!(
    /// Identifier of a hotel.
    HotelId
);

integer_id!(
    /// Identifier of a hotel room.
    RoomId
);
