//! Mock readers shared by the hotel handler tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::domain::foundation::{
    DomainError, EnrollmentId, HotelId, RoomId, TicketId, TicketTypeId, Timestamp, UserId,
};
use crate::domain::hotel::{Hotel, HotelWithRooms, Room};
use crate::domain::ticket::{Enrollment, Ticket, TicketStatus, TicketType};
use crate::ports::{EnrollmentReader, HotelReader};

pub fn enrollment_for(user_id: UserId) -> Enrollment {
    Enrollment {
        id: EnrollmentId::new(user_id.value() * 10),
        user_id,
        name: "Test Enrollee".to_string(),
        created_at: Timestamp::now(),
        updated_at: Timestamp::now(),
    }
}

pub fn ticket_for(enrollment: &Enrollment, status: TicketStatus, includes_hotel: bool) -> Ticket {
    Ticket {
        id: TicketId::new(1),
        enrollment_id: enrollment.id,
        status,
        ticket_type: TicketType {
            id: TicketTypeId::new(1),
            name: "Presential".to_string(),
            price: 250,
            is_remote: false,
            includes_hotel,
        },
        created_at: Timestamp::now(),
        updated_at: Timestamp::now(),
    }
}

pub fn hotel(id: i32) -> Hotel {
    Hotel {
        id: HotelId::new(id),
        name: format!("Hotel {}", id),
        image: format!("https://img.example.com/{}.png", id),
        created_at: Timestamp::now(),
        updated_at: Timestamp::now(),
    }
}

pub fn room(id: i32, hotel_id: i32) -> Room {
    Room {
        id: RoomId::new(id),
        name: format!("Room {}", id),
        capacity: 2,
        hotel_id: HotelId::new(hotel_id),
        created_at: Timestamp::now(),
        updated_at: Timestamp::now(),
    }
}

pub struct MockEnrollmentReader {
    enrollment: Option<Enrollment>,
    ticket: Option<Ticket>,
    fail: bool,
    ticket_lookups: AtomicUsize,
}

impl MockEnrollmentReader {
    pub fn new(enrollment: Option<Enrollment>, ticket: Option<Ticket>) -> Self {
        Self {
            enrollment,
            ticket,
            fail: false,
            ticket_lookups: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new(None, None)
        }
    }

    pub fn ticket_lookups(&self) -> usize {
        self.ticket_lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EnrollmentReader for MockEnrollmentReader {
    async fn find_by_user(&self, user_id: UserId) -> Result<Option<Enrollment>, DomainError> {
        if self.fail {
            return Err(DomainError::database("connection refused"));
        }
        Ok(self
            .enrollment
            .clone()
            .filter(|e| e.user_id == user_id))
    }

    async fn find_ticket_by_enrollment(
        &self,
        enrollment_id: EnrollmentId,
    ) -> Result<Option<Ticket>, DomainError> {
        self.ticket_lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .ticket
            .clone()
            .filter(|t| t.enrollment_id == enrollment_id))
    }
}

pub struct MockHotelReader {
    hotels: Vec<Hotel>,
    rooms: Vec<Room>,
    fail: bool,
    reads: AtomicUsize,
}

impl MockHotelReader {
    pub fn new(hotels: Vec<Hotel>, rooms: Vec<Room>) -> Self {
        Self {
            hotels,
            rooms,
            fail: false,
            reads: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new(vec![], vec![])
        }
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    fn record_read(&self) -> Result<(), DomainError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(DomainError::database("relation \"Hotel\" does not exist"));
        }
        Ok(())
    }
}

#[async_trait]
impl HotelReader for MockHotelReader {
    async fn list_all(&self) -> Result<Vec<Hotel>, DomainError> {
        self.record_read()?;
        Ok(self.hotels.clone())
    }

    async fn find_with_rooms(&self, id: HotelId) -> Result<Option<HotelWithRooms>, DomainError> {
        self.record_read()?;
        Ok(self.hotels.iter().find(|h| h.id == id).map(|hotel| HotelWithRooms {
            hotel: hotel.clone(),
            rooms: self
                .rooms
                .iter()
                .filter(|r| r.hotel_id == id)
                .cloned()
                .collect(),
        }))
    }
}
