use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Partial payment collected to hold a bed, in rupees.
pub const TOKEN_AMOUNT: u32 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Active,
    Cancelled,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub hostel_id: Uuid,
    pub student_id: Uuid,
    pub student_name: String,
    pub student_phone: String,
    pub college_name: String,
    pub token_amount: u32,
    pub payment_status: PaymentStatus,
    pub payment_id: Option<String>,
    pub booking_date: DateTime<Utc>,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StudentContact {
    pub name: String,
    pub phone: String,
    pub college_name: String,
}

impl Booking {
    /// A booking whose token payment has already gone through.
    pub fn paid(hostel_id: Uuid, student_id: Uuid, contact: StudentContact) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            hostel_id,
            student_id,
            student_name: contact.name,
            student_phone: contact.phone,
            college_name: contact.college_name,
            token_amount: TOKEN_AMOUNT,
            payment_status: PaymentStatus::Completed,
            payment_id: Some(format!("pay_{}", now.timestamp_millis())),
            booking_date: now,
            status: BookingStatus::Active,
            created_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paid_booking() {
        let hostel_id = Uuid::new_v4();
        let student_id = Uuid::new_v4();
        let contact = StudentContact {
            name: "Priya Sharma".to_string(),
            phone: "+91 9876543210".to_string(),
            college_name: "SNIST".to_string(),
        };

        let booking = Booking::paid(hostel_id, student_id, contact);

        assert_eq!(booking.token_amount, 500);
        assert_eq!(booking.payment_status, PaymentStatus::Completed);
        assert_eq!(booking.status, BookingStatus::Active);
        assert!(booking.payment_id.as_deref().unwrap().starts_with("pay_"));
        assert_eq!(booking.booking_date, booking.created_at);
        assert_eq!(booking.student_name, "Priya Sharma");
    }

    #[test]
    fn test_status_wire_format() {
        assert_eq!(serde_json::to_string(&PaymentStatus::Failed).unwrap(), "\"failed\"");
        assert_eq!(serde_json::to_string(&BookingStatus::Cancelled).unwrap(), "\"cancelled\"");
    }
}
