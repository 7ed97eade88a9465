//! Invoices, official document requests and uploaded documents.

use serde::Serialize;
use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
pub enum InvoiceStatus {
    Overdue,
    #[strum(serialize = "Due Soon")]
    DueSoon,
    Paid,
}

impl InvoiceStatus {
    /// Whether the "Pay Now" action is offered.
    #[must_use]
    pub const fn is_payable(self) -> bool {
        !matches!(self, Self::Paid)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invoice {
    pub id: &'static str,
    pub description: &'static str,
    pub amount: &'static str,
    pub status: InvoiceStatus,
    pub due: &'static str,
}

#[must_use]
pub fn invoices() -> Vec<Invoice> {
    vec![
        Invoice {
            id: "i1",
            description: "Semester 2 Tuition Fees",
            amount: "$4,200.00",
            status: InvoiceStatus::Overdue,
            due: "15 Aug",
        },
        Invoice {
            id: "i2",
            description: "Student Services Amenities Fee",
            amount: "$163.00",
            status: InvoiceStatus::DueSoon,
            due: "30 Sep",
        },
        Invoice {
            id: "i3",
            description: "Library Fine",
            amount: "$5.00",
            status: InvoiceStatus::Paid,
            due: "N/A",
        },
    ]
}

pub const PAYMENT_CONFIRMATION: &str = "Payment processed successfully.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OfficialDocument {
    pub id: &'static str,
    pub name: &'static str,
    pub price: &'static str,
}

impl OfficialDocument {
    #[must_use]
    pub fn request_confirmation(&self) -> String {
        format!(
            "Your request for {} has been received. You will be notified when it is ready.",
            self.name
        )
    }
}

#[must_use]
pub fn official_documents() -> Vec<OfficialDocument> {
    vec![
        OfficialDocument {
            id: "d1",
            name: "Academic Transcript (Official)",
            price: "$20.00",
        },
        OfficialDocument {
            id: "d2",
            name: "Proof of Enrolment Letter",
            price: "Free",
        },
        OfficialDocument {
            id: "d3",
            name: "Completion Letter",
            price: "Free",
        },
    ]
}

/// File the student uploaded to "My Documents".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredDocument {
    pub id: u32,
    pub name: &'static str,
    pub added: &'static str,
    pub in_use: bool,
}

#[must_use]
pub fn stored_documents() -> Vec<StoredDocument> {
    vec![
        StoredDocument {
            id: 1,
            name: "Passport.pdf",
            added: "12 Jan 2024",
            in_use: true,
        },
        StoredDocument {
            id: 2,
            name: "Transcript_2023.pdf",
            added: "20 Nov 2023",
            in_use: false,
        },
        StoredDocument {
            id: 3,
            name: "Medical_Cert.png",
            added: "05 Mar 2024",
            in_use: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pay_now_only_for_unpaid() {
        let payable: Vec<_> = invoices()
            .into_iter()
            .filter(|i| i.status.is_payable())
            .map(|i| i.id)
            .collect();
        assert_eq!(payable, vec!["i1", "i2"]);
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(InvoiceStatus::DueSoon.to_string(), "Due Soon");
        assert_eq!(InvoiceStatus::Overdue.to_string(), "Overdue");
    }

    #[test]
    fn test_request_confirmation_names_document() {
        let doc = &official_documents()[1];
        assert_eq!(
            doc.request_confirmation(),
            "Your request for Proof of Enrolment Letter has been received. You will be notified when it is ready."
        );
    }
}
