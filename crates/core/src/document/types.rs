//! Document read-view types.

use centra_shared::types::{AccountId, DocumentId};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of transactional document a line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    /// Purchase order (cost side).
    PurchaseOrder,
    /// Vendor bill (cost side).
    VendorBill,
    /// Sales order (revenue side).
    SalesOrder,
    /// Customer invoice (revenue side).
    CustomerInvoice,
}

impl DocumentType {
    /// Returns the string representation of the document type.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PurchaseOrder => "purchase_order",
            Self::VendorBill => "vendor_bill",
            Self::SalesOrder => "sales_order",
            Self::CustomerInvoice => "customer_invoice",
        }
    }

    /// Parses a document type from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "purchase_order" => Some(Self::PurchaseOrder),
            "vendor_bill" => Some(Self::VendorBill),
            "sales_order" => Some(Self::SalesOrder),
            "customer_invoice" => Some(Self::CustomerInvoice),
            _ => None,
        }
    }

    /// Returns true if lines of this type count toward expense budgets.
    #[must_use]
    pub fn is_cost_side(&self) -> bool {
        matches!(self, Self::PurchaseOrder | Self::VendorBill)
    }

    /// Returns true if lines of this type count toward income budgets.
    #[must_use]
    pub fn is_revenue_side(&self) -> bool {
        matches!(self, Self::SalesOrder | Self::CustomerInvoice)
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Status of a transactional document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    /// Document is being edited; amounts are not yet binding.
    Draft,
    /// Document has been confirmed.
    Confirmed,
    /// Document has been posted (finalized in the books).
    Posted,
    /// Document has been cancelled; amounts never count.
    Cancelled,
}

impl DocumentStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Confirmed => "confirmed",
            Self::Posted => "posted",
            Self::Cancelled => "cancelled",
        }
    }

    /// Parses a status from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "draft" => Some(Self::Draft),
            "confirmed" => Some(Self::Confirmed),
            "posted" => Some(Self::Posted),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }

    /// Returns true if the document's amounts count toward budget actuals.
    #[must_use]
    pub fn is_finalized(&self) -> bool {
        matches!(self, Self::Confirmed | Self::Posted)
    }
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Identity of a document across the four source collections.
///
/// Document ids are only unique within their type, so the engine keys
/// documents by the pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DocumentKey {
    /// Source document type.
    pub doc_type: DocumentType,
    /// Document ID within that type.
    pub id: DocumentId,
}

/// A single line of a document read view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineView {
    /// Analytical account the line is tagged with, if any.
    pub account_id: Option<AccountId>,
    /// Line amount.
    pub amount: Decimal,
}

/// Uniform read view of a transactional document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentView {
    /// Document ID.
    pub id: DocumentId,
    /// Document type.
    pub doc_type: DocumentType,
    /// Human-readable reference (e.g., "PO-2026-0042").
    pub reference: String,
    /// Counterparty display name, if known.
    pub counterparty: Option<String>,
    /// Document date.
    pub date: NaiveDate,
    /// Document status.
    pub status: DocumentStatus,
    /// Document lines.
    pub lines: Vec<LineView>,
}

impl DocumentView {
    /// Returns this document's cross-collection key.
    #[must_use]
    pub const fn key(&self) -> DocumentKey {
        DocumentKey {
            doc_type: self.doc_type,
            id: self.id,
        }
    }
}
