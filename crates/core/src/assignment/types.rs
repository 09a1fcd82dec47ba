//! Assignment rule domain types.

use centra_shared::types::{
    AccountId, PartnerId, PartnerTagId, ProductCategoryId, ProductId, RuleId,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::document::DocumentType;

/// Lifecycle status of an assignment rule.
///
/// Only Confirmed, non-archived rules participate in resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleStatus {
    /// Rule is being drafted and can be modified.
    Draft,
    /// Rule is live and participates in resolution.
    Confirmed,
    /// Rule has been retired.
    Archived,
}

impl RuleStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Confirmed => "confirmed",
            Self::Archived => "archived",
        }
    }

    /// Parses a status from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "draft" => Some(Self::Draft),
            "confirmed" => Some(Self::Confirmed),
            "archived" => Some(Self::Archived),
            _ => None,
        }
    }
}

impl fmt::Display for RuleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A condition → account mapping used to auto-tag transaction lines.
///
/// Every matcher is optional; a rule with no matchers set matches everything
/// with score 0 and therefore never qualifies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentRule {
    /// Rule ID.
    pub id: RuleId,
    /// Partner to match, if any.
    pub partner_id: Option<PartnerId>,
    /// Partner tag to match, if any.
    pub partner_tag_id: Option<PartnerTagId>,
    /// Product to match, if any.
    pub product_id: Option<ProductId>,
    /// Product category to match, if any.
    pub product_category_id: Option<ProductCategoryId>,
    /// Account assigned when this rule wins.
    pub account_id: AccountId,
    /// Rule status.
    pub status: RuleStatus,
    /// Whether the rule is hidden from resolution regardless of status.
    pub archived: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl AssignmentRule {
    /// Returns true if this rule participates in resolution.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.status == RuleStatus::Confirmed && !self.archived
    }
}

/// Context for a single account resolution.
#[derive(Debug, Clone)]
pub struct ResolveRequest {
    /// Partner on the document, if any.
    pub partner_id: Option<PartnerId>,
    /// Tags carried by that partner.
    pub partner_tag_ids: Vec<PartnerTagId>,
    /// Product on the line, if any.
    pub product_id: Option<ProductId>,
    /// Category of that product, if any.
    pub product_category_id: Option<ProductCategoryId>,
    /// Document type that triggered resolution. Diagnostics only; never
    /// affects the outcome.
    pub source: DocumentType,
}

/// Input for creating an assignment rule.
#[derive(Debug, Clone)]
pub struct CreateRuleInput {
    /// Partner matcher.
    pub partner_id: Option<PartnerId>,
    /// Partner tag matcher.
    pub partner_tag_id: Option<PartnerTagId>,
    /// Product matcher.
    pub product_id: Option<ProductId>,
    /// Product category matcher.
    pub product_category_id: Option<ProductCategoryId>,
    /// Target account.
    pub account_id: AccountId,
}

/// Input for updating a Draft assignment rule.
#[derive(Debug, Clone, Default)]
pub struct UpdateRuleInput {
    /// New partner matcher (`Some(None)` clears it).
    pub partner_id: Option<Option<PartnerId>>,
    /// New partner tag matcher.
    pub partner_tag_id: Option<Option<PartnerTagId>>,
    /// New product matcher.
    pub product_id: Option<Option<ProductId>>,
    /// New product category matcher.
    pub product_category_id: Option<Option<ProductCategoryId>>,
    /// New target account.
    pub account_id: Option<AccountId>,
}
