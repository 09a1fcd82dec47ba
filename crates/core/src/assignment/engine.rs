//! Rule scoring and winner selection.
//!
//! Matcher weights: product 3, partner 2, product category 1, partner tag 1.
//! Each matcher contributes at most once; scores are additive across the
//! matchers a rule satisfies. A rule must score strictly above zero to
//! qualify, so a rule with no matchers (score 0) never wins.

use centra_shared::types::AccountId;

use super::types::{AssignmentRule, ResolveRequest};

/// Points awarded for a product id match.
pub const PRODUCT_SCORE: u32 = 3;
/// Points awarded for a partner id match.
pub const PARTNER_SCORE: u32 = 2;
/// Points awarded for a product category match.
pub const CATEGORY_SCORE: u32 = 1;
/// Points awarded for a partner tag membership match.
pub const PARTNER_TAG_SCORE: u32 = 1;

/// Computes the match score of a rule against a request.
///
/// Pure function of `(rule, request)`; rule status and archive flag are not
/// consulted here, callers filter candidates first.
#[must_use]
pub fn score(rule: &AssignmentRule, request: &ResolveRequest) -> u32 {
    let mut total = 0;

    if let Some(product) = rule.product_id
        && request.product_id == Some(product)
    {
        total += PRODUCT_SCORE;
    }
    if let Some(partner) = rule.partner_id
        && request.partner_id == Some(partner)
    {
        total += PARTNER_SCORE;
    }
    if let Some(category) = rule.product_category_id
        && request.product_category_id == Some(category)
    {
        total += CATEGORY_SCORE;
    }
    if let Some(tag) = rule.partner_tag_id
        && request.partner_tag_ids.contains(&tag)
    {
        total += PARTNER_TAG_SCORE;
    }

    total
}

/// Resolves the analytical account for a request against a rule set.
///
/// Only Confirmed, non-archived rules are considered. The rule with the
/// strictly highest score wins; equal top scores break to the lowest rule id
/// (ids are time-ordered, so the oldest rule wins). Returns `None` when no
/// rule scores above zero, in which case the caller must leave the line's
/// account unset for manual assignment.
#[must_use]
pub fn resolve<'a, I>(rules: I, request: &ResolveRequest) -> Option<AccountId>
where
    I: IntoIterator<Item = &'a AssignmentRule>,
{
    let mut best: Option<(u32, &AssignmentRule)> = None;

    for rule in rules {
        if !rule.is_live() {
            continue;
        }
        let rule_score = score(rule, request);
        if rule_score == 0 {
            continue;
        }
        best = match best {
            None => Some((rule_score, rule)),
            Some((best_score, best_rule)) => {
                if rule_score > best_score
                    || (rule_score == best_score && rule.id < best_rule.id)
                {
                    Some((rule_score, rule))
                } else {
                    Some((best_score, best_rule))
                }
            }
        };
    }

    best.map(|(_, rule)| rule.account_id)
}
