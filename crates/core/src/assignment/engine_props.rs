//! Property-based tests for the assignment engine.

use proptest::prelude::*;
use uuid::Uuid;

use centra_shared::types::{
    AccountId, PartnerId, PartnerTagId, ProductCategoryId, ProductId, RuleId,
};
use chrono::Utc;

use crate::assignment::engine::{resolve, score};
use crate::assignment::types::{AssignmentRule, ResolveRequest, RuleStatus};
use crate::document::DocumentType;

// Matcher ids are drawn from a tiny pool so rules and requests collide often
// enough for scoring paths to be exercised.
const POOL: u128 = 4;

fn arb_partner() -> impl Strategy<Value = Option<PartnerId>> {
    proptest::option::of((0..POOL).prop_map(|n| PartnerId::from_uuid(Uuid::from_u128(n))))
}

fn arb_tag() -> impl Strategy<Value = Option<PartnerTagId>> {
    proptest::option::of((0..POOL).prop_map(|n| PartnerTagId::from_uuid(Uuid::from_u128(100 + n))))
}

fn arb_product() -> impl Strategy<Value = Option<ProductId>> {
    proptest::option::of((0..POOL).prop_map(|n| ProductId::from_uuid(Uuid::from_u128(200 + n))))
}

fn arb_category() -> impl Strategy<Value = Option<ProductCategoryId>> {
    proptest::option::of(
        (0..POOL).prop_map(|n| ProductCategoryId::from_uuid(Uuid::from_u128(300 + n))),
    )
}

prop_compose! {
    fn arb_rule(seq: u128)(
        partner_id in arb_partner(),
        partner_tag_id in arb_tag(),
        product_id in arb_product(),
        product_category_id in arb_category(),
    ) -> AssignmentRule {
        AssignmentRule {
            id: RuleId::from_uuid(Uuid::from_u128(seq + 1)),
            partner_id,
            partner_tag_id,
            product_id,
            product_category_id,
            account_id: AccountId::from_uuid(Uuid::from_u128(seq + 1000)),
            status: RuleStatus::Confirmed,
            archived: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }
}

prop_compose! {
    fn arb_request()(
        partner_id in arb_partner(),
        tags in proptest::collection::vec(
            (0..POOL).prop_map(|n| PartnerTagId::from_uuid(Uuid::from_u128(100 + n))),
            0..3,
        ),
        product_id in arb_product(),
        product_category_id in arb_category(),
    ) -> ResolveRequest {
        ResolveRequest {
            partner_id,
            partner_tag_ids: tags,
            product_id,
            product_category_id,
            source: DocumentType::PurchaseOrder,
        }
    }
}

fn arb_rules() -> impl Strategy<Value = Vec<AssignmentRule>> {
    proptest::collection::vec(any::<u8>(), 0..8).prop_flat_map(|seeds| {
        seeds
            .into_iter()
            .enumerate()
            .map(|(i, _)| arb_rule(i as u128))
            .collect::<Vec<_>>()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Setting an additional matcher that the request satisfies never lowers
    /// a rule's score.
    #[test]
    fn prop_satisfied_matcher_is_monotone(
        rule in arb_rule(0),
        request in arb_request(),
    ) {
        let base = score(&rule, &request);

        if let Some(partner) = request.partner_id {
            let mut stronger = rule.clone();
            stronger.partner_id = Some(partner);
            prop_assert!(score(&stronger, &request) >= base);
        }
        if let Some(product) = request.product_id {
            let mut stronger = rule.clone();
            stronger.product_id = Some(product);
            prop_assert!(score(&stronger, &request) >= base);
        }
    }

    /// Resolution does not depend on the order rules are supplied in.
    #[test]
    fn prop_resolution_is_order_independent(
        rules in arb_rules(),
        request in arb_request(),
    ) {
        let forward = resolve(rules.iter(), &request);
        let reversed = resolve(rules.iter().rev(), &request);
        prop_assert_eq!(forward, reversed);
    }

    /// The winner always carries the maximum score among live candidates,
    /// and that score is strictly positive.
    #[test]
    fn prop_winner_has_max_positive_score(
        rules in arb_rules(),
        request in arb_request(),
    ) {
        let winner = resolve(rules.iter(), &request);
        let top = rules
            .iter()
            .filter(|r| r.is_live())
            .map(|r| score(r, &request))
            .max()
            .unwrap_or(0);

        match winner {
            None => prop_assert_eq!(top, 0),
            Some(account) => {
                prop_assert!(top > 0);
                let winning_rule = rules
                    .iter()
                    .find(|r| r.account_id == account)
                    .expect("winner must come from the rule set");
                prop_assert_eq!(score(winning_rule, &request), top);
            }
        }
    }

    /// Score is a pure function: evaluating twice gives the same result.
    #[test]
    fn prop_score_is_pure(rule in arb_rule(0), request in arb_request()) {
        prop_assert_eq!(score(&rule, &request), score(&rule, &request));
    }
}
