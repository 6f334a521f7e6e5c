//! Property tests for the pricing rules and quote aggregation.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use strum::IntoEnumIterator;

use studio_quote::pricing::{
    aggregate, calculate_photography, calculate_portraits, calculate_reels, standard_photos_cost,
    CanvasSize, CompletedServices, ExpressSpeed, OrderState, PeopleTier, PhotographyOrder,
    PortraitsOrder, PricingCatalog, ReelPackage, ReelsOrder, ServiceId, SummaryFormatter,
};

fn people_tier() -> impl Strategy<Value = PeopleTier> {
    prop_oneof![Just(PeopleTier::Small), Just(PeopleTier::Large)]
}

fn reel_package() -> impl Strategy<Value = ReelPackage> {
    prop_oneof![
        Just(ReelPackage::Basic),
        Just(ReelPackage::Standard),
        Just(ReelPackage::Premium)
    ]
}

fn canvas_size() -> impl Strategy<Value = CanvasSize> {
    prop_oneof![
        Just(CanvasSize::A3),
        Just(CanvasSize::A2),
        Just(CanvasSize::A1),
        Just(CanvasSize::A0)
    ]
}

prop_compose! {
    fn photography_order()(
        people in people_tier(),
        standard in 0u32..60,
        h24 in 0u32..8,
        h12 in 0u32..8,
        h6 in 0u32..8,
    ) -> PhotographyOrder {
        let order = PhotographyOrder { people, standard_photos: standard, ..PhotographyOrder::default() };
        let express = order
            .express_photos
            .with(ExpressSpeed::Hours24, h24)
            .with(ExpressSpeed::Hours12, h12)
            .with(ExpressSpeed::Hours6, h6);
        PhotographyOrder { express_photos: express, ..order }
    }
}

prop_compose! {
    fn order_state()(
        photography in photography_order(),
        basic in any::<bool>(),
        standard in any::<bool>(),
        premium in any::<bool>(),
        a3 in 0u32..5,
        a2 in 0u32..5,
        a1 in 0u32..5,
        a0 in 0u32..5,
        completed in proptest::collection::vec(any::<bool>(), 3),
    ) -> OrderState {
        OrderState {
            photography,
            reels: ReelsOrder { basic, standard, premium },
            portraits: PortraitsOrder { a3, a2, a1, a0 },
            completed: ServiceId::iter()
                .zip(completed)
                .filter(|(_, done)| *done)
                .map(|(service, _)| service)
                .collect::<CompletedServices>(),
        }
    }
}

fn parse_amount(text: &str) -> Decimal {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    digits.parse().unwrap()
}

#[test]
fn continuous_at_every_threshold() {
    let catalog = PricingCatalog::studio();
    for (i, tier) in catalog.volume_tiers.iter().enumerate() {
        let n = tier.min_photos;
        let via_tier = tier.cost(n, catalog.price_per_photo);
        assert_eq!(standard_photos_cost(n, &catalog), via_tier);
        if let Some(prev) = i.checked_sub(1).map(|p| &catalog.volume_tiers[p]) {
            assert_eq!(prev.cost(n, catalog.price_per_photo), via_tier);
        }
    }
    assert_eq!(standard_photos_cost(10, &catalog), dec!(18000));
}

proptest! {
    #[test]
    fn standard_cost_is_non_decreasing(n in 0u32..500) {
        let catalog = PricingCatalog::studio();
        prop_assert!(standard_photos_cost(n + 1, &catalog) >= standard_photos_cost(n, &catalog));
    }

    #[test]
    fn photography_total_is_sum_of_parts(order in photography_order()) {
        let catalog = PricingCatalog::studio();
        let cost = calculate_photography(&order, &catalog);
        prop_assert_eq!(
            cost.total,
            cost.session_fee + cost.standard_cost + cost.express_unit_cost + cost.express_surcharge_cost
        );
        prop_assert_eq!(cost.session_fee, catalog.session(order.people).fee);
        prop_assert_eq!(
            cost.express_unit_cost,
            Decimal::from(order.express_photos.total()) * catalog.price_per_photo
        );
    }

    #[test]
    fn reel_toggle_is_idempotent(
        basic in any::<bool>(),
        standard in any::<bool>(),
        premium in any::<bool>(),
        package in reel_package(),
    ) {
        let catalog = PricingCatalog::studio();
        let order = ReelsOrder { basic, standard, premium };
        let before = calculate_reels(&order, &catalog).total;
        let toggled = order.toggle(package);
        let after = calculate_reels(&toggled.toggle(package), &catalog).total;
        prop_assert_eq!(before, after);

        let expected: Decimal = ReelPackage::iter()
            .filter(|p| order.is_selected(*p))
            .map(|p| catalog.reel(p).price)
            .sum();
        prop_assert_eq!(before, expected);
    }

    #[test]
    fn portraits_are_linear_per_size(size in canvas_size(), quantity in 0u32..1000) {
        let catalog = PricingCatalog::studio();
        let order = PortraitsOrder::default().with(size, quantity);
        prop_assert_eq!(
            calculate_portraits(&order, &catalog).total,
            Decimal::from(quantity) * catalog.canvas(size).price
        );
    }

    #[test]
    fn uncompleted_services_contribute_nothing(state in order_state()) {
        let catalog = PricingCatalog::studio();
        let quote = aggregate(&state, &catalog);
        for service in ServiceId::iter() {
            if !state.completed.contains(service) {
                prop_assert!(!quote.per_service_total.contains_key(&service));
                prop_assert!(quote.line_items.iter().all(|line| line.service != service));
            }
        }
        let sum: Decimal = quote.per_service_total.values().copied().sum();
        prop_assert_eq!(quote.grand_total, sum);
    }

    #[test]
    fn summary_subtotals_reproduce_grand_total(state in order_state()) {
        let catalog = PricingCatalog::studio();
        let quote = aggregate(&state, &catalog);
        let summary = SummaryFormatter::new("Eran Studio").format(&quote, &catalog);

        if quote.grand_total.is_zero() {
            prop_assert_eq!(summary.lines.len(), 1);
        } else {
            let resummed: Decimal = summary
                .lines
                .iter()
                .filter(|line| line.starts_with("Subtotal: "))
                .map(|line| parse_amount(line))
                .sum();
            prop_assert_eq!(resummed, quote.grand_total);

            let grand_line = summary
                .lines
                .iter()
                .find(|line| line.starts_with("*Grand Total: "))
                .unwrap();
            prop_assert_eq!(parse_amount(grand_line), quote.grand_total);
        }
    }
}
