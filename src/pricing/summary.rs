//! Human-readable order summary for handoff to the studio's messaging channel.

use serde::Serialize;

use super::aggregator::QuoteBreakdown;
use super::calculators::format_money;
use super::catalog::PricingCatalog;

const MESSAGING_BASE_URL: &str = "https://wa.me";

/// Ordered text lines of an order summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub lines: Vec<String>,
}

impl Summary {
    /// Lines joined into one message body
    pub fn message(&self) -> String {
        self.lines.join("\n")
    }
}

/// Renders quotes as the message a visitor sends to the studio
#[derive(Debug, Clone)]
pub struct SummaryFormatter {
    studio_name: String,
}

impl SummaryFormatter {
    pub fn new(studio_name: impl Into<String>) -> Self {
        Self {
            studio_name: studio_name.into(),
        }
    }

    /// Itemize every quoted service with a non-zero subtotal.
    ///
    /// An empty quote renders as a single greeting line. Every line is read
    /// from the breakdown; the catalog only supplies the currency prefix.
    pub fn format(&self, quote: &QuoteBreakdown, catalog: &PricingCatalog) -> Summary {
        if quote.is_empty() {
            return Summary {
                lines: vec![format!(
                    "Hello {}! I'm interested in your services.",
                    self.studio_name
                )],
            };
        }

        let money = |amount| format_money(amount, &catalog.currency_prefix);
        let mut lines = vec![
            format!("Hello {}! I'm interested in multiple services.", self.studio_name),
            String::new(),
            "*Complete Order Details:*".to_string(),
            String::new(),
        ];

        if let Some(cost) = quote.photography.as_ref().filter(|c| !c.total.is_zero()) {
            lines.push(format!("*Photography ({}):*", cost.session_title));
            lines.push(format!("- Session Fee: {}", money(cost.session_fee)));
            if cost.standard_photos > 0 {
                lines.push(format!(
                    "- {} Package ({} photos): {}",
                    cost.tier_name,
                    cost.standard_photos,
                    money(cost.standard_cost)
                ));
            }
            if cost.express_photos > 0 {
                lines.push(format!(
                    "- {} Express Photos: {}",
                    cost.express_photos,
                    money(cost.express_unit_cost)
                ));
                for line in &cost.express_lines {
                    lines.push(format!(
                        "- {} Express Surcharge ({}): {}",
                        line.speed,
                        line.count,
                        money(line.surcharge)
                    ));
                }
            }
            lines.push(format!("Subtotal: {}", money(cost.total)));
            lines.push(String::new());
        }

        if let Some(cost) = quote.reels.as_ref().filter(|c| !c.total.is_zero()) {
            lines.push("*Reels:*".to_string());
            for line in &cost.packages {
                lines.push(format!("- {}: {}", line.title, money(line.price)));
            }
            lines.push(format!("Subtotal: {}", money(cost.total)));
            lines.push(String::new());
        }

        if let Some(cost) = quote.portraits.as_ref().filter(|c| !c.total.is_zero()) {
            lines.push("*Portraits:*".to_string());
            for line in &cost.canvases {
                lines.push(format!(
                    "- {} x {} Canvas: {}",
                    line.quantity,
                    line.title,
                    money(line.amount)
                ));
            }
            lines.push(format!("Subtotal: {}", money(cost.total)));
            lines.push(String::new());
        }

        lines.push(format!("*Grand Total: {}*", money(quote.grand_total)));
        lines.push(String::new());
        lines.push("Please let me know the next steps to book these services.".to_string());

        Summary { lines }
    }
}

/// Messaging deep link carrying the percent-encoded message
pub fn whatsapp_link(number: &str, message: &str) -> String {
    format!(
        "{MESSAGING_BASE_URL}/{number}?text={}",
        urlencoding::encode(message)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::aggregator::aggregate;
    use crate::pricing::models::{
        CanvasSize, CompletedServices, ExpressSpeed, OrderAction, OrderState, PeopleTier,
        PhotographyOrder, PortraitsOrder, ReelPackage, ReelsOrder, ServiceId,
    };
    use strum::IntoEnumIterator;

    fn all_completed() -> CompletedServices {
        ServiceId::iter().collect()
    }

    #[test]
    fn test_empty_quote_is_single_greeting() {
        let catalog = PricingCatalog::studio();
        let state = OrderState::default();
        let quote = aggregate(&state, &catalog);
        let summary = SummaryFormatter::new("Eran Studio").format(&quote, &catalog);
        assert_eq!(
            summary.lines,
            vec!["Hello Eran Studio! I'm interested in your services.".to_string()]
        );
    }

    #[test]
    fn test_full_summary_layout() {
        let catalog = PricingCatalog::studio();
        let state = OrderState {
            photography: PhotographyOrder {
                standard_photos: 12,
                ..PhotographyOrder::default()
            }
            .increment_express(ExpressSpeed::Hours24),
            reels: ReelsOrder::default()
                .toggle(ReelPackage::Basic)
                .toggle(ReelPackage::Premium),
            portraits: PortraitsOrder::default()
                .with(CanvasSize::A3, 2)
                .with(CanvasSize::A2, 1),
            completed: all_completed(),
        };
        let quote = aggregate(&state, &catalog);
        let summary = SummaryFormatter::new("Eran Studio").format(&quote, &catalog);

        let expected = [
            "Hello Eran Studio! I'm interested in multiple services.",
            "",
            "*Complete Order Details:*",
            "",
            "*Photography (1-2 People):*",
            "- Session Fee: K2,000",
            "- Session Package (12 photos): K22,000",
            "- 1 Express Photos: K2,000",
            "- 24hrs Express Surcharge (1): K3,000",
            "Subtotal: K29,000",
            "",
            "*Reels:*",
            "- Basic Reel: K15,000",
            "- Premium Cinematic Reel: K50,000",
            "Subtotal: K65,000",
            "",
            "*Portraits:*",
            "- 2 x A3 Canvas: K40,000",
            "- 1 x A2 Canvas: K25,000",
            "Subtotal: K65,000",
            "",
            "*Grand Total: K159,000*",
            "",
            "Please let me know the next steps to book these services.",
        ];
        assert_eq!(summary.lines, expected);
    }

    #[test]
    fn test_completed_zero_subtotal_groups_are_skipped() {
        let catalog = PricingCatalog::studio();
        let state = OrderState::default()
            .apply(OrderAction::CompleteService {
                service: ServiceId::Photography,
            })
            .apply(OrderAction::CompleteService {
                service: ServiceId::Reels,
            });
        let quote = aggregate(&state, &catalog);
        let message = SummaryFormatter::new("Eran Studio")
            .format(&quote, &catalog)
            .message();
        assert!(message.contains("*Photography (1-2 People):*"));
        assert!(message.contains("- Session Fee: K2,000"));
        assert!(!message.contains("Package"));
        assert!(!message.contains("*Reels:*"));
        assert!(message.contains("*Grand Total: K2,000*"));
    }

    #[test]
    fn test_pending_service_not_in_summary() {
        let catalog = PricingCatalog::studio();
        let state = OrderState::default()
            .apply(OrderAction::ToggleReel {
                package: ReelPackage::Basic,
            })
            .apply(OrderAction::IncrementCanvas {
                size: CanvasSize::A0,
            })
            .apply(OrderAction::CompleteService {
                service: ServiceId::Portraits,
            });
        let quote = aggregate(&state, &catalog);
        let message = SummaryFormatter::new("Eran Studio")
            .format(&quote, &catalog)
            .message();
        assert!(!message.contains("Reel"));
        assert!(message.contains("- 1 x A0 Canvas: K65,000"));
    }

    #[test]
    fn test_summary_reads_order_detail_from_breakdown() {
        let catalog = PricingCatalog::studio();
        let state = OrderState {
            photography: PhotographyOrder::default()
                .with_people(PeopleTier::Large)
                .increment_standard()
                .increment_express(ExpressSpeed::Hours6)
                .increment_express(ExpressSpeed::Hours12),
            completed: all_completed(),
            ..OrderState::default()
        };
        let quote = aggregate(&state, &catalog);
        let summary = SummaryFormatter::new("Eran Studio").format(&quote, &catalog);

        // A later edit to the order must not leak into a summary of the earlier quote
        let edited = state.apply(OrderAction::IncrementExpress {
            speed: ExpressSpeed::Hours6,
        });
        assert_ne!(edited, state);
        assert_eq!(
            SummaryFormatter::new("Eran Studio").format(&quote, &catalog),
            summary
        );

        let photography: Vec<&str> = summary
            .lines
            .iter()
            .map(String::as_str)
            .skip_while(|line| !line.starts_with("*Photography"))
            .take_while(|line| !line.is_empty())
            .collect();
        assert_eq!(
            photography,
            [
                "*Photography (3-7 People):*",
                "- Session Fee: K3,000",
                "- Standard Package (1 photos): K2,000",
                "- 2 Express Photos: K4,000",
                "- 12hrs Express Surcharge (1): K4,500",
                "- 6hrs Express Surcharge (1): K6,000",
                "Subtotal: K19,500",
            ]
        );
    }

    #[test]
    fn test_whatsapp_link_encodes_message() {
        let link = whatsapp_link("265997761194", "*Grand Total: K2,000*\nThanks!");
        assert_eq!(
            link,
            "https://wa.me/265997761194?text=%2AGrand%20Total%3A%20K2%2C000%2A%0AThanks%21"
        );
    }
}
