// Availability heuristics over a fetched product page.
//
// A storefront page has no authoritative "in stock" field, so the verdict is
// triangulated from several weak signals with a fixed precedence: a live
// add-to-cart control, out-of-stock phrases in the visible text, price
// elements, and delivery phrases.
use crate::model::{CheckResult, ParseError};
use scraper::{Html, Selector};

/// Structural patterns for the add-to-cart control, in priority order. Each
/// selector's first match is inspected; a disabled match does not stop the
/// probe from trying the remaining patterns.
const ADD_TO_CART_SELECTORS: [&str; 4] = [
    r#"button[data-automation-id="add-to-cart-button"]"#,
    r#"button[data-testid="add-to-cart-button"]"#,
    r#"button[aria-label*="add to cart" i]"#,
    r#"[data-automation-id="atc-button"]"#,
];

const OUT_OF_STOCK_PHRASES: [&str; 7] = [
    "out of stock",
    "sold out",
    "not available",
    "temporarily unavailable",
    "currently unavailable",
    "indisponible",
    "en rupture de stock",
];

const DELIVERY_PHRASES: [&str; 4] = [
    "free shipping",
    "pickup",
    "delivery available",
    "livraison gratuite",
];

struct Signals {
    cart_found: bool,
    out_of_stock: bool,
    has_price: bool,
    has_delivery: bool,
    cart_text: bool,
}

pub struct AvailabilityClassifier;

impl AvailabilityClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classifies fetched markup into a verdict with rationale. Parse-level
    /// failures degrade to `CheckResult::Error`; this never panics.
    pub fn classify(&self, html: &str) -> CheckResult {
        match self.classify_document(html) {
            Ok(result) => result,
            Err(e) => CheckResult::Error(format!("Error parsing page: {}", e)),
        }
    }

    fn classify_document(&self, html: &str) -> Result<CheckResult, ParseError> {
        let document = Html::parse_document(html);
        let page_text = document
            .root_element()
            .text()
            .collect::<String>()
            .to_lowercase();

        let signals = Signals {
            cart_found: cart_control_present(&document)?,
            out_of_stock: OUT_OF_STOCK_PHRASES.iter().any(|p| page_text.contains(p)),
            has_price: price_element_count(&document)? > 0,
            has_delivery: DELIVERY_PHRASES.iter().any(|p| page_text.contains(p)),
            cart_text: page_text.contains("add to cart"),
        };

        Ok(decide(&signals))
    }
}

impl Default for AvailabilityClassifier {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_selector(raw: &str) -> Result<Selector, ParseError> {
    Selector::parse(raw).map_err(|e| ParseError::HtmlParseError(e.to_string()))
}

fn cart_control_present(document: &Html) -> Result<bool, ParseError> {
    for raw in ADD_TO_CART_SELECTORS {
        let selector = parse_selector(raw)?;
        if let Some(control) = document.select(&selector).next() {
            let disabled = control.value().attr("disabled").is_some()
                || control
                    .value()
                    .classes()
                    .any(|c| c.eq_ignore_ascii_case("disabled"));
            if !disabled {
                return Ok(true);
            }
        }
    }
    Ok(false)
}

fn price_element_count(document: &Html) -> Result<usize, ParseError> {
    let selector = parse_selector(r#"span[class*="price" i], div[class*="price" i]"#)?;
    Ok(document.select(&selector).count())
}

/// Ordered decision table, first match wins. The cart-button rule stays ahead
/// of the out-of-stock rule: order encodes precedence and must not change.
fn decide(signals: &Signals) -> CheckResult {
    let rules: [(fn(&Signals) -> bool, fn(String) -> CheckResult, &str); 4] = [
        (
            |s: &Signals| s.cart_found && !s.out_of_stock,
            CheckResult::Available,
            "Add to Cart button found and no out-of-stock indicators",
        ),
        (
            |s: &Signals| s.out_of_stock,
            CheckResult::OutOfStock,
            "Out of stock text found on page",
        ),
        (
            |s: &Signals| s.has_price && s.has_delivery && !s.out_of_stock,
            CheckResult::Available,
            "Price and delivery options shown",
        ),
        (
            |s: &Signals| s.cart_text && !s.out_of_stock,
            CheckResult::Available,
            "Add to cart text found",
        ),
    ];

    for (predicate, verdict, rationale) in rules {
        if predicate(signals) {
            return verdict(rationale.to_string());
        }
    }
    CheckResult::Unavailable("No clear availability indicators found".to_string())
}
