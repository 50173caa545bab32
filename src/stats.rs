//! Profit Statistics
//!
//! Dashboard figures derived from the item list. Price fields are free
//! text, so amounts are parsed leniently and anything unparseable counts as 0.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::config::AppConfig;
use crate::models::Item;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a price field, 0 when empty or not a finite number
pub fn parse_amount(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round10(value: f64) -> f64 {
    (value / 10.0).round() * 10.0
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// An item counts as sold once it has a platform and a positive sale price
pub fn is_sold(item: &Item) -> bool {
    !item.sale_platform.is_empty() && parse_amount(&item.sale_price) > 0.0
}

/// Fee, profit and profit rate of a sold item
///
/// Profit is the sale price less purchase price, shipping and fee.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Profit {
    pub fee: f64,
    pub profit: f64,
    /// Profit as a percentage of the purchase price
    pub rate: f64,
}

pub fn profit(item: &Item, config: &AppConfig) -> Option<Profit> {
    if !is_sold(item) {
        return None;
    }
    let sale = parse_amount(&item.sale_price);
    let purchase = parse_amount(&item.purchase_price);
    let shipping = parse_amount(&item.shipping);
    let fee = (sale * config.fee_rate(&item.sale_platform)).round();
    let profit = (sale - purchase - shipping - fee).round();
    let rate = if purchase > 0.0 { round1(profit / purchase * 100.0) } else { 0.0 };
    Some(Profit { fee, profit, rate })
}

/// Average sale/purchase multiplier over sold items with a purchase price
fn average_multiplier<'a>(sold: impl Iterator<Item = &'a Item>) -> Option<f64> {
    let multipliers: Vec<f64> = sold
        .filter_map(|item| {
            let purchase = parse_amount(&item.purchase_price);
            (purchase > 0.0).then(|| parse_amount(&item.sale_price) / purchase)
        })
        .collect();
    mean(&multipliers)
}

/// Headline figures of the summary panel
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Summary {
    pub count: usize,
    pub sold: usize,
    /// Sum of profit over sold items
    pub total_profit: f64,
    /// Profit if every unsold item sold at the average multiplier
    pub expected_profit: f64,
}

pub fn summarize(items: &[Item], config: &AppConfig) -> Summary {
    let sold: Vec<&Item> = items.iter().filter(|item| is_sold(item)).collect();
    let total_profit = sold
        .iter()
        .filter_map(|item| profit(item, config))
        .map(|p| p.profit)
        .sum();

    let multiplier = average_multiplier(sold.iter().copied()).unwrap_or(config.expected_multiplier);
    let expected_profit = items
        .iter()
        .filter(|item| !is_sold(item))
        .map(|item| {
            let purchase = parse_amount(&item.purchase_price);
            let estimated = purchase * multiplier;
            estimated - purchase - estimated * config.expected_fee_rate
        })
        .sum();

    Summary {
        count: items.len(),
        sold: sold.len(),
        total_profit,
        expected_profit,
    }
}

/// Average profit rate of sold items per purchase source
///
/// Sources that appear only on unsold items report 0.
pub fn rate_by_source(items: &[Item], config: &AppConfig) -> Vec<(String, f64)> {
    let mut rates: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for item in items.iter().filter(|item| !item.purchase_source.is_empty()) {
        let entry = rates.entry(item.purchase_source.as_str()).or_default();
        if let Some(p) = profit(item, config) {
            entry.push(p.rate);
        }
    }
    rates
        .into_iter()
        .map(|(source, values)| (source.to_string(), mean(&values).map(round1).unwrap_or(0.0)))
        .collect()
}

/// Count of sold items per category, grouped by sale platform
pub fn category_mix(items: &[Item]) -> BTreeMap<String, BTreeMap<String, usize>> {
    let mut mix: BTreeMap<String, BTreeMap<String, usize>> = BTreeMap::new();
    for item in items.iter().filter(|item| is_sold(item)) {
        *mix.entry(item.sale_platform.clone())
            .or_default()
            .entry(item.category.clone())
            .or_default() += 1;
    }
    mix
}

/// Listing advice, chosen by expected profit rate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advice {
    /// Above 50%
    High,
    /// Above 30%
    Good,
    /// Above 10%
    Fair,
    Low,
}

impl Advice {
    pub fn for_rate(rate: f64) -> Self {
        if rate > 50.0 {
            Advice::High
        } else if rate > 30.0 {
            Advice::Good
        } else if rate > 10.0 {
            Advice::Fair
        } else {
            Advice::Low
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Advice::High => "高利益率が期待できる商品です。複数サイトに同時出品して、早く売れるチャンスを増やしましょう。",
            Advice::Good => "十分な利益が見込めます。商品状態を詳しく記載して購入者の安心感を高めましょう。",
            Advice::Fair => "適正な利益率です。送料込みにすると購入率が上がる可能性があります。",
            Advice::Low => "利益率が低めです。価格を少し上げるか、まとめ売りも検討してみてください。",
        }
    }
}

/// Sold items needed before a price range is reported
const RANGE_MIN_HISTORY: usize = 3;

/// Listing price suggestion based on sold items of the same category
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    /// Sold items of the same category the suggestion is based on
    pub history: usize,
    pub multiplier: f64,
    /// Mean profit rate (%) over the history
    pub average_rate: f64,
    /// Purchase price times multiplier, rounded to 10
    pub price: f64,
    pub expected_profit: f64,
    pub expected_rate: f64,
    pub advice: Advice,
    /// (min, max) sale price, once the history is large enough
    pub price_range: Option<(f64, f64)>,
    /// Average days between purchase and sale over the history
    pub average_days: Option<i64>,
}

pub fn suggest(item: &Item, items: &[Item], config: &AppConfig) -> Suggestion {
    let history: Vec<&Item> = items
        .iter()
        .filter(|other| is_sold(other) && other.category == item.category)
        .collect();

    let multiplier = average_multiplier(history.iter().copied()).unwrap_or(config.suggestion_multiplier);
    let rates: Vec<f64> = history
        .iter()
        .filter_map(|other| profit(other, config))
        .map(|p| p.rate)
        .collect();
    let average_rate = mean(&rates).unwrap_or(config.suggestion_rate);

    let purchase = parse_amount(&item.purchase_price);
    let price = round10(purchase * multiplier);
    let expected_profit = (price - purchase - price * config.suggestion_fee_rate).round();
    let expected_rate = if purchase > 0.0 { round1(expected_profit / purchase * 100.0) } else { 0.0 };

    let price_range = (history.len() >= RANGE_MIN_HISTORY)
        .then(|| {
            let sale_prices = history.iter().map(|other| parse_amount(&other.sale_price));
            sale_prices.clone().reduce(f64::min).zip(sale_prices.reduce(f64::max))
        })
        .flatten();

    Suggestion {
        history: history.len(),
        multiplier,
        average_rate,
        price,
        expected_profit,
        expected_rate,
        advice: Advice::for_rate(expected_rate),
        price_range,
        average_days: average_days(&history),
    }
}

/// Mean days held over items carrying both dates
///
/// Unparseable dates count toward the divisor but add no days; nothing is
/// reported unless the summed span is positive.
fn average_days(history: &[&Item]) -> Option<i64> {
    let dated: Vec<&&Item> = history
        .iter()
        .filter(|other| !other.purchase_date.is_empty() && !other.sale_date.is_empty())
        .collect();
    let total: i64 = dated
        .iter()
        .filter_map(|other| {
            let bought = NaiveDate::parse_from_str(&other.purchase_date, DATE_FORMAT).ok()?;
            let sold = NaiveDate::parse_from_str(&other.sale_date, DATE_FORMAT).ok()?;
            Some((sold - bought).num_days())
        })
        .sum();
    (total > 0).then(|| (total as f64 / dated.len() as f64).round() as i64)
}
