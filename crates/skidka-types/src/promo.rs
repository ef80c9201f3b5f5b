//! Promo product representation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The promo window attached to a product offer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromoWindow {
    /// Upstream promo identifier.
    pub id: i64,
    /// First day of the promo (inclusive).
    pub date_begin: NaiveDate,
    /// Last day of the promo (inclusive).
    pub date_end: NaiveDate,
    /// Promo type label.
    #[serde(rename = "type")]
    pub promo_type: String,
    /// Free-text description.
    pub description: String,
    /// Promo kind label.
    pub kind: String,
    /// Expiry timestamp (seconds).
    pub expired_at: i64,
}

impl PromoWindow {
    /// Returns a human-readable date range, e.g. `"01 March to 15 March"`.
    #[must_use]
    pub fn date_range_label(&self) -> String {
        format!(
            "{} to {}",
            self.date_begin.format("%d %B"),
            self.date_end.format("%d %B")
        )
    }
}

/// Regular and promotional minimum prices for an offer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePair {
    /// Minimum regular price.
    #[serde(rename = "price_reg__min")]
    pub regular_min: f64,
    /// Minimum promotional price.
    #[serde(rename = "price_promo__min")]
    pub promo_min: f64,
}

impl PricePair {
    /// Returns the discount as a percentage of the regular price, rounded to
    /// 2 decimal places.
    ///
    /// A non-positive regular price yields `0.0`.
    #[must_use]
    pub fn discount_percent(&self) -> f64 {
        if self.regular_min <= 0.0 {
            return 0.0;
        }
        let percent = (self.regular_min - self.promo_min) / self.regular_min * 100.0;
        (percent * 100.0).round() / 100.0
    }
}

/// A store promo offer as collected from the special-offers API.
///
/// Deserialization enforces the field set: a payload missing any required
/// field fails as a whole, which the pagination driver treats as the end of
/// available data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromoProduct {
    /// Upstream product identifier.
    pub id: i64,
    /// Product display name.
    pub name: String,
    /// Mechanics flag; absent for most offers.
    pub mech: Option<bool>,
    /// Product image URL.
    pub img_link: String,
    /// Price look-up code.
    pub plu: i64,
    /// The promo window this offer belongs to.
    pub promo: PromoWindow,
    /// Regular and promotional prices.
    pub current_prices: PricePair,
    /// Label of the store the offer was collected for.
    pub store_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_product() -> PromoProduct {
        PromoProduct {
            id: 17,
            name: "Молоко 3.2%".to_string(),
            mech: None,
            img_link: "https://photos.example/17.jpg".to_string(),
            plu: 4012,
            promo: PromoWindow {
                id: 9001,
                date_begin: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                date_end: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
                promo_type: "promo".to_string(),
                description: "Скидка".to_string(),
                kind: "normal".to_string(),
                expired_at: 0,
            },
            current_prices: PricePair {
                regular_min: 100.0,
                promo_min: 80.0,
            },
            store_name: "г.Москва".to_string(),
        }
    }

    #[test]
    fn test_discount_percent() {
        let prices = PricePair {
            regular_min: 100.0,
            promo_min: 80.0,
        };
        assert!((prices.discount_percent() - 20.0).abs() < 1e-10);
    }

    #[test]
    fn test_discount_percent_no_discount() {
        let prices = PricePair {
            regular_min: 50.0,
            promo_min: 50.0,
        };
        assert!(prices.discount_percent().abs() < 1e-10);
    }

    #[test]
    fn test_discount_percent_rounds_to_two_places() {
        let prices = PricePair {
            regular_min: 89.99,
            promo_min: 59.99,
        };
        assert!((prices.discount_percent() - 33.34).abs() < 1e-10);
    }

    #[test]
    fn test_discount_percent_zero_regular_price() {
        let prices = PricePair {
            regular_min: 0.0,
            promo_min: 10.0,
        };
        assert!(prices.discount_percent().abs() < 1e-10);
    }

    #[test]
    fn test_date_range_label() {
        let product = sample_product();
        assert_eq!(product.promo.date_range_label(), "01 March to 15 March");
    }

    #[test]
    fn test_deserializes_upstream_shape() {
        let json = serde_json::json!({
            "id": 17,
            "name": "Молоко 3.2%",
            "mech": null,
            "img_link": "https://photos.example/17.jpg",
            "plu": 4012,
            "promo": {
                "id": 9001,
                "date_begin": "2024-03-01",
                "date_end": "2024-03-15",
                "type": "promo",
                "description": "Скидка",
                "kind": "normal",
                "expired_at": 0
            },
            "current_prices": {
                "price_reg__min": 100.0,
                "price_promo__min": 80.0
            },
            "store_name": "г.Москва"
        });
        let product: PromoProduct = serde_json::from_value(json).unwrap();
        assert_eq!(product, sample_product());
    }

    #[test]
    fn test_missing_required_field_is_an_error() {
        // No current_prices block.
        let json = serde_json::json!({
            "id": 17,
            "name": "Молоко 3.2%",
            "mech": null,
            "img_link": "https://photos.example/17.jpg",
            "plu": 4012,
            "promo": {
                "id": 9001,
                "date_begin": "2024-03-01",
                "date_end": "2024-03-15",
                "type": "promo",
                "description": "Скидка",
                "kind": "normal",
                "expired_at": 0
            },
            "store_name": "г.Москва"
        });
        assert!(serde_json::from_value::<PromoProduct>(json).is_err());
    }

    #[test]
    fn test_unparseable_date_is_an_error() {
        let mut json = serde_json::to_value(sample_product()).unwrap();
        json["promo"]["date_begin"] = serde_json::json!("not-a-date");
        assert!(serde_json::from_value::<PromoProduct>(json).is_err());
    }
}
