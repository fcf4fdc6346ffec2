//! # Catalog
//!
//! The fixed price list. Each entry carries its unit price and its offer
//! side by side, so adding an item is one new row here.
//!
//! | Item     | Unit price | Offer                      |
//! |----------|------------|----------------------------|
//! | `apple`  | 60p        | buy one get one free       |
//! | `orange` | 25p        | three for the price of two |

use crate::money::Money;
use crate::types::OfferRule;

/// One row of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Canonical item name, matched exactly against cart contents.
    pub name: &'static str,

    /// Price of a single unit.
    pub unit_price: Money,

    /// Promotional offer, if the item has one.
    pub offer: Option<OfferRule>,
}

/// Every item the till knows how to price.
pub const CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        name: "apple",
        unit_price: Money::from_pence(60),
        offer: Some(OfferRule::BUY_ONE_GET_ONE_FREE),
    },
    CatalogEntry {
        name: "orange",
        unit_price: Money::from_pence(25),
        offer: Some(OfferRule::THREE_FOR_TWO),
    },
];

/// Finds the catalog row for `name`, if there is one.
pub fn lookup(name: &str) -> Option<&'static CatalogEntry> {
    CATALOG.iter().find(|entry| entry.name == name)
}

/// Catalog rows that carry an offer, in catalog order.
pub fn offers() -> impl Iterator<Item = (&'static CatalogEntry, OfferRule)> {
    CATALOG
        .iter()
        .filter_map(|entry| entry.offer.map(|rule| (entry, rule)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_items() {
        assert_eq!(lookup("apple").map(|e| e.unit_price.pence()), Some(60));
        assert_eq!(lookup("orange").map(|e| e.unit_price.pence()), Some(25));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert!(lookup("Apple").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn test_names_are_unique() {
        for (i, entry) in CATALOG.iter().enumerate() {
            assert!(
                CATALOG[i + 1..].iter().all(|other| other.name != entry.name),
                "duplicate catalog name {}",
                entry.name
            );
        }
    }

    #[test]
    fn test_offer_rules_are_well_formed() {
        for (entry, rule) in offers() {
            assert!(rule.group_size > 0, "{} has an empty group", entry.name);
            assert!(rule.free_units <= rule.group_size, "{} gives away too much", entry.name);
        }
        assert_eq!(offers().count(), 2);
    }
}
