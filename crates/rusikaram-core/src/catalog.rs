//! The fixed product catalog.
//!
//! Every item is sold in 250g packs. The list is compiled in and never
//! changes at runtime; draft orders always carry one line per entry, in
//! catalog order.

/// Weight of a single pack in grams.
pub const PACK_WEIGHT_GRAMS: u64 = 250;

/// A purchasable item and its price per 250g pack, in whole rupees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogItem {
    pub name: &'static str,
    pub unit_price: u32,
}

impl CatalogItem {
    const fn new(name: &'static str, unit_price: u32) -> Self {
        Self { name, unit_price }
    }
}

/// All items offered on the order form.
pub const CATALOG: [CatalogItem; 10] = [
    CatalogItem::new("South Indian mixture (250GMS)", 90),
    CatalogItem::new("Omapodi (250GMS)", 90),
    CatalogItem::new("Mullu murukku (250GMS)", 90),
    CatalogItem::new("Thenkuzhal (250GMS)", 90),
    CatalogItem::new("Ribbon pakoda (250GMS)", 90),
    CatalogItem::new("Kaaraboondhi (250GMS)", 90),
    CatalogItem::new("Butter murukku (250GMS)", 100),
    CatalogItem::new("Karasev (250GMS)", 90),
    CatalogItem::new("Ragi ribbon pakoda (250GMS)", 95),
    CatalogItem::new("Kambu mullu murukku (250GMS)", 95),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_has_ten_items() {
        assert_eq!(CATALOG.len(), 10);
    }

    #[test]
    fn test_catalog_names_are_unique() {
        let names: HashSet<_> = CATALOG.iter().map(|item| item.name).collect();
        assert_eq!(names.len(), CATALOG.len());
    }

    #[test]
    fn test_catalog_prices() {
        assert_eq!(CATALOG[0].unit_price, 90);
        assert_eq!(CATALOG[6].unit_price, 100);
        assert_eq!(CATALOG[9].unit_price, 95);
    }
}
