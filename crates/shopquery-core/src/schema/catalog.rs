use crate::intent::Category;

/// A single entry in the category catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryDef {
    /// The canonical category.
    pub category: Category,
    /// The phrase that identifies the category in a question.
    pub phrase: &'static str,
    /// The backing table (or collection) identifier.
    pub table: &'static str,
}

/// The closed set of product categories the engine can query.
///
/// Declaration order is significant: the category resolver and the join
/// detector scan entries in order and take the first phrase match.
/// Constructed once at startup and never mutated; safe to share across
/// threads by reference.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CategoryDef>,
}

impl Catalog {
    /// The reference product domain.
    pub fn new() -> Self {
        Self {
            entries: vec![
                CategoryDef {
                    category: Category::Appliances,
                    phrase: "appliances",
                    table: "all_appliances",
                },
                CategoryDef {
                    category: Category::AirConditioners,
                    phrase: "air conditioners",
                    table: "air_conditioners",
                },
                CategoryDef {
                    category: Category::CarAndMotorbikeProducts,
                    phrase: "car and motorbike products",
                    table: "all_car_and_motorbike_products",
                },
            ],
        }
    }

    /// Catalog entries in declaration order.
    pub fn entries(&self) -> &[CategoryDef] {
        &self.entries
    }

    /// The table/collection identifier backing a category.
    pub fn table(&self, category: Category) -> &'static str {
        self.entry(category).table
    }

    /// The question phrase identifying a category.
    pub fn phrase(&self, category: Category) -> &'static str {
        self.entry(category).phrase
    }

    /// All known category phrases, in declaration order.
    pub fn phrases(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.phrase.to_string()).collect()
    }

    /// The column joined on when the given category is the primary source.
    ///
    /// Uses the sub-category marker heuristic: identifiers carrying a
    /// sub-category marker join on `sub_category`, everything else joins on
    /// `main_category`. Both compilers must use this one definition.
    pub fn join_key(&self, primary: Category) -> &'static str {
        if self.table(primary).contains("sub_category") {
            "sub_category"
        } else {
            "main_category"
        }
    }

    fn entry(&self, category: Category) -> &CategoryDef {
        // The enum is closed and every variant has an entry, so the lookup
        // cannot fail.
        self.entries
            .iter()
            .find(|e| e.category == category)
            .unwrap_or_else(|| panic!("catalog entry missing for {category:?}"))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_an_entry() {
        let catalog = Catalog::new();
        assert_eq!(catalog.table(Category::Appliances), "all_appliances");
        assert_eq!(catalog.table(Category::AirConditioners), "air_conditioners");
        assert_eq!(
            catalog.table(Category::CarAndMotorbikeProducts),
            "all_car_and_motorbike_products"
        );
    }

    #[test]
    fn join_key_defaults_to_main_category() {
        // None of the reference identifiers carry a sub-category marker.
        let catalog = Catalog::new();
        assert_eq!(catalog.join_key(Category::Appliances), "main_category");
        assert_eq!(catalog.join_key(Category::AirConditioners), "main_category");
    }

    #[test]
    fn declaration_order_is_stable() {
        let catalog = Catalog::new();
        let phrases = catalog.phrases();
        assert_eq!(
            phrases,
            vec!["appliances", "air conditioners", "car and motorbike products"]
        );
    }
}
