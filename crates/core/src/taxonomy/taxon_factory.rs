use super::{TaxonFactoryTrait, TransientTaxon};

/// Default factory: the requested locale doubles as the fallback locale.
#[derive(Debug, Default, Clone)]
pub struct TaxonFactory;

impl TaxonFactory {
    pub fn new() -> Self {
        Self
    }
}

impl TaxonFactoryTrait for TaxonFactory {
    fn create_new(&self, name: &str, locale: &str) -> TransientTaxon {
        TransientTaxon::new(name, locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_new_sets_both_locales() {
        let taxon = TaxonFactory::new().create_new("Shoes", "en_US");
        assert_eq!(taxon.current_locale, "en_US");
        assert_eq!(taxon.fallback_locale, "en_US");
        assert_eq!(taxon.name_in("en_US"), Some("Shoes"));
        assert_eq!(taxon.name_in("fr_FR"), None);
        assert!(taxon.parent.is_none());
    }

    #[test]
    fn test_create_new_with_empty_locale() {
        let taxon = TaxonFactory::new().create_new("Shoes", "");
        assert_eq!(taxon.name_in(""), Some("Shoes"));
    }
}
