//! Canonical name keys.
//!
//! Every store in the application is keyed by ingredient or item name, and
//! every insert and lookup must agree on what "the same name" means. The
//! contract is: two names refer to the same entry iff their normalized forms
//! are equal. Normalization is applied at the store boundary, never assumed
//! from the shape of the backing map.

/// Normalize a name into its canonical key form: trimmed and lowercased.
///
/// Lowercasing is Unicode-aware, so accented names common in recipe data
/// ("Ägg", "Purjolök", "Mjöl") compare equal regardless of input casing.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Whether two names refer to the same entry under the key contract.
pub fn same_name(a: &str, b: &str) -> bool {
    normalize_name(a) == normalize_name(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_lowercases() {
        assert_eq!(normalize_name("  Milk  "), "milk");
        assert_eq!(normalize_name("FLOUR"), "flour");
    }

    #[test]
    fn test_normalize_extended_latin() {
        assert_eq!(normalize_name("ÄGG"), "ägg");
        assert_eq!(normalize_name("Purjolök"), "purjolök");
        assert!(same_name("MJÖL", "mjöl"));
    }

    #[test]
    fn test_same_name_is_case_insensitive() {
        assert!(same_name("Milk", "milk"));
        assert!(same_name(" milk", "MILK "));
        assert!(!same_name("milk", "oat milk"));
    }
}
