//! Ordered keyword classification.
//!
//! Both the fridge categories and the grocery store sections are assigned by
//! the same mechanism: lowercase the name, then walk an ordered table of
//! keyword buckets and return the first bucket containing a matching
//! substring. Keyword lists overlap ("frozen strawberry" matches both a
//! frozen keyword and a fruit keyword), so bucket order is a fixed priority:
//! reordering a table silently changes classifications.

use crate::normalize::normalize_name;

/// One priority bucket: a category tag and the substrings that select it.
pub struct KeywordBucket<C: 'static> {
    pub category: C,
    pub keywords: &'static [&'static str],
}

/// An ordered keyword table with a fallback category.
///
/// `classify` is pure and total: the same input always yields the same
/// category, and unmatched names land in the fallback bucket.
pub struct KeywordTable<C: Copy + 'static> {
    buckets: &'static [KeywordBucket<C>],
    fallback: C,
}

impl<C: Copy + 'static> KeywordTable<C> {
    pub const fn new(buckets: &'static [KeywordBucket<C>], fallback: C) -> Self {
        Self { buckets, fallback }
    }

    /// Classify a name. Matching is case-insensitive substring containment
    /// against each bucket in table order; first hit wins.
    pub fn classify(&self, name: &str) -> C {
        let lowered = normalize_name(name);
        for bucket in self.buckets {
            if bucket.keywords.iter().any(|kw| lowered.contains(kw)) {
                return bucket.category;
            }
        }
        self.fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Tag {
        Cold,
        Sweet,
        Other,
    }

    const TABLE: KeywordTable<Tag> = KeywordTable::new(
        &[
            KeywordBucket {
                category: Tag::Cold,
                keywords: &["frozen", "ice"],
            },
            KeywordBucket {
                category: Tag::Sweet,
                keywords: &["berry", "sugar"],
            },
        ],
        Tag::Other,
    );

    #[test]
    fn test_first_bucket_wins_on_overlap() {
        // "frozen" (bucket 1) and "berry" (bucket 2) both match; table order decides.
        assert_eq!(TABLE.classify("Frozen Strawberry"), Tag::Cold);
        assert_eq!(TABLE.classify("Strawberry"), Tag::Sweet);
    }

    #[test]
    fn test_fallback_for_unmatched() {
        assert_eq!(TABLE.classify("plain water"), Tag::Other);
        assert_eq!(TABLE.classify(""), Tag::Other);
    }

    #[test]
    fn test_classification_is_deterministic() {
        for name in ["Frozen Strawberry", "Sugar", "nothing"] {
            assert_eq!(TABLE.classify(name), TABLE.classify(name));
        }
    }

    #[test]
    fn test_case_insensitive_matching() {
        assert_eq!(TABLE.classify("ICE CUBES"), Tag::Cold);
        assert_eq!(TABLE.classify("  BlueBerry Jam "), Tag::Sweet);
    }
}
