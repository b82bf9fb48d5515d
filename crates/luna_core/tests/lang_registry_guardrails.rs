use std::collections::HashMap;

use luna_core::lang::keywords::{self, KeywordCategory, KeywordId};

#[test]
fn keywords_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, KeywordId> = HashMap::new();

    for info in keywords::KEYWORDS {
        assert_eq!(
            keywords::from_str(info.canonical),
            Some(info.id),
            "keyword canonical spelling not resolvable: {}",
            info.canonical
        );
        assert_eq!(
            keywords::as_str(info.id),
            info.canonical,
            "keyword as_str mismatch for {:?}",
            info.id
        );
        assert_eq!(
            keywords::info_for(info.id).id,
            info.id,
            "registry row out of order for {:?}",
            info.id
        );

        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!(
                "duplicate keyword spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }
    }
}

#[test]
fn keyword_dump_names_are_upper_case_spellings() {
    for info in keywords::KEYWORDS {
        assert_eq!(info.dump_name, info.canonical.to_ascii_uppercase());
        assert_eq!(keywords::from_dump_name(info.dump_name), Some(info.id));
        assert_eq!(keywords::from_dump_name(info.canonical), Some(info.id));
    }
    assert_eq!(keywords::from_dump_name("ELIF"), None);
}

#[test]
fn keyword_categories_pair_conditionals_and_loops() {
    assert_eq!(keywords::category(KeywordId::If), KeywordCategory::Conditional);
    assert_eq!(keywords::category(KeywordId::Unless), KeywordCategory::Conditional);
    assert_eq!(keywords::category(KeywordId::Else), KeywordCategory::Conditional);
    assert_eq!(keywords::category(KeywordId::While), KeywordCategory::Loop);
    assert_eq!(keywords::category(KeywordId::Until), KeywordCategory::Loop);
}

#[test]
fn keyword_lookup_is_case_sensitive_for_source_spellings() {
    assert_eq!(keywords::from_str("If"), None);
    assert_eq!(keywords::from_str("elif"), None);
}
