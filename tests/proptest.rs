//! Property-based tests for fichepack.
//!
//! These tests generate random inputs to find edge cases.

use proptest::prelude::*;

use fichepack::Fiche;
use fichepack::config::FicheConfig;
use fichepack::core::{FicheStore, ingest, lookup, to_blocks};
use fichepack::parser::{InputKind, Parser, RawUnit};
use fichepack::parsers::TextParser;
use fichepack::parsing::clean_name;
use fichepack::phone::{canonicalize, is_plausible, match_key};

/// Nine-digit national numbers with a valid leading digit.
fn arb_national() -> impl Strategy<Value = String> {
    (1u8..=9, 0u32..100_000_000).prop_map(|(lead, rest)| format!("{lead}{rest:08}"))
}

/// A national number written in one of the common French styles.
fn arb_written_phone() -> impl Strategy<Value = (String, String)> {
    (arb_national(), 0usize..6).prop_map(|(national, style)| {
        let pairs: Vec<&str> = (0..4).map(|k| &national[1 + k * 2..3 + k * 2]).collect();
        let lead = &national[..1];
        let written = match style {
            0 => format!("0{national}"),
            1 => format!("0{lead} {}", pairs.join(" ")),
            2 => format!("0{lead}.{}", pairs.join(".")),
            3 => format!("+33{national}"),
            4 => format!("+33 (0){lead} {}", pairs.join(" ")),
            _ => format!("0033{national}"),
        };
        (national, written)
    })
}

fn arb_name() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "dupont".to_string(),
        "MARTIN".to_string(),
        "jean-pierre".to_string(),
        "le  gall".to_string(),
        "Élodie".to_string(),
        "o'neil".to_string(),
        "straße".to_string(),
        "Иван".to_string(),
    ])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // ============================================
    // PHONE PROPERTIES
    // ============================================

    /// Canonicalization is idempotent
    #[test]
    fn canonicalize_idempotent(input in "\\PC{0,20}") {
        if let Some(canonical) = canonicalize(&input) {
            prop_assert_eq!(canonicalize(&canonical), Some(canonical.clone()));
            prop_assert!(is_plausible(&canonical));
        }
    }

    /// Every written style canonicalizes to the same number
    #[test]
    fn written_styles_canonicalize((national, written) in arb_written_phone()) {
        prop_assert_eq!(canonicalize(&written), Some(format!("+33{national}")));
    }

    /// Canonical output is always `+33` and nine digits
    #[test]
    fn canonical_shape(input in "[0-9+ .()-]{0,20}") {
        if let Some(canonical) = canonicalize(&input) {
            prop_assert_eq!(canonical.len(), 12);
            prop_assert!(canonical.starts_with("+33"));
            prop_assert!(canonical[3..].bytes().all(|b| b.is_ascii_digit()));
            prop_assert_ne!(&canonical[3..4], "0");
        }
    }

    /// Canonicalization never panics on arbitrary input
    #[test]
    fn canonicalize_never_panics(input in any::<String>()) {
        let _ = canonicalize(&input);
        let _ = match_key(&input);
    }

    // ============================================
    // NAME PROPERTIES
    // ============================================

    /// Name cleanup is idempotent
    #[test]
    fn clean_name_idempotent(input in "\\PC{0,40}") {
        let once = clean_name(&input);
        prop_assert_eq!(clean_name(&once), once);
    }

    /// Cleaned names have no leading, trailing or doubled whitespace
    #[test]
    fn clean_name_whitespace(input in "[ \\t\\n\u{a0}a-zé-]{0,30}") {
        let cleaned = clean_name(&input);
        prop_assert_eq!(cleaned.trim(), cleaned.as_str());
        prop_assert!(!cleaned.contains("  "));
        let stray = ['\t', '\n', '\u{a0}'];
        prop_assert!(!cleaned.contains(stray));
    }

    // ============================================
    // STORE / LOOKUP PROPERTIES
    // ============================================

    /// The store never holds a fiche without a mobile
    #[test]
    fn store_rejects_empty_mobile(content in "\\PC{0,200}") {
        let mut store = FicheStore::new();
        let units = [RawUnit::new("x.txt", InputKind::Text, content)];
        let stats = ingest(&mut store, &units, &FicheConfig::default());
        prop_assert_eq!(stats.added, store.len());
        prop_assert!(store.iter().all(Fiche::has_mobile));
    }

    /// Any written form of a stored number finds it
    #[test]
    fn lookup_finds_written_forms(
        (national, written) in arb_written_phone(),
        nom in arb_name(),
        prenom in arb_name(),
    ) {
        let line = format!("{nom};{prenom};0{national}");
        let mut store = FicheStore::new();
        ingest(&mut store, &[RawUnit::new("a.txt", InputKind::Text, line)], &FicheConfig::default());
        prop_assert_eq!(store.len(), 1);

        let found = lookup(&store, &written, 10);
        prop_assert_eq!(found.len(), 1);
        prop_assert_eq!(&found[0].mobile, &format!("+33{national}"));
    }

    /// Exported blocks parse back to the same numbers and names
    #[test]
    fn blocks_export_reingests(
        entries in prop::collection::vec((arb_name(), arb_name(), arb_national()), 1..10)
    ) {
        let fiches: Vec<Fiche> = entries
            .iter()
            .map(|(nom, prenom, national)| {
                let nom = clean_name(nom);
                let prenom = clean_name(prenom);
                Fiche::new(format!("{nom} {prenom}"), format!("+33{national}")).with_names(nom, prenom)
            })
            .collect();

        let reparsed = TextParser::new().parse_str(&to_blocks(&fiches));
        prop_assert_eq!(reparsed, fiches);
    }
}
