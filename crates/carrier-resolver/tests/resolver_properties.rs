//! Resolution policy properties over generated and crafted carrier tables

use std::sync::Arc;

use carrier_resolver::{
    load_from_reader, CarrierCatalog, CarrierRecord, CarrierResolver, ResolverConfig,
};
use proptest::prelude::*;

fn resolver_for(records: Vec<CarrierRecord>) -> CarrierResolver {
    let catalog = CarrierCatalog::build(records, ResolverConfig::default())
        .expect("default config is valid");
    CarrierResolver::new(Arc::new(catalog))
}

/// Flip the case of every other character
fn vary_case(value: &str) -> String {
    value
        .chars()
        .enumerate()
        .map(|(i, c)| {
            if i % 2 == 0 {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}

// -- Strategy helpers --

fn arb_records() -> impl Strategy<Value = Vec<CarrierRecord>> {
    prop::collection::vec(("[a-zA-Z ]{1,12}", "[a-z]{0,8}", "[a-z]{0,8}"), 1..30).prop_map(
        |rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (en, cn, hk))| {
                    // suffixes keep every alias unique across the table
                    CarrierRecord::new(
                        (i as u32) * 7 + 1,
                        vec![
                            format!("{}#{}", en, i),
                            format!("{}@{}", cn, i),
                            format!("{}%{}", hk, i),
                        ],
                    )
                })
                .collect()
        },
    )
}

proptest! {
    #[test]
    fn validate_id_matches_table(records in arb_records()) {
        let ids: Vec<u32> = records.iter().map(|r| r.id).collect();
        let resolver = resolver_for(records);

        for id in &ids {
            prop_assert!(resolver.validate_id(*id));
        }
        // ids are 1 mod 7, so these are never present
        for id in ids.iter().map(|id| id + 1) {
            prop_assert!(!resolver.validate_id(id));
        }
    }

    #[test]
    fn canonical_round_trip(records in arb_records()) {
        let expected: Vec<(u32, Vec<String>)> =
            records.iter().map(|r| (r.id, r.names.clone())).collect();
        let resolver = resolver_for(records);

        for (id, names) in expected {
            for name in names {
                prop_assert_eq!(resolver.catalog().canonical().lookup(&vary_case(&name)), Some(id));
                prop_assert_eq!(resolver.resolve_exact(&name.to_uppercase()), Some(id));
            }
        }
    }

    #[test]
    fn find_candidates_respects_limit(
        records in arb_records(),
        query in "[a-z]{0,4}",
        limit in 1usize..6,
    ) {
        let resolver = resolver_for(records);
        prop_assert!(resolver.find_candidates(&query, limit).len() <= limit);
    }
}

#[test]
fn substring_match_preempts_closer_fuzzy_match() {
    let resolver = resolver_for(vec![
        CarrierRecord::new(1, vec!["Swiss Post International".into()]),
        // one edit away from the query, but does not contain it
        CarrierRecord::new(2, vec!["Swis".into()]),
    ]);

    let ids: Vec<_> = resolver
        .find_candidates("swiss", 10)
        .into_iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(ids, vec![1]);
}

#[test]
fn fuzzy_fallback_is_ordered_best_first() {
    let resolver = resolver_for(vec![
        CarrierRecord::new(1, vec!["Posten".into()]),
        CarrierRecord::new(2, vec!["PostNord".into()]),
    ]);

    let candidates = resolver.find_candidates("postnrd", 10);
    assert!(!candidates.is_empty());
    assert_eq!(candidates[0].id, 2);
}

#[test]
fn scenario_from_csv_table() {
    let csv = "key,name_en,name_cn,name_hk\n100,DHL Express,敦豪,敦豪\n200,FedEx,联邦快递,聯邦快遞\n";
    let records = load_from_reader(csv.as_bytes()).unwrap();
    let resolver = resolver_for(records);

    let dhl = resolver.find_candidates("dhl", 10);
    assert_eq!(dhl.len(), 1);
    assert_eq!((dhl[0].id, dhl[0].name.as_str()), (100, "DHL Express"));

    let fedex = resolver.find_candidates("fedx", 10);
    assert_eq!(fedex.len(), 1);
    assert_eq!((fedex[0].id, fedex[0].name.as_str()), (200, "FedEx"));

    assert!(resolver.find_candidates("zzz", 10).is_empty());
    assert!(!resolver.validate_id(999));
}
