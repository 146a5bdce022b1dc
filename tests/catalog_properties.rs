//! Cross-structure properties of the course catalog.
//!
//! These tests verify:
//! 1. All three structures produce identical sorted views for unique identifiers
//! 2. All three structures agree on every lookup
//! 3. Duplicate identifiers diverge exactly as documented
//! 4. Empty and unloaded catalogs degrade to empty results, not errors
//! 5. Large and degenerate (sorted) inputs stay correct
//!
//! ## Running
//!
//! ```bash
//! cargo test --release --test catalog_properties -- --nocapture
//! ```

use std::collections::HashSet;
use std::sync::Arc;
use std::time::{Duration, Instant};

use course_catalog::bench::{StepClock, SyntheticGenerator};
use course_catalog::catalog::digest_hex;
use course_catalog::{
    build, BenchmarkHarness, CatalogError, CatalogFacade, DirectIndex, OrderedTree, Record,
    SequentialList, SharedRecord, StructureKind,
};

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

const DEPARTMENTS: [&str; 5] = ["CSCI", "MATH", "PHYS", "ENGL", "HIST"];

/// Generate records with unique random identifiers, in random order.
///
/// Same seed = same records.
fn generate_unique_records(count: usize, seed: u64) -> Vec<Record> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut seen = HashSet::with_capacity(count);
    let mut records = Vec::with_capacity(count);

    while records.len() < count {
        let department = DEPARTMENTS.choose(&mut rng).copied().unwrap_or("CSCI");
        let identifier = format!("{department}{:05}", rng.gen_range(0..100_000));
        if !seen.insert(identifier.clone()) {
            continue;
        }

        let prerequisites = (0..rng.gen_range(0..=3))
            .map(|_| format!("{department}{:05}", rng.gen_range(0..100_000)))
            .collect();
        let title = format!("Course {}", records.len());
        records.push(Record::new(identifier, title, prerequisites));
    }

    records
}

fn identifiers(records: &[SharedRecord]) -> Vec<&str> {
    records.iter().map(|r| r.identifier()).collect()
}

// ============================================================================
// CROSS-STRUCTURE PROPERTIES
// ============================================================================

#[test]
fn sorted_views_identical_for_unique_identifiers() {
    for seed in 0..20 {
        let mut facade = CatalogFacade::new();
        facade.load(generate_unique_records(300, seed));

        let tree = facade.sorted_by_tree();
        let list = facade.sorted_by_list();
        let index = facade.sorted_by_index();

        assert_eq!(tree, list, "tree and list differ (seed={seed})");
        assert_eq!(tree, index, "tree and index differ (seed={seed})");
        assert!(identifiers(&tree).windows(2).all(|w| w[0] < w[1]));
        assert!(facade.is_consistent());
    }
}

#[test]
fn lookups_agree_for_unique_identifiers() {
    let records = generate_unique_records(1_000, 7);
    let mut facade = CatalogFacade::new();
    facade.load(records.clone());

    for record in &records {
        let id = record.identifier();
        let from_tree = facade.find_in_tree(id).map(|r| &**r);
        let from_list = facade.find_in_list(id).map(|r| &**r);
        let from_index = facade.find_in_index(id).map(|r| &**r);

        assert_eq!(from_tree, Some(record));
        assert_eq!(from_list, Some(record));
        assert_eq!(from_index, Some(record));
    }

    // Identifiers that cannot be present
    for missing in ["", "CSCI", "ZZZZ99999", "csci00001"] {
        for kind in StructureKind::ALL {
            assert!(facade.find(kind, missing).is_none());
        }
    }
}

#[test]
fn insert_then_find_round_trip() {
    let mut tree = OrderedTree::new();
    let mut list = SequentialList::new();
    let mut index = DirectIndex::new();

    for record in generate_unique_records(200, 99) {
        let record = record.shared();
        tree.insert(Arc::clone(&record));
        list.append(Arc::clone(&record));
        index.add(Arc::clone(&record));

        let id = record.identifier();
        assert_eq!(tree.find(id), Some(&record));
        assert_eq!(list.find(id), Some(&record));
        assert_eq!(index.find(id), Some(&record));
    }
}

#[test]
fn empty_structures_sort_empty_and_find_nothing() {
    let catalog = build(Vec::<Record>::new());

    assert!(catalog.tree.in_order().is_empty());
    assert!(catalog.list.traverse().is_empty());
    assert_eq!(catalog.index.all().count(), 0);

    assert!(catalog.tree.find("CSCI101").is_none());
    assert!(catalog.list.find("CSCI101").is_none());
    assert!(catalog.index.find("CSCI101").is_none());

    let mut facade = CatalogFacade::new();
    facade.load(Vec::<Record>::new());
    for kind in StructureKind::ALL {
        assert!(facade.sorted(kind).is_empty());
        assert!(facade.find(kind, "CSCI101").is_none());
    }
}

#[test]
fn duplicate_identifier_divergence() {
    let mut facade = CatalogFacade::new();
    facade.load(vec![
        Record::new("CSCI200", "Data Structures", vec![]),
        Record::new("CSCI101", "Intro (old)", vec![]),
        Record::new("CSCI300", "Algorithms", vec![]),
        Record::new("CSCI101", "Intro (new)", vec!["CSCI100".into()]),
    ]);

    // Index keeps the most recent record
    assert_eq!(facade.find_in_index("CSCI101").unwrap().title(), "Intro (new)");

    // Tree and list keep the first
    assert_eq!(facade.find_in_tree("CSCI101").unwrap().title(), "Intro (old)");
    assert_eq!(facade.find_in_list("CSCI101").unwrap().title(), "Intro (old)");

    // Tree and list sorted views keep both, first-inserted first
    let tree_titles: Vec<_> = facade.sorted_by_tree().iter().map(|r| r.title().to_string()).collect();
    let list_titles: Vec<_> = facade.sorted_by_list().iter().map(|r| r.title().to_string()).collect();
    assert_eq!(
        tree_titles,
        vec!["Intro (old)", "Intro (new)", "Data Structures", "Algorithms"]
    );
    assert_eq!(tree_titles, list_titles);

    // The index view has one record per identifier
    assert_eq!(
        identifiers(&facade.sorted_by_index()),
        vec!["CSCI101", "CSCI200", "CSCI300"]
    );
    assert!(!facade.is_consistent());
}

// ============================================================================
// SCENARIOS
// ============================================================================

#[test]
fn three_course_scenario() {
    let mut facade = CatalogFacade::new();
    facade.load(vec![
        Record::new("CSCI101", "Intro", vec![]),
        Record::new("CSCI201", "Data Structures", vec!["CSCI101".into()]),
        Record::new("CSCI100", "Orientation", vec![]),
    ]);

    assert_eq!(
        identifiers(&facade.sorted_by_tree()),
        vec!["CSCI100", "CSCI101", "CSCI201"]
    );

    let data_structures = facade.find_in_index("CSCI201").unwrap();
    assert_eq!(
        **data_structures,
        Record::new("CSCI201", "Data Structures", vec!["CSCI101".into()])
    );

    assert!(facade.find_in_tree("CSCI999").is_none());
}

#[test]
fn benchmark_without_data_is_precondition_violation() {
    let harness = BenchmarkHarness::with_clock(StepClock::new(Duration::from_millis(1)));

    assert_eq!(harness.measure(&[], 3), Err(CatalogError::EmptyDataset));
    assert_eq!(
        CatalogFacade::new().benchmark_current(&harness, 3),
        Err(CatalogError::EmptyDataset)
    );
}

#[test]
fn reads_are_idempotent() {
    let mut facade = CatalogFacade::new();
    facade.load(generate_unique_records(100, 3));

    for kind in StructureKind::ALL {
        let first = facade.sorted(kind);
        let second = facade.sorted(kind);
        assert_eq!(first, second);
        assert_eq!(
            facade.find(kind, first[50].identifier()),
            facade.find(kind, first[50].identifier())
        );
    }
}

// ============================================================================
// DETERMINISM AND SCALE
// ============================================================================

#[test]
fn digest_determinism() {
    let digest_for = |seed: u64| {
        let mut facade = CatalogFacade::new();
        facade.load(generate_unique_records(2_000, seed));
        facade.digest(StructureKind::Tree)
    };

    let first = digest_for(12345);
    let second = digest_for(12345);
    println!("  Run 1 digest: {}", digest_hex(&first));
    println!("  Run 2 digest: {}", digest_hex(&second));
    assert_eq!(first, second, "digests must match for identical input");

    assert_ne!(first, digest_for(12346), "different seeds should differ");
}

#[test]
fn insertion_order_does_not_change_sorted_view() {
    let records: Vec<SharedRecord> = generate_unique_records(500, 11)
        .into_iter()
        .map(Record::shared)
        .collect();
    let mut shuffled = records.clone();
    shuffled.shuffle(&mut ChaCha8Rng::seed_from_u64(5));

    let mut a = CatalogFacade::new();
    a.load(records);
    let mut b = CatalogFacade::new();
    b.load(shuffled);

    for kind in StructureKind::ALL {
        assert_eq!(a.digest(kind), b.digest(kind));
    }
}

/// Sorted input degenerates the tree into a chain; everything must still work.
#[test]
fn stress_sorted_input() {
    const COUNT: usize = 20_000;

    let dataset: Vec<SharedRecord> = (0..COUNT)
        .map(|i| Record::new(format!("CSCI{i:06}"), format!("Course {i}"), vec![]).shared())
        .collect();

    let start = Instant::now();
    let catalog = build(dataset.iter().cloned());
    let elapsed = start.elapsed();

    println!("  Records:      {:>12}", COUNT);
    println!("  Tree height:  {:>12}", catalog.tree.height());
    println!("  Build time:   {:>12.2?}", elapsed);

    assert_eq!(catalog.tree.height(), COUNT);
    assert_eq!(catalog.tree.in_order(), dataset);
    assert!(catalog.tree.find("CSCI019999").is_some());
    assert!(catalog.tree.find("CSCI020000").is_none());
}

/// Random input keeps the tree shallow.
#[test]
fn stress_random_input_height() {
    const COUNT: usize = 50_000;

    let dataset = SyntheticGenerator::new("CSCI", 42).shuffled(true).generate(COUNT);

    let tree: OrderedTree = dataset.iter().cloned().collect();

    println!("  Records:      {:>12}", COUNT);
    println!("  Tree height:  {:>12}", tree.height());

    // Expected height of a random BST is about 4.3 ln n (~47 here)
    assert!(tree.height() < 100, "random tree too deep: {}", tree.height());
    assert_eq!(tree.len(), COUNT);
}

#[test]
fn scaling_table_has_one_row_per_size() {
    let harness = BenchmarkHarness::with_clock(StepClock::new(Duration::from_micros(500)));
    let table = harness.measure_across_sizes(&[100, 1_000], 2).unwrap();

    print!("{table}");
    assert_eq!(table.rows().len(), 2);
    for row in table.rows() {
        assert_eq!(row.report.dataset_len, row.size);
        assert_eq!(row.report.as_map().len(), 3);
    }
}
