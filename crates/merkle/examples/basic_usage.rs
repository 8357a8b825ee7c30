//! Basic usage example for the merkle crate
//!
//! Run with `RUST_LOG=debug` to see the library's log output.

use arbor_merkle::{TreeSlot, detect_tampering, error::Result, verify_proof};

fn main() -> Result<()> {
    env_logger::init();

    // Commit an ordered set of records
    let slot = TreeSlot::new();
    let records = ["alice:10", "bob:20", "carol:30", "dave:40", "erin:50"];
    let tree = slot.commit(records)?;

    println!("{}", tree.statistics());
    println!("{tree}");

    // Prove that one record is part of the commitment
    let leaf_proof = tree.prove(2)?;
    println!("Proof for leaf {} ({} steps):", leaf_proof.index, leaf_proof.proof.len());
    for step in &leaf_proof.proof {
        println!("  level {}: {} on the {}", step.level, step.sibling.short(16), step.position);
    }

    // Anyone holding the root can check it
    let root = tree.root();
    let valid = verify_proof(&leaf_proof.leaf_data, &leaf_proof.proof, &root);
    println!("carol:30 verifies: {valid}");

    // An edited record fails against the same proof
    let report = detect_tampering("carol:30", "carol:3000", &leaf_proof.proof, &root);
    println!(
        "original valid: {}, modified valid: {}, tampering detected: {}",
        report.original_valid,
        report.modified_valid,
        report.detected()
    );

    // Committing a new set replaces the active tree
    slot.commit(["frank:60"])?;
    if let Some(current) = slot.current() {
        println!("active tree now has {} leaf", current.leaf_count());
    }

    Ok(())
}
