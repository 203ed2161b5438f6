use std::fs;

use claimcheck::assemble::{assemble, load_entry, EntryContent};
use claimcheck::config::AssemblyConfig;
use claimcheck::index::ArchiveEntry;
use tempfile::tempdir;

fn entry(path: &str, extension: &str, size: u64) -> ArchiveEntry {
    ArchiveEntry {
        path: path.to_string(),
        extension: extension.to_string(),
        declared_size: size,
    }
}

/// Budget counted directly in characters.
fn budget(chars: usize) -> AssemblyConfig {
    AssemblyConfig {
        max_units: chars,
        chars_per_unit: 1,
    }
}

#[test]
fn segments_carry_a_path_header_in_index_order() {
    let scratch = tempdir().unwrap();
    fs::write(scratch.path().join("a.js"), "aaaa").unwrap();
    fs::write(scratch.path().join("b.js"), "bbbb").unwrap();
    let entries = vec![entry("a.js", ".js", 4), entry("b.js", ".js", 4)];

    let text = assemble(&entries, scratch.path(), &AssemblyConfig::default());
    assert_eq!(text, "// File: a.js\naaaa\n\n// File: b.js\nbbbb\n\n");
}

#[test]
fn assembly_is_prefix_deterministic() {
    let scratch = tempdir().unwrap();
    fs::write(scratch.path().join("a.js"), "aaaa").unwrap();
    fs::write(scratch.path().join("b.js"), "bbbb").unwrap();
    let entries = vec![entry("a.js", ".js", 4), entry("b.js", ".js", 4)];
    let config = budget(25);

    let first = assemble(&entries, scratch.path(), &config);
    let second = assemble(&entries, scratch.path(), &config);
    assert_eq!(first, second);
    assert_eq!(first, "// File: a.js\naaaa\n\n");
}

#[test]
fn budget_overflow_is_a_hard_stop_not_a_skip() {
    let scratch = tempdir().unwrap();
    // Segments: "// File: <p>\n" + content + "\n\n".
    fs::write(scratch.path().join("a.js"), "aaaa").unwrap(); // 20 chars
    fs::write(scratch.path().join("b.js"), "bbbb").unwrap(); // 20 chars
    fs::write(scratch.path().join("c.js"), "cccccccccccccc").unwrap(); // 30 chars
    fs::write(scratch.path().join("d.js"), "").unwrap(); // 16 chars
    let entries = vec![
        entry("a.js", ".js", 4),
        entry("b.js", ".js", 4),
        entry("c.js", ".js", 14),
        entry("d.js", ".js", 0),
    ];

    // a and b fit (40). c would reach 70 and stops assembly; d would still
    // fit (56) but is never considered.
    let text = assemble(&entries, scratch.path(), &budget(60));
    assert!(text.contains("// File: a.js"));
    assert!(text.contains("// File: b.js"));
    assert!(!text.contains("// File: c.js"));
    assert!(!text.contains("// File: d.js"));
}

#[test]
fn unreadable_entries_are_skipped_without_aborting() {
    let scratch = tempdir().unwrap();
    fs::write(scratch.path().join("bad.bin"), [0xFF, 0xFE, 0x00, 0x9F]).unwrap();
    fs::write(scratch.path().join("good.js"), "ok").unwrap();
    let entries = vec![
        entry("missing.js", ".js", 2),
        entry("bad.bin", ".bin", 4),
        entry("good.js", ".js", 2),
    ];

    let text = assemble(&entries, scratch.path(), &AssemblyConfig::default());
    assert_eq!(text, "// File: good.js\nok\n\n");
}

#[test]
fn load_entry_tags_failures_instead_of_erroring() {
    let scratch = tempdir().unwrap();
    fs::write(scratch.path().join("a.js"), "aaaa").unwrap();

    match load_entry(scratch.path(), &entry("a.js", ".js", 4)) {
        EntryContent::Loaded(content) => assert_eq!(content, "aaaa"),
        EntryContent::Skipped(reason) => panic!("unexpected skip: {reason}"),
    }
    match load_entry(scratch.path(), &entry("nope.js", ".js", 4)) {
        EntryContent::Loaded(_) => panic!("missing file must be a skip"),
        EntryContent::Skipped(_) => {}
    }
}
