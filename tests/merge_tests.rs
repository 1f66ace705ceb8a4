//! End-to-end package merge scenarios.
//!
//! Exercises the public API the way a document-merge pipeline would: a
//! primary document, contributing secondaries, and an already-merged file
//! list, asserting the merged package's fields and diagnostics.

use spdx_merge::merge::{NonStandardLicenseMapper, PackageMerger, LICENSE_COMMENT_PREAMBLE};
use spdx_merge::model::{SpdxDocument, SpdxFile, SpdxPackage, VerificationCode};

fn document(namespace: &str, name: &str, excluded: &[&str]) -> SpdxDocument {
    let code = VerificationCode::new(
        "d6a770ba38583ed4bb4525bd96e50461655d2758",
        excluded.iter().map(ToString::to_string).collect(),
    );
    SpdxDocument::new(
        namespace,
        SpdxPackage::new(name).with_verification_code(code),
    )
}

fn merged_files() -> Vec<SpdxFile> {
    vec![
        SpdxFile::new("src/lib.rs")
            .with_checksum("2fd4e1c67a2d28fced849ee1bb76e7391b93eb12")
            .with_seen_license("MIT"),
        SpdxFile::new("src/main.rs")
            .with_checksum("da39a3ee5e6b4b0d3255bfef95601890afd80709")
            .with_seen_license("MIT")
            .with_seen_license("Apache-2.0"),
    ]
}

#[test]
fn excluded_name_lists_merge_case_insensitively() {
    // Scenario: ["a.txt", "B.TXT"] + ["b.txt", "c.txt"] -> ["a.txt", "B.TXT", "c.txt"]
    let primary = document("https://example.com/primary", "app", &["a.txt", "B.TXT"]);
    let secondary = document("https://example.com/secondary", "lib", &["b.txt", "c.txt"]);

    let mut merger = PackageMerger::new(primary);
    let merged = merger.merge_package(&[secondary], &merged_files()).unwrap();

    let code = merged.package.verification_code.expect("code regenerated");
    assert_eq!(code.excluded_file_names, ["a.txt", "B.TXT", "c.txt"]);
}

#[test]
fn seen_licenses_merge_without_duplicates() {
    // Scenario: ["MIT"] + ["MIT", "Apache-2.0"] -> ["MIT", "Apache-2.0"]
    let primary = document("https://example.com/primary", "app", &[]);

    let mut merger = PackageMerger::new(primary);
    let merged = merger.merge_package(&[], &merged_files()).unwrap();

    let licenses: Vec<String> = merged
        .package
        .license_info_from_files
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(licenses, ["MIT", "Apache-2.0"]);
}

#[test]
fn comment_attributes_contributing_secondaries_only() {
    // Two secondaries, only the second contributed non-standard licenses;
    // its declared license maps to LicenseRef-7.
    let primary = document("https://example.com/primary", "app", &[]);
    let sub_a = document("https://example.com/a", "subpkgA", &[]);
    let sub_b = SpdxDocument::new(
        "https://example.com/b",
        SpdxPackage::new("subpkgB")
            .with_declared_license("LicenseRef-1")
            .with_verification_code(VerificationCode::default()),
    );

    let mut mapper = NonStandardLicenseMapper::new().with_next_ref_id(7);
    mapper.register(&sub_b, "LicenseRef-1");

    let mut merger = PackageMerger::new(primary).with_mapper(Box::new(mapper));
    let merged = merger
        .merge_package(&[sub_a, sub_b], &merged_files())
        .unwrap();

    assert_eq!(
        merged.package.license_comment.as_deref(),
        Some(format!("{LICENSE_COMMENT_PREAMBLE}subpkgB (LicenseRef-7) ").as_str())
    );
    assert!(merged.diagnostics.is_empty());
}

#[test]
fn failed_remap_yields_diagnostic_not_failure() {
    // The secondary's declared license cannot be parsed; its comment entry
    // is dropped, the merge succeeds, and the verification code is intact.
    let primary = document("https://example.com/primary", "app", &[]);
    let sub = SpdxDocument::new(
        "https://example.com/sub",
        SpdxPackage::new("subpkg")
            .with_declared_license("AND MIT")
            .with_verification_code(VerificationCode::default()),
    );

    let mut mapper = NonStandardLicenseMapper::new();
    mapper.register(&sub, "LicenseRef-1");

    let mut merger = PackageMerger::new(primary).with_mapper(Box::new(mapper));
    let merged = merger.merge_package(&[sub], &merged_files()).unwrap();

    assert_eq!(
        merged.package.license_comment.as_deref(),
        Some(LICENSE_COMMENT_PREAMBLE)
    );
    assert_eq!(merged.diagnostics.len(), 1);
    assert_eq!(merged.diagnostics[0].document, "https://example.com/sub");
    assert!(merged.package.verification_code.is_some());
}

#[test]
fn declared_license_always_reset_to_noassertion() {
    let primary = SpdxDocument::new(
        "https://example.com/primary",
        SpdxPackage::new("app")
            .with_declared_license("GPL-2.0-only")
            .with_verification_code(VerificationCode::default()),
    );
    let secondary = SpdxDocument::new(
        "https://example.com/secondary",
        SpdxPackage::new("lib")
            .with_declared_license("MIT")
            .with_verification_code(VerificationCode::default()),
    );

    let mut merger = PackageMerger::new(primary);
    let merged = merger.merge_package(&[secondary], &merged_files()).unwrap();
    assert!(merged.package.declared_license.is_noassertion());
}

#[test]
fn repeated_merges_are_deterministic() {
    let make_merged = || {
        let primary = document("https://example.com/primary", "app", &["skip.txt"]);
        let sub = SpdxDocument::new(
            "https://example.com/sub",
            SpdxPackage::new("subpkg")
                .with_declared_license("LicenseRef-1")
                .with_verification_code(VerificationCode::new(
                    "0000000000000000000000000000000000000000",
                    vec!["other.txt".to_string()],
                )),
        );
        let mut mapper = NonStandardLicenseMapper::new();
        mapper.register(&sub, "LicenseRef-1");

        let mut merger = PackageMerger::new(primary).with_mapper(Box::new(mapper));
        merger.merge_package(&[sub], &merged_files()).unwrap()
    };

    let first = make_merged();
    let second = make_merged();
    assert_eq!(
        first.package.verification_code,
        second.package.verification_code
    );
    assert_eq!(first.package.license_comment, second.package.license_comment);
}

#[test]
fn secondary_packages_are_not_mutated() {
    let primary = document("https://example.com/primary", "app", &[]);
    let secondary = SpdxDocument::new(
        "https://example.com/secondary",
        SpdxPackage::new("lib")
            .with_declared_license("MIT")
            .with_verification_code(VerificationCode::default()),
    );
    let before = secondary.clone();

    let mut merger = PackageMerger::new(primary);
    let _ = merger
        .merge_package(std::slice::from_ref(&secondary), &merged_files())
        .unwrap();

    assert_eq!(
        secondary.package().unwrap().declared_license,
        before.package().unwrap().declared_license
    );
}
