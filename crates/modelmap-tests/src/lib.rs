//! Shared arrange/assert helpers for the integration suite.

pub use modelmap_build::Artifact;

/// Run the whole pipeline over in-memory sources; panics on any error or
/// diagnostic, so tests assert on artifacts only.
pub fn generate(sources: &[&str]) -> Vec<Artifact> {
    let output = modelmap::generate_sources(sources).expect("generation failed");
    assert!(
        output.diagnostics.is_empty(),
        "unexpected diagnostics: {}",
        output.diagnostics
    );
    output.artifacts
}

/// As [`generate`], keeping diagnostics for tests that expect them.
pub fn generate_with_diagnostics(sources: &[&str]) -> modelmap::GenerateOutput {
    modelmap::generate_sources(sources).expect("generation failed")
}

pub fn artifact<'a>(artifacts: &'a [Artifact], filename: &str) -> &'a Artifact {
    artifacts
        .iter()
        .find(|a| a.filename == filename)
        .unwrap_or_else(|| {
            let have: Vec<&str> = artifacts.iter().map(|a| a.filename.as_str()).collect();
            panic!("missing artifact '{filename}'; have {have:?}")
        })
}

pub fn assert_contains(artifact: &Artifact, needle: &str) {
    assert!(
        artifact.source.contains(needle),
        "'{}' not found in {}:\n{}",
        needle,
        artifact.filename,
        artifact.source
    );
}

pub fn assert_not_contains(artifact: &Artifact, needle: &str) {
    assert!(
        !artifact.source.contains(needle),
        "unexpected '{}' in {}:\n{}",
        needle,
        artifact.filename,
        artifact.source
    );
}
