use anyhow::Context;
use holomodel_core::{builtin_domains, merge_domains, parse_domains_json, Domain};
use std::fs;
use std::path::Path;

pub fn load_domains_file(path: &Path) -> anyhow::Result<Vec<Domain>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read domain file {}", path.display()))?;
    let domains = parse_domains_json(&raw)
        .with_context(|| format!("invalid domain file {}", path.display()))?;
    Ok(domains)
}

/// Built-in domains, followed by the ones in `extra` when it loads cleanly.
/// A broken file is logged and skipped as a whole.
pub fn catalog(extra: Option<&Path>) -> Vec<Domain> {
    let mut domains = builtin_domains();
    let Some(path) = extra else {
        return domains;
    };

    let merged = load_domains_file(path)
        .and_then(|loaded| merge_domains(&mut domains, loaded).map_err(anyhow::Error::from));
    match merged {
        Ok(added) => tracing::info!(path = %path.display(), added, "loaded extra domains"),
        Err(err) => tracing::warn!(path = %path.display(), "skipping extra domains: {err:#}"),
    }
    domains
}
