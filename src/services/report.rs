use crate::domain::constants::{DEFAULT_PATHS, LOOKUP_KEY};
use crate::domain::models::{PathEntry, Report, SessionMeta};
use crate::services::session::session_meta;

pub fn index_paths(paths: &[&str]) -> Vec<PathEntry> {
    paths
        .iter()
        .enumerate()
        .map(|(index, value)| PathEntry {
            index,
            value: value.to_string(),
        })
        .collect()
}

pub fn build_report(paths: &[&str], meta: &SessionMeta, key: &str) -> Report {
    if meta.get(key).is_none() {
        let known: Vec<&str> = meta.keys().collect();
        tracing::debug!(key, ?known, "session metadata has no entry, using empty value");
    }
    let report = Report {
        paths: index_paths(paths),
        lookup_key: key.to_string(),
        value: meta.lookup(key),
    };
    tracing::debug!(paths = report.paths.len(), "report assembled");
    report
}

pub fn default_report() -> Report {
    build_report(&DEFAULT_PATHS, &session_meta(), LOOKUP_KEY)
}
