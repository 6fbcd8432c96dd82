use crate::config::{LoggingConfig, Section};
use std::{
    collections::HashMap,
    io::{IsTerminal, Write},
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};
use tracing::{level_filters::LevelFilter, Level};
use tracing_subscriber::{filter::Targets, fmt};

use file_rotate::{
    compression::Compression,
    suffix::AppendCount,
    ContentLimit, FileRotate,
};

// -------- level helpers --------
fn parse_tracing_level(s: &str) -> Option<tracing::Level> {
    match s.to_ascii_lowercase().as_str() {
        "trace" => Some(Level::TRACE),
        "debug" => Some(Level::DEBUG),
        "info" => Some(Level::INFO),
        "warn" => Some(Level::WARN),
        "error" => Some(Level::ERROR),
        "off" | "none" => None,
        _ => Some(Level::INFO),
    }
}

fn level_filter(s: &str) -> LevelFilter {
    parse_tracing_level(s).map_or(LevelFilter::OFF, LevelFilter::from_level)
}

/// Returns true if target == crate_name or target starts with "crate_name::"
fn matches_crate_prefix(target: &str, crate_name: &str) -> bool {
    target
        .strip_prefix(crate_name)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with("::"))
}

// -------- rotating writer for files --------
#[derive(Clone)]
struct RotWriter(Arc<Mutex<FileRotate<AppendCount>>>);

impl Write for RotWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match self.0.lock() {
            Ok(mut file) => file.write(buf),
            // Poisoned lock: drop the record.
            Err(_) => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match self.0.lock() {
            Ok(mut file) => file.flush(),
            Err(_) => Ok(()),
        }
    }
}

// A writer handle that may be None (drops writes)
struct RoutedWriterHandle(Option<RotWriter>);

impl Write for RoutedWriterHandle {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match &mut self.0 {
            Some(w) => w.write(buf),
            None => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match &mut self.0 {
            Some(w) => w.flush(),
            None => Ok(()),
        }
    }
}

/// Route log records to different files by target prefix.
struct MultiFileRouter {
    default: Option<RotWriter>,
    by_prefix: HashMap<String, RotWriter>,
}

impl MultiFileRouter {
    fn resolve_for(&self, target: &str) -> Option<RotWriter> {
        self.by_prefix
            .iter()
            .filter(|(name, _)| matches_crate_prefix(target, name))
            // The longest matching prefix is the most specific subsystem.
            .max_by_key(|(name, _)| name.len())
            .map(|(_, w)| w.clone())
            .or_else(|| self.default.clone())
    }

    fn is_empty(&self) -> bool {
        self.default.is_none() && self.by_prefix.is_empty()
    }
}

impl<'a> fmt::MakeWriter<'a> for MultiFileRouter {
    type Writer = RoutedWriterHandle;

    fn make_writer(&'a self) -> Self::Writer {
        RoutedWriterHandle(self.default.clone())
    }

    fn make_writer_for(&'a self, meta: &tracing::Metadata<'_>) -> Self::Writer {
        RoutedWriterHandle(self.resolve_for(meta.target()))
    }
}

// -------- path resolution helpers --------

/// Resolve a log file path against `base_dir`.
/// Absolute paths are kept as-is; relative paths are joined with `base_dir`.
fn resolve_log_path(file: &str, base_dir: &Path) -> PathBuf {
    let p = Path::new(file);
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        base_dir.join(p)
    }
}

/// Create a size-rotated writer, ensuring the parent directory exists.
fn create_rotating_writer_at_path(
    log_path: &Path,
    max_bytes: usize,
    max_backups: usize,
) -> std::io::Result<RotWriter> {
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let rot = FileRotate::new(
        log_path,
        AppendCount::new(max_backups),
        ContentLimit::BytesSurpassed(max_bytes),
        Compression::None,
        #[cfg(unix)]
        None, // file permissions (Unix only)
    );

    Ok(RotWriter(Arc::new(Mutex::new(rot))))
}

fn create_file_writer(name: &str, section: &Section, base_dir: &Path) -> Option<RotWriter> {
    if section.file.trim().is_empty() {
        return None;
    }

    let max_mb = section.max_size_mb.unwrap_or(100);
    let max_bytes = usize::try_from(max_mb.saturating_mul(1024 * 1024)).unwrap_or(usize::MAX);
    let log_path = resolve_log_path(&section.file, base_dir);

    match create_rotating_writer_at_path(&log_path, max_bytes, section.max_backups.unwrap_or(3)) {
        Ok(writer) => Some(writer),
        Err(e) => {
            eprintln!(
                "Failed to init log file for '{}': {} ({})",
                name,
                log_path.to_string_lossy(),
                e
            );
            None
        }
    }
}

// -------- filters --------

fn build_console_targets(cfg: &LoggingConfig) -> Targets {
    let default = cfg
        .get("default")
        .map_or(LevelFilter::INFO, |s| level_filter(&s.console_level));
    cfg.iter()
        .filter(|(name, _)| name.as_str() != "default")
        .fold(Targets::new().with_default(default), |t, (name, s)| {
            t.with_target(name.clone(), level_filter(&s.console_level))
        })
}

fn build_file_targets(cfg: &LoggingConfig) -> Targets {
    let default = cfg
        .get("default")
        .filter(|s| !s.file.trim().is_empty())
        .map_or(LevelFilter::OFF, |s| level_filter(&s.file_level));
    cfg.iter()
        .filter(|(name, _)| name.as_str() != "default")
        .fold(Targets::new().with_default(default), |t, (name, s)| {
            // Subsystems without their own file fall back to the default file.
            let level = if s.file.trim().is_empty() {
                default
            } else {
                level_filter(&s.file_level)
            };
            t.with_target(name.clone(), level)
        })
}

fn build_file_router(cfg: &LoggingConfig, base_dir: &Path) -> MultiFileRouter {
    let default = cfg
        .get("default")
        .and_then(|s| create_file_writer("default", s, base_dir));
    let by_prefix = cfg
        .iter()
        .filter(|(name, _)| name.as_str() != "default")
        .filter_map(|(name, s)| create_file_writer(name, s, base_dir).map(|w| (name.clone(), w)))
        .collect();
    MultiFileRouter { default, by_prefix }
}

// -------- public init --------

/// Initialize logging from a configuration.
/// - `cfg`: LoggingConfig containing the logging sections
/// - `base_dir`: base directory used to resolve relative log file paths
///
/// Safe to call more than once; only the first call installs a subscriber.
pub fn init_logging_from_config(cfg: &LoggingConfig, base_dir: &Path) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer, Registry};

    // Bridge `log` → `tracing` *before* installing the subscriber
    let _ = tracing_log::LogTracer::init();

    if cfg.is_empty() {
        init_default_logging();
        return;
    }

    let console_layer = fmt::layer()
        .with_ansi(std::io::stdout().is_terminal())
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_filter(build_console_targets(cfg));

    let router = build_file_router(cfg, base_dir);
    if router.is_empty() {
        let _ = Registry::default().with(console_layer).try_init();
        return;
    }

    let file_layer = fmt::layer()
        .json()
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_writer(router)
        .with_filter(build_file_targets(cfg));

    let _ = Registry::default()
        .with(console_layer)
        .with(file_layer)
        .try_init();
}

fn init_default_logging() {
    let _ = tracing_subscriber::fmt()
        .with_target(true)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .try_init();
}

// =================== tests ===================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_logging_config;
    use tempfile::tempdir;

    fn section(console: &str, file: &str, file_level: &str) -> Section {
        Section {
            console_level: console.into(),
            file: file.into(),
            file_level: file_level.into(),
            max_size_mb: Some(1),
            max_backups: Some(2),
        }
    }

    #[test]
    fn test_logging_level_parsing() {
        assert_eq!(parse_tracing_level("trace"), Some(Level::TRACE));
        assert_eq!(parse_tracing_level("DEBUG"), Some(Level::DEBUG));
        assert_eq!(parse_tracing_level("Info"), Some(Level::INFO));
        assert_eq!(parse_tracing_level("warn"), Some(Level::WARN));
        assert_eq!(parse_tracing_level("ERROR"), Some(Level::ERROR));
        assert_eq!(parse_tracing_level("off"), None);
        assert_eq!(parse_tracing_level("none"), None);
        assert_eq!(parse_tracing_level("invalid"), Some(Level::INFO)); // defaults to INFO
    }

    #[test]
    fn test_crate_prefix_matching() {
        assert!(matches_crate_prefix("webservices_global", "webservices_global"));
        assert!(matches_crate_prefix(
            "webservices_global::infra::memory",
            "webservices_global"
        ));
        assert!(!matches_crate_prefix("webservices_global_extra", "webservices_global"));
        assert!(!matches_crate_prefix("runtime", "webservices_global"));
    }

    #[test]
    fn test_file_paths_resolved_against_base_dir() {
        let tmp = tempdir().unwrap();
        let base_dir = tmp.path();

        let resolved = resolve_log_path("logs/test.log", base_dir);
        assert!(resolved.starts_with(base_dir));
        assert!(resolved.ends_with("logs/test.log"));

        let absolute = base_dir.join("abs.log");
        let resolved = resolve_log_path(absolute.to_str().unwrap(), Path::new("/elsewhere"));
        assert_eq!(resolved, absolute);
    }

    #[test]
    fn test_create_rotating_writer_at_path_creates_parent() {
        let tmp = tempdir().unwrap();
        let p = tmp.path().join("nested/dir/app.log");

        let res = create_rotating_writer_at_path(&p, 128 * 1024, 2);
        assert!(res.is_ok(), "writer should be created");
        assert!(p.parent().unwrap().exists(), "parent dir must be created");
    }

    #[test]
    fn test_router_prefers_most_specific_prefix() {
        let tmp = tempdir().unwrap();
        let mut cfg = default_logging_config();
        cfg.insert(
            "webservices_global".into(),
            section("info", "logs/global.log", "debug"),
        );
        cfg.insert(
            "webservices_global::infra".into(),
            section("info", "logs/infra.log", "debug"),
        );

        let router = build_file_router(&cfg, tmp.path());
        assert!(router.default.is_some());
        assert_eq!(router.by_prefix.len(), 2);

        let infra = router.resolve_for("webservices_global::infra::memory").unwrap();
        let expected = &router.by_prefix["webservices_global::infra"];
        assert!(Arc::ptr_eq(&infra.0, &expected.0));

        let fallback = router.resolve_for("some_other_crate").unwrap();
        assert!(Arc::ptr_eq(&fallback.0, &router.default.as_ref().unwrap().0));
    }

    #[test]
    fn test_empty_file_entries_create_no_writers() {
        let tmp = tempdir().unwrap();
        let mut cfg = LoggingConfig::new();
        cfg.insert("default".into(), section("info", "", "debug"));
        cfg.insert("webservices_global".into(), section("debug", " ", "debug"));

        let router = build_file_router(&cfg, tmp.path());
        assert!(router.is_empty());
    }

    #[test]
    fn test_console_targets_follow_sections() {
        let mut cfg = LoggingConfig::new();
        cfg.insert("default".into(), section("warn", "", ""));
        cfg.insert("webservices_global".into(), section("trace", "", ""));
        cfg.insert("noisy".into(), section("off", "", ""));

        let targets = build_console_targets(&cfg);
        assert!(targets.would_enable("webservices_global::infra", &Level::TRACE));
        assert!(targets.would_enable("anything", &Level::WARN));
        assert!(!targets.would_enable("anything", &Level::INFO));
        assert!(!targets.would_enable("noisy", &Level::ERROR));
    }

    #[test]
    fn test_file_targets_off_without_default_file() {
        let mut cfg = LoggingConfig::new();
        cfg.insert("default".into(), section("info", "", "debug"));
        cfg.insert(
            "webservices_global".into(),
            section("info", "logs/global.log", "info"),
        );

        let targets = build_file_targets(&cfg);
        assert!(targets.would_enable("webservices_global", &Level::INFO));
        assert!(!targets.would_enable("webservices_global", &Level::DEBUG));
        assert!(!targets.would_enable("other", &Level::ERROR));
    }
}
