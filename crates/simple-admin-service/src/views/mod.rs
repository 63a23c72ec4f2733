//! View registration and rendering.
//!
//! Templates live under a logical namespace. At boot the registry decides
//! between an application-supplied override directory and the bundled
//! defaults, and records the publish mapping that materializes the override
//! directory on demand.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tera::{Context, Tera};

use simple_admin_core::constants::{ADMIN_TEMPLATE_FILE, VIEW_NAMESPACE, VIEW_OVERRIDE_DIR};

use crate::error::ServiceResult;

/// Where the application keeps its files and what the template namespace is
/// called. Passed in explicitly; there is no ambient application state.
#[derive(Debug, Clone)]
pub struct ViewConfig {
    pub base_path: PathBuf,
    pub namespace: String,
}

impl ViewConfig {
    #[must_use]
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            namespace: VIEW_NAMESPACE.to_string(),
        }
    }

    /// Application-local directory that overrides the bundled templates.
    #[must_use]
    pub fn override_dir(&self) -> PathBuf {
        self.base_path.join(VIEW_OVERRIDE_DIR)
    }
}

/// Declared copy from a source directory to a destination directory. Boot
/// only declares it; the copy runs on demand via the publish command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishMapping {
    pub source: PathBuf,
    pub dest: PathBuf,
}

impl PublishMapping {
    /// ## Summary
    /// Copies every template file from `source` into `dest`, creating the
    /// destination directory as needed. Existing files are overwritten.
    ///
    /// ## Errors
    /// Returns an error if the source directory cannot be read or a file
    /// cannot be copied.
    pub fn publish(&self) -> ServiceResult<usize> {
        fs::create_dir_all(&self.dest)?;

        let mut copied = 0;
        for entry in fs::read_dir(&self.source)? {
            let entry = entry?;
            let path = entry.path();
            if path.is_file() {
                fs::copy(&path, self.dest.join(entry.file_name()))?;
                copied += 1;
            }
        }

        tracing::info!(
            source = %self.source.display(),
            dest = %self.dest.display(),
            copied,
            "Published view templates"
        );

        Ok(copied)
    }
}

/// ## Summary
/// Chooses the template source directory: the override directory when the
/// existence check accepts it, the bundled default otherwise.
pub fn resolve_view_source<F>(override_dir: &Path, default_dir: &Path, exists: F) -> PathBuf
where
    F: Fn(&Path) -> bool,
{
    if exists(override_dir) {
        override_dir.to_path_buf()
    } else {
        default_dir.to_path_buf()
    }
}

/// Namespaced template registry backed by tera.
pub struct ViewRegistry {
    tera: Tera,
    namespace: String,
    source: PathBuf,
    publish: PublishMapping,
}

impl ViewRegistry {
    /// ## Summary
    /// Boots the registry once at startup: resolves the template source for
    /// `config`, loads every file in it under the namespace, and records the
    /// publish mapping from `default_dir` to the override directory.
    ///
    /// ## Errors
    /// Returns an error if the resolved directory cannot be read or a
    /// template fails to compile. Boot failures are fatal to the caller.
    pub fn boot(config: &ViewConfig, default_dir: &Path) -> ServiceResult<Self> {
        let override_dir = config.override_dir();
        let source = resolve_view_source(&override_dir, default_dir, |p| p.is_dir());

        tracing::debug!(source = %source.display(), "Resolved view source directory");

        let mut tera = Tera::default();
        let mut count = 0;
        for entry in fs::read_dir(&source)? {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            let name = format!("{}/{file_name}", config.namespace);
            tera.add_template_file(&path, Some(&name))?;
            count += 1;
        }

        tracing::info!(
            namespace = %config.namespace,
            count,
            source = %source.display(),
            "Registered view templates"
        );

        Ok(Self {
            tera,
            namespace: config.namespace.clone(),
            source,
            publish: PublishMapping {
                source: default_dir.to_path_buf(),
                dest: override_dir,
            },
        })
    }

    /// Directory the templates were loaded from.
    #[must_use]
    pub fn source(&self) -> &Path {
        &self.source
    }

    #[must_use]
    pub fn publish_mapping(&self) -> &PublishMapping {
        &self.publish
    }

    /// Full template name for a file in this registry's namespace.
    #[must_use]
    pub fn template_name(&self, file_name: &str) -> String {
        format!("{}/{file_name}", self.namespace)
    }

    /// ## Summary
    /// Renders a registered template with the given context.
    ///
    /// ## Errors
    /// Returns an error if the template is unknown or rendering fails.
    pub fn render(&self, file_name: &str, ctx: &Context) -> ServiceResult<String> {
        Ok(self.tera.render(&self.template_name(file_name), ctx)?)
    }

    /// ## Summary
    /// Renders the admin page for the given users, in input order.
    ///
    /// ## Errors
    /// Returns an error if the admin template is missing or rendering fails.
    pub fn render_admin<U: Serialize>(&self, users: &[U]) -> ServiceResult<String> {
        let mut ctx = Context::new();
        ctx.insert("users", users);

        self.render(ADMIN_TEMPLATE_FILE, &ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct TestUser {
        first_name: &'static str,
        last_name: &'static str,
        email: &'static str,
    }

    const DEFAULT_TEMPLATE: &str = "You have {{ users | length }} user(s)";

    /// Lays out `<base>/resources/views/gocanto/simpleAdmin` when requested
    /// plus a separate bundled directory, and returns both roots.
    fn setup(
        with_override: bool,
        override_template: &str,
    ) -> (tempfile::TempDir, tempfile::TempDir) {
        let base = tempfile::tempdir().expect("tempdir");
        let bundled = tempfile::tempdir().expect("tempdir");

        fs::write(bundled.path().join(ADMIN_TEMPLATE_FILE), DEFAULT_TEMPLATE).expect("write");

        if with_override {
            let dir = base.path().join(VIEW_OVERRIDE_DIR);
            fs::create_dir_all(&dir).expect("mkdir");
            fs::write(dir.join(ADMIN_TEMPLATE_FILE), override_template).expect("write");
        }

        (base, bundled)
    }

    #[test]
    fn test_resolve_prefers_override_when_present() {
        let override_dir = Path::new("/app/resources/views/gocanto/simpleAdmin");
        let default_dir = Path::new("/pkg/views");

        let resolved = resolve_view_source(override_dir, default_dir, |_| true);

        assert_eq!(resolved, override_dir);
    }

    #[test]
    fn test_resolve_falls_back_to_default() {
        let override_dir = Path::new("/app/resources/views/gocanto/simpleAdmin");
        let default_dir = Path::new("/pkg/views");

        let resolved = resolve_view_source(override_dir, default_dir, |_| false);

        assert_eq!(resolved, default_dir);
    }

    #[test_log::test]
    fn test_boot_registers_bundled_default_without_override() {
        let (base, bundled) = setup(false, "");
        let config = ViewConfig::new(base.path());

        let registry = ViewRegistry::boot(&config, bundled.path()).expect("boot");

        assert_eq!(registry.source(), bundled.path());
        let html = registry.render_admin::<TestUser>(&[]).expect("render");
        assert!(html.contains("You have 0 user(s)"));
    }

    #[test_log::test]
    fn test_boot_prefers_existing_override_directory() {
        let (base, bundled) = setup(true, "CUSTOM");
        let config = ViewConfig::new(base.path());

        let registry = ViewRegistry::boot(&config, bundled.path()).expect("boot");

        assert_eq!(registry.source(), base.path().join(VIEW_OVERRIDE_DIR));
        let html = registry.render_admin::<TestUser>(&[]).expect("render");
        assert_eq!(html, "CUSTOM");
    }

    #[test]
    fn test_boot_records_publish_mapping_unconditionally() {
        let (base, bundled) = setup(false, "");
        let config = ViewConfig::new(base.path());

        let registry = ViewRegistry::boot(&config, bundled.path()).expect("boot");

        assert_eq!(
            registry.publish_mapping(),
            &PublishMapping {
                source: bundled.path().to_path_buf(),
                dest: base.path().join(VIEW_OVERRIDE_DIR),
            }
        );
    }

    #[test]
    fn test_publish_copies_templates_and_enables_override() {
        let (base, bundled) = setup(false, "");
        let config = ViewConfig::new(base.path());

        let registry = ViewRegistry::boot(&config, bundled.path()).expect("boot");
        let copied = registry.publish_mapping().publish().expect("publish");
        assert_eq!(copied, 1);

        let published = base
            .path()
            .join(VIEW_OVERRIDE_DIR)
            .join(ADMIN_TEMPLATE_FILE);
        assert_eq!(
            fs::read_to_string(published).expect("read"),
            DEFAULT_TEMPLATE
        );

        // A later boot now resolves to the published copy
        let rebooted = ViewRegistry::boot(&config, bundled.path()).expect("boot");
        assert_eq!(rebooted.source(), base.path().join(VIEW_OVERRIDE_DIR));
    }

    #[test]
    fn test_boot_fails_on_missing_source_directory() {
        let base = tempfile::tempdir().expect("tempdir");
        let config = ViewConfig::new(base.path());

        let result = ViewRegistry::boot(&config, Path::new("/nonexistent/views"));

        assert!(result.is_err());
    }

    #[test]
    fn test_render_unknown_template_fails() {
        let (base, bundled) = setup(false, "");
        let config = ViewConfig::new(base.path());

        let registry = ViewRegistry::boot(&config, bundled.path()).expect("boot");

        assert!(registry.render("missing.html", &Context::new()).is_err());
    }
}
