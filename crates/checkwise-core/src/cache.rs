//! Checklist template cache.
//!
//! Templates are JSON checklist documents stored as `<name>.json` in a
//! templates directory. [`TemplateCache`] loads them on demand and keeps the
//! parsed documents until they are invalidated. The cache is an explicit
//! object owned by the caller; nothing is kept in process-wide state.
//!
//! ```rust,no_run
//! use checkwise_core::TemplateCacheBuilder;
//!
//! # fn main() -> checkwise_core::Result<()> {
//! let mut cache = TemplateCacheBuilder::new()
//!     .with_root(Some("/srv/checklists"))
//!     .build()?;
//!
//! let input = cache.load("ups-install")?;
//! println!("{} items", input.items.len());
//!
//! cache.invalidate("ups-install");
//! # Ok(())
//! # }
//! ```

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use log::debug;

use crate::{
    error::{Result, ResultExt, WizardError},
    params::ChecklistInput,
};

const TEMPLATE_EXTENSION: &str = "json";

/// Builder for creating template caches.
#[derive(Debug, Clone, Default)]
pub struct TemplateCacheBuilder {
    root: Option<PathBuf>,
}

impl TemplateCacheBuilder {
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Sets a custom templates directory.
    ///
    /// If not specified, uses the XDG Base Directory specification:
    /// `$XDG_DATA_HOME/checkwise/checklists` or
    /// `~/.local/share/checkwise/checklists`
    pub fn with_root<P: AsRef<Path>>(mut self, root: Option<P>) -> Self {
        if let Some(root) = root {
            self.root = Some(root.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the cache. The directory does not need to exist yet.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::XdgDirectory` if no directory was given and the
    /// default one cannot be created, and `WizardError::Configuration` if the
    /// path exists but is not a directory.
    pub fn build(self) -> Result<TemplateCache> {
        let root = match self.root {
            Some(root) => root,
            None => Self::default_root()?,
        };
        if root.exists() && !root.is_dir() {
            return Err(WizardError::Configuration {
                message: format!("templates path {} is not a directory", root.display()),
            });
        }
        debug!("Template directory: {}", root.display());

        Ok(TemplateCache {
            root,
            entries: HashMap::new(),
        })
    }

    fn default_root() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("checkwise")
            .create_data_directory("checklists")
            .map_err(|e| WizardError::XdgDirectory(e.to_string()))
    }
}

/// Cache of parsed checklist templates keyed by name.
#[derive(Debug)]
pub struct TemplateCache {
    root: PathBuf,
    entries: HashMap<String, ChecklistInput>,
}

impl TemplateCache {
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the named template, reading it from disk on a cache miss.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::InvalidInput` for names containing path
    /// separators, `WizardError::TemplateNotFound` if the file does not
    /// exist, and `WizardError::Serialization` if it cannot be parsed.
    pub fn load(&mut self, name: &str) -> Result<&ChecklistInput> {
        if !self.entries.contains_key(name) {
            let path = self.template_path(name)?;
            if !path.is_file() {
                return Err(WizardError::TemplateNotFound {
                    name: name.to_string(),
                });
            }
            debug!("Template cache miss for '{name}'");
            let input = load_checklist_file(&path)?;
            self.entries.insert(name.to_string(), input);
        }

        self.entries
            .get(name)
            .ok_or_else(|| WizardError::TemplateNotFound {
                name: name.to_string(),
            })
    }

    pub fn is_cached(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Drops one cached template. Returns whether it was cached.
    pub fn invalidate(&mut self, name: &str) -> bool {
        self.entries.remove(name).is_some()
    }

    /// Drops every cached template.
    pub fn invalidate_all(&mut self) {
        self.entries.clear();
    }

    /// Names of the templates available in the directory, sorted.
    ///
    /// A missing directory has no templates.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::FileSystem` if the directory cannot be read.
    pub fn list(&self) -> Result<Vec<String>> {
        if !self.root.is_dir() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root).with_path(&self.root)? {
            let path = entry.with_path(&self.root)?.path();
            let is_template = path
                .extension()
                .is_some_and(|ext| ext == TEMPLATE_EXTENSION);
            if let (true, Some(stem)) = (is_template, path.file_stem()) {
                names.push(stem.to_string_lossy().into_owned());
            }
        }
        names.sort();
        Ok(names)
    }

    fn template_path(&self, name: &str) -> Result<PathBuf> {
        if name.is_empty() || name.contains(|c: char| c == '/' || c == '\\') || name.starts_with('.') {
            return Err(WizardError::invalid_input("template")
                .with_reason(format!("'{name}' is not a template name")));
        }
        Ok(self.root.join(format!("{name}.{TEMPLATE_EXTENSION}")))
    }
}

/// Read and parse a checklist document from a file.
///
/// # Errors
///
/// Returns `WizardError::FileSystem` if the file cannot be read and
/// `WizardError::Serialization` if it cannot be parsed.
pub fn load_checklist_file(path: &Path) -> Result<ChecklistInput> {
    let json = fs::read_to_string(path).with_path(path)?;
    ChecklistInput::from_json(&json)
}
