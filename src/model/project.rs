//! Project tree - the sandbox's modules (files) and directories
//!
//! The tree is stored flat: every module and directory points at its parent
//! through `directory_shortid`, with `None` meaning the project root. This is
//! the shape the external state layer hands us; the panel only reads it.
//!
//! Resolution is a direct path walk, not a search: `/src/index.js` looks up
//! a root directory titled `src`, then a module titled `index.js` in it.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

// ============================================================================
// Records
// ============================================================================

/// Stable identity of a module, used when asking the host to select it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ModuleId(pub u64);

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "module-{}", self.0)
    }
}

/// A file in the project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    pub id: ModuleId,
    pub shortid: String,
    /// File name (not full path)
    pub title: String,
    /// Parent directory, `None` for the project root
    pub directory_shortid: Option<String>,
}

/// A directory in the project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Directory {
    pub shortid: String,
    pub title: String,
    pub directory_shortid: Option<String>,
}

// ============================================================================
// Project Tree
// ============================================================================

/// Patterns to skip when scanning a directory from disk
///
/// Dotfiles are *not* skipped: `.prettierrc` and `.babelrc` are exactly the
/// kind of file the configuration panel looks for.
const IGNORE_PATTERNS: &[&str] = &[
    ".git",
    ".svn",
    ".hg",
    "node_modules",
    "target",
    "__pycache__",
    ".DS_Store",
    "Thumbs.db",
    ".idea",
    ".vscode",
    "*.pyc",
    "*.pyo",
];

const MAX_SCAN_DEPTH: usize = 20;

/// Numeric part of a shortid generated by this tree (`m1f`, `d3`)
fn generated_shortid_number(shortid: &str) -> Option<u64> {
    let digits = shortid.strip_prefix(|c: char| c == 'm' || c == 'd')?;
    u64::from_str_radix(digits, 16).ok()
}

/// Where a directory walk ended
#[derive(Debug, Clone, PartialEq, Eq)]
enum DirectoryLocation {
    Root,
    Directory(String),
}

impl DirectoryLocation {
    fn shortid(&self) -> Option<&str> {
        match self {
            DirectoryLocation::Root => None,
            DirectoryLocation::Directory(shortid) => Some(shortid.as_str()),
        }
    }
}

/// All modules and directories of a sandbox
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectTree {
    modules: Vec<Module>,
    directories: Vec<Directory>,
    next_id: u64,
}

impl ProjectTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tree from existing records (e.g. handed over by the host)
    ///
    /// New ids start past every module id and every generated `m…`/`d…`
    /// shortid already present.
    pub fn from_records(modules: Vec<Module>, directories: Vec<Directory>) -> Self {
        let ids = modules.iter().map(|m| m.id.0);
        let shortids = modules
            .iter()
            .map(|m| m.shortid.as_str())
            .chain(directories.iter().map(|d| d.shortid.as_str()))
            .filter_map(generated_shortid_number);
        let next_id = ids.chain(shortids).map(|n| n + 1).max().unwrap_or(0);
        Self {
            modules,
            directories,
            next_id,
        }
    }

    /// Build a tree from slash-separated paths, creating directories as needed
    ///
    /// A trailing `/` marks a directory entry.
    pub fn from_paths(paths: &[&str]) -> Self {
        let mut tree = Self::new();
        for path in paths {
            tree.insert_path(path);
        }
        tree
    }

    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    pub fn directories(&self) -> &[Directory] {
        &self.directories
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty() && self.directories.is_empty()
    }

    pub fn module(&self, id: ModuleId) -> Option<&Module> {
        self.modules.iter().find(|m| m.id == id)
    }

    fn next_shortid(&mut self, prefix: char) -> (u64, String) {
        loop {
            let n = self.next_id;
            self.next_id += 1;
            let shortid = format!("{}{:x}", prefix, n);
            // Host records may use arbitrary shortids; never hand out a taken one
            if !self.shortid_taken(&shortid) && !self.modules.iter().any(|m| m.id.0 == n) {
                return (n, shortid);
            }
        }
    }

    fn shortid_taken(&self, shortid: &str) -> bool {
        self.modules.iter().any(|m| m.shortid == shortid)
            || self.directories.iter().any(|d| d.shortid == shortid)
    }

    /// Add a directory under `parent` (a directory shortid), returning its shortid
    pub fn add_directory(&mut self, title: impl Into<String>, parent: Option<&str>) -> String {
        let (_, shortid) = self.next_shortid('d');
        self.directories.push(Directory {
            shortid: shortid.clone(),
            title: title.into(),
            directory_shortid: parent.map(str::to_string),
        });
        shortid
    }

    /// Add a module under `parent` (a directory shortid), returning its id
    pub fn add_module(&mut self, title: impl Into<String>, parent: Option<&str>) -> ModuleId {
        let (n, shortid) = self.next_shortid('m');
        let id = ModuleId(n);
        self.modules.push(Module {
            id,
            shortid,
            title: title.into(),
            directory_shortid: parent.map(str::to_string),
        });
        id
    }

    /// Insert a path, reusing directories that already exist
    ///
    /// Returns the module id for file paths, `None` for directory paths or
    /// when the file is already present.
    ///
    /// Segments are walked like [`resolve_module`](Self::resolve_module) walks
    /// them: `.` is skipped and `..` moves to the parent (staying at the
    /// root), so an inserted path always resolves to what it created.
    pub fn insert_path(&mut self, path: &str) -> Option<ModuleId> {
        let is_dir = path.ends_with('/');
        let (dirs, last) = match path.trim_end_matches('/').rsplit_once('/') {
            Some((dirs, last)) => (dirs, last),
            None => ("", path.trim_end_matches('/')),
        };

        let mut parent: Option<String> = None;
        for segment in dirs.split('/') {
            parent = match segment {
                "" | "." => parent,
                ".." => self.parent_of(parent.as_deref()),
                title => Some(self.ensure_directory(title, parent.as_deref())),
            };
        }

        // `src/..` names an existing directory, not something to create
        if matches!(last, "" | "." | "..") {
            return None;
        }

        if is_dir {
            self.ensure_directory(last, parent.as_deref());
            return None;
        }

        if self.child_module(parent.as_deref(), last).is_some() {
            return None;
        }
        Some(self.add_module(last, parent.as_deref()))
    }

    fn ensure_directory(&mut self, title: &str, parent: Option<&str>) -> String {
        match self.child_directory(parent, title) {
            Some(dir) => dir.shortid.clone(),
            None => self.add_directory(title, parent),
        }
    }

    fn child_directory(&self, parent: Option<&str>, title: &str) -> Option<&Directory> {
        self.directories
            .iter()
            .find(|d| d.title == title && d.directory_shortid.as_deref() == parent)
    }

    fn child_module(&self, parent: Option<&str>, title: &str) -> Option<&Module> {
        self.modules
            .iter()
            .find(|m| m.title == title && m.directory_shortid.as_deref() == parent)
    }

    fn directory_by_shortid(&self, shortid: &str) -> Option<&Directory> {
        self.directories.iter().find(|d| d.shortid == shortid)
    }

    /// Parent of a directory; the root is its own parent
    fn parent_of(&self, shortid: Option<&str>) -> Option<String> {
        shortid
            .and_then(|id| self.directory_by_shortid(id))
            .and_then(|d| d.directory_shortid.clone())
    }

    /// Walk directory segments from the root, honouring `.` and `..`
    ///
    /// Returns where the walk ended, or `None` when a segment doesn't exist.
    fn walk_directories<'a>(
        &self,
        segments: impl IntoIterator<Item = &'a str>,
    ) -> Option<DirectoryLocation> {
        let mut current: Option<String> = None;
        for segment in segments {
            current = match segment {
                "" | "." => current,
                ".." => self.parent_of(current.as_deref()),
                title => Some(self.child_directory(current.as_deref(), title)?.shortid.clone()),
            };
        }
        Some(match current {
            Some(shortid) => DirectoryLocation::Directory(shortid),
            None => DirectoryLocation::Root,
        })
    }

    /// Resolve a sandbox path (e.g. `/src/index.js`) to a module
    ///
    /// A missing file is an expected outcome, not an error.
    pub fn resolve_module(&self, path: &str) -> Option<&Module> {
        let path = path.trim_start_matches('/');
        let (dirs, name) = match path.rsplit_once('/') {
            Some((dirs, name)) => (dirs, name),
            None => ("", path),
        };
        if matches!(name, "" | "." | "..") {
            return None;
        }

        let parent = self.walk_directories(dirs.split('/'))?;
        self.child_module(parent.shortid(), name)
    }

    /// Resolve a sandbox path to a directory; `/` and `""` are the root and yield `None`
    pub fn resolve_directory(&self, path: &str) -> Option<&Directory> {
        match self.walk_directories(path.trim_start_matches('/').split('/'))? {
            DirectoryLocation::Root => None,
            DirectoryLocation::Directory(shortid) => self.directory_by_shortid(&shortid),
        }
    }

    /// Absolute sandbox path of a module (e.g. `/src/index.js`)
    pub fn module_path(&self, id: ModuleId) -> Option<String> {
        let module = self.module(id)?;
        let mut segments = vec![module.title.as_str()];
        let mut parent = module.directory_shortid.as_deref();
        // Bounded so a malformed parent cycle can't spin forever
        let mut remaining = self.directories.len();
        while let Some(shortid) = parent {
            if remaining == 0 {
                tracing::warn!("Directory cycle while resolving path of {}", id);
                return None;
            }
            remaining -= 1;
            let dir = self.directory_by_shortid(shortid)?;
            segments.push(dir.title.as_str());
            parent = dir.directory_shortid.as_deref();
        }
        segments.reverse();
        Some(format!("/{}", segments.join("/")))
    }

    // ------------------------------------------------------------------------
    // Filesystem scanning
    // ------------------------------------------------------------------------

    /// Create a project tree by scanning a directory on disk
    ///
    /// The root directory itself is the project root; its contents become
    /// top-level modules and directories.
    pub fn from_directory(root: &Path) -> std::io::Result<Self> {
        let mut tree = Self::new();
        if !root.is_dir() {
            return Ok(tree);
        }
        tree.scan_directory(root, None, 0)?;
        tracing::debug!(
            "Scanned {}: {} modules, {} directories",
            root.display(),
            tree.modules.len(),
            tree.directories.len()
        );
        Ok(tree)
    }

    fn scan_directory(
        &mut self,
        dir: &Path,
        parent: Option<&str>,
        depth: usize,
    ) -> std::io::Result<()> {
        if depth > MAX_SCAN_DEPTH {
            return Ok(());
        }

        let mut entries: Vec<_> = std::fs::read_dir(dir)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| !Self::should_ignore(path))
            .collect();
        // Deterministic ids regardless of readdir order
        entries.sort();

        for path in entries {
            let Some(title) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            let title = title.to_string();

            if path.is_dir() {
                let shortid = self.add_directory(title, parent);
                self.scan_directory(&path, Some(shortid.as_str()), depth + 1)?;
            } else {
                self.add_module(title, parent);
            }
        }

        Ok(())
    }

    /// Check if a path should be skipped while scanning
    pub fn should_ignore(path: &Path) -> bool {
        let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");

        IGNORE_PATTERNS.iter().any(|pattern| {
            if let Some(ext) = pattern.strip_prefix("*.") {
                path.extension().and_then(|e| e.to_str()) == Some(ext)
            } else {
                name == *pattern
            }
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
