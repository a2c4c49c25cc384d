//! Config Transformer - Main entry point
//!
//! Every operation runs a full cycle against the file:
//!
//! ```text
//! read → Snapshot → scan → DeclarationMap → edit buffer → Snapshot::save
//! ```
//!
//! Nothing is cached between calls, so edits made by other programs in the
//! meantime are always seen. Edits go to the byte range the scan recorded
//! for the declaration; identical text elsewhere in the file is untouched.

use crate::config::{AddOptions, Placement, TransformerConfig, UpdateOptions};
use crate::error::{TransformerError, TransformerResult};
use crate::persist::Snapshot;
use memchr::memmem;
use serde_json::Value;
use std::fs::{File, OpenOptions};
use std::ops::Range;
use std::path::{Path, PathBuf};
use wpconf_dialect::{normalize, render, scan, Declaration, DeclarationMap, Kind, Lookup};

/// Inspects and edits constant and variable declarations in one file
#[derive(Debug, Clone)]
pub struct ConfigTransformer {
    path: PathBuf,
    config: TransformerConfig,
}

impl ConfigTransformer {
    /// Create transformer with default configuration
    ///
    /// # Errors
    /// - `TransformerError::PathMissing` if the path does not exist
    /// - `TransformerError::NotReadable` if it cannot be opened for reading
    /// - `TransformerError::NotWritable` if it cannot be opened for writing
    pub fn new(path: impl Into<PathBuf>) -> TransformerResult<Self> {
        Self::with_config(path, TransformerConfig::default())
    }

    /// Create transformer with specific configuration
    ///
    /// # Errors
    /// Same as [`ConfigTransformer::new`]
    pub fn with_config(path: impl Into<PathBuf>, config: TransformerConfig) -> TransformerResult<Self> {
        let path = path.into();
        check_access(&path)?;
        Ok(Self { path, config })
    }

    /// File path
    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Transformer configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &TransformerConfig {
        &self.config
    }

    /// Add options seeded from this transformer's configuration
    #[inline]
    #[must_use]
    pub fn add_options(&self) -> AddOptions {
        AddOptions::from(&self.config)
    }

    /// Update options seeded from this transformer's configuration
    #[inline]
    #[must_use]
    pub fn update_options(&self) -> UpdateOptions {
        UpdateOptions::default().with_normalize(self.config.normalize)
    }

    /// Check whether a declaration exists
    ///
    /// # Errors
    /// - `TransformerError::EmptyFile` if the file is empty
    /// - `TransformerError::NoDeclarations` if the file declares nothing
    /// - `TransformerError::UnknownKind` if the file declares nothing of `kind`
    pub fn exists(&self, kind: Kind, name: &str) -> TransformerResult<bool> {
        let (snapshot, map) = self.load()?;
        Ok(inspect(&snapshot, &map, kind, name)?.is_some())
    }

    /// Get the value text of a declaration, exactly as written
    ///
    /// # Errors
    /// Same as [`ConfigTransformer::exists`]
    pub fn get_value(&self, kind: Kind, name: &str) -> TransformerResult<Option<String>> {
        let (snapshot, map) = self.load()?;
        Ok(inspect(&snapshot, &map, kind, name)?.map(|decl| decl.value_text.clone()))
    }

    /// Add a declaration at the anchor
    ///
    /// Returns `false` without writing when the declaration already exists.
    /// A file without any declarations of `kind` accepts new ones.
    ///
    /// # Errors
    /// - `TransformerError::AnchorNotFound` if the anchor is not in the file
    /// - `TransformerError::WriteFailure` if the write fails
    pub fn add(
        &self,
        kind: Kind,
        name: &str,
        value: &Value,
        options: &AddOptions,
    ) -> TransformerResult<bool> {
        let (snapshot, map) = self.load()?;
        add_to(&snapshot, &map, kind, name, value, options)
    }

    /// Update a declaration's value, adding it when missing
    ///
    /// Without `normalize`, only the value text inside the declaration is
    /// replaced and the rest of the line keeps its formatting. With it, the
    /// whole declaration is regenerated in canonical form.
    ///
    /// Returns whether the file changed.
    ///
    /// # Errors
    /// - `TransformerError::AnchorNotFound` if adding and the anchor is missing
    /// - `TransformerError::WriteFailure` if the write fails
    pub fn update(
        &self,
        kind: Kind,
        name: &str,
        value: &Value,
        options: &UpdateOptions,
    ) -> TransformerResult<bool> {
        let (snapshot, map) = self.load()?;

        let Some(decl) = map.get(kind, name) else {
            if !options.add_missing {
                tracing::debug!(%kind, name, "declaration missing, not adding");
                return Ok(false);
            }
            let add = self.add_options().with_raw(options.raw);
            return add_to(&snapshot, &map, kind, name, value, &add);
        };

        let value_text = render(value, options.raw);
        let replacement = if options.normalize {
            normalize(kind, name, &value_text).into_bytes()
        } else {
            let source = &snapshot.bytes()[decl.span.clone()];
            splice(source, decl.value_range_in_span(), value_text.as_bytes())
        };

        let contents = splice(snapshot.bytes(), decl.span.clone(), &replacement);

        let written = snapshot.save(&contents)?;
        if written {
            tracing::info!(%kind, name, normalize = options.normalize, "declaration updated");
        }
        Ok(written)
    }

    /// Remove a declaration together with its line break
    ///
    /// Returns `false` without writing when the declaration does not exist.
    ///
    /// # Errors
    /// Returns `TransformerError::WriteFailure` if the write fails
    pub fn remove(&self, kind: Kind, name: &str) -> TransformerResult<bool> {
        let (snapshot, map) = self.load()?;

        let Some(decl) = map.get(kind, name) else {
            tracing::debug!(%kind, name, "declaration missing, nothing to remove");
            return Ok(false);
        };

        let rest = &snapshot.bytes()[decl.span.end..];
        let line_break = if rest.starts_with(b"\r\n") {
            2
        } else {
            usize::from(rest.starts_with(b"\n"))
        };

        let contents = splice(snapshot.bytes(), decl.span.start..decl.span.end + line_break, &[]);

        let written = snapshot.save(&contents)?;
        if written {
            tracing::info!(%kind, name, "declaration removed");
        }
        Ok(written)
    }

    fn load(&self) -> TransformerResult<(Snapshot, DeclarationMap)> {
        let snapshot = Snapshot::read(&self.path)?;
        let map = scan(snapshot.bytes());
        tracing::debug!(
            path = %self.path.display(),
            declarations = map.len(),
            "scanned config file"
        );
        Ok((snapshot, map))
    }
}

fn check_access(path: &Path) -> TransformerResult<()> {
    if !path.exists() {
        return Err(TransformerError::PathMissing {
            path: path.to_path_buf(),
        });
    }
    File::open(path).map_err(|source| TransformerError::NotReadable {
        path: path.to_path_buf(),
        source,
    })?;
    OpenOptions::new()
        .append(true)
        .open(path)
        .map_err(|source| TransformerError::NotWritable {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(())
}

/// Resolve a lookup for the inspection operations, where every kind of
/// absence other than a missing name is an error
fn inspect<'m>(
    snapshot: &Snapshot,
    map: &'m DeclarationMap,
    kind: Kind,
    name: &str,
) -> TransformerResult<Option<&'m Declaration>> {
    if snapshot.is_empty() {
        return Err(TransformerError::EmptyFile {
            path: snapshot.path().to_path_buf(),
        });
    }
    match map.lookup(kind, name) {
        Lookup::Found(decl) => Ok(Some(decl)),
        Lookup::Missing => Ok(None),
        Lookup::KindAbsent => Err(TransformerError::UnknownKind(kind.to_string())),
        Lookup::Empty => Err(TransformerError::NoDeclarations {
            path: snapshot.path().to_path_buf(),
        }),
    }
}

fn add_to(
    snapshot: &Snapshot,
    map: &DeclarationMap,
    kind: Kind,
    name: &str,
    value: &Value,
    options: &AddOptions,
) -> TransformerResult<bool> {
    if map.get(kind, name).is_some() {
        tracing::debug!(%kind, name, "declaration exists, not adding");
        return Ok(false);
    }

    let text = snapshot.bytes();
    // Only the first occurrence of the anchor is used.
    let Some(at) = memmem::find(text, options.anchor.as_bytes()) else {
        tracing::warn!(anchor = %options.anchor, path = %snapshot.path().display(), "anchor not found");
        return Err(TransformerError::AnchorNotFound {
            anchor: options.anchor.clone(),
        });
    };

    let declaration = normalize(kind, name, &render(value, options.raw));
    let split = match options.placement {
        Placement::Before => at,
        Placement::After => at + options.anchor.len(),
    };

    let inserted = match options.placement {
        Placement::Before => format!("{declaration}{}", options.separator),
        Placement::After => format!("{}{declaration}", options.separator),
    };
    let contents = splice(text, split..split, inserted.as_bytes());

    let written = snapshot.save(&contents)?;
    if written {
        tracing::info!(%kind, name, placement = ?options.placement, "declaration added");
    }
    Ok(written)
}

/// Copy of `bytes` with `range` replaced by `with`
fn splice(bytes: &[u8], range: Range<usize>, with: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(bytes.len() - range.len() + with.len());
    out.extend_from_slice(&bytes[..range.start]);
    out.extend_from_slice(with);
    out.extend_from_slice(&bytes[range.end..]);
    out
}
