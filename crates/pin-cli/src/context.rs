//! Project settings and the paths derived from them
//!
//! Settings come from an optional `.pin.toml` in the project root:
//!
//! ```toml
//! [manifest]
//! file = "Pinfile"
//! comments = "preserve"   # or "drop"
//!
//! [vendor]
//! root = ".vendor"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use pin_fs::{ConfigStore, NormalizedPath, PinPath};
use pin_manifest::{CommentPolicy, Manifest};
use pin_resolve::{Resolver, VendorEnv};

use crate::error::Result;

/// Contents of `.pin.toml`. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub manifest: ManifestSettings,
    pub vendor: VendorSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManifestSettings {
    /// Manifest file, relative to the project root
    pub file: String,
    /// What a rewrite does with trailing comments
    pub comments: CommentPolicy,
}

impl Default for ManifestSettings {
    fn default() -> Self {
        Self {
            file: PinPath::Manifest.as_str().to_string(),
            comments: CommentPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VendorSettings {
    /// Dependency root, relative to the project root
    pub root: String,
}

impl Default for VendorSettings {
    fn default() -> Self {
        Self {
            root: PinPath::VendorDir.as_str().to_string(),
        }
    }
}

impl Settings {
    /// Load `.pin.toml` from `root`, or the defaults when there is none.
    pub fn load(root: &Path) -> Result<Self> {
        let path = NormalizedPath::new(root.join(PinPath::Config));
        Ok(ConfigStore::new().load_or_default(&path)?)
    }
}

/// A project directory together with its settings.
#[derive(Debug, Clone)]
pub struct ProjectContext {
    root: PathBuf,
    settings: Settings,
}

impl ProjectContext {
    pub fn new(root: impl Into<PathBuf>, settings: Settings) -> Self {
        Self {
            root: root.into(),
            settings,
        }
    }

    pub fn load(root: &Path) -> Result<Self> {
        let settings = Settings::load(root)?;
        tracing::debug!(?settings, "loaded settings");
        Ok(Self::new(root, settings))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn manifest_path(&self) -> NormalizedPath {
        NormalizedPath::new(self.root.join(&self.settings.manifest.file))
    }

    pub fn vendor(&self) -> VendorEnv {
        VendorEnv::for_project(&self.root, &self.settings.vendor.root)
    }

    pub fn resolver(&self) -> Resolver {
        Resolver::new(self.vendor())
    }

    /// Load the manifest, which must exist.
    pub fn load_manifest(&self) -> Result<Manifest> {
        let manifest = Manifest::load(self.manifest_path())?;
        Ok(manifest.with_comment_policy(self.settings.manifest.comments))
    }

    /// Load the manifest, starting an empty one when it does not exist.
    pub fn load_or_new_manifest(&self) -> Result<Manifest> {
        let manifest = Manifest::load_or_new(self.manifest_path())?;
        Ok(manifest.with_comment_policy(self.settings.manifest.comments))
    }
}
