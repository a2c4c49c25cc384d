//! Testing utilities for wpconf workspace
//!
//! Shared fixtures: temporary config files and sample contents.

#![allow(missing_docs)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use wpconf_transformer::{ConfigTransformer, TransformerConfig};

pub const ANCHOR_LINE: &str = "/* That's all, stop editing! Happy publishing. */";

/// A typical generated config file
pub fn sample_config() -> String {
    format!(
        "<?php
/**
 * The base configuration for WordPress
 */

// ** Database settings ** //
define( 'DB_NAME', 'wordpress' );
define( 'DB_USER', 'root' );
define( 'DB_PASSWORD', 'secret' );
define( 'DB_HOST', 'localhost' );
define( 'DB_CHARSET', 'utf8mb4' );

$table_prefix = 'wp_';

define( 'WP_DEBUG', false );

/* Add any custom values between this line and the \"stop editing\" line. */

{ANCHOR_LINE}

/** Absolute path to the WordPress directory. */
if ( ! defined( 'ABSPATH' ) ) {{
\tdefine( 'ABSPATH', __DIR__ . '/' );
}}

require_once ABSPATH . 'wp-settings.php';
"
    )
}

/// Config file in its own temporary directory
#[derive(Debug)]
pub struct ConfigFixture {
    _dir: TempDir,
    path: PathBuf,
}

impl ConfigFixture {
    pub fn new(contents: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("wp-config.php");
        fs::write(&path, contents).expect("write fixture");
        Self { _dir: dir, path }
    }

    pub fn sample() -> Self {
        Self::new(&sample_config())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn read(&self) -> String {
        fs::read_to_string(&self.path).expect("read fixture")
    }

    pub fn write(&self, contents: &str) {
        fs::write(&self.path, contents).expect("write fixture");
    }

    pub fn transformer(&self) -> ConfigTransformer {
        ConfigTransformer::new(&self.path).expect("open fixture")
    }

    pub fn transformer_with(&self, config: TransformerConfig) -> ConfigTransformer {
        ConfigTransformer::with_config(&self.path, config).expect("open fixture")
    }
}
