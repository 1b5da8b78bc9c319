//! File-system post store for docket
//!
//! A store root holds one JSON document per post under `posts/`, plus an
//! optional `posts-manifest.json` listing post ids in publication order.
//! When the manifest is present its order is preserved and entries that
//! fail to load are skipped with a warning; without it the posts
//! directory is scanned and sorted by filename for determinism.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use walkdir::WalkDir;

use crate::error::{DocketError, Result};
use crate::post::Post;

/// Manifest file name under the store root
pub const MANIFEST_FILE: &str = "posts-manifest.json";

/// Directory holding per-post JSON documents
pub const POSTS_DIR: &str = "posts";

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default)]
    posts: Vec<String>,
}

/// Handle to a post store rooted at a directory
#[derive(Debug, Clone)]
pub struct Store {
    root: PathBuf,
}

impl Store {
    /// Open a store at the given root directory
    pub fn open(root: &Path) -> Result<Self> {
        if !root.is_dir() {
            return Err(DocketError::StoreNotFound {
                search_root: root.to_path_buf(),
            });
        }

        let store = Store {
            root: root.to_path_buf(),
        };

        if !store.posts_dir().is_dir() {
            return Err(DocketError::InvalidStore {
                reason: format!("missing {}/ directory under {:?}", POSTS_DIR, root),
            });
        }

        Ok(store)
    }

    /// Store root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn posts_dir(&self) -> PathBuf {
        self.root.join(POSTS_DIR)
    }

    fn post_path(&self, id: &str) -> PathBuf {
        self.posts_dir().join(format!("{}.json", id))
    }

    /// Load all posts, preferring manifest order when a manifest exists
    #[tracing::instrument(skip(self), fields(root = ?self.root))]
    pub fn list_posts(&self) -> Result<Vec<Post>> {
        let manifest_path = self.root.join(MANIFEST_FILE);
        if manifest_path.exists() {
            return self.list_from_manifest(&manifest_path);
        }
        self.list_from_scan()
    }

    fn list_from_manifest(&self, manifest_path: &Path) -> Result<Vec<Post>> {
        let raw = fs::read_to_string(manifest_path)?;
        let manifest: Manifest =
            serde_json::from_str(&raw).map_err(|e| DocketError::InvalidStore {
                reason: format!("malformed manifest: {}", e),
            })?;

        let mut posts = Vec::with_capacity(manifest.posts.len());
        for id in &manifest.posts {
            match self.read_post(&self.post_path(id)) {
                Ok(post) => posts.push(post),
                Err(e) => {
                    // A broken manifest entry degrades the listing, it
                    // does not fail the whole load.
                    tracing::warn!(id = %id, error = %e, "skipping manifest entry");
                }
            }
        }

        tracing::debug!(count = posts.len(), "loaded posts from manifest");
        Ok(posts)
    }

    fn list_from_scan(&self) -> Result<Vec<Post>> {
        let mut paths: Vec<PathBuf> = WalkDir::new(self.posts_dir())
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.into_path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
            .collect();
        paths.sort();

        let mut posts = Vec::with_capacity(paths.len());
        for path in paths {
            posts.push(self.read_post(&path)?);
        }

        tracing::debug!(count = posts.len(), "loaded posts from directory scan");
        Ok(posts)
    }

    fn read_post(&self, path: &Path) -> Result<Post> {
        let raw = fs::read_to_string(path)?;
        serde_json::from_str(&raw).map_err(|e| DocketError::InvalidPost {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Load a single post by id
    pub fn get_post(&self, id: &str) -> Result<Post> {
        let path = self.post_path(id);
        if !path.is_file() {
            return Err(DocketError::PostNotFound { id: id.to_string() });
        }
        self.read_post(&path)
    }

    /// Unique tags across all posts, sorted
    pub fn list_tags(&self) -> Result<Vec<String>> {
        let posts = self.list_posts()?;
        let tags: BTreeSet<String> = posts
            .into_iter()
            .flat_map(|post| post.tags)
            .collect();
        Ok(tags.into_iter().collect())
    }
}
