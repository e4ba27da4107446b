//! Filesystem implementation of the cache store

use super::traits::{CacheError, CacheResult, CacheStore};
use super::{CATEGORIES_FILE, PUBLICATIONS_DIR, PUBLICATION_LIST_DIR};
use crate::model::{Category, Publication};
use crate::normalize::cache_file_stem;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// JSON files under an output root
///
/// Writes go straight to the target file; an interrupted write leaves a
/// truncated file that the next run reports as malformed.
#[derive(Debug, Clone)]
pub struct FsCache {
    root: PathBuf,
}

impl FsCache {
    /// Creates a cache rooted at `out_path`
    ///
    /// An empty path means the current working directory.
    pub fn new(out_path: impl AsRef<Path>) -> Self {
        Self {
            root: resolve_root(out_path.as_ref()),
        }
    }

    /// The output root all cache files live under
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn categories_path(&self) -> PathBuf {
        self.root.join(CATEGORIES_FILE)
    }

    pub fn publication_list_path(&self, category_name: &str) -> PathBuf {
        self.root
            .join(PUBLICATION_LIST_DIR)
            .join(format!("{}.json", cache_file_stem(category_name)))
    }

    pub fn publications_path(&self, category_name: &str) -> PathBuf {
        self.root
            .join(PUBLICATIONS_DIR)
            .join(format!("{}.json", cache_file_stem(category_name)))
    }

    /// Loads every cached publication file, ordered by file name
    ///
    /// Unreadable files are logged and skipped.
    pub fn load_all_publications(&self) -> CacheResult<Vec<Publication>> {
        let dir = self.root.join(PUBLICATIONS_DIR);
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let entries = std::fs::read_dir(&dir).map_err(|source| CacheError::Io {
            path: dir.clone(),
            source,
        })?;

        let mut paths: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
            .collect();
        paths.sort();

        let mut publications = Vec::new();
        for path in paths {
            match read_json::<Vec<Publication>>(&path) {
                Ok(Some(records)) => publications.extend(records),
                Ok(None) => {}
                Err(e) => tracing::warn!("Skipping {}", e),
            }
        }

        Ok(publications)
    }
}

impl CacheStore for FsCache {
    fn prepare(&self) -> CacheResult<()> {
        std::fs::create_dir_all(&self.root).map_err(|source| CacheError::Io {
            path: self.root.clone(),
            source,
        })?;
        if !self.root.is_dir() {
            return Err(CacheError::NotADirectory(self.root.clone()));
        }
        Ok(())
    }

    fn load_categories(&self) -> CacheResult<Option<Vec<Category>>> {
        read_json(&self.categories_path())
    }

    fn save_categories(&self, categories: &[Category]) -> CacheResult<()> {
        write_json(&self.categories_path(), &categories)
    }

    fn load_publication_urls(&self, category_name: &str) -> CacheResult<Option<Vec<String>>> {
        read_json(&self.publication_list_path(category_name))
    }

    fn save_publication_urls(&self, category_name: &str, urls: &[String]) -> CacheResult<()> {
        write_json(&self.publication_list_path(category_name), &urls)
    }

    fn load_publications(&self, category_name: &str) -> CacheResult<Option<Vec<Publication>>> {
        read_json(&self.publications_path(category_name))
    }

    fn save_publications(
        &self,
        category_name: &str,
        publications: &[Publication],
    ) -> CacheResult<()> {
        write_json(&self.publications_path(category_name), &publications)
    }
}

fn resolve_root(out_path: &Path) -> PathBuf {
    if !out_path.as_os_str().is_empty() {
        return out_path.to_path_buf();
    }
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("./"))
}

/// Reads a JSON file; `Ok(None)` when it does not exist
fn read_json<T: DeserializeOwned>(path: &Path) -> CacheResult<Option<T>> {
    if !path.is_file() {
        return Ok(None);
    }
    let content = std::fs::read(path).map_err(|source| CacheError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let value = serde_json::from_slice(&content).map_err(|source| CacheError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(value))
}

/// Writes pretty-printed JSON, creating parent directories as needed
fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> CacheResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| CacheError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let json = serde_json::to_vec_pretty(value).map_err(|source| CacheError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, json).map_err(|source| CacheError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::extract_publication;
    use tempfile::TempDir;

    fn create_test_cache() -> (TempDir, FsCache) {
        let dir = TempDir::new().unwrap();
        let cache = FsCache::new(dir.path());
        (dir, cache)
    }

    #[test]
    fn test_paths_follow_layout() {
        let cache = FsCache::new("/data/out");
        assert_eq!(cache.categories_path(), Path::new("/data/out/categories.json"));
        assert_eq!(
            cache.publication_list_path("Autos (Usados)"),
            Path::new("/data/out/publicationList/Autos_Usados_.json")
        );
        assert_eq!(
            cache.publications_path("Autos (Usados)"),
            Path::new("/data/out/publications/Autos_Usados_.json")
        );
    }

    #[test]
    fn test_empty_root_is_working_directory() {
        let cache = FsCache::new("");
        assert_eq!(cache.root(), std::env::current_dir().unwrap());
    }

    #[test]
    fn test_missing_files_are_cache_misses() {
        let (_dir, cache) = create_test_cache();
        assert!(cache.load_categories().unwrap().is_none());
        assert!(cache.load_publication_urls("Bares").unwrap().is_none());
        assert!(cache.load_publications("Bares").unwrap().is_none());
    }

    #[test]
    fn test_categories_roundtrip() {
        let (_dir, cache) = create_test_cache();
        let categories = vec![
            Category::new("/q_bares", "Bares"),
            Category::new("/q_cafeterias", "Cafeterías"),
        ];
        cache.save_categories(&categories).unwrap();
        assert_eq!(cache.load_categories().unwrap(), Some(categories));
    }

    #[test]
    fn test_publication_urls_create_directory() {
        let (dir, cache) = create_test_cache();
        let urls = vec!["/empresa/a".to_string(), "/empresa/b".to_string()];
        cache.save_publication_urls("Bares y Pubs", &urls).unwrap();

        assert!(dir.path().join("publicationList/BaresyPubs.json").is_file());
        assert_eq!(cache.load_publication_urls("Bares y Pubs").unwrap(), Some(urls));
    }

    #[test]
    fn test_extracted_publications_roundtrip() {
        let (_dir, cache) = create_test_cache();
        let html = r#"
            <h1 class="bold fl">Ñandú Café</h1>
            <div data-location='{"lat":-34.9,"lng":-56.2}'></div>
            <section class="category kw mb30"><span>Cafeterías</span></section>
            <div class="opening-hours mb30"><table>
              <tr><td itemprop="dayOfWeek">lunes</td><td><span itemprop="opens">08:00</span><span itemprop="closes">12:00</span></td></tr>
              <tr><td itemprop="dayOfWeek">lunes</td><td><span itemprop="opens">15:00</span><span itemprop="closes">20:00</span></td></tr>
            </table></div>
        "#;
        let extracted = vec![
            extract_publication(html, "https://example.uy/nandu"),
            extract_publication("<html></html>", "https://example.uy/empty"),
            extract_publication(
                r#"<div data-location='{"lat":-34.054930412671907,"lng":-56.016972594194804}'></div>"#,
                "https://example.uy/precise",
            ),
        ];

        cache.save_publications("Cafeterías", &extracted).unwrap();
        let loaded = cache.load_publications("Cafeterías").unwrap().unwrap();

        assert_eq!(loaded, extracted);
        assert!(loaded[1].phones.is_empty());
        assert!(loaded[1].timetable.is_empty());
        assert_eq!(
            loaded[2].coordinates.longitude.to_bits(),
            (-56.016972594194804f64).to_bits()
        );
    }

    #[test]
    fn test_truncated_file_is_an_error() {
        let (dir, cache) = create_test_cache();
        std::fs::write(dir.path().join(CATEGORIES_FILE), "[{\"url\": \"/q_ba").unwrap();
        assert!(matches!(
            cache.load_categories(),
            Err(CacheError::Json { .. })
        ));
    }

    #[test]
    fn test_prepare_creates_root() {
        let dir = TempDir::new().unwrap();
        let cache = FsCache::new(dir.path().join("nested/out"));
        cache.prepare().unwrap();
        assert!(cache.root().is_dir());
    }

    #[test]
    fn test_prepare_rejects_file_root() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("not-a-dir");
        std::fs::write(&file, "x").unwrap();

        let cache = FsCache::new(&file);
        assert!(cache.prepare().is_err());
    }

    #[test]
    fn test_load_all_publications_skips_bad_files() {
        let (dir, cache) = create_test_cache();
        let first = Publication {
            name: "A".to_string(),
            ..Default::default()
        };
        let second = Publication {
            name: "B".to_string(),
            ..Default::default()
        };
        cache.save_publications("Alfa", &[first.clone()]).unwrap();
        cache.save_publications("Beta", &[second.clone()]).unwrap();
        std::fs::write(dir.path().join("publications/Zeta.json"), "{broken").unwrap();

        let all = cache.load_all_publications().unwrap();
        assert_eq!(all, vec![first, second]);
    }

    #[test]
    fn test_load_all_publications_without_directory() {
        let (_dir, cache) = create_test_cache();
        assert!(cache.load_all_publications().unwrap().is_empty());
    }
}
