//! Add-on directory listing and load order upkeep

use std::path::Path;
use std::sync::LazyLock;

use log::warn;
use regex::Regex;
use walkdir::WalkDir;

static ADDON_FILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\.(wad|deh|bex)$").expect("add-on pattern is valid"));

/// WAD and patch files directly inside `dir`, sorted without regard to case.
///
/// A missing or unreadable directory gives an empty list.
pub fn scan_addons(dir: &Path) -> Vec<String> {
    if !dir.is_dir() {
        warn!("Add-on directory {} doesn't exist", dir.display());
        return Vec::new();
    }

    let mut found: Vec<String> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| e.file_name().to_str().map(String::from))
        .filter(|name| ADDON_FILE.is_match(name))
        .collect();
    found.sort_by_key(|name| name.to_lowercase());
    found
}

/// Drop selected files that are no longer in the directory, keeping order
pub fn resync(selected: &[String], available: &[String]) -> Vec<String> {
    selected
        .iter()
        .filter(|f| available.contains(f))
        .cloned()
        .collect()
}

/// Merge a new multi-selection into the load order.
///
/// Newly picked files go to the end in selection order. A selection that
/// adds nothing is a deselection, so the order is filtered down to it.
pub fn update_load_order(current: &[String], selection: &[String]) -> Vec<String> {
    let added: Vec<&String> = selection.iter().filter(|f| !current.contains(f)).collect();
    if added.is_empty() {
        return current
            .iter()
            .filter(|f| selection.contains(f))
            .cloned()
            .collect();
    }
    let mut order = current.to_vec();
    order.extend(added.into_iter().cloned());
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    // ── scanning ──

    #[test]
    fn scan_lists_addons_case_insensitively() {
        let tmp = tempfile::tempdir().unwrap();
        for name in ["b.WAD", "a.wad", "Fix.deh", "mod.bex", "readme.txt", "c.wad.bak"] {
            fs::write(tmp.path().join(name), "").unwrap();
        }
        fs::create_dir(tmp.path().join("sub.wad")).unwrap();
        fs::write(tmp.path().join("sub.wad").join("deep.wad"), "").unwrap();

        assert_eq!(
            scan_addons(tmp.path()),
            strings(&["a.wad", "b.WAD", "Fix.deh", "mod.bex"])
        );
    }

    #[test]
    fn scan_of_missing_dir_is_empty() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(scan_addons(&tmp.path().join("missing")).is_empty());
    }

    // ── load order ──

    #[test]
    fn resync_keeps_order_of_surviving_files() {
        let selected = strings(&["z.wad", "gone.wad", "a.deh"]);
        let available = strings(&["a.deh", "b.wad", "z.wad"]);
        assert_eq!(resync(&selected, &available), strings(&["z.wad", "a.deh"]));
    }

    #[test]
    fn new_selection_appends_in_selection_order() {
        let current = strings(&["b.wad"]);
        let selection = strings(&["a.wad", "b.wad", "c.wad"]);
        assert_eq!(
            update_load_order(&current, &selection),
            strings(&["b.wad", "a.wad", "c.wad"])
        );
    }

    #[test]
    fn deselection_filters_the_order() {
        let current = strings(&["c.wad", "a.wad", "b.wad"]);
        let selection = strings(&["b.wad", "c.wad"]);
        assert_eq!(
            update_load_order(&current, &selection),
            strings(&["c.wad", "b.wad"])
        );
        assert!(update_load_order(&current, &[]).is_empty());
    }
}
