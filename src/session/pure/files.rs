//! Add-on file classification and save folder naming

use std::path::Path;

/// Longest add-on part of a generated save folder name
const SAVEDIR_ADDON_CHARS: usize = 32;

/// DeHackEd or BEX patch, judged by extension
pub fn is_dehacked(file: &str) -> bool {
    Path::new(file)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("deh") || ext.eq_ignore_ascii_case("bex"))
}

/// Split a load order into the patch to apply and the WADs to load.
///
/// The engine takes a single patch, so only the first one counts. The rest
/// are returned so the caller can report them.
pub fn split_patches(files: &[String]) -> (Option<&str>, Vec<&str>, Vec<&str>) {
    let mut patches = files.iter().filter(|f| is_dehacked(f)).map(String::as_str);
    let patch = patches.next();
    let ignored = patches.collect();
    let wads = files
        .iter()
        .filter(|f| !is_dehacked(f))
        .map(String::as_str)
        .collect();
    (patch, wads, ignored)
}

/// Strip a trailing `.wad` from a WAD name.
///
/// This trims any trailing run of w/a/d letters and then the dots, which
/// turns `DOOM2.WAD` into `DOOM2` and `mymod.wad` into `mymod`.
pub fn wad_stem(name: &str) -> &str {
    name.trim_end_matches(['w', 'a', 'd', 'W', 'A', 'D'])
        .trim_end_matches('.')
}

/// Name of the save folder for a custom game, e.g. `DOOM2_CustomGame` or
/// `DOOM2_mymod_extra`
pub fn custom_savedir_name(iwad: &str, wads: &[&str]) -> String {
    let prefix = wad_stem(iwad);
    if wads.is_empty() {
        return format!("{}_CustomGame", prefix);
    }
    let joined = wads
        .iter()
        .map(|w| wad_stem(w))
        .collect::<Vec<_>>()
        .join("_");
    let addons: String = joined.chars().take(SAVEDIR_ADDON_CHARS).collect();
    format!("{}_{}", prefix, addons)
}
