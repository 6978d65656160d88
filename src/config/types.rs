use serde::{Deserialize, Serialize};

/// Separator of the add-on load order in a preset
pub const FILES_SEPARATOR: char = ';';

/// On-disk layout of a preset.
///
/// Every field is optional: a hand-edited preset may leave anything out and
/// the in-memory value is kept. Integers are signed so negative values reach
/// the setters and get rejected there instead of failing the whole parse.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct PresetFile {
    #[serde(rename = "GlobalSettings", default)]
    pub global: GlobalSection,
    #[serde(rename = "CustomGame", default)]
    pub custom: CustomSection,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct GlobalSection {
    pub iwad_dir: Option<String>,
    pub master_dir: Option<String>,
    pub nrftl_dir: Option<String>,
    pub addon_dir: Option<String>,
    pub save_dir: Option<String>,
    pub demo_dir: Option<String>,
    pub software_exe: Option<String>,
    pub opengl_exe: Option<String>,
    pub use_opengl: Option<bool>,
    pub sw_width: Option<i64>,
    pub sw_height: Option<i64>,
    pub sw_fullscreen: Option<bool>,
    pub sw_fullscreen_desktop: Option<bool>,
    pub gl_width: Option<i64>,
    pub gl_height: Option<i64>,
    pub gl_fullscreen: Option<bool>,
    pub gl_fullscreen_desktop: Option<bool>,
    pub make_savedirs: Option<bool>,
    pub engine_config: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct CustomSection {
    pub game: Option<String>,
    pub skill: Option<i64>,
    pub level: Option<i64>,
    pub iwad: Option<i64>,
    pub compat: Option<i64>,
    pub files: Option<String>,
    pub fast: Option<bool>,
    pub respawn: Option<bool>,
    pub extra_args: Option<String>,
    pub record: Option<bool>,
    pub record_name: Option<String>,
    pub playback: Option<bool>,
    pub playback_file: Option<String>,
}

/// Split a stored load order, dropping empty entries
pub fn split_files(value: &str) -> Vec<String> {
    value
        .split(FILES_SEPARATOR)
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .map(String::from)
        .collect()
}

pub fn join_files(files: &[String]) -> String {
    files.join(&FILES_SEPARATOR.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn files_split_drops_empty_entries() {
        assert_eq!(split_files("a.wad;;b.deh; "), vec!["a.wad", "b.deh"]);
        assert!(split_files("").is_empty());
    }

    #[test]
    fn files_join_keeps_order() {
        let files = vec!["z.wad".to_string(), "a.wad".to_string()];
        assert_eq!(join_files(&files), "z.wad;a.wad");
        assert_eq!(split_files(&join_files(&files)), files);
    }

    #[test]
    fn partial_document_parses() {
        let doc: PresetFile = toml::from_str("[CustomGame]\nskill = 4\n").unwrap();
        assert_eq!(doc.custom.skill, Some(4));
        assert_eq!(doc.global, GlobalSection::default());
    }
}
