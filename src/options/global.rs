use crate::error::SettingsError;

/// Screen settings for one renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoSettings {
    pub width: u32,
    pub height: u32,
    pub fullscreen: bool,
    /// Borderless fullscreen at desktop resolution. Exposed to users as the
    /// inverse "disable fullscreen desktop" toggle.
    pub fullscreen_desktop: bool,
}

impl VideoSettings {
    fn software_default() -> Self {
        Self {
            width: 640,
            height: 480,
            fullscreen: false,
            fullscreen_desktop: true,
        }
    }

    fn opengl_default() -> Self {
        Self {
            width: 1280,
            height: 720,
            fullscreen: false,
            fullscreen_desktop: true,
        }
    }

    /// Apply a `WIDTH`x`HEIGHT` string entered by the user
    pub fn set_resolution(&mut self, value: &str) -> Result<(), SettingsError> {
        let (width, height) = parse_resolution(value)?;
        self.width = width;
        self.height = height;
        Ok(())
    }
}

/// Parse `"640x480"` style input.
///
/// Only malformed input is rejected here. Numbers outside what the engine
/// accepts are stored as given and skipped when the command line is built.
pub fn parse_resolution(value: &str) -> Result<(u32, u32), SettingsError> {
    let invalid = || SettingsError::InvalidResolution(value.to_string());
    let (w, h) = value
        .trim()
        .split_once(['x', 'X'])
        .ok_or_else(invalid)?;
    let width = w.trim().parse::<u32>().map_err(|_| invalid())?;
    let height = h.trim().parse::<u32>().map_err(|_| invalid())?;
    Ok((width, height))
}

/// Settings shared by every session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalSettings {
    pub iwad_dir: String,
    pub master_dir: String,
    pub nrftl_dir: String,
    pub addon_dir: String,
    pub save_dir: String,
    pub demo_dir: String,
    pub software_exe: String,
    pub opengl_exe: String,
    pub use_opengl: bool,
    pub software_video: VideoSettings,
    pub opengl_video: VideoSettings,
    /// Give every game/mod combination its own save subdirectory
    pub make_savedirs: bool,
    /// Engine config file passed with `-config`; empty means the engine default
    pub engine_config: String,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        Self {
            iwad_dir: ".".to_string(),
            master_dir: "./master".to_string(),
            nrftl_dir: ".".to_string(),
            addon_dir: ".".to_string(),
            save_dir: "./saves".to_string(),
            demo_dir: ".".to_string(),
            software_exe: "prboom-plus".to_string(),
            opengl_exe: "glboom-plus".to_string(),
            use_opengl: false,
            software_video: VideoSettings::software_default(),
            opengl_video: VideoSettings::opengl_default(),
            make_savedirs: true,
            engine_config: String::new(),
        }
    }
}

impl GlobalSettings {
    pub fn restore_defaults(&mut self) {
        *self = Self::default();
    }

    /// Executable for the selected renderer
    pub fn executable(&self) -> &str {
        if self.use_opengl {
            &self.opengl_exe
        } else {
            &self.software_exe
        }
    }

    /// Video settings for the selected renderer
    pub fn video(&self) -> &VideoSettings {
        if self.use_opengl {
            &self.opengl_video
        } else {
            &self.software_video
        }
    }

    pub fn video_mut(&mut self) -> &mut VideoSettings {
        if self.use_opengl {
            &mut self.opengl_video
        } else {
            &mut self.software_video
        }
    }
}
