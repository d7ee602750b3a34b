//! Settings dialog state model.

use crate::config::{ProxySettings, Settings};
use crate::project::ProjectDefaults;

use super::messages::{AcceptOutcome, Confirm, Prompt, SettingsEffect, SettingsMsg};

/// Working copy of the project settings edited by the dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsModel {
    pub profile: String,
    pub project_folder: String,
    pub video_tracks: u32,
    pub audio_tracks: u32,
    /// Track counts are fixed for existing projects.
    pub read_only_tracks: bool,
    pub video_thumbs: bool,
    pub audio_thumbs: bool,
    pub proxy: ProxySettings,
    /// Profile the project used when the dialog opened.
    pub current_profile: String,
    /// Whether the project has been saved before.
    pub saved_project: bool,
    /// Whether the files tab has a project to inspect.
    pub files_enabled: bool,
    /// Track if settings have been modified.
    pub modified: bool,
}

impl SettingsModel {
    /// Build the model for a dialog bound to an open project.
    ///
    /// Proxy settings, tracks and profile come from the project; thumbnail
    /// flags from the application settings.
    pub fn bound_to_project(project: ProjectDefaults, app: &Settings, read_only_tracks: bool) -> Self {
        Self {
            current_profile: project.profile.clone(),
            profile: project.profile,
            project_folder: project.project_folder,
            video_tracks: project.video_tracks,
            audio_tracks: project.audio_tracks,
            read_only_tracks,
            video_thumbs: app.project.video_thumbnails,
            audio_thumbs: app.project.audio_thumbnails,
            proxy: project.proxy,
            saved_project: project.saved,
            files_enabled: true,
            modified: false,
        }
    }

    /// Build the model from application defaults, without a project.
    ///
    /// The files tab is disabled.
    pub fn standalone(
        app: &Settings,
        project_folder: impl Into<String>,
        read_only_tracks: bool,
        saved_project: bool,
    ) -> Self {
        Self {
            profile: app.project.current_profile.clone(),
            current_profile: app.project.current_profile.clone(),
            project_folder: project_folder.into(),
            video_tracks: app.project.video_tracks,
            audio_tracks: app.project.audio_tracks,
            read_only_tracks,
            video_thumbs: app.project.video_thumbnails,
            audio_thumbs: app.project.audio_thumbnails,
            proxy: app.proxy.clone(),
            saved_project,
            files_enabled: false,
            modified: false,
        }
    }

    /// Apply an edit. Returns follow-up work for the caller, if any.
    pub fn update(&mut self, msg: SettingsMsg) -> Option<SettingsEffect> {
        let effect = match msg {
            SettingsMsg::SetProfile(profile) => {
                self.profile = profile.clone();
                Some(SettingsEffect::ProfileChanged(profile))
            }
            SettingsMsg::SetProjectFolder(folder) => {
                self.project_folder = folder;
                // Empty folder only disables OK
                self.ok_enabled().then_some(SettingsEffect::RefreshCache)
            }
            SettingsMsg::SetVideoTracks(count) | SettingsMsg::SetAudioTracks(count)
                if self.read_only_tracks =>
            {
                tracing::debug!("Ignoring track count {} on read-only tracks", count);
                return None;
            }
            SettingsMsg::SetVideoTracks(count) => {
                self.video_tracks = count;
                None
            }
            SettingsMsg::SetAudioTracks(count) => {
                self.audio_tracks = count;
                None
            }
            SettingsMsg::ToggleVideoThumbs(on) => {
                self.video_thumbs = on;
                None
            }
            SettingsMsg::ToggleAudioThumbs(on) => {
                self.audio_thumbs = on;
                None
            }
            SettingsMsg::ToggleUseProxy(on) => {
                self.proxy.enabled = on;
                None
            }
            SettingsMsg::ToggleGenerateProxy(on) => {
                self.proxy.generate = on;
                None
            }
            SettingsMsg::SetProxyMinSize(size) => {
                self.proxy.min_size = size;
                None
            }
            SettingsMsg::SetProxyParams(params) => {
                self.proxy.params = params;
                None
            }
        };

        self.modified = true;
        effect
    }

    /// Commit the dialog.
    ///
    /// Switching the profile of a saved project needs confirmation.
    pub fn accept(&self, confirm: &dyn Confirm) -> AcceptOutcome {
        if self.saved_project && self.profile != self.current_profile {
            let prompt = Prompt::ProfileChange {
                from: self.current_profile.clone(),
                to: self.profile.clone(),
            };
            if !confirm.confirm(&prompt) {
                return AcceptOutcome::Cancelled;
            }
        }
        AcceptOutcome::Committed
    }

    pub fn ok_enabled(&self) -> bool {
        !self.project_folder.is_empty()
    }

    pub fn proxy_box_enabled(&self) -> bool {
        self.proxy.enabled
    }

    pub fn proxy_min_size_enabled(&self) -> bool {
        self.proxy.generate
    }

    pub fn tracks_editable(&self) -> bool {
        !self.read_only_tracks
    }

    pub fn selected_profile(&self) -> &str {
        &self.profile
    }

    pub fn selected_folder(&self) -> &str {
        &self.project_folder
    }

    /// `(video, audio)` track counts.
    pub fn tracks(&self) -> (u32, u32) {
        (self.video_tracks, self.audio_tracks)
    }

    pub fn enable_video_thumbs(&self) -> bool {
        self.video_thumbs
    }

    pub fn enable_audio_thumbs(&self) -> bool {
        self.audio_thumbs
    }

    pub fn use_proxy(&self) -> bool {
        self.proxy.enabled
    }

    pub fn generate_proxy(&self) -> bool {
        self.proxy.generate
    }

    pub fn proxy_min_size(&self) -> u32 {
        self.proxy.min_size
    }

    pub fn proxy_params(&self) -> &str {
        &self.proxy.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn project(saved: bool) -> ProjectDefaults {
        ProjectDefaults {
            profile: "dv_pal".to_string(),
            project_folder: "/home/user/project".to_string(),
            video_tracks: 3,
            audio_tracks: 2,
            proxy: ProxySettings {
                enabled: true,
                generate: true,
                min_size: 720,
                params: "-vb 200k".to_string(),
            },
            saved,
        }
    }

    #[test]
    fn bound_model_reads_project_values() {
        let model = SettingsModel::bound_to_project(project(true), &Settings::default(), false);

        assert_eq!(model.tracks(), (3, 2));
        assert!(model.use_proxy());
        assert!(model.proxy_box_enabled());
        assert_eq!(model.proxy_min_size(), 720);
        assert_eq!(model.proxy_params(), "-vb 200k");
        assert!(model.files_enabled);
        assert!(model.enable_video_thumbs());
    }

    #[test]
    fn standalone_model_reads_app_defaults() {
        let mut app = Settings::default();
        app.proxy.generate = true;
        app.project.current_profile = "hdv_1080_25p".to_string();

        let model = SettingsModel::standalone(&app, "/tmp/p", true, false);

        assert_eq!(model.selected_profile(), "hdv_1080_25p");
        assert!(!model.use_proxy());
        assert!(model.generate_proxy());
        assert!(!model.files_enabled);
        assert!(!model.tracks_editable());
    }

    #[test]
    fn folder_edits_toggle_ok() {
        let mut model = SettingsModel::standalone(&Settings::default(), "/p", false, false);

        assert_eq!(model.update(SettingsMsg::SetProjectFolder(String::new())), None);
        assert!(!model.ok_enabled());

        assert_eq!(
            model.update(SettingsMsg::SetProjectFolder("/q".to_string())),
            Some(SettingsEffect::RefreshCache)
        );
        assert!(model.ok_enabled());
        assert_eq!(model.selected_folder(), "/q");
        assert!(model.modified);
    }

    #[test]
    fn proxy_toggles_drive_enable_states() {
        let mut model = SettingsModel::standalone(&Settings::default(), "/p", false, false);
        assert!(!model.proxy_box_enabled());

        model.update(SettingsMsg::ToggleUseProxy(true));
        model.update(SettingsMsg::ToggleGenerateProxy(true));
        model.update(SettingsMsg::SetProxyMinSize(480));

        assert!(model.proxy_box_enabled());
        assert!(model.proxy_min_size_enabled());
        assert_eq!(model.proxy_min_size(), 480);
    }

    #[test]
    fn read_only_tracks_ignore_edits() {
        let mut model = SettingsModel::bound_to_project(project(true), &Settings::default(), true);
        model.update(SettingsMsg::SetVideoTracks(9));
        assert_eq!(model.tracks(), (3, 2));
        assert!(!model.modified);
    }

    #[test]
    fn profile_change_on_saved_project_needs_confirmation() {
        let asked = Cell::new(0);
        let refuse = |_: &Prompt| {
            asked.set(asked.get() + 1);
            false
        };

        let mut model = SettingsModel::bound_to_project(project(true), &Settings::default(), false);
        assert_eq!(model.accept(&refuse), AcceptOutcome::Committed);
        assert_eq!(asked.get(), 0);

        let effect = model.update(SettingsMsg::SetProfile("hdv_1080_25p".to_string()));
        assert_eq!(effect, Some(SettingsEffect::ProfileChanged("hdv_1080_25p".to_string())));
        assert_eq!(model.accept(&refuse), AcceptOutcome::Cancelled);
        assert_eq!(asked.get(), 1);
        assert_eq!(model.accept(&|_: &Prompt| true), AcceptOutcome::Committed);
    }

    #[test]
    fn unsaved_project_commits_without_asking() {
        let mut model = SettingsModel::bound_to_project(project(false), &Settings::default(), false);
        model.update(SettingsMsg::SetProfile("hdv_1080_25p".to_string()));
        assert_eq!(model.accept(&|_: &Prompt| false), AcceptOutcome::Committed);
    }
}
