//! Settings dialog controller.
//!
//! Wires the dialog's buttons to the inventory: file scan, cache refresh,
//! cache clearing, unused clip removal and report export. Every action
//! runs to completion and replaces the previous report.

use std::path::PathBuf;

use crate::cache::{self, CacheStats};
use crate::config::Settings;
use crate::inventory::{
    compute_unused_files, export_snapshot, render_snapshot, scan_project_files, FileReport,
    SnapshotHeader, UnusedAction, Uploader,
};
use crate::profile::{Profile, ProfileSummary};
use crate::project::ProjectClips;

use super::messages::{AcceptOutcome, Confirm, Prompt, SettingsEffect, SettingsMsg};
use super::model::SettingsModel;

/// A settings dialog with its project, scan results and cache figures.
pub struct SettingsSession<'a> {
    model: SettingsModel,
    project: Option<&'a mut dyn ProjectClips>,
    lumas: Vec<String>,
    profiles_folder: PathBuf,
    report: FileReport,
    cache: CacheStats,
}

impl<'a> SettingsSession<'a> {
    /// Open the dialog on a project and scan its files.
    pub fn bound_to_project(
        project: &'a mut dyn ProjectClips,
        app: &Settings,
        lumas: Vec<String>,
        read_only_tracks: bool,
    ) -> Self {
        let model = SettingsModel::bound_to_project(project.defaults(), app, read_only_tracks);
        let mut session = Self {
            model,
            project: Some(project),
            lumas,
            profiles_folder: PathBuf::from(&app.paths.profiles_folder),
            report: FileReport::new(),
            cache: CacheStats::default(),
        };
        session.refresh_files(false);
        session
    }

    /// Open the dialog without a project. The files tab stays empty.
    pub fn standalone(
        app: &Settings,
        project_folder: impl Into<String>,
        read_only_tracks: bool,
        saved_project: bool,
    ) -> Self {
        let model = SettingsModel::standalone(app, project_folder, read_only_tracks, saved_project);
        let mut session = Self {
            model,
            project: None,
            lumas: Vec::new(),
            profiles_folder: PathBuf::from(&app.paths.profiles_folder),
            report: FileReport::new(),
            cache: CacheStats::default(),
        };
        session.refresh_files(true);
        session
    }

    pub fn model(&self) -> &SettingsModel {
        &self.model
    }

    /// Last scan result.
    pub fn report(&self) -> &FileReport {
        &self.report
    }

    /// Last cache figures.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache
    }

    /// Whether the delete-unused button is enabled.
    pub fn delete_unused_enabled(&self) -> bool {
        self.project.is_some() && self.report.has_unused()
    }

    /// Apply an edit and run the follow-up it requests.
    pub fn handle(&mut self, msg: SettingsMsg) -> Option<SettingsEffect> {
        let effect = self.model.update(msg);
        if effect == Some(SettingsEffect::RefreshCache) {
            self.refresh_files(true);
        }
        effect
    }

    /// Commit the dialog.
    pub fn accept(&self, confirm: &dyn Confirm) -> AcceptOutcome {
        self.model.accept(confirm)
    }

    /// Summary of the selected profile, if its description can be read.
    pub fn profile_summary(&self) -> Option<ProfileSummary> {
        match Profile::load(&self.profiles_folder, self.model.selected_profile()) {
            Ok(profile) => Some(profile.summary()),
            Err(e) => {
                tracing::debug!("No profile summary: {}", e);
                None
            }
        }
    }

    /// Human-readable name of the selected profile.
    pub fn profile_name(&self) -> String {
        let id = self.model.selected_profile();
        Profile::load(&self.profiles_folder, id)
            .map(|profile| profile.description().to_string())
            .unwrap_or_else(|_| id.to_string())
    }

    /// Recompute the cache figures, and unless `cache_only`, rescan the
    /// project's files.
    pub fn refresh_files(&mut self, cache_only: bool) {
        self.cache = if self.model.ok_enabled() {
            cache::cache_stats(self.model.selected_folder())
        } else {
            CacheStats::default()
        };
        if cache_only {
            return;
        }

        if let Some(project) = self.project.as_deref() {
            self.report = scan_project_files(project.document_clips(), &self.lumas);
            let counts = self.report.counts();
            tracing::debug!(
                "Scanned {} files ({} used clips, {} unused)",
                counts.total_files,
                counts.used_clips,
                counts.unused_clips
            );
        }
    }

    /// Wipe the thumbnail cache after confirmation.
    ///
    /// Returns whether the cache was cleared. Without a project folder there
    /// is no cache and nothing is touched.
    pub fn clear_cache(&mut self, confirm: &dyn Confirm) -> bool {
        if !self.model.ok_enabled() {
            tracing::debug!("No project folder, cache left alone");
            return false;
        }
        if !confirm.confirm(&Prompt::ClearCache) {
            return false;
        }

        let cleared = match cache::clear_cache(self.model.selected_folder()) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("{}", e);
                false
            }
        };
        self.refresh_files(true);
        cleared
    }

    /// Remove unused clips from the project.
    ///
    /// When none of the unused clips has a deletable file, only the clip
    /// records are dropped. Otherwise the files are deleted from disk along
    /// with their clips. Returns the action performed, or `None` when there
    /// was nothing to do or the user refused.
    pub fn delete_unused(&mut self, confirm: &dyn Confirm) -> Option<UnusedAction> {
        let project = self.project.as_deref_mut()?;
        let unused = compute_unused_files(project.document_clips());
        let action = unused.plan();

        match &action {
            UnusedAction::Nothing => return None,
            UnusedAction::Cleanup { .. } => {
                if !confirm.confirm(&Prompt::CleanupProject) {
                    return None;
                }
                project.cleanup();
            }
            UnusedAction::DeleteFiles { paths, .. } => {
                let prompt = Prompt::DeleteFiles {
                    paths: paths.clone(),
                };
                if !confirm.confirm(&prompt) {
                    return None;
                }
                project.trash_unused_clips(&unused);
            }
        }

        self.refresh_files(false);
        Some(action)
    }

    /// Export the last report as text.
    pub fn export(&self, destination: &str, uploader: &dyn Uploader) -> bool {
        let header = SnapshotHeader {
            project_folder: self.model.selected_folder().to_string(),
            profile_name: self.profile_name(),
        };
        let text = render_snapshot(&header, &self.report);
        export_snapshot(&text, destination, uploader)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::LocalUploader;
    use crate::models::{Clip, ClipType, FileCategory};
    use crate::project::ClipManifest;
    use std::cell::RefCell;
    use std::fs;
    use tempfile::tempdir;

    fn settings_with_profiles(folder: &std::path::Path) -> Settings {
        let mut settings = Settings::default();
        settings.paths.profiles_folder = folder.display().to_string();
        settings
    }

    #[test]
    fn bound_session_scans_on_open() {
        let mut manifest = ClipManifest::in_memory(
            "/p",
            vec![
                Clip::new("1", ClipType::Video, "/m/a.mov").with_references(1),
                Clip::new("2", ClipType::Audio, "/m/b.wav"),
            ],
        );
        let session = SettingsSession::bound_to_project(
            &mut manifest,
            &Settings::default(),
            vec!["/lumas/l1.pgm".to_string()],
            true,
        );

        let report = session.report();
        assert_eq!(report.entries(FileCategory::Video), ["/m/a.mov"]);
        assert_eq!(report.entries(FileCategory::Image), ["/lumas/l1.pgm"]);
        assert!(session.delete_unused_enabled());
        assert!(session.model().files_enabled);
    }

    #[test]
    fn standalone_session_has_no_files() {
        let session = SettingsSession::standalone(&Settings::default(), "/p", false, false);
        assert_eq!(session.report().counts().total_files, 0);
        assert!(!session.delete_unused_enabled());
    }

    #[test]
    fn folder_change_refreshes_cache() {
        let dir = tempdir().unwrap();
        let thumbs = cache::thumbs_dir(dir.path());
        fs::create_dir_all(&thumbs).unwrap();
        fs::write(thumbs.join("t.png"), b"0123").unwrap();

        let mut session = SettingsSession::standalone(&Settings::default(), "", false, false);
        assert_eq!(session.cache_stats().files, 0);

        let effect = session.handle(SettingsMsg::SetProjectFolder(dir.path().display().to_string()));
        assert_eq!(effect, Some(SettingsEffect::RefreshCache));
        assert_eq!(session.cache_stats(), CacheStats { files: 1, bytes: 4 });
    }

    #[test]
    fn clear_cache_respects_confirmation() {
        let dir = tempdir().unwrap();
        let thumbs = cache::thumbs_dir(dir.path());
        fs::create_dir_all(&thumbs).unwrap();
        fs::write(thumbs.join("t.png"), b"0123").unwrap();

        let folder = dir.path().display().to_string();
        let mut session = SettingsSession::standalone(&Settings::default(), folder, false, false);

        assert!(!session.clear_cache(&|_: &Prompt| false));
        assert_eq!(session.cache_stats().files, 1);

        assert!(session.clear_cache(&|_: &Prompt| true));
        assert_eq!(session.cache_stats(), CacheStats::default());
        assert!(thumbs.is_dir());
    }

    #[test]
    fn empty_folder_has_no_cache_to_clear() {
        let dir = tempdir().unwrap();
        let thumbs = cache::thumbs_dir(dir.path());
        fs::create_dir_all(&thumbs).unwrap();
        fs::write(thumbs.join("keep.png"), b"0123").unwrap();

        let folder = dir.path().display().to_string();
        let mut session = SettingsSession::standalone(&Settings::default(), folder, false, false);
        assert_eq!(session.cache_stats().files, 1);

        session.handle(SettingsMsg::SetProjectFolder(String::new()));
        session.refresh_files(true);
        assert!(!session.model().ok_enabled());
        assert_eq!(session.cache_stats(), CacheStats::default());

        let asked = std::cell::Cell::new(false);
        let cleared = session.clear_cache(&|_: &Prompt| {
            asked.set(true);
            true
        });
        assert!(!cleared);
        assert!(!asked.get());
        assert!(thumbs.join("keep.png").exists());
    }

    #[test]
    fn unused_color_clips_are_cleaned_up() {
        let mut manifest = ClipManifest::in_memory(
            "/p",
            vec![
                Clip::new("1", ClipType::Video, "/m/a.mov").with_references(1),
                Clip::new("2", ClipType::Other, ""),
            ],
        );
        let prompts = RefCell::new(Vec::new());
        let record = |prompt: &Prompt| {
            prompts.borrow_mut().push(prompt.clone());
            true
        };

        {
            let mut session =
                SettingsSession::bound_to_project(&mut manifest, &Settings::default(), Vec::new(), false);
            let action = session.delete_unused(&record);
            assert!(matches!(action, Some(UnusedAction::Cleanup { .. })));
            assert!(!session.delete_unused_enabled());
        }

        assert_eq!(prompts.into_inner(), vec![Prompt::CleanupProject]);
        assert_eq!(manifest.clips.len(), 1);
    }

    #[test]
    fn refused_deletion_keeps_everything() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("unused.mov");
        fs::write(&file, b"x").unwrap();
        let mut manifest = ClipManifest::in_memory(
            dir.path().display().to_string(),
            vec![Clip::new("1", ClipType::Video, file.display().to_string())],
        );

        {
            let mut session =
                SettingsSession::bound_to_project(&mut manifest, &Settings::default(), Vec::new(), false);
            assert_eq!(session.delete_unused(&|_: &Prompt| false), None);
        }

        assert!(file.exists());
        assert_eq!(manifest.clips.len(), 1);
    }

    #[test]
    fn confirmed_deletion_removes_files_and_clips() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("unused.mov");
        fs::write(&file, b"x").unwrap();
        let path = file.display().to_string();
        let mut manifest = ClipManifest::in_memory(
            dir.path().display().to_string(),
            vec![Clip::new("1", ClipType::Video, path.clone())],
        );

        {
            let mut session =
                SettingsSession::bound_to_project(&mut manifest, &Settings::default(), Vec::new(), false);
            let action = session.delete_unused(&|prompt: &Prompt| {
                matches!(prompt, Prompt::DeleteFiles { paths } if paths.len() == 1)
            });
            match action {
                Some(UnusedAction::DeleteFiles { paths, .. }) => assert_eq!(paths, vec![path]),
                other => panic!("unexpected action {:?}", other),
            }
            assert_eq!(session.report().counts().total_files, 0);
        }

        assert!(!file.exists());
        assert!(manifest.clips.is_empty());
    }

    #[test]
    fn export_uses_profile_description() {
        let profiles = tempdir().unwrap();
        fs::write(profiles.path().join("dv_pal"), "description=DV/DVD PAL\n").unwrap();
        let out = tempdir().unwrap();
        let dest = out.path().join("inventory.txt");

        let mut manifest = ClipManifest::in_memory(
            "/home/user/project",
            vec![Clip::new("1", ClipType::Audio, "/m/b.wav").with_references(1)],
        );
        let app = settings_with_profiles(profiles.path());
        let session = SettingsSession::bound_to_project(&mut manifest, &app, Vec::new(), false);

        assert!(session.export(&dest.display().to_string(), &LocalUploader));
        let text = fs::read_to_string(&dest).unwrap();
        assert!(text.starts_with("Project folder: /home/user/project\nProject profile: DV/DVD PAL\n"));
        assert!(text.contains("\nAudio clips:\n\n/m/b.wav\n"));
    }

    #[test]
    fn profile_name_falls_back_to_id() {
        let profiles = tempdir().unwrap();
        let app = settings_with_profiles(profiles.path());
        let session = SettingsSession::standalone(&app, "/p", false, false);
        assert_eq!(session.profile_name(), "dv_pal");
        assert_eq!(session.profile_summary(), None);
    }
}
