//! Command implementations

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use clipinv_core::cache::{self, format_size};
use clipinv_core::config::{ConfigManager, ConfigSection, Settings};
use clipinv_core::dialog::{Confirm, Prompt, SettingsSession};
use clipinv_core::inventory::{compute_unused_files, FileReport, LocalUploader, UnusedAction};
use clipinv_core::profile::{self, Profile};
use clipinv_core::project::{ClipManifest, ProjectClips};

/// Asks on stdin, answering no on EOF or read errors.
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&self, prompt: &Prompt) -> bool {
        eprintln!("{}\n\n{}", prompt.title(), prompt.message());
        eprint!("Continue? [y/N] ");
        let _ = io::stderr().flush();

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => is_yes(&answer),
            Err(e) => {
                tracing::warn!("Cannot read answer: {}", e);
                false
            }
        }
    }
}

/// Accepts every prompt (`--yes`).
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&self, _prompt: &Prompt) -> bool {
        true
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

fn load_manifest(path: &Path) -> Result<ClipManifest> {
    ClipManifest::load(path).with_context(|| format!("cannot open project {}", path.display()))
}

/// Luma files from the manifest followed by the configured ones.
fn lumas(manifest: &ClipManifest, settings: &Settings) -> Vec<String> {
    manifest
        .lumas
        .iter()
        .chain(settings.paths.lumas.iter())
        .cloned()
        .collect()
}

fn print_report(report: &FileReport) {
    for (category, entries) in report.categories() {
        println!("{}:", category.header());
        for entry in entries {
            println!("  {}", entry);
        }
        println!();
    }

    if !report.fonts().is_empty() {
        println!("Fonts:");
        for font in report.fonts() {
            println!("  {}", font);
        }
        println!();
    }

    let counts = report.counts();
    println!("Total files: {}", counts.total_files);
    println!(
        "Used clips: {} ({})",
        counts.used_clips,
        format_size(counts.used_size)
    );
    println!(
        "Unused clips: {} ({})",
        counts.unused_clips,
        format_size(counts.unused_size)
    );
}

pub fn scan(settings: &Settings, manifest_path: &Path) -> Result<()> {
    let mut manifest = load_manifest(manifest_path)?;
    let lumas = lumas(&manifest, settings);
    let session = SettingsSession::bound_to_project(&mut manifest, settings, lumas, true);

    print_report(session.report());
    Ok(())
}

pub fn unused(settings: &Settings, manifest_path: &Path, apply: bool, yes: bool) -> Result<()> {
    let mut manifest = load_manifest(manifest_path)?;

    match compute_unused_files(manifest.document_clips()).plan() {
        UnusedAction::Nothing => {
            println!("No unused clips.");
            return Ok(());
        }
        UnusedAction::Cleanup { clips } => {
            println!("{} unused clips without files to delete:", clips.len());
            for id in &clips {
                println!("  {}", id);
            }
        }
        UnusedAction::DeleteFiles { paths, clips } => {
            println!("{} unused clips, {} files to delete:", clips.len(), paths.len());
            for path in &paths {
                println!("  {}", path);
            }
        }
    }

    if !apply {
        return Ok(());
    }

    let confirm: &dyn Confirm = if yes { &AssumeYes } else { &StdinConfirm };
    let lumas = lumas(&manifest, settings);
    let performed = {
        let mut session = SettingsSession::bound_to_project(&mut manifest, settings, lumas, true);
        session.delete_unused(confirm)
    };

    match performed {
        Some(_) => {
            manifest
                .save()
                .with_context(|| format!("cannot save project {}", manifest_path.display()))?;
            println!("Project updated, {} clips left.", manifest.clips.len());
        }
        None => println!("Nothing changed."),
    }
    Ok(())
}

pub fn export(settings: &Settings, manifest_path: &Path, destination: &str) -> Result<()> {
    let mut manifest = load_manifest(manifest_path)?;
    let lumas = lumas(&manifest, settings);
    let session = SettingsSession::bound_to_project(&mut manifest, settings, lumas, true);

    if !session.export(destination, &LocalUploader) {
        bail!("export to {} failed", destination);
    }
    println!("Inventory written to {}", destination);
    Ok(())
}

pub fn cache(settings: &Settings, folder: &Path, clear: bool, yes: bool) -> Result<()> {
    let folder = std::path::absolute(folder)
        .with_context(|| format!("cannot resolve project folder {}", folder.display()))?;
    let mut session =
        SettingsSession::standalone(settings, folder.display().to_string(), true, false);

    if clear {
        let confirm: &dyn Confirm = if yes { &AssumeYes } else { &StdinConfirm };
        if !session.clear_cache(confirm) {
            println!("Cache not cleared.");
        }
    }

    let stats = session.cache_stats();
    println!(
        "{}: {} files, {}",
        cache::thumbs_dir(&folder).display(),
        stats.files,
        format_size(stats.bytes)
    );
    Ok(())
}

pub fn profile(settings: &Settings, name: Option<&str>) -> Result<()> {
    let id = name.unwrap_or(settings.project.current_profile.as_str());
    let profile = Profile::load(&settings.paths.profiles_folder, id)?;
    let summary = profile.summary();

    println!("{} ({})", profile.description(), profile.id);
    println!("Size: {}", summary.size);
    println!("Frame rate: {}", summary.fps);
    println!("Pixel aspect ratio: {}", summary.sample_aspect);
    println!("Display aspect ratio: {}", summary.display_aspect);
    println!("Scanning: {}", summary.scan);
    println!("Colorspace: {}", summary.colorspace);
    Ok(())
}

/// Make `name` the profile of new projects and persist the `[project]`
/// section.
pub fn set_default_profile(config: &mut ConfigManager, name: &str) -> Result<()> {
    let profile = Profile::load(&config.settings().paths.profiles_folder, name)?;

    config.settings_mut().project.current_profile = profile.id.clone();
    config
        .update_section(ConfigSection::Project)
        .with_context(|| format!("cannot save {}", config.path().display()))?;

    println!("Default profile set to {} ({})", profile.description(), profile.id);
    Ok(())
}

pub fn list_profiles(settings: &Settings) -> Result<()> {
    for (description, id) in profile::list_profiles(&settings.paths.profiles_folder)? {
        println!("{:<24} {}", id, description);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const MANIFEST: &str = r#"{
        "project_folder": "/p",
        "clips": [
            {"id": "1", "type": "video", "path": "/m/a.mov", "references": 1},
            {"id": "2", "type": "other", "path": ""}
        ]
    }"#;

    #[test]
    fn yes_answers() {
        assert!(is_yes("y\n"));
        assert!(is_yes(" YES "));
        assert!(!is_yes("\n"));
        assert!(!is_yes("no"));
    }

    #[test]
    fn unused_apply_saves_manifest() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("project.json");
        fs::write(&path, MANIFEST).unwrap();

        unused(&Settings::default(), &path, true, true).unwrap();

        let saved = ClipManifest::load(&path).unwrap();
        assert_eq!(saved.clips.len(), 1);
    }

    #[test]
    fn unused_without_apply_changes_nothing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("project.json");
        fs::write(&path, MANIFEST).unwrap();

        unused(&Settings::default(), &path, false, false).unwrap();

        assert_eq!(ClipManifest::load(&path).unwrap().clips.len(), 2);
    }

    #[test]
    fn export_writes_destination() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("project.json");
        fs::write(&path, MANIFEST).unwrap();
        let dest = dir.path().join("out.txt");

        export(&Settings::default(), &path, &dest.display().to_string()).unwrap();

        let text = fs::read_to_string(&dest).unwrap();
        assert!(text.contains("Project folder: /p"));
        assert!(text.contains("/m/a.mov"));
    }

    #[test]
    fn missing_manifest_is_error() {
        let dir = tempdir().unwrap();
        assert!(scan(&Settings::default(), &dir.path().join("absent.json")).is_err());
    }

    #[test]
    fn lists_configured_profiles() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("dv_pal"), "description=DV/DVD PAL\n").unwrap();
        let mut settings = Settings::default();
        settings.paths.profiles_folder = dir.path().display().to_string();

        list_profiles(&settings).unwrap();
        profile(&settings, Some("dv_pal")).unwrap();
        assert!(profile(&settings, Some("absent")).is_err());
    }

    #[test]
    fn set_default_profile_updates_config() {
        let dir = tempdir().unwrap();
        let profiles = dir.path().join("profiles");
        fs::create_dir_all(&profiles).unwrap();
        fs::write(profiles.join("hdv_1080_25p"), "description=HDV 1080 25p\n").unwrap();

        let config_path = dir.path().join("clipinv.toml");
        let mut config = ConfigManager::new(&config_path);
        config.load_or_create().unwrap();
        config.settings_mut().paths.profiles_folder = profiles.display().to_string();

        set_default_profile(&mut config, "hdv_1080_25p").unwrap();
        assert!(set_default_profile(&mut config, "absent").is_err());

        let mut reloaded = ConfigManager::new(&config_path);
        reloaded.load_or_create().unwrap();
        assert_eq!(reloaded.settings().project.current_profile, "hdv_1080_25p");
    }

    #[test]
    fn cache_clear_with_yes() {
        let dir = tempdir().unwrap();
        let thumbs = cache::thumbs_dir(dir.path());
        fs::create_dir_all(&thumbs).unwrap();
        fs::write(thumbs.join("a.png"), b"1").unwrap();

        cache(&Settings::default(), dir.path(), true, true).unwrap();

        assert!(thumbs.is_dir());
        assert_eq!(fs::read_dir(&thumbs).unwrap().count(), 0);
    }
}
