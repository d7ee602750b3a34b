//! Settings dialog messages (events) and confirmation prompts.

/// Edits coming from the dialog's input widgets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsMsg {
    SetProfile(String),
    SetProjectFolder(String),
    SetVideoTracks(u32),
    SetAudioTracks(u32),
    ToggleVideoThumbs(bool),
    ToggleAudioThumbs(bool),
    ToggleUseProxy(bool),
    ToggleGenerateProxy(bool),
    SetProxyMinSize(u32),
    SetProxyParams(String),
}

/// Follow-up work requested by a model update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsEffect {
    /// The selected profile changed; its summary must be redisplayed.
    ProfileChanged(String),
    /// The project folder changed; the cache figures must be recomputed.
    RefreshCache,
}

/// Result of committing the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcceptOutcome {
    Committed,
    Cancelled,
}

/// A question the user must answer before a destructive step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt {
    /// Remove unused clip records (no files touched).
    CleanupProject,
    /// Delete these files from disk.
    DeleteFiles { paths: Vec<String> },
    /// Wipe the thumbnail cache.
    ClearCache,
    /// Switch a saved project to another profile.
    ProfileChange { from: String, to: String },
}

impl Prompt {
    /// Dialog title.
    pub fn title(&self) -> &'static str {
        match self {
            Prompt::CleanupProject => "Clean up project",
            Prompt::DeleteFiles { .. } => "Delete unused clips",
            Prompt::ClearCache => "Clear cache",
            Prompt::ProfileChange { .. } => "Confirm profile change",
        }
    }

    /// Question shown to the user.
    pub fn message(&self) -> String {
        match self {
            Prompt::CleanupProject => {
                "This will remove all unused clips from your project.".to_string()
            }
            Prompt::DeleteFiles { paths } => format!(
                "This will remove the following files from your hard drive.\n\
                 This action cannot be undone, only use if you know what you are doing.\n\
                 Are you sure you want to continue?\n\n{}",
                paths.join("\n")
            ),
            Prompt::ClearCache => "This will delete all cached thumbnails of the project.".to_string(),
            Prompt::ProfileChange { from, to } => format!(
                "Changing the profile of your project ({} to {}) cannot be undone.\n\
                 It is recommended to save your project before attempting this operation \
                 that might cause some corruption in transitions.\n\
                 Are you sure you want to proceed?",
                from, to
            ),
        }
    }
}

/// Asks the user to confirm a prompt.
pub trait Confirm {
    fn confirm(&self, prompt: &Prompt) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&Prompt) -> bool,
{
    fn confirm(&self, prompt: &Prompt) -> bool {
        self(prompt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delete_prompt_lists_files() {
        let prompt = Prompt::DeleteFiles {
            paths: vec!["/a.mov".to_string(), "/b.wav".to_string()],
        };
        let message = prompt.message();
        assert!(message.contains("cannot be undone"));
        assert!(message.ends_with("/a.mov\n/b.wav"));
        assert_eq!(prompt.title(), "Delete unused clips");
    }

    #[test]
    fn closures_confirm() {
        let yes = |_: &Prompt| true;
        let no = |_: &Prompt| false;
        assert!(yes.confirm(&Prompt::ClearCache));
        assert!(!no.confirm(&Prompt::CleanupProject));
    }
}
