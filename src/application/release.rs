//! Release use case

use crate::domain::{Changelog, Date, Version};
use crate::error::{ChangelogError, Result};
use crate::infrastructure::{Editor, Prompt};
use std::path::Path;

pub const CONFIRM_QUESTION: &str = "Confirm changes? [Y/n]";

/// Options for a release
#[derive(Debug, Clone, Default)]
pub struct ReleaseOptions {
    /// Explicit release version; must be greater than the current one
    pub version: Option<Version>,
    /// Skip the editor and the confirmation prompt
    pub force_yes: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReleaseOutcome {
    /// Release written to disk; header of the released section
    Released { header: String },
    /// User rejected the changes; `restored` tells whether the backup was applied
    Undone { restored: bool },
}

/// Non-fatal problems left in the document after a release
#[derive(Debug, Clone, PartialEq)]
pub enum ReleaseWarning {
    /// Released version still carries the development counter
    DevSuffix(Version),
    /// Released version does not order above the previous release
    NotGreaterThanPrevious { current: Version, previous: Version },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseReport {
    pub outcome: ReleaseOutcome,
    pub warnings: Vec<ReleaseWarning>,
}

/// Service releasing the pending changelog section
pub struct ReleaseService<E, P> {
    editor: E,
    prompt: P,
}

impl<E: Editor, P: Prompt> ReleaseService<E, P> {
    pub fn new(editor: E, prompt: P) -> Self {
        ReleaseService { editor, prompt }
    }

    /// Date the pending section, let the user review it, then confirm or undo.
    pub fn execute(
        &self,
        changelog: &mut Changelog,
        options: &ReleaseOptions,
    ) -> Result<ReleaseReport> {
        // 1. Validate before touching anything
        let last = changelog.last_entry().ok_or(ChangelogError::EmptyChangelog)?;
        if !last.is_pending() {
            return Err(ChangelogError::NoUnreleasedEntry);
        }
        if let (Some(requested), Some(current)) = (options.version, last.version()) {
            if requested <= *current {
                return Err(ChangelogError::VersionNotGreater {
                    requested: requested.to_string(),
                    last: current.to_string(),
                });
            }
        }

        // 2. Apply release in memory, rolling back on invariant errors
        changelog.make_backup();
        if let Err(e) = Self::apply(changelog, options.version) {
            changelog.undo();
            return Err(e);
        }
        changelog.save()?;

        // 3. Review; an unconfirmed release never stays on disk
        if !options.force_yes {
            let confirmed = match self.review(changelog.path()) {
                Ok(confirmed) => confirmed,
                Err(e) => {
                    changelog.undo();
                    changelog.save()?;
                    return Err(e);
                }
            };
            if !confirmed {
                let restored = changelog.undo();
                changelog.save()?;
                return Ok(ReleaseReport {
                    outcome: ReleaseOutcome::Undone { restored },
                    warnings: Vec::new(),
                });
            }
        }

        // 4. Pick up manual edits and check the result
        changelog.reload()?;
        let header = changelog
            .last_entry()
            .ok_or(ChangelogError::EmptyChangelog)?
            .header()?;

        Ok(ReleaseReport {
            outcome: ReleaseOutcome::Released { header },
            warnings: collect_warnings(changelog),
        })
    }

    fn apply(changelog: &mut Changelog, version: Option<Version>) -> Result<()> {
        let entry = changelog
            .last_entry_mut()
            .ok_or(ChangelogError::EmptyChangelog)?;
        // Date first: a dev version keeps a dated entry open
        entry.set_date(Date::today())?;
        if let Some(version) = version {
            entry.set_version(version)?;
        }
        Ok(())
    }

    /// Let the user look at the file, then ask whether to keep the release
    fn review(&self, path: &Path) -> Result<bool> {
        self.editor.open(path)?;
        let answer = self.prompt.ask(CONFIRM_QUESTION)?;
        Ok(!answer.trim().eq_ignore_ascii_case("n"))
    }
}

/// Post-release checks on the most recent section
pub fn collect_warnings(changelog: &Changelog) -> Vec<ReleaseWarning> {
    let mut warnings = Vec::new();

    if let Some(version) = changelog.last_entry().and_then(|e| e.version()) {
        if !version.is_released() {
            warnings.push(ReleaseWarning::DevSuffix(*version));
        }
    }
    if let Some((current, previous)) = changelog.ordering_violation() {
        warnings.push(ReleaseWarning::NotGreaterThanPrevious { current, previous });
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LogEntry, Message, Token};
    use std::cell::{Cell, RefCell};
    use std::fs;
    use tempfile::TempDir;

    /// Editor that optionally rewrites the file, like a user would
    #[derive(Default)]
    struct FakeEditor {
        rewrite: Option<String>,
        opened: Cell<usize>,
    }

    impl Editor for &FakeEditor {
        fn open(&self, file_path: &Path) -> Result<Option<i32>> {
            self.opened.set(self.opened.get() + 1);
            if let Some(content) = &self.rewrite {
                fs::write(file_path, content)?;
            }
            Ok(Some(0))
        }
    }

    struct ScriptedPrompt {
        answer: &'static str,
        asked: RefCell<Vec<String>>,
    }

    impl ScriptedPrompt {
        fn answering(answer: &'static str) -> Self {
            ScriptedPrompt {
                answer,
                asked: RefCell::new(Vec::new()),
            }
        }
    }

    impl Prompt for &ScriptedPrompt {
        fn ask(&self, question: &str) -> Result<String> {
            self.asked.borrow_mut().push(question.to_string());
            Ok(self.answer.to_string())
        }
    }

    const PENDING: &str = "Changelog\n\
        =========\n\
        \n\
        1.0.0+1 (UNRELEASED)\n\
        --------------------\n\
        * [Feature] New parser\n\
        \n\
        1.0.0 (2016-03-11)\n\
        ------------------\n\
        * Initial release\n";

    fn changelog_from(temp: &TempDir, content: &str) -> Changelog {
        let path = temp.path().join("Changelog.md");
        fs::write(&path, content).unwrap();
        Changelog::open(&path).unwrap()
    }

    fn options(version: Option<&str>, force_yes: bool) -> ReleaseOptions {
        ReleaseOptions {
            version: version.map(|v| v.parse().unwrap()),
            force_yes,
        }
    }

    #[test]
    fn test_release_with_version_force_yes() {
        let temp = TempDir::new().unwrap();
        let mut changelog = changelog_from(&temp, PENDING);
        let editor = FakeEditor::default();
        let prompt = ScriptedPrompt::answering("Y");
        let service = ReleaseService::new(&editor, &prompt);

        let report = service
            .execute(&mut changelog, &options(Some("1.1.0"), true))
            .unwrap();

        let expected_header = format!("1.1.0 ({})", Date::today());
        assert_eq!(
            report.outcome,
            ReleaseOutcome::Released {
                header: expected_header.clone()
            }
        );
        assert!(report.warnings.is_empty());
        assert_eq!(editor.opened.get(), 0);
        assert!(prompt.asked.borrow().is_empty());

        let saved = fs::read_to_string(changelog.path()).unwrap();
        assert!(saved.contains(&expected_header));
        assert!(saved.contains("* [Feature] New parser"));
    }

    #[test]
    fn test_release_without_version_warns_about_dev_suffix() {
        let temp = TempDir::new().unwrap();
        let mut changelog = changelog_from(&temp, PENDING);
        let editor = FakeEditor::default();
        let prompt = ScriptedPrompt::answering("");
        let service = ReleaseService::new(&editor, &prompt);

        let report = service
            .execute(&mut changelog, &options(None, false))
            .unwrap();

        assert_eq!(editor.opened.get(), 1);
        assert_eq!(prompt.asked.borrow().as_slice(), [CONFIRM_QUESTION]);
        assert!(report
            .warnings
            .contains(&ReleaseWarning::DevSuffix(Version::new(1, 0, 0).with_dev(1))));
        // 1.0.0+1 orders equal to the previous 1.0.0
        assert!(report.warnings.iter().any(|w| matches!(
            w,
            ReleaseWarning::NotGreaterThanPrevious { .. }
        )));
    }

    #[test]
    fn test_release_picks_up_editor_changes() {
        let temp = TempDir::new().unwrap();
        let mut changelog = changelog_from(&temp, PENDING);
        let edited = PENDING.replace("1.0.0+1 (UNRELEASED)", "2.0.0 (2016-04-01)");
        let editor = FakeEditor {
            rewrite: Some(edited),
            ..FakeEditor::default()
        };
        let prompt = ScriptedPrompt::answering("y");
        let service = ReleaseService::new(&editor, &prompt);

        let report = service
            .execute(&mut changelog, &options(None, false))
            .unwrap();

        assert_eq!(
            report.outcome,
            ReleaseOutcome::Released {
                header: "2.0.0 (2016-04-01)".to_string()
            }
        );
        assert!(report.warnings.is_empty());
        assert_eq!(
            changelog.last_entry().unwrap().version().unwrap().render(),
            "2.0.0"
        );
    }

    #[test]
    fn test_release_rejected_restores_document() {
        let temp = TempDir::new().unwrap();
        let mut changelog = changelog_from(&temp, PENDING);
        let editor = FakeEditor::default();
        let prompt = ScriptedPrompt::answering("n");
        let service = ReleaseService::new(&editor, &prompt);

        let report = service
            .execute(&mut changelog, &options(Some("1.1.0"), false))
            .unwrap();

        assert_eq!(report.outcome, ReleaseOutcome::Undone { restored: true });
        let saved = fs::read_to_string(changelog.path()).unwrap();
        assert_eq!(saved, PENDING);
    }

    struct MissingEditor;

    impl Editor for MissingEditor {
        fn open(&self, _file_path: &Path) -> Result<Option<i32>> {
            Err(ChangelogError::Editor(
                "Failed to launch editor 'nope'".to_string(),
            ))
        }
    }

    #[test]
    fn test_release_editor_failure_restores_document() {
        let temp = TempDir::new().unwrap();
        let mut changelog = changelog_from(&temp, PENDING);
        let prompt = ScriptedPrompt::answering("Y");
        let service = ReleaseService::new(MissingEditor, &prompt);

        let result = service.execute(&mut changelog, &options(Some("1.1.0"), false));

        assert!(matches!(result, Err(ChangelogError::Editor(_))));
        assert!(prompt.asked.borrow().is_empty());
        assert_eq!(fs::read_to_string(changelog.path()).unwrap(), PENDING);
        assert!(!changelog.has_backup());
        assert!(changelog.last_entry().unwrap().is_pending());
    }

    struct ClosedPrompt;

    impl Prompt for ClosedPrompt {
        fn ask(&self, _question: &str) -> Result<String> {
            Err(std::io::Error::from(std::io::ErrorKind::UnexpectedEof).into())
        }
    }

    #[test]
    fn test_release_prompt_failure_restores_document() {
        let temp = TempDir::new().unwrap();
        let mut changelog = changelog_from(&temp, PENDING);
        let editor = FakeEditor::default();
        let service = ReleaseService::new(&editor, ClosedPrompt);

        let result = service.execute(&mut changelog, &options(None, false));

        assert!(matches!(result, Err(ChangelogError::Io(_))));
        assert_eq!(editor.opened.get(), 1);
        assert_eq!(fs::read_to_string(changelog.path()).unwrap(), PENDING);
    }

    #[test]
    fn test_release_rejects_equal_or_lower_version() {
        let temp = TempDir::new().unwrap();
        let editor = FakeEditor::default();
        let prompt = ScriptedPrompt::answering("Y");
        let service = ReleaseService::new(&editor, &prompt);

        for target in ["1.0.0", "0.9.0"] {
            let mut changelog = changelog_from(&temp, PENDING);
            let result = service.execute(&mut changelog, &options(Some(target), true));

            match result {
                Err(ChangelogError::VersionNotGreater { requested, last }) => {
                    assert_eq!(requested, target);
                    assert_eq!(last, "1.0.0+1");
                }
                other => panic!("Expected VersionNotGreater, got {:?}", other),
            }
            assert!(!changelog.has_backup());
            assert!(changelog.last_entry().unwrap().is_pending());
            assert_eq!(fs::read_to_string(changelog.path()).unwrap(), PENDING);
        }
    }

    #[test]
    fn test_release_empty_changelog() {
        let temp = TempDir::new().unwrap();
        let mut changelog = changelog_from(&temp, "Changelog\n=========\n");
        let editor = FakeEditor::default();
        let prompt = ScriptedPrompt::answering("Y");
        let service = ReleaseService::new(&editor, &prompt);

        let result = service.execute(&mut changelog, &ReleaseOptions::default());
        assert!(matches!(result, Err(ChangelogError::EmptyChangelog)));
    }

    #[test]
    fn test_release_without_pending_entry() {
        let temp = TempDir::new().unwrap();
        let mut changelog = changelog_from(&temp, "1.0.0 (2016-03-11)\n---\n* done\n");
        let editor = FakeEditor::default();
        let prompt = ScriptedPrompt::answering("Y");
        let service = ReleaseService::new(&editor, &prompt);

        let result = service.execute(&mut changelog, &ReleaseOptions::default());
        assert!(matches!(result, Err(ChangelogError::NoUnreleasedEntry)));
    }

    #[test]
    fn test_release_invariant_error_rolls_back() {
        let temp = TempDir::new().unwrap();
        // Released version waiting for a date can't take a new version
        let content = "1.1.0 (UNRELEASED)\n---\n\n1.0.0 (2016-03-11)\n---\n";
        let mut changelog = changelog_from(&temp, content);
        let editor = FakeEditor::default();
        let prompt = ScriptedPrompt::answering("Y");
        let service = ReleaseService::new(&editor, &prompt);

        let result = service.execute(&mut changelog, &options(Some("1.2.0"), true));

        assert!(matches!(result, Err(ChangelogError::InvalidState(_))));
        assert_eq!(
            changelog.last_entry().unwrap().date(),
            Some(&Date::Unreleased)
        );
        assert_eq!(fs::read_to_string(changelog.path()).unwrap(), content);
    }

    #[test]
    fn test_collect_warnings_clean_release() {
        let mut changelog = Changelog::new("Changelog.md");
        changelog
            .add_entry(LogEntry::declared(Version::new(1, 0, 0), Date::today()))
            .unwrap();
        let mut entry = LogEntry::declared(Version::new(1, 1, 0), Date::today());
        entry.add_message(Message::plain("done")).unwrap();
        changelog.add_entry(entry).unwrap();

        assert!(collect_warnings(&changelog).is_empty());
    }
}
