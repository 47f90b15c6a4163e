use assert_cmd::Command;

pub fn md_changelog_cmd() -> Command {
    let mut cmd = Command::cargo_bin("md-changelog").unwrap();
    cmd.env_remove("MD_CHANGELOG_ROOT");
    cmd.env_remove("EDITOR");
    cmd.env_remove("VISUAL");
    cmd
}
