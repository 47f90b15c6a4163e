use clap::Parser;
use md_changelog::application::{self, AppendEntryService, ReleaseOptions, ReleaseService};
use md_changelog::cli::{output, Cli, Commands, MessageArgs};
use md_changelog::domain::{Category, Version};
use md_changelog::error::Result;
use md_changelog::infrastructure::{
    EditorSession, FileSystemRepository, ProjectRepository, StdinPrompt,
};
use std::path::Path;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config_file = cli.config.as_deref();

    match cli.command {
        Commands::Init { path } => {
            let report = application::init(&path)?;
            print!("{}", output::format_init_report(&report));
            Ok(())
        }
        Commands::Release { version, force_yes } => {
            // Validate the requested version before touching the changelog
            let version = version.as_deref().map(str::parse::<Version>).transpose()?;
            let (repo, editor) = open_project(config_file)?;
            let mut changelog = repo.open_changelog()?;

            let service = ReleaseService::new(editor, StdinPrompt);
            let report = service.execute(&mut changelog, &ReleaseOptions { version, force_yes })?;

            println!("{}", output::format_release_outcome(&report));
            for warning in &report.warnings {
                eprintln!("{}", output::format_release_warning(warning));
            }
            Ok(())
        }
        Commands::Append { no_edit } => {
            let (repo, editor) = open_project(config_file)?;
            let mut changelog = repo.open_changelog()?;

            let report = AppendEntryService::new(editor).execute(&mut changelog, !no_edit)?;
            println!("{}", output::format_append_report(&report));
            Ok(())
        }
        Commands::Message(args) => add_message(config_file, Category::Message, &args),
        Commands::Feature(args) => add_message(config_file, Category::Feature, &args),
        Commands::Bugfix(args) => add_message(config_file, Category::Bugfix, &args),
        Commands::Improvement(args) => add_message(config_file, Category::Improvement, &args),
        Commands::Edit => {
            let (repo, editor) = open_project(config_file)?;
            let path = repo.changelog_path()?;
            println!("Call: {} {}", editor.command(), path.display());
            application::edit(&editor, &path)?;
            Ok(())
        }
        Commands::Last => {
            let (repo, _) = open_project(config_file)?;
            let changelog = repo.open_changelog()?;
            let rendered = application::show_last(&changelog)?;
            println!("{}", output::format_last_entry(rendered.as_deref()));
            Ok(())
        }
    }
}

/// Locate the project and set up the configured editor
fn open_project(config_file: Option<&Path>) -> Result<(FileSystemRepository, EditorSession)> {
    let repo = FileSystemRepository::locate(config_file)?;
    let config = repo.load_config()?;
    let editor = EditorSession::new(config.get_editor());
    Ok((repo, editor))
}

fn add_message(
    config_file: Option<&Path>,
    category: Category,
    args: &MessageArgs,
) -> Result<()> {
    let (repo, _) = open_project(config_file)?;
    let mut changelog = repo.open_changelog()?;

    let report = application::add_messages(
        &mut changelog,
        category,
        &args.message,
        args.split_by.as_deref(),
    )?;
    println!("{}", output::format_add_message_report(&report));
    Ok(())
}
