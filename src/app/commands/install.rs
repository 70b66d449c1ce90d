//! The install workflow: clone, read README, generate and run an install
//! script, then generate and open simplified instructions.
//!
//! Every stage fails fast. The install script's own exit status is recorded
//! but never changes the flow, and a failed opener only prints a hint.

use std::path::PathBuf;
use std::process::ExitStatus;

use crate::adapters::write_artifact;
use crate::app::AppContext;
use crate::domain::{AppError, Artifact, ChatRequest, ReadmeDocument, RepositoryReference};
use crate::ports::{
    ChatClient, FileLauncher, InputPrompter, ReadmeLocator, RepositoryCloner, ScriptRunner,
};

/// Options for a single install run.
#[derive(Debug, Clone)]
pub struct InstallOptions {
    /// Model identifier sent with both requests.
    pub model: String,
    /// Directory the repository is cloned into and artifacts are written to.
    pub work_dir: PathBuf,
    /// Whether to hand the HTML file to the host opener.
    pub open_instructions: bool,
}

/// Result of a completed run.
#[derive(Debug)]
pub struct InstallOutcome {
    pub repository: RepositoryReference,
    pub readme_path: PathBuf,
    pub install_script: PathBuf,
    pub script_status: ExitStatus,
    pub instructions: PathBuf,
    pub opened: bool,
}

pub fn execute<C, G, L, S, F, P>(
    ctx: &mut AppContext<C, G, L, S, F, P>,
    options: &InstallOptions,
) -> Result<InstallOutcome, AppError>
where
    C: ChatClient,
    G: RepositoryCloner,
    L: ReadmeLocator,
    S: ScriptRunner,
    F: FileLauncher,
    P: InputPrompter,
{
    let url_input = ctx.prompter_mut().repository_url()?;
    let repository = RepositoryReference::parse(&url_input)?;

    ctx.cloner().clone_repository(repository.url(), &options.work_dir)?;
    let repo_dir = options.work_dir.join(repository.local_name());
    if !repo_dir.is_dir() {
        return Err(AppError::RepositoryNotFound(repository.local_name().to_string()));
    }

    let readme = ReadmeDocument::load(&ctx.locator().locate(&repo_dir)?)?;
    println!("📄 Using {}", readme.path().display());

    println!("🤖 Generating install script...");
    let request = ChatRequest::install_script(&options.model, readme.content());
    let script = ctx.chat().complete(&request)?.into_completion()?;
    let install_script = write_artifact(&options.work_dir, Artifact::InstallScript, &script)?;
    println!("✅ Wrote {}", install_script.display());

    println!("🚀 Running {}...", install_script.display());
    let script_status = ctx.runner().run(&install_script, &options.work_dir)?;
    tracing::debug!(?script_status, "install script finished");

    let language_input = ctx.prompter_mut().language()?;
    let language = language_input.trim();
    if language.is_empty() {
        return Err(AppError::EmptyInput("language".to_string()));
    }

    println!("🤖 Generating simplified instructions in {}...", language);
    let request = ChatRequest::simplified_instructions(&options.model, readme.content(), language);
    let html = ctx.chat().complete(&request)?.into_completion()?;
    let instructions = write_artifact(&options.work_dir, Artifact::Instructions, &html)?;
    println!("✅ Wrote {}", instructions.display());

    let opened = options.open_instructions && ctx.launcher().open(&instructions);
    if !opened {
        if options.open_instructions {
            tracing::warn!(path = %instructions.display(), "could not open instructions");
        }
        println!("Open {} in your browser to read the instructions.", instructions.display());
    }

    Ok(InstallOutcome {
        repository,
        readme_path: readme.path().to_path_buf(),
        install_script,
        script_status,
        instructions,
        opened,
    })
}
