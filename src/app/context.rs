use crate::ports::{
    ChatClient, FileLauncher, InputPrompter, ReadmeLocator, RepositoryCloner, ScriptRunner,
};

/// Application context holding the external collaborators of a run.
pub struct AppContext<C, G, L, S, F, P>
where
    C: ChatClient,
    G: RepositoryCloner,
    L: ReadmeLocator,
    S: ScriptRunner,
    F: FileLauncher,
    P: InputPrompter,
{
    chat: C,
    cloner: G,
    locator: L,
    runner: S,
    launcher: F,
    prompter: P,
}

impl<C, G, L, S, F, P> AppContext<C, G, L, S, F, P>
where
    C: ChatClient,
    G: RepositoryCloner,
    L: ReadmeLocator,
    S: ScriptRunner,
    F: FileLauncher,
    P: InputPrompter,
{
    /// Create a new application context.
    pub fn new(chat: C, cloner: G, locator: L, runner: S, launcher: F, prompter: P) -> Self {
        Self { chat, cloner, locator, runner, launcher, prompter }
    }

    /// Get a reference to the chat-completion client.
    pub fn chat(&self) -> &C {
        &self.chat
    }

    /// Get a reference to the repository cloner.
    pub fn cloner(&self) -> &G {
        &self.cloner
    }

    /// Get a reference to the README locator.
    pub fn locator(&self) -> &L {
        &self.locator
    }

    /// Get a reference to the install script runner.
    pub fn runner(&self) -> &S {
        &self.runner
    }

    /// Get a reference to the file launcher.
    pub fn launcher(&self) -> &F {
        &self.launcher
    }

    /// Get a mutable reference to the input prompter.
    pub fn prompter_mut(&mut self) -> &mut P {
        &mut self.prompter
    }
}
