//! Fixed instruction texts sent to the model.

/// System role for the install-script request.
pub const INSTALL_SCRIPT_SYSTEM: &str = "You are an expert DevOps engineer. You read project \
documentation and write reliable shell installation scripts for it.";

/// Trailing instruction of the install-script user message.
pub const INSTALL_SCRIPT_INSTRUCTION: &str = "Based on the README content above, write a single \
self-contained bash script that installs this project and its dependencies on the current \
machine. Respond with the script only: no explanations, no commentary, and no markdown code \
fences.";

/// System role for the simplified-instructions request.
pub const INSTRUCTIONS_SYSTEM: &str = "You are a technical writer who explains software \
installation to beginners in clear, simple language.";

/// Trailing instruction of the simplified-instructions user message.
pub const INSTRUCTIONS_INSTRUCTION: &str = "Rewrite the installation instructions from the README \
content above as simplified steps, keeping only the essential ones, written in the requested \
language. Return only the HTML body content with no surrounding commentary and no markdown code \
fences.";

/// User message for the install-script request.
pub fn install_script_user_message(readme: &str) -> String {
    format!("README content:\n{}\n\n{}", readme, INSTALL_SCRIPT_INSTRUCTION)
}

/// User message for the simplified-instructions request.
pub fn instructions_user_message(readme: &str, language: &str) -> String {
    format!(
        "README content:\n{}\n\nLanguage requested: {}\n\n{}",
        readme, language, INSTRUCTIONS_INSTRUCTION
    )
}
