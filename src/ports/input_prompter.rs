use crate::domain::AppError;

/// Port for line input from the user.
pub trait InputPrompter {
    /// Ask for the repository URL. Returns the raw, untrimmed answer.
    fn repository_url(&mut self) -> Result<String, AppError>;

    /// Ask for the language of the simplified instructions.
    fn language(&mut self) -> Result<String, AppError>;
}
