/// One entry of the console scrollback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleBlock {
    pub text: String,
    /// `true` for commands typed by the user, `false` for server output
    pub is_command: bool,
}

impl ConsoleBlock {
    pub fn command(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_command: true,
        }
    }

    pub fn output(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_command: false,
        }
    }
}

/// Console scrollback, scoped to one connection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsoleState {
    pub db_connection_id: Option<String>,
    pub blocks: Vec<ConsoleBlock>,
}
