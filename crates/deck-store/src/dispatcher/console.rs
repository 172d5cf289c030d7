//! Console commands of the open connection

use super::ActionDispatcher;
use crate::actions::{Action, ConsoleAction};
use crate::error::{ActionError, ActionResult};
use crate::state::ConsoleBlock;

impl ActionDispatcher {
    /// Run a console command; the command and its output are appended together
    pub async fn run_console_cmd(&self, db_conn_id: &str, cmd: &str) -> ActionResult<String> {
        if cmd.is_empty() {
            return Err(ActionError::EmptyCommand);
        }

        let output = self.api.run_console_command(db_conn_id, cmd).await?;
        self.store.dispatch_if(
            |state| {
                state
                    .console
                    .db_connection_id
                    .as_deref()
                    .is_none_or(|id| id == db_conn_id)
            },
            Action::Console(ConsoleAction::AddBlocks(vec![
                ConsoleBlock::command(cmd),
                ConsoleBlock::output(output.clone()),
            ])),
        );
        Ok(output)
    }

    /// Open the console for a connection, keeping its scrollback if it was already open
    pub fn init_console(&self, db_conn_id: &str) {
        self.dispatch(Action::Console(ConsoleAction::Init(db_conn_id.to_string())));
    }
}
