//! Actions for the console.

use crate::state::ConsoleBlock;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleAction {
    /// Append blocks in order
    AddBlocks(Vec<ConsoleBlock>),

    /// Open the console for a connection; scrollback of another connection is dropped
    Init(String),

    Reset,
}
