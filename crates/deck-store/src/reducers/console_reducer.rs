use std::sync::Arc;

use super::update;
use crate::actions::ConsoleAction;
use crate::state::ConsoleState;

pub fn reduce_console(state: Arc<ConsoleState>, action: &ConsoleAction) -> Arc<ConsoleState> {
    match action {
        ConsoleAction::AddBlocks(blocks) => {
            update(state, |s| s.blocks.extend(blocks.iter().cloned()))
        }
        ConsoleAction::Init(db_connection_id) => {
            if state.db_connection_id.as_deref() == Some(db_connection_id.as_str()) {
                return state;
            }
            update(state, |s| {
                if s.db_connection_id.is_some() {
                    log::debug!("Console switched connection, dropping scrollback");
                    s.blocks.clear();
                }
                s.db_connection_id = Some(db_connection_id.clone());
            })
        }
        ConsoleAction::Reset => Arc::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ConsoleBlock;

    fn with_blocks(conn: &str) -> Arc<ConsoleState> {
        let state = reduce_console(Arc::default(), &ConsoleAction::Init(conn.into()));
        reduce_console(
            state,
            &ConsoleAction::AddBlocks(vec![ConsoleBlock::command("db.stats()"), ConsoleBlock::output("{}")]),
        )
    }

    #[test]
    fn test_init_same_connection_keeps_scrollback() {
        let state = with_blocks("c1");
        let next = reduce_console(state.clone(), &ConsoleAction::Init("c1".into()));
        assert!(Arc::ptr_eq(&state, &next));
        assert_eq!(next.blocks.len(), 2);
    }

    #[test]
    fn test_init_other_connection_clears_scrollback() {
        let state = reduce_console(with_blocks("c1"), &ConsoleAction::Init("c2".into()));
        assert!(state.blocks.is_empty());
        assert_eq!(state.db_connection_id.as_deref(), Some("c2"));
    }

    #[test]
    fn test_first_init_keeps_blocks() {
        let state = reduce_console(
            Arc::default(),
            &ConsoleAction::AddBlocks(vec![ConsoleBlock::output("hello")]),
        );
        let state = reduce_console(state, &ConsoleAction::Init("c1".into()));
        assert_eq!(state.blocks.len(), 1);
    }
}
