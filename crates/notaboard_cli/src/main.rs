//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `notaboard_core` linkage without any UI host.
//! - Replay a short board scenario and print the resulting board as JSON.

use notaboard_core::{
    BoardConfig, BoardSession, ColorPicker, DropTarget, SequentialIdGenerator,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("notaboard_core ping={}", notaboard_core::ping());
    println!("notaboard_core version={}", notaboard_core::core_version());

    match replay_demo() {
        Ok(board_json) => {
            println!("{board_json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("demo replay failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn replay_demo() -> Result<String, Box<dyn std::error::Error>> {
    let mut session = BoardSession::with_collaborators(
        BoardConfig::default(),
        SequentialIdGenerator::new("demo"),
        ColorPicker::seeded(Vec::new(), 0),
    )?;
    let root_id = session.board().root_id().to_string();

    let draft = session.note_draft("Hi", "hello")?;
    let first = session.add_note(&root_id, draft)?;
    let draft = session.note_draft("Groceries", "milk, eggs")?;
    let second = session.add_note(&root_id, draft)?;

    let later = session.add_container(Some("Later"))?;
    session.drop_item(&first.id, &DropTarget::Container(later.id));
    session.drop_item(&second.id, &DropTarget::NewContainer);

    Ok(serde_json::to_string_pretty(session.board())?)
}
