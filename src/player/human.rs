use crate::core::GameState;
use crate::player::{MoveRequest, PlayerController};
use anyhow::Context;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// 人間の入力元
pub trait MoveSource {
    /// 1行読む。入力が尽きたら `None`
    fn read_line(&self, prompt: &str) -> anyhow::Result<Option<String>>;
}

/// 標準入力からプロンプト付きで読む
pub struct StdinSource;

impl MoveSource for StdinSource {
    fn read_line(&self, prompt: &str) -> anyhow::Result<Option<String>> {
        let mut stdout = io::stdout();
        write!(stdout, "{}", prompt)?;
        stdout.flush()?;

        let mut line = String::new();
        let read = io::stdin()
            .lock()
            .read_line(&mut line)
            .context("failed to read move from stdin")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// あらかじめ用意した入力を順に返す (テスト・リプレイ用)
#[derive(Default)]
pub struct ScriptedSource {
    lines: RefCell<VecDeque<String>>,
}

impl ScriptedSource {
    pub fn new<S: AsRef<str>>(lines: &[S]) -> Self {
        Self {
            lines: RefCell::new(lines.iter().map(|s| s.as_ref().to_string()).collect()),
        }
    }

    pub fn remaining(&self) -> usize {
        self.lines.borrow().len()
    }
}

impl MoveSource for ScriptedSource {
    fn read_line(&self, _prompt: &str) -> anyhow::Result<Option<String>> {
        Ok(self.lines.borrow_mut().pop_front())
    }
}

pub struct HumanController<S: MoveSource> {
    pub name: String,
    source: S,
}

impl<S: MoveSource> HumanController<S> {
    pub fn new(name: &str, source: S) -> Self {
        Self {
            name: name.to_string(),
            source,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}

impl<S: MoveSource> PlayerController for HumanController<S> {
    fn choose_move(&self, state: &GameState) -> anyhow::Result<MoveRequest> {
        let prompt = format!("{} to move: ", state.turn);
        match self.source.read_line(&prompt)? {
            // 入力が尽きた場合も中断扱い
            None => Ok(MoveRequest::Exit),
            Some(line) if line.trim().eq_ignore_ascii_case("exit") => Ok(MoveRequest::Exit),
            Some(line) => Ok(MoveRequest::Notation(line)),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_human(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_lines_pass_through_unparsed() {
        let human = HumanController::new("Human", ScriptedSource::new(&["B2 B3", "zz top"]));
        let state = GameState::new();
        assert_eq!(
            human.choose_move(&state).unwrap(),
            MoveRequest::Notation("B2 B3".to_string())
        );
        assert_eq!(
            human.choose_move(&state).unwrap(),
            MoveRequest::Notation("zz top".to_string())
        );
        assert_eq!(human.source().remaining(), 0);
    }

    #[test]
    fn exit_and_end_of_input() {
        let human = HumanController::new("Human", ScriptedSource::new(&[" EXIT "]));
        let state = GameState::new();
        assert_eq!(human.choose_move(&state).unwrap(), MoveRequest::Exit);
        assert_eq!(human.choose_move(&state).unwrap(), MoveRequest::Exit);
        assert!(human.is_human());
    }
}
