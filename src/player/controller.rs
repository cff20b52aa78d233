use crate::core::GameState;

/// プレイヤーが返す指し手要求
///
/// 指し手は表記のまま渡し、解釈と合法性の検証はゲームループが行う。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveRequest {
    /// "B2 B3" 形式の入力 (未検証)
    Notation(String),
    /// 対局の中断
    Exit,
    /// 指せる手が無い
    NoMove,
}

/// プレイヤー操作のtrait
pub trait PlayerController {
    fn choose_move(&self, state: &GameState) -> anyhow::Result<MoveRequest>;
    fn name(&self) -> &str;
    /// 人間の入力か (不正な入力を再入力させるかどうか)
    fn is_human(&self) -> bool {
        false
    }
}
