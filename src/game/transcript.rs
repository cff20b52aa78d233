use anyhow::Context;
use std::fs;
use std::path::Path;

/// 出力先のビットフラグ
pub const CONSOLE: u8 = 0b01;
pub const FILE: u8 = 0b10;
pub const BOTH: u8 = CONSOLE | FILE;

/// 対局の記録 (コンソール表示とファイル用バッファ)
#[derive(Debug, Default, Clone)]
pub struct Transcript {
    lines: Vec<String>,
    /// false ならコンソールへは出さない (自己対局・テスト用)
    echo: bool,
}

impl Transcript {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            echo: true,
        }
    }

    /// コンソールに何も出さない
    pub fn silent() -> Self {
        Self {
            lines: Vec::new(),
            echo: false,
        }
    }

    pub fn log(&mut self, message: impl Into<String>) {
        self.log_to(message, BOTH);
    }

    pub fn log_to(&mut self, message: impl Into<String>, mode: u8) {
        let message = message.into();
        if mode & CONSOLE != 0 && self.echo {
            println!("{}", message);
        }
        if mode & FILE != 0 {
            self.lines.push(message);
        }
    }

    /// コンソールとファイルで表示を変えたい行 (色付き盤面など)
    pub fn log_split(&mut self, console: impl Into<String>, file: impl Into<String>) {
        self.log_to(console, CONSOLE);
        self.log_to(file, FILE);
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|l| l.contains(needle))
    }

    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        fs::write(path, self.lines.join("\n"))
            .with_context(|| format!("failed to write transcript {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_bits_select_destinations() {
        let mut t = Transcript::silent();
        t.log("both");
        t.log_to("console only", CONSOLE);
        t.log_to("file only", FILE);
        t.log_to("nowhere", 0);
        assert_eq!(t.lines(), ["both", "file only"]);
    }

    #[test]
    fn save_joins_lines() {
        let mut t = Transcript::silent();
        t.log("Turn #0");
        t.log_split("\u{1b}[36mcolored\u{1b}[0m", "plain");
        let path = std::env::temp_dir().join(format!("minichess-transcript-{}.txt", std::process::id()));
        t.save(&path).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, "Turn #0\nplain");
        let _ = fs::remove_file(&path);
    }
}
