use assert_cmd::Command;

pub fn gratitude_cmd() -> Command {
    Command::cargo_bin("gratitude").unwrap()
}
