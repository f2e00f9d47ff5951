use assert_cmd::Command;

pub fn vent_cmd() -> Command {
    let mut cmd = Command::cargo_bin("vent").unwrap();
    cmd.env_remove("VENT_ROOT");
    cmd
}

/// Pull the id of a just-saved entry out of `vent add` stdout.
#[allow(dead_code)]
pub fn extract_id(stdout: &str) -> String {
    stdout
        .lines()
        .find_map(|line| line.strip_prefix("Entry id: "))
        .expect("add output should contain an entry id")
        .trim()
        .to_string()
}
