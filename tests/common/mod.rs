use assert_cmd::Command;

pub fn daybook_cmd() -> Command {
    let mut cmd = Command::cargo_bin("daybook").unwrap();
    cmd.env_remove("DAYBOOK_ROOT");
    cmd
}

/// Pull the first `[id]` out of list output
#[allow(dead_code)]
pub fn first_id(stdout: &str) -> u64 {
    let start = stdout.find('[').unwrap() + 1;
    let end = stdout.find(']').unwrap();
    stdout[start..end].parse().unwrap()
}
