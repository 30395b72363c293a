use assert_cmd::Command;

pub fn zenith_cmd() -> Command {
    let mut cmd = Command::cargo_bin("zenith").unwrap();
    cmd.env_remove("ZENITH_ROOT");
    cmd
}
