use clap::Command;
use clap_complete::Shell;

use super::CmdResult;

pub fn run(shell: Shell, mut cmd: Command) -> CmdResult {
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
    Ok(())
}
