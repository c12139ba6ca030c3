use clap::Args;
use quizalarm_core::{Config, GitHubClient};

use super::{runtime, CmdResult};

#[derive(Args)]
pub struct SigninArgs {
    /// GitHub username
    username: String,
    /// Print the profile as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: SigninArgs) -> CmdResult {
    let config = Config::load_or_default();
    let client = GitHubClient::from_config(&config.github);
    let user = runtime()?.block_on(client.fetch_user(&args.username))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&user)?);
        return Ok(());
    }
    println!("Signed in as {}", user.display_name());
    println!("@{}", user.login);
    println!("Followers: {}  Following: {}", user.followers, user.following);
    println!("Avatar: {}", user.avatar_url);
    Ok(())
}
