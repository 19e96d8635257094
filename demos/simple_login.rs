use std::io;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use voipbin::{AUTH_SERVER_ADDRESS, Auth, LoginRequest, VoipbinClient};

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let username = std::env::var("VOIPBIN_USERNAME").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "VOIPBIN_USERNAME environment variable is required",
        )
    })?;
    let password = std::env::var("VOIPBIN_PASSWORD").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "VOIPBIN_PASSWORD environment variable is required",
        )
    })?;
    let verbose = std::env::var("VOIPBIN_VERBOSE").is_ok_and(|value| value == "1");

    if verbose {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new("voipbin=debug"))
            .init();
    }

    println!("attempting login for user: {username}");
    println!("target server: {AUTH_SERVER_ADDRESS}");

    let client = VoipbinClient::builder(Auth::basic(username.clone(), password.clone()))
        .base_url(AUTH_SERVER_ADDRESS)
        .debug(verbose)
        .build()?;

    let res = client
        .post_auth_login(LoginRequest { username, password })
        .await?;
    println!("response status: {}", res.status());

    let Some(login) = res.json200() else {
        println!("login failed: {}", res.status());
        if !res.body().is_empty() {
            println!("response body: {}", res.body());
        }
        return Ok(ExitCode::FAILURE);
    };

    println!("username: {}", login.username);
    println!("token:    {}", login.token);
    Ok(ExitCode::SUCCESS)
}
