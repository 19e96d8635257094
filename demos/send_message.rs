use std::io;

use voipbin::{CommonAddress, PostMessagesBody, VoipbinClient, string_ptr};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let access_key = std::env::var("VOIPBIN_ACCESS_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "VOIPBIN_ACCESS_KEY environment variable is required",
        )
    })?;
    let destination = std::env::var("VOIPBIN_PHONE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "VOIPBIN_PHONE environment variable is required",
        )
    })?;
    let source = std::env::var("VOIPBIN_SOURCE").unwrap_or_else(|_| "+1234567892".to_owned());
    let text = std::env::var("VOIPBIN_MESSAGE")
        .unwrap_or_else(|_| "Greetings from VoIPBIN!".to_owned());

    let client = VoipbinClient::with_access_key(access_key)?;
    let body = PostMessagesBody {
        source: CommonAddress {
            target: string_ptr(source),
            ..Default::default()
        },
        destinations: vec![CommonAddress::tel(destination)?],
        text,
    };

    let res = client.post_messages(body).await?;
    match res.json200() {
        Some(message) => println!("message_id: {:?}", message.id),
        None => println!("sending failed: {} {}", res.status(), res.body()),
    }

    Ok(())
}
