use std::io;

use voipbin::{CommonAddress, PostCallsBody, VoipbinClient, string_ptr};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let access_key = std::env::var("VOIPBIN_ACCESS_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "VOIPBIN_ACCESS_KEY environment variable is required",
        )
    })?;
    let flow_id = std::env::var("VOIPBIN_FLOW_ID").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "VOIPBIN_FLOW_ID environment variable is required",
        )
    })?;
    let destinations = std::env::var("VOIPBIN_PHONES")
        .unwrap_or_else(|_| "+1234567890,+1234567891".to_owned())
        .split(',')
        .map(|phone| CommonAddress {
            target: string_ptr(phone.trim()),
            ..Default::default()
        })
        .collect::<Vec<_>>();

    let client = VoipbinClient::with_access_key(access_key)?;
    let body = PostCallsBody {
        source: Some(CommonAddress {
            target: string_ptr("+1234567892"),
            ..Default::default()
        }),
        destinations: Some(destinations),
        flow_id: Some(flow_id),
        ..Default::default()
    };

    let res = client.post_calls(body).await?;
    let Some(created) = res.json200() else {
        println!("call creation failed: {} {}", res.status(), res.body());
        return Ok(());
    };
    for (idx, call) in created.calls.iter().flatten().enumerate() {
        println!("created call {idx}: {:?}", call.id);
    }
    for (idx, groupcall) in created.groupcalls.iter().flatten().enumerate() {
        println!("created groupcall {idx}: {:?}", groupcall.id);
    }

    Ok(())
}
