use voipbin::{Auth, GetCallsParams, VoipbinClient, int_ptr};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = VoipbinClient::builder(Auth::from_env()?).build()?;

    let res = client
        .get_calls(GetCallsParams {
            page_size: int_ptr(10),
            ..Default::default()
        })
        .await?;

    let Some(page) = res.json200() else {
        println!("request failed: {} {}", res.status(), res.body());
        return Ok(());
    };
    for call in page.result.iter().flatten() {
        println!(
            "call: {:?}, status: {:?}, direction: {:?}",
            call.id, call.status, call.direction
        );
    }
    println!("next page token: {:?}", page.next_page_token);

    Ok(())
}
