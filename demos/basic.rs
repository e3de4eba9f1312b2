use finlit_http::{ApiClient, ChatTurn, ClientOptions, RetryPolicy};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let api = ApiClient::from_env()
        .map_err(anyhow::Error::msg)?
        .with_options(ClientOptions {
            timeout_ms: Some(10_000),
            retry_policy: RetryPolicy::Transient,
            ..ClientOptions::default()
        });

    let (learning, news, questions) = tokio::join!(
        api.learning().all(None),
        api.news().all(None),
        api.questions().all(None),
    );
    println!("learning: {}", learning?);
    println!("news: {}", news?);
    println!("questions: {}", questions?);

    let history = [ChatTurn::user("What is an index fund?")];
    let reply = api
        .chat("How is it different from an ETF?", Some(&history))
        .await?;
    println!("chat: {reply}");

    Ok(())
}
