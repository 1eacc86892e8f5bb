use aws_config::BehaviorVersion;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde_json::Value;

mod attributes;
mod handler;
mod notifier;

use notifier::SnsNotifier;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_ansi(false)
        .without_time()
        .with_max_level(tracing::Level::INFO)
        .init();

    let topic_arn = std::env::var("TOPIC_ARN").expect("TOPIC_ARN must be set");

    let config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let notifier = SnsNotifier::new(aws_sdk_sns::Client::new(&config), topic_arn);
    let notifier_ref = &notifier;

    // One notifier for the whole process; each invocation borrows it.
    let handler_func_closure = |event: LambdaEvent<Value>| async move {
        handler::function_handler(event, notifier_ref).await
    };
    run(service_fn(handler_func_closure)).await
}
