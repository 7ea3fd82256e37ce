use aws_sdk_cloudformation::types::Output;
use reqwest::Client;
use std::env;

pub fn http_client() -> Client {
    Client::builder()
        .timeout(std::time::Duration::from_secs(5))
        .build()
        .unwrap()
}

pub async fn retrieve_api_endpoint() -> String {
    let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let cloudformation_client = aws_sdk_cloudformation::Client::new(&config);
    let stack_name = env::var("STACK_NAME").unwrap_or("movies-api".to_string());

    let get_stacks = cloudformation_client
        .describe_stacks()
        .set_stack_name(Some(stack_name.clone()))
        .send()
        .await
        .expect(format!("CloudFormation stack named {} should exist", stack_name).as_str());

    let outputs = get_stacks.stacks.expect("Get stack request should return an array")[0]
        .clone()
        .outputs
        .expect("The first stack in the get stacks response should have outputs");
    let api_outputs: Vec<Output> = outputs
        .into_iter()
        .filter(|output| output.output_key.as_deref() == Some("MoviesApiEndpoint"))
        .collect();

    api_outputs[0]
        .clone()
        .output_value
        .expect("CloudFormation stack should have an output named `MoviesApiEndpoint`")
}
