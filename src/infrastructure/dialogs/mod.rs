pub mod native_deployment_prompt;
