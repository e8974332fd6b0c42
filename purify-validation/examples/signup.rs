//! Signup payload validation
//!
//! Run with `RUST_LOG=purify_validation=trace cargo run --example signup` to
//! see rule dispatch.

use purify_validation::{Validate, register_validator};
use tracing_subscriber::EnvFilter;

#[derive(Validate)]
struct SignupRequest {
    #[purify("required|min(3)|max(20)|alphanumeric")]
    username: String,
    #[serde(rename = "emailAddress")]
    #[purify("required|email")]
    email: String,
    #[purify("required|min(8)|strong")]
    password: String,
    #[purify("url|beta_feature")]
    homepage: Option<String>,
    #[purify("numeric")]
    age: u32,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    purify_validation::init();

    register_validator("strong", |value: &str, _: &str| {
        let has_digit = value.chars().any(|c| c.is_ascii_digit());
        let has_upper = value.chars().any(|c| c.is_ascii_uppercase());
        if has_digit && has_upper {
            String::new()
        } else {
            "password needs an uppercase letter and a digit".to_string()
        }
    });

    let request = SignupRequest {
        username: "jo".to_string(),
        email: "jo@example".to_string(),
        password: "hunter2".to_string(),
        homepage: Some("https://jo.example.com".to_string()),
        age: 27,
    };

    match request.validate() {
        Ok(()) => println!("valid"),
        Err(report) => {
            println!("{}", report.message);
            println!("{:#}", report.to_json());
        }
    }
}
