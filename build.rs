use std::env;

fn main() {
    let api_url = env::var("API_URL").unwrap_or_else(|_| String::from("http://localhost:3000"));

    println!("cargo:rerun-if-env-changed=API_URL");
    println!("cargo:rustc-env=API_URL={}", api_url);
}
