use laxurl::{Decomposer, decompose};

fn main() {
    // Decompose an absolute URL
    let url = decompose("http://j@ne:p@ssword@google.com:8080/p@th?q=@go#top")
        .expect("Failed to decompose URL");

    println!("Input: {url}"); // http://j@ne:p@ssword@google.com:8080/p@th?q=@go#top
    println!("Scheme: {}", url.scheme()); // http
    println!("Username: {}", url.user().username()); // j@ne
    println!("Password: {:?}", url.user().password()); // Some("p@ssword")
    println!("Host: {}", url.host()); // google.com
    println!("Port: {}", url.port()); // 8080
    println!("Path: {}", url.path()); // /p@th
    println!("Query: {}", url.query()); // q=@go
    println!("Fragment: {}", url.fragment()); // top
    println!();

    // Links found on pages are often relative
    for link in ["viewtopic.php?t=1045", "../img/logo.png", "#comments", "localhost:3000"] {
        let url = decompose(link).expect("Failed to decompose URL");
        println!(
            "{link}: path={:?} host={:?} relative={}",
            url.path(),
            url.host(),
            url.is_relative()
        );
    }
    println!();

    // Reserved words and filename extensions are configurable
    let decomposer = Decomposer::new()
        .reserved_scheme("devbox")
        .filename_extension(".asp");
    let url = decomposer
        .decompose("devbox:9000/health")
        .expect("Failed to decompose URL");
    println!("Host: {}, Port: {}", url.host(), url.port()); // devbox, 9000
}
