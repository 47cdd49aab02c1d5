/// Normalization usage example
use laxurl::{Normalization, Normalizer, decompose, enum_set, normalize_str};

fn main() {
    // Every step enabled
    let normalized = normalize_str("HTTP://Www.Google.COM:80/a/./b/../c//d?b=2&a=1#F%7e")
        .expect("Failed to normalize URL");
    println!("{normalized}"); // http://www.google.com/a/c/d?a=1&b=2#F~

    // Numeric and Punycode hosts
    for input in ["http://3232235777/", "http://0xC0A80101/", "http://xn--wgv71a.jp/"] {
        println!("{input} -> {}", normalize_str(input).expect("Failed to normalize URL"));
    }
    println!();

    // Selected steps only
    let url = decompose("http://Example.com:80//a/./b?b=1&a=2").expect("Failed to decompose URL");
    let normalizer = Normalizer::with_flags(enum_set!(
        Normalization::RemoveDefaultPort | Normalization::SortQuery
    ));
    println!(
        "{}",
        normalizer.normalize(&url).expect("Failed to normalize URL")
    ); // http://example.com//a/./b?a=2&b=1
}
