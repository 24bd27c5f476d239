//! Test fixtures for location index testing

// Test modules
mod parser_tests;

/// A small location list covering several states, a duplicate display name
/// and an accented place name
pub fn sample_location_list() -> &'static str {
    "SanFranCA|CA|San Francisco, CA\n\
     OaklandCA|CA|Oakland, CA\n\
     SnJosCA|CA|San Jose, CA\n\
     PrtlndOR|Oregon|Portland, OR\n\
     PrtlndORb|Oregon|Portland, OR\n\
     TroisRvQC|Quebec|Trois-Rivi\u{e8}res, QC\n"
}
