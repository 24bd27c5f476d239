//! Test fixtures for chart parser testing

// Test modules
mod header_tests;

/// Build a complete synthetic chart from raw Block A and Block B lines
pub fn chart_with(block_a: &[&str], block_b: &[&str]) -> String {
    let mut text = String::new();

    text.push_str("title = \"Oakland, CA Clear Sky Chart\"\n");
    text.push_str("version = \"-humidity\"\n");
    text.push_str("UTC_offset = \"-8\"\n");
    for i in 1..=4 {
        text.push_str(&format!("# legend line {}\n", i));
    }

    for line in block_a {
        text.push_str(line);
        text.push('\n');
    }
    text.push_str(")\n");

    for i in 1..=5 {
        text.push_str(&format!("# mid-chart legend {}\n", i));
    }

    for line in block_b {
        text.push_str(line);
        text.push('\n');
    }
    text.push_str(")\n");

    text
}

/// A well-formed three-hour chart whose Block A timestamps all have Block B
/// darkness values
pub fn sample_chart() -> String {
    chart_with(
        &[
            "(2024-01-01 00:00:00,3,2,1,0,0,99,88)",
            "(2024-01-01 01:00:00,4,3,2,1,2,99,88)",
            "(2024-01-01 02:00:00,10,5,5,2,4,99,88)",
        ],
        &[
            "(2024-01-01 00:00:00,0.75)",
            "(2024-01-01 01:00:00,0.50)",
            "(2024-01-01 02:00:00,-4.00)",
        ],
    )
}
