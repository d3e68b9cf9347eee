// server/src/cli/banner.rs

use crossterm::style::Stylize;

const BANNER_WIDTH: usize = 80;

pub fn print_banner() {
    let rule = "=".repeat(BANNER_WIDTH);
    println!();
    println!("{}", rule.as_str().cyan());
    println!("{}", centered("TRANSPORTATION NETWORK OPTIMIZATION ANALYSIS").bold());
    println!("{}", centered("Minimum Spanning Tree Algorithms"));
    println!("{}", rule.as_str().cyan());
    println!("Algorithms: Prim's & Kruskal's");
    println!("Metrics: Execution Time, Operation Count, Total Cost");
    println!("{}", rule.as_str().cyan());
    println!();
}

fn centered(text: &str) -> String {
    let padding = BANNER_WIDTH.saturating_sub(text.len()) / 2;
    format!("{}{}", " ".repeat(padding), text)
}
