//! Reads free text on stdin and prints the foods found, comma separated.

use foodmap_extract::{ScraperConfig, match_foods};
use std::error::Error;
use std::io::Read;

fn main() -> Result<(), Box<dyn Error>> {
    let config = ScraperConfig::bundled()?;

    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text)?;

    println!("{}", match_foods(&config.foods, &text).join(", "));
    Ok(())
}
