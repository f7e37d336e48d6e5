//! Level sets
//!
//! A level plan is a list of text rows in the standard symbol set. Level files
//! are JSON: an array of plans, each an array of row strings.

use std::path::Path;

use crate::error::{Result, SimError};

pub type LevelPlan = Vec<String>;

/// Decode a JSON level set
pub fn parse_level_plans(json: &str) -> Result<Vec<LevelPlan>> {
    let plans: Vec<LevelPlan> = serde_json::from_str(json)?;
    log::info!("Loaded {} level plans", plans.len());
    Ok(plans)
}

/// Read and decode a JSON level set from disk
pub fn load_level_plans(path: impl AsRef<Path>) -> Result<Vec<LevelPlan>> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| SimError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_level_plans(&json)
}

const DEFAULT_LEVELS: &[&[&str]] = &[
    &[
        "     v                 ",
        "                       ",
        "                       ",
        "                       ",
        "                       ",
        "  |xxx                 ",
        "  o                 o  ",
        "  x               = x  ",
        "  x          o o    x  ",
        "  x  @       xxxxx  x  ",
        "  xxxxx             x  ",
        "      x!!!!!!!!!!!!!x  ",
        "      xxxxxxxxxxxxxxx  ",
        "                       ",
    ],
    &[
        "        |           |  ",
        "                       ",
        "                       ",
        "                       ",
        "                       ",
        "                       ",
        "                       ",
        "                       ",
        "                       ",
        "     |                 ",
        "                       ",
        "         =      |      ",
        " @ |  o            o   ",
        "xxxxxxxxx!!!!!!!xxxxxxx",
        "                       ",
    ],
    &[
        "                       ",
        "                       ",
        "                       ",
        "    o                  ",
        "    x      | x!!x=     ",
        "         x             ",
        "                      x",
        "                       ",
        "                       ",
        "                       ",
        "               xxx     ",
        "                       ",
        "                       ",
        "       xxx  |          ",
        "                       ",
        " @                     ",
        "xxx                    ",
        "                       ",
    ],
];

/// Built-in level set used when no level file is given
pub fn default_level_plans() -> Vec<LevelPlan> {
    DEFAULT_LEVELS
        .iter()
        .map(|rows| rows.iter().map(|row| row.to_string()).collect())
        .collect()
}
