//! File I/O for seed patterns
//!
//! Format: each line is a row, `1` for a live cell and `0` for a dead one.
//! The first character of the first row is cell `(0, 0)`; `x` grows to the
//! right and `y` grows downwards.

use super::cell::{Cell, Generation};
use crate::error::PatternError;
use anyhow::{Context, Result};
use itertools::Itertools;
use log::warn;
use std::path::Path;

/// Load a seed from a text file
pub fn load_generation_from_file<P: AsRef<Path>>(path: P) -> Result<Generation> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read pattern file: {}", path.as_ref().display()))?;

    parse_generation(&content)
        .with_context(|| format!("Failed to parse pattern from file: {}", path.as_ref().display()))
}

/// Parse a seed from its text representation
pub fn parse_generation(content: &str) -> Result<Generation, PatternError> {
    let lines: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let expected = match lines.first() {
        Some(first) => first.chars().count(),
        None => return Err(PatternError::Empty),
    };

    let mut generation = Generation::new();
    for (row, line) in lines.iter().enumerate() {
        let len = line.chars().count();
        if len != expected {
            return Err(PatternError::InconsistentRow { row, len, expected });
        }

        for (col, ch) in line.chars().enumerate() {
            match ch {
                '0' => {}
                '1' => {
                    generation.insert(Cell::new(col as i64, row as i64));
                }
                _ => return Err(PatternError::InvalidCharacter { ch, row, col }),
            }
        }
    }

    Ok(generation)
}

/// Smallest `(min, max)` corners containing every live cell, or `None` if empty
pub fn bounding_box(generation: &Generation) -> Option<(Cell, Cell)> {
    let (min_x, max_x) = generation.iter().map(|cell| cell.x).minmax().into_option()?;
    let (min_y, max_y) = generation.iter().map(|cell| cell.y).minmax().into_option()?;
    Some((Cell::new(min_x, min_y), Cell::new(max_x, max_y)))
}

/// Render a generation over its bounding box.
///
/// The output is relative to the bounding box, so the pattern's origin is
/// not preserved. An empty generation renders as an empty string.
pub fn generation_to_string(generation: &Generation) -> String {
    let Some((min, max)) = bounding_box(generation) else {
        return String::new();
    };

    let mut result = String::new();
    for y in min.y..=max.y {
        for x in min.x..=max.x {
            result.push(if generation.contains(&Cell::new(x, y)) { '1' } else { '0' });
        }
        result.push('\n');
    }
    result
}

/// Save a generation to a text file
pub fn save_generation_to_file<P: AsRef<Path>>(generation: &Generation, path: P) -> Result<()> {
    let content = generation_to_string(generation);

    // Create parent directories if they don't exist
    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write pattern to file: {}", path.as_ref().display()))?;

    Ok(())
}

/// Load every `.txt` pattern in a directory, sorted by file stem
pub fn load_generations_from_directory<P: AsRef<Path>>(
    dir_path: P,
) -> Result<Vec<(String, Generation)>> {
    let dir = std::fs::read_dir(&dir_path)
        .with_context(|| format!("Failed to read directory: {}", dir_path.as_ref().display()))?;

    let mut generations = Vec::new();

    for entry in dir {
        let entry = entry.context("Failed to read directory entry")?;
        let path = entry.path();

        if !path.is_file() || path.extension().map_or(true, |ext| ext != "txt") {
            continue;
        }

        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("unknown")
            .to_string();

        match load_generation_from_file(&path) {
            Ok(generation) => generations.push((name, generation)),
            Err(e) => warn!("Skipping {}: {:#}", path.display(), e),
        }
    }

    generations.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(generations)
}

/// Write a few well-known seeds into `output_dir`
pub fn create_example_patterns<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let patterns = [
        ("glider.txt", "010\n001\n111\n"),
        ("blinker.txt", "000\n111\n000\n"),
        ("block.txt", "0000\n0110\n0110\n0000\n"),
        ("beacon.txt", "1100\n1100\n0011\n0011\n"),
    ];

    for (file_name, content) in patterns {
        std::fs::write(dir.join(file_name), content)
            .with_context(|| format!("Failed to write {}", file_name))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_of_life::cell::generation_from;
    use tempfile::tempdir;

    #[test]
    fn test_parse_generation() {
        let generation = parse_generation("010\n101\n010\n").unwrap();
        assert_eq!(generation, generation_from([(1, 0), (0, 1), (2, 1), (1, 2)]));
    }

    #[test]
    fn test_parse_ignores_blank_lines_and_whitespace() {
        let generation = parse_generation("\n  11 \n\n  11\n\n").unwrap();
        assert_eq!(generation, generation_from([(0, 0), (1, 0), (0, 1), (1, 1)]));
    }

    #[test]
    fn test_generation_to_string_uses_bounding_box() {
        let generation = generation_from([(5, -3), (7, -3), (6, -2)]);
        assert_eq!(generation_to_string(&generation), "101\n010\n");
        assert_eq!(generation_to_string(&Generation::new()), "");
    }

    #[test]
    fn test_bounding_box() {
        let generation = generation_from([(2, 4), (-1, 0), (3, 1)]);
        assert_eq!(bounding_box(&generation), Some((Cell::new(-1, 0), Cell::new(3, 4))));
        assert_eq!(bounding_box(&Generation::new()), None);
    }

    #[test]
    fn test_file_operations() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("nested/glider.txt");

        let original = generation_from([(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]);
        save_generation_to_file(&original, &file_path).unwrap();
        let loaded = load_generation_from_file(&file_path).unwrap();

        assert_eq!(original, loaded);
    }

    #[test]
    fn test_invalid_input() {
        assert_eq!(
            parse_generation("010\n1X1\n010\n"),
            Err(PatternError::InvalidCharacter { ch: 'X', row: 1, col: 1 })
        );
        assert_eq!(
            parse_generation("010\n11\n010\n"),
            Err(PatternError::InconsistentRow { row: 1, len: 2, expected: 3 })
        );
        assert_eq!(parse_generation(""), Err(PatternError::Empty));
        assert_eq!(parse_generation("\n   \n"), Err(PatternError::Empty));
    }

    #[test]
    fn test_all_dead_pattern_is_an_empty_generation() {
        assert!(parse_generation("000\n000\n").unwrap().is_empty());
    }

    #[test]
    fn test_create_and_load_example_patterns() {
        let temp_dir = tempdir().unwrap();
        create_example_patterns(temp_dir.path()).unwrap();
        std::fs::write(temp_dir.path().join("broken.txt"), "01\n2\n").unwrap();
        std::fs::write(temp_dir.path().join("notes.md"), "not a pattern").unwrap();

        let loaded = load_generations_from_directory(temp_dir.path()).unwrap();
        let names: Vec<&str> = loaded.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["beacon", "blinker", "block", "glider"]);

        let glider = &loaded[3].1;
        assert_eq!(glider.len(), 5);
    }
}
