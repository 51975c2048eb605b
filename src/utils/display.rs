//! Display and output formatting utilities

use crate::config::OutputFormat;
use crate::game_of_life::io::{bounding_box, generation_to_string};
use crate::game_of_life::{Analysis, BatchResult, Cell, Generation};
use anyhow::{Context, Result};
use itertools::Itertools;
use serde::Serialize;
use std::path::Path;

/// Format generations for display
pub struct GenerationFormatter;

/// JSON shape of one dumped generation
#[derive(Debug, Serialize)]
struct GenerationRecord<'a> {
    generation: usize,
    population: usize,
    cells: &'a [Cell],
}

impl GenerationFormatter {
    /// Format a generation over its bounding box
    pub fn format_generation_compact(generation: &Generation) -> String {
        if generation.is_empty() {
            return "(empty)\n".to_string();
        }
        generation_to_string(generation)
            .chars()
            .map(|ch| match ch {
                '1' => '█',
                '0' => '·',
                other => other,
            })
            .collect()
    }

    /// Format a generation with a header naming its index, population and origin
    pub fn format_generation(index: usize, generation: &Generation) -> String {
        let mut output = format!("Generation {} (Living: {})", index, generation.len());
        if let Some((min, _)) = bounding_box(generation) {
            output.push_str(&format!(" at {}", min));
        }
        output.push_str(":\n");
        output.push_str(&Self::format_generation_compact(generation));
        output
    }

    /// Generation as pretty JSON with cells in row-major order
    pub fn generation_to_json(index: usize, generation: &Generation) -> Result<String> {
        let cells: Vec<Cell> = generation.iter().copied().sorted().collect();
        let record = GenerationRecord {
            generation: index,
            population: generation.len(),
            cells: &cells,
        };
        serde_json::to_string_pretty(&record).context("Failed to serialize generation")
    }

    /// Render a generation in the requested output format
    pub fn render(index: usize, generation: &Generation, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(Self::format_generation(index, generation)),
            OutputFormat::Json => Self::generation_to_json(index, generation),
        }
    }

    /// Write one file per generation into `output_dir`
    pub fn save_generations<P: AsRef<Path>>(
        generations: &[(usize, Generation)],
        output_dir: P,
        format: OutputFormat,
    ) -> Result<()> {
        let output_dir = output_dir.as_ref();
        std::fs::create_dir_all(output_dir)
            .with_context(|| format!("Failed to create directory: {}", output_dir.display()))?;

        for (index, generation) in generations {
            let (file_name, content) = match format {
                OutputFormat::Text => (
                    format!("generation_{:04}.txt", index),
                    generation_to_string(generation),
                ),
                OutputFormat::Json => (
                    format!("generation_{:04}.json", index),
                    Self::generation_to_json(*index, generation)?,
                ),
            };
            let path = output_dir.join(file_name);
            std::fs::write(&path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }

        Ok(())
    }

    /// Format batch results as a summary table
    pub fn format_batch_summary(results: &[BatchResult]) -> String {
        let mut output = String::new();

        output.push_str("Batch Summary:\n");
        output.push_str("Pattern          | Living | Bounding box\n");
        output.push_str("-----------------|--------|-------------------------\n");

        for result in results {
            let extent = match bounding_box(&result.generation) {
                Some((min, max)) => format!("{} .. {}", min, max),
                None => "-".to_string(),
            };
            output.push_str(&format!(
                "{:16} | {:6} | {}\n",
                result.name, result.population, extent
            ));
        }

        output
    }

    /// Format an analysis alongside the pattern name
    pub fn format_analysis(name: &str, analysis: &Analysis) -> String {
        format!("=== {} ===\n{}\n", name, analysis)
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err() && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Blue => 34,
        }
    }
}
