//! Patterns command implementation.

use crate::error::Result;
use distiller_nlp::PatternTable;

/// Execute the patterns command.
pub fn execute_patterns(table: &PatternTable) -> Result<()> {
    print!("{}", table.to_toml()?);
    Ok(())
}
