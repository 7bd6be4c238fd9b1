use serde::{Deserialize, Serialize};

/// Maps the semantic schedule fields onto the header labels of the source
/// spreadsheet. The defaults match the Portuguese headers used by the site
/// schedule exports; a differently laid out sheet only needs a different map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnMap {
    pub description: String,
    pub planned_start: String,
    pub planned_end: String,
    pub actual_start: String,
    pub actual_end: String,
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            description: "Descrição dos Serviços".to_string(),
            planned_start: "Início Previsto".to_string(),
            planned_end: "Término Previsto".to_string(),
            actual_start: "Início Real".to_string(),
            actual_end: "Término Real".to_string(),
        }
    }
}

/// Resolved positions of the mapped columns within a header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnIndices {
    pub description: usize,
    pub planned_start: usize,
    pub planned_end: usize,
    pub actual_start: usize,
    pub actual_end: usize,
}

impl ColumnMap {
    /// Locate every mapped column in `headers`. Header cells are compared
    /// after trimming; the first match wins. Returns the label of the first
    /// column that cannot be found.
    pub fn resolve(&self, headers: &[&str]) -> Result<ColumnIndices, String> {
        let find = |label: &str| {
            headers
                .iter()
                .position(|h| h.trim() == label)
                .ok_or_else(|| label.to_string())
        };

        Ok(ColumnIndices {
            description: find(&self.description)?,
            planned_start: find(&self.planned_start)?,
            planned_end: find(&self.planned_end)?,
            actual_start: find(&self.actual_start)?,
            actual_end: find(&self.actual_end)?,
        })
    }
}
