//! Record types: what a single scan produces.

use serde::{Deserialize, Serialize};

/// Asset category attached to a scanned barcode.
///
/// A closed set: the selector UI can only ever produce one of these, so a
/// record can never carry an out-of-set label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Category {
    #[default]
    Monitor,
    Cabinet,
    Stabilizer,
}

impl Category {
    /// All categories, in selector display order. `ALL[0]` is the default.
    pub const ALL: [Category; 3] = [Category::Monitor, Category::Cabinet, Category::Stabilizer];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Monitor => "Monitor",
            Category::Cabinet => "Cabinet",
            Category::Stabilizer => "Stabilizer",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "monitor" => Ok(Category::Monitor),
            "cabinet" => Ok(Category::Cabinet),
            "stabilizer" => Ok(Category::Stabilizer),
            _ => Err(format!(
                "Unknown category: {}. Use monitor, cabinet, or stabilizer",
                s
            )),
        }
    }
}

/// One scanned barcode with the category that was selected at scan time.
///
/// The payload is opaque: empty or malformed strings are recorded verbatim,
/// and duplicates are kept as separate records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub barcode: String,
    pub category: Category,
}

impl HistoryRecord {
    pub fn new(barcode: impl Into<String>, category: Category) -> Self {
        Self {
            barcode: barcode.into(),
            category,
        }
    }

    /// Report line format: `<category>: <barcode>`.
    pub fn report_line(&self) -> String {
        format!("{}: {}", self.category, self.barcode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_category_is_first_option() {
        assert_eq!(Category::default(), Category::ALL[0]);
        assert_eq!(Category::default(), Category::Monitor);
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("monitor".parse::<Category>().unwrap(), Category::Monitor);
        assert_eq!("Cabinet".parse::<Category>().unwrap(), Category::Cabinet);
        assert_eq!(
            "STABILIZER".parse::<Category>().unwrap(),
            Category::Stabilizer
        );
        assert!("printer".parse::<Category>().is_err());
    }

    #[test]
    fn test_report_line_format() {
        let record = HistoryRecord::new("ABC123", Category::Monitor);
        assert_eq!(record.report_line(), "Monitor: ABC123");
    }

    #[test]
    fn test_empty_payload_recorded_verbatim() {
        let record = HistoryRecord::new("", Category::Cabinet);
        assert_eq!(record.barcode, "");
        assert_eq!(record.report_line(), "Cabinet: ");
    }
}
