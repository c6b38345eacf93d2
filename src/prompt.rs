//! Fixed instruction prompts sent ahead of the screenshots.
//!
//! The suggested JSON shape lives only inside the prompt text; responses are
//! never parsed or checked against it.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Which of the two instruction texts to send.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PromptTemplate {
    /// Per-split cadence, merging of overlapping split pages, `null` for gaps.
    #[default]
    Detailed,
    /// Summary, heart-rate overview and pace/heart-rate splits only.
    Simplified,
}

impl PromptTemplate {
    pub const fn text(self) -> &'static str {
        match self {
            Self::Detailed => DETAILED_PROMPT,
            Self::Simplified => SIMPLIFIED_PROMPT,
        }
    }
}

pub const DETAILED_PROMPT: &str = r#"
**Role:** Professional Running Data Analyst.
**Task:** Extract detailed running metrics from the provided images and organize them into a structured JSON.

**Image Sequence Guide:**
1. **First Image:** Overall summary (Distance, Time, Pace, Date, etc.).
2. **Second Image:** Heart rate analysis.
   - **Note:** The Maximum Heart Rate (Max HR) value is specifically located in the **top-right corner of the heart rate graph.**
3. **Third Image onwards:** Detailed Split (Pace) charts. Each row typically contains KM, Pace, Average Heart Rate, and Cadence. Combine all pages into one sequential list.

**Extraction Requirements:**
- Extract numerical values only (omit units like 'km', 'bpm', 'spm').
- Maintain time formats: `HH:MM:SS` or `MM:SS`.
- **Splits Data:** For each kilometer, ensure you capture `pace`, `avg_hr`, and `cadence`.
- **Merge Logic:** If images overlap (e.g., KM 10 appears on both Image 3 and 4), merge them to ensure the `splits` list is unique and chronological.
- If a specific value (like cadence) is missing for a split, use `null`.

**Output Format (JSON):**
```json
{
  "summary": {
    "total_distance_km": 00.00,
    "total_time": "00:00:00",
    "average_pace": "0'00\"",
    "date": "YYYY-MM-DD"
  },
  "heart_rate_overall": {
    "average_bpm": 0,
    "max_bpm": 0,
    "zones_minutes": {
      "zone1": "mm:ss",
      "zone2": "mm:ss",
      "zone3": "mm:ss",
      "zone4": "mm:ss",
      "zone5": "mm:ss"
    }
  },
  "splits": [
    {
      "km": 1,
      "pace": "0'00\"",
      "avg_hr": 0,
      "cadence": 0
    },
    {
      "km": 2,
      "pace": "0'00\"",
      "avg_hr": 0,
      "cadence": 0
    }
  ]
}
"#;

pub const SIMPLIFIED_PROMPT: &str = r#"
**Role:** Professional Running Data Analyst.
**Task:** Extract running metrics from the provided images and organize them into JSON.

**Image Sequence Guide:**
1. **First Image:** Overall summary (Distance, Time, Pace, Date).
2. **Second Image:** Heart rate analysis. The Max HR value is in the top-right corner of the heart rate graph.
3. **Remaining Images:** Split (Pace) charts, one row per kilometer.

**Extraction Requirements:**
- Extract numerical values only (omit units).
- Keep time formats as `HH:MM:SS` or `MM:SS`.

**Output Format (JSON):**
```json
{
  "summary": {
    "total_distance_km": 00.00,
    "total_time": "00:00:00",
    "average_pace": "0'00\"",
    "date": "YYYY-MM-DD"
  },
  "heart_rate_overall": {
    "average_bpm": 0,
    "max_bpm": 0,
    "zones_minutes": {
      "zone1": "mm:ss",
      "zone2": "mm:ss",
      "zone3": "mm:ss",
      "zone4": "mm:ss",
      "zone5": "mm:ss"
    }
  },
  "splits": [
    { "km": 1, "pace": "0'00\"", "avg_hr": 0 }
  ]
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn detailed_is_default() {
        assert_eq!(PromptTemplate::default(), PromptTemplate::Detailed);
        assert_eq!(PromptTemplate::default().text(), DETAILED_PROMPT);
    }

    #[test]
    fn only_detailed_asks_for_cadence_and_merging() {
        assert!(DETAILED_PROMPT.contains("cadence"));
        assert!(DETAILED_PROMPT.contains("Merge Logic"));
        assert!(!SIMPLIFIED_PROMPT.contains("cadence"));
        assert!(!SIMPLIFIED_PROMPT.contains("Merge Logic"));
    }

    #[test]
    fn parses_lowercase_names() {
        assert_eq!(PromptTemplate::from_str("simplified").unwrap(), PromptTemplate::Simplified);
        assert_eq!(PromptTemplate::Detailed.to_string(), "detailed");
        assert!(PromptTemplate::from_str("short").is_err());
    }
}
