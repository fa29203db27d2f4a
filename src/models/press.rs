//! Press model.
//!
//! The plant runs two presses. Jobs are routed by raw board width:
//! boards wider than the threshold go to the wide press (`PressA`),
//! everything else to the narrow press (`PressB`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ScheduleError;

/// A physical press that processes jobs one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Press {
    /// Wide-format press (board width above the threshold).
    PressA,
    /// Narrow-format press (board width at or below the threshold).
    PressB,
}

impl Press {
    /// Both presses, in display order.
    pub const ALL: [Press; 2] = [Press::PressA, Press::PressB];

    /// Routes a board width to a press.
    ///
    /// Strict comparison: a width exactly equal to `threshold` goes to `PressB`.
    pub fn for_width(width: f64, threshold: f64) -> Self {
        if width > threshold {
            Press::PressA
        } else {
            Press::PressB
        }
    }

    /// Stable identifier (`"PressA"` / `"PressB"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Press::PressA => "PressA",
            Press::PressB => "PressB",
        }
    }

    /// Whether this is the wide-format press.
    pub fn is_wide(&self) -> bool {
        matches!(self, Press::PressA)
    }
}

impl fmt::Display for Press {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Press {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PressA" => Ok(Press::PressA),
            "PressB" => Ok(Press::PressB),
            other => Err(ScheduleError::UnknownPress {
                press: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_routing() {
        assert_eq!(Press::for_width(60.3125, 50.0), Press::PressA);
        assert_eq!(Press::for_width(51.5, 50.0), Press::PressA);
        assert_eq!(Press::for_width(50.0, 50.0), Press::PressB); // strict
        assert_eq!(Press::for_width(42.5, 50.0), Press::PressB);
    }

    #[test]
    fn test_press_names() {
        assert_eq!(Press::PressA.to_string(), "PressA");
        assert_eq!("PressB".parse::<Press>().unwrap(), Press::PressB);
        assert!("Heidelberg".parse::<Press>().is_err());
        assert!(Press::PressA.is_wide());
        assert!(!Press::PressB.is_wide());
    }

    #[test]
    fn test_press_serde() {
        let json = serde_json::to_string(&Press::PressA).unwrap();
        assert_eq!(json, "\"PressA\"");
        let back: Press = serde_json::from_str("\"PressB\"").unwrap();
        assert_eq!(back, Press::PressB);
    }
}
