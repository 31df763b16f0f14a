use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::WalkError;

/// A `(latitude, longitude)` pair. Serialized as `[lat, lng]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position(pub f64, pub f64);

impl Position {
    pub fn lat(&self) -> f64 {
        self.0
    }

    pub fn lng(&self) -> f64 {
        self.1
    }
}

/// ISO dates are understood, anything else is shown as written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WalkDate {
    Day(NaiveDate),
    Text(String),
}

impl WalkDate {
    /// `DD/MM/YYYY` for known days, used in the map tooltips.
    pub fn day_first(&self) -> String {
        match self {
            WalkDate::Day(day) => day.format("%d/%m/%Y").to_string(),
            WalkDate::Text(text) => text.clone(),
        }
    }
}

impl fmt::Display for WalkDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WalkDate::Day(day) => write!(f, "{}", day.format("%Y-%m-%d")),
            WalkDate::Text(text) => f.write_str(text),
        }
    }
}

impl From<NaiveDate> for WalkDate {
    fn from(day: NaiveDate) -> Self {
        WalkDate::Day(day)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Walk {
    pub title: String,
    pub date: WalkDate,
    /// Kilometers, as recorded. Never derived from `path`.
    pub distance: f64,
    pub participants: Vec<String>,
    pub path: Vec<Position>,
}

impl Walk {
    pub fn new(title: String, date: impl Into<WalkDate>, distance: f64, participants: Vec<String>, path: Vec<Position>) -> Self {
        Self {
            title,
            date: date.into(),
            distance,
            participants,
            path,
        }
    }

    pub fn has_participant(&self, name: &str) -> bool {
        self.participants.iter().any(|p| p == name)
    }
}

/// Result of decoding a walk list. Records that fail to decode are skipped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WalkList {
    pub walks: Vec<Walk>,
    pub rejected: Vec<WalkError>,
}

/// Decodes an ordered JSON array of walks, keeping the input order.
/// Only a document that is not an array fails as a whole.
pub fn parse_walks(json: &str) -> Result<WalkList, WalkError> {
    let records: Vec<serde_json::Value> = serde_json::from_str(json)?;

    let mut list = WalkList::default();
    for (index, record) in records.into_iter().enumerate() {
        match serde_json::from_value::<Walk>(record) {
            Ok(walk) => list.walks.push(walk),
            Err(err) => list.rejected.push(WalkError::InvalidWalk {
                index,
                reason: err.to_string(),
            }),
        }
    }

    Ok(list)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_walks_in_order() {
        let json = json!([
            {
                "title": "Grunewald",
                "date": "2017-03-05",
                "distance": 12.5,
                "participants": ["Anna", "Ben"],
                "path": [[52.47, 13.25], [52.48, 13.26]]
            },
            {
                "title": "Tegeler Fließ",
                "date": "2017-04-09",
                "distance": 8,
                "participants": [],
                "path": []
            }
        ])
        .to_string();

        let list = parse_walks(&json).unwrap();
        let walks = &list.walks;

        assert!(list.rejected.is_empty());
        assert_eq!(walks.len(), 2);
        assert_eq!(walks[0].title, "Grunewald");
        assert_eq!(walks[0].date, WalkDate::Day(NaiveDate::from_ymd_opt(2017, 3, 5).unwrap()));
        assert_eq!(walks[0].path[1], Position(52.48, 13.26));
        assert_eq!(walks[0].path[1].lng(), 13.26);
        assert_eq!(walks[1].title, "Tegeler Fließ");
        assert_eq!(walks[1].distance, 8.);
        assert!(walks[1].participants.is_empty());
    }

    #[test]
    fn empty_list_is_fine() {
        assert_eq!(parse_walks("[]").unwrap(), WalkList::default());
    }

    #[test]
    fn non_array_is_a_parse_error() {
        let err = parse_walks("{\"title\": 3}").unwrap_err();
        assert!(matches!(err, WalkError::Parse(_)));
    }

    #[test]
    fn broken_record_is_skipped_not_the_list() {
        let json = json!([
            { "title": "a", "date": "2017-01-01", "distance": 3, "participants": [], "path": [] },
            { "title": 3 },
            { "title": "c", "date": "2017-01-03", "distance": 2, "participants": [], "path": [] }
        ])
        .to_string();

        let list = parse_walks(&json).unwrap();

        assert_eq!(list.walks.iter().map(|w| w.title.as_str()).collect::<Vec<_>>(), vec!["a", "c"]);
        assert_eq!(list.rejected.len(), 1);
        assert!(matches!(list.rejected[0], WalkError::InvalidWalk { index: 1, .. }));
    }

    #[test]
    fn distances_are_taken_as_recorded() {
        let json = json!([
            { "title": "a", "date": "2017-01-01", "distance": 3, "participants": [], "path": [] },
            { "title": "b", "date": "2017-01-02", "distance": -1, "participants": [], "path": [] }
        ])
        .to_string();

        let list = parse_walks(&json).unwrap();
        assert_eq!(list.walks.len(), 2);
        assert_eq!(list.walks[1].distance, -1.);
    }

    #[test]
    fn free_form_dates_are_kept_as_text() {
        let json = json!([
            { "title": "a", "date": "5 March 2017", "distance": 3, "participants": [], "path": [] }
        ])
        .to_string();

        let list = parse_walks(&json).unwrap();
        let date = &list.walks[0].date;

        assert_eq!(*date, WalkDate::Text("5 March 2017".into()));
        assert_eq!(date.to_string(), "5 March 2017");
        assert_eq!(date.day_first(), "5 March 2017");
    }

    #[test]
    fn iso_dates_format_both_ways() {
        let date = WalkDate::from(NaiveDate::from_ymd_opt(2017, 3, 5).unwrap());
        assert_eq!(date.to_string(), "2017-03-05");
        assert_eq!(date.day_first(), "05/03/2017");
    }

    #[test]
    fn has_participant_matches_exact_names() {
        let walk = Walk::new(
            "Spree".into(),
            NaiveDate::from_ymd_opt(2018, 6, 1).unwrap(),
            4.,
            vec!["Anna".into(), "Ben".into()],
            Vec::new(),
        );

        assert!(walk.has_participant("Anna"));
        assert!(!walk.has_participant("Ann"));
        assert!(!walk.has_participant("Carla"));
    }
}
