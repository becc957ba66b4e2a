//! Run-length encoding of scan events into a [`Delta`], and its JSON form.

use crate::{
    error::Result,
    types::{Delta, DeltaRun, DiffEvent, Segment},
};

/// Collapse `events` into delta segments.
///
/// Consecutive matches `p, p+1, …` become one `[p, n]` run. A match that
/// does not continue the open run closes it and opens a new one. A literal
/// closes the open run and is copied verbatim.
pub fn encode(events: &[DiffEvent<'_>], chunk_size: usize) -> Delta {
    let mut segments = Vec::new();
    let mut open: Option<DeltaRun> = None;

    for event in events {
        match *event {
            DiffEvent::Match(pos) => match open.as_mut() {
                Some(run) if run.end() == pos => run.len += 1,
                _ => {
                    if let Some(run) = open.replace(DeltaRun::new(pos, 1)) {
                        segments.push(Segment::Run(run));
                    }
                }
            },
            DiffEvent::Literal(data) => {
                if let Some(run) = open.take() {
                    segments.push(Segment::Run(run));
                }
                if !data.is_empty() {
                    segments.push(Segment::Literal(data.to_owned()));
                }
            }
        }
    }
    if let Some(run) = open {
        segments.push(Segment::Run(run));
    }

    tracing::debug!(events = events.len(), segments = segments.len(), "encoded delta");
    Delta {
        modified: true,
        chunk_size,
        segments,
    }
}

impl Delta {
    /// Serialize to the wire form.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use DiffEvent::{Literal, Match};

    fn run(start: usize, len: usize) -> Segment {
        Segment::Run(DeltaRun::new(start, len))
    }

    #[test]
    fn no_events() {
        let delta = encode(&[], 12);
        assert!(delta.modified);
        assert!(delta.segments.is_empty());
    }

    #[test]
    fn consecutive_matches_form_one_run() {
        let delta = encode(&[Match(3), Match(4), Match(5)], 12);
        assert_eq!(delta.segments, vec![run(3, 3)]);
    }

    #[test]
    fn gap_starts_new_run() {
        let delta = encode(&[Match(3), Match(4), Match(9), Match(10), Match(2)], 12);
        assert_eq!(delta.segments, vec![run(3, 2), run(9, 2), run(2, 1)]);
    }

    #[test]
    fn repeated_position_is_not_a_continuation() {
        let delta = encode(&[Match(0), Match(0)], 12);
        assert_eq!(delta.segments, vec![run(0, 1), run(0, 1)]);
    }

    #[test]
    fn literal_closes_run() {
        let delta = encode(
            &[Match(0), Literal("XX"), Match(1), Match(2), Literal("tail")],
            12,
        );
        assert_eq!(delta.segments, vec![
            run(0, 1),
            "XX".into(),
            run(1, 2),
            "tail".into()
        ]);
    }

    #[test]
    fn run_split_by_literal_is_not_merged() {
        let delta = encode(&[Match(0), Literal("x"), Match(1)], 12);
        assert_eq!(delta.segments, vec![run(0, 1), "x".into(), run(1, 1)]);
    }

    #[test]
    fn adjacent_literals_stay_separate() {
        let delta = encode(&[Literal("ab"), Literal("cd")], 4);
        assert_eq!(delta.segments, vec!["ab".into(), "cd".into()]);
    }

    #[test]
    fn wire_form() {
        let delta = encode(&[Match(0), Literal("XX"), Match(1), Match(2)], 12);
        let json = delta.to_json().unwrap();
        assert_eq!(json, r#"{"modify":true,"chunkSize":12,"data":[[0,1],"XX",[1,2]]}"#);
        assert_eq!(Delta::from_json(&json).unwrap(), delta);
    }

    #[test]
    fn wire_form_unmodified() {
        let json = Delta::unmodified(7).to_json().unwrap();
        assert_eq!(json, r#"{"modify":false,"chunkSize":7,"data":[]}"#);
    }

    #[test]
    fn literal_escaping() {
        let delta = encode(&[Literal("a\"b\n")], 12);
        let json = delta.to_json().unwrap();
        assert_eq!(json, r#"{"modify":true,"chunkSize":12,"data":["a\"b\n"]}"#);
        assert_eq!(Delta::from_json(&json).unwrap(), delta);
    }
}
