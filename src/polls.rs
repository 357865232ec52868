use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PollId(pub u8);

impl fmt::Display for PollId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Poll {
    pub id: PollId,
    pub question: &'static str,
    pub options: &'static [&'static str],
}

impl Poll {
    /// Returns this poll's own copy of `option`, if it offers it.
    pub fn option(&self, option: &str) -> Option<&'static str> {
        self.options.iter().copied().find(|o| *o == option)
    }
}

pub const POLLS: &[Poll] = &[
    Poll {
        id: PollId(1),
        question: "Which cause should we take on next?",
        options: &["Education", "Health", "Environment"],
    },
    Poll {
        id: PollId(2),
        question: "Would you volunteer with us on a weekend?",
        options: &["Yes", "Maybe later"],
    },
    Poll {
        id: PollId(3),
        question: "How did you hear about Veera?",
        options: &["Friends & family", "Social media", "A community event"],
    },
];

pub fn poll(id: PollId) -> Option<&'static Poll> {
    POLLS.iter().find(|p| p.id == id)
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VoteError {
    #[error("no poll {0}")]
    UnknownPoll(PollId),
    #[error("poll {poll} has no option {option:?}")]
    UnknownOption { poll: PollId, option: String },
}

/// Last option chosen per poll. Lives only as long as the page does.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VoteMap(BTreeMap<PollId, &'static str>);

impl VoteMap {
    pub fn vote(&mut self, id: PollId, option: &str) -> Result<&'static str, VoteError> {
        let poll = poll(id).ok_or(VoteError::UnknownPoll(id))?;
        let chosen = poll.option(option).ok_or_else(|| VoteError::UnknownOption {
            poll: id,
            option: option.to_string(),
        })?;
        self.0.insert(id, chosen);
        Ok(chosen)
    }

    pub fn selection(&self, id: PollId) -> Option<&'static str> {
        self.0.get(&id).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_polls_have_two_or_three_options() {
        assert_eq!(POLLS.len(), 3);
        for (i, p) in POLLS.iter().enumerate() {
            assert_eq!(p.id, PollId(i as u8 + 1));
            assert!((2..=3).contains(&p.options.len()), "poll {}", p.id);
        }
    }

    #[test]
    fn empty_map_has_no_selection() {
        let votes = VoteMap::default();
        assert!(votes.is_empty());
        for p in POLLS {
            assert_eq!(votes.selection(p.id), None);
        }
    }

    #[test]
    fn last_vote_wins() {
        let mut votes = VoteMap::default();
        for option in ["Health", "Education", "Environment", "Health"] {
            votes.vote(PollId(1), option).unwrap();
        }
        assert_eq!(votes.selection(PollId(1)), Some("Health"));

        votes.vote(PollId(1), "Health").unwrap();
        assert_eq!(votes.selection(PollId(1)), Some("Health"));
    }

    #[test]
    fn polls_are_isolated() {
        let mut votes = VoteMap::default();
        votes.vote(PollId(2), "Yes").unwrap();
        votes.vote(PollId(3), "Social media").unwrap();

        for option in POLLS[0].options {
            votes.vote(PollId(1), option).unwrap();
            assert_eq!(votes.selection(PollId(2)), Some("Yes"));
            assert_eq!(votes.selection(PollId(3)), Some("Social media"));
        }
    }

    #[test]
    fn rejects_options_from_other_polls() {
        let mut votes = VoteMap::default();
        votes.vote(PollId(2), "Maybe later").unwrap();

        let err = votes.vote(PollId(2), "Education").unwrap_err();
        assert_eq!(
            err,
            VoteError::UnknownOption { poll: PollId(2), option: "Education".into() }
        );
        assert_eq!(votes.selection(PollId(2)), Some("Maybe later"));
    }

    #[test]
    fn rejects_unknown_poll_and_free_text() {
        let mut votes = VoteMap::default();
        assert_eq!(votes.vote(PollId(4), "Yes"), Err(VoteError::UnknownPoll(PollId(4))));
        assert!(votes.vote(PollId(1), "education").is_err());
        assert!(votes.vote(PollId(1), "").is_err());
        assert!(votes.is_empty());
    }

    #[test]
    fn error_messages_name_the_poll() {
        let err = VoteError::UnknownOption { poll: PollId(3), option: "TV".into() };
        assert_eq!(err.to_string(), "poll #3 has no option \"TV\"");
    }
}
